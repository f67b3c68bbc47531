use serde::Serialize;

use super::game_state::GameState;
use super::types::{EndReason, Phase, Position};

/// What a renderer draws. Snake segments are head-first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot {
    pub snake: Vec<Position>,
    pub food: Option<Position>,
}

/// What a controller shows next to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub score: u32,
    pub phase: Phase,
    pub end_reason: Option<EndReason>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub tick: u64,
    pub render: RenderSnapshot,
    pub status: StatusSnapshot,
}

impl GameSnapshot {
    pub fn capture(state: &GameState, tick: u64) -> Self {
        Self {
            tick,
            render: RenderSnapshot::from(state),
            status: StatusSnapshot::from(state),
        }
    }
}

impl From<&GameState> for RenderSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            snake: state.snake().segments().copied().collect(),
            food: state.food(),
        }
    }
}

impl From<&GameState> for StatusSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            score: state.score(),
            phase: state.phase(),
            end_reason: state.end_reason(),
        }
    }
}
