use crate::games::RandomSource;
use crate::{log, log_debug};
use super::food;
use super::game_state::GameState;
use super::types::{EndReason, Phase, Position};

/// Advances a running game by one cell.
///
/// The pending direction is committed first. A wall or body hit ends the game and leaves
/// snake, food and score as they were. Eating keeps the tail and places new food over the
/// grown body; otherwise the tail is dropped.
pub fn tick(mut state: GameState, rng: &mut impl RandomSource) -> GameState {
    if state.phase != Phase::Running {
        return state;
    }

    state.direction = state.pending_direction;
    let next_head = state.snake.head().step(state.direction);

    if let Err(reason) = check_collision(&state, next_head) {
        state.phase = Phase::GameOver;
        state.end_reason = Some(reason);
        log!(
            "Game over: {:?} at ({}, {}). Score: {}",
            reason,
            next_head.x,
            next_head.y,
            state.score
        );
        return state;
    }

    state.snake.push_head(next_head);

    if state.food == Some(next_head) {
        state.score += state.settings.score_per_food;
        log!(
            "Ate food at ({}, {}). Score: {}",
            next_head.x,
            next_head.y,
            state.score
        );

        state.food = food::generate(
            &state.snake,
            &state.settings.grid(),
            rng,
            state.settings.max_food_attempts,
        );
        match state.food {
            Some(pos) => log_debug!("Food spawned at ({}, {})", pos.x, pos.y),
            None => {
                state.phase = Phase::BoardCleared;
                state.end_reason = Some(EndReason::BoardCleared);
                log!("Board cleared with length {}. Score: {}", state.snake.len(), state.score);
            }
        }
    } else {
        state.snake.pop_tail();
    }

    state
}

fn check_collision(state: &GameState, next_head: Position) -> Result<(), EndReason> {
    if !state.settings.grid().contains(next_head) {
        return Err(EndReason::WallCollision);
    }
    if state.snake.occupies(&next_head) {
        return Err(EndReason::SelfCollision);
    }
    Ok(())
}
