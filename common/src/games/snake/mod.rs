pub mod direction_guard;
pub mod engine;
pub mod food;
mod game_state;
mod grid;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use game_state::GameState;
pub use grid::Grid;
pub use session::{
    SessionCommand, SessionError, SessionHandle, SessionSummary, SnakeSession, spawn_session,
};
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use snapshot::{GameSnapshot, RenderSnapshot, StatusSnapshot};
pub use types::{Direction, EndReason, Phase, Position};
