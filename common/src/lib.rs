pub mod config;
pub mod defaults;
pub mod games;
pub mod logger;

pub use games::snake::{
    Direction, EndReason, GameSnapshot, GameState, Grid, Phase, Position, SnakeSettings,
};
