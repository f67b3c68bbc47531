use crate::games::snake::Direction;

pub const FIELD_WIDTH: usize = 20;
pub const FIELD_HEIGHT: usize = 20;
pub const TICK_INTERVAL_MS: u32 = 150;
pub const SCORE_PER_FOOD: u32 = 10;
pub const START_X: i32 = 10;
pub const START_Y: i32 = 10;
pub const START_DIRECTION: Direction = Direction::Right;
pub const MAX_FOOD_ATTEMPTS: usize = 100;
