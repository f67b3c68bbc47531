use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults;
use super::grid::Grid;
use super::types::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval_ms: u32,
    pub score_per_food: u32,
    pub start_x: i32,
    pub start_y: i32,
    pub start_direction: Direction,
    #[serde(default = "default_max_food_attempts")]
    pub max_food_attempts: usize,
}

fn default_max_food_attempts() -> usize {
    defaults::MAX_FOOD_ATTEMPTS
}

impl SnakeSettings {
    pub fn grid(&self) -> Grid {
        Grid::new(self.field_width, self.field_height)
    }

    pub fn start_position(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: defaults::FIELD_WIDTH,
            field_height: defaults::FIELD_HEIGHT,
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
            score_per_food: defaults::SCORE_PER_FOOD,
            start_x: defaults::START_X,
            start_y: defaults::START_Y,
            start_direction: defaults::START_DIRECTION,
            max_food_attempts: defaults::MAX_FOOD_ATTEMPTS,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_width > 100 {
            return Err("Field width must be between 5 and 100".to_string());
        }
        if self.field_height < 5 || self.field_height > 100 {
            return Err("Field height must be between 5 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.score_per_food < 1 {
            return Err("Score per food must be at least 1".to_string());
        }
        if !self.grid().contains(self.start_position()) {
            return Err(format!(
                "Start cell ({}, {}) is outside the {}x{} field",
                self.start_x, self.start_y, self.field_width, self.field_height
            ));
        }
        if self.max_food_attempts < 1 {
            return Err("Max food attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
