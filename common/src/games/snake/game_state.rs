use crate::games::RandomSource;
use crate::log;
use super::direction_guard;
use super::engine;
use super::food;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Direction, EndReason, Phase, Position};

/// Single-player game state. Every transition consumes the state and returns the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(super) settings: SnakeSettings,
    pub(super) snake: Snake,
    pub(super) food: Option<Position>,
    pub(super) direction: Direction,
    pub(super) pending_direction: Direction,
    pub(super) score: u32,
    pub(super) phase: Phase,
    pub(super) end_reason: Option<EndReason>,
}

impl GameState {
    pub fn new(settings: SnakeSettings) -> Self {
        Self {
            snake: Snake::new(settings.start_position()),
            food: None,
            direction: settings.start_direction,
            pending_direction: settings.start_direction,
            score: 0,
            phase: Phase::NotStarted,
            end_reason: None,
            settings,
        }
    }

    /// Begins a fresh game. Ignored while a game is already running.
    pub fn start(self, rng: &mut impl RandomSource) -> Self {
        if self.phase == Phase::Running {
            return self;
        }

        let mut state = Self::new(self.settings);
        state.phase = Phase::Running;
        state.food = food::generate(
            &state.snake,
            &state.settings.grid(),
            rng,
            state.settings.max_food_attempts,
        );

        match state.food {
            Some(pos) => log!("Game started, food at ({}, {})", pos.x, pos.y),
            None => {
                state.phase = Phase::BoardCleared;
                state.end_reason = Some(EndReason::BoardCleared);
                log!("Game started on a field with no free cell");
            }
        }
        state
    }

    pub fn reset(self) -> Self {
        Self::new(self.settings)
    }

    pub fn request_direction(mut self, requested: Direction) -> Self {
        if self.phase != Phase::Running {
            return self;
        }
        if let Some(accepted) = direction_guard::apply(self.direction, requested) {
            self.pending_direction = accepted;
        }
        self
    }

    pub fn request_direction_vector(mut self, dx: i32, dy: i32) -> Self {
        if self.phase != Phase::Running {
            return self;
        }
        if let Some(accepted) = direction_guard::apply_vector(self.direction, dx, dy) {
            self.pending_direction = accepted;
        }
        self
    }

    pub fn tick(self, rng: &mut impl RandomSource) -> Self {
        engine::tick(self, rng)
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[cfg(test)]
    pub(crate) fn running_with(
        settings: SnakeSettings,
        snake: Snake,
        direction: Direction,
        food: Option<Position>,
    ) -> Self {
        Self {
            settings,
            snake,
            food,
            direction,
            pending_direction: direction,
            score: 0,
            phase: Phase::Running,
            end_reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;

    fn running_state(rng: &mut SessionRng) -> GameState {
        GameState::new(SnakeSettings::default()).start(rng)
    }

    #[test]
    fn test_new_is_not_started() {
        let state = GameState::new(SnakeSettings::default());
        assert_eq!(state.phase(), Phase::NotStarted);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), Position::new(10, 10));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.food(), None);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_start_places_food_off_snake() {
        let mut rng = SessionRng::new(42);
        let state = running_state(&mut rng);
        assert_eq!(state.phase(), Phase::Running);
        let food = state.food().unwrap();
        assert!(state.settings().grid().contains(food));
        assert!(!state.snake().occupies(&food));
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut rng = SessionRng::new(42);
        let state = running_state(&mut rng).tick(&mut rng);
        let again = state.clone().start(&mut rng);
        assert_eq!(again, state);
    }

    #[test]
    fn test_start_after_game_over_restores_defaults() {
        let mut rng = SessionRng::new(42);
        let mut state = running_state(&mut rng);
        while state.phase() == Phase::Running {
            state = state.tick(&mut rng);
        }
        assert_eq!(state.phase(), Phase::GameOver);

        let restarted = state.start(&mut rng);
        assert_eq!(restarted.phase(), Phase::Running);
        assert_eq!(restarted.score(), 0);
        assert_eq!(restarted.snake().len(), 1);
        assert_eq!(restarted.direction(), Direction::Right);
        assert_eq!(restarted.end_reason(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut rng = SessionRng::new(42);
        let state = running_state(&mut rng)
            .request_direction(Direction::Down)
            .tick(&mut rng)
            .tick(&mut rng);
        let once = state.reset();
        let twice = once.clone().reset();
        assert_eq!(once, twice);
        assert_eq!(once, GameState::new(SnakeSettings::default()));
        assert_eq!(once.food(), None);
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut rng = SessionRng::new(1);
        let canonical = GameState::new(SnakeSettings::default());

        assert_eq!(canonical.clone().reset(), canonical);
        assert_eq!(running_state(&mut rng).reset(), canonical);

        let mut over = running_state(&mut rng);
        while over.phase() == Phase::Running {
            over = over.tick(&mut rng);
        }
        assert_eq!(over.reset(), canonical);
    }

    #[test]
    fn test_request_direction_rejects_reversal() {
        let mut rng = SessionRng::new(42);
        let state = running_state(&mut rng).request_direction(Direction::Left);
        assert_eq!(state.pending_direction(), Direction::Right);

        let state = state.request_direction(Direction::Down);
        assert_eq!(state.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_request_direction_vector() {
        let mut rng = SessionRng::new(42);
        let state = running_state(&mut rng).request_direction_vector(-1, 0);
        assert_eq!(state.pending_direction(), Direction::Right);

        let state = state.request_direction_vector(0, 1);
        assert_eq!(state.pending_direction(), Direction::Down);

        let state = state.request_direction_vector(1, 1);
        assert_eq!(state.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_last_request_wins() {
        let mut rng = SessionRng::new(42);
        let state = running_state(&mut rng)
            .request_direction(Direction::Up)
            .request_direction(Direction::Down);
        assert_eq!(state.pending_direction(), Direction::Down);

        let state = state.tick(&mut rng);
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake().head(), Position::new(10, 11));
    }

    #[test]
    fn test_guard_checks_committed_direction() {
        let mut rng = SessionRng::new(42);
        // Up is pending but Right is still committed, so Left stays a reversal.
        let state = running_state(&mut rng)
            .request_direction(Direction::Up)
            .request_direction(Direction::Left);
        assert_eq!(state.pending_direction(), Direction::Up);

        let state = state.tick(&mut rng);
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.snake().head(), Position::new(10, 9));
    }

    #[test]
    fn test_malformed_vector_keeps_accepted_turn() {
        let mut rng = SessionRng::new(42);
        let state = running_state(&mut rng)
            .request_direction(Direction::Down)
            .request_direction_vector(0, 0);
        assert_eq!(state.pending_direction(), Direction::Down);

        let state = state.request_direction_vector(-1, 0);
        assert_eq!(state.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_request_direction_ignored_outside_running() {
        let state = GameState::new(SnakeSettings::default()).request_direction(Direction::Down);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state, GameState::new(SnakeSettings::default()));
    }
}
