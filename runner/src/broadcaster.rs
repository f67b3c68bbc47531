use std::sync::{Arc, Mutex};

use snake_common::games::GameBroadcaster;
use snake_common::games::snake::{SessionSummary, StatusSnapshot};
use snake_common::{GameSnapshot, Phase, log, log_debug};

/// Latest status seen by the runner, used to log only phase and score changes.
#[derive(Clone, Default)]
pub struct SharedStatus {
    inner: Arc<Mutex<Option<StatusSnapshot>>>,
}

impl SharedStatus {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn get(&self) -> Option<StatusSnapshot> {
        *self.inner.lock().unwrap()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.get().map(|s| s.phase).unwrap_or(Phase::NotStarted)
    }

    /// Stores the new status and returns the previous one.
    fn replace(&self, status: StatusSnapshot) -> Option<StatusSnapshot> {
        self.inner.lock().unwrap().replace(status)
    }
}

#[derive(Clone)]
pub struct LogBroadcaster {
    status: SharedStatus,
}

impl LogBroadcaster {
    pub fn new(status: SharedStatus) -> Self {
        Self { status }
    }
}

impl GameBroadcaster for LogBroadcaster {
    async fn broadcast_snapshot(&self, snapshot: GameSnapshot) {
        let previous = self.status.replace(snapshot.status);

        let current = (snapshot.status.phase, snapshot.status.score);
        if previous.map(|p| (p.phase, p.score)) != Some(current) {
            log!(
                "[tick {}] phase: {:?}, score: {}, length: {}",
                snapshot.tick,
                snapshot.status.phase,
                snapshot.status.score,
                snapshot.render.snake.len()
            );
        }

        if let Some(head) = snapshot.render.snake.first() {
            log_debug!(
                "[tick {}] head ({}, {}), food {:?}",
                snapshot.tick,
                head.x,
                head.y,
                snapshot.render.food.map(|f| (f.x, f.y))
            );
        }
    }

    async fn broadcast_game_over(&self, snapshot: GameSnapshot) {
        match snapshot.status.phase {
            Phase::BoardCleared => log!("Board cleared! Final score: {}", snapshot.status.score),
            _ => log!(
                "Game over ({:?}). Final score: {}. Type 'start' to play again or 'reset'.",
                snapshot.status.end_reason,
                snapshot.status.score
            ),
        }
    }

    async fn broadcast_shutdown(&self, summary: SessionSummary) {
        log!(
            "Played {} games over {} ticks. Best score: {}",
            summary.games_played,
            summary.ticks,
            summary.best_score
        );
    }
}
