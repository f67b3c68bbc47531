use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::games::{GameBroadcaster, RandomSource, SessionRng};
use crate::{log, log_debug};
use super::game_state::GameState;
use super::settings::SnakeSettings;
use super::snapshot::GameSnapshot;
use super::types::{Direction, Phase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Reset,
    Turn(Direction),
    TurnVector { dx: i32, dy: i32 },
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Closed,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Closed => write!(f, "Session is closed"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub ticks: u64,
    pub final_score: u32,
    pub best_score: u32,
    pub games_played: u32,
}

#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub fn start(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Start)
    }

    pub fn reset(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Reset)
    }

    pub fn request_direction(&self, direction: Direction) -> Result<(), SessionError> {
        self.send(SessionCommand::Turn(direction))
    }

    pub fn request_direction_vector(&self, dx: i32, dy: i32) -> Result<(), SessionError> {
        self.send(SessionCommand::TurnVector { dx, dy })
    }

    pub fn shutdown(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Shutdown)
    }

    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.commands.send(command).map_err(|_| SessionError::Closed)
    }
}

/// Fixed-period tick source. Only armed while a game is running.
struct TickTimer {
    period: Duration,
    interval: Option<Interval>,
}

impl TickTimer {
    fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    fn arm(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    async fn wait(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

/// Owns one game and applies ticks and commands strictly one at a time.
pub struct SnakeSession<R: RandomSource = SessionRng> {
    // Vacated only for the duration of `transition`.
    state: Option<GameState>,
    rng: R,
    timer: TickTimer,
    tick: u64,
    total_ticks: u64,
    best_score: u32,
    games_played: u32,
}

impl<R: RandomSource + Send + 'static> SnakeSession<R> {
    pub fn new(settings: SnakeSettings, rng: R) -> Self {
        Self {
            state: Some(GameState::new(settings)),
            rng,
            timer: TickTimer::new(settings.tick_interval()),
            tick: 0,
            total_ticks: 0,
            best_score: 0,
            games_played: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
            .as_ref()
            .expect("Session state is only vacated inside a transition")
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.state(), self.tick)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            ticks: self.total_ticks,
            final_score: self.state().score(),
            best_score: self.best_score.max(self.state().score()),
            games_played: self.games_played,
        }
    }

    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> SessionSummary {
        broadcaster.broadcast_snapshot(self.snapshot()).await;

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => {
                    let command = match command {
                        Some(SessionCommand::Shutdown) | None => break,
                        Some(command) => command,
                    };
                    if self.apply_command(command) {
                        broadcaster.broadcast_snapshot(self.snapshot()).await;
                    }
                }
                _ = self.timer.wait() => {
                    if self.process_tick() {
                        let snapshot = self.snapshot();
                        broadcaster.broadcast_snapshot(snapshot.clone()).await;
                        if snapshot.status.phase.is_terminal() {
                            broadcaster.broadcast_game_over(snapshot).await;
                        }
                    }
                }
            }
        }

        let summary = self.summary();
        log!(
            "Session closed after {} ticks, {} games. Best score: {}",
            summary.ticks,
            summary.games_played,
            summary.best_score
        );
        broadcaster.broadcast_shutdown(summary).await;
        summary
    }

    /// Returns true when the visible state changed.
    pub fn apply_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Start => {
                if self.state().phase() == Phase::Running {
                    return false;
                }
                self.record_best_score();
                self.transition(|state, rng| state.start(rng));
                self.tick = 0;
                self.games_played += 1;
                if self.state().phase() == Phase::Running {
                    self.timer.arm();
                }
                true
            }
            SessionCommand::Reset => {
                self.record_best_score();
                self.timer.disarm();
                self.transition(|state, _| state.reset());
                self.tick = 0;
                log_debug!("Session reset");
                true
            }
            SessionCommand::Turn(direction) => {
                if self.state().phase() == Phase::Running {
                    self.transition(|state, _| state.request_direction(direction));
                }
                false
            }
            SessionCommand::TurnVector { dx, dy } => {
                if self.state().phase() == Phase::Running {
                    self.transition(|state, _| state.request_direction_vector(dx, dy));
                }
                false
            }
            SessionCommand::Shutdown => false,
        }
    }

    /// Advances one step if a game is running. A late tick after the game ended is dropped.
    pub fn process_tick(&mut self) -> bool {
        if self.state().phase() != Phase::Running {
            self.timer.disarm();
            return false;
        }

        self.transition(|state, rng| state.tick(rng));
        self.tick += 1;
        self.total_ticks += 1;

        if self.state().phase().is_terminal() {
            self.timer.disarm();
            self.record_best_score();
        }
        true
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    fn record_best_score(&mut self) {
        self.best_score = self.best_score.max(self.state().score());
    }

    fn transition(&mut self, f: impl FnOnce(GameState, &mut R) -> GameState) {
        if let Some(state) = self.state.take() {
            self.state = Some(f(state, &mut self.rng));
        }
    }
}

pub fn spawn_session(
    settings: SnakeSettings,
    rng: SessionRng,
    broadcaster: impl GameBroadcaster,
) -> (SessionHandle, JoinHandle<SessionSummary>) {
    log!(
        "Starting snake session: {}x{} field, tick {}ms, seed {}",
        settings.field_width,
        settings.field_height,
        settings.tick_interval_ms,
        rng.seed()
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let session = SnakeSession::new(settings, rng);
    let join_handle = tokio::spawn(session.run(rx, broadcaster));
    (SessionHandle { commands: tx }, join_handle)
}
