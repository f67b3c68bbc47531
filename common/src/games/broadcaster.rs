use std::future::Future;

use super::snake::{GameSnapshot, SessionSummary};

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_snapshot(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_shutdown(&self, summary: SessionSummary) -> impl Future<Output = ()> + Send;
}
