use chrono::NaiveDate;
use game_core::{GameEvent, Side};
use tracing::{debug, info};

/// Fire-and-forget sink for audio/haptic cues
pub trait Notifier {
    fn notify(&self, event: GameEvent);
}

/// Source of the date stamped on leaderboard entries
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Writes every cue to the log instead of a speaker
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: GameEvent) {
        match event {
            GameEvent::WallBounce => debug!("cue: wall"),
            GameEvent::PaddleHit(side) => debug!(?side, "cue: paddle"),
            GameEvent::PointScored(side) => info!("Point to {}", side_label(side)),
            GameEvent::MatchEnded(side) => info!("Game to {}", side_label(side)),
        }
    }
}

/// Discards every cue
pub struct Silent;

impl Notifier for Silent {
    fn notify(&self, _event: GameEvent) {}
}

pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

pub fn side_label(side: Side) -> &'static str {
    match side {
        Side::Top => "player 1",
        Side::Bottom => "player 2",
    }
}
