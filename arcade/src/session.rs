use game_core::{GameEvent, Match, Side, Snapshot};
use scoreboard::{ranked, KeyValueStore, RankedEntry, ScoreStore};
use tracing::{debug, info};

use crate::host::{Clock, Notifier};

/// What happened to the human score at the end of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Two-player game, nothing to rank
    NotRanked,
    /// Did not beat the lowest entry of a full board
    BelowBoard(u32),
    Saved(u32),
    SaveFailed(u32),
}

/// Host-side glue around one [`Match`]
///
/// Drives ticks, forwards cues to the notifier and hands finished opponent
/// games to the leaderboard. An optional backup store mirrors the board
/// after every saved score.
pub struct Session<S: KeyValueStore> {
    game: Match,
    scores: ScoreStore<S>,
    backup: Option<Box<dyn KeyValueStore>>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
    player_name: String,
    last_submission: Option<Submission>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(
        game: Match,
        scores: ScoreStore<S>,
        notifier: Box<dyn Notifier>,
        clock: Box<dyn Clock>,
        player_name: impl Into<String>,
    ) -> Self {
        Self {
            game,
            scores,
            backup: None,
            notifier,
            clock,
            player_name: player_name.into(),
            last_submission: None,
        }
    }

    /// Attach a backup store, restoring the local board from it first
    pub fn with_backup(mut self, backup: Box<dyn KeyValueStore>) -> Self {
        self.scores.restore_from(&*backup);
        self.backup = Some(backup);
        self
    }

    pub fn backup(&self) -> Option<&dyn KeyValueStore> {
        self.backup.as_deref()
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }

    pub fn scores(&self) -> &ScoreStore<S> {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut ScoreStore<S> {
        &mut self.scores
    }

    pub fn last_submission(&self) -> Option<Submission> {
        self.last_submission
    }

    /// Start the next game, forgetting the previous submission
    pub fn start(&mut self) -> bool {
        let result = self.game.start();
        if result.success {
            self.last_submission = None;
        }
        result.success
    }

    /// Advance one frame and return the cues raised by it
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let events = self.game.tick().to_vec();
        for &event in &events {
            self.notifier.notify(event);
        }
        if let Some(GameEvent::MatchEnded(winner)) = events.last() {
            self.on_game_over(*winner);
        }
        events
    }

    /// Frame for the renderer
    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    pub fn leaderboard(&self) -> Vec<RankedEntry> {
        ranked(&self.scores.load())
    }

    fn on_game_over(&mut self, winner: Side) {
        let submission = match self.game.ranked_score() {
            None => Submission::NotRanked,
            Some(score) if !self.scores.qualifies(score) => Submission::BelowBoard(score),
            Some(score) => {
                let date = self.clock.today();
                if self.scores.submit(&self.player_name, i64::from(score), date) {
                    Submission::Saved(score)
                } else {
                    Submission::SaveFailed(score)
                }
            }
        };
        debug!(?winner, ?submission, "game finished");
        if let Submission::Saved(score) = submission {
            info!("New high score for {}: {}", self.player_name, score);
            if let Some(backup) = self.backup.as_deref_mut() {
                self.scores.backup_to(backup);
            }
        }
        self.last_submission = Some(submission);
    }
}
