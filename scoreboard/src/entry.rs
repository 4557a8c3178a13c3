use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest name kept on the board
pub const MAX_NAME_LEN: usize = 10;

/// Shown when a player submits without a name
pub const DEFAULT_NAME: &str = "PLAYER";

/// One row of the persisted leaderboard
///
/// Serialized as `{ "name": "ACE", "score": 11, "date": "2024-05-01" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub date: NaiveDate,
}

impl ScoreEntry {
    /// Build an entry from raw player input, normalizing name and score
    pub fn new(name: &str, score: i64, date: NaiveDate) -> Self {
        Self {
            name: sanitize_name(name),
            score: clamp_score(score),
            date,
        }
    }

    /// Re-apply name rules to an entry read back from storage
    pub fn normalized(mut self) -> Self {
        self.name = sanitize_name(&self.name);
        self
    }
}

/// Trim, uppercase and cap at [`MAX_NAME_LEN`] characters
pub fn sanitize_name(raw: &str) -> String {
    let name: String = raw
        .trim()
        .chars()
        .flat_map(char::to_uppercase)
        .take(MAX_NAME_LEN)
        .collect();
    // Truncation may leave trailing whitespace from inner spaces
    let name = name.trim_end();
    if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name.to_string()
    }
}

fn clamp_score(score: i64) -> u32 {
    score.clamp(0, u32::MAX as i64) as u32
}
