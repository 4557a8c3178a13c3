use serde::Serialize;

use crate::ScoreEntry;

/// Capacity of the leaderboard
pub const MAX_ENTRIES: usize = 10;

/// Would `score` earn a place on `list`?
///
/// Any score qualifies while the board has free slots. Once full, it must
/// strictly beat the lowest entry; ties with the minimum do not displace it.
pub fn is_high_score(score: u32, list: &[ScoreEntry]) -> bool {
    if list.len() < MAX_ENTRIES {
        return true;
    }
    list.iter()
        .map(|entry| entry.score)
        .min()
        .map_or(true, |lowest| score > lowest)
}

/// Return a new board with `candidate` placed by score
///
/// The sort is stable, so an entry tying an existing score lands after it.
/// The result never exceeds [`MAX_ENTRIES`].
pub fn insert(candidate: ScoreEntry, list: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut out = Vec::with_capacity(list.len() + 1);
    out.extend_from_slice(list);
    out.push(candidate);
    normalize(out)
}

/// Sort descending and drop anything past [`MAX_ENTRIES`]
pub fn normalize(mut list: Vec<ScoreEntry>) -> Vec<ScoreEntry> {
    list.sort_by(|a, b| b.score.cmp(&a.score));
    list.truncate(MAX_ENTRIES);
    list
}

/// A leaderboard row ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize, // 1-based
    pub name: String,
    pub score: u32,
    pub date: String, // YYYY-MM-DD
}

pub fn ranked(list: &[ScoreEntry]) -> Vec<RankedEntry> {
    list.iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            rank: i + 1,
            name: entry.name.clone(),
            score: entry.score,
            date: entry.date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}
