use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::ranker::{insert, is_high_score, normalize};
use crate::ScoreEntry;

/// Key the leaderboard is stored under
pub const LEADERBOARD_KEY: &str = "pong_leaderboard";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("leaderboard encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value persistence used by the leaderboard
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, also stands in for a remote backup target
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a sibling `.tmp` file, then rename it over the old board
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            // The rename error is the one reported
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// Leaderboard persistence over a [`KeyValueStore`]
///
/// Never surfaces errors: a missing or unreadable board loads as empty and a
/// failed write reports `false`. Each save replaces the whole list.
pub struct ScoreStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Current board, sorted descending and capped
    pub fn load(&self) -> Vec<ScoreEntry> {
        match self.try_load() {
            Ok(list) => list,
            Err(e) => {
                warn!("Leaderboard unavailable, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Replace the stored board with `list`
    pub fn save(&mut self, list: &[ScoreEntry]) -> bool {
        match self.try_save(list) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save leaderboard: {e}");
                false
            }
        }
    }

    /// Does `score` earn a place on the stored board?
    pub fn qualifies(&self, score: u32) -> bool {
        is_high_score(score, &self.load())
    }

    /// Sanitize, place and persist a new result
    pub fn submit(&mut self, name: &str, score: i64, date: NaiveDate) -> bool {
        let entry = ScoreEntry::new(name, score, date);
        let list = insert(entry.clone(), &self.load());
        let saved = self.save(&list);
        if saved {
            info!("Leaderboard updated: {} scored {}", entry.name, entry.score);
        }
        saved
    }

    /// Copy the stored board to `remote`, if there is one
    pub fn backup_to<R: KeyValueStore + ?Sized>(&self, remote: &mut R) {
        let raw = match self.backend.load(LEADERBOARD_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                warn!("Leaderboard backup skipped: {e}");
                return;
            }
        };
        match remote.save(LEADERBOARD_KEY, &raw) {
            Ok(()) => debug!("Leaderboard backed up"),
            Err(e) => warn!("Leaderboard backup failed: {e}"),
        }
    }

    /// Overwrite the stored board with the copy held by `remote`
    ///
    /// A missing or unreadable remote copy leaves the local board untouched.
    pub fn restore_from<R: KeyValueStore + ?Sized>(&mut self, remote: &R) {
        let list = match remote.load(LEADERBOARD_KEY).and_then(|raw| match raw {
            Some(raw) => parse(&raw).map(Some),
            None => Ok(None),
        }) {
            Ok(Some(list)) => list,
            Ok(None) => return,
            Err(e) => {
                warn!("Leaderboard restore failed: {e}");
                return;
            }
        };
        if self.save(&list) {
            debug!("Leaderboard restored ({} entries)", list.len());
        }
    }

    fn try_load(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        match self.backend.load(LEADERBOARD_KEY)? {
            Some(raw) => parse(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn try_save(&mut self, list: &[ScoreEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list)?;
        self.backend.save(LEADERBOARD_KEY, &raw)
    }
}

fn parse(raw: &str) -> Result<Vec<ScoreEntry>, StoreError> {
    let list: Vec<ScoreEntry> = serde_json::from_str(raw)?;
    Ok(normalize(
        list.into_iter().map(ScoreEntry::normalized).collect(),
    ))
}
