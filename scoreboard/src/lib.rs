//! Local high-score table for Pong
//!
//! Entries are persisted as a JSON array under a single key of a
//! [`KeyValueStore`]. The ranking rules live in [`ranker`] and operate on
//! plain lists; [`ScoreStore`] wraps them with load/save.

pub mod entry;
pub mod ranker;
pub mod store;

pub use entry::*;
pub use ranker::*;
pub use store::*;
