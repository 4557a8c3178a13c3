//! Host-side runner for the Pong core
//!
//! Wires a [`game_core::Match`] to the leaderboard and to the host's
//! notification and calendar collaborators.

pub mod autopilot;
pub mod host;
pub mod session;

pub use autopilot::*;
pub use host::*;
pub use session::*;
