//! Commit-reveal fairness: a fresh secret key per round, and an HMAC over
//! the computer's move published before the player answers.
pub mod commitment;
pub use commitment::*;

pub mod key;
pub use key::*;
