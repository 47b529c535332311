//! One round of play: deal and commit, take the player's answer, reveal.
pub mod command;
pub use command::*;

pub mod game;
pub use game::*;

pub mod reveal;
pub use reveal::*;

#[allow(clippy::module_inception)]
pub mod round;
pub use round::*;
