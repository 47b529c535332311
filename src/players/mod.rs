pub mod player;
pub use player::*;

pub mod piped;
pub use piped::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;
