pub mod choice;
pub use choice::*;

pub mod moveset;
pub use moveset::*;

pub mod outcome;
pub use outcome::*;
