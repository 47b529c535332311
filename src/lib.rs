//! Provably fair rock-paper-scissors for any odd number of moves.
//!
//! The computer commits to its move with an HMAC before the player answers,
//! then reveals the move and the key so the commitment can be checked.
pub mod fairness;
pub mod help;
pub mod moves;
pub mod players;
pub mod round;

// ============================================================================
// FAIRNESS PARAMETERS
// ============================================================================
/// Secret key length in bytes (256 bits), fresh for every round.
pub const KEY_BYTES: usize = 32;
/// Commitment tag length in bytes (HMAC-SHA3-256 output).
pub const TAG_BYTES: usize = 32;

// ============================================================================
// MOVE SET PARAMETERS
// ============================================================================
/// Smallest playable move set.
pub const MIN_MOVES: usize = 3;

// ============================================================================
// HELP TABLE LAYOUT
// ============================================================================
/// Blank columns around every cell of the help table.
pub const CELL_PADDING: usize = 2;
/// Corner label of the help table: rows are the player's moves, columns the computer's.
pub const CORNER: &str = "User \\ PC";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so game output on stdout stays clean.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
