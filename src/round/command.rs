use crate::moves::*;

/// The player's answer did not name a move on the menu. Recovered by
/// showing the menu again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMove {
    given: String,
    limit: usize,
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid move {:?}. Please enter a number between 1 and {}",
            self.given, self.limit
        )
    }
}

impl std::error::Error for InvalidMove {}

/// A recognized answer at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Help,
    Exit,
}

impl Command {
    /// `1..=n` picks a move, `0` or `exit` (any case) leaves, `?` asks for help.
    pub fn parse(input: &str, moves: &MoveSet) -> Result<Self, InvalidMove> {
        match input.trim() {
            "?" => Ok(Self::Help),
            "0" => Ok(Self::Exit),
            s if s.eq_ignore_ascii_case("exit") => Ok(Self::Exit),
            s => s
                .parse::<usize>()
                .ok()
                .filter(|i| (1..=moves.len()).contains(i))
                .map(|i| Self::Play(Move::new(i - 1)))
                .ok_or_else(|| InvalidMove {
                    given: s.to_string(),
                    limit: moves.len(),
                }),
        }
    }
}
