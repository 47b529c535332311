/// Result of a comparison, from the perspective of the first move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same comparison seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    /// Announcement addressed to the player, when the player is the first move.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Lose => "You lose!",
            Self::Draw => "Draw",
        }
    }
}

/// The first move's rank relative to the second, when ordered by strength.
impl From<std::cmp::Ordering> for Outcome {
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Greater => Self::Win,
            std::cmp::Ordering::Less => Self::Lose,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
        })
    }
}
