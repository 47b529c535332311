use crate::fairness::*;
use crate::moves::*;

/// A resolved round: both moves, the outcome for the player, and the key
/// that opens the commitment published earlier.
pub struct Reveal {
    pub(super) user: String,
    pub(super) computer: String,
    pub(super) outcome: Outcome,
    pub(super) commitment: Commitment,
    pub(super) key: SecretKey,
}

impl Reveal {
    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn computer(&self) -> &str {
        &self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }
    pub fn key(&self) -> &SecretKey {
        &self.key
    }
    /// The check the player can repeat with any HMAC-SHA3-256 tool.
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.computer, &self.key)
    }
}

impl std::fmt::Display for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Your move: {}", self.user)?;
        writeln!(f, "Computer move: {}", self.computer)?;
        writeln!(f, "Outcome: {}", self.outcome.verdict())?;
        write!(f, "HMAC key: {}", self.key)
    }
}
