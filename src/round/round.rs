use super::*;
use crate::fairness::*;
use crate::moves::*;
use rand::Rng;

/// A committed round over the MoveSet it was dealt from. The computer's move
/// and key exist only here, and `resolve` consumes the round, so a key can
/// never seal a second move.
pub struct Round<'a> {
    moves: &'a MoveSet,
    computer: Move,
    key: SecretKey,
    commitment: Commitment,
}

impl<'a> Round<'a> {
    /// Picks the computer's move, draws a fresh key, and seals the move under it.
    pub fn deal<R>(moves: &'a MoveSet, rng: &mut R) -> Result<Self, EntropyError>
    where
        R: Rng + ?Sized,
    {
        let computer = moves.choose(rng);
        let key = SecretKey::generate()?;
        let commitment = Commitment::seal(moves.name(computer), &key);
        log::debug!("dealt round {}", commitment);
        Ok(Self {
            moves,
            computer,
            key,
            commitment,
        })
    }

    /// Safe to publish before the player answers.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn moves(&self) -> &'a MoveSet {
        self.moves
    }

    /// `user` must come from this round's MoveSet.
    pub fn resolve(self, user: Move) -> Reveal {
        Reveal {
            user: self.moves.name(user).to_string(),
            computer: self.moves.name(self.computer).to_string(),
            outcome: self.moves.resolve(user, self.computer),
            commitment: self.commitment,
            key: self.key,
        }
    }
}
