use super::*;
use crate::help::*;
use crate::moves::*;
use crate::players::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;

/// Plays rounds over one MoveSet until the player exits or input closes.
///
/// Each iteration deals a fresh Round (new computer move, new key), shows
/// its commitment with the menu, waits for a valid answer, then reveals.
/// Help requests and invalid answers keep the same round open.
///
/// Move selection uses a fast non-cryptographic generator; the key does not.
/// Secrecy of the computer's move rests on the commitment, not on the pick.
pub struct Game<P, W> {
    moves: MoveSet,
    player: P,
    sink: W,
    rng: SmallRng,
}

impl<P, W> Game<P, W>
where
    P: Player,
    W: Write,
{
    pub fn new(moves: MoveSet, player: P, sink: W) -> Self {
        Self {
            moves,
            player,
            sink,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Replays the same sequence of computer moves for a given seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        writeln!(self.sink, "Welcome!")?;
        loop {
            let round = Round::deal(&self.moves, &mut self.rng)?;
            match Self::ask(&mut self.player, &mut self.sink, &round)? {
                None => {
                    log::info!("player left the game");
                    return Ok(());
                }
                Some(user) => {
                    let reveal = round.resolve(user);
                    log::debug!(
                        "revealed round {}: {} vs {}",
                        reveal.commitment(),
                        reveal.user(),
                        reveal.computer()
                    );
                    writeln!(self.sink, "{}", reveal)?;
                }
            }
        }
    }
}

impl<P, W> Game<P, W>
where
    P: Player,
    W: Write,
{
    /// Blocks until the player picks a move (Some) or leaves (None).
    fn ask(player: &mut P, sink: &mut W, round: &Round) -> anyhow::Result<Option<Move>> {
        let moves = round.moves();
        Self::menu(sink, round)?;
        let prompt = format!(
            "Enter your move from 1 to {} (0 for Exit, ? for Help)",
            moves.len()
        );
        loop {
            let Some(line) = player.answer(&prompt)? else {
                return Ok(None);
            };
            match Command::parse(&line, moves) {
                Ok(Command::Play(choice)) => return Ok(Some(choice)),
                Ok(Command::Exit) => return Ok(None),
                Ok(Command::Help) => {
                    writeln!(sink, "{}", Table::from(moves))?;
                    Self::menu(sink, round)?;
                }
                Err(e) => {
                    log::debug!("rejected answer: {}", e);
                    writeln!(sink, "{}", e)?;
                    Self::menu(sink, round)?;
                }
            }
        }
    }

    fn menu(sink: &mut W, round: &Round) -> std::io::Result<()> {
        let moves = round.moves();
        writeln!(sink, "HMAC: {}", round.commitment())?;
        writeln!(sink, "Available moves:")?;
        for choice in moves.moves() {
            writeln!(sink, "{} - {}", choice.label(), moves.name(choice))?;
        }
        writeln!(sink, "0 - Exit")?;
        writeln!(sink, "? - Help")?;
        sink.flush()
    }
}
