use super::*;
use crate::*;
use rand::Rng;
use std::collections::HashSet;

/// Reasons a list of names cannot be played as a MoveSet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSetError {
    TooFew(usize),
    Even(usize),
    Duplicate(String),
}

impl std::fmt::Display for MoveSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFew(n) => write!(
                f,
                "got {} moves; please enter at least {} moves, an odd number of them",
                n, MIN_MOVES
            ),
            Self::Even(n) => write!(
                f,
                "got {} moves; please enter an odd number of moves starting from {}",
                n, MIN_MOVES
            ),
            Self::Duplicate(name) => write!(
                f,
                "move {:?} is repeated; please enter unique moves without repetition",
                name
            ),
        }
    }
}

impl std::error::Error for MoveSetError {}

/// Ordered, distinct move names. The order is the cycle: every move beats
/// the `n / 2` moves before it and loses to the `n / 2` moves after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn name(&self, choice: Move) -> &str {
        self.0[choice.index()].as_str()
    }

    pub fn find(&self, name: &str) -> Option<Move> {
        self.0.iter().position(|n| n == name).map(Move::new)
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.len()).map(Move::new)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Width of the longest move name, in characters.
    pub fn widest(&self) -> usize {
        self.names().map(|n| n.chars().count()).max().unwrap_or_default()
    }

    /// Cyclic distance rule. The signed offset of `a` from `b`, folded into
    /// `[-half, half]`, decides the winner; its sign is the outcome for `a`.
    ///
    /// Both moves must come from this set. Panics on a move from a larger
    /// set instead of wrapping into a wrong outcome.
    pub fn resolve(&self, a: Move, b: Move) -> Outcome {
        assert!(a.index() < self.len(), "move {} outside set of {}", a.label(), self.len());
        assert!(b.index() < self.len(), "move {} outside set of {}", b.label(), self.len());
        let n = self.len();
        let half = n / 2;
        let offset = (a.index() + n - b.index() + half) % n;
        Outcome::from(offset.cmp(&half))
    }

    /// Uniform pick over the whole set.
    pub fn choose<R>(&self, rng: &mut R) -> Move
    where
        R: Rng + ?Sized,
    {
        Move::new(rng.random_range(0..self.len()))
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = MoveSetError;
    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        match names.len() {
            n if n < MIN_MOVES => return Err(MoveSetError::TooFew(n)),
            n if n % 2 == 0 => return Err(MoveSetError::Even(n)),
            _ => {}
        }
        let repeated = {
            let mut seen = HashSet::with_capacity(names.len());
            names.iter().find(|name| !seen.insert(name.as_str())).cloned()
        };
        match repeated {
            Some(name) => Err(MoveSetError::Duplicate(name)),
            None => Ok(Self(names)),
        }
    }
}

impl TryFrom<&[&str]> for MoveSet {
    type Error = MoveSetError;
    fn try_from(names: &[&str]) -> Result<Self, Self::Error> {
        Self::try_from(names.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }
}

impl std::fmt::Display for MoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn classic() -> MoveSet {
        MoveSet::try_from(&["rock", "paper", "scissors"][..]).unwrap()
    }

    fn spock() -> MoveSet {
        MoveSet::try_from(&["rock", "spock", "paper", "lizard", "scissors"][..]).unwrap()
    }

    fn numbered(n: usize) -> MoveSet {
        MoveSet::try_from((0..n).map(|i| format!("m{}", i)).collect::<Vec<_>>()).unwrap()
    }

    fn versus(moves: &MoveSet, a: &str, b: &str) -> Outcome {
        moves.resolve(moves.find(a).unwrap(), moves.find(b).unwrap())
    }

    #[test]
    fn rejects_too_few() {
        assert_eq!(
            MoveSet::try_from(&["rock"][..]),
            Err(MoveSetError::TooFew(1))
        );
        assert_eq!(MoveSet::try_from(Vec::<String>::new()), Err(MoveSetError::TooFew(0)));
    }

    #[test]
    fn rejects_even() {
        assert_eq!(
            MoveSet::try_from(&["rock", "paper"][..]),
            Err(MoveSetError::TooFew(2))
        );
        assert_eq!(
            MoveSet::try_from(&["a", "b", "c", "d"][..]),
            Err(MoveSetError::Even(4))
        );
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            MoveSet::try_from(&["rock", "paper", "rock"][..]),
            Err(MoveSetError::Duplicate("rock".to_string()))
        );
    }

    #[test]
    fn accepts_odd_distinct() {
        let moves = classic();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.name(Move::new(1)), "paper");
        assert_eq!(moves.find("scissors"), Some(Move::new(2)));
        assert_eq!(moves.find("lizard"), None);
        assert_eq!(moves.to_string(), "rock paper scissors");
    }

    #[test]
    fn classic_rules() {
        let ref moves = classic();
        assert_eq!(versus(moves, "rock", "scissors"), Outcome::Win);
        assert_eq!(versus(moves, "rock", "paper"), Outcome::Lose);
        assert_eq!(versus(moves, "scissors", "paper"), Outcome::Win);
        assert_eq!(versus(moves, "paper", "paper"), Outcome::Draw);
    }

    #[test]
    fn lizard_spock_rules() {
        let ref moves = spock();
        let beats = [
            ("rock", "scissors"),
            ("rock", "lizard"),
            ("paper", "rock"),
            ("paper", "spock"),
            ("scissors", "paper"),
            ("scissors", "lizard"),
            ("lizard", "spock"),
            ("lizard", "paper"),
            ("spock", "scissors"),
            ("spock", "rock"),
        ];
        for (winner, loser) in beats {
            assert_eq!(versus(moves, winner, loser), Outcome::Win, "{} > {}", winner, loser);
            assert_eq!(versus(moves, loser, winner), Outcome::Lose, "{} < {}", loser, winner);
        }
    }

    #[test]
    fn beats_previous_half_loses_to_next_half() {
        let ref moves = numbered(7);
        for a in moves.moves() {
            for step in 1..=3 {
                let prev = Move::new((a.index() + 7 - step) % 7);
                let next = Move::new((a.index() + step) % 7);
                assert_eq!(moves.resolve(a, prev), Outcome::Win);
                assert_eq!(moves.resolve(a, next), Outcome::Lose);
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside set of 3")]
    fn foreign_move_panics() {
        let ref small = classic();
        let ref large = spock();
        let scissors = large.find("scissors").unwrap();
        small.resolve(small.find("rock").unwrap(), scissors);
    }

    #[test]
    fn choose_covers_every_move() {
        let ref moves = spock();
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut counts = [0usize; 5];
        for _ in 0..5000 {
            counts[moves.choose(rng).index()] += 1;
        }
        assert!(counts.iter().all(|&c| c > 800), "{:?}", counts);
    }

    #[test]
    fn widest_counts_chars() {
        let moves = MoveSet::try_from(&["a", "épée", "bb"][..]).unwrap();
        assert_eq!(moves.widest(), 4);
    }

    fn game() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..40)
            .prop_map(|k| 2 * k + 1)
            .prop_flat_map(|n| (Just(n), 0..n, 0..n))
    }

    proptest! {
        #[test]
        fn draw_iff_same((n, i, j) in game()) {
            let moves = numbered(n);
            let outcome = moves.resolve(Move::new(i), Move::new(j));
            prop_assert_eq!(outcome == Outcome::Draw, i == j);
        }

        #[test]
        fn antisymmetric((n, i, j) in game()) {
            let moves = numbered(n);
            let ab = moves.resolve(Move::new(i), Move::new(j));
            let ba = moves.resolve(Move::new(j), Move::new(i));
            prop_assert_eq!(ab, ba.flip());
        }

        #[test]
        fn wins_half_of_the_rest((n, i, _) in game()) {
            let moves = numbered(n);
            let a = Move::new(i);
            let wins = moves.moves().filter(|&b| moves.resolve(a, b) == Outcome::Win).count();
            let loss = moves.moves().filter(|&b| moves.resolve(a, b) == Outcome::Lose).count();
            prop_assert_eq!(wins, n / 2);
            prop_assert_eq!(loss, n / 2);
        }
    }
}
