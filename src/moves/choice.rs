/// A position within a MoveSet. Only meaningful alongside the set it came
/// from, and only obtainable from one (`moves`, `find`, `choose`).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move(usize);

impl Move {
    pub(crate) fn new(i: usize) -> Self {
        Self(i)
    }
    pub fn index(&self) -> usize {
        self.0
    }
    /// 1-based label used in the move menu.
    pub fn label(&self) -> usize {
        self.0 + 1
    }
}

impl From<Move> for usize {
    fn from(m: Move) -> usize {
        m.0
    }
}
