use crate::moves::*;
use crate::*;

/// Every pairwise outcome of a MoveSet, from the row move's perspective.
/// Rows are the player's moves and columns the computer's, so each cell
/// reads as the player's result. Stateless; recomputed on every render.
pub struct Table<'a>(&'a MoveSet);

impl<'a> From<&'a MoveSet> for Table<'a> {
    fn from(moves: &'a MoveSet) -> Self {
        Self(moves)
    }
}

impl Table<'_> {
    /// Width of the label column.
    fn label(&self) -> usize {
        self.0.widest().max(CORNER.chars().count())
    }

    /// Width of each outcome column. Outcome words are at most four wide.
    fn cell(&self) -> usize {
        self.0.widest().max(4)
    }

    fn rule(&self, l: char, m: char, r: char) -> String {
        let label = "─".repeat(self.label() + CELL_PADDING);
        let cell = "─".repeat(self.cell() + CELL_PADDING);
        let line = std::iter::once(label)
            .chain(std::iter::repeat_n(cell, self.0.len()))
            .collect::<Vec<_>>()
            .join(&m.to_string());
        format!("{}{}{}", l, line, r)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.label();
        let cell = self.cell();
        writeln!(f, "{}", self.rule('┌', '┬', '┐'))?;
        write!(f, "│ {:<label$} │", CORNER)?;
        for name in self.0.names() {
            write!(f, " {:<cell$} │", name)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.rule('├', '┼', '┤'))?;
        for row in self.0.moves() {
            write!(f, "│ {:<label$} │", self.0.name(row))?;
            for col in self.0.moves() {
                write!(f, " {:<cell$} │", self.0.resolve(row, col))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.rule('└', '┴', '┘'))
    }
}
