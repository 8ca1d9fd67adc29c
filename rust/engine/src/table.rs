use crate::relation::{MoveRelation, Outcome};

/// Win/lose/draw grid for a move set, ready for display.
///
/// Row and column headers are the move names in their original order behind
/// a `"Moves"` corner label. Each body cell reads from the row move's
/// perspective: `"Win"` when the row move defeats the column move. The grid
/// is regenerated on demand from a shared [`MoveRelation`] and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTable {
    rows: Vec<Vec<String>>,
}

impl HelpTable {
    pub fn new(relation: &MoveRelation) -> Self {
        let n = relation.len();
        let mut rows = Vec::with_capacity(n + 1);

        let mut header = Vec::with_capacity(n + 1);
        header.push("Moves".to_string());
        header.extend(relation.moves().iter().cloned());
        rows.push(header);

        for i in 0..n {
            let mut row = Vec::with_capacity(n + 1);
            row.push(relation.moves()[i].clone());
            for j in 0..n {
                row.push(label(relation.outcome_by_index(i, j)).to_string());
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// Header row followed by one row per move.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "Draw",
        Outcome::PlayerWins => "Win",
        Outcome::ComputerWins => "Lose",
    }
}
