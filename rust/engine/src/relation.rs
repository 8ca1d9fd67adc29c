use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::moves::MoveSet;

/// Result of comparing the player's move against the computer's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both sides picked the same move
    Draw,
    /// The player's move defeats the computer's
    PlayerWins,
    /// The computer's move defeats the player's
    ComputerWins,
}

/// Precomputed beats and loses-to sets for every move in a [`MoveSet`].
///
/// For the move at position `i` in a set of `N` moves, the `N/2` moves that
/// follow it cyclically are the ones it defeats and the `N/2` moves that
/// precede it cyclically are the ones it loses to. Both windows wrap around
/// the end of the list, so every ordered pair of distinct moves has exactly
/// one winner and no move relates to itself.
///
/// Build the relation once per move set and share it by reference; nothing
/// in here changes after construction.
#[derive(Debug, Clone)]
pub struct MoveRelation {
    moves: Vec<String>,
    wins: Vec<Vec<usize>>,
    loses: Vec<Vec<usize>>,
}

impl MoveRelation {
    pub fn new(moves: &MoveSet) -> Self {
        let n = moves.len();
        let half = n / 2;
        let mut wins = Vec::with_capacity(n);
        let mut loses = Vec::with_capacity(n);
        for i in 0..n {
            wins.push(((i + 1)..=(i + half)).map(|j| j % n).collect());
            loses.push(((i + n - half)..(i + n)).map(|j| j % n).collect());
        }
        Self {
            moves: moves.names().to_vec(),
            wins,
            loses,
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Moves the given move defeats, in cyclic window order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownMove`] when the name is not in the set.
    pub fn wins_of(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let i = self.index_of(name)?;
        Ok(self.wins[i].iter().map(|&j| self.moves[j].as_str()).collect())
    }

    /// Moves the given move is defeated by, in cyclic window order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownMove`] when the name is not in the set.
    pub fn loses_to(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let i = self.index_of(name)?;
        Ok(self.loses[i].iter().map(|&j| self.moves[j].as_str()).collect())
    }

    /// Compare the player's move against the computer's.
    ///
    /// Identical names draw before any relation lookup. For distinct names
    /// the player wins exactly when the computer's move is in the player's
    /// wins window.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownMove`] when either distinct name is not
    /// in the set.
    pub fn resolve(&self, player: &str, computer: &str) -> Result<Outcome, GameError> {
        if player == computer {
            return Ok(Outcome::Draw);
        }
        let p = self.index_of(player)?;
        let c = self.index_of(computer)?;
        Ok(self.outcome_by_index(p, c))
    }

    /// Index-based resolution for callers that already validated bounds.
    pub(crate) fn outcome_by_index(&self, player: usize, computer: usize) -> Outcome {
        if player == computer {
            Outcome::Draw
        } else if self.wins[player].contains(&computer) {
            Outcome::PlayerWins
        } else {
            Outcome::ComputerWins
        }
    }

    fn index_of(&self, name: &str) -> Result<usize, GameError> {
        self.moves
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }
}
