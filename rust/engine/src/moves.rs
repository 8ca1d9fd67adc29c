use std::collections::HashSet;

use crate::errors::GameError;

/// An ordered set of distinct move names.
///
/// The ordering is significant: [`crate::relation::MoveRelation`] derives its
/// beats and loses-to windows from it. Construction enforces the shape every
/// other component assumes: an odd number of moves, at least three, all names
/// pairwise distinct (case-sensitive). A `MoveSet` never changes after it is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set from the given names.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMoveCount`] when fewer than three names
    /// are given or the count is even, and [`GameError::DuplicateMove`] when
    /// two names compare equal.
    pub fn new(names: Vec<String>) -> Result<Self, GameError> {
        if names.len() < 3 || names.len() % 2 == 0 {
            return Err(GameError::InvalidMoveCount(names.len()));
        }
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicateMove(name.clone()));
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Move name at the given 0-based position.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// 0-based position of the given name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
