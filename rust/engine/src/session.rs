use rand::Rng;

use crate::commitment::Commitment;
use crate::errors::GameError;
use crate::moves::MoveSet;
use crate::relation::{MoveRelation, Outcome};

/// Result of one resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub player_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
}

/// One interactive game: a move set, the relation over it, and a committed
/// computer move.
///
/// The computer's move is drawn once at construction and stays fixed for the
/// whole session; every round resolves against the same commitment, and the
/// key revealed after a round matches the digest published up front. The
/// selection RNG is injected by the caller, so a seeded generator replays
/// the same session; the commitment key always comes from OS entropy.
#[derive(Debug)]
pub struct GameSession {
    moves: MoveSet,
    relation: MoveRelation,
    computer_index: usize,
    commitment: Commitment,
}

impl GameSession {
    /// Start a session over the given move set, drawing the computer's move
    /// from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Entropy`] when the commitment key cannot be
    /// generated.
    pub fn new<R: Rng + ?Sized>(moves: MoveSet, rng: &mut R) -> Result<Self, GameError> {
        let relation = MoveRelation::new(&moves);
        let computer_index = rng.random_range(0..moves.len());
        let commitment = Commitment::commit(&moves.names()[computer_index])?;
        Ok(Self {
            moves,
            relation,
            computer_index,
            commitment,
        })
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn relation(&self) -> &MoveRelation {
        &self.relation
    }

    pub fn computer_move(&self) -> &str {
        &self.moves.names()[self.computer_index]
    }

    /// Digest to publish before the player's first input.
    pub fn commitment_digest(&self) -> &str {
        self.commitment.digest()
    }

    /// Hex encoding of the committed key, for display after a round
    /// resolves.
    pub fn reveal_key(&self) -> String {
        self.commitment.reveal().to_hex()
    }

    /// Resolve a round for the player's 0-based move index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MoveOutOfRange`] when the index does not name a
    /// move in the set.
    pub fn play_round(&self, player_index: usize) -> Result<RoundReport, GameError> {
        let player_move = self
            .moves
            .name(player_index)
            .ok_or(GameError::MoveOutOfRange {
                index: player_index,
                len: self.moves.len(),
            })?;
        let outcome = self.relation.outcome_by_index(player_index, self.computer_index);
        Ok(RoundReport {
            player_move: player_move.to_string(),
            computer_move: self.computer_move().to_string(),
            outcome,
        })
    }
}
