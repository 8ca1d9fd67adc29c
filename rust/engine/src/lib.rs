//! # roshambo-engine: Commitment-Backed Move Game Core
//!
//! Game logic for generalized rock-paper-scissors over any odd-sized move
//! set, played against a computer opponent whose move is cryptographically
//! committed before the player chooses. The engine is free of terminal I/O;
//! the `roshambo` CLI supplies streams and drives the session loop.
//!
//! ## Core Modules
//!
//! - [`moves`] - Validated, ordered move sets
//! - [`relation`] - Cyclic beats/loses-to algebra and round resolution
//! - [`table`] - Win/lose/draw grid derived from a relation
//! - [`commitment`] - HMAC-SHA256 commit-reveal for the computer's move
//! - [`session`] - Per-session state: committed move plus round resolution
//! - [`logger`] - JSONL round transcript serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use roshambo_engine::moves::MoveSet;
//! use roshambo_engine::relation::{MoveRelation, Outcome};
//!
//! let moves = MoveSet::new(vec![
//!     "rock".to_string(),
//!     "paper".to_string(),
//!     "scissors".to_string(),
//! ])
//! .unwrap();
//!
//! let relation = MoveRelation::new(&moves);
//! // Each move defeats the half of the set that follows it cyclically.
//! assert_eq!(relation.resolve("rock", "paper").unwrap(), Outcome::PlayerWins);
//! assert_eq!(relation.resolve("rock", "rock").unwrap(), Outcome::Draw);
//! ```
//!
//! ## Commit-Reveal Fairness
//!
//! The computer's move is bound to a fresh 256-bit key before any player
//! input; revealing the key afterwards lets the player recompute the digest:
//!
//! ```rust
//! use roshambo_engine::commitment::{Commitment, SecretKey};
//!
//! let commitment = Commitment::bind(SecretKey::from_bytes([7u8; 32]), "rock");
//! assert!(Commitment::verify(commitment.reveal(), "rock", commitment.digest()));
//! assert!(!Commitment::verify(commitment.reveal(), "paper", commitment.digest()));
//! ```

pub mod commitment;
pub mod errors;
pub mod logger;
pub mod moves;
pub mod relation;
pub mod session;
pub mod table;
