//! Search module for the mobile piece
//!
//! Contains:
//! - Candidate generation along the four rays, with item effects
//! - Safe-move filtering, ranking and best-move selection with a
//!   one-step follow-up after a general capture

pub mod movegen;
pub mod selector;

pub use movegen::{generate_candidates, CandidateMove, MoveOptions};
pub use selector::{safe_moves, select_best, MoveResult, Selection};
