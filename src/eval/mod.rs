//! Evaluation module for candidate moves
//!
//! The score of a destination considers:
//! - Centrality
//! - Threat potential along the four rays
//! - Capture value (a general is weighted far above everything else)
//! - Pieces cleared by item effects
//! - Safety after all removals

pub mod heuristic;
pub mod values;

pub use heuristic::{score_move, threat_potential};
pub use values::{capture_value, ScoreWeight, ScoringProfile};
