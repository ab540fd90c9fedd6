//! Xiangqi single-side puzzle sandbox
//!
//! Enemy pieces are placed freely on an 8x9 board and a single friendly
//! rook is moved around them. The engine answers three questions for the
//! rook:
//! - Which empty squares are under enemy attack
//! - Which reachable squares are safe, and how good each one is
//! - Which move to recommend, optionally using the two item effects
//!   (clear the destination's row and column, or clear the travelled path)
//!
//! # Architecture
//!
//! - [`board`]: Pieces, positions and occupancy
//! - [`rules`]: Per-piece attack sets and the threat oracle
//! - [`eval`]: Heuristic scoring of a destination
//! - [`search`]: Candidate generation and best-move selection
//! - [`engine`]: In-process API used by the UI
//! - [`ui`]: Desktop sandbox built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use xiangqi::{Board, Engine, MoveOptions, PieceKind, Pos};
//!
//! let engine = Engine::new();
//! let mut board = Board::new();
//! board.place(PieceKind::Horse, Pos::new(6, 4)).unwrap();
//! board.place(PieceKind::Cannon, Pos::new(1, 7)).unwrap();
//!
//! let zones = engine.compute_danger_zones(&board);
//! println!("{} squares under attack", zones.count());
//!
//! if let Some(best) = engine.compute_best_move(&board, MoveOptions::default()) {
//!     println!("Move rook to {} (score {:.1})", best.destination, best.score);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Bitboard, Board, Piece, PieceKind, Pos, Side, BOARD_COLS, BOARD_ROWS};
pub use engine::{Engine, EngineConfig};
pub use error::{SandboxError, SandboxResult};
pub use search::{CandidateMove, MoveOptions, MoveResult, Selection};
