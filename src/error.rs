//! Error types for the sandbox engine
//!
//! Nothing here is fatal: every variant is reported back to the caller,
//! which degrades to "no recommendation" or "no placement".

use crate::board::Pos;

/// Sandbox-specific errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SandboxError {
    /// The board has no friendly piece to move
    #[error("No mobile piece on the board")]
    NoMobilePiece,

    /// Random placement gave up after its bounded attempts
    #[error("No free square found after {attempts} attempts")]
    NoFreeSquare { attempts: u32 },

    /// Every candidate destination is attacked
    #[error("No safe move available")]
    NoSafeMove,

    /// Target square is already taken
    #[error("Square {0} is occupied")]
    Occupied(Pos),

    /// Nothing to pick up at this square
    #[error("No piece at {0}")]
    NoPieceAt(Pos),

    /// An enemy was dropped onto the mobile piece
    #[error("The mobile piece cannot be captured")]
    MobileCannotBeCaptured,
}

/// Result type for sandbox operations
pub type SandboxResult<T> = Result<T, SandboxError>;
