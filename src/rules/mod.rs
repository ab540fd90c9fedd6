//! Piece movement rules for the sandbox
//!
//! This module implements:
//! - Per-piece attack sets with leg/eye blocking and cannon screens
//! - The threat oracle (is a square attacked, optionally after removals)
//! - Danger zones for overlay highlighting

pub mod attacks;
pub mod threat;

// Re-exports for convenient access
pub use attacks::attacked_squares;
pub use threat::{attackers_of, danger_zones, is_attacked, is_attacked_after_removal};

/// How the rook slides along a ray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderRule {
    /// Stop at (and include) the first occupied square
    #[default]
    Blocking,
    /// Cover the whole ray to the edge regardless of occupancy
    Unobstructed,
}

/// Which squares a cannon covers past its screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CannonRule {
    /// Only the first occupied square past the screen
    #[default]
    Strict,
    /// Every empty square past the screen, up to and including the next piece
    Lenient,
}

/// Rule variant used by attack generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackRules {
    pub rook: SliderRule,
    pub cannon: CannonRule,
}

impl AttackRules {
    /// Unobstructed rook with the lenient cannon
    pub const fn simple() -> Self {
        Self {
            rook: SliderRule::Unobstructed,
            cannon: CannonRule::Lenient,
        }
    }
}
