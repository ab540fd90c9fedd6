//! Piece values and scoring weights

use crate::board::PieceKind;

/// Fixed scoring weights
pub struct ScoreWeight;

impl ScoreWeight {
    /// Per unit of `10 - manhattan distance` to the centre
    pub const CENTRALITY: f64 = 2.0;
    /// Per ray whose first occupant is an enemy
    pub const THREAT_POTENTIAL: f64 = 12.0;
    /// Capturing a general is multiplied by this on top of its value
    pub const GENERAL_CAPTURE_MULTIPLIER: f64 = 10.0;
    /// Share of value credited for each piece cleared beyond the capture
    pub const REMOVAL_DAMPING: f64 = 0.5;
    /// Added when the destination is not attacked after removals
    pub const SAFETY_BONUS: f64 = 40.0;
    /// Share of the follow-up score added after capturing a general
    pub const FOLLOW_UP_SHARE: f64 = 0.7;
}

/// Which scoring family to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringProfile {
    /// General worth 1000, centrality damped
    #[default]
    Refined,
    /// General worth 100, undamped centrality
    Simple,
}

impl ScoringProfile {
    #[inline]
    pub fn general_value(self) -> f64 {
        match self {
            ScoringProfile::Refined => 1000.0,
            ScoringProfile::Simple => 100.0,
        }
    }

    #[inline]
    pub fn centrality_damping(self) -> f64 {
        match self {
            ScoringProfile::Refined => 0.8,
            ScoringProfile::Simple => 1.0,
        }
    }
}

/// Base value of capturing a piece of `kind`
#[inline]
pub fn capture_value(kind: PieceKind, profile: ScoringProfile) -> f64 {
    match kind {
        PieceKind::General => profile.general_value(),
        PieceKind::Rook => 70.0,
        PieceKind::Cannon => 60.0,
        PieceKind::Horse => 50.0,
        PieceKind::Elephant => 40.0,
        PieceKind::Advisor => 30.0,
        PieceKind::Pawn => 20.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ordering() {
        let profile = ScoringProfile::Refined;
        let by_value = [
            PieceKind::General,
            PieceKind::Rook,
            PieceKind::Cannon,
            PieceKind::Horse,
            PieceKind::Elephant,
            PieceKind::Advisor,
            PieceKind::Pawn,
        ];
        for pair in by_value.windows(2) {
            assert!(capture_value(pair[0], profile) > capture_value(pair[1], profile));
        }
    }

    #[test]
    fn test_general_value_per_profile() {
        assert_eq!(capture_value(PieceKind::General, ScoringProfile::Refined), 1000.0);
        assert_eq!(capture_value(PieceKind::General, ScoringProfile::Simple), 100.0);
        assert_eq!(capture_value(PieceKind::Rook, ScoringProfile::Simple), 70.0);
    }
}
