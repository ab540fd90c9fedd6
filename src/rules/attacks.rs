//! Attack sets for each piece kind
//!
//! Every function here is pure: it reads an occupancy mask and returns the
//! squares a piece of the given kind threatens from `origin`. Off-board
//! squares are never produced because every step goes through `Pos::offset`.

use crate::board::{Bitboard, PieceKind, Pos, DIAGONAL, ORTHOGONAL};

use super::{AttackRules, CannonRule, SliderRule};

/// Horse jumps as `(dc, dr)`; the leg is one step along the long axis
const HORSE_JUMPS: [(i32, i32); 8] = [
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

/// Squares threatened by a piece of `kind` standing on `origin`.
///
/// # Arguments
/// * `kind` - Piece kind
/// * `origin` - Square the piece stands on
/// * `occupied` - Occupancy used for leg, eye, ray and screen checks
/// * `rules` - Rook and cannon variant
#[must_use]
pub fn attacked_squares(kind: PieceKind, origin: Pos, occupied: &Bitboard, rules: AttackRules) -> Bitboard {
    match kind {
        PieceKind::Pawn | PieceKind::General => step_attacks(origin, &ORTHOGONAL),
        PieceKind::Advisor => step_attacks(origin, &DIAGONAL),
        PieceKind::Horse => horse_attacks(origin, occupied),
        PieceKind::Elephant => elephant_attacks(origin, occupied),
        PieceKind::Rook => rook_attacks(origin, occupied, rules.rook),
        PieceKind::Cannon => cannon_attacks(origin, occupied, rules.cannon),
    }
}

/// One step in each listed direction
fn step_attacks(origin: Pos, directions: &[(i32, i32)]) -> Bitboard {
    directions
        .iter()
        .filter_map(|&(dc, dr)| origin.offset(dc, dr))
        .collect()
}

fn horse_attacks(origin: Pos, occupied: &Bitboard) -> Bitboard {
    let mut attacks = Bitboard::new();
    for &(dc, dr) in &HORSE_JUMPS {
        let leg = if dr.abs() == 2 {
            origin.offset(0, dr / 2)
        } else {
            origin.offset(dc / 2, 0)
        };
        // Leg off the board means the jump is off the board too
        let Some(leg) = leg else { continue };
        if occupied.get(leg) {
            continue;
        }
        if let Some(target) = origin.offset(dc, dr) {
            attacks.set(target);
        }
    }
    attacks
}

fn elephant_attacks(origin: Pos, occupied: &Bitboard) -> Bitboard {
    let mut attacks = Bitboard::new();
    for &(dc, dr) in &DIAGONAL {
        let Some(eye) = origin.offset(dc, dr) else { continue };
        if occupied.get(eye) {
            continue;
        }
        if let Some(target) = eye.offset(dc, dr) {
            attacks.set(target);
        }
    }
    attacks
}

fn rook_attacks(origin: Pos, occupied: &Bitboard, rule: SliderRule) -> Bitboard {
    let mut attacks = Bitboard::new();
    for &(dc, dr) in &ORTHOGONAL {
        let mut cur = origin;
        while let Some(next) = cur.offset(dc, dr) {
            attacks.set(next);
            if rule == SliderRule::Blocking && occupied.get(next) {
                break;
            }
            cur = next;
        }
    }
    attacks
}

fn cannon_attacks(origin: Pos, occupied: &Bitboard, rule: CannonRule) -> Bitboard {
    let mut attacks = Bitboard::new();
    for &(dc, dr) in &ORTHOGONAL {
        let mut cur = origin;
        let mut screened = false;
        while let Some(next) = cur.offset(dc, dr) {
            cur = next;
            let taken = occupied.get(next);
            if !screened {
                screened = taken;
                continue;
            }
            if taken {
                attacks.set(next);
                break;
            }
            if rule == CannonRule::Lenient {
                attacks.set(next);
            }
        }
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(squares: &[(u8, u8)]) -> Bitboard {
        squares.iter().map(|&(c, r)| Pos::new(c, r)).collect()
    }

    fn has(bb: &Bitboard, col: u8, row: u8) -> bool {
        bb.get(Pos::new(col, row))
    }

    const STRICT: AttackRules = AttackRules {
        rook: SliderRule::Blocking,
        cannon: CannonRule::Strict,
    };

    #[test]
    fn test_pawn_and_general_orthogonal() {
        for kind in [PieceKind::Pawn, PieceKind::General] {
            let bb = attacked_squares(kind, Pos::new(4, 3), &Bitboard::new(), STRICT);
            assert_eq!(bb.count(), 4);
            assert!(has(&bb, 4, 2));
            assert!(has(&bb, 4, 4));
            assert!(has(&bb, 3, 3));
            assert!(has(&bb, 5, 3));
        }
    }

    #[test]
    fn test_advisor_diagonal_in_corner() {
        let bb = attacked_squares(PieceKind::Advisor, Pos::new(1, 1), &Bitboard::new(), STRICT);
        assert_eq!(bb.count(), 1);
        assert!(has(&bb, 2, 2));
    }

    #[test]
    fn test_horse_open_board() {
        let bb = attacked_squares(PieceKind::Horse, Pos::new(4, 5), &Bitboard::new(), STRICT);
        assert_eq!(bb.count(), 8);
    }

    #[test]
    fn test_horse_leg_blocking() {
        let origin = Pos::new(4, 5);
        // Leg for the two upward jumps
        let blocked = attacked_squares(PieceKind::Horse, origin, &occ(&[(4, 4)]), STRICT);
        assert!(!has(&blocked, 3, 3));
        assert!(!has(&blocked, 5, 3));
        assert!(has(&blocked, 6, 4));
        assert_eq!(blocked.count(), 6);

        let restored = attacked_squares(PieceKind::Horse, origin, &Bitboard::new(), STRICT);
        assert!(has(&restored, 3, 3));
        assert!(has(&restored, 5, 3));
    }

    #[test]
    fn test_horse_sideways_leg() {
        let blocked = attacked_squares(PieceKind::Horse, Pos::new(4, 5), &occ(&[(5, 5)]), STRICT);
        assert!(!has(&blocked, 6, 4));
        assert!(!has(&blocked, 6, 6));
        assert!(has(&blocked, 5, 3));
    }

    #[test]
    fn test_elephant_eye_blocking() {
        let origin = Pos::new(4, 5);
        let open = attacked_squares(PieceKind::Elephant, origin, &Bitboard::new(), STRICT);
        assert_eq!(open.count(), 4);
        assert!(has(&open, 6, 7));

        let blocked = attacked_squares(PieceKind::Elephant, origin, &occ(&[(5, 6)]), STRICT);
        assert!(!has(&blocked, 6, 7));
        assert_eq!(blocked.count(), 3);
    }

    #[test]
    fn test_rook_stops_at_first_piece() {
        let bb = attacked_squares(PieceKind::Rook, Pos::new(4, 7), &occ(&[(4, 4), (4, 2)]), STRICT);
        assert!(has(&bb, 4, 6));
        assert!(has(&bb, 4, 5));
        assert!(has(&bb, 4, 4));
        assert!(!has(&bb, 4, 3));
        assert!(!has(&bb, 4, 2));
        // Other rays unobstructed
        assert!(has(&bb, 1, 7));
        assert!(has(&bb, 8, 7));
        assert!(has(&bb, 4, 9));
    }

    #[test]
    fn test_rook_unobstructed_variant() {
        let rules = AttackRules::simple();
        let bb = attacked_squares(PieceKind::Rook, Pos::new(4, 7), &occ(&[(4, 4)]), rules);
        assert!(has(&bb, 4, 1));
        assert_eq!(bb.count(), 7 + 8);
    }

    #[test]
    fn test_cannon_without_screen() {
        let bb = attacked_squares(PieceKind::Cannon, Pos::new(1, 5), &Bitboard::new(), STRICT);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_cannon_screen_only() {
        let bb = attacked_squares(PieceKind::Cannon, Pos::new(1, 5), &occ(&[(1, 3)]), STRICT);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_cannon_screen_and_target() {
        let bb = attacked_squares(PieceKind::Cannon, Pos::new(1, 7), &occ(&[(1, 5), (1, 3)]), STRICT);
        assert_eq!(bb.count(), 1);
        assert!(has(&bb, 1, 3));
        assert!(!has(&bb, 1, 4));
        assert!(!has(&bb, 1, 2));
    }

    #[test]
    fn test_cannon_lenient_covers_past_screen() {
        let rules = AttackRules {
            cannon: CannonRule::Lenient,
            ..STRICT
        };
        let bb = attacked_squares(PieceKind::Cannon, Pos::new(1, 5), &occ(&[(1, 3)]), rules);
        assert!(has(&bb, 1, 2));
        assert!(has(&bb, 1, 1));
        assert!(!has(&bb, 1, 4));
        assert!(!has(&bb, 1, 3));
    }

    #[test]
    fn test_never_leaves_board() {
        let occupied = occ(&[(2, 2), (7, 8), (4, 5), (1, 9)]);
        for origin in Pos::all() {
            for kind in PieceKind::ALL {
                for rules in [STRICT, AttackRules::simple()] {
                    let bb = attacked_squares(kind, origin, &occupied, rules);
                    for pos in bb.iter_ones() {
                        assert!(Pos::is_valid(pos.col() as i32, pos.row() as i32));
                        assert_ne!(pos, origin);
                    }
                }
            }
        }
    }
}
