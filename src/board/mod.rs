//! Board representation for the Xiangqi sandbox

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, MAX_PLACEMENT_ATTEMPTS, MOBILE_START};

/// Number of columns (files)
pub const BOARD_COLS: usize = 8;
/// Number of rows (ranks)
pub const BOARD_ROWS: usize = 9;
pub const TOTAL_CELLS: usize = BOARD_COLS * BOARD_ROWS; // 72

/// Which side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The single mobile piece the player moves
    Friendly,
    Enemy,
}

/// Piece types. The mobile friendly piece is a `Rook`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Advisor,
    Elephant,
    Horse,
    Rook,
    Cannon,
    General,
}

impl PieceKind {
    /// Every kind an enemy can be, in palette order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Horse,
        PieceKind::Cannon,
        PieceKind::Elephant,
        PieceKind::Advisor,
        PieceKind::Pawn,
        PieceKind::General,
    ];

    /// Single-letter label used on the board
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Advisor => 'A',
            PieceKind::Elephant => 'E',
            PieceKind::Horse => 'H',
            PieceKind::Rook => 'R',
            PieceKind::Cannon => 'C',
            PieceKind::General => 'G',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Advisor => "Advisor",
            PieceKind::Elephant => "Elephant",
            PieceKind::Horse => "Horse",
            PieceKind::Rook => "Rook",
            PieceKind::Cannon => "Cannon",
            PieceKind::General => "General",
        }
    }
}

/// Lifecycle of a piece. Marked pieces are waiting for their capture
/// animation to finish and are invisible to every rule query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    Alive,
    MarkedForRemoval,
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub pos: Pos,
    pub state: PieceState,
}

impl Piece {
    #[inline]
    pub fn new(kind: PieceKind, side: Side, pos: Pos) -> Self {
        Self {
            kind,
            side,
            pos,
            state: PieceState::Alive,
        }
    }

    #[inline]
    pub fn enemy(kind: PieceKind, pos: Pos) -> Self {
        Self::new(kind, Side::Enemy, pos)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == PieceState::Alive
    }

    #[inline]
    pub fn is_enemy(&self) -> bool {
        self.side == Side::Enemy
    }
}

/// Position on the board, 1-based: `col` in 1..=8, `row` in 1..=9.
/// Always on the board; the fields are only reachable through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    col: u8,
    row: u8,
}

impl Pos {
    /// # Panics
    /// When `(col, row)` is off the board. Use [`Pos::try_new`] for
    /// coordinates that come from outside.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        match Self::try_new(col, row) {
            Some(pos) => pos,
            None => panic!("position off the board"),
        }
    }

    #[inline]
    pub const fn try_new(col: u8, row: u8) -> Option<Self> {
        if Self::is_valid(col as i32, row as i32) {
            Some(Self { col, row })
        } else {
            None
        }
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn to_index(self) -> usize {
        (self.row as usize - 1) * BOARD_COLS + (self.col as usize - 1)
    }

    /// Inverse of [`Pos::to_index`]; `idx` must be below `TOTAL_CELLS`
    #[inline]
    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            col: (idx % BOARD_COLS) as u8 + 1,
            row: (idx / BOARD_COLS) as u8 + 1,
        }
    }

    #[inline]
    pub const fn is_valid(col: i32, row: i32) -> bool {
        col >= 1 && col <= BOARD_COLS as i32 && row >= 1 && row <= BOARD_ROWS as i32
    }

    /// Step by `(dc, dr)`, or `None` when that leaves the board
    #[inline]
    pub fn offset(self, dc: i32, dr: i32) -> Option<Pos> {
        let col = self.col as i32 + dc;
        let row = self.row as i32 + dr;
        if Self::is_valid(col, row) {
            Some(Pos {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (self.col as i32 - other.col as i32).abs() + (self.row as i32 - other.row as i32).abs()
    }

    /// Same column or same row (and not the same square)
    #[inline]
    pub fn shares_line(self, other: Pos) -> bool {
        self != other && (self.col == other.col || self.row == other.row)
    }

    /// Iterate all 72 squares in index order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// The four orthogonal directions as `(dc, dr)`: up, down, left, right
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// The four diagonal directions as `(dc, dr)`
pub const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
