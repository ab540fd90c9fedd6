//! Board rendering and pointer input for the sandbox GUI

use crate::board::{Bitboard, Board, Piece, Pos, Side, BOARD_COLS, BOARD_ROWS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::CaptureAnimation;
use super::theme::*;

/// What the player did on the board this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Click on an empty square
    Place(Pos),
    /// Right-click on a piece
    Remove(Pos),
    /// Drag of a piece from one square to another
    Drop { from: Pos, to: Pos },
}

/// Overlays drawn on top of the squares
pub struct Overlays<'a> {
    pub danger_zones: Option<Bitboard>,
    pub safe_squares: Option<Bitboard>,
    pub best_move: Option<Pos>,
    pub follow_up: Option<Pos>,
    pub last_move: Option<Pos>,
    pub capture_animation: Option<&'a CaptureAnimation>,
}

/// Board view handles rendering and input for the board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Square of the piece being dragged
    dragging: Option<Pos>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            dragging: None,
        }
    }
}

impl BoardView {
    /// Render the board and return the player's action, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlays: &Overlays<'_>) -> Option<BoardAction> {
        let available = ui.available_size();

        // Square cells: fit whichever dimension is tighter
        let cell_w = (available.x - 2.0 * BOARD_MARGIN) / BOARD_COLS as f32;
        let cell_h = (available.y - 2.0 * BOARD_MARGIN) / BOARD_ROWS as f32;
        self.cell_size = cell_w.min(cell_h).max(20.0);
        let size = Vec2::new(
            self.cell_size * BOARD_COLS as f32 + 2.0 * BOARD_MARGIN,
            self.cell_size * BOARD_ROWS as f32 + 2.0 * BOARD_MARGIN,
        );

        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_cells(&painter);
        self.draw_coordinates(&painter);

        if let Some(zones) = overlays.danger_zones {
            self.fill_squares(&painter, zones, danger_zone());
        }
        if let Some(safe) = overlays.safe_squares {
            self.fill_squares(&painter, safe, safe_square());
        }

        self.draw_pieces(&painter, board, overlays.capture_animation);

        if let Some(pos) = overlays.last_move {
            painter.circle_filled(self.cell_corner_marker(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(pos) = overlays.best_move {
            self.draw_ring(&painter, pos, BEST_MOVE);
        }
        if let Some(pos) = overlays.follow_up {
            self.draw_ring(&painter, pos, FOLLOW_UP);
        }

        self.handle_pointer(ui, &response, &painter, board)
    }

    fn handle_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        painter: &Painter,
        board: &Board,
    ) -> Option<BoardAction> {
        if response.drag_started() {
            let origin = ui.input(|i| i.pointer.press_origin());
            self.dragging = origin
                .and_then(|p| self.screen_to_board(p))
                .filter(|&pos| board.is_occupied(pos));
        }

        if let Some(from) = self.dragging {
            if let Some(pointer) = response.interact_pointer_pos() {
                if let Some(piece) = board.piece_at(from) {
                    self.draw_piece_at(painter, pointer, piece, 1.0);
                }
            }
            if response.drag_stopped() {
                self.dragging = None;
                let to = ui
                    .input(|i| i.pointer.latest_pos())
                    .and_then(|p| self.screen_to_board(p))?;
                return Some(BoardAction::Drop { from, to });
            }
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        painter.rect_filled(self.cell_rect(hovered), CornerRadius::ZERO, hover_cell());

        if response.secondary_clicked() && board.is_occupied(hovered) {
            return Some(BoardAction::Remove(hovered));
        }
        if response.clicked() && !board.is_occupied(hovered) {
            return Some(BoardAction::Place(hovered));
        }
        None
    }

    /// Draw the 8x9 checkered squares
    fn draw_cells(&self, painter: &Painter) {
        let stroke = Stroke::new(1.0, GRID_LINE);
        for pos in Pos::all() {
            let rect = self.cell_rect(pos);
            if (pos.col() + pos.row()) % 2 == 0 {
                painter.rect_filled(rect, CornerRadius::ZERO, CELL_DARK);
            }
            painter.line_segment([rect.left_top(), rect.right_top()], stroke);
            painter.line_segment([rect.left_top(), rect.left_bottom()], stroke);
        }
        let inner = self.inner_rect();
        painter.line_segment([inner.right_top(), inner.right_bottom()], stroke);
        painter.line_segment([inner.left_bottom(), inner.right_bottom()], stroke);
    }

    /// Column numbers along the top, row numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        for col in 1..=BOARD_COLS as u8 {
            let center = self.cell_rect(Pos::new(col, 1)).center_top() - Vec2::new(0.0, BOARD_MARGIN * 0.5);
            painter.text(center, egui::Align2::CENTER_CENTER, col, font.clone(), GRID_LINE);
        }
        for row in 1..=BOARD_ROWS as u8 {
            let center = self.cell_rect(Pos::new(1, row)).left_center() - Vec2::new(BOARD_MARGIN * 0.5, 0.0);
            painter.text(center, egui::Align2::CENTER_CENTER, row, font.clone(), GRID_LINE);
        }
    }

    fn fill_squares(&self, painter: &Painter, squares: Bitboard, color: Color32) {
        for pos in squares.iter_ones() {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(3), color);
        }
    }

    /// Draw every piece; marked pieces fade out with the capture animation
    fn draw_pieces(&self, painter: &Painter, board: &Board, animation: Option<&CaptureAnimation>) {
        let fade = animation.map_or(0.0, |a| 1.0 - a.progress());
        for piece in board.all_pieces_including_marked() {
            if Some(piece.pos) == self.dragging && piece.is_alive() {
                continue;
            }
            let alpha = if piece.is_alive() { 1.0 } else { fade };
            if alpha > 0.0 {
                self.draw_piece_at(painter, self.board_to_screen(piece.pos), piece, alpha);
            }
        }
    }

    fn draw_piece_at(&self, painter: &Painter, center: Pos2, piece: &Piece, alpha: f32) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let rim = match piece.side {
            Side::Friendly => FRIENDLY_PIECE,
            Side::Enemy => ENEMY_PIECE,
        };

        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, Color32::from_black_alpha((60.0 * alpha) as u8));
        painter.circle_filled(center, radius, PIECE_FACE.gamma_multiply(alpha));
        painter.circle_stroke(center, radius * 0.85, Stroke::new(2.0, rim.gamma_multiply(alpha)));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            piece.kind.letter(),
            egui::FontId::proportional(radius),
            rim.gamma_multiply(alpha),
        );
    }

    fn draw_ring(&self, painter: &Painter, pos: Pos, color: Color32) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 4.0;
        painter.circle_stroke(self.board_to_screen(pos), radius, Stroke::new(MARKER_STROKE, color));
    }

    fn inner_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::new(self.cell_size * BOARD_COLS as f32, self.cell_size * BOARD_ROWS as f32),
        )
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + (pos.col() - 1) as f32 * self.cell_size,
                BOARD_MARGIN + (pos.row() - 1) as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_corner_marker(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).left_top() + Vec2::splat(LAST_MOVE_MARKER_RADIUS + 3.0)
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32 + 1;
        let row = (relative.y / self.cell_size).floor() as i32 + 1;
        let col = u8::try_from(col).ok()?;
        let row = u8::try_from(row).ok()?;
        Pos::try_new(col, row)
    }

    /// Centre of a square in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
