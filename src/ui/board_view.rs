//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Cell, Player, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Side length of one cell
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks on occupied cells are reported too; the coordinator decides
    /// whether they count.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(board_pos);
                    self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the two inner vertical and horizontal lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, cell) in board.cells() {
            match cell {
                Cell::PlayerOne => self.draw_cross(painter, pos, CROSS_COLOR),
                Cell::PlayerTwo => self.draw_ring(painter, pos, RING_COLOR),
                Cell::Empty => {}
            }
        }
    }

    /// Cross with rounded arm ends
    fn draw_cross(&self, painter: &Painter, pos: Pos, color: egui::Color32) {
        let center = self.board_to_screen(pos);
        let arm = self.cell_size * CROSS_ARM_RATIO;
        let width = self.cell_size * MARK_STROKE_RATIO;
        let stroke = Stroke::new(width, color);

        for (a, b) in [
            (Vec2::new(-arm, -arm), Vec2::new(arm, arm)),
            (Vec2::new(arm, -arm), Vec2::new(-arm, arm)),
        ] {
            painter.line_segment([center + a, center + b], stroke);
            painter.circle_filled(center + a, width * 0.5, color);
            painter.circle_filled(center + b, width * 0.5, color);
        }
    }

    /// Ring: outer disc with the board color punched out
    fn draw_ring(&self, painter: &Painter, pos: Pos, color: egui::Color32) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * RING_OUTER_RATIO, color);
        painter.circle_filled(center, self.cell_size * RING_INNER_RATIO, BOARD_BG);
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-12.0, 12.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Strike through the completed line
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(GRID_LINE_WIDTH * 1.5, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], stroke);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_valid: bool) {
        let rect = self.cell_rect(pos).shrink(GRID_LINE_WIDTH);

        if !is_valid {
            painter.rect_filled(rect, CornerRadius::same(4), hover_invalid());
            return;
        }

        painter.rect_filled(rect, CornerRadius::same(4), hover_valid());
        let ghost = match turn {
            Player::PlayerOne => CROSS_COLOR.gamma_multiply(0.3),
            Player::PlayerTwo => RING_COLOR.gamma_multiply(0.3),
        };
        match turn {
            Player::PlayerOne => self.draw_cross(painter, pos, ghost),
            Player::PlayerTwo => self.draw_ring(painter, pos, ghost),
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(300.0 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_to_board() {
        let view = view();
        let origin = Pos2::new(10.0 + BOARD_MARGIN, 20.0 + BOARD_MARGIN);

        assert_eq!(view.screen_to_board(origin + Vec2::new(1.0, 1.0)), Some(Pos::new(0, 0)));
        assert_eq!(view.screen_to_board(origin + Vec2::new(150.0, 50.0)), Some(Pos::new(0, 1)));
        assert_eq!(view.screen_to_board(origin + Vec2::new(50.0, 250.0)), Some(Pos::new(2, 0)));
        assert_eq!(view.screen_to_board(origin + Vec2::new(299.0, 299.0)), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_screen_outside_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(10.0 + BOARD_MARGIN + 305.0, 100.0)), None);
    }

    #[test]
    fn test_board_to_screen_is_cell_center() {
        let view = view();
        for pos in Pos::all() {
            let center = view.board_to_screen(pos);
            assert_eq!(view.screen_to_board(center), Some(pos));
        }
        assert_eq!(
            view.board_to_screen(Pos::new(1, 1)),
            Pos2::new(10.0 + BOARD_MARGIN + 150.0, 20.0 + BOARD_MARGIN + 150.0)
        );
    }
}
