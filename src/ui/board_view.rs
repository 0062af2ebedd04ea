//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Pos, Position};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Cells per side
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
            size: 3,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// `can_play` decides whether a hovered cell is highlighted as playable
    /// and whether a click on it is reported.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        position: &Position,
        last_move: Option<Pos>,
        winning_line: &[Pos],
        can_play: impl Fn(Pos) -> bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.size = position.size();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, position);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if !winning_line.is_empty() {
            self.draw_winning_line(&painter, winning_line);
        }

        let mut clicked_pos = None;

        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(pos) = self.screen_to_board(pointer_pos) {
                let is_valid = can_play(pos);
                if position.board().is_empty(pos) {
                    let color = if is_valid { hover_valid() } else { hover_invalid() };
                    let rect = self.cell_rect(pos).shrink(4.0);
                    painter.rect_filled(rect, CornerRadius::same(4), color);
                }
                if response.clicked() && is_valid {
                    clicked_pos = Some(pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw the N x N cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.size as f32 * self.cell_size;

        for i in 0..=self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw every party's mark, colored by roster index
    fn draw_marks(&self, painter: &Painter, position: &Position) {
        let font = FontId::monospace(self.cell_size * MARK_SIZE_RATIO);
        for (pos, id) in position.board().occupied() {
            let Some(party) = position.party(id) else {
                continue;
            };
            painter.text(
                self.board_to_screen(pos),
                egui::Align2::CENTER_CENTER,
                party.mark,
                font.clone(),
                party_color(id.index()),
            );
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Strike through the completed line
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            painter.rect_stroke(
                self.cell_rect(*pos).shrink(3.0),
                CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Inside,
            );
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(size: usize) -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(
                Pos2::ZERO,
                Vec2::splat(2.0 * BOARD_MARGIN + 100.0 * size as f32),
            ),
            size,
        }
    }

    #[test]
    fn test_screen_board_roundtrip() {
        let view = view(4);
        for row in 0..4 {
            for col in 0..4 {
                let pos = Pos::new(row, col);
                assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
            }
        }
    }

    #[test]
    fn test_margin_is_outside_the_board() {
        let view = view(3);
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
        let far = BOARD_MARGIN + 300.0 + 1.0;
        assert_eq!(view.screen_to_board(Pos2::new(far, 50.0)), None);
    }
}
