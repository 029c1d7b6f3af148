//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Mark, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Side of one cell
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
    /// Render the board and return the clicked cell if any.
    ///
    /// Only empty cells are clickable, and only while `accepting_input`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(150.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.layout(response.rect);

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        let hovered = if accepting_input {
            response
                .hover_pos()
                .and_then(|p| self.screen_to_board(p))
                .filter(|&pos| board.is_empty(pos))
        } else {
            None
        };

        self.draw_cells(&painter, hovered);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Fit the grid into `rect`
    fn layout(&mut self, rect: Rect) {
        self.board_rect = rect;
        let side = rect.width().min(rect.height());
        let gaps = CELL_GAP * (BOARD_SIZE as f32 - 1.0);
        self.cell_size = (side - 2.0 * BOARD_MARGIN - gaps) / BOARD_SIZE as f32;
    }

    fn draw_cells(&self, painter: &Painter, hovered: Option<Pos>) {
        for pos in Pos::all() {
            let fill = if hovered == Some(pos) { CELL_HOVER } else { CELL_BG };
            painter.rect_filled(self.cell_rect(pos), CornerRadius::same(CELL_ROUNDING), fill);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        let font = egui::FontId::proportional(self.cell_size * MARK_FONT_RATIO);
        for pos in Pos::all() {
            let color = match board.get(pos) {
                Mark::X => X_MARK,
                Mark::O => O_MARK,
                Mark::Empty => continue,
            };
            painter.text(
                self.board_to_screen(pos),
                egui::Align2::CENTER_CENTER,
                board.get(pos).symbol(),
                font.clone(),
                color,
            );
        }
    }

    /// Small dot in the corner of the most recent move
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);

        for pos in line {
            painter.rect_stroke(
                self.cell_rect(*pos),
                CornerRadius::same(CELL_ROUNDING),
                stroke,
                StrokeKind::Inside,
            );
        }

        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], stroke);
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let step = self.cell_size + CELL_GAP;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * step,
                BOARD_MARGIN + pos.row as f32 * step,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell; gaps and margins map to `None`
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        Pos::all().find(|&pos| self.cell_rect(pos).contains(screen_pos))
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        // 360 = 2 * 20 margin + 2 * 10 gap + 3 * 100 cell
        let mut view = BoardView::default();
        view.layout(Rect::from_min_size(Pos2::ZERO, Vec2::splat(360.0)));
        view
    }

    #[test]
    fn test_layout_cell_size() {
        assert!((view().cell_size - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_screen_to_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(70.0, 70.0)), Some(Pos::new(0, 0)));
        assert_eq!(view.screen_to_board(Pos2::new(180.0, 290.0)), Some(Pos::new(2, 1)));
        // Gap between columns 0 and 1
        assert_eq!(view.screen_to_board(Pos2::new(125.0, 70.0)), None);
        // Margin
        assert_eq!(view.screen_to_board(Pos2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_board_to_screen_round_trip() {
        let view = view();
        for pos in Pos::all() {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }
}
