//! Board rendering for the Connect Four GUI

use crate::{Board, Cell, Pos, BOARD_HEIGHT, BOARD_WIDTH};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board. Returns the hovered column and whether it was clicked.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepting_input: bool,
    ) -> (Option<u8>, bool) {
        let available = ui.available_size();
        let side = available.x.min(available.y);
        let margin = side * BOARD_MARGIN_RATIO;
        let grid_side = side - 2.0 * margin;
        self.cell_size = grid_side / BOARD_WIDTH.max(BOARD_HEIGHT) as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(margin),
            Vec2::new(
                self.cell_size * BOARD_WIDTH as f32,
                self.cell_size * BOARD_HEIGHT as f32,
            ),
        );

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_column(p))
            .filter(|_| accepting_input);
        if let Some(x) = hovered {
            self.draw_hover(&painter, board, x);
        }

        self.draw_stones(&painter, board);
        self.draw_grid(&painter);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        (hovered, response.clicked() && hovered.is_some())
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.board_rect.min;
        let max = self.board_rect.max;

        for i in 0..=BOARD_WIDTH {
            let x = min.x + i as f32 * self.cell_size;
            painter.line_segment([Pos2::new(x, min.y), Pos2::new(x, max.y)], stroke);
        }
        for j in 0..=BOARD_HEIGHT {
            let y = min.y + j as f32 * self.cell_size;
            painter.line_segment([Pos2::new(min.x, y), Pos2::new(max.x, y)], stroke);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in Board::positions() {
            let color = match board.get(pos) {
                Cell::PlayerA => PLAYER_A_STONE,
                Cell::PlayerB => PLAYER_B_STONE,
                Cell::Empty | Cell::Undefined => continue,
            };
            self.fill_cell(painter, pos, color);
        }
    }

    fn fill_cell(&self, painter: &Painter, pos: Pos, color: Color32) {
        painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::ZERO, color);
    }

    /// Shade the hovered column and preview where the stone would land
    fn draw_hover(&self, painter: &Painter, board: &Board, x: u8) {
        let column = Rect::from_min_max(
            Pos2::new(
                self.board_rect.min.x + x as f32 * self.cell_size,
                self.board_rect.min.y,
            ),
            Pos2::new(
                self.board_rect.min.x + (x + 1) as f32 * self.cell_size,
                self.board_rect.max.y,
            ),
        );
        painter.rect_filled(column, CornerRadius::ZERO, hover_column());

        if let Some(y) = board.first_empty_row(x) {
            self.fill_cell(painter, Pos::new(x, y), hover_preview());
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let radius = self.cell_size * LAST_MOVE_MARKER_RATIO;
        painter.circle_filled(self.cell_rect(pos).center(), radius, LAST_MOVE_MARKER);
    }

    /// Outline the winning run
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(WIN_OUTLINE_WIDTH, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            let start = self.cell_rect(pair[0]).center();
            let end = self.cell_rect(pair[1]).center();
            painter.line_segment([start, end], stroke);
        }
    }

    /// Screen rectangle of a cell. Row 0 is drawn at the bottom.
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let left = self.board_rect.min.x + pos.x as f32 * self.cell_size;
        let row_from_top = BOARD_HEIGHT - 1 - pos.y as usize;
        let top = self.board_rect.min.y + row_from_top as f32 * self.cell_size;
        Rect::from_min_size(Pos2::new(left, top), Vec2::splat(self.cell_size))
    }

    /// Column under a screen point, if it is over the board
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<u8> {
        if !self.board_rect.contains(screen_pos) {
            return None;
        }
        let col = ((screen_pos.x - self.board_rect.min.x) / self.cell_size).floor() as i32;
        if col >= 0 && col < BOARD_WIDTH as i32 {
            Some(col as u8)
        } else {
            None
        }
    }
}
