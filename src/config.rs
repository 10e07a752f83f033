use egui::{Color32, FontId, Pos2, Vec2};

use crate::grid::{COLS, ROWS};

/// Fixed layout and style of the rendered board.
///
/// Built once at startup and handed to whatever needs it; nothing reads
/// layout constants from globals.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    // Logical size of the drawing surface
    pub width: f32,
    pub height: f32,

    // Gap between the top/bottom edge of the surface and the board
    pub margin: f32,
    pub border: f32,

    pub background: Color32,
    pub light_square: Color32,
    pub dark_square: Color32,
    pub border_color: Color32,
    pub white_piece: Color32,
    pub black_piece: Color32,
    pub piece_font: FontId,

    pub fps_font: FontId,
    pub fps_color: Color32,
    pub fps_position: Pos2,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
            margin: 40.0,
            border: 4.0,
            background: Color32::WHITE,
            light_square: Color32::from_rgb(240, 217, 181),
            dark_square: Color32::from_rgb(181, 136, 99),
            border_color: Color32::BLACK,
            white_piece: Color32::WHITE,
            black_piece: Color32::BLACK,
            piece_font: FontId::proportional(48.0),
            fps_font: FontId::proportional(15.0),
            fps_color: Color32::from_rgb(0xFF, 0x00, 0x00),
            fps_position: Pos2::new(5.0, 17.0),
        }
    }
}

impl BoardConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Side length of one square, truncated to a whole number of units.
    pub fn square_size(&self) -> f32 {
        ((self.height - 2.0 * self.margin) / ROWS as f32).trunc()
    }

    /// Horizontal distance from the surface edge to the board, which keeps
    /// the board centred on a surface wider than it is tall.
    pub fn margin_offset_x(&self) -> f32 {
        (self.width - self.height) / 2.0 + self.margin
    }

    /// Top-left corner of the board in surface coordinates.
    pub fn board_origin(&self) -> Vec2 {
        Vec2::new(self.margin_offset_x(), self.margin)
    }

    pub fn board_size(&self) -> Vec2 {
        let cell_size = self.square_size();
        Vec2::new(cell_size * COLS as f32, cell_size * ROWS as f32)
    }

    /// Offset of a square relative to the board origin.
    pub fn square_offset(&self, row: usize, col: usize) -> Vec2 {
        let cell_size = self.square_size();
        Vec2::new(col as f32 * cell_size, row as f32 * cell_size)
    }

    /// Bottom edge of a piece glyph's text line, chosen so a line one font
    /// size tall sits vertically centred inside its square.
    pub fn piece_text_bottom(&self) -> f32 {
        (self.square_size() + self.piece_font.size) / 2.0
    }
}
