use crate::{
    config::BoardConfig,
    fps::FrameStats,
    grid::{Board, SquareColor, chess::Side},
    surface::Surface,
};

/// Paint one full frame: background, FPS readout, then the board.
///
/// Leaves the surface origin where it found it.
pub fn draw(surface: &mut impl Surface, board: &Board, stats: &FrameStats, config: &BoardConfig) {
    surface.clear_rect(0.0, 0.0, config.width, config.height);

    surface.set_font(config.fps_font.clone());
    surface.set_fill_color(config.fps_color);
    surface.fill_text(
        &stats.readout(),
        config.fps_position.x,
        config.fps_position.y,
    );

    let origin = config.board_origin();
    surface.translate(origin.x, origin.y);

    let board_size = config.board_size();
    surface.set_fill_color(config.border_color);
    surface.fill_rect(
        -config.border,
        -config.border,
        board_size.x + 2.0 * config.border,
        board_size.y + 2.0 * config.border,
    );

    let cell_size = config.square_size();
    let text_bottom = config.piece_text_bottom();
    surface.set_font(config.piece_font.clone());

    for square in board.squares() {
        let offset = config.square_offset(square.row(), square.col());
        surface.translate(offset.x, offset.y);

        surface.set_fill_color(match square.color() {
            SquareColor::Light => config.light_square,
            SquareColor::Dark => config.dark_square,
        });
        surface.fill_rect(0.0, 0.0, cell_size, cell_size);

        if let Some(piece) = square.piece() {
            let glyph = piece.glyph();
            let width = surface.measure_text(glyph);
            surface.set_fill_color(match piece.side() {
                Side::White => config.white_piece,
                Side::Black => config.black_piece,
            });
            surface.fill_text(glyph, (cell_size - width) / 2.0, text_bottom);
        }

        surface.translate(-offset.x, -offset.y);
    }

    surface.translate(-origin.x, -origin.y);
}
