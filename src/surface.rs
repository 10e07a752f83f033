use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

/// A 2D drawing surface with a translatable origin.
///
/// Text is positioned by the bottom-left corner of its line box, so `y` is
/// the bottom edge of the text rather than the font baseline. Translations
/// are cumulative, so a caller restores the previous origin by translating
/// back by the same amount.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_fill_color(&mut self, color: Color32);
    fn set_font(&mut self, font: FontId);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn measure_text(&self, text: &str) -> f32;
    fn translate(&mut self, dx: f32, dy: f32);
}

/// Paints through an egui [`Painter`] onto a region of the screen.
pub struct EguiSurface<'p> {
    painter: &'p Painter,
    origin: Pos2,
    offset: Vec2,
    clear_color: Color32,
    fill: Color32,
    font: FontId,
}

impl<'p> EguiSurface<'p> {
    pub fn new(painter: &'p Painter, origin: Pos2, clear_color: Color32) -> Self {
        Self {
            painter,
            origin,
            offset: Vec2::ZERO,
            clear_color,
            fill: Color32::BLACK,
            font: FontId::default(),
        }
    }

    fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_min_size(
            self.origin + self.offset + Vec2::new(x, y),
            Vec2::new(width, height),
        )
    }
}

impl Surface for EguiSurface<'_> {
    // egui redraws everything each frame, so clearing means painting the
    // background over the area
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.rect(x, y, width, height);
        self.painter.rect_filled(rect, 0.0, self.clear_color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.rect(x, y, width, height);
        self.painter.rect_filled(rect, 0.0, self.fill);
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill = color;
    }

    fn set_font(&mut self, font: FontId) {
        self.font = font;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let pos = self.origin + self.offset + Vec2::new(x, y);
        self.painter
            .text(pos, Align2::LEFT_BOTTOM, text, self.font.clone(), self.fill);
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.painter
            .layout_no_wrap(text.to_owned(), self.font.clone(), self.fill)
            .size()
            .x
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset += Vec2::new(dx, dy);
    }
}
