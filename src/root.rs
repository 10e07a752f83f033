use crate::{
    config::BoardConfig,
    error::InitError,
    game::{Game, GameFrame},
    platform,
    render_loop::{RenderLoop, SystemClock},
    surface::EguiSurface,
};

pub struct ChessApp {
    game: Game,
    render_loop: RenderLoop<egui::Context>,
}

impl ChessApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Result<Self, InitError> {
        let scheduler = platform::frame_scheduler(&cc.egui_ctx);
        let render_loop = RenderLoop::start(scheduler, SystemClock::default())
            .inspect_err(platform::report_fatal)?;

        let mut game = Game::new(config);
        game.initialize();

        Ok(Self { game, render_loop })
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let config = self.game.config();
                let background = config.background;
                let (response, painter) = ui.allocate_painter(config.size(), egui::Sense::hover());

                let mut surface = EguiSurface::new(&painter, response.rect.min, background);
                self.render_loop.frame(&mut GameFrame {
                    game: &mut self.game,
                    surface: &mut surface,
                });
            });
    }
}
