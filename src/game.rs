use crate::{
    config::BoardConfig,
    fps::FrameStats,
    grid::{Board, chess::build_initial_board},
    painter,
    render_loop::FrameHooks,
    surface::Surface,
};

// Pieces are placed once and never move, so the game is just a board plus
// frame statistics.
pub struct Game {
    config: BoardConfig,
    board: Board,
    stats: FrameStats,
}

impl Game {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            board: Board::empty(),
            stats: FrameStats::new(),
        }
    }

    pub fn initialize(&mut self) {
        log::info!("Setting up the starting position");
        self.board = build_initial_board();
        self.stats = FrameStats::new();
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn update(&mut self, _now: f64, _dt: f64) {}

    pub fn draw(&mut self, surface: &mut impl Surface, now: f64, dt: f64) {
        self.stats.update(now, dt);
        painter::draw(surface, &self.board, &self.stats, &self.config);
    }
}

/// A game bound to the surface it paints on for a single frame.
pub struct GameFrame<'a, S: Surface> {
    pub game: &'a mut Game,
    pub surface: &'a mut S,
}

impl<S: Surface> FrameHooks for GameFrame<'_, S> {
    fn update(&mut self, now: f64, dt: f64) {
        self.game.update(now, dt);
    }

    fn draw(&mut self, now: f64, dt: f64) {
        self.game.draw(&mut *self.surface, now, dt);
    }
}
