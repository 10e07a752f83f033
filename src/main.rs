#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

mod config;
mod error;
mod fps;
mod game;
mod grid;
mod painter;
mod platform;
mod render_loop;
mod root;
mod surface;

use config::BoardConfig;
use error::InitError;

const TITLE: &str = "Chess";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), InitError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BoardConfig::default();
    log::info!("Opening {}x{} surface", config.width, config.height);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(config.size())
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(root::ChessApp::new(cc, config)?))),
    )
    .map_err(|err| InitError::Window(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "board";

#[cfg(target_arch = "wasm32")]
fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = start_web(BoardConfig::default()).await {
            log::error!("{err}");
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn start_web(config: BoardConfig) -> Result<(), InitError> {
    use wasm_bindgen::JsCast as _;

    let canvas = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CANVAS_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .ok_or_else(|| InitError::MissingCanvas(CANVAS_ID.to_owned()))?;
    canvas.set_width(config.width as u32);
    canvas.set_height(config.height as u32);
    log::info!("Opening {}x{} surface", config.width, config.height);

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(root::ChessApp::new(cc, config)?))),
        )
        .await
        .map_err(|err| InitError::Window(format!("{err:?}")))
}
