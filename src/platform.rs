use crate::error::InitError;

#[cfg(not(target_arch = "wasm32"))]
pub fn frame_scheduler(ctx: &egui::Context) -> Option<egui::Context> {
    // eframe drives native windows from its own event loop
    Some(ctx.clone())
}

#[cfg(target_arch = "wasm32")]
pub fn frame_scheduler(ctx: &egui::Context) -> Option<egui::Context> {
    let window = web_sys::window()?;
    let supported = js_sys::Reflect::has(&window, &"requestAnimationFrame".into()).unwrap_or(false);
    supported.then(|| ctx.clone())
}

/// Tell the user that startup failed. Blocks on the web until the alert is
/// dismissed.
pub fn report_fatal(err: &InitError) {
    log::error!("{err}");

    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&err.to_string());
    }
}
