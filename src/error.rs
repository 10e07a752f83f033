#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Your browser doesn't support request animation frame!")]
    NoFrameScheduler,

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("no <canvas id=\"{0}\"> element to draw on")]
    MissingCanvas(String),

    #[error("failed to open the drawing surface: {0}")]
    Window(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            InitError::NoFrameScheduler.to_string(),
            "Your browser doesn't support request animation frame!"
        );
        assert_eq!(
            InitError::MissingCanvas("board".to_owned()).to_string(),
            "no <canvas id=\"board\"> element to draw on"
        );
        assert_eq!(
            InitError::Window("no display".to_owned()).to_string(),
            "failed to open the drawing surface: no display"
        );
    }
}
