use crate::error::InitError;
use web_time::Instant;

/// Host mechanism that runs the next frame near the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl FrameScheduler for egui::Context {
    fn request_frame(&self) {
        self.request_repaint();
    }
}

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// The per-frame callbacks. Both receive the absolute time and the time
/// since the previous frame, in milliseconds.
pub trait FrameHooks {
    fn update(&mut self, now: f64, dt: f64);
    fn draw(&mut self, now: f64, dt: f64);
}

/// Re-arms itself on every frame for as long as the host keeps calling
/// [`RenderLoop::frame`]. There is no stop.
#[derive(Debug)]
pub struct RenderLoop<S, C = SystemClock> {
    scheduler: S,
    clock: C,
    previous_now: f64,
}

impl<S: FrameScheduler, C: Clock> RenderLoop<S, C> {
    pub fn start(scheduler: Option<S>, clock: C) -> Result<Self, InitError> {
        let scheduler = scheduler.ok_or(InitError::NoFrameScheduler)?;
        log::info!("Starting render loop");
        scheduler.request_frame();
        Ok(Self {
            scheduler,
            clock,
            previous_now: 0.0,
        })
    }

    pub fn frame(&mut self, hooks: &mut impl FrameHooks) {
        self.scheduler.request_frame();

        let now = self.clock.now_ms();
        let dt = now - self.previous_now;
        hooks.update(now, dt);
        hooks.draw(now, dt);
        self.previous_now = now;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{CountingScheduler, ManualClock};
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<(&'static str, f64, f64)>,
    }

    impl FrameHooks for Recorder {
        fn update(&mut self, now: f64, dt: f64) {
            self.calls.push(("update", now, dt));
        }

        fn draw(&mut self, now: f64, dt: f64) {
            self.calls.push(("draw", now, dt));
        }
    }

    #[test]
    fn missing_scheduler_is_fatal() {
        let result = RenderLoop::<&CountingScheduler, _>::start(None, ManualClock::default());
        assert!(matches!(result, Err(InitError::NoFrameScheduler)));
    }

    #[test]
    fn start_requests_first_frame() {
        let scheduler = CountingScheduler::default();
        let _render_loop = RenderLoop::start(Some(&scheduler), ManualClock::default()).unwrap();
        assert_eq!(scheduler.requests.get(), 1);
    }

    #[test]
    fn update_runs_before_draw_once_per_frame() {
        let scheduler = CountingScheduler::default();
        let clock = ManualClock::new([16.0, 33.0, 50.0]);
        let mut render_loop = RenderLoop::start(Some(&scheduler), clock).unwrap();
        let mut recorder = Recorder::default();

        for _ in 0..3 {
            render_loop.frame(&mut recorder);
        }

        assert_eq!(
            recorder.calls,
            vec![
                ("update", 16.0, 16.0),
                ("draw", 16.0, 16.0),
                ("update", 33.0, 17.0),
                ("draw", 33.0, 17.0),
                ("update", 50.0, 17.0),
                ("draw", 50.0, 17.0),
            ]
        );
        assert_eq!(scheduler.requests.get(), 4);
    }

    #[test]
    fn every_frame_rearms_the_scheduler() {
        let scheduler = CountingScheduler::default();
        let clock = ManualClock::new([1.0, 2.0]);
        let mut render_loop = RenderLoop::start(Some(&scheduler), clock).unwrap();
        let mut recorder = Recorder::default();

        render_loop.frame(&mut recorder);
        render_loop.frame(&mut recorder);

        assert_eq!(scheduler.requests.get(), 3);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::default();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
