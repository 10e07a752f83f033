const RESET_INTERVAL_MS: f64 = 1000.0;

/// Running average of the frame rate, restarted roughly once a second so
/// that it follows recent frame times.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    smoothed_fps: f64,
    tick_count: u32,
    // 0 until the first frame has been seen
    last_reset: f64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn smoothed_fps(&self) -> f64 {
        self.smoothed_fps
    }

    #[cfg(test)]
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    #[cfg(test)]
    pub fn last_reset(&self) -> f64 {
        self.last_reset
    }

    /// Fold one frame into the average. Both times are in milliseconds.
    pub fn update(&mut self, absolute_time: f64, dt: f64) {
        if self.last_reset == 0.0 {
            self.last_reset = absolute_time;
            return;
        }

        if absolute_time - RESET_INTERVAL_MS > self.last_reset {
            log::debug!(
                "FPS window reset at {absolute_time:.1}ms ({:.1} fps over {} ticks)",
                self.smoothed_fps,
                self.tick_count
            );
            self.tick_count = 1;
            self.last_reset = absolute_time;
            return;
        }

        // A zero or garbage frame time has no meaningful frequency
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }

        let hz = 1.0 / (dt / 1000.0);
        let ticks = f64::from(self.tick_count);
        self.smoothed_fps = (self.smoothed_fps * ticks + hz) / (ticks + 1.0);
        self.tick_count += 1;
    }

    /// Smoothed rate truncated toward zero.
    pub fn display_fps(&self) -> i64 {
        self.smoothed_fps.trunc() as i64
    }

    pub fn readout(&self) -> String {
        format!("FPS: {}", self.display_fps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.667;

    #[test]
    fn first_call_sets_baseline() {
        let mut stats = FrameStats::new();
        stats.update(1234.0, 1234.0);
        assert_eq!(stats.last_reset(), 1234.0);
        assert_eq!(stats.smoothed_fps(), 0.0);
        assert_eq!(stats.tick_count(), 0);
    }

    #[test]
    fn converges_to_sixty() {
        let mut stats = FrameStats::new();
        let mut now = 1000.0;
        stats.update(now, now);
        for _ in 0..50 {
            now += FRAME_MS;
            stats.update(now, FRAME_MS);
        }
        assert!(now < 2000.0);
        assert_eq!(stats.tick_count(), 50);
        assert!((stats.smoothed_fps() - 60.0).abs() < 0.01);
        assert_eq!(stats.readout(), "FPS: 59");
    }

    #[test]
    fn running_mean_weights_ticks() {
        let mut stats = FrameStats::new();
        stats.update(500.0, 500.0);
        stats.update(510.0, 10.0); // 100 Hz
        assert!((stats.smoothed_fps() - 100.0).abs() < 1e-9);
        stats.update(530.0, 20.0); // 50 Hz
        assert!((stats.smoothed_fps() - 75.0).abs() < 1e-9);
        assert_eq!(stats.tick_count(), 2);
    }

    #[test]
    fn resets_after_one_second() {
        let mut stats = FrameStats::new();
        let mut now = 1000.0;
        stats.update(now, now);
        for _ in 0..10 {
            now += FRAME_MS;
            stats.update(now, FRAME_MS);
        }
        assert_eq!(stats.tick_count(), 10);
        let fps = stats.smoothed_fps();

        stats.update(2100.0, 2100.0 - now);
        assert_eq!(stats.tick_count(), 1);
        assert_eq!(stats.last_reset(), 2100.0);
        assert_eq!(stats.smoothed_fps(), fps);

        stats.update(2100.0 + FRAME_MS, FRAME_MS);
        assert_eq!(stats.tick_count(), 2);
    }

    #[test]
    fn exactly_one_second_does_not_reset() {
        let mut stats = FrameStats::new();
        stats.update(1000.0, 1000.0);
        stats.update(2000.0, 10.0);
        assert_eq!(stats.last_reset(), 1000.0);
        assert_eq!(stats.tick_count(), 1);
    }

    #[test]
    fn zero_frame_time_is_skipped() {
        let mut stats = FrameStats::new();
        stats.update(1000.0, 1000.0);
        stats.update(1010.0, 10.0);
        let before = stats;
        stats.update(1010.0, 0.0);
        assert_eq!(stats, before);
        assert!(stats.smoothed_fps().is_finite());
    }

    #[test]
    fn readout_truncates() {
        let mut stats = FrameStats::new();
        stats.update(1000.0, 1000.0);
        stats.update(1006.0, 6.0); // 166.67 Hz
        assert_eq!(stats.display_fps(), 166);
        assert_eq!(FrameStats::new().readout(), "FPS: 0");
    }
}
