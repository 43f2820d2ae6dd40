//! Frame counter reported once per interval.

/// Seconds between two reports.
pub const REPORT_INTERVAL: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub fps: f64,
    pub frame_ms: f64,
}

#[derive(Debug, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed: f64,
}

impl FrameStats {
    /// Records one frame that took `delta` seconds. Returns a report once
    /// [`REPORT_INTERVAL`] has passed, then starts counting again.
    pub fn tick(&mut self, delta: f64) -> Option<FrameReport> {
        self.frames += 1;
        self.elapsed += delta;
        if self.elapsed < REPORT_INTERVAL {
            return None;
        }
        let report = FrameReport {
            fps: self.frames as f64 / self.elapsed,
            frame_ms: self.elapsed * 1000.0 / self.frames as f64,
        };
        self.frames = 0;
        self.elapsed = 0.0;
        Some(report)
    }
}

pub fn window_title(base: &str, report: &FrameReport) -> String {
    format!("{} @ fps: {:.2}", base, report.fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_report_before_interval() {
        let mut stats = FrameStats::default();
        for _ in 0..59 {
            assert!(stats.tick(1.0 / 60.0).is_none());
        }
    }

    #[test]
    fn test_report_after_interval() {
        let mut stats = FrameStats::default();
        let mut report = None;
        for _ in 0..4 {
            report = stats.tick(0.25);
        }
        let report = report.unwrap();
        assert!((report.fps - 4.0).abs() < 1e-9);
        assert!((report.frame_ms - 250.0).abs() < 1e-9);

        // counting restarts
        assert!(stats.tick(0.25).is_none());
    }

    #[test]
    fn test_title() {
        let report = FrameReport {
            fps: 59.94,
            frame_ms: 16.68,
        };
        assert_eq!(window_title("Hello Triangle", &report), "Hello Triangle @ fps: 59.94");
    }
}
