use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Averages frame time over a fixed number of frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames_per_report: u32,
    frames: u32,
    elapsed: f32,
}

impl FpsCounter {
    pub const DEFAULT_INTERVAL: u32 = 60;

    pub fn new(frames_per_report: u32) -> Self {
        Self {
            frames_per_report: frames_per_report.max(1),
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Record one frame; returns the average rate once every `frames_per_report` frames
    pub fn record(&mut self, frame: &FrameInfo) -> Option<f32> {
        self.frames += 1;
        self.elapsed += frame.delta;

        if self.frames < self.frames_per_report {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frame_iterator_counts_and_advances() {
        let mut frames = FrameIterator::new();
        let first = frames.next().unwrap();
        thread::sleep(Duration::from_millis(5));
        let second = frames.next().unwrap();

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!(second.time >= first.time);
        assert!(second.delta >= 0.004);
        assert_eq!(frames.frame_number(), 2);
    }

    #[test]
    fn fps_counter_reports_every_interval() {
        let mut counter = FpsCounter::new(60);
        let frame = FrameInfo::new(0, 0.0, 1.0 / 120.0);

        for _ in 0..59 {
            assert_eq!(counter.record(&frame), None);
        }
        let fps = counter.record(&frame).unwrap();
        assert!((fps - 120.0).abs() < 0.1);

        // Window restarts after a report
        assert_eq!(counter.record(&frame), None);
    }
}
