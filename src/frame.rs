use std::time::Instant;

/// Frame metadata - carries tick number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the session started
    pub time: f64,
    /// Seconds since the previous frame
    pub delta: f64,
    /// Wall-clock time in milliseconds since the Unix epoch
    pub wall_clock_ms: f64,
}

impl FrameInfo {
    pub fn new(number: u64, time: f64, delta: f64, wall_clock_ms: f64) -> Self {
        Self {
            number,
            time,
            delta,
            wall_clock_ms,
        }
    }

    /// Synthetic frame for fixed-step replays, at an assumed 60 Hz
    pub fn fixed(number: u64) -> Self {
        let delta = 1.0 / 60.0;
        let time = number as f64 * delta;
        Self::new(number, time, delta, time * 1000.0)
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
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

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f64();
        let time = now.duration_since(self.start_time).as_secs_f64();
        let wall_clock_ms = chrono::Utc::now().timestamp_millis() as f64;

        let info = FrameInfo::new(self.frame_number, time, delta, wall_clock_ms);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_numbers_frames_in_order() {
        let mut clock = FrameClock::new();
        let first = clock.next().unwrap();
        let second = clock.next().unwrap();

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!(second.time >= first.time);
        assert!(second.delta >= 0.0);
        assert_eq!(clock.frame_number(), 2);
    }

    #[test]
    fn wall_clock_is_epoch_millis() {
        let frame = FrameClock::new().next().unwrap();
        // after 2020-01-01
        assert!(frame.wall_clock_ms > 1_577_836_800_000.0);
    }

    #[test]
    fn fixed_frames_step_at_60hz() {
        let frame = FrameInfo::fixed(60);
        assert!((frame.time - 1.0).abs() < 1e-12);
        assert!((frame.delta - 1.0 / 60.0).abs() < 1e-12);
    }
}
