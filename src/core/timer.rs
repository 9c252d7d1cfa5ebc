/// Tick-counted timers - advance once per frame, no wall clock

/// Countdown timer - runs for a fixed number of ticks once started
#[derive(Debug, Clone, Copy)]
pub struct TickCountdown {
    duration: u32,
    elapsed: u32,
    active: bool,
}

impl TickCountdown {
    /// Create inactive countdown. A zero duration is treated as one tick.
    pub fn new(duration: u32) -> Self {
        Self {
            duration: duration.max(1),
            elapsed: 0,
            active: false,
        }
    }

    /// Start countdown from zero
    pub fn start(&mut self) {
        self.elapsed = 0;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Progress [0, 1) of the current tick, before it is counted
    pub fn progress(&self) -> f64 {
        self.elapsed as f64 / self.duration as f64
    }

    /// Count one tick, returns true if this tick completed the countdown
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += 1;

        if self.elapsed >= self.duration {
            self.active = false;
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_fires_once() {
        let mut timer = TickCountdown::new(3);

        assert!(!timer.tick()); // Inactive

        timer.start();
        assert_eq!(timer.progress(), 0.0);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!((timer.progress() - 2.0 / 3.0).abs() < 1e-12);

        assert!(timer.tick()); // Complete
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), 0);
        assert!(!timer.tick()); // Inactive again
    }

    #[test]
    fn restart_resets_elapsed() {
        let mut timer = TickCountdown::new(10);
        timer.start();
        timer.tick();
        timer.tick();

        timer.start();
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn zero_duration_is_one_tick() {
        let mut timer = TickCountdown::new(0);
        assert_eq!(timer.duration(), 1);
        timer.start();
        assert!(timer.tick());
    }
}
