//! Rise milestones: when the body first reaches a fraction of its total rise.

/// Fractions of the ambient-to-equilibrium rise that are tracked.
pub const MILESTONE_FRACTIONS: [f64; 4] = [0.5, 0.9, 0.95, 0.99];

/// Times (seconds) at which each fraction of the rise was first reached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MilestoneTimes {
    pub time_50: f64,
    pub time_90: f64,
    pub time_95: f64,
    pub time_99: f64,
}

impl MilestoneTimes {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.time_50, self.time_90, self.time_95, self.time_99]
    }
}

/// Latches the first time each rise target is reached.
#[derive(Clone, Debug)]
pub struct MilestoneTracker {
    targets: [f64; 4],
    reached: [Option<f64>; 4],
}

impl MilestoneTracker {
    pub fn new(ambient: f64, equilibrium: f64) -> Self {
        let rise = equilibrium - ambient;
        Self {
            targets: MILESTONE_FRACTIONS.map(|f| ambient + f * rise),
            reached: [None; 4],
        }
    }

    pub fn targets(&self) -> [f64; 4] {
        self.targets
    }

    /// Record a sample. Targets already latched keep their first time.
    pub fn observe(&mut self, time: f64, temperature: f64) {
        for (target, reached) in self.targets.iter().zip(self.reached.iter_mut()) {
            if reached.is_none() && temperature >= *target {
                *reached = Some(time);
            }
        }
    }

    pub fn reached(&self, index: usize) -> Option<f64> {
        self.reached.get(index).copied().flatten()
    }

    /// True once the 99 % target has been latched.
    pub fn final_reached(&self) -> bool {
        self.reached[3].is_some()
    }

    /// Unreached milestones take the horizon.
    pub fn finish(&self, horizon: f64) -> MilestoneTimes {
        let [time_50, time_90, time_95, time_99] = self.reached.map(|r| r.unwrap_or(horizon));
        MilestoneTimes {
            time_50,
            time_90,
            time_95,
            time_99,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_span_the_rise() {
        let tracker = MilestoneTracker::new(300.0, 400.0);
        assert_eq!(tracker.targets(), [350.0, 390.0, 395.0, 399.0]);
    }

    #[test]
    fn first_crossing_is_kept() {
        let mut tracker = MilestoneTracker::new(300.0, 400.0);
        tracker.observe(0.0, 300.0);
        tracker.observe(1.0, 360.0);
        tracker.observe(2.0, 340.0);
        tracker.observe(3.0, 392.0);
        assert_eq!(tracker.reached(0), Some(1.0));
        assert_eq!(tracker.reached(1), Some(3.0));
        assert_eq!(tracker.reached(2), None);
        assert!(!tracker.final_reached());

        let times = tracker.finish(10.0);
        assert_eq!(times.as_array(), [1.0, 3.0, 10.0, 10.0]);
    }

    #[test]
    fn zero_rise_latches_immediately() {
        let mut tracker = MilestoneTracker::new(293.15, 293.15);
        tracker.observe(0.0, 293.15);
        assert!(tracker.final_reached());
        assert_eq!(tracker.finish(60.0), MilestoneTimes::zero());
    }
}
