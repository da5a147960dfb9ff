use serde::{Deserialize, Serialize};

/// Linear cooling from `t_start` at step 0 towards `t_end` at step `steps`.
///
/// The last step of a run is sampled at `t_start - (t_start - t_end) * (steps - 1) / steps`,
/// so `t_end` itself is never reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearSchedule {
    t_start: f64,
    t_end: f64,
    steps: usize,
}

impl LinearSchedule {
    pub fn new(t_start: f64, t_end: f64, steps: usize) -> Self {
        Self {
            t_start,
            t_end,
            steps,
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn temperature(&self, step: usize) -> f64 {
        if self.steps == 0 {
            return self.t_start;
        }
        self.t_start - (self.t_start - self.t_end) * (step as f64 / self.steps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn temperature_decreases_linearly() {
        let schedule = LinearSchedule::new(2.0, 0.5, 4);
        let temps: Vec<f64> = (0..4).map(|s| schedule.temperature(s)).collect();
        for (actual, expected) in temps.iter().zip([2.0, 1.625, 1.25, 0.875]) {
            assert!(f64_approx_equal(*actual, expected));
        }
    }

    #[test]
    fn constant_schedule_when_endpoints_match() {
        let schedule = LinearSchedule::new(1.0, 1.0, 10);
        assert!((0..10).all(|s| f64_approx_equal(schedule.temperature(s), 1.0)));
    }

    #[test]
    fn zero_step_schedule_stays_at_start() {
        assert_eq!(LinearSchedule::new(2.0, 0.5, 0).temperature(0), 2.0);
    }
}
