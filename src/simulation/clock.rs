//! Fixed-timestep accumulator for the interactive loop
//!
//! Each frame hands in the real time that passed. The clock banks it and
//! answers how many fixed physics steps to run now, so the simulation
//! advances at the same rate whatever the frame rate is.

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStepClock {
    step_period: f64, // real seconds per physics step
    max_steps_per_frame: u32, // cap to avoid a spiral of death after a stall
    accumulator: f64, // banked real time not yet simulated
}

impl FixedStepClock {
    pub fn new(steps_per_second: f64, max_steps_per_frame: u32) -> Self {
        Self {
            step_period: steps_per_second.recip(),
            max_steps_per_frame,
            accumulator: 0.0,
        }
    }

    /// Bank `frame_seconds` and return how many steps are due
    /// Time beyond `max_steps_per_frame` steps is dropped
    pub fn tick(&mut self, frame_seconds: f64) -> u32 {
        if frame_seconds.is_finite() && frame_seconds > 0.0 {
            self.accumulator += frame_seconds;
        }

        let mut due = 0;
        while self.accumulator >= self.step_period && due < self.max_steps_per_frame {
            self.accumulator -= self.step_period;
            due += 1;
        }

        // capped with time still owed: keep at most one step of it
        if self.accumulator >= self.step_period {
            self.accumulator = self.step_period;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_frames_give_one_step_each() {
        let mut clock = FixedStepClock::new(50.0, 8);
        let mut total = 0;
        for _ in 0..100 {
            total += clock.tick(0.02);
        }
        // float rounding may leave the last step banked
        assert!((99..=100).contains(&total), "total = {total}");
    }

    #[test]
    fn slow_frames_catch_up() {
        let mut clock = FixedStepClock::new(60.0, 8);
        assert_eq!(clock.tick(3.0 / 60.0 + 1e-6), 3);
    }

    #[test]
    fn fast_frames_bank_time() {
        let mut clock = FixedStepClock::new(10.0, 8);
        assert_eq!(clock.tick(0.04), 0);
        assert_eq!(clock.tick(0.04), 0);
        assert_eq!(clock.tick(0.04), 1);
    }

    #[test]
    fn stall_is_capped() {
        let mut clock = FixedStepClock::new(60.0, 4);
        assert_eq!(clock.tick(10.0), 4);
        // at most one step is carried into the next frame
        assert!(clock.tick(0.0) <= 1);
        assert_eq!(clock.tick(0.0), 0);
    }

    #[test]
    fn leftover_below_one_step_is_kept_at_cap() {
        let mut clock = FixedStepClock::new(10.0, 4);
        // exactly four steps due plus half a step
        assert_eq!(clock.tick(0.45), 4);
        assert_eq!(clock.tick(0.06), 1);
    }

    #[test]
    fn ignores_bad_frame_times() {
        let mut clock = FixedStepClock::new(60.0, 4);
        assert_eq!(clock.tick(f64::NAN), 0);
        assert_eq!(clock.tick(-1.0), 0);
    }
}
