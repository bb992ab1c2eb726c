//! Fixed-tick driver
//!
//! Accumulates real elapsed time and converts it into whole logical ticks, so
//! game speed does not depend on how often the host renders or polls input.
//! A stalled frame simply produces several ticks on the next call.

use crate::types::TICK_SECONDS;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedTick {
    period: f32,
    accumulator: f32,
}

impl FixedTick {
    pub fn new(period: f32) -> Self {
        assert!(period > 0.0, "tick period must be positive, got {period}");
        Self {
            period,
            accumulator: 0.0,
        }
    }

    /// Driver ticking at `hz` logical steps per second
    pub fn from_hz(hz: u32) -> Self {
        assert!(hz > 0, "tick rate must be positive");
        Self::new(1.0 / hz as f32)
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Unconsumed real time, always in `[0, period)` between frames
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add elapsed real time.
    pub fn accumulate(&mut self, delta_time: f32) {
        self.accumulator += delta_time.max(0.0);
    }

    /// Consume one period if a whole one is available.
    ///
    /// Call in a loop after [`accumulate`](Self::accumulate); each `true` is
    /// one logical tick.
    pub fn try_consume(&mut self) -> bool {
        if self.accumulator >= self.period {
            self.accumulator -= self.period;
            true
        } else {
            false
        }
    }
}

impl Default for FixedTick {
    fn default() -> Self {
        Self::new(TICK_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(driver: &mut FixedTick) -> u32 {
        let mut n = 0;
        while driver.try_consume() {
            n += 1;
        }
        n
    }

    #[test]
    fn short_frames_bank_time() {
        let mut d = FixedTick::default();
        d.accumulate(TICK_SECONDS * 0.4);
        assert_eq!(drain(&mut d), 0);
        d.accumulate(TICK_SECONDS * 0.4);
        assert_eq!(drain(&mut d), 0);
        d.accumulate(TICK_SECONDS * 0.4);
        assert_eq!(drain(&mut d), 1);
        assert!(d.accumulator() < d.period());
    }

    #[test]
    fn stalled_frame_runs_several_ticks() {
        let mut d = FixedTick::default();
        d.accumulate(TICK_SECONDS * 5.5);
        assert_eq!(drain(&mut d), 5);
        assert!(d.accumulator() > 0.0);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut d = FixedTick::default();
        d.accumulate(-1.0);
        assert_eq!(d.accumulator(), 0.0);
    }

    #[test]
    fn from_hz_sets_period() {
        let d = FixedTick::from_hz(30);
        assert!((d.period() - 1.0 / 30.0).abs() < f32::EPSILON);
    }

    #[test]
    #[should_panic]
    fn zero_hz_is_rejected() {
        let _ = FixedTick::from_hz(0);
    }

    proptest::proptest! {
        #[test]
        fn accumulator_stays_below_period(
            hz in 1u32..240,
            frames in proptest::collection::vec(0.0f32..0.5, 1..64),
        ) {
            let mut d = FixedTick::from_hz(hz);
            for delta in frames {
                d.accumulate(delta);
                drain(&mut d);
                proptest::prop_assert!(d.accumulator() >= 0.0);
                proptest::prop_assert!(d.accumulator() < d.period());
            }
        }
    }
}
