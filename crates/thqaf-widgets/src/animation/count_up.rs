//! Linear count-up from zero to a target.
//!
//! # Usage
//!
//! ```
//! use thqaf_widgets::animation::CountUp;
//!
//! let tween = CountUp::new(150.0, 900.0, 1_000.0);
//! assert_eq!(tween.value_at(1_000.0), 0.0);
//! assert_eq!(tween.value_at(1_450.0), 75.0);
//! assert_eq!(tween.value_at(5_000.0), 150.0);
//! ```

const FROM: f64 = 0.0;

/// A single count-up run. Times are milliseconds on the host clock
/// (`performance.now()` or an animation-frame timestamp).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    to: f64,
    duration_ms: f64,
    start_ms: f64,
}

impl CountUp {
    pub fn new(to: f64, duration_ms: f64, start_ms: f64) -> Self {
        Self {
            to,
            duration_ms,
            start_ms,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear progress in `0.0..=1.0`. Frame timestamps slightly older than
    /// the start clamp to zero.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value: the interpolated value rounded down. Kept as `f64`
    /// so targets beyond the `i64` range are not clipped.
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        (FROM + (self.to - FROM) * t).floor()
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_linearly() {
        let tween = CountUp::new(100.0, 1000.0, 0.0);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(250.0), 25.0);
        assert_eq!(tween.value_at(999.0), 99.0);
        assert_eq!(tween.value_at(1000.0), 100.0);
        assert!(tween.is_finished(1000.0));
        assert!(!tween.is_finished(999.0));
    }

    #[test]
    fn clamps_early_timestamps() {
        let tween = CountUp::new(40.0, 900.0, 500.0);
        assert_eq!(tween.progress(480.0), 0.0);
        assert_eq!(tween.value_at(480.0), 0.0);
    }

    #[test]
    fn fractional_targets_floor() {
        let tween = CountUp::new(2.5, 900.0, 0.0);
        assert_eq!(tween.value_at(900.0), 2.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tween = CountUp::new(7.0, 0.0, 0.0);
        assert!(tween.is_finished(0.0));
        assert_eq!(tween.value_at(0.0), 7.0);
    }

    #[test]
    fn huge_targets_are_not_clipped() {
        let tween = CountUp::new(1e20, 900.0, 0.0);
        assert_eq!(tween.value_at(900.0), 1e20);
        assert_eq!(tween.value_at(450.0), 5e19);
    }
}
