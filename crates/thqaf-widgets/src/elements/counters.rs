//! Landing page statistics that count up once they scroll into view.

use thqaf_config::LandingConfig;
use tracing::{debug, trace};

use crate::animation::CountUp;
use crate::surface::{NodeRef, Surface};

/// Parse a counter's target attribute with the browser's numeric conversion
/// rules: surrounding whitespace is ignored, `0x`/`0o`/`0b` prefixes select
/// the radix, and an empty attribute is zero. Anything that is not a finite
/// number counts as zero.
pub fn parse_target(raw: Option<&str>) -> f64 {
    let Some(raw) = raw.map(str::trim) else {
        return 0.0;
    };
    let value = match radix_literal(raw) {
        Some(parsed) => parsed,
        None if raw.is_empty() => Some(0.0),
        None => raw.parse::<f64>().ok(),
    };
    value.filter(|value| value.is_finite()).unwrap_or(0.0)
}

/// `Some(None)` for a prefixed literal with bad digits, `None` if unprefixed.
fn radix_literal(raw: &str) -> Option<Option<f64>> {
    let prefix = raw.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &raw[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    }))
}

/// Render a number the way the browser's `String(number)` does: integers
/// without a fraction, exponent form outside `1e-6..1e21`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exponent = format!("{value:e}");
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exponent,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    /// Waiting to become visible
    Watching,
    Running(CountUp),
    Done,
}

/// What the host should do after an intersection report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Keep observing
    Ignored,
    /// Stop observing and drive animation frames through [`CounterBoard::tick`]
    Animate,
    /// Stop observing; the final value is already set
    Completed,
}

#[derive(Debug, Clone)]
struct Counter {
    target: f64,
    phase: CounterPhase,
    shown: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CounterBoard {
    counters: Vec<Counter>,
    duration_ms: f64,
    threshold: f64,
    reduced_motion: bool,
}

impl CounterBoard {
    pub fn new(
        targets: impl IntoIterator<Item = f64>,
        config: &LandingConfig,
        reduced_motion: bool,
    ) -> Self {
        let counters = targets
            .into_iter()
            .map(|target| Counter {
                target,
                phase: CounterPhase::Watching,
                shown: None,
            })
            .collect();
        Self {
            counters,
            duration_ms: f64::from(config.duration_ms),
            threshold: config.threshold,
            reduced_motion,
        }
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn phase(&self, index: usize) -> Option<CounterPhase> {
        self.counters.get(index).map(|counter| counter.phase)
    }

    /// Report the counter's visibility. Starts it at most once.
    pub fn observe(&mut self, index: usize, ratio: f64, now_ms: f64) -> Trigger {
        let Some(counter) = self.counters.get_mut(index) else {
            return Trigger::Ignored;
        };
        if counter.phase != CounterPhase::Watching || ratio < self.threshold || ratio <= 0.0 {
            return Trigger::Ignored;
        }

        if self.reduced_motion {
            counter.shown = Some(counter.target);
            counter.phase = CounterPhase::Done;
            debug!(counter = index, "counter set without animation");
            return Trigger::Completed;
        }

        let tween = CountUp::new(counter.target, self.duration_ms, now_ms);
        counter.shown = Some(tween.value_at(now_ms));
        counter.phase = CounterPhase::Running(tween);
        debug!(counter = index, target = counter.target, "counter started");
        Trigger::Animate
    }

    /// Advance a running counter. Returns `true` while more frames are needed.
    pub fn tick(&mut self, index: usize, now_ms: f64) -> bool {
        let Some(counter) = self.counters.get_mut(index) else {
            return false;
        };
        let CounterPhase::Running(tween) = counter.phase else {
            return false;
        };

        counter.shown = Some(tween.value_at(now_ms));
        trace!(counter = index, value = ?counter.shown, "counter frame");
        if tween.is_finished(now_ms) {
            counter.phase = CounterPhase::Done;
            debug!(counter = index, "counter finished");
            return false;
        }
        true
    }

    pub fn display(&self, index: usize) -> Option<String> {
        self.counters
            .get(index)
            .and_then(|counter| counter.shown)
            .map(format_number)
    }

    pub fn project_one(&self, index: usize, surface: &mut impl Surface) {
        if let Some(text) = self.display(index) {
            surface.set_text(NodeRef::Counter(index), &text);
        }
    }

    pub fn project(&self, surface: &mut impl Surface) {
        for index in 0..self.counters.len() {
            self.project_one(index, surface);
        }
    }
}
