//! Live clock shown in the site header.
//!
//! Renders `الوقت الآن: ٠٣:٠٥ م | السبت، ١٧/١٠/٢٠٢٦ م` style strings in a
//! fixed time zone. The caller drives the refresh timer; the clock only
//! guarantees that it is bound once.

use std::time::Duration;

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use thqaf_config::{ClockConfig, Digits};
use tracing::debug;

use crate::surface::{NodeRef, Surface};

/// Long weekday names, Sunday first
const WEEKDAYS: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

const AM: &str = "ص";
const PM: &str = "م";

#[derive(Debug, Clone)]
pub struct LiveClock {
    offset: FixedOffset,
    prefix: String,
    suffix: String,
    digits: Digits,
    interval: Duration,
    bound: bool,
}

impl LiveClock {
    pub fn new(config: &ClockConfig) -> Self {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes * 60).unwrap_or(Utc.fix());
        Self {
            offset,
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
            digits: config.digits,
            interval: Duration::from_millis(u64::from(config.interval_ms)),
            bound: false,
        }
    }

    /// Claim the clock for a display. Returns `false` if it is already bound,
    /// in which case the caller must not start another timer.
    pub fn bind(&mut self) -> bool {
        if self.bound {
            debug!("live clock already bound");
            return false;
        }
        self.bound = true;
        true
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn format(&self, now: DateTime<Utc>) -> String {
        let local = now.with_timezone(&self.offset);
        let (is_pm, hour) = local.hour12();
        let meridiem = if is_pm { PM } else { AM };
        let weekday = WEEKDAYS[local.weekday().num_days_from_sunday() as usize];

        let time = self.localize(&format!("{hour:02}:{:02}", local.minute()));
        let date = self.localize(&format!(
            "{:02}/{:02}/{:04}",
            local.day(),
            local.month(),
            local.year()
        ));

        format!(
            "{}{time} {meridiem} | {weekday}، {date}{}",
            self.prefix, self.suffix
        )
    }

    pub fn project(&self, now: DateTime<Utc>, surface: &mut impl Surface) {
        surface.set_text(NodeRef::ClockDisplay, &self.format(now));
    }

    fn localize(&self, ascii: &str) -> String {
        match self.digits {
            Digits::Latin => ascii.to_string(),
            Digits::ArabicIndic => ascii.chars().map(arabic_indic).collect(),
        }
    }
}

fn arabic_indic(c: char) -> char {
    c.to_digit(10)
        .and_then(|d| char::from_u32(0x0660 + d))
        .unwrap_or(c)
}
