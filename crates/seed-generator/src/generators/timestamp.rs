//! Date and time value generators.
//!
//! Datetimes are drawn as whole epoch seconds inside an inclusive window.
//! Without explicit bounds the window spans 30 days either side of the
//! moment the generator was built.

use super::ValueGenerator;
use crate::error::GeneratorError;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::Rng;
use seed_core::Value;

/// Days either side of "now" covered by the default window.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Uniform UTC datetime in `[min_date, max_date]`, at one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeGenerator {
    min_date: DateTime<Utc>,
    max_date: DateTime<Utc>,
}

impl DateTimeGenerator {
    /// Missing bounds default to now minus/plus [`DEFAULT_WINDOW_DAYS`].
    pub fn new(
        min_date: Option<DateTime<Utc>>,
        max_date: Option<DateTime<Utc>>,
    ) -> Result<Self, GeneratorError> {
        let window = Self::around(Utc::now());
        let min_date = min_date.unwrap_or(window.min_date);
        let max_date = max_date.unwrap_or(window.max_date);

        if min_date > max_date {
            return Err(GeneratorError::InvalidDateRange {
                min: min_date,
                max: max_date,
            });
        }
        Ok(Self { min_date, max_date })
    }

    /// The default window centred on `now`.
    pub fn around(now: DateTime<Utc>) -> Self {
        let window = Duration::days(DEFAULT_WINDOW_DAYS);
        Self {
            min_date: now - window,
            max_date: now + window,
        }
    }

    pub fn min_date(&self) -> DateTime<Utc> {
        self.min_date
    }

    pub fn max_date(&self) -> DateTime<Utc> {
        self.max_date
    }

    /// Draw a raw datetime.
    pub fn generate_datetime<R: Rng>(&self, rng: &mut R) -> DateTime<Utc> {
        // Round inwards so sub-second bounds never produce an out-of-window value.
        let mut lo = self.min_date.timestamp();
        if self.min_date.timestamp_subsec_nanos() > 0 {
            lo += 1;
        }
        let hi = self.max_date.timestamp();

        if lo > hi {
            return self.min_date;
        }
        let secs = rng.gen_range(lo..=hi);
        DateTime::from_timestamp(secs, 0).unwrap_or(self.min_date)
    }
}

impl Default for DateTimeGenerator {
    fn default() -> Self {
        Self::around(Utc::now())
    }
}

impl ValueGenerator for DateTimeGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::DateTime(self.generate_datetime(rng))
    }
}

/// Calendar date drawn through a [`DateTimeGenerator`] whose explicit
/// bounds sit at midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateGenerator {
    inner: DateTimeGenerator,
}

impl DateGenerator {
    pub fn new(
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<Self, GeneratorError> {
        DateTimeGenerator::new(min_date.and_then(midnight), max_date.and_then(midnight))
            .map(|inner| Self { inner })
    }

    pub fn inner(&self) -> &DateTimeGenerator {
        &self.inner
    }

    pub fn generate_date<R: Rng>(&self, rng: &mut R) -> NaiveDate {
        self.inner.generate_datetime(rng).date_naive()
    }
}

impl ValueGenerator for DateGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::Date(self.generate_date(rng))
    }
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Uniform time of day with whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeGenerator;

impl ValueGenerator for TimeGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        let hour = rng.gen_range(0..=23);
        let minute = rng.gen_range(0..=59);
        let second = rng.gen_range(0..=59);
        NaiveTime::from_hms_opt(hour, minute, second).map_or(Value::Null, Value::Time)
    }
}
