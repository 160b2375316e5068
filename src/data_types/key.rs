use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Numeric coercion for values usable as x-axis keys.
///
/// The evaluator works in a single real-valued key-space; numeric keys coerce
/// to themselves and date-like keys to epoch milliseconds, matching the
/// `valueOf()` convention of the usual charting data feeds.
pub trait ScaleKey {
    fn coerce(&self) -> f64;
}

impl ScaleKey for f64 {
    fn coerce(&self) -> f64 {
        *self
    }
}

impl ScaleKey for f32 {
    fn coerce(&self) -> f64 {
        *self as f64
    }
}

impl ScaleKey for i64 {
    fn coerce(&self) -> f64 {
        *self as f64
    }
}

impl ScaleKey for i32 {
    fn coerce(&self) -> f64 {
        *self as f64
    }
}

impl ScaleKey for u64 {
    fn coerce(&self) -> f64 {
        *self as f64
    }
}

impl ScaleKey for u32 {
    fn coerce(&self) -> f64 {
        *self as f64
    }
}

impl<Tz: TimeZone> ScaleKey for DateTime<Tz> {
    fn coerce(&self) -> f64 {
        self.timestamp_millis() as f64
    }
}

impl ScaleKey for NaiveDateTime {
    fn coerce(&self) -> f64 {
        self.and_utc().timestamp_millis() as f64
    }
}

impl ScaleKey for NaiveDate {
    fn coerce(&self) -> f64 {
        self.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64
    }
}
