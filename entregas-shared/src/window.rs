use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Format used for timestamp filters sent to the backend.
pub const FILTER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Inclusive `[start, end]` range of creation timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// `[date 00:00:00, date 23:59:59]`
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date.and_time(NaiveTime::MIN),
            end: date.and_time(END_OF_DAY),
        }
    }

    /// The `days` calendar days ending on (and including) `date`.
    /// `days == 0` is treated as a single day.
    pub fn trailing_days(date: NaiveDate, days: u64) -> Self {
        let first = date
            .checked_sub_days(Days::new(days.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: date.and_time(END_OF_DAY),
        }
    }

    pub fn start_filter(&self) -> String {
        self.start.format(FILTER_FORMAT).to_string()
    }

    pub fn end_filter(&self) -> String {
        self.end.format(FILTER_FORMAT).to_string()
    }
}

/// Last second covered by a day window; filters are second-granular.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => panic!("23:59:59 is a valid time of day"),
};
