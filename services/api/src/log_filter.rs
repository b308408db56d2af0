//! Date range and limit filtering of exercise logs

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    dates::parse_date,
    models::{LogEntry, LogQuery},
    validation::parse_limit,
};

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range from optional bounds.
    ///
    /// Returns `None` when neither bound is given. A missing `from` falls back
    /// to the Unix epoch and a missing `to` to `today`.
    pub fn from_bounds(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Option<Self> {
        if from.is_none() && to.is_none() {
            return None;
        }

        Some(Self {
            from: from.unwrap_or(DateTime::<Utc>::UNIX_EPOCH.date_naive()),
            to: to.unwrap_or(today),
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Filters applied to a log before it is returned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub range: Option<DateRange>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Interpret the query string of a log request.
    ///
    /// Empty bounds are ignored; a bound that is not a date is an error.
    pub fn from_query(query: &LogQuery, today: NaiveDate) -> Result<Self, String> {
        let from = parse_bound("from", query.from.as_deref())?;
        let to = parse_bound("to", query.to.as_deref())?;

        Ok(Self {
            range: DateRange::from_bounds(from, to, today),
            limit: parse_limit(query.limit.as_deref()),
        })
    }

    /// Keep entries inside the range, then the first `limit` of those, in
    /// their stored order.
    pub fn apply(&self, log: Vec<LogEntry>) -> Vec<LogEntry> {
        let in_range = log
            .into_iter()
            .filter(|entry| self.range.is_none_or(|range| range.contains(entry.date)));

        match self.limit {
            Some(limit) => in_range.take(limit).collect(),
            None => in_range.collect(),
        }
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| format!("Invalid '{}' date: {}", name, value)),
    }
}
