//! Elapsed-time counter since a fixed start date.
//!
//! Fields are recomputed from scratch on every tick (`now - start`), so the
//! counter never drifts; the previous snapshot is only kept to decide which
//! fields actually changed.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use smallvec::SmallVec;
use std::cell::Cell;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Browser/OS local time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock frozen at a given instant (settable for tests and replays).
#[derive(Clone, Debug)]
pub struct FixedClock(Cell<NaiveDateTime>);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(Cell::new(at))
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.0.set(at);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeField {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    pub const ALL: [TimeField; 6] = [
        TimeField::Years,
        TimeField::Months,
        TimeField::Days,
        TimeField::Hours,
        TimeField::Minutes,
        TimeField::Seconds,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// DOM id of the value element.
    pub fn id(self) -> &'static str {
        match self {
            TimeField::Years => "years",
            TimeField::Months => "months",
            TimeField::Days => "days",
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeField::Years => "Years",
            TimeField::Months => "Months",
            TimeField::Days => "Days",
            TimeField::Hours => "Hours",
            TimeField::Minutes => "Minutes",
            TimeField::Seconds => "Seconds",
        }
    }
}

/// Calendar breakdown of a duration; each field is the remainder after the
/// larger units (so `months` is always < 12, `hours` < 24 and so on).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeFields {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeFields {
    pub fn get(&self, field: TimeField) -> u32 {
        match field {
            TimeField::Years => self.years,
            TimeField::Months => self.months,
            TimeField::Days => self.days,
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
            TimeField::Seconds => self.seconds,
        }
    }
}

fn add_months(start: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    start.checked_add_months(Months::new(months))
}

/// Calendar-aware difference `now - start`.
///
/// Whole months are counted with calendar arithmetic (Jan 31 + 1 month is the
/// last day of February); the rest is split into days, hours, minutes and
/// seconds. A `now` before `start` yields all zeros.
pub fn calendar_diff(start: NaiveDateTime, now: NaiveDateTime) -> TimeFields {
    if now <= start {
        return TimeFields::default();
    }
    let month_span =
        (now.year() - start.year()) * 12 + now.month() as i32 - start.month() as i32;
    let mut months = month_span.max(0) as u32;
    let mut anchor = add_months(start, months).unwrap_or(start);
    while months > 0 && anchor > now {
        months -= 1;
        anchor = add_months(start, months).unwrap_or(start);
    }

    let rem = (now - anchor).num_seconds().max(0);
    TimeFields {
        years: months / 12,
        months: months % 12,
        days: (rem / 86_400) as u32,
        hours: (rem / 3_600 % 24) as u32,
        minutes: (rem / 60 % 60) as u32,
        seconds: (rem % 60) as u32,
    }
}

/// Fields whose value changed since the previous recompute, in display order.
pub type FieldChanges = SmallVec<[(TimeField, u32); 6]>;

pub struct ElapsedFormatter {
    start: NaiveDateTime,
    previous: Option<TimeFields>,
}

impl ElapsedFormatter {
    /// Count from midnight (local time) of `start_date`.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start: start_date.and_time(NaiveTime::MIN),
            previous: None,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Last computed snapshot, if any.
    pub fn current(&self) -> Option<TimeFields> {
        self.previous
    }

    /// Recompute the fields for `now` and report the ones that differ from
    /// the previous snapshot. The first call reports every field.
    pub fn recompute(&mut self, now: NaiveDateTime) -> FieldChanges {
        let fields = calendar_diff(self.start, now);
        let changes = TimeField::ALL
            .iter()
            .filter(|f| self.previous.map(|p| p.get(**f)) != Some(fields.get(**f)))
            .map(|f| (*f, fields.get(*f)))
            .collect();
        self.previous = Some(fields);
        changes
    }
}
