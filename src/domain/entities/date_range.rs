//! Two-click date range selection.

use chrono::NaiveDate;

/// Display format for a single endpoint, e.g. `Jan 5, 2024`.
const DATE_LABEL_FORMAT: &str = "%b %-d, %Y";

/// A date range built by successive day clicks.
///
/// `Range` always holds `from <= to`; the only way to build one is through
/// [`DateRange::select`], which orders the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    /// Nothing selected.
    #[default]
    Empty,
    /// Start chosen, end pending.
    Start(NaiveDate),
    /// Both endpoints chosen.
    Range {
        /// First day, inclusive.
        from: NaiveDate,
        /// Last day, inclusive.
        to: NaiveDate,
    },
}

/// Length of a completed range, counting both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDuration {
    /// Whole days, inclusive of both endpoints.
    pub days: i64,
    /// `days * 24`.
    pub hours: i64,
}

impl StayDuration {
    /// Returns the duration label, e.g. `3 days (72 hours)`.
    #[must_use]
    pub fn label(&self) -> String {
        let day_unit = if self.days == 1 { "day" } else { "days" };
        let hour_unit = if self.hours == 1 { "hour" } else { "hours" };
        format!("{} {day_unit} ({} {hour_unit})", self.days, self.hours)
    }
}

impl DateRange {
    /// Applies a day click and returns the next state.
    ///
    /// - `Empty` or `Range` restarts at `day`.
    /// - `Start(from)` re-anchors on the same day, swaps when `day` is earlier,
    ///   and extends when `day` is later.
    #[must_use]
    pub fn select(self, day: NaiveDate) -> Self {
        match self {
            Self::Empty | Self::Range { .. } => Self::Start(day),
            Self::Start(from) if day == from => Self::Start(day),
            Self::Start(from) if day < from => Self::Range { from: day, to: from },
            Self::Start(from) => Self::Range { from, to: day },
        }
    }

    /// Returns the empty range.
    #[must_use]
    pub const fn clear(self) -> Self {
        Self::Empty
    }

    /// Returns the start endpoint, if any.
    #[must_use]
    pub const fn from(&self) -> Option<NaiveDate> {
        match self {
            Self::Empty => None,
            Self::Start(from) | Self::Range { from, .. } => Some(*from),
        }
    }

    /// Returns the end endpoint, if any.
    #[must_use]
    pub const fn to(&self) -> Option<NaiveDate> {
        match self {
            Self::Range { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// Returns true when no endpoint is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns whether `day` lies inclusively within a completed range.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        match self {
            Self::Range { from, to } => *from <= day && day <= *to,
            _ => false,
        }
    }

    /// Returns whether `day` equals either endpoint.
    #[must_use]
    pub fn is_endpoint(&self, day: NaiveDate) -> bool {
        self.from() == Some(day) || self.to() == Some(day)
    }

    /// Returns the inclusive duration once both endpoints exist.
    #[must_use]
    pub fn duration(&self) -> Option<StayDuration> {
        match self {
            Self::Range { from, to } => {
                let days = (*to - *from).num_days() + 1;
                Some(StayDuration {
                    days,
                    hours: days * 24,
                })
            }
            _ => None,
        }
    }

    /// Returns the trigger label shown on the filter card.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Empty => "Select date range".to_string(),
            Self::Start(from) => from.format(DATE_LABEL_FORMAT).to_string(),
            Self::Range { from, to } => format!(
                "{} - {}",
                from.format(DATE_LABEL_FORMAT),
                to.format(DATE_LABEL_FORMAT)
            ),
        }
    }
}
