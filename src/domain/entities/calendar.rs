//! Calendar month shown by the date range picker.

use chrono::{Datelike, Months, NaiveDate};

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The month currently displayed, anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Returns the month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Returns the month for `year`/`month`, or `None` if out of range.
    #[must_use]
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Returns the current local month.
    #[must_use]
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the month number, 1-based.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Returns the previous month. Stays put at the minimum supported date.
    #[must_use]
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Returns the next month. Stays put at the maximum supported date.
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first
            .pred_opt()
            .filter(|last| last.month() == self.month())
            .map_or(31, |last| last.day())
    }

    /// Returns the flat grid: one `None` per weekday before day 1 (Sunday
    /// based), then every day of the month. No trailing padding.
    #[must_use]
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells = Vec::with_capacity(leading + 31);
        cells.resize(leading, None);
        cells.extend(
            self.first
                .iter_days()
                .take_while(|d| d.month() == self.month())
                .map(Some),
        );
        cells
    }

    /// Returns the header label, e.g. `January 2024`.
    #[must_use]
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl Default for CalendarMonth {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_previous_rolls_over_year() {
        let january = CalendarMonth::from_ym(2024, 1).unwrap();
        let december = january.previous();

        assert_eq!(december.year(), 2023);
        assert_eq!(december.month(), 12);
    }

    #[test]
    fn test_next_rolls_over_year() {
        let december = CalendarMonth::from_ym(2023, 12).unwrap();
        let january = december.next();

        assert_eq!((january.year(), january.month()), (2024, 1));
    }

    #[test]
    fn test_containing_anchors_on_first() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let month = CalendarMonth::containing(date);

        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test_case(2024, 1, 31 ; "january")]
    #[test_case(2024, 2, 29 ; "leap february")]
    #[test_case(2023, 2, 28 ; "common february")]
    #[test_case(2024, 4, 30 ; "april")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(
            CalendarMonth::from_ym(year, month).unwrap().days_in_month(),
            expected
        );
    }

    #[test]
    fn test_grid_leading_placeholders() {
        // 2024-01-01 is a Monday.
        let grid = CalendarMonth::from_ym(2024, 1).unwrap().grid();

        assert_eq!(grid.len(), 1 + 31);
        assert_eq!(grid[0], None);
        assert_eq!(grid[1], NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(grid.last().copied().flatten(), NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn test_grid_starting_on_sunday_has_no_padding() {
        // 2023-10-01 is a Sunday.
        let grid = CalendarMonth::from_ym(2023, 10).unwrap().grid();

        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2023, 10, 1));
        assert_eq!(grid.len(), 31);
    }

    #[test]
    fn test_grid_saturday_start() {
        // 2024-06-01 is a Saturday.
        let grid = CalendarMonth::from_ym(2024, 6).unwrap().grid();

        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 6);
        assert_eq!(grid.len(), 6 + 30);
    }

    #[test]
    fn test_label() {
        assert_eq!(CalendarMonth::from_ym(2024, 1).unwrap().label(), "January 2024");
    }
}
