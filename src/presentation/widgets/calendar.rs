//! Month grid for picking a date range.

use chrono::{Datelike, Days, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::{CalendarMonth, DateRange, WEEKDAY_LABELS};
use crate::presentation::theme::Theme;

const CELL_WIDTH: u16 = 4;
/// Columns needed for seven day cells.
pub const CALENDAR_WIDTH: u16 = CELL_WIDTH * 7;

/// Displayed month plus a keyboard cursor that always stays inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    month: CalendarMonth,
    cursor: NaiveDate,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

impl DatePicker {
    /// Starts on the month containing `today`, cursor on `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: CalendarMonth::containing(today),
            cursor: today,
        }
    }

    #[must_use]
    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    #[must_use]
    pub const fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Prepares the picker for display. A range with a start date moves the
    /// view to that month; otherwise the previous view is kept.
    pub fn open(&mut self, range: DateRange) {
        if let Some(from) = range.from() {
            self.month = CalendarMonth::containing(from);
            self.cursor = from;
        } else if CalendarMonth::containing(self.cursor) != self.month {
            self.cursor = self.month.first_day();
        }
    }

    pub fn previous_month(&mut self) {
        self.show(self.month.previous());
    }

    pub fn next_month(&mut self) {
        self.show(self.month.next());
    }

    /// Moves the cursor by `delta` days, following it into adjacent months.
    pub fn move_cursor(&mut self, delta: i64) {
        let days = Days::new(delta.unsigned_abs());
        let moved = if delta.is_negative() {
            self.cursor.checked_sub_days(days)
        } else {
            self.cursor.checked_add_days(days)
        };
        if let Some(day) = moved {
            self.cursor = day;
            self.month = CalendarMonth::containing(day);
        }
    }

    /// Switches month, keeping the cursor's day-of-month where it exists.
    fn show(&mut self, month: CalendarMonth) {
        self.month = month;
        let day = self.cursor.day().min(month.days_in_month());
        self.cursor = month
            .first_day()
            .with_day(day)
            .unwrap_or_else(|| month.first_day());
    }
}

/// Renders a [`DatePicker`] with the selected range highlighted.
pub struct CalendarView<'a> {
    picker: &'a DatePicker,
    range: DateRange,
    theme: &'a Theme,
}

impl<'a> CalendarView<'a> {
    #[must_use]
    pub const fn new(picker: &'a DatePicker, range: DateRange, theme: &'a Theme) -> Self {
        Self {
            picker,
            range,
            theme,
        }
    }

    fn day_style(&self, day: NaiveDate) -> Style {
        let mut style = if self.range.is_endpoint(day) {
            self.theme.endpoint_style
        } else if self.range.contains(day) {
            self.theme.range_style
        } else {
            self.theme.base_style
        };
        if day == self.picker.cursor() {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        style
    }

    fn grid_lines(&self) -> Vec<Line<'static>> {
        let cells = self.picker.month().grid();
        cells
            .chunks(7)
            .map(|week| {
                let spans: Vec<Span<'static>> = week
                    .iter()
                    .map(|cell| match cell {
                        Some(day) => {
                            Span::styled(format!(" {:>2} ", day.day()), self.day_style(*day))
                        }
                        None => Span::raw("    "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for CalendarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("‹ ", self.theme.dimmed_style),
                Span::styled(self.picker.month().label(), self.theme.accent_style),
                Span::styled(" ›", self.theme.dimmed_style),
            ])
            .alignment(Alignment::Center),
            Line::from(
                WEEKDAY_LABELS
                    .iter()
                    .map(|label| Span::styled(format!(" {label} "), self.theme.dimmed_style))
                    .collect::<Vec<_>>(),
            ),
        ];
        lines.extend(self.grid_lines());

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_seeds_month_from_range_start() {
        let mut picker = DatePicker::new(date(2024, 1, 15));
        let range = DateRange::Empty.select(date(2024, 3, 4));

        picker.open(range);

        assert_eq!(picker.month(), CalendarMonth::containing(date(2024, 3, 1)));
        assert_eq!(picker.cursor(), date(2024, 3, 4));
    }

    #[test]
    fn test_open_without_range_keeps_view() {
        let mut picker = DatePicker::new(date(2024, 1, 15));
        picker.next_month();
        picker.open(DateRange::Empty);

        assert_eq!(picker.month().month(), 2);
    }

    #[test]
    fn test_month_change_clamps_cursor_day() {
        let mut picker = DatePicker::new(date(2024, 1, 31));
        picker.next_month();

        assert_eq!(picker.cursor(), date(2024, 2, 29));
    }

    #[test]
    fn test_cursor_crosses_year_boundary() {
        let mut picker = DatePicker::new(date(2024, 1, 2));
        picker.move_cursor(-7);

        assert_eq!(picker.cursor(), date(2023, 12, 26));
        assert_eq!(picker.month().year(), 2023);
        assert_eq!(picker.month().month(), 12);
    }

    #[test]
    fn test_render_month_grid() {
        let picker = DatePicker::new(date(2024, 1, 10));
        let theme = Theme::default();
        let range = DateRange::Empty.select(date(2024, 1, 5)).select(date(2024, 1, 8));
        let area = Rect::new(0, 0, CALENDAR_WIDTH, 8);
        let mut buf = Buffer::empty(area);

        CalendarView::new(&picker, range, &theme).render(area, &mut buf);

        let row = |y: u16| -> String { (0..area.width).map(|x| buf[(x, y)].symbol()).collect() };
        assert!(row(0).contains("January 2024"));
        assert!(row(1).starts_with(" Su "));
        // January 2024 starts on a Monday: one blank cell.
        assert!(row(2).starts_with("      1"));
        assert_eq!(buf[(22, 2)].style().bg, theme.endpoint_style.bg);
        assert_eq!(buf[(2, 3)].style().bg, theme.range_style.bg);
    }
}
