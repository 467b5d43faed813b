//! Staged and applied search criteria for the booking tab.

use chrono::NaiveDate;
use tracing::debug;

use crate::application::services::WorkspaceFilter;
use crate::domain::entities::{DateRange, FilterCriteria, Workspace};

/// Holds the criteria being edited and the criteria last searched.
///
/// Edits only ever replace the staged snapshot. The result list is computed
/// from the applied snapshot alone, which changes only on [`commit`].
///
/// [`commit`]: BookingSearch::commit
#[derive(Debug, Clone, Default)]
pub struct BookingSearch {
    staged: FilterCriteria,
    applied: FilterCriteria,
}

impl BookingSearch {
    /// Creates a search with empty staged and applied criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the criteria being edited.
    #[must_use]
    pub const fn staged(&self) -> &FilterCriteria {
        &self.staged
    }

    /// Returns the criteria driving the results.
    #[must_use]
    pub const fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    /// Replaces the staged query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.staged = std::mem::take(&mut self.staged).with_query(query);
    }

    /// Appends a character to the staged query.
    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.staged.query().to_string();
        query.push(c);
        self.set_query(query);
    }

    /// Removes the last character of the staged query.
    pub fn pop_query_char(&mut self) {
        let mut query = self.staged.query().to_string();
        query.pop();
        self.set_query(query);
    }

    /// Sets the staged category key.
    pub fn set_category(&mut self, key: &str) {
        self.staged = std::mem::take(&mut self.staged).with_category_key(key);
    }

    /// Applies a calendar click to the staged range.
    pub fn select_date(&mut self, day: NaiveDate) {
        let dates = self.staged.dates().select(day);
        debug!(?dates, "Staged date range updated");
        self.staged = std::mem::take(&mut self.staged).with_dates(dates);
    }

    /// Resets the staged date range.
    pub fn clear_dates(&mut self) {
        self.staged = std::mem::take(&mut self.staged).with_dates(DateRange::Empty);
    }

    /// Copies the staged snapshot over the applied one. No validation; an
    /// incomplete range commits as-is.
    pub fn commit(&mut self) {
        self.applied = self.staged.clone();
        debug!(
            query = %self.applied.query(),
            category = %self.applied.category().key(),
            dates = %self.applied.dates().label(),
            "Search committed"
        );
    }

    /// Returns the workspaces matching the applied criteria.
    #[must_use]
    pub fn results<'a>(&self, catalog: &'a [Workspace]) -> Vec<&'a Workspace> {
        WorkspaceFilter::apply(catalog, &self.applied)
    }
}
