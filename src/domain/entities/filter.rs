//! Workspace search criteria.

use super::{DateRange, WorkspaceCategory};

/// Parsed category facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Empty key; every category matches.
    #[default]
    All,
    /// A recognized key.
    Only(WorkspaceCategory),
    /// A key with no lookup entry. Matches every category.
    Unrecognized(String),
}

impl CategoryFilter {
    /// Chip options in display order as `(label, key)`.
    pub const OPTIONS: [(&'static str, &'static str); 5] = [
        ("All", ""),
        ("Private", "private"),
        ("Co-Working", "coworking"),
        ("Meeting", "meeting"),
        ("Event", "event"),
    ];

    /// Parses a category key.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key.is_empty() {
            return Self::All;
        }
        WorkspaceCategory::from_filter_key(key)
            .map_or_else(|| Self::Unrecognized(key.to_string()), Self::Only)
    }

    /// Returns the key this filter was parsed from.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => "",
            Self::Only(category) => category.filter_key(),
            Self::Unrecognized(key) => key,
        }
    }

    /// Returns whether `category` passes this facet.
    #[must_use]
    pub fn matches(&self, category: WorkspaceCategory) -> bool {
        match self {
            Self::All | Self::Unrecognized(_) => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

/// One snapshot of the search inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    query: String,
    category: CategoryFilter,
    dates: DateRange,
}

impl FilterCriteria {
    /// Creates criteria, parsing `category_key`.
    #[must_use]
    pub fn new(query: impl Into<String>, category_key: &str, dates: DateRange) -> Self {
        Self {
            query: query.into(),
            category: CategoryFilter::from_key(category_key),
            dates,
        }
    }

    /// Returns the raw query as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the trimmed, lower-cased query used for matching.
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Returns the parsed category.
    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Returns the date range.
    #[must_use]
    pub const fn dates(&self) -> DateRange {
        self.dates
    }

    /// Replaces the query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Replaces the category, parsing `key`.
    #[must_use]
    pub fn with_category_key(mut self, key: &str) -> Self {
        self.category = CategoryFilter::from_key(key);
        self
    }

    /// Replaces the date range.
    #[must_use]
    pub const fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", CategoryFilter::All ; "empty key")]
    #[test_case("private", CategoryFilter::Only(WorkspaceCategory::PrivateOffice) ; "private")]
    #[test_case("coworking", CategoryFilter::Only(WorkspaceCategory::CoWorkingSpace) ; "coworking")]
    #[test_case("meeting", CategoryFilter::Only(WorkspaceCategory::MeetingRoom) ; "meeting")]
    #[test_case("event", CategoryFilter::Only(WorkspaceCategory::EventSpace) ; "event")]
    #[test_case("Meeting", CategoryFilter::Unrecognized("Meeting".into()) ; "keys are case sensitive")]
    fn test_category_from_key(key: &str, expected: CategoryFilter) {
        assert_eq!(CategoryFilter::from_key(key), expected);
    }

    #[test]
    fn test_unrecognized_key_fails_open() {
        // Unknown keys match everything rather than nothing.
        let filter = CategoryFilter::from_key("rooftop");
        for category in WorkspaceCategory::ALL {
            assert!(filter.matches(category));
        }
    }

    #[test]
    fn test_only_matches_its_category() {
        let filter = CategoryFilter::from_key("meeting");
        assert!(filter.matches(WorkspaceCategory::MeetingRoom));
        assert!(!filter.matches(WorkspaceCategory::EventSpace));
    }

    #[test]
    fn test_options_keys_parse() {
        for (_, key) in CategoryFilter::OPTIONS {
            assert_eq!(CategoryFilter::from_key(key).key(), key);
        }
    }

    #[test]
    fn test_normalized_query() {
        let criteria = FilterCriteria::default().with_query("  Hub ");
        assert_eq!(criteria.normalized_query(), "hub");
        assert_eq!(criteria.query(), "  Hub ");
    }
}
