//! Workspace filtering.

use crate::domain::entities::{FilterCriteria, Workspace};

/// Selects the workspaces matching a criteria snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceFilter;

impl WorkspaceFilter {
    /// Returns the matching workspaces in catalog order.
    #[must_use]
    pub fn apply<'a>(catalog: &'a [Workspace], criteria: &FilterCriteria) -> Vec<&'a Workspace> {
        let query = criteria.normalized_query();
        catalog
            .iter()
            .filter(|ws| {
                Self::matches_query(ws, &query)
                    && criteria.category().matches(ws.category())
                    && Self::matches_dates(ws, criteria)
            })
            .collect()
    }

    /// `query` must already be trimmed and lower-cased.
    fn matches_query(workspace: &Workspace, query: &str) -> bool {
        query.is_empty()
            || workspace.name().to_lowercase().contains(query)
            || workspace.location().to_lowercase().contains(query)
    }

    /// The date range is shown and drives the duration label, but no
    /// workspace carries availability dates, so every workspace passes.
    const fn matches_dates(_workspace: &Workspace, _criteria: &FilterCriteria) -> bool {
        true
    }
}
