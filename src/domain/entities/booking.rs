//! Booking confirmation flow.

use super::Workspace;

/// Confirmation modal state. Nothing is recorded on confirm; the flow only
/// drives the modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingFlow {
    /// No workspace selected.
    #[default]
    Idle,
    /// Workspace selected, awaiting confirmation.
    Reviewing(Workspace),
    /// Workspace confirmed.
    Confirmed(Workspace),
}

impl BookingFlow {
    /// Opens the review step for an available workspace.
    ///
    /// Returns `false` and leaves the flow untouched when the workspace is
    /// unavailable.
    pub fn book(&mut self, workspace: &Workspace) -> bool {
        if !workspace.is_available() {
            return false;
        }
        *self = Self::Reviewing(workspace.clone());
        true
    }

    /// Confirms the reviewed workspace. No-op outside `Reviewing`.
    pub fn confirm(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Reviewing(workspace) => {
                *self = Self::Confirmed(workspace);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Closes the modal, discarding the selection.
    pub fn close(&mut self) {
        *self = Self::Idle;
    }

    /// Returns true when no workspace is selected.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true after the booking was confirmed.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    /// Returns the selected workspace, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&Workspace> {
        match self {
            Self::Idle => None,
            Self::Reviewing(ws) | Self::Confirmed(ws) => Some(ws),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WorkspaceCategory;

    fn workspace(available: bool) -> Workspace {
        Workspace::new(1_u32, "Desk", WorkspaceCategory::CoWorkingSpace, "Harbor")
            .with_available(available)
    }

    #[test]
    fn test_full_flow() {
        let mut flow = BookingFlow::default();
        let ws = workspace(true);

        assert!(flow.book(&ws));
        assert_eq!(flow, BookingFlow::Reviewing(ws.clone()));

        assert!(flow.confirm());
        assert!(flow.is_confirmed());
        assert_eq!(flow.selected(), Some(&ws));

        flow.close();
        assert!(flow.is_idle());
    }

    #[test]
    fn test_unavailable_workspace_stays_idle() {
        let mut flow = BookingFlow::default();

        assert!(!flow.book(&workspace(false)));
        assert!(flow.is_idle());
    }

    #[test]
    fn test_close_before_confirm_clears_selection() {
        let mut flow = BookingFlow::default();
        flow.book(&workspace(true));
        flow.close();

        assert!(flow.is_idle());
        assert!(flow.selected().is_none());
    }

    #[test]
    fn test_confirm_from_idle_is_noop() {
        let mut flow = BookingFlow::default();
        assert!(!flow.confirm());
        assert!(flow.is_idle());
    }
}
