//! Application services.

mod booking_search;
mod workspace_filter;

pub use booking_search::BookingSearch;
pub use workspace_filter::WorkspaceFilter;
