//! Domain entity definitions.

mod booking;
mod calendar;
mod content;
mod date_range;
mod filter;
mod session_token;
mod workspace;

pub use booking::BookingFlow;
pub use calendar::{CalendarMonth, WEEKDAY_LABELS};
pub use content::{Feature, FeaturedSpace, GalleryImage, PricingPlan};
pub use date_range::{DateRange, StayDuration};
pub use filter::{CategoryFilter, FilterCriteria};
pub use session_token::SessionToken;
pub use workspace::{Workspace, WorkspaceCategory, WorkspaceId};
