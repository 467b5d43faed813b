mod calendar;
mod footer_bar;
mod header_bar;
mod input;
mod modal;

pub use calendar::{CALENDAR_WIDTH, CalendarView, DatePicker};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use modal::{Modal, centered_rect};
