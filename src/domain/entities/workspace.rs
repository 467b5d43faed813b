//! Bookable workspace entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkspaceId(pub u32);

impl WorkspaceId {
    /// Returns the underlying u32 value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WorkspaceId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Kind of space offered by a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkspaceCategory {
    /// Private office.
    PrivateOffice,
    /// Shared co-working floor.
    CoWorkingSpace,
    /// Bookable meeting room.
    MeetingRoom,
    /// Event venue.
    EventSpace,
}

impl WorkspaceCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [
        Self::PrivateOffice,
        Self::CoWorkingSpace,
        Self::MeetingRoom,
        Self::EventSpace,
    ];

    /// Returns the human-readable category name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PrivateOffice => "Private Office",
            Self::CoWorkingSpace => "Co-Working Space",
            Self::MeetingRoom => "Meeting Room",
            Self::EventSpace => "Event Space",
        }
    }

    /// Returns the filter key selecting this category.
    #[must_use]
    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::PrivateOffice => "private",
            Self::CoWorkingSpace => "coworking",
            Self::MeetingRoom => "meeting",
            Self::EventSpace => "event",
        }
    }

    /// Looks up the category for a filter key.
    #[must_use]
    pub fn from_filter_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.filter_key() == key)
    }
}

impl std::fmt::Display for WorkspaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A bookable workspace listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    id: WorkspaceId,
    name: String,
    category: WorkspaceCategory,
    location: String,
    capacity: String,
    price_per_day: u32,
    amenities: Vec<String>,
    image: String,
    available: bool,
}

impl Workspace {
    /// Creates an available workspace with no amenities.
    #[must_use]
    pub fn new(
        id: impl Into<WorkspaceId>,
        name: impl Into<String>,
        category: WorkspaceCategory,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            location: location.into(),
            capacity: String::new(),
            price_per_day: 0,
            amenities: Vec::new(),
            image: String::new(),
            available: true,
        }
    }

    /// Sets the capacity description.
    #[must_use]
    pub fn with_capacity(mut self, capacity: impl Into<String>) -> Self {
        self.capacity = capacity.into();
        self
    }

    /// Sets the daily price.
    #[must_use]
    pub const fn with_price(mut self, price_per_day: u32) -> Self {
        self.price_per_day = price_per_day;
        self
    }

    /// Sets the amenity list.
    #[must_use]
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets availability.
    #[must_use]
    pub const fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Returns the workspace id.
    #[must_use]
    pub const fn id(&self) -> WorkspaceId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> WorkspaceCategory {
        self.category
    }

    /// Returns the location line.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the capacity description.
    #[must_use]
    pub fn capacity(&self) -> &str {
        &self.capacity
    }

    /// Returns the daily price in dollars.
    #[must_use]
    pub const fn price_per_day(&self) -> u32 {
        self.price_per_day
    }

    /// Returns the amenities in display order.
    #[must_use]
    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    /// Returns the first `n` amenities joined for a card summary.
    #[must_use]
    pub fn amenity_summary(&self, n: usize) -> String {
        self.amenities
            .iter()
            .take(n)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the image reference.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns whether the workspace can be booked.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the price label shown on cards, e.g. `$45/day`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}/day", self.price_per_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_builder() {
        let ws = Workspace::new(7_u32, "Quiet Corner", WorkspaceCategory::MeetingRoom, "Old Town")
            .with_capacity("2-4 people")
            .with_price(40)
            .with_amenities(["Whiteboard", "Projector", "Coffee"])
            .with_available(false);

        assert_eq!(ws.id().as_u32(), 7);
        assert_eq!(ws.capacity(), "2-4 people");
        assert_eq!(ws.price_label(), "$40/day");
        assert_eq!(ws.amenity_summary(2), "Whiteboard, Projector");
        assert!(!ws.is_available());
    }

    #[test]
    fn test_category_keys_round_trip() {
        for category in WorkspaceCategory::ALL {
            assert_eq!(
                WorkspaceCategory::from_filter_key(category.filter_key()),
                Some(category)
            );
        }
        assert_eq!(WorkspaceCategory::from_filter_key("studio"), None);
    }
}
