//! Static marketing content shown on the home, pricing, and gallery tabs.

use serde::{Deserialize, Serialize};

/// Subscription plan row in the pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Plan name.
    pub name: String,
    /// Display price, e.g. `$15`.
    pub price: String,
    /// Billing unit, e.g. `per user`.
    pub details: String,
}

impl PricingPlan {
    /// Creates a pricing plan.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            details: details.into(),
        }
    }
}

/// Gallery tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image URL.
    pub url: String,
    /// Alternative text, shown in place of the image.
    pub alt: String,
}

impl GalleryImage {
    /// Creates a gallery tile.
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

/// Featured space teaser on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedSpace {
    /// Space name.
    pub name: String,
    /// Lowest daily price in dollars.
    pub starting_price: u32,
}

impl FeaturedSpace {
    /// Creates a featured space.
    #[must_use]
    pub fn new(name: impl Into<String>, starting_price: u32) -> Self {
        Self {
            name: name.into(),
            starting_price,
        }
    }

    /// Returns e.g. `From $25 / day`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("From ${} / day", self.starting_price)
    }
}

/// Selling point on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Short heading.
    pub title: String,
    /// One-sentence description.
    pub text: String,
}

impl Feature {
    /// Creates a feature.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}
