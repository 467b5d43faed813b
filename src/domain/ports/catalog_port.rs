//! Catalog port definition.

use crate::domain::entities::{Feature, FeaturedSpace, GalleryImage, PricingPlan, Workspace};

/// Read-only source of the bookable workspaces and marketing content.
pub trait CatalogPort: Send + Sync {
    /// Returns all workspaces in catalog order.
    fn workspaces(&self) -> &[Workspace];

    /// Returns the pricing table rows.
    fn pricing_plans(&self) -> &[PricingPlan];

    /// Returns the gallery tiles.
    fn gallery_images(&self) -> &[GalleryImage];

    /// Returns the landing page teasers.
    fn featured_spaces(&self) -> &[FeaturedSpace];

    /// Returns the landing page selling points.
    fn features(&self) -> &[Feature];
}
