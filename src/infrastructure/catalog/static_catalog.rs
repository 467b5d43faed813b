//! Built-in catalog. Nothing is fetched; every list is fixed at startup.

use crate::domain::entities::{
    Feature, FeaturedSpace, GalleryImage, PricingPlan, Workspace, WorkspaceCategory,
};
use crate::domain::ports::CatalogPort;

const UNSPLASH: &str = "https://images.unsplash.com";

fn photo(id: &str, query: &str) -> String {
    format!("{UNSPLASH}/photo-{id}?{query}")
}

/// In-memory catalog shipped with the application.
pub struct StaticCatalog {
    workspaces: Vec<Workspace>,
    pricing_plans: Vec<PricingPlan>,
    gallery_images: Vec<GalleryImage>,
    featured_spaces: Vec<FeaturedSpace>,
    features: Vec<Feature>,
}

impl StaticCatalog {
    /// Creates the catalog with the built-in content.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workspaces: default_workspaces(),
            pricing_plans: vec![
                PricingPlan::new("Free", "$0", "for one user"),
                PricingPlan::new("Pro", "$15", "per user"),
                PricingPlan::new("Enterprise", "$29", "per user"),
            ],
            gallery_images: vec![
                GalleryImage::new(photo("1522202176988-66273c2fd55f", "w=800"), "Workspace 1"),
                GalleryImage::new(photo("1504384308090-c894fdcc538d", "w=800"), "Workspace 2"),
                GalleryImage::new(photo("1522202176988-66273c2fd55f", "w=800"), "Workspace 3"),
                GalleryImage::new(photo("1497366811353-6870744d04b2", "w=800"), "Workspace 4"),
            ],
            featured_spaces: vec![
                FeaturedSpace::new("Downtown Hub", 25),
                FeaturedSpace::new("Riverside Loft", 32),
            ],
            features: vec![
                Feature::new("Instant booking", "Reserve a desk or room in seconds."),
                Feature::new("Verified amenities", "Fast Wi-Fi, coffee, quiet zones."),
                Feature::new("Team friendly", "Spaces for 1 to 20 people."),
            ],
        }
    }

    /// Creates a catalog with custom workspaces and no marketing content.
    #[must_use]
    pub fn with_workspaces(workspaces: Vec<Workspace>) -> Self {
        Self {
            workspaces,
            pricing_plans: Vec::new(),
            gallery_images: Vec::new(),
            featured_spaces: Vec::new(),
            features: Vec::new(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogPort for StaticCatalog {
    fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    fn pricing_plans(&self) -> &[PricingPlan] {
        &self.pricing_plans
    }

    fn gallery_images(&self) -> &[GalleryImage] {
        &self.gallery_images
    }

    fn featured_spaces(&self) -> &[FeaturedSpace] {
        &self.featured_spaces
    }

    fn features(&self) -> &[Feature] {
        &self.features
    }
}

fn default_workspaces() -> Vec<Workspace> {
    const CARD: &str = "w=800&h=600&fit=crop";

    vec![
        Workspace::new(
            1_u32,
            "Premium Private Office",
            WorkspaceCategory::PrivateOffice,
            "Downtown Financial District",
        )
        .with_capacity("1-2 people")
        .with_price(45)
        .with_amenities(["Standing desk", "High-speed WiFi", "Printing access"])
        .with_image(photo("1497366216548-37526070297c", CARD)),
        Workspace::new(
            2_u32,
            "Co-Working Hot Desk",
            WorkspaceCategory::CoWorkingSpace,
            "Creative Arts Quarter",
        )
        .with_capacity("Open seating")
        .with_price(25)
        .with_amenities(["Coffee bar", "Collaborative atmosphere", "Natural light"])
        .with_image(photo("1519389950473-47ba0277781c", CARD)),
        Workspace::new(
            3_u32,
            "Executive Meeting Room",
            WorkspaceCategory::MeetingRoom,
            "Tech Innovation Hub",
        )
        .with_capacity("8-12 people")
        .with_price(75)
        .with_amenities(["Video conferencing", "Whiteboard", "Catering available"])
        .with_image(photo("1497366811353-6870744d04b2", CARD)),
        Workspace::new(
            4_u32,
            "Modern Startup Space",
            WorkspaceCategory::PrivateOffice,
            "Innovation District",
        )
        .with_capacity("4-6 people")
        .with_price(85)
        .with_amenities(["24/7 access", "Kitchen", "Phone booths"])
        .with_image(photo("1504384308090-c894fdcc538d", CARD)),
        Workspace::new(
            5_u32,
            "Creative Co-Working Area",
            WorkspaceCategory::CoWorkingSpace,
            "Arts and Culture Center",
        )
        .with_capacity("Open seating")
        .with_price(30)
        .with_amenities(["Event space", "Workshops", "Community events"])
        .with_image(photo("1522202176988-66273c2fd55f", CARD))
        .with_available(false),
        Workspace::new(
            6_u32,
            "Spacious Conference Room",
            WorkspaceCategory::MeetingRoom,
            "Business District",
        )
        .with_capacity("15-20 people")
        .with_price(95)
        .with_amenities(["Projector", "Conference phone", "Refreshments"])
        .with_image(photo("1507679799987-c73779587ccf", CARD)),
    ]
}
