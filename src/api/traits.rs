use crate::api::types::LocationRecord;
use crate::error::ApiError;
use crate::models::FeaturedProperty;
use async_trait::async_trait;

/// Read-only view of the listings backend.
/// Implemented over HTTP in production and by a scripted stub in tests.
#[async_trait]
pub trait ListingsApi: Send + Sync {
    /// Look up locations whose city matches `city`
    async fn search_locations(&self, city: &str) -> Result<Vec<LocationRecord>, ApiError>;

    /// Fetch the fixed set of featured listings
    async fn featured_properties(&self) -> Result<Vec<FeaturedProperty>, ApiError>;
}
