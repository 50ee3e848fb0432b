use crate::api::models::City;
use crate::error::ServiceError;
use async_trait::async_trait;

/// Capability for fetching cities.
///
/// Both operations may suspend for an implementation-defined latency, either
/// real I/O or a simulated round-trip.
#[async_trait]
pub trait CitiesService: Send + Sync {
    /// Return the full, unfiltered collection
    async fn get_cities(&self) -> Result<Vec<City>, ServiceError>;

    /// Return the city with the given id, or [`ServiceError::NotFound`]
    async fn get_city(&self, id: &str) -> Result<City, ServiceError>;
}
