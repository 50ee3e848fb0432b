//! In-memory cities service that emulates a flaky network backend.

use super::traits::CitiesService;
use super::types::{FAILURE_ROLL_MAX, MockOptions, RANDOM_ERROR_MESSAGE};
use crate::api::models::{CitiesDocument, City};
use crate::error::{DataError, ServiceError};
use async_trait::async_trait;
use rand::Rng;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Cities document compiled into the binary
pub const BUNDLED_CITIES_JSON: &str = include_str!("../../../data/cities.json");

/// Mock implementation of [`CitiesService`].
///
/// The collection is decoded once at construction and never mutated afterwards,
/// so the service can be shared behind an `Arc` without locking.
#[derive(Debug)]
pub struct MockCitiesService {
    cities: Vec<City>,
    options: MockOptions,
}

impl MockCitiesService {
    /// Create a service over the bundled cities document
    pub fn new(options: MockOptions) -> Result<Self, DataError> {
        Self::from_json(BUNDLED_CITIES_JSON, options)
    }

    /// Create a service over a cities document read from disk
    pub fn from_path(path: &Path, options: MockOptions) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|source| DataError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        Self::from_json(&content, options)
    }

    /// Create a service by decoding a cities document
    pub fn from_json(json: &str, options: MockOptions) -> Result<Self, DataError> {
        let document: CitiesDocument = serde_json::from_str(json)?;
        Self::from_cities(document.cities, options)
    }

    /// Create a service over an already decoded collection
    pub fn from_cities(cities: Vec<City>, options: MockOptions) -> Result<Self, DataError> {
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.id.as_str()) {
                return Err(DataError::DuplicateId {
                    id: city.id.clone(),
                });
            }
        }

        debug!(count = cities.len(), "Loaded cities document");
        Ok(Self { cities, options })
    }

    pub fn options(&self) -> &MockOptions {
        &self.options
    }

    /// Number of cities in the loaded collection
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    // Adds an artificial delay to simulate network latency
    async fn add_delay(&self) {
        if !self.options.delay.is_zero() {
            tokio::time::sleep(self.options.delay).await;
        }
    }

    fn maybe_fail(&self) -> Result<(), ServiceError> {
        if !self.options.randomly_fail {
            return Ok(());
        }

        let roll = rand::rng().random_range(0..=FAILURE_ROLL_MAX);
        if roll == 0 {
            warn!("Injecting simulated service failure");
            return Err(ServiceError::Unavailable {
                message: RANDOM_ERROR_MESSAGE.to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl CitiesService for MockCitiesService {
    async fn get_cities(&self) -> Result<Vec<City>, ServiceError> {
        debug!("get_cities");
        self.add_delay().await;
        self.maybe_fail()?;

        Ok(self.cities.clone())
    }

    async fn get_city(&self, id: &str) -> Result<City, ServiceError> {
        debug!(id, "get_city");
        self.add_delay().await;
        self.maybe_fail()?;

        self.cities
            .iter()
            .find(|city| city.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound { id: id.to_string() })
    }
}
