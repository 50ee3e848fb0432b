use crate::api::models::{City, CityData};
use crate::core::services::traits::CitiesService;
use crate::error::ServiceError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn city(id: &str, name: &str, country: &str) -> City {
    City {
        id: id.to_string(),
        city: name.to_string(),
        country: country.to_string(),
        short_description: format!("About {}", name),
        data: CityData {
            area_sq_km: 100.0,
            population_count: 1_000,
        },
    }
}

/// Paris/France, Berlin/Germany, Lyon/France
pub fn scenario_cities() -> Vec<City> {
    vec![
        city("1", "Paris", "France"),
        city("2", "Berlin", "Germany"),
        city("3", "Lyon", "France"),
    ]
}

/// Service that serves a fixed collection and fails on scripted calls
pub struct ScriptedService {
    cities: Vec<City>,
    failures: Mutex<VecDeque<bool>>,
    calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            failures: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Outcome of the next calls in order; `true` fails the call
    pub fn with_failures(self, failures: &[bool]) -> Self {
        *self.failures.lock().unwrap() = failures.iter().copied().collect();
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_outcome(&self) -> Result<(), ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fail = self.failures.lock().unwrap().pop_front().unwrap_or(false);
        if fail {
            Err(ServiceError::Unavailable {
                message: "Random error occurred".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CitiesService for ScriptedService {
    async fn get_cities(&self) -> Result<Vec<City>, ServiceError> {
        self.next_outcome()?;
        Ok(self.cities.clone())
    }

    async fn get_city(&self, id: &str) -> Result<City, ServiceError> {
        self.next_outcome()?;
        self.cities
            .iter()
            .find(|city| city.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound { id: id.to_string() })
    }
}
