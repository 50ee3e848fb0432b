use super::{StateStore, ViewModel};
use crate::api::models::{City, CityId};
use crate::core::services::traits::CitiesService;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// State of a single city's detail screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityDetailsState {
    pub city: Option<City>,
    pub error_message: Option<String>,
}

impl CityDetailsState {
    pub fn error_presented(&self) -> bool {
        self.error_message.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CityDetailsAction {
    OnAppear,
    /// Clears the error without fetching again
    ErrorClosed,
}

pub struct CityDetailsViewModel {
    store: StateStore<CityDetailsState>,
    cities_service: Arc<dyn CitiesService>,
    city_id: CityId,
}

impl CityDetailsViewModel {
    pub fn new(city_id: impl Into<CityId>, cities_service: Arc<dyn CitiesService>) -> Self {
        Self {
            store: StateStore::default(),
            cities_service,
            city_id: city_id.into(),
        }
    }

    pub fn city_id(&self) -> &str {
        &self.city_id
    }
}

#[async_trait]
impl ViewModel for CityDetailsViewModel {
    type State = CityDetailsState;
    type Action = CityDetailsAction;

    fn state(&self) -> &CityDetailsState {
        self.store.get()
    }

    fn subscribe(&self) -> watch::Receiver<CityDetailsState> {
        self.store.subscribe()
    }

    async fn trigger(&mut self, action: CityDetailsAction) {
        debug!(?action, city_id = %self.city_id, "CityDetailsViewModel trigger");
        match action {
            CityDetailsAction::OnAppear => {
                let result = self.cities_service.get_city(&self.city_id).await;
                match result {
                    Ok(city) => self.store.update(|state| state.city = Some(city)),
                    Err(error) => self
                        .store
                        .update(|state| state.error_message = Some(error.to_string())),
                }
            }
            CityDetailsAction::ErrorClosed => {
                self.store.update(|state| state.error_message = None);
            }
        }
    }
}
