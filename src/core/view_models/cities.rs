use super::{StateStore, ViewModel};
use crate::api::models::City;
use crate::core::listing::{country_filter_keys, filter_and_sort};
use crate::core::services::traits::CitiesService;
use crate::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// State of the cities list screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitiesViewState {
    /// `None` while loading
    pub cities: Option<Vec<City>>,
    pub selected_country_filter: Option<String>,
    pub country_filter_keys: Vec<String>,
    pub error_message: Option<String>,
}

impl CitiesViewState {
    pub fn error_presented(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn interactions_disabled(&self) -> bool {
        self.cities.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CitiesViewAction {
    OnAppear,
    /// Select a country, or `None` for all countries
    SelectCountryFilter(Option<String>),
    /// The error alert was dismissed; reloads with the current selection
    ErrorClosed,
}

pub struct CitiesViewModel {
    store: StateStore<CitiesViewState>,
    cities_service: Arc<dyn CitiesService>,
}

impl CitiesViewModel {
    pub fn new(cities_service: Arc<dyn CitiesService>) -> Self {
        Self {
            store: StateStore::default(),
            cities_service,
        }
    }

    async fn handle(&mut self, action: CitiesViewAction) -> Result<(), ServiceError> {
        match action {
            CitiesViewAction::OnAppear => self.reload(None).await,
            CitiesViewAction::SelectCountryFilter(country) => {
                let filter = country.clone();
                self.store
                    .update(|state| state.selected_country_filter = country);
                self.reload(filter).await
            }
            CitiesViewAction::ErrorClosed => {
                self.store.update(|state| state.error_message = None);
                let filter = self.store.get().selected_country_filter.clone();
                self.reload(filter).await
            }
        }
    }

    async fn reload(&mut self, country_filter: Option<String>) -> Result<(), ServiceError> {
        self.store.update(|state| state.cities = None);

        let cities = self.cities_service.get_cities().await?;
        // Keys always come from the unfiltered collection
        let keys = country_filter_keys(&cities);
        let cities = filter_and_sort(cities, country_filter.as_deref());
        debug!(
            count = cities.len(),
            filter = ?country_filter,
            "Cities reloaded"
        );

        self.store.update(|state| {
            state.country_filter_keys = keys;
            state.cities = Some(cities);
        });
        Ok(())
    }
}

#[async_trait]
impl ViewModel for CitiesViewModel {
    type State = CitiesViewState;
    type Action = CitiesViewAction;

    fn state(&self) -> &CitiesViewState {
        self.store.get()
    }

    fn subscribe(&self) -> watch::Receiver<CitiesViewState> {
        self.store.subscribe()
    }

    async fn trigger(&mut self, action: CitiesViewAction) {
        debug!(?action, "CitiesViewModel trigger");
        if let Err(error) = self.handle(action).await {
            debug!(%error, "CitiesViewModel action failed");
            self.store
                .update(|state| state.error_message = Some(error.to_string()));
        }
    }
}
