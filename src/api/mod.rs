//! Data model shared by the service and view-model layers.

pub mod models;

pub use models::{CitiesDocument, City, CityData};
