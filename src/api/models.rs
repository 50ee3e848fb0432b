use serde::{Deserialize, Serialize};

/// Identity key of a [`City`]
pub type CityId = String;

// City models
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CityData {
    pub area_sq_km: f64,
    pub population_count: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct City {
    pub id: CityId,
    /// City name
    pub city: String,
    pub country: String,
    pub short_description: String,
    pub data: CityData,
}

/// Root of the bundled cities document
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CitiesDocument {
    pub cities: Vec<City>,
}
