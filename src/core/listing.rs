//! Derivations the list screen applies to a fetched collection.

use crate::api::models::City;
use std::collections::BTreeSet;

/// Sorted, de-duplicated country names of the given cities
pub fn country_filter_keys(cities: &[City]) -> Vec<String> {
    cities
        .iter()
        .map(|city| city.country.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Keep cities of `country` (all when `None`) and sort them by name
pub fn filter_and_sort(cities: Vec<City>, country: Option<&str>) -> Vec<City> {
    let mut cities: Vec<City> = match country {
        Some(country) => cities
            .into_iter()
            .filter(|city| city.country == country)
            .collect(),
        None => cities,
    };
    cities.sort_by(|a, b| a.city.cmp(&b.city));
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::CityData;

    fn city(id: &str, name: &str, country: &str) -> City {
        City {
            id: id.to_string(),
            city: name.to_string(),
            country: country.to_string(),
            short_description: String::new(),
            data: CityData {
                area_sq_km: 1.0,
                population_count: 1,
            },
        }
    }

    fn scenario() -> Vec<City> {
        vec![
            city("1", "Paris", "France"),
            city("2", "Berlin", "Germany"),
            city("3", "Lyon", "France"),
        ]
    }

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.city.as_str()).collect()
    }

    #[test]
    fn test_country_filter_keys_sorted_and_unique() {
        assert_eq!(country_filter_keys(&scenario()), vec!["France", "Germany"]);
    }

    #[test]
    fn test_country_filter_keys_empty() {
        assert!(country_filter_keys(&[]).is_empty());
    }

    #[test]
    fn test_no_filter_sorts_full_collection() {
        let sorted = filter_and_sort(scenario(), None);
        assert_eq!(names(&sorted), vec!["Berlin", "Lyon", "Paris"]);
    }

    #[test]
    fn test_filter_by_country() {
        let filtered = filter_and_sort(scenario(), Some("France"));
        assert_eq!(names(&filtered), vec!["Lyon", "Paris"]);
        assert!(filtered.iter().all(|c| c.country == "France"));
    }

    #[test]
    fn test_filter_unknown_country_is_empty() {
        assert!(filter_and_sort(scenario(), Some("Spain")).is_empty());
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let cities = vec![
            city("1", "lyon", "France"),
            city("2", "Paris", "France"),
            city("3", "Arles", "France"),
        ];
        // Uppercase sorts before lowercase
        assert_eq!(names(&filter_and_sort(cities, None)), vec!["Arles", "Paris", "lyon"]);
    }
}
