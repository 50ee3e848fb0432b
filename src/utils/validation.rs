//! Input validation for user-supplied identifiers
//!
//! Validation happens before anything is dispatched to a view-model, so a
//! malformed argument never reaches the service.

use crate::error::CliError;

/// Validate a city id given on the command line or in the browser
pub fn validate_city_id(id: &str) -> crate::Result<()> {
    if id.trim().is_empty() {
        return Err(CliError::InvalidArguments("City ID cannot be empty".to_string()).into());
    }

    if id.chars().any(char::is_whitespace) {
        return Err(CliError::InvalidArguments(format!(
            "Invalid city ID '{}': IDs cannot contain whitespace",
            id
        ))
        .into());
    }

    Ok(())
}

/// Validate a country filter value
pub fn validate_country(country: &str) -> crate::Result<()> {
    if country.trim().is_empty() {
        return Err(CliError::InvalidArguments("Country cannot be empty".to_string()).into());
    }

    Ok(())
}
