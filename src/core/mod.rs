//! Business logic: the cities service capability and the view-models built on it.

pub mod listing;
pub mod services;
pub mod view_models;
