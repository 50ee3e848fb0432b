//! Terminal front end: command parsing, dispatch and the screen views.

pub mod browse;
pub mod cities_view;
pub mod city_details_view;
pub mod dispatcher;
pub mod loading;
pub mod main_types;
