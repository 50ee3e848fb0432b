//! Terminal view of a single city's detail screen.

use crate::cli::loading::LoadingIndicator;
use crate::core::view_models::{CityDetailsAction, CityDetailsState, CityDetailsViewModel, ViewModel};
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};

const LOADING_MESSAGE: &str = "Loading city...";
pub const CANCEL_BUTTON: &str = "Cancel";

fn loading_message(city_id: &str) -> String {
    format!("Loading city {}...", city_id)
}

fn is_loading(state: &CityDetailsState) -> bool {
    state.city.is_none() && !state.error_presented()
}

pub struct CityDetailsView<'a> {
    display: &'a TableDisplay,
    show_spinner: bool,
}

impl<'a> CityDetailsView<'a> {
    pub fn new(display: &'a TableDisplay, show_spinner: bool) -> Self {
        Self {
            display,
            show_spinner,
        }
    }

    pub fn render(&self, state: &CityDetailsState) -> String {
        match &state.city {
            Some(city) => self.display.render_city_detail(city),
            None => LOADING_MESSAGE.to_string(),
        }
    }

    /// Show the screen. An error alert is dismissed with "Cancel", which also
    /// leaves the screen, reported as [`CliError::ScreenDismissed`].
    pub async fn run(&self, view_model: &mut CityDetailsViewModel) -> Result<(), AppError> {
        let indicator = LoadingIndicator::spawn(
            view_model.subscribe(),
            is_loading,
            &loading_message(view_model.city_id()),
            self.show_spinner,
        );

        view_model.trigger(CityDetailsAction::OnAppear).await;
        indicator.finish().await;

        if let Some(message) = view_model.state().error_message.clone() {
            eprintln!("{}", self.display.render_alert(&message, CANCEL_BUTTON));
            view_model.trigger(CityDetailsAction::ErrorClosed).await;
            return Err(CliError::ScreenDismissed { message }.into());
        }

        println!("{}", self.render(view_model.state()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view_models::test_support::{ScriptedService, scenario_cities};
    use std::sync::Arc;

    fn display() -> TableDisplay {
        TableDisplay::new().with_colors(false).with_max_width(120)
    }

    #[tokio::test]
    async fn test_run_renders_city() {
        let service = Arc::new(ScriptedService::new(scenario_cities()));
        let mut vm = CityDetailsViewModel::new("2", service);
        let display = display();
        let view = CityDetailsView::new(&display, false);

        view.run(&mut vm).await.unwrap();

        let output = view.render(vm.state());
        assert!(output.contains("Berlin"));
        assert!(output.contains("Germany"));
        assert!(output.contains("100 km²"));
    }

    #[tokio::test]
    async fn test_run_not_found_dismisses_screen() {
        let service = Arc::new(ScriptedService::new(scenario_cities()));
        let mut vm = CityDetailsViewModel::new("99", service);
        let display = display();
        let view = CityDetailsView::new(&display, false);

        let result = view.run(&mut vm).await;

        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::ScreenDismissed { ref message })) if message == "City not found: 99"
        ));
        // The alert was closed on the way out
        assert!(!vm.state().error_presented());
    }

    #[test]
    fn test_loading_message_names_city() {
        let vm = CityDetailsViewModel::new("7", Arc::new(ScriptedService::new(scenario_cities())));
        assert_eq!(loading_message(vm.city_id()), "Loading city 7...");
    }

    #[test]
    fn test_render_while_loading() {
        let display = display();
        let view = CityDetailsView::new(&display, false);
        assert_eq!(view.render(&CityDetailsState::default()), LOADING_MESSAGE);
        assert!(is_loading(&CityDetailsState::default()));
    }
}
