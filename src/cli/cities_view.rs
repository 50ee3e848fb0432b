//! Terminal view of the cities list screen.

use crate::cli::loading::LoadingIndicator;
use crate::core::view_models::{CitiesViewAction, CitiesViewModel, CitiesViewState, ViewModel};
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};

const LOADING_MESSAGE: &str = "Loading cities...";
pub const RELOAD_BUTTON: &str = "Reload";

fn is_loading(state: &CitiesViewState) -> bool {
    state.interactions_disabled() && !state.error_presented()
}

pub struct CitiesView<'a> {
    display: &'a TableDisplay,
    show_spinner: bool,
}

impl<'a> CitiesView<'a> {
    pub fn new(display: &'a TableDisplay, show_spinner: bool) -> Self {
        Self {
            display,
            show_spinner,
        }
    }

    /// Dispatch one action, showing the spinner while the list is loading
    pub async fn present(&self, view_model: &mut CitiesViewModel, action: CitiesViewAction) {
        let indicator = LoadingIndicator::spawn(
            view_model.subscribe(),
            is_loading,
            LOADING_MESSAGE,
            self.show_spinner,
        );
        view_model.trigger(action).await;
        indicator.finish().await;
    }

    /// Dispatch `action` and keep pressing the alert's "Reload" button, at most
    /// `max_reloads` times, until the list loads.
    pub async fn load(
        &self,
        view_model: &mut CitiesViewModel,
        action: CitiesViewAction,
        max_reloads: u32,
    ) -> Result<(), AppError> {
        self.present(view_model, action).await;

        let mut reloads = 0;
        while let Some(message) = view_model.state().error_message.clone() {
            eprintln!("{}", self.display.render_alert(&message, RELOAD_BUTTON));
            if reloads >= max_reloads {
                return Err(CliError::ScreenDismissed { message }.into());
            }
            reloads += 1;
            self.present(view_model, CitiesViewAction::ErrorClosed).await;
        }

        Ok(())
    }

    /// Render the whole screen for the given state
    pub fn render(&self, state: &CitiesViewState) -> String {
        let mut output = self.display.render_country_filter(
            &state.country_filter_keys,
            state.selected_country_filter.as_deref(),
        );
        output.push('\n');

        match &state.cities {
            Some(cities) => output.push_str(&self.display.render_city_list(cities)),
            None => output.push_str(LOADING_MESSAGE),
        }

        if let Some(message) = &state.error_message {
            output.push('\n');
            output.push_str(&self.display.render_alert(message, RELOAD_BUTTON));
        }

        output
    }

    /// Run the list screen once and print it
    pub async fn run(
        &self,
        view_model: &mut CitiesViewModel,
        country: Option<String>,
        max_reloads: u32,
    ) -> Result<(), AppError> {
        let action = match country {
            Some(country) => CitiesViewAction::SelectCountryFilter(Some(country)),
            None => CitiesViewAction::OnAppear,
        };

        self.load(view_model, action, max_reloads).await?;
        println!("{}", self.render(view_model.state()));
        Ok(())
    }
}
