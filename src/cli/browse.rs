//! Interactive, line-oriented navigation between the list and detail screens.

use crate::cli::cities_view::CitiesView;
use crate::cli::city_details_view::CityDetailsView;
use crate::core::services::traits::CitiesService;
use crate::core::view_models::{CitiesViewAction, CitiesViewModel, CityDetailsViewModel, ViewModel};
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};
use crate::utils::validation::validate_city_id;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const HELP: &str = "\
Commands:
  filter <country>   show only cities of <country>
  filter all         show every country
  open <id>          show a city's details
  list               show the list again
  reload             dismiss the error alert / reload the list (also: empty line)
  help               show this help
  quit               leave";

const INTERACTIONS_DISABLED: &str = "The list is not loaded yet. Use 'reload' first.";

/// A user gesture on the list screen
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    Filter(Option<String>),
    Open(String),
    List,
    Reload,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match (command.to_ascii_lowercase().as_str(), argument) {
        ("" | "r" | "reload", _) => BrowseCommand::Reload,
        ("filter" | "f", "") => BrowseCommand::Unknown(line.to_string()),
        ("filter" | "f", argument) if argument.eq_ignore_ascii_case("all") => {
            BrowseCommand::Filter(None)
        }
        ("filter" | "f", argument) => BrowseCommand::Filter(Some(argument.to_string())),
        ("open" | "o", "") => BrowseCommand::Unknown(line.to_string()),
        ("open" | "o", argument) => BrowseCommand::Open(argument.to_string()),
        ("list" | "l", _) => BrowseCommand::List,
        ("help" | "h" | "?", _) => BrowseCommand::Help,
        ("quit" | "q" | "exit", _) => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(line.to_string()),
    }
}

pub struct Browser<'a> {
    display: &'a TableDisplay,
    cities_service: Arc<dyn CitiesService>,
    show_spinner: bool,
}

impl<'a> Browser<'a> {
    pub fn new(
        display: &'a TableDisplay,
        cities_service: Arc<dyn CitiesService>,
        show_spinner: bool,
    ) -> Self {
        Self {
            display,
            cities_service,
            show_spinner,
        }
    }

    pub async fn run<R>(&self, view_model: &mut CitiesViewModel, input: R) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
    {
        let list_view = CitiesView::new(self.display, self.show_spinner);

        list_view
            .present(view_model, CitiesViewAction::OnAppear)
            .await;
        println!("{}", list_view.render(view_model.state()));
        println!("{}", HELP);

        let mut lines = input.lines();
        loop {
            print!("> ");
            let _ = std::io::stdout().flush();

            let Some(line) = lines.next_line().await.map_err(CliError::Input)? else {
                break;
            };

            let command = parse_command(&line);
            debug!(?command, "Browse command");
            match command {
                BrowseCommand::Quit => break,
                BrowseCommand::Help => println!("{}", HELP),
                BrowseCommand::List => println!("{}", list_view.render(view_model.state())),
                BrowseCommand::Reload => {
                    let state = view_model.state();
                    let action = if state.error_presented() {
                        CitiesViewAction::ErrorClosed
                    } else {
                        // Keep the picker and the list in agreement
                        CitiesViewAction::SelectCountryFilter(state.selected_country_filter.clone())
                    };
                    list_view.present(view_model, action).await;
                    println!("{}", list_view.render(view_model.state()));
                }
                BrowseCommand::Filter(country) => {
                    if view_model.state().interactions_disabled() {
                        println!("{}", INTERACTIONS_DISABLED);
                        continue;
                    }
                    list_view
                        .present(view_model, CitiesViewAction::SelectCountryFilter(country))
                        .await;
                    println!("{}", list_view.render(view_model.state()));
                }
                BrowseCommand::Open(id) => {
                    if view_model.state().interactions_disabled() {
                        println!("{}", INTERACTIONS_DISABLED);
                        continue;
                    }
                    if let Err(error) = validate_city_id(&id) {
                        println!("{}", error.display_friendly());
                        continue;
                    }
                    self.open(&id).await?;
                }
                BrowseCommand::Unknown(input) => {
                    println!("Unknown command '{}'. Type 'help' for commands.", input);
                }
            }
        }

        Ok(())
    }

    /// Push a detail screen; dismissing its alert just returns to the list
    async fn open(&self, id: &str) -> Result<(), AppError> {
        let mut details = CityDetailsViewModel::new(id, self.cities_service.clone());
        let view = CityDetailsView::new(self.display, self.show_spinner);

        match view.run(&mut details).await {
            Ok(()) | Err(AppError::Cli(CliError::ScreenDismissed { .. })) => Ok(()),
            Err(error) => Err(error),
        }
    }
}
