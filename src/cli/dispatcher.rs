use crate::cli::browse::Browser;
use crate::cli::cities_view::CitiesView;
use crate::cli::city_details_view::CityDetailsView;
use crate::cli::main_types::{Commands, ConfigCommands, RuntimeOverrides};
use crate::core::services::{CitiesService, MockCitiesService};
use crate::core::view_models::{CitiesViewAction, CitiesViewModel, CityDetailsViewModel, ViewModel};
use crate::display::TableDisplay;
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::validation::{validate_city_id, validate_country};
use atty::Stream;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub struct Dispatcher {
    /// Configuration as stored on disk
    config: Config,
    config_path: PathBuf,
    overrides: RuntimeOverrides,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: PathBuf, overrides: RuntimeOverrides) -> Self {
        Self {
            config,
            config_path,
            overrides,
        }
    }

    /// File configuration with command-line overrides applied
    pub fn effective_config(&self) -> Config {
        self.overrides.apply(self.config.clone())
    }

    /// Build the cities service. A document that fails to load is fatal.
    pub fn build_service(&self) -> Result<Arc<dyn CitiesService>, AppError> {
        let config = self.effective_config();
        let options = config.mock_options();

        let service = match &config.data_path {
            Some(path) => {
                info!(path = %path.display(), "Loading cities document");
                MockCitiesService::from_path(path, options)?
            }
            None => MockCitiesService::new(options)?,
        };
        debug!(cities = service.len(), options = ?service.options(), "Cities service ready");

        Ok(Arc::new(service))
    }

    fn table_display(&self) -> TableDisplay {
        let colors = self.effective_config().colors && atty::is(Stream::Stdout);
        TableDisplay::new().with_colors(colors)
    }

    fn show_spinner() -> bool {
        atty::is(Stream::Stderr)
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => self.handle_config_command(command),
            Commands::List { country } => self.handle_list(country).await,
            Commands::Countries => self.handle_countries().await,
            Commands::Show { id } => self.handle_show(id).await,
            Commands::Browse => self.handle_browse().await,
        }
    }

    async fn handle_list(&self, country: Option<String>) -> Result<(), AppError> {
        debug!(?country, "Attempting list command");
        if let Some(country) = &country {
            validate_country(country)?;
        }
        let service = self.build_service()?;
        let display = self.table_display();
        let view = CitiesView::new(&display, Self::show_spinner());

        let mut view_model = CitiesViewModel::new(service);
        view.run(&mut view_model, country, self.effective_config().max_reloads)
            .await
    }

    async fn handle_countries(&self) -> Result<(), AppError> {
        debug!("Attempting countries command");
        let service = self.build_service()?;
        let display = self.table_display();
        let view = CitiesView::new(&display, Self::show_spinner());

        let mut view_model = CitiesViewModel::new(service);
        view.load(
            &mut view_model,
            CitiesViewAction::OnAppear,
            self.effective_config().max_reloads,
        )
        .await?;

        println!(
            "{}",
            display.render_country_keys(&view_model.state().country_filter_keys)
        );
        Ok(())
    }

    async fn handle_show(&self, id: String) -> Result<(), AppError> {
        debug!(%id, "Attempting show command");
        validate_city_id(&id)?;
        let service = self.build_service()?;
        let display = self.table_display();
        let view = CityDetailsView::new(&display, Self::show_spinner());

        let mut view_model = CityDetailsViewModel::new(id, service);
        view.run(&mut view_model).await
    }

    async fn handle_browse(&self) -> Result<(), AppError> {
        debug!("Attempting browse command");
        let service = self.build_service()?;
        let display = self.table_display();
        let browser = Browser::new(&display, service.clone(), Self::show_spinner());

        let mut view_model = CitiesViewModel::new(service);
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        browser.run(&mut view_model, stdin).await
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                debug!("Attempting config show command");
                println!("{}", self.render_config());
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                debug!(%key, %value, "Attempting config set command");
                let mut config = self.config.clone();
                config.set(&key, &value)?;
                config.save(Some(self.config_path.clone()))?;
                println!("✅ Set {} = {}", key, value);
                Ok(())
            }
        }
    }

    fn render_config(&self) -> String {
        let config = &self.config;
        let data = config
            .data_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(bundled)".to_string());

        format!(
            "Current Configuration:\n\
             =====================\n\
             Config file:   {}\n\
             Data:          {}\n\
             Random fail:   {}\n\
             Delay:         {} ms\n\
             Max reloads:   {}\n\
             Colors:        {}",
            self.config_path.display(),
            data,
            if config.randomly_fail { "enabled" } else { "disabled" },
            config.delay_ms,
            config.max_reloads,
            if config.colors { "enabled" } else { "disabled" },
        )
    }
}
