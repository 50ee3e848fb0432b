use city_browser::cli::dispatcher::Dispatcher;
use city_browser::cli::main_types::Cli;
use city_browser::storage::config::Config;
use city_browser::utils::logging::init_logging;
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load Config
    let config_path = match Config::file_path_in(cli.config_dir.as_deref()) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Error locating config: {}", err);
            std::process::exit(1);
        }
    };

    let config = match Config::load(Some(config_path.clone())) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };
    debug!(path = %config_path.display(), ?config, "Configuration loaded");

    let dispatcher = Dispatcher::new(config, config_path, cli.overrides);

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} {}", e.severity().emoji(), e.display_friendly());
        std::process::exit(1);
    }

    Ok(())
}
