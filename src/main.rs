mod action;
mod app;
mod cli;
mod components;
mod config;
mod error;
mod logging;

use color_eyre::eyre::Result;

use cli::Cli;
use config::ConfigManager;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();

    let config_manager = match &cli.config_dir {
        Some(dir) => ConfigManager::with_dir(dir.clone()),
        None => ConfigManager::new()?,
    };

    if cli.print_settings {
        let settings = config_manager.load_settings_required()?;
        println!("{}", toml::to_string_pretty(&settings)?);
        return Ok(());
    }

    let _log_guard = logging::init(&config_manager.log_file_path(), &cli.log_level)?;

    let mut app = app::App::with_cli(&cli, config_manager)?;
    app.run()?;

    Ok(())
}
