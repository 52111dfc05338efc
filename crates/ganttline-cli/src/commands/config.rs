//! Configuration management commands.

use clap::Subcommand;
use ganttline_core::config::ChartConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration to disk
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = ChartConfig::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", ChartConfig::path()?.display());
        }
        ConfigAction::Init => {
            let config = ChartConfig::default();
            config.save()?;
            println!("Wrote {}", ChartConfig::path()?.display());
        }
    }
    Ok(())
}
