use anyhow::{Context, bail};
use citywx_core::{Config, WeatherApiProvider, WeatherProvider};
use clap::{Parser, Subcommand};

use crate::app;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citywx", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com access key.
    Configure,

    /// Look up current weather for a city and exit.
    Show {
        /// City name, free text.
        city: String,
    },
}

impl Cli {
    /// Without a subcommand the tool starts the interactive session.
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(&city).await,
            None => app::Session::start()?.run().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("WeatherAPI.com access key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let city = city.trim();
    if city.is_empty() {
        bail!("City name must not be empty");
    }

    let config = Config::load()?;
    let provider = WeatherApiProvider::new(config.require_api_key()?.to_owned());
    let report = provider.current(city).await?;

    print!("{}", app::render_report(&report, config.default_unit));
    Ok(())
}
