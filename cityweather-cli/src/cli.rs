use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::Password;

use cityweather_core::{Config, WeatherRequest, WeatherService, WeatherTool, config::API_KEY_ENV};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Weather by city name or coordinates")]
pub struct Cli {
    /// Log lookups to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show weather for a location.
    Show {
        /// City name (e.g. "北京", "Shanghai") or "lat,lon".
        location: String,

        /// Forecast steps to show, 1-12; 0 or absent means current weather.
        #[arg(long, default_value_t = 0)]
        hours: i64,
    },

    /// Call the get_weather tool with JSON arguments, e.g. '{"location":"北京","hours":3}'.
    Invoke {
        arguments: String,
    },

    /// Print the get_weather tool definition as JSON.
    Schema,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, hours } => {
                let request = WeatherRequest::new(location, hours);
                let text = tool()?.handle(&request).await?;
                println!("{text}");
                Ok(())
            }
            Command::Invoke { arguments } => {
                let arguments: serde_json::Value =
                    serde_json::from_str(&arguments).context("Tool arguments must be JSON")?;
                let text = tool()?.call(arguments).await?;
                println!("{text}");
                Ok(())
            }
            Command::Schema => {
                println!("{}", serde_json::to_string_pretty(&WeatherTool::definition())?);
                Ok(())
            }
        }
    }
}

fn tool() -> anyhow::Result<WeatherTool> {
    let config = Config::load()?;
    let settings = config.provider_settings()?;
    let service = WeatherService::from_settings(&settings)?;
    Ok(WeatherTool::new(service))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    if std::env::var_os(API_KEY_ENV).is_some() {
        println!("Note: {API_KEY_ENV} is set and takes precedence over the saved key.");
    }
    Ok(())
}
