use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use weather_client::{Settings, Units, WeatherClient, validate};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-check", version, about = "OpenWeatherMap smoke checks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Probe whether the configured API key is accepted.
    CheckKey,

    /// Fetch current weather for a city and print the typed report.
    Current {
        /// City name, e.g. "London" or "São Paulo".
        city: String,

        /// Optional ISO country code, e.g. "UK".
        #[arg(long)]
        country: Option<String>,
    },

    /// Fetch current weather by coordinates and print selected fields.
    Coords {
        /// Latitude in degrees.
        lat: f64,

        /// Longitude in degrees.
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = Settings::load().context("Failed to load check settings")?;
        let units = settings.units;
        let client = WeatherClient::new(settings.client_config())
            .context("Failed to build weather client")?;

        match self.command {
            Command::CheckKey => {
                if client.validate_api_key().await {
                    println!("API key accepted");
                } else {
                    bail!(
                        "API key rejected (401) or the API is unreachable.\n\
                         Hint: set {} or put api_key in {}.",
                        weather_client::config::API_KEY_ENV,
                        Settings::config_file_path().display(),
                    );
                }
            }
            Command::Current { city, country } => {
                let report = client
                    .fetch_by_name_typed(&city, country.as_deref())
                    .await
                    .with_context(|| format!("Failed to fetch weather for {city}"))?;

                let degrees = match units {
                    Units::Metric => "°C",
                    Units::Imperial => "°F",
                };
                println!("{}: {}{degrees}", report.name, report.main.temp);
                println!("  feels like {}{degrees}", report.main.feels_like);
                println!("  humidity {}%", report.main.humidity);
            }
            Command::Coords { lat, lon } => {
                let response = client
                    .fetch_by_coordinates(lat, lon)
                    .await
                    .with_context(|| format!("Failed to fetch weather for ({lat}, {lon})"))?;

                validate::assert_coordinate_weather(&response)
                    .context("Coordinate response failed shape validation")?;

                let name = response.json_path("name").and_then(|v| v.as_str().map(str::to_owned));
                let temp = response.json_path("main.temp").and_then(|v| v.as_f64());

                println!("({lat}, {lon}) resolved to {}", name.as_deref().unwrap_or("<unnamed>"));
                if let Some(temp) = temp {
                    println!("  temperature {temp}");
                }
            }
        }

        Ok(())
    }
}
