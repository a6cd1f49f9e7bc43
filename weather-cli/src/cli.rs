use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use tracing::info;
use weather_core::{Config, Units, WeatherClient, format};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "A CLI tool for fetching weather information")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Unit system for both the request and the output.
    #[arg(short, long, global = true, value_parser = parse_units)]
    pub units: Option<Units>,

    /// Log requests to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store API key, units and default location.
    Configure,

    /// Get current weather for a location.
    Current {
        /// Location name, e.g. "London" or "Paris,FR".
        location: String,
    },

    /// Compare weather for multiple locations.
    Compare {
        #[arg(required = true)]
        locations: Vec<String>,
    },

    /// Get detailed weather information.
    Detailed {
        location: String,
    },

    /// Get weather for the configured default location.
    #[command(name = "default")]
    DefaultLocation,
}

fn parse_units(value: &str) -> Result<Units, String> {
    Units::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let units = self.units;

        match self.command.unwrap_or(Command::DefaultLocation) {
            Command::Configure => configure()?,
            Command::Current { location } => {
                let (_, client) = load_client(units)?;
                let record = client.fetch_one(&location).await?;
                println!("\n🌤️  Current Weather\n");
                println!("{}", format::create_weather_summary(&record, client.units(), Utc::now()));
            }
            Command::Compare { locations } => {
                let (_, client) = load_client(units)?;
                let records = client.fetch_many(&locations).await?;
                println!("\n🌍 Weather Comparison\n");
                println!("{}", format::create_table_format(&records, client.units()));
            }
            Command::Detailed { location } => {
                let (_, client) = load_client(units)?;
                let record = client.fetch_one(&location).await?;
                println!("\n📊 Detailed Weather for {location}\n");
                println!("{}", format::create_detailed_report(&record, client.units()));
            }
            Command::DefaultLocation => {
                let (config, client) = load_client(units)?;
                let location = config.default_location.as_str();
                let record = client.fetch_one(location).await?;
                println!("\n🌤️  Weather for {location}\n");
                println!("{}", format::create_weather_summary(&record, client.units(), Utc::now()));
            }
        }

        Ok(())
    }
}

/// Stored config plus environment, with `--units` applied on top.
fn load_client(units: Option<Units>) -> anyhow::Result<(Config, WeatherClient)> {
    let mut config = Config::load()?;
    if let Some(units) = units {
        config.units = units;
    }
    if !config.has_api_key() {
        info!("no API key configured, using the provider's demo key");
    }

    let client = WeatherClient::new(&config);
    Ok((config, client))
}

/// Interactive configuration. Reads the stored file only, so a key coming
/// from the environment is never written to disk.
fn configure() -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("API key (leave empty to keep the current one):")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key);
    }

    let units = Units::all().to_vec();
    let cursor = units.iter().position(|u| *u == config.units).unwrap_or(0);
    config.units = Select::new("Units:", units)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read units")?;

    config.default_location = Text::new("Default location:")
        .with_default(&config.default_location)
        .prompt()
        .context("Failed to read default location")?;

    config.save_to(&path)?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_default_location() {
        let cli = Cli::try_parse_from(["weather"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.units, None);
    }

    #[test]
    fn units_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["weather", "current", "Paris", "-u", "imperial"]).unwrap();
        assert_eq!(cli.units, Some(Units::Imperial));
        assert!(matches!(cli.command, Some(Command::Current { ref location }) if location == "Paris"));
    }

    #[test]
    fn compare_keeps_location_order() {
        let cli = Cli::try_parse_from(["weather", "compare", "Oslo", "Rome", "Lima"]).unwrap();
        match cli.command {
            Some(Command::Compare { locations }) => assert_eq!(locations, ["Oslo", "Rome", "Lima"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn compare_requires_a_location() {
        assert!(Cli::try_parse_from(["weather", "compare"]).is_err());
    }

    #[test]
    fn invalid_units_are_rejected() {
        let err = Cli::try_parse_from(["weather", "current", "Paris", "--units", "kelvin"]).unwrap_err();
        assert!(err.to_string().contains("Unknown units"));
    }
}
