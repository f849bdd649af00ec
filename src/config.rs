//! Command-line configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Parser};

use crate::model::{CityId, CountryId, CountryOption};

/// Pick a country and a city, see its weather and which other city shares it
#[derive(Parser, Debug)]
#[command(name = "weather-match", version)]
#[command(group(
    ArgGroup::new("country_source")
        .required(true)
        .args(["countries", "country_options", "country_endpoint"])
))]
pub struct Args {
    /// Base URL of the weather server
    #[arg(long, env = "WEATHER_BASE_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// JSON file with the selectable countries: `[{"id": 1, "name": "US"}]`
    #[arg(long, env = "WEATHER_COUNTRIES", value_name = "FILE")]
    pub countries: Option<PathBuf>,

    /// Selectable country, repeat for each one
    #[arg(long = "country-option", value_name = "ID=NAME", value_parser = parse_country_option)]
    pub country_options: Vec<CountryOption>,

    /// Ask the server for the country list (`GET /api/v1/country`)
    #[arg(long)]
    pub country_endpoint: bool,

    /// Delay between match polls in milliseconds (minimum 1)
    #[arg(long, default_value = "5000", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval_ms: u64,

    /// Country id selected at startup (defaults to the first one)
    #[arg(long)]
    pub country: Option<u64>,

    /// City id selected when the first city list arrives
    #[arg(long)]
    pub city: Option<u64>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "WEATHER_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Where the country selector gets its options
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountrySource {
    File(PathBuf),
    Listed(Vec<CountryOption>),
    Endpoint,
}

impl Args {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn initial_country(&self) -> Option<CountryId> {
        self.country.map(CountryId)
    }

    pub fn pinned_city(&self) -> Option<CityId> {
        self.city.map(CityId)
    }

    /// Exactly one source is given; clap enforces it.
    pub fn country_source(&self) -> CountrySource {
        if let Some(path) = &self.countries {
            CountrySource::File(path.clone())
        } else if !self.country_options.is_empty() {
            CountrySource::Listed(self.country_options.clone())
        } else {
            CountrySource::Endpoint
        }
    }
}

fn parse_country_option(value: &str) -> Result<CountryOption, String> {
    let (id, name) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NAME, got `{value}`"))?;
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid country id `{id}`: {e}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("country {id} has an empty name"));
    }
    Ok(CountryOption {
        id: CountryId(id),
        name: name.to_string(),
    })
}
