//! CLI argument definitions shared by the fixture commands.

use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use trade_config::{FixtureConfig, TradeConfig};
use trade_entities::Tz;

/// Arguments controlling how the generator is built.
#[derive(Args, Clone, Debug)]
pub struct GeneratorArgs {
    /// Number of values to generate
    #[arg(long, short = 'n', default_value = "10")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data).
    /// Without a seed the generator is seeded from the clock and process ID.
    #[arg(long, env = "DAYTRADER_FIXTURES_SEED")]
    pub seed: Option<u64>,

    /// Path to a generator settings YAML file
    #[arg(long, short = 'c', value_name = "PATH", env = "DAYTRADER_FIXTURES_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GeneratorArgs {
    /// Load the settings, falling back to the defaults when no file is given.
    pub fn load_config(&self) -> anyhow::Result<FixtureConfig> {
        match &self.config {
            Some(path) => FixtureConfig::from_file(path)
                .with_context(|| format!("Failed to load generator settings from {path:?}")),
            None => Ok(FixtureConfig::default()),
        }
    }

    /// Build the generator described by these arguments.
    pub fn build_generator(&self) -> anyhow::Result<TradeConfig> {
        let config = self.load_config()?;
        let generator = match self.seed {
            Some(seed) => TradeConfig::with_seed(config, seed),
            None => TradeConfig::new(config, u64::from(std::process::id())),
        };
        Ok(generator)
    }
}

/// Arguments controlling how records are printed.
#[derive(Args, Clone, Debug)]
pub struct RecordArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// IANA time zone used to print timestamps (e.g. "Europe/London")
    #[arg(long, default_value = "UTC", value_parser = parse_zone)]
    pub zone: Tz,
}

/// Output formats for records.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Label-aligned plain text
    Text,
    /// HTML fragment
    Html,
    /// One JSON object per line
    Json,
}

/// Parse an IANA time zone name.
pub fn parse_zone(value: &str) -> Result<Tz, String> {
    value
        .parse::<Tz>()
        .map_err(|e| format!("Unknown time zone '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zone() {
        assert_eq!(parse_zone("Europe/London"), Ok(Tz::Europe__London));
        assert_eq!(parse_zone("UTC"), Ok(Tz::UTC));
        assert!(parse_zone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_build_generator_with_seed_is_deterministic() {
        let args = GeneratorArgs {
            count: 1,
            seed: Some(42),
            config: None,
        };

        let mut a = args.build_generator().unwrap();
        let mut b = args.build_generator().unwrap();
        assert_eq!(a.rnd_symbols(), b.rnd_symbols());
    }

    #[test]
    fn test_missing_config_file_has_context() {
        let args = GeneratorArgs {
            count: 1,
            seed: Some(1),
            config: Some(PathBuf::from("/nonexistent/fixtures.yaml")),
        };

        let err = args.build_generator().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load generator settings"));
    }
}
