pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;

/// Command-line configuration. The defaults reproduce the classic
/// first-151 dataset against the public PokeAPI.
#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex-etl")]
#[command(about = "Fetch Pokémon from the PokeAPI and flatten them into a CSV dataset")]
pub struct CliConfig {
    #[arg(long, default_value = "https://pokeapi.co/api/v2/pokemon")]
    pub base_url: String,

    /// How many Pokémon to fetch, starting from ID 1.
    #[arg(long, default_value = "151")]
    pub count: u32,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "pokemon_dataset.csv")]
    pub output_file: String,

    /// Pause between requests, in milliseconds.
    #[arg(long, default_value = "100")]
    pub delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn pokemon_count(&self) -> u32 {
        self.count
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn request_delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("output_file", &self.output_file)?;
        validate_range("count", self.count, 0, 10_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig::parse_from(["pokedex-etl"])
    }

    #[test]
    fn test_defaults_match_the_classic_dataset() {
        let config = default_config();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2/pokemon");
        assert_eq!(config.count, 151);
        assert_eq!(config.output_file, "pokemon_dataset.csv");
        assert_eq!(config.delay_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_base_url_fails_validation() {
        let mut config = default_config();
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_count_is_allowed() {
        let mut config = default_config();
        config.count = 0;
        assert!(config.validate().is_ok());
    }
}
