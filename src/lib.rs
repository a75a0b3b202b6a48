pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::PokeApiPipeline};
pub use domain::model::{ItemOutcome, PokemonRow, RawPokemon, SkipReason};
pub use utils::error::{EtlError, Result};
