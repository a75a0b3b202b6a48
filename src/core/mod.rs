pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{
    ItemOutcome, PokemonRow, RawPokemon, SkipReason, SkippedItem, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
