use crate::core::{
    ConfigProvider, ItemOutcome, Pipeline, PokemonRow, Storage, TransformResult,
};
use crate::domain::model::{RawPokemon, SkipReason, SkippedItem};
use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use std::time::Duration;

/// The six base stats, in the order the API serves them.
const STAT_COUNT: usize = 6;

pub struct PokeApiPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> PokeApiPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    /// One GET against `{base_url}/{id}`. Any failure, HTTP or transport or
    /// an undecodable body, becomes a `Skipped` outcome rather than an error.
    async fn fetch_one(&self, id: u32) -> ItemOutcome {
        let url = format!("{}/{}", self.config.base_url().trim_end_matches('/'), id);
        tracing::debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request for pokemon {} failed: {}", id, e);
                return ItemOutcome::Skipped {
                    id,
                    reason: SkipReason::Transport(e.to_string()),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Pokemon {} returned HTTP {}", id, status);
            return ItemOutcome::Skipped {
                id,
                reason: SkipReason::HttpStatus(status.as_u16()),
            };
        }

        match response.json::<RawPokemon>().await {
            Ok(raw) => {
                tracing::info!("Fetched pokemon {}", id);
                ItemOutcome::Fetched(raw)
            }
            Err(e) => {
                tracing::warn!("Pokemon {} body could not be decoded: {}", id, e);
                ItemOutcome::Skipped {
                    id,
                    reason: SkipReason::Decode(e.to_string()),
                }
            }
        }
    }
}

/// Capitalizes like Python's `str.capitalize`: first letter uppercase,
/// remainder lowercase.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Flattens one raw document into an output row. Heights arrive in
/// decimetres and weights in hectograms; both divide by 10. Stats are read
/// positionally, relying on the API's fixed hp/attack/defense/
/// special-attack/special-defense/speed order; a shorter sequence is a skip.
fn flatten(raw: &RawPokemon) -> std::result::Result<PokemonRow, SkipReason> {
    if raw.stats.len() < STAT_COUNT {
        return Err(SkipReason::ShortStats(raw.stats.len()));
    }

    let type_name = |slot: usize| raw.types.get(slot).map(|t| t.type_info.name.clone());

    Ok(PokemonRow {
        id: raw.id,
        name: capitalize(&raw.name),
        height_m: raw.height as f64 / 10.0,
        weight_kg: raw.weight as f64 / 10.0,
        primary_type: type_name(0),
        secondary_type: type_name(1),
        hp: raw.stats[0].base_stat,
        attack: raw.stats[1].base_stat,
        defense: raw.stats[2].base_stat,
        special_attack: raw.stats[3].base_stat,
        special_defense: raw.stats[4].base_stat,
        speed: raw.stats[5].base_stat,
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PokeApiPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ItemOutcome>> {
        let count = self.config.pokemon_count();
        let delay = Duration::from_millis(self.config.request_delay_ms());
        let mut outcomes = Vec::with_capacity(count as usize);

        for id in 1..=count {
            outcomes.push(self.fetch_one(id).await);
            // Fixed pause after every ID, success or not, to bound the request rate.
            tokio::time::sleep(delay).await;
        }

        Ok(outcomes)
    }

    async fn transform(&self, items: Vec<ItemOutcome>) -> Result<TransformResult> {
        let mut result = TransformResult::default();

        for item in items {
            match item {
                ItemOutcome::Fetched(raw) => match flatten(&raw) {
                    Ok(row) => result.rows.push(row),
                    Err(reason) => result.skipped.push(SkippedItem { id: raw.id, reason }),
                },
                ItemOutcome::Skipped { id, reason } => {
                    result.skipped.push(SkippedItem { id, reason });
                }
            }
        }

        Ok(result)
    }

    async fn load(&self, rows: Vec<PokemonRow>) -> Result<Option<String>> {
        if rows.is_empty() {
            tracing::warn!("Nothing to save");
            return Ok(None);
        }

        // Header comes from the field names of PokemonRow, in declaration order.
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &rows {
            writer.serialize(row)?;
        }
        let data = writer.into_inner().map_err(|e| EtlError::ProcessingError {
            message: format!("CSV buffer flush failed: {}", e),
        })?;

        let file_name = self.config.output_file();
        self.storage.write_file(file_name, &data).await?;

        let output_path = format!("{}/{}", self.config.output_path(), file_name);
        tracing::info!("Saved {} records to {}", rows.len(), output_path);
        Ok(Some(output_path))
    }
}
