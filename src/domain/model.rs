use serde::{Deserialize, Serialize};

/// A named sub-resource as the API nests it: `{"name": "...", "url": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: i64,
}

/// The raw API document for one Pokémon, reduced to the fields the pipeline
/// actually reads. Anything else in the (large) response body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

/// The flat output row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonRow {
    pub id: u32,
    pub name: String,
    pub height_m: f64,
    pub weight_kg: f64,
    pub primary_type: Option<String>,
    pub secondary_type: Option<String>,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub special_attack: i64,
    pub special_defense: i64,
    pub speed: i64,
}

/// Why a given ID produced no row.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Transport(String),
    HttpStatus(u16),
    Decode(String),
    /// The stats sequence had fewer than the six entries the schema requires.
    ShortStats(usize),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Transport(detail) => write!(f, "transport error: {}", detail),
            SkipReason::HttpStatus(status) => write!(f, "HTTP status {}", status),
            SkipReason::Decode(detail) => write!(f, "undecodable body: {}", detail),
            SkipReason::ShortStats(got) => {
                write!(f, "stats sequence too short: expected 6, got {}", got)
            }
        }
    }
}

/// Per-ID result threaded through the pipeline. A skip is data, not an
/// error: it never aborts the run.
#[derive(Debug, Clone)]
pub enum ItemOutcome {
    Fetched(RawPokemon),
    Skipped { id: u32, reason: SkipReason },
}

#[derive(Debug, Clone)]
pub struct SkippedItem {
    pub id: u32,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub rows: Vec<PokemonRow>,
    pub skipped: Vec<SkippedItem>,
}
