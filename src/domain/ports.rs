use crate::domain::model::{ItemOutcome, PokemonRow, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn pokemon_count(&self) -> u32;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn request_delay_ms(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ItemOutcome>>;
    async fn transform(&self, items: Vec<ItemOutcome>) -> Result<TransformResult>;
    /// Returns the output path, or `None` when there was nothing to write.
    async fn load(&self, rows: Vec<PokemonRow>) -> Result<Option<String>>;
}
