pub mod mock;
pub mod openai;

use async_trait::async_trait;

use crate::error::ServiceError;

/// The borrowed wordsmith. Takes a prompt, returns generated text.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Submit a single-turn prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError>;
}
