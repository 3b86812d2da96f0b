//! Provider trait and core abstractions.

use crate::error::AiError;
use crate::types::*;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Core provider trait for generative AI services.
///
/// A provider performs exactly one remote call per `generate_content`
/// invocation: given user content, a system instruction and a response
/// format, it returns the raw response text or fails. Parsing the payload and
/// classifying failures is the job of the
/// [`RequestExecutor`](crate::runtime::RequestExecutor).
#[async_trait]
pub trait Provider: Send + Sync + Debug + 'static {
    /// Get provider information
    fn info(&self) -> Arc<ProviderInfo>;

    /// Single-turn content generation
    async fn generate_content(&self, req: ContentRequest) -> Result<ContentResponse, AiError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Arc<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        (**self).info()
    }

    async fn generate_content(&self, req: ContentRequest) -> Result<ContentResponse, AiError> {
        (**self).generate_content(req).await
    }
}
