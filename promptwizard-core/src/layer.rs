//! Layer trait and abstractions.
//!
//! Layers wrap a provider with cross-cutting concerns such as logging while
//! keeping the [`Provider`] interface intact.

use crate::error::AiError;
use crate::provider::Provider;
use crate::types::*;
use async_trait::async_trait;
use std::sync::Arc;

/// Layer trait for wrapping providers.
///
/// Each layer wraps an inner provider and returns a new provider with
/// enhanced capabilities.
pub trait Layer<P: Provider> {
    /// The type of the layered provider
    type LayeredProvider: Provider;

    /// Wrap the inner provider with this layer
    fn layer(&self, inner: P) -> Self::LayeredProvider;
}

/// Helper trait for layered providers.
///
/// Provides default forwarding implementations for provider methods.
/// Implementers only need to override the methods they want to intercept.
#[async_trait]
pub trait LayeredProvider: Sized + Provider {
    /// The inner provider type
    type Inner: Provider;

    /// Get a reference to the inner provider
    fn inner(&self) -> &Self::Inner;

    /// Default implementation for info - forwards to inner
    fn layered_info(&self) -> Arc<ProviderInfo> {
        self.inner().info()
    }

    /// Default implementation for generate_content - forwards to inner
    async fn layered_generate_content(
        &self,
        req: ContentRequest,
    ) -> Result<ContentResponse, AiError> {
        self.inner().generate_content(req).await
    }
}

/// Macro to implement Provider trait by forwarding to LayeredProvider methods.
#[macro_export]
macro_rules! impl_layered_provider {
    ($type:ty) => {
        #[async_trait::async_trait]
        impl $crate::provider::Provider for $type {
            fn info(&self) -> std::sync::Arc<$crate::types::ProviderInfo> {
                $crate::layer::LayeredProvider::layered_info(self)
            }

            async fn generate_content(
                &self,
                req: $crate::types::ContentRequest,
            ) -> Result<$crate::types::ContentResponse, $crate::error::AiError> {
                $crate::layer::LayeredProvider::layered_generate_content(self, req).await
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn info(&self) -> Arc<ProviderInfo> {
            ProviderInfo::new("echo", "Echo")
        }

        async fn generate_content(
            &self,
            req: ContentRequest,
        ) -> Result<ContentResponse, AiError> {
            Ok(ContentResponse::text(req.model, req.contents))
        }
    }

    #[derive(Debug)]
    struct ShoutingProvider {
        inner: EchoProvider,
    }

    #[async_trait]
    impl LayeredProvider for ShoutingProvider {
        type Inner = EchoProvider;

        fn inner(&self) -> &Self::Inner {
            &self.inner
        }

        async fn layered_generate_content(
            &self,
            req: ContentRequest,
        ) -> Result<ContentResponse, AiError> {
            let mut response = self.inner.generate_content(req).await?;
            response.text = response.text.map(|t| t.to_uppercase());
            Ok(response)
        }
    }

    crate::impl_layered_provider!(ShoutingProvider);

    struct ShoutingLayer;

    impl Layer<EchoProvider> for ShoutingLayer {
        type LayeredProvider = ShoutingProvider;

        fn layer(&self, inner: EchoProvider) -> Self::LayeredProvider {
            ShoutingProvider { inner }
        }
    }

    #[tokio::test]
    async fn test_layer_intercepts_and_forwards_info() {
        let provider = ShoutingLayer.layer(EchoProvider);
        assert_eq!(provider.info().id, "echo");

        let credential = Credential::new("k").unwrap();
        let response = provider
            .generate_content(ContentRequest::new("m", "hello", credential))
            .await
            .unwrap();
        assert_eq!(response.text.as_deref(), Some("HELLO"));
    }
}
