//! Credential resolution.

use crate::error::EnhanceError;
use crate::types::Credential;

/// Environment variables consulted for the process-level credential, in order
pub const CREDENTIAL_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Process-level fallback credential.
///
/// A caller-supplied credential always wins; this source is only consulted
/// when the caller has none.
#[derive(Debug, Clone, Default)]
pub struct CredentialSource {
    fallback: Option<Credential>,
}

impl CredentialSource {
    /// Read the fallback from the environment (`API_KEY`, then `GEMINI_API_KEY`)
    pub fn from_env() -> Self {
        let fallback = CREDENTIAL_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(Credential::new);

        if fallback.is_some() {
            tracing::debug!("process-level credential configured from environment");
        }

        Self { fallback }
    }

    /// Use a fixed fallback credential
    pub fn fixed(value: impl AsRef<str>) -> Self {
        Self {
            fallback: Credential::new(value),
        }
    }

    /// No fallback credential
    pub fn none() -> Self {
        Self { fallback: None }
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Pick the credential for one request.
    ///
    /// Blank caller credentials count as absent.
    pub fn resolve(&self, supplied: Option<&str>) -> Result<Credential, EnhanceError> {
        supplied
            .and_then(Credential::new)
            .or_else(|| self.fallback.clone())
            .ok_or(EnhanceError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_credential_wins() {
        let source = CredentialSource::fixed("process-key");
        let credential = source.resolve(Some("user-key")).unwrap();
        assert_eq!(credential.expose(), "user-key");
    }

    #[test]
    fn test_blank_supplied_falls_back() {
        let source = CredentialSource::fixed("process-key");
        assert_eq!(source.resolve(Some("  ")).unwrap().expose(), "process-key");
        assert_eq!(source.resolve(None).unwrap().expose(), "process-key");
    }

    #[test]
    fn test_missing_credential() {
        let source = CredentialSource::none();
        assert!(!source.has_fallback());
        assert_eq!(source.resolve(None), Err(EnhanceError::MissingCredential));
        assert_eq!(source.resolve(Some("")), Err(EnhanceError::MissingCredential));
    }

    #[test]
    fn test_blank_fixed_fallback_is_absent() {
        assert!(!CredentialSource::fixed("   ").has_fallback());
    }
}
