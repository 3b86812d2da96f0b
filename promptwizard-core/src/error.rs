//! Error types for PromptWizard operations.

/// Substrings that identify an authorization failure in a provider message.
const CREDENTIAL_REJECTION_MARKERS: [&str; 4] = [
    "API key",
    "API_KEY_INVALID",
    "PERMISSION_DENIED",
    "UNAUTHENTICATED",
];

/// Errors raised by providers and layers while talking to an AI service.
///
/// These never reach callers of the executor; they are classified into
/// [`EnhanceError`] first.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Provider-specific errors
    #[error("Provider error: {0}")]
    Provider(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The service rejected the credential
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Rate limit errors
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// The service refused the request as malformed (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl AiError {
    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create an authentication error
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a rate limit error
    pub fn rate_limit(msg: impl Into<String>) -> Self {
        Self::RateLimit(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Message without the variant prefix, as reported by the service
    pub fn message(&self) -> String {
        match self {
            AiError::Provider(m)
            | AiError::Authentication(m)
            | AiError::RateLimit(m)
            | AiError::InvalidRequest(m)
            | AiError::Other(m) => m.clone(),
            AiError::Http { message, .. } => message.clone(),
            AiError::Network(e) => e.to_string(),
            AiError::Serialization(e) => e.to_string(),
        }
    }

    /// Whether the service signalled an absent or invalid credential
    pub fn is_credential_rejection(&self) -> bool {
        match self {
            AiError::Authentication(_) => true,
            AiError::Http { status, .. } if *status == 401 || *status == 403 => true,
            _ => {
                let message = self.message();
                CREDENTIAL_REJECTION_MARKERS
                    .iter()
                    .any(|marker| message.contains(marker))
            }
        }
    }
}

impl From<String> for AiError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for AiError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// Classified outcome of a failed enhancement request.
///
/// This is the only error type returned by
/// [`RequestExecutor`](crate::runtime::RequestExecutor).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnhanceError {
    /// No credential was supplied and none is configured
    #[error("missing API credential")]
    MissingCredential,

    /// The service rejected the credential
    #[error("invalid API credential")]
    InvalidCredential,

    /// The service did not answer before the deadline
    #[error("{0}")]
    Timeout(String),

    /// The service answered with a payload that does not match the schema
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Any other failure, message passed through verbatim
    #[error("{0}")]
    Unknown(String),
}

impl EnhanceError {
    /// Whether the caller should ask the user for a (new) credential
    pub fn requires_credential(&self) -> bool {
        matches!(
            self,
            EnhanceError::MissingCredential | EnhanceError::InvalidCredential
        )
    }

    /// Whether offering a retry makes sense
    pub fn is_retryable(&self) -> bool {
        !self.requires_credential()
    }

    /// One-line guidance suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            EnhanceError::MissingCredential => {
                "An API Key is required. Please enter your Google Gemini API Key.".to_string()
            }
            EnhanceError::InvalidCredential => {
                "The provided API Key appears to be invalid or expired.".to_string()
            }
            EnhanceError::Timeout(message) => message.clone(),
            EnhanceError::Malformed(_) => {
                "The AI model returned an unexpected response. Please try again.".to_string()
            }
            EnhanceError::Unknown(message) if message.trim().is_empty() => {
                "Something went wrong. Please check your API key and try again.".to_string()
            }
            EnhanceError::Unknown(message) => message.clone(),
        }
    }
}

/// Invalid [`Settings`](crate::types::Settings) values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("quantity must be between 1 and 50, got {0}")]
    QuantityOutOfRange(u32),
}

/// Failures of the key-value storage collaborators
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejection_by_status() {
        assert!(AiError::http(401, "nope").is_credential_rejection());
        assert!(AiError::http(403, "forbidden").is_credential_rejection());
        assert!(!AiError::http(500, "boom").is_credential_rejection());
        assert!(!AiError::http(400, "Invalid JSON payload").is_credential_rejection());
    }

    #[test]
    fn test_credential_rejection_by_message() {
        let err = AiError::http(400, "API key not valid. Please pass a valid API key.");
        assert!(err.is_credential_rejection());

        let err = AiError::provider("status: PERMISSION_DENIED");
        assert!(err.is_credential_rejection());

        assert!(AiError::authentication("expired").is_credential_rejection());
        assert!(!AiError::other("quota exhausted").is_credential_rejection());
    }

    #[test]
    fn test_invalid_request_rejection_depends_on_message() {
        let err = AiError::invalid_request("Invalid JSON payload received.");
        assert_eq!(err.message(), "Invalid JSON payload received.");
        assert!(!err.is_credential_rejection());

        let err = AiError::invalid_request("API key not valid. Please pass a valid API key.");
        assert!(err.is_credential_rejection());
    }

    #[test]
    fn test_message_strips_prefix() {
        assert_eq!(AiError::http(500, "backend down").message(), "backend down");
        assert_eq!(AiError::other("x").to_string(), "Error: x");
    }

    #[test]
    fn test_enhance_error_guidance() {
        assert!(EnhanceError::MissingCredential.requires_credential());
        assert!(EnhanceError::InvalidCredential.requires_credential());
        assert!(!EnhanceError::Timeout("t".into()).requires_credential());
        assert!(EnhanceError::Malformed("m".into()).is_retryable());

        assert_eq!(
            EnhanceError::Unknown("quota exceeded".into()).user_message(),
            "quota exceeded"
        );
        assert!(EnhanceError::Unknown(String::new())
            .user_message()
            .starts_with("Something went wrong"));
    }
}
