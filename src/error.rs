//! Error types for chatquiz.
//!
//! Every fallible operation in the crate returns [`Result`].  The `Display`
//! strings of the client-facing variants are the inline messages the chat
//! shows in place of a bot reply, so callers can print an error directly.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for chatquiz.
#[derive(Clone, Debug)]
pub enum Error {
    /// The API endpoint or key is missing or unusable.
    Configuration {
        /// Human-readable error message.
        message: String,
    },

    /// The request never produced a response.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// HTTP client error outside of the request itself.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The remote API answered with a non-success status.
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body.
        body: String,
    },

    /// A response could not be decoded into the expected shape.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The configured endpoint is not a valid URL.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },

    /// The summarization model is unavailable or failed.
    Summarization {
        /// Human-readable error message.
        message: String,
    },

    /// A synonym database could not be loaded.
    Thesaurus {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new API error from a status code and the raw body.
    pub fn api(status_code: u16, body: impl Into<String>) -> Self {
        Error::Api {
            status_code,
            body: body.into(),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Creates a new summarization error.
    pub fn summarization(message: impl Into<String>) -> Self {
        Error::Summarization {
            message: message.into(),
        }
    }

    /// Creates a new thesaurus error.
    pub fn thesaurus(message: impl Into<String>) -> Self {
        Error::Thesaurus {
            message: message.into(),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Returns true if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    /// Returns true if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if this error is a non-success API response.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns true if this error came from decoding a response.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization { .. })
    }

    /// Returns true if this error came from the summarizer.
    pub fn is_summarization(&self) -> bool {
        matches!(self, Error::Summarization { .. })
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => write!(f, "Error: {message}"),
            Error::Connection { message, .. } => {
                write!(f, "Error: Failed to connect to API - {message}")
            }
            Error::HttpClient { message, .. } => write!(f, "Error: HTTP client - {message}"),
            Error::Api { status_code, body } => write!(f, "Error: {status_code} - {body}"),
            Error::Serialization { message, .. } => {
                write!(f, "Error: Failed to parse response - {message}")
            }
            Error::Url { message, .. } => write!(f, "Error: Invalid API URL - {message}"),
            Error::Summarization { message } => write!(f, "Summarization error: {message}"),
            Error::Thesaurus { message } => write!(f, "Thesaurus error: {message}"),
            Error::Io { message, .. } => write!(f, "I/O error: {message}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(err.to_string(), Some(Box::new(err)))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::thesaurus(format!("YAML error: {err}"))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(err.to_string(), Some(err))
    }
}

/// A specialized Result type for chatquiz operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inline_messages() {
        assert_eq!(
            Error::configuration("API URL or API key not set.").to_string(),
            "Error: API URL or API key not set."
        );
        assert_eq!(
            Error::api(403, "{\"error\":\"denied\"}").to_string(),
            "Error: 403 - {\"error\":\"denied\"}"
        );
        assert_eq!(
            Error::connection("dns failure", None).to_string(),
            "Error: Failed to connect to API - dns failure"
        );
        assert_eq!(
            Error::serialization("no candidates", None).to_string(),
            "Error: Failed to parse response - no candidates"
        );
    }

    #[test]
    fn predicates_and_status() {
        let err = Error::api(500, "boom");
        assert!(err.is_api());
        assert_eq!(err.status_code(), Some(500));
        assert!(!err.is_configuration());
        assert_eq!(Error::summarization("x").status_code(), None);
        assert!(Error::summarization("x").is_summarization());
    }

    #[test]
    fn json_errors_convert_to_serialization() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
        assert!(error::Error::source(&err).is_some());
    }
}
