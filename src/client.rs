use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client as ReqwestClient, StatusCode, header};
use url::Url;

use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::text::truncate_chars;

/// Environment variable holding the `generateContent` endpoint.
pub const API_URL_VAR: &str = "API_URL";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Replies are cut to this many characters.
pub const MAX_REPLY_CHARS: usize = 500;

const MISSING_CONFIG: &str = "API URL or API key not set.";

/// Endpoint and key for the remote generative API.
///
/// Both are optional so that a missing variable surfaces on each call rather
/// than at startup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Full URL of the `generateContent` method.
    pub api_url: Option<String>,
    /// API key, sent as the `key` query parameter.
    pub api_key: Option<String>,
}

impl GeminiConfig {
    /// Create a configuration from explicit values.
    pub fn new(api_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url.filter(|s| !s.is_empty()),
            api_key: api_key.filter(|s| !s.is_empty()),
        }
    }

    /// Read `API_URL` and `API_KEY` from the environment.  Empty values count
    /// as unset.
    pub fn from_env() -> Self {
        Self::new(env::var(API_URL_VAR).ok(), env::var(API_KEY_VAR).ok())
    }

    /// Returns true when both the endpoint and the key are present.
    pub fn is_complete(&self) -> bool {
        self.api_url.is_some() && self.api_key.is_some()
    }

    /// The request URL, `<api_url>?key=<api_key>`.
    pub fn endpoint(&self) -> Result<Url> {
        let (Some(api_url), Some(api_key)) = (self.api_url.as_deref(), self.api_key.as_deref())
        else {
            return Err(Error::configuration(MISSING_CONFIG));
        };
        let mut url = Url::parse(api_url)?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Something that answers a user utterance with a bot reply.
///
/// The chat session talks to this trait so tests can substitute a fake for
/// the network client.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Produce the reply to `input`.
    async fn reply(&self, input: &str) -> Result<String>;
}

/// Client for the generative language API.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: ReqwestClient,
    timeout: Option<Duration>,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl GeminiClient {
    /// Create a new client.  No request timeout is set beyond reqwest's
    /// defaults.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        Self::with_options(config, None)
    }

    /// Create a new client with an explicit request timeout.
    pub fn with_options(config: GeminiConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            Error::http_client(
                format!("Failed to build HTTP client: {}", e),
                Some(Box::new(e)),
            )
        })?;

        Ok(Self {
            config,
            client,
            timeout,
            logger: None,
        })
    }

    /// Attach a logger that observes every call.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send `input` as a single-turn prompt and return the first candidate's
    /// text, cut to [`MAX_REPLY_CHARS`] characters.
    ///
    /// Missing configuration short-circuits before any network activity.
    pub async fn generate(&self, input: &str) -> Result<String> {
        let result = self.generate_inner(input).await;
        match &result {
            Ok(text) => {
                if let Some(logger) = &self.logger {
                    logger.log_response(text);
                }
            }
            Err(err) => {
                CLIENT_REQUEST_ERRORS.click();
                if let Some(logger) = &self.logger {
                    logger.log_error(err);
                }
            }
        }
        result
    }

    async fn generate_inner(&self, input: &str) -> Result<String> {
        let url = self.config.endpoint()?;
        if let Some(logger) = &self.logger {
            logger.log_request(input);
        }

        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&GenerateContentRequest::from_text(input))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    let secs = self.timeout.map(|t| t.as_secs_f64()).unwrap_or_default();
                    Error::connection(
                        format!("request timed out after {secs}s: {e}"),
                        Some(Box::new(e)),
                    )
                } else {
                    Error::connection(e.to_string(), Some(Box::new(e)))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::http_client(
                format!("Failed to read response body: {}", e),
                Some(Box::new(e)),
            )
        })?;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        if status != StatusCode::OK {
            return Err(Error::api(status.as_u16(), body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.first_text()?;
        Ok(truncate_chars(text, MAX_REPLY_CHARS).to_string())
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("timeout", &self.timeout)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

#[async_trait::async_trait]
impl ChatBackend for GeminiClient {
    async fn reply(&self, input: &str) -> Result<String> {
        self.generate(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<String>>,
    }

    impl ClientLogger for RecordingLogger {
        fn log_request(&self, input: &str) {
            self.events.lock().unwrap().push(format!("request:{input}"));
        }

        fn log_response(&self, text: &str) {
            self.events.lock().unwrap().push(format!("response:{text}"));
        }

        fn log_error(&self, error: &Error) {
            self.events.lock().unwrap().push(format!("error:{error}"));
        }
    }

    #[test]
    fn config_treats_empty_as_unset() {
        let config = GeminiConfig::new(Some(String::new()), Some("k".to_string()));
        assert!(config.api_url.is_none());
        assert!(!config.is_complete());
        assert!(GeminiConfig::new(Some("https://x".into()), Some("k".into())).is_complete());
    }

    #[test]
    fn endpoint_appends_key() {
        let config = GeminiConfig::new(
            Some("https://example.com/v1beta/models/gemini-pro:generateContent".to_string()),
            Some("secret".to_string()),
        );
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://example.com/v1beta/models/gemini-pro:generateContent?key=secret"
        );
    }

    #[test]
    fn endpoint_rejects_bad_url() {
        let config = GeminiConfig::new(Some("not a url".to_string()), Some("k".to_string()));
        assert!(matches!(config.endpoint(), Err(Error::Url { .. })));
    }

    #[test]
    fn debug_redacts_key() {
        let config = GeminiConfig::new(Some("https://x".into()), Some("secret".into()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let logger = Arc::new(RecordingLogger::default());
        let client = GeminiClient::new(GeminiConfig::new(
            Some("http://127.0.0.1:9/unreachable".to_string()),
            None,
        ))
        .unwrap()
        .with_logger(logger.clone());

        let err = client.generate("hello").await.unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "Error: API URL or API key not set.");

        let events = logger.events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["error:Error: API URL or API key not set.".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_url_short_circuits_through_backend() {
        let client = GeminiClient::new(GeminiConfig::new(None, Some("k".to_string()))).unwrap();
        let err = client.reply("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "Error: API URL or API key not set.");
    }

    #[test]
    fn client_keeps_timeout() {
        let client =
            GeminiClient::with_options(GeminiConfig::default(), Some(Duration::from_secs(5)))
                .unwrap();
        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
        assert!(
            GeminiClient::new(GeminiConfig::default())
                .unwrap()
                .timeout
                .is_none()
        );
    }
}
