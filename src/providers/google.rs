use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, header};
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{ChunkRequest, ChunkResponse, Provider};

/// Public endpoint of the Google translate web client
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client tag expected by the endpoint
pub const DEFAULT_CLIENT_TAG: &str = "gtx";

/// Browser user agent; the endpoint rejects unknown clients
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Delimiter between per-sentence entries of the payload
const ENTRY_DELIMITER: &str = "],";

// Separates the translated phrase from the source phrase inside an entry
const PHRASE_END: &str = "\",\"";

// Every phrase entry opens with this
const PHRASE_START: &str = "[\"";

/// Google translate client for the `translate_a/single` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    /// HTTP client for making requests
    client: Client,
    /// Endpoint URL without query
    endpoint: String,
    /// Value of the `client` query parameter
    client_tag: String,
    /// User agent header sent with every request
    user_agent: String,
    /// Request timeout in seconds
    timeout_secs: u64,
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleTranslate {
    /// Create a client for the public endpoint with default settings
    pub fn new() -> Self {
        Self::new_with_config(
            DEFAULT_ENDPOINT,
            DEFAULT_CLIENT_TAG,
            DEFAULT_USER_AGENT,
            DEFAULT_TIMEOUT_SECS,
        )
    }

    /// Create a client with explicit settings
    pub fn new_with_config(
        endpoint: impl Into<String>,
        client_tag: impl Into<String>,
        user_agent: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            client_tag: client_tag.into(),
            user_agent: user_agent.into(),
            timeout_secs,
        }
    }

    /// Build the request URL for a chunk, with the query form-urlencoded
    pub fn build_url(&self, request: &ChunkRequest) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", self.client_tag.as_str()),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }

    /// Download the raw payload for a chunk
    pub async fn fetch(&self, request: &ChunkRequest) -> Result<String, ProviderError> {
        let url = self.build_url(request)?;

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google translate error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.text().await.map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.timeout_secs)
        } else {
            ProviderError::from(error)
        }
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    async fn complete(&self, request: ChunkRequest) -> Result<ChunkResponse, ProviderError> {
        let payload = self.fetch(&request).await?;
        debug!("Received {} byte payload", payload.len());

        let lines = decode_response(&payload, &request.source_language)?;
        Ok(ChunkResponse { lines })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = ChunkRequest::new("Hello", "en", "fr");
        self.complete(request).await.map(|_| ())
    }

    fn name(&self) -> &str {
        "google"
    }
}

/// Decode a `translate_a/single` payload into translated lines.
///
/// The payload is a JSON-like array of arrays handled positionally: the two
/// framing characters are dropped, the `,null,"<source>"` artifact removed,
/// and the rest split into entries on `],`. Each entry that opens a phrase
/// carries the translated text between offset 2 and the first `","`.
/// Entries that do not open a phrase are framing trailers and are ignored.
pub fn decode_response(payload: &str, source_language: &str) -> Result<Vec<String>, ProviderError> {
    let body = match payload.char_indices().nth(2) {
        Some((offset, _)) => &payload[offset..],
        None => {
            return Err(ProviderError::ParseError(format!(
                "Payload too short: {:?}",
                payload
            )));
        }
    };

    let body = body.replace(&format!(",null,\"{}\"", source_language), "");

    let mut translation = String::new();
    let mut phrases = 0;

    for entry in body.split(ENTRY_DELIMITER) {
        if !entry.starts_with(PHRASE_START) {
            continue;
        }

        match entry[PHRASE_START.len()..].find(PHRASE_END) {
            Some(end) => {
                translation.push_str(&entry[PHRASE_START.len()..PHRASE_START.len() + end]);
                phrases += 1;
            }
            None => debug!("Ignoring trailer entry without phrase: {:?}", entry),
        }
    }

    if phrases == 0 {
        return Err(ProviderError::ParseError(format!(
            "No translated phrase found in payload: {}",
            preview(payload, 200)
        )));
    }

    Ok(unescape_phrase(&translation)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}

/// Undo the three escapes the endpoint leaves in phrases
pub fn unescape_phrase(phrase: &str) -> String {
    phrase
        .replace("\\r", "\r")
        .replace("\\n", "\n")
        .replace("\\\"", "\"")
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
