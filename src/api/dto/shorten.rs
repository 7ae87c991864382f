//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// Parsing is lenient: anything that is not a JSON object with a string
/// `url` field yields a request without a URL.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ShortenRequest {
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The URL with surrounding whitespace removed.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim)
    }
}

/// Successful allocation.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}
