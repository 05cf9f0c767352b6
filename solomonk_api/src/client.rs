//! HTTP client for the Solomonk bestiary search endpoint.

use std::time::Duration;

use url::Url;

use crate::{query::MonsterQuery, types::PageEnvelope, Error};

/// Production origin of the bestiary.
pub const BASE_URL: &str = "https://solomonk.fr";

/// Path of the AJAX endpoint the search page calls.
pub const ENDPOINT_PATH: &str = "/ajax/select_monster.php";

/// The search page the endpoint expects requests to come from.
pub const REFERER: &str = "https://solomonk.fr/fr/monstres/chercher";

/// Desktop browser user agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the bestiary search endpoint.
///
/// Sends the same headers the site's own search page sends (referer, XHR
/// marker, browser user agent). The underlying `reqwest::Client` is built once
/// and reused for every page.
pub struct Client {
    /// Origin of the site. Defaults to [`BASE_URL`].
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production site.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a new client with a custom origin. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn get_url(&self, query: &MonsterQuery) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}{}", self.base_url, ENDPOINT_PATH))?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches one page of the bestiary and decodes its JSON envelope.
    ///
    /// An envelope without markup is still `Ok`; use
    /// [`PageEnvelope::into_page`] to tell an empty page from a real one.
    pub async fn fetch_page(&self, query: &MonsterQuery) -> Result<PageEnvelope, Error> {
        let url = self.get_url(query)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header("referer", REFERER)
            .header("x-requested-with", "XMLHttpRequest")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        // Invalid UTF-8 is a decode error, not a lossily repaired page.
        serde_json::from_slice::<PageEnvelope>(&body).map_err(|e| {
            tracing::debug!(
                "undecodable body: {}",
                truncate_body(&String::from_utf8_lossy(&body))
            );
            Error::Decode(e)
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
