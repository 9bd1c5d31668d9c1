//! Blocking HTTP plumbing for page fetches.
//!
//! One immutable [`ClientConfig`] drives both the page fetcher and the image
//! prober, so timeouts, user agent and the body ceiling are set in one place.

use std::io::Read;
use std::time::Duration;

use tracing::{debug, warn};

use crate::encoding::decode_html;
use crate::error::{Error, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default ceiling on response bodies (15 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 15 * 1024 * 1024;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Default `Accept-Language` header.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-us";

const ACCEPT_HTML: &str =
    "application/xml,application/xhtml+xml,text/html;q=0.9,text/plain;q=0.8,image/png,*/*;q=0.5";

/// HTTP client settings shared by the fetcher and the image prober.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// `Accept-Language` header value.
    pub accept_language: String,
    /// Largest accepted response body.
    pub max_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl ClientConfig {
    /// Build a `ureq` agent from these settings.
    ///
    /// HTTP error statuses come back as responses so callers can inspect them.
    #[must_use]
    pub fn agent(&self) -> ureq::Agent {
        ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(self.timeout))
            .user_agent(self.user_agent.as_str())
            .build()
            .into()
    }
}

/// Lowercased header value, or an empty string.
pub(crate) fn header_string(response: &ureq::http::Response<ureq::Body>, key: &str) -> String {
    response
        .headers()
        .get(key)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Read at most `max_bytes` of a response body.
///
/// Returns `None` when the body is larger than the ceiling.
pub(crate) fn read_limited(
    response: &mut ureq::http::Response<ureq::Body>,
    max_bytes: u64,
) -> std::io::Result<Option<Vec<u8>>> {
    let mut body = Vec::new();
    response
        .body_mut()
        .as_reader()
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut body)?;

    if body.len() as u64 > max_bytes {
        return Ok(None);
    }
    Ok(Some(body))
}

/// Whether decoded text looks like an HTML or XML document.
///
/// Accepts a doctype, an `<html>` root or an XML prolog near the start, and
/// otherwise requires both a `<title>` and a `<p>` somewhere in the body.
#[must_use]
pub fn looks_like_html(text: &str) -> bool {
    let head = text.trim_start().chars().take(1024).collect::<String>().to_ascii_lowercase();
    if head.starts_with("<!doctype html") || head.starts_with("<?xml") || head.contains("<html") {
        return true;
    }
    text.contains("<title>") && text.contains("<p>")
}

/// Downloads pages over HTTP.
#[derive(Clone)]
pub struct HtmlFetcher {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl std::fmt::Debug for HtmlFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlFetcher").field("config", &self.config).finish_non_exhaustive()
    }
}

impl HtmlFetcher {
    /// Create a fetcher with its own agent.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { agent: config.agent(), config }
    }

    /// Fetch a page and decode it to a string.
    ///
    /// # Errors
    ///
    /// - `Error::Http` on transport failures or non-success statuses
    /// - `Error::ContentTooLarge` when the body exceeds `max_bytes`
    /// - `Error::NotHtml` when the body is empty or does not look like markup
    pub fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let mut response = self
            .agent
            .get(url)
            .header("Accept", ACCEPT_HTML)
            .header("Accept-Language", self.config.accept_language.as_str())
            .call()
            .map_err(|err| Error::Http(format!("{url}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("HTTP {} for {url}", status.as_u16())));
        }

        let content_type = header_string(&response, "content-type");
        let body = read_limited(&mut response, self.config.max_bytes)
            .map_err(|err| Error::Http(format!("{url}: {err}")))?
            .ok_or_else(|| {
                warn!(url, max_bytes = self.config.max_bytes, "page exceeded the byte ceiling");
                Error::ContentTooLarge { max_bytes: self.config.max_bytes }
            })?;

        let header = (!content_type.is_empty()).then_some(content_type.as_str());
        let html = decode_html(&body, header);
        let html = html.trim();

        if html.is_empty() || !looks_like_html(html) {
            return Err(Error::NotHtml(url.to_string()));
        }
        Ok(html.to_string())
    }
}
