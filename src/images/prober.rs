//! Network access for image inspection.
//!
//! The guesser only talks to images through [`ImageProber`], which keeps
//! the selection logic testable without a network.

use tracing::debug;

use crate::network::{header_string, read_limited, ClientConfig};

/// Size probe and download of image URLs.
///
/// Implementations never fail: a probe that cannot answer reports an unknown
/// size and a failed download reports `None`.
pub trait ImageProber {
    /// Byte size of the image behind `url`, or `0` when unknown.
    fn head_bytes(&self, url: &str) -> u64;

    /// Full image bytes, or `None` when the download failed.
    fn download(&self, url: &str) -> Option<Vec<u8>>;
}

/// [`ImageProber`] over blocking HTTP.
#[derive(Clone)]
pub struct HttpImageProber {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl std::fmt::Debug for HttpImageProber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageProber").field("config", &self.config).finish_non_exhaustive()
    }
}

impl HttpImageProber {
    /// Create a prober with its own agent.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { agent: config.agent(), config }
    }
}

impl ImageProber for HttpImageProber {
    /// `HEAD` request; the `Content-Length` only counts when the server says
    /// the resource is an image.
    fn head_bytes(&self, url: &str) -> u64 {
        let response = match self.agent.head(url).call() {
            Ok(response) => response,
            Err(err) => {
                debug!(url, error = %err, "image size probe failed");
                return 0;
            }
        };

        if !header_string(&response, "content-type").contains("image") {
            return 0;
        }
        header_string(&response, "content-length").parse().unwrap_or(0)
    }

    fn download(&self, url: &str) -> Option<Vec<u8>> {
        let mut response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(err) => {
                debug!(url, error = %err, "image download failed");
                return None;
            }
        };

        if response.status().as_u16() != 200 {
            debug!(url, status = response.status().as_u16(), "image download refused");
            return None;
        }

        match read_limited(&mut response, self.config.max_bytes) {
            Ok(Some(bytes)) if !bytes.is_empty() => Some(bytes),
            Ok(_) => None,
            Err(err) => {
                debug!(url, error = %err, "image body read failed");
                None
            }
        }
    }
}
