//! Loading catalog HTML from the network or from disk

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// Catalog listing fetched when no local file is given
pub const CATALOG_URL: &str = "https://telega.in/catalog";

/// Default body cap; ureq alone stops at 10 MB
pub const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Options for the HTTP fetch
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    /// Global request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Largest response body accepted, in bytes
    pub max_body_bytes: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("catalog_parser/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

/// Where the catalog HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Load the raw HTML for this source
    pub fn load(&self, options: &FetchOptions) -> Result<String> {
        match self {
            Source::Url(url) => fetch_html(url, options),
            Source::File(path) => read_html_file(path),
        }
    }
}

/// Fetch a page with a single GET. Anything other than 200 is an error,
/// as is a body larger than `options.max_body_bytes`.
pub fn fetch_html(url: &str, options: &FetchOptions) -> Result<String> {
    let parsed = url::Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(options.timeout)
            .user_agent(options.user_agent.as_str())
            .http_status_as_error(false)
            .build(),
    );

    debug!(url = %parsed, "fetching catalog page");
    let resp = agent.get(parsed.as_str()).call().map_err(|e| http_error(url, e))?;

    let status = resp.status().as_u16();
    if status != 200 {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    resp.into_body()
        .with_config()
        .limit(options.max_body_bytes)
        .read_to_string()
        .map_err(|e| http_error(url, e))
}

fn http_error(url: &str, source: ureq::Error) -> Error {
    Error::Http {
        url: url.to_string(),
        source: Box::new(source),
    }
}

/// Read a local HTML file, which must be valid UTF-8
pub fn read_html_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading catalog file");
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let html = String::from_utf8(bytes).map_err(|e| e.utf8_error())?;
    Ok(html)
}
