//! HTTP GET of a watch page.
//!
//! Uses the curl crate (libcurl) to fetch the HTML document behind a watch
//! URL, following redirects and collecting the body in memory.

use crate::error::WatchError;
use std::time::Duration;

/// Transfer settings for a page fetch. `None` leaves the libcurl default
/// (no timeout, libcurl user agent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// Performs a GET request and returns the response body.
///
/// Follows redirects. Runs in the current thread and blocks until the
/// transfer completes or a timeout fires.
pub fn fetch(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, WatchError> {
    let curl_err = |source: curl::Error| WatchError::Fetch {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    // Empty string = every encoding libcurl was built with.
    easy.accept_encoding("").map_err(curl_err)?;
    if let Some(d) = opts.connect_timeout {
        easy.connect_timeout(d).map_err(curl_err)?;
    }
    if let Some(d) = opts.timeout {
        easy.timeout(d).map_err(curl_err)?;
    }
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua).map_err(curl_err)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    check_status(url, code)?;

    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());
    Ok(body)
}

/// Final (post-redirect) status must be 2xx.
fn check_status(url: &str, code: u32) -> Result<(), WatchError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(WatchError::Http {
            url: url.to_string(),
            code,
        })
    }
}
