//! HTTP GET plumbing shared by the downloader and the manifest resolver.

use crate::core::error::{Result, VerifyError};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("release-verify/", env!("CARGO_PKG_VERSION"));

/// Issue a GET request and return the response once a 2xx status is seen.
///
/// `timeout` bounds the whole request, body included, so this suits small
/// bodies such as the manifest. Redirects are followed by ureq. Anything
/// that still ends outside 2xx is an [`VerifyError::HttpStatus`]; connection
/// and TLS problems are [`VerifyError::Network`].
pub fn get(url: &str, timeout: Duration) -> Result<ureq::Response> {
    let response = ureq::get(url)
        .timeout(timeout)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| map_ureq_error(url, e))?;

    check_status(url, response)
}

/// Like [`get`], for large bodies: `timeout` applies to connecting and to
/// each individual read, never to the transfer as a whole. A slow but
/// steady stream runs to completion; a stalled one fails.
pub fn get_stream(url: &str, timeout: Duration) -> Result<ureq::Response> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .user_agent(USER_AGENT)
        .build();

    let response = agent
        .get(url)
        .call()
        .map_err(|e| map_ureq_error(url, e))?;

    check_status(url, response)
}

fn check_status(url: &str, response: ureq::Response) -> Result<ureq::Response> {
    let status = response.status();
    if !(200..300).contains(&status) {
        return Err(VerifyError::HttpStatus {
            url: url.to_owned(),
            status,
        });
    }
    Ok(response)
}

/// GET a URL and decode its body as JSON, streaming from the socket.
pub fn get_json<T: DeserializeOwned>(url: &str, timeout: Duration) -> Result<T> {
    let reader = get(url, timeout)?.into_reader();
    serde_json::from_reader(reader).map_err(|source| {
        if source.is_io() {
            // The body stream broke; the JSON itself was never the problem.
            VerifyError::Network {
                url: url.to_owned(),
                reason: source.to_string(),
            }
        } else {
            VerifyError::Decode {
                url: url.to_owned(),
                source,
            }
        }
    })
}

fn map_ureq_error(url: &str, err: ureq::Error) -> VerifyError {
    match err {
        ureq::Error::Status(status, _) => VerifyError::HttpStatus {
            url: url.to_owned(),
            status,
        },
        ureq::Error::Transport(transport) => VerifyError::Network {
            url: url.to_owned(),
            reason: transport.to_string(),
        },
    }
}
