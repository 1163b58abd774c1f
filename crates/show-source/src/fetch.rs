//! Retry policy and HTTP fetcher for the remote tiers.
//!
//! Every remote call goes through [`Fetcher::get_json`]: up to
//! `max_attempts` tries with a fixed per-attempt timeout. In lenient TLS
//! mode a certificate failure downgrades the remaining attempts of that
//! call to a non-verifying client; strict mode (the default) never skips
//! verification and simply burns the attempt.

use std::time::Duration;

use serde::de::DeserializeOwned;
use show_config::{FetchConfig, TlsMode};

use crate::error::SourceError;

const USER_AGENT: &str = "showcase/0.1";

/// Retry and TLS policy for a single remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Attempts before the call is abandoned.
    pub max_attempts: u32,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Whether a certificate failure may downgrade to a non-verifying
    /// client for the rest of the call.
    pub lenient_tls: bool,
}

impl FetchPolicy {
    /// Build a policy from the fetch and TLS configuration sections.
    #[must_use]
    pub fn from_config(fetch: &FetchConfig, tls: TlsMode) -> Self {
        Self {
            max_attempts: fetch.max_attempts.max(1),
            timeout: Duration::from_secs(fetch.timeout_secs),
            lenient_tls: tls == TlsMode::Lenient,
        }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default(), TlsMode::Strict)
    }
}

/// HTTP client wrapper applying a [`FetchPolicy`] to every call.
pub struct Fetcher {
    policy: FetchPolicy,
    verifying: reqwest::Client,
    non_verifying: Option<reqwest::Client>,
}

impl Fetcher {
    /// Create a fetcher for the given policy.
    ///
    /// The non-verifying client is only built (and only ever used) in
    /// lenient TLS mode.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(policy: FetchPolicy) -> Self {
        let verifying = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(policy.timeout)
            .build()
            .expect("reqwest client should build");

        let non_verifying = policy.lenient_tls.then(|| {
            reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(policy.timeout)
                .danger_accept_invalid_certs(true)
                .build()
                .expect("reqwest client should build")
        });

        Self {
            policy,
            verifying,
            non_verifying,
        }
    }

    /// The policy this fetcher applies.
    #[must_use]
    pub const fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// GET `url` and deserialize the JSON body, retrying per the policy.
    ///
    /// # Errors
    ///
    /// Returns the last [`SourceError`] once the attempt ceiling is
    /// exhausted. Callers treat this as a failed tier, not a fatal error.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let mut verify = true;
        let mut last_error = None;

        for attempt in 1..=self.policy.max_attempts {
            let client = if verify {
                &self.verifying
            } else {
                // Only reachable after a certificate failure in lenient
                // mode, where the client was built in `new`.
                self.non_verifying.as_ref().unwrap_or(&self.verifying)
            };

            match Self::try_get::<T>(client, url).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if verify && self.non_verifying.is_some() && is_certificate_error(&error) {
                        tracing::warn!(
                            url,
                            attempt,
                            "certificate validation failed, retrying without verification"
                        );
                        verify = false;
                    } else {
                        tracing::debug!(url, attempt, %error, "fetch attempt failed");
                    }
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or(SourceError::Api {
            status: 0,
            message: "no attempts were made".to_string(),
        }))
    }

    async fn try_get<T: DeserializeOwned>(
        client: &reqwest::Client,
        url: &str,
    ) -> Result<T, SourceError> {
        let resp = check_response(client.get(url).send().await?).await?;
        Ok(resp.json::<T>().await?)
    }
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** -> [`SourceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** -> [`SourceError::Api`] with status code and
///   response body.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(SourceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Whether a source error stems from TLS certificate validation.
///
/// reqwest does not expose a dedicated certificate error kind, so this
/// walks the error chain looking for the validation failure text emitted
/// by the TLS backends.
fn is_certificate_error(error: &SourceError) -> bool {
    let SourceError::Http(error) = error else {
        return false;
    };
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(current) = source {
        let text = current.to_string();
        if text.contains("certificate") || text.contains("UnknownIssuer") {
            return true;
        }
        source = current.source();
    }
    false
}
