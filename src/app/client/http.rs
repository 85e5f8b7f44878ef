//! Core HTTP operations with Basic Auth and rate limiting
//!
//! Every request carries the portal credentials. Requests are sent once;
//! there is no retry, and a transport failure is returned to the caller.

use std::num::NonZeroU32;

use governor::{clock::DefaultClock, state::InMemoryState, state::NotKeyed, Quota, RateLimiter};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::auth::Credentials;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Authenticated HTTP operations against the portal
#[derive(Debug)]
pub struct HttpHandler {
    client: Client,
    credentials: Credentials,
    rate_limiter: Option<DirectRateLimiter>,
}

impl HttpHandler {
    /// Creates a new HttpHandler; a `rate_limit_rps` of 0 disables limiting
    pub fn new(client: Client, credentials: Credentials, rate_limit_rps: u32) -> Self {
        let rate_limiter = NonZeroU32::new(rate_limit_rps)
            .map(|rps| RateLimiter::direct(Quota::per_second(rps)));

        Self {
            client,
            credentials,
            rate_limiter,
        }
    }

    /// Sends an authenticated GET request
    ///
    /// The response is returned whatever its status; callers map statuses
    /// to their own error types.
    pub async fn get(&self, url: &Url) -> reqwest::Result<Response> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.as_str())
            .basic_auth(
                &self.credentials.username,
                Some(&self.credentials.password),
            )
            .send()
            .await?;

        tracing::debug!("{} -> HTTP {}", url, response.status());
        Ok(response)
    }

    /// Username the handler authenticates as
    pub fn username(&self) -> &str {
        &self.credentials.username
    }
}

/// Outcome classes of a portal response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Unauthorized,
    NotFound,
    Failed(u16),
}

impl From<StatusCode> for StatusClass {
    fn from(status: StatusCode) -> Self {
        if status.is_success() {
            Self::Success
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Unauthorized
        } else if status == StatusCode::NOT_FOUND {
            Self::NotFound
        } else {
            Self::Failed(status.as_u16())
        }
    }
}
