// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::error::{RequestError, ToolError};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;

/// How much of a non-success response ends up in the error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDetail {
    /// Numeric status only
    StatusOnly,
    /// Numeric status plus the raw response text
    WithBody,
}

/// Shared HTTP plumbing for the placeholder API tools.
///
/// Cloning is cheap: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    client: Client,
    base_url: String,
}

impl PlaceholderClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url().to_string(),
        }
    }

    /// Client for `PLACEHOLDER_BASE_URL` (or the public host)
    pub fn from_env() -> Result<Self, ToolError> {
        let config = Config::from_env()?;
        log::info!("Placeholder client: base_url={}", config.base_url());
        Ok(Self::new(&config))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a collection path such as `comments`
    pub fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        Ok(Url::parse(&format!("{}/{}", self.base_url, path))?)
    }

    /// GET `url` and decode the JSON response. Sends no body.
    pub async fn get(&self, url: Url, detail: StatusDetail) -> Result<Value, RequestError> {
        log::debug!("GET {}", url);
        self.send(self.client.get(url), detail).await
    }

    /// POST `body` as JSON (`Content-Type: application/json`) and decode the
    /// JSON response.
    pub async fn post_json<B>(
        &self,
        url: Url,
        body: &B,
        detail: StatusDetail,
    ) -> Result<Value, RequestError>
    where
        B: Serialize + ?Sized,
    {
        log::debug!("POST {}", url);
        self.send(self.client.post(url).json(body), detail).await
    }

    async fn send(
        &self,
        req: RequestBuilder,
        detail: StatusDetail,
    ) -> Result<Value, RequestError> {
        let resp = req.send().await.map_err(RequestError::Transport)?;
        let status = resp.status();

        if !status.is_success() {
            log::warn!("Placeholder API returned {} for {}", status, resp.url());
            return Err(match detail {
                StatusDetail::StatusOnly => RequestError::Status {
                    status: status.as_u16(),
                },
                StatusDetail::WithBody => RequestError::StatusWithBody {
                    status: status.as_u16(),
                    body: resp.text().await.map_err(RequestError::Transport)?,
                },
            });
        }

        resp.json().await.map_err(|e| {
            if e.is_decode() {
                RequestError::Decode(e)
            } else {
                RequestError::Transport(e)
            }
        })
    }
}
