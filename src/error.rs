// SPDX-License-Identifier: MIT

//! Typed error handling for placeholder-tools
//!
//! Tools return `Result<Value, ToolError>` internally. The host-facing
//! boundary (`Tool::invoke`) flattens any `ToolError` into `{ "error": "..." }`.

use thiserror::Error;

/// Top-level error type for a tool call
#[derive(Debug, Error)]
pub enum ToolError {
    /// A request issued by a tool failed; `context` names the operation
    #[error("{context}: {source}")]
    Request {
        context: &'static str,
        #[source]
        source: RequestError,
    },

    /// Arguments from the host did not match the tool's typed input
    #[error("Invalid arguments for '{tool}': {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    /// Tool not found in the registry
    #[error("Tool '{name}' not found")]
    ToolNotFound { name: String },

    /// Configuration errors (bad base URL)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure of a single HTTP round-trip
#[derive(Debug, Error)]
pub enum RequestError {
    /// Non-success status, with the raw response text
    #[error("HTTP error! status: {status}, message: {body}")]
    StatusWithBody { status: u16, body: String },

    /// Non-success status
    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },

    /// Network unreachable, DNS failure, connection reset
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// Response body was not valid JSON
    #[error("{0}")]
    Decode(#[source] reqwest::Error),

    /// Endpoint URL could not be built
    #[error("{0}")]
    Url(#[from] url::ParseError),
}

impl ToolError {
    /// Wrap a request failure with the operation it belongs to
    pub fn request(context: &'static str, source: RequestError) -> Self {
        Self::Request { context, source }
    }

    /// Create an invalid-arguments error
    pub fn invalid_arguments(tool: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            source,
        }
    }

    /// Create a tool not found error
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status code, when the failure was a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { source, .. } => source.status(),
            _ => None,
        }
    }
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::StatusWithBody { status, .. } | Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
