// SPDX-License-Identifier: MIT

//! Function-calling tools for the JSONPlaceholder REST API.
//!
//! Each tool pairs a static descriptor with an async function. The typed
//! functions ([`placeholder::get_all_comments`], [`placeholder::get_user_by_id`],
//! [`placeholder::create_post`]) return `Result<Value, ToolError>`; the
//! [`tool::Tool`] trait wraps them for hosts that expect `{ "error": ... }`
//! values instead.

pub mod config;
pub mod error;
pub mod placeholder;
pub mod registry;
pub mod tool;

pub use config::Config;
pub use error::{RequestError, ToolError};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolDefinition};
