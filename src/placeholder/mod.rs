// SPDX-License-Identifier: MIT

//! Tools for the JSONPlaceholder REST API
//!
//! Each tool is a thin declaration over [`PlaceholderClient::request`]:
//!
//! | Tool               | Method | Path        |
//! |--------------------|--------|-------------|
//! | `get_all_comments` | GET    | `/comments` |
//! | `get_user_by_id`   | GET    | `/users?id` |
//! | `create_post`      | POST   | `/posts`    |

pub mod client;
pub mod comments;
pub mod posts;
pub mod users;

pub use client::{PlaceholderClient, StatusDetail};
pub use comments::{get_all_comments, GetAllCommentsTool};
pub use posts::{create_post, CreatePostArgs, CreatePostTool};
pub use users::{get_user_by_id, GetUserByIdArgs, GetUserByIdTool};

use crate::tool::Tool;
use std::sync::Arc;

/// All placeholder tools sharing one client
pub fn create_tools(client: PlaceholderClient) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetAllCommentsTool::new(client.clone())),
        Arc::new(GetUserByIdTool::new(client.clone())),
        Arc::new(CreatePostTool::new(client)),
    ]
}
