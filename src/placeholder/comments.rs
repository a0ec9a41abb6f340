// SPDX-License-Identifier: MIT

use super::client::{PlaceholderClient, StatusDetail};
use crate::error::ToolError;
use crate::tool::Tool;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

// --- Static schema ---

static GET_ALL_COMMENTS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {},
        "required": []
    })
});

/// Fetch every comment. The remote API returns an array of comment objects.
///
/// Non-success responses keep the raw body text in the error message.
pub async fn get_all_comments(client: &PlaceholderClient) -> Result<Value, ToolError> {
    let fail = |e| ToolError::request("Failed to fetch comments", e);

    let url = client.endpoint("comments").map_err(fail)?;
    client.get(url, StatusDetail::WithBody).await.map_err(fail)
}

pub struct GetAllCommentsTool {
    client: PlaceholderClient,
}

impl GetAllCommentsTool {
    pub fn new(client: PlaceholderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetAllCommentsTool {
    fn name(&self) -> &str {
        "get_all_comments"
    }

    fn description(&self) -> &str {
        "Fetches all comments from JSONPlaceholder."
    }

    fn schema(&self) -> &Value {
        &GET_ALL_COMMENTS_SCHEMA
    }

    // Takes no parameters; whatever the host sends is ignored
    async fn execute(&self, _input: Value) -> Result<Value, ToolError> {
        get_all_comments(&self.client).await
    }
}
