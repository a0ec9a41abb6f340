// SPDX-License-Identifier: MIT

use super::client::{PlaceholderClient, StatusDetail};
use crate::error::ToolError;
use crate::tool::Tool;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// --- Static schema ---

static GET_USER_BY_ID_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "id": {
                "type": "integer",
                "description": "The ID of the user to fetch."
            }
        },
        "required": ["id"]
    })
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserByIdArgs {
    pub id: i64,
}

/// Fetch users matching `id`. The remote API filters and returns an array
/// with zero or more user objects.
pub async fn get_user_by_id(
    client: &PlaceholderClient,
    args: &GetUserByIdArgs,
) -> Result<Value, ToolError> {
    let fail = |e| ToolError::request("Failed to fetch user by id", e);

    let mut url = client.endpoint("users").map_err(fail)?;
    url.query_pairs_mut().append_pair("id", &args.id.to_string());

    client.get(url, StatusDetail::StatusOnly).await.map_err(fail)
}

pub struct GetUserByIdTool {
    client: PlaceholderClient,
}

impl GetUserByIdTool {
    pub fn new(client: PlaceholderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetUserByIdTool {
    fn name(&self) -> &str {
        "get_user_by_id"
    }

    fn description(&self) -> &str {
        "Fetch a user by their ID from JSONPlaceholder."
    }

    fn schema(&self) -> &Value {
        &GET_USER_BY_ID_SCHEMA
    }

    async fn execute(&self, input: Value) -> Result<Value, ToolError> {
        let args: GetUserByIdArgs = serde_json::from_value(input)
            .map_err(|e| ToolError::invalid_arguments(self.name(), e))?;
        get_user_by_id(&self.client, &args).await
    }
}
