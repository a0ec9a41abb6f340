// SPDX-License-Identifier: MIT

use super::client::{PlaceholderClient, StatusDetail};
use crate::error::ToolError;
use crate::tool::Tool;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// --- Static schema ---

static CREATE_POST_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "description": "The ID of the post." },
            "slug": { "type": "string", "description": "The slug of the post." },
            "url": { "type": "string", "description": "The URL of the post." },
            "title": { "type": "string", "description": "The title of the post." },
            "content": { "type": "string", "description": "The content of the post." },
            "image": { "type": "string", "description": "The image URL of the post." },
            "thumbnail": { "type": "string", "description": "The thumbnail URL of the post." },
            "status": { "type": "string", "description": "The status of the post." },
            "category": { "type": "string", "description": "The category of the post." },
            "publishedAt": { "type": "string", "description": "The published date of the post." },
            "updatedAt": { "type": "string", "description": "The updated date of the post." },
            "userId": { "type": "integer", "description": "The user ID associated with the post." }
        },
        "required": [
            "id",
            "slug",
            "url",
            "title",
            "content",
            "image",
            "thumbnail",
            "status",
            "category",
            "publishedAt",
            "updatedAt",
            "userId"
        ]
    })
});

/// Post payload. Serializes to exactly the twelve wire fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostArgs {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub title: String,
    pub content: String,
    pub image: String,
    pub thumbnail: String,
    pub status: String,
    pub category: String,
    pub published_at: String,
    pub updated_at: String,
    pub user_id: i64,
}

/// Create a post. Returns whatever the API echoes back for the new record.
pub async fn create_post(
    client: &PlaceholderClient,
    args: &CreatePostArgs,
) -> Result<Value, ToolError> {
    let fail = |e| ToolError::request("Failed to create post", e);

    let url = client.endpoint("posts").map_err(fail)?;
    client
        .post_json(url, args, StatusDetail::StatusOnly)
        .await
        .map_err(fail)
}

pub struct CreatePostTool {
    client: PlaceholderClient,
}

impl CreatePostTool {
    pub fn new(client: PlaceholderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for CreatePostTool {
    fn name(&self) -> &str {
        "create_post"
    }

    fn description(&self) -> &str {
        "Create a new post in JSONPlaceholder."
    }

    fn schema(&self) -> &Value {
        &CREATE_POST_SCHEMA
    }

    async fn execute(&self, input: Value) -> Result<Value, ToolError> {
        let args: CreatePostArgs = serde_json::from_value(input)
            .map_err(|e| ToolError::invalid_arguments(self.name(), e))?;
        create_post(&self.client, &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::collections::BTreeSet;

    fn sample() -> Value {
        json!({
            "id": 101,
            "slug": "hello-world",
            "url": "https://example.com/hello-world",
            "title": "Hello",
            "content": "First post",
            "image": "https://example.com/hello.png",
            "thumbnail": "https://example.com/hello-thumb.png",
            "status": "published",
            "category": "news",
            "publishedAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "userId": 7
        })
    }

    #[test]
    fn test_args_serialize_to_wire_names() {
        let args: CreatePostArgs = serde_json::from_value(sample()).unwrap();
        assert_eq!(args.published_at, "2024-01-01T00:00:00Z");
        assert_eq!(args.user_id, 7);
        assert_eq!(serde_json::to_value(&args).unwrap(), sample());
    }

    #[test]
    fn test_required_matches_args_fields() {
        let tool = CreatePostTool::new(PlaceholderClient::new(&Config::default()));
        let def = tool.definition();

        let required: BTreeSet<&str> = def.required().into_iter().collect();
        let sample = sample();
        let fields: BTreeSet<&str> = sample
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let properties: BTreeSet<&str> = def.parameters["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(required.len(), 12);
        assert_eq!(required, fields);
        assert_eq!(required, properties);
    }

    #[tokio::test]
    async fn test_missing_field_is_invalid_arguments() {
        let mut input = sample();
        input.as_object_mut().unwrap().remove("userId");

        let tool = CreatePostTool::new(PlaceholderClient::new(&Config::default()));
        let err = tool.execute(input).await.unwrap_err();
        assert!(err.to_string().contains("missing field `userId`"));
    }
}
