use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{FacebookMcp, helpers};

/// Parameters for publishing a text post.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PostMessageParams {
    /// Text of the post.
    pub message: String,
}

/// Parameters for publishing an image post.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PostImageParams {
    /// Publicly reachable URL of the image.
    pub image_url: String,
    pub caption: String,
}

/// Parameters for scheduling a post.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SchedulePostParams {
    pub message: String,
    /// Unix timestamp (seconds) at which the post goes live.
    pub publish_time: i64,
}

/// Parameters for editing a post.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct UpdatePostParams {
    pub post_id: String,
    pub new_message: String,
}

#[tool_router(router = tool_router_posts, vis = "pub")]
impl FacebookMcp {
    #[tool(description = "Create a new Facebook Page post with a text message. Returns the post id.")]
    async fn post_to_facebook(
        &self,
        Parameters(params): Parameters<PostMessageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let created = self
            .control()
            .post_to_facebook(&params.message)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(created)
    }

    #[tool(description = "Post an image with a caption to the Facebook Page. Returns the photo and post ids.")]
    async fn post_image_to_facebook(
        &self,
        Parameters(params): Parameters<PostImageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let created = self
            .control()
            .post_image_to_facebook(&params.image_url, &params.caption)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(created)
    }

    #[tool(description = "Schedule a new post for future publishing at a unix timestamp. Returns the scheduled post id.")]
    async fn schedule_post(
        &self,
        Parameters(params): Parameters<SchedulePostParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let created = self
            .control()
            .schedule_post(&params.message, params.publish_time)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(created)
    }

    #[tool(description = "Update an existing post's message. Returns the update status.")]
    async fn update_post(
        &self,
        Parameters(params): Parameters<UpdatePostParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let status = self
            .control()
            .update_post(&params.post_id, &params.new_message)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(status)
    }

    #[tool(description = "Delete a specific post from the Facebook Page. Returns the deletion status.")]
    async fn delete_post(
        &self,
        Parameters(params): Parameters<crate::PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let status = self
            .control()
            .delete_post(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(status)
    }

    #[tool(description = "Fetch the most recent posts on the Page. Returns post objects with paging metadata.")]
    async fn get_page_posts(&self) -> Result<CallToolResult, ErrorData> {
        let posts = self
            .control()
            .get_page_posts()
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(posts)
    }
}
