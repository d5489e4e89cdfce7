use fbpage_core::GraphError;
use fbpage_types::models::{Comment, Listing};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FacebookMcp, PostIdParams, helpers};

/// Parameters for replying to a comment.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ReplyParams {
    pub post_id: String,
    pub comment_id: String,
    /// Text of the reply.
    pub message: String,
}

/// Parameters addressing a single comment.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CommentIdParams {
    pub comment_id: String,
}

/// Parameters addressing a comment through its post.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PostCommentParams {
    pub post_id: String,
    pub comment_id: String,
}

/// Parameters for bulk moderation.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CommentIdsParams {
    pub comment_ids: Vec<String>,
}

/// Parameters for the negative-comment filter.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FilterCommentsParams {
    /// Comment listing as returned by `get_post_comments` (`{"data": [...]}`).
    pub comments: Value,
}

#[tool_router(router = tool_router_comments, vis = "pub")]
impl FacebookMcp {
    #[tool(description = "Retrieve all comments for a given post. Returns comment objects.")]
    async fn get_post_comments(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let comments = self
            .control()
            .get_post_comments(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(comments)
    }

    #[tool(description = "Reply to a specific comment on a Facebook post. Returns the reply id.")]
    async fn reply_to_comment(
        &self,
        Parameters(params): Parameters<ReplyParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let created = self
            .control()
            .reply_to_comment(&params.post_id, &params.comment_id, &params.message)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(created)
    }

    #[tool(description = "Delete a specific comment from the Page. Returns the deletion status.")]
    async fn delete_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let status = self
            .control()
            .delete_comment(&params.comment_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(status)
    }

    #[tool(description = "Alias to delete a comment on a post. Returns the deletion status.")]
    async fn delete_comment_from_post(
        &self,
        Parameters(params): Parameters<PostCommentParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let status = self
            .control()
            .delete_comment_from_post(&params.post_id, &params.comment_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(status)
    }

    #[tool(description = "Hide a comment from public view.")]
    async fn hide_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let status = self
            .control()
            .hide_comment(&params.comment_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(status)
    }

    #[tool(description = "Unhide a previously hidden comment.")]
    async fn unhide_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let status = self
            .control()
            .unhide_comment(&params.comment_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(status)
    }

    #[tool(description = "Delete multiple comments by ID. Returns one succeeded/failed entry per id.")]
    async fn bulk_delete_comments(
        &self,
        Parameters(params): Parameters<CommentIdsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let results = self.control().bulk_delete_comments(&params.comment_ids).await;
        helpers::json_result(results)
    }

    #[tool(description = "Hide multiple comments by ID. Returns one succeeded/failed entry per id.")]
    async fn bulk_hide_comments(
        &self,
        Parameters(params): Parameters<CommentIdsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let results = self.control().bulk_hide_comments(&params.comment_ids).await;
        helpers::json_result(results)
    }

    #[tool(description = "Filter comments for basic negative sentiment by keyword. Returns the flagged comments.")]
    async fn filter_negative_comments(
        &self,
        Parameters(params): Parameters<FilterCommentsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let comments: Listing<Comment> = serde_json::from_value(params.comments)
            .map_err(|err| helpers::map_err(GraphError::InvalidInput(err.to_string())))?;
        let flagged = self.control().filter_negative_comments(&comments);
        helpers::json_result(flagged)
    }
}
