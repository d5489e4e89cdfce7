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

/// Parameters addressing a single post.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PostIdParams {
    pub post_id: String,
}

#[tool_router(router = tool_router_insights, vis = "pub")]
impl FacebookMcp {
    #[tool(description = "Count the number of comments on a given post. Returns an integer.")]
    async fn get_number_of_comments(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let count = self
            .control()
            .get_number_of_comments(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(count)
    }

    #[tool(description = "Return the number of likes on a post. Returns an integer.")]
    async fn get_number_of_likes(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let count = self
            .control()
            .get_number_of_likes(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(count)
    }

    #[tool(description = "Get the number of shares for a post. Returns an integer.")]
    async fn get_post_share_count(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let count = self
            .control()
            .get_post_share_count(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(count)
    }

    #[tool(description = "Get the Page's total fan/like count. Returns an integer.")]
    async fn get_page_fan_count(&self) -> Result<CallToolResult, ErrorData> {
        let count = self
            .control()
            .get_page_fan_count()
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(count)
    }

    #[tool(description = "Fetch all insights metrics (impressions, reactions, clicks, etc). Returns every metric with its values.")]
    async fn get_post_insights(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_insights(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch total impressions of a post.")]
    async fn get_post_impressions(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_impressions(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch unique impressions of a post.")]
    async fn get_post_impressions_unique(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_impressions_unique(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch paid impressions of a post.")]
    async fn get_post_impressions_paid(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_impressions_paid(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch organic impressions of a post.")]
    async fn get_post_impressions_organic(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_impressions_organic(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of users who engaged with a post.")]
    async fn get_post_engaged_users(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_engaged_users(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of post clicks.")]
    async fn get_post_clicks(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_clicks(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of 'Like' reactions.")]
    async fn get_post_reactions_like_total(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_reactions_like_total(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of 'Love' reactions.")]
    async fn get_post_reactions_love_total(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_reactions_love_total(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of 'Wow' reactions.")]
    async fn get_post_reactions_wow_total(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_reactions_wow_total(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of 'Haha' reactions.")]
    async fn get_post_reactions_haha_total(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_reactions_haha_total(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of 'Sorry' reactions.")]
    async fn get_post_reactions_sorry_total(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_reactions_sorry_total(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Fetch the number of 'Anger' reactions.")]
    async fn get_post_reactions_anger_total(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let insights = self
            .control()
            .get_post_reactions_anger_total(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(insights)
    }

    #[tool(description = "Get counts for all reaction types on a post, keyed by reaction.")]
    async fn get_post_reactions_breakdown(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let breakdown = self
            .control()
            .get_post_reactions_breakdown(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(breakdown)
    }

    #[tool(description = "Get the top commenters on a post. Returns user ids with comment counts.")]
    async fn get_post_top_commenters(
        &self,
        Parameters(params): Parameters<PostIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let commenters = self
            .control()
            .get_post_top_commenters(&params.post_id)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(commenters)
    }
}
