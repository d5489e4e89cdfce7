//! MCP server implementation for fbpage-mcp.
//!
//! This crate binds each page operation of the control plane to an rmcp tool
//! handler and exposes the MCP-facing API surface.

mod helpers;
mod tools;
pub mod server;

use fbpage_core::PageControlPlane;
use rmcp::{ServerHandler, handler::server::tool::ToolRouter, tool_handler};
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};

pub use tools::comments::{
    CommentIdParams,
    CommentIdsParams,
    FilterCommentsParams,
    PostCommentParams,
    ReplyParams,
};
pub use tools::insights::PostIdParams;
pub use tools::messaging::DirectMessageParams;
pub use tools::posts::{PostImageParams, PostMessageParams, SchedulePostParams, UpdatePostParams};

pub const SERVER_NAME: &str = "FacebookMCP";

const SERVER_INSTRUCTIONS: &str = r"fbpage-mcp manages a single Facebook Page through the Graph API.

Tools:
- Posts: `post_to_facebook`, `post_image_to_facebook`, `schedule_post`, `update_post`,
  `delete_post`, `get_page_posts`.
- Comments: `get_post_comments`, `reply_to_comment`, `delete_comment`, `delete_comment_from_post`,
  `hide_comment`, `unhide_comment`, `bulk_delete_comments`, `bulk_hide_comments`,
  `filter_negative_comments`.
- Counters: `get_number_of_comments`, `get_number_of_likes`, `get_post_share_count`,
  `get_page_fan_count`.
- Insights: `get_post_insights`, `get_post_impressions*`, `get_post_engaged_users`,
  `get_post_clicks`, `get_post_reactions_*_total`, `get_post_reactions_breakdown`,
  `get_post_top_commenters`.
- Messaging: `send_dm_to_user`.

Notes:
- `schedule_post` takes a unix timestamp; the Graph API decides whether it is acceptable.
- `filter_negative_comments` takes the object returned by `get_post_comments`.
- Bulk tools return one entry per comment id with `status` `succeeded` or `failed`.";

/// MCP server wrapper around the page control plane and tool routers.
#[derive(Clone)]
pub struct FacebookMcp {
    tool_router: ToolRouter<Self>,
    control: PageControlPlane,
}

impl FacebookMcp {
    #[must_use]
    pub fn new(control: PageControlPlane) -> Self {
        let tool_router = Self::tool_router_posts()
            + Self::tool_router_comments()
            + Self::tool_router_insights()
            + Self::tool_router_messaging();
        Self {
            tool_router,
            control,
        }
    }

    pub(crate) const fn control(&self) -> &PageControlPlane {
        &self.control
    }
}

#[tool_handler]
impl ServerHandler for FacebookMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
