//! REST surface for fbpage-mcp.
//!
//! Exposes the page operations as resource-oriented endpoints that forward to
//! the same control plane the MCP tools use.

use std::net::SocketAddr;

use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use fbpage_core::{GraphError, PageControlPlane};
use fbpage_types::models::{
    Comment,
    Created,
    Insights,
    Listing,
    MessageReceipt,
    OperationStatus,
    PageStats,
    Post,
    ReactionBreakdown,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

const SERVICE_NAME: &str = "FacebookMCP";

/// Configuration for the REST server.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub addr: SocketAddr,
}

impl ApiServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }
}

/// REST server wrapper.
pub struct ApiServer {
    config: ApiServerConfig,
    state: AppState,
}

impl ApiServer {
    #[must_use]
    pub const fn new(control: PageControlPlane, config: ApiServerConfig) -> Self {
        Self {
            config,
            state: AppState { control },
        }
    }

    /// Runs the HTTP server until shutdown.
    ///
    /// # Errors
    /// Returns any listener or server error.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let app = build_router(self.state);

        info!("fbpage-api listening on {addr}");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[derive(Clone)]
struct AppState {
    control: PageControlPlane,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<GraphError> for ApiError {
    fn from(err: GraphError) -> Self {
        error!(error = %err, "page operation failed");
        Self::internal(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = Json(ErrorResponse { error: self.message });
        (self.status, payload).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct PostQuery {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PostImageQuery {
    image_url: String,
    caption: String,
}

#[derive(Debug, Deserialize)]
struct ReplyQuery {
    post_id: String,
    comment_id: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct MessageQuery {
    user_id: String,
    message: String,
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/post", post(create_post))
        .route("/api/post-image", post(create_image_post))
        .route("/api/reply", post(reply))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:post_id", delete(delete_post))
        .route("/api/posts/:post_id/comments", get(post_comments))
        .route("/api/posts/:post_id/insights", get(post_insights))
        .route("/api/posts/:post_id/reactions", get(post_reactions))
        .route("/api/comments/:comment_id", delete(delete_comment))
        .route("/api/comments/:comment_id/hide", post(hide_comment))
        .route("/api/messages", post(send_message))
        .route("/api/stats", get(page_stats))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

async fn create_post(
    State(state): State<AppState>,
    query: Result<Query<PostQuery>, QueryRejection>,
) -> Result<Json<Created>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.control.post_to_facebook(&query.message).await?))
}

async fn create_image_post(
    State(state): State<AppState>,
    query: Result<Query<PostImageQuery>, QueryRejection>,
) -> Result<Json<Created>, ApiError> {
    let Query(query) = query?;
    let created = state
        .control
        .post_image_to_facebook(&query.image_url, &query.caption)
        .await?;
    Ok(Json(created))
}

async fn reply(
    State(state): State<AppState>,
    query: Result<Query<ReplyQuery>, QueryRejection>,
) -> Result<Json<Created>, ApiError> {
    let Query(query) = query?;
    let created = state
        .control
        .reply_to_comment(&query.post_id, &query.comment_id, &query.message)
        .await?;
    Ok(Json(created))
}

async fn list_posts(State(state): State<AppState>) -> Result<Json<Listing<Post>>, ApiError> {
    Ok(Json(state.control.get_page_posts().await?))
}

async fn post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Listing<Comment>>, ApiError> {
    Ok(Json(state.control.get_post_comments(&post_id).await?))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<OperationStatus>, ApiError> {
    Ok(Json(state.control.delete_post(&post_id).await?))
}

async fn post_insights(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Insights>, ApiError> {
    Ok(Json(state.control.get_post_insights(&post_id).await?))
}

async fn post_reactions(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<ReactionBreakdown>, ApiError> {
    Ok(Json(state.control.get_post_reactions_breakdown(&post_id).await?))
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<Json<OperationStatus>, ApiError> {
    Ok(Json(state.control.delete_comment(&comment_id).await?))
}

async fn hide_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<Json<OperationStatus>, ApiError> {
    Ok(Json(state.control.hide_comment(&comment_id).await?))
}

async fn send_message(
    State(state): State<AppState>,
    query: Result<Query<MessageQuery>, QueryRejection>,
) -> Result<Json<MessageReceipt>, ApiError> {
    let Query(query) = query?;
    let receipt = state
        .control
        .send_dm_to_user(&query.user_id, &query.message)
        .await?;
    Ok(Json(receipt))
}

async fn page_stats(State(state): State<AppState>) -> Result<Json<PageStats>, ApiError> {
    let fan_count = state.control.get_page_fan_count().await?;
    Ok(Json(PageStats { fan_count }))
}
