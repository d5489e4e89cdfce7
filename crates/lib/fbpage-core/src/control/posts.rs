use fbpage_types::models::{Created, Listing, OperationStatus, Post};
use fbpage_types::schema::{FAN_COUNT_FIELDS, LIKES_SUMMARY_FIELDS, POST_FIELDS, SHARES_FIELDS};
use serde::Deserialize;

use super::PageControlPlane;
use crate::error::GraphError;
use crate::graph::GraphMethod;

#[derive(Debug, Deserialize)]
struct LikesField {
    #[serde(default)]
    likes: Option<LikesEdge>,
}

#[derive(Debug, Deserialize)]
struct LikesEdge {
    #[serde(default)]
    summary: Option<LikesSummary>,
}

#[derive(Debug, Deserialize)]
struct LikesSummary {
    #[serde(default)]
    total_count: i64,
}

#[derive(Debug, Deserialize)]
struct SharesField {
    #[serde(default)]
    shares: Option<ShareCount>,
}

#[derive(Debug, Deserialize)]
struct ShareCount {
    #[serde(default)]
    count: i64,
}

#[derive(Debug, Deserialize)]
struct FanCountField {
    #[serde(default)]
    fan_count: i64,
}

impl PageControlPlane {
    /// Publishes a text post on the page feed.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn post_to_facebook(&self, message: &str) -> Result<Created, GraphError> {
        let path = format!("{}/feed", self.page_id()?);
        let request = self
            .request(GraphMethod::Post, &path)?
            .with_form("message", message);
        self.send(request).await
    }

    /// Publishes a photo by URL with a caption. The URL is not checked locally.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn post_image_to_facebook(
        &self,
        image_url: &str,
        caption: &str,
    ) -> Result<Created, GraphError> {
        let path = format!("{}/photos", self.page_id()?);
        let request = self
            .request(GraphMethod::Post, &path)?
            .with_form("url", image_url)
            .with_form("caption", caption);
        self.send(request).await
    }

    /// Creates an unpublished post scheduled for `publish_time` (unix seconds).
    ///
    /// The timestamp goes to the Graph API as given; a past time is rejected
    /// remotely, not here.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn schedule_post(
        &self,
        message: &str,
        publish_time: i64,
    ) -> Result<Created, GraphError> {
        let path = format!("{}/feed", self.page_id()?);
        let request = self
            .request(GraphMethod::Post, &path)?
            .with_form("message", message)
            .with_form("published", "false")
            .with_form("scheduled_publish_time", publish_time.to_string());
        self.send(request).await
    }

    /// Replaces the message of an existing post.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn update_post(
        &self,
        post_id: &str,
        new_message: &str,
    ) -> Result<OperationStatus, GraphError> {
        let request = self
            .request(GraphMethod::Post, post_id)?
            .with_form("message", new_message);
        self.send(request).await
    }

    /// Deletes a post.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn delete_post(&self, post_id: &str) -> Result<OperationStatus, GraphError> {
        let request = self.request(GraphMethod::Delete, post_id)?;
        self.send(request).await
    }

    /// Lists the most recent posts on the page.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_page_posts(&self) -> Result<Listing<Post>, GraphError> {
        let path = format!("{}/posts", self.page_id()?);
        let request = self
            .request(GraphMethod::Get, &path)?
            .with_query("fields", POST_FIELDS);
        self.send(request).await
    }

    /// Total like count from the post's likes summary.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_number_of_likes(&self, post_id: &str) -> Result<i64, GraphError> {
        let request = self
            .request(GraphMethod::Get, post_id)?
            .with_query("fields", LIKES_SUMMARY_FIELDS);
        let field: LikesField = self.send(request).await?;
        Ok(field
            .likes
            .and_then(|likes| likes.summary)
            .map_or(0, |summary| summary.total_count))
    }

    /// Share count of a post; posts that were never shared report zero.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_post_share_count(&self, post_id: &str) -> Result<i64, GraphError> {
        let request = self
            .request(GraphMethod::Get, post_id)?
            .with_query("fields", SHARES_FIELDS);
        let field: SharesField = self.send(request).await?;
        Ok(field.shares.map_or(0, |shares| shares.count))
    }

    /// Total fan count of the page.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_page_fan_count(&self) -> Result<i64, GraphError> {
        let page_id = self.page_id()?;
        let request = self
            .request(GraphMethod::Get, page_id)?
            .with_query("fields", FAN_COUNT_FIELDS);
        let field: FanCountField = self.send(request).await?;
        Ok(field.fan_count)
    }
}
