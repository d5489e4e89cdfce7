use std::collections::HashMap;

use fbpage_types::models::{
    BulkItemResult,
    BulkOutcome,
    Comment,
    CommenterCount,
    Created,
    Listing,
    OperationStatus,
};
use fbpage_types::schema::COMMENT_FIELDS;

use super::PageControlPlane;
use crate::error::GraphError;
use crate::graph::GraphMethod;
use crate::sentiment;

impl PageControlPlane {
    /// Replies to a comment. `post_id` identifies the thread for callers; the
    /// reply itself is created on the comment's own edge.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn reply_to_comment(
        &self,
        _post_id: &str,
        comment_id: &str,
        message: &str,
    ) -> Result<Created, GraphError> {
        let path = format!("{comment_id}/comments");
        let request = self
            .request(GraphMethod::Post, &path)?
            .with_form("message", message);
        self.send(request).await
    }

    /// Lists the comments of a post.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_post_comments(&self, post_id: &str) -> Result<Listing<Comment>, GraphError> {
        let path = format!("{post_id}/comments");
        let request = self
            .request(GraphMethod::Get, &path)?
            .with_query("fields", COMMENT_FIELDS);
        self.send(request).await
    }

    /// Deletes a comment.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn delete_comment(&self, comment_id: &str) -> Result<OperationStatus, GraphError> {
        let request = self.request(GraphMethod::Delete, comment_id)?;
        self.send(request).await
    }

    /// Alias of [`Self::delete_comment`] for callers that address comments by post.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn delete_comment_from_post(
        &self,
        _post_id: &str,
        comment_id: &str,
    ) -> Result<OperationStatus, GraphError> {
        self.delete_comment(comment_id).await
    }

    /// Hides a comment from public view.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn hide_comment(&self, comment_id: &str) -> Result<OperationStatus, GraphError> {
        self.set_comment_hidden(comment_id, true).await
    }

    /// Restores a previously hidden comment.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn unhide_comment(&self, comment_id: &str) -> Result<OperationStatus, GraphError> {
        self.set_comment_hidden(comment_id, false).await
    }

    /// Deletes each comment independently. Always yields one entry per id.
    pub async fn bulk_delete_comments(&self, comment_ids: &[String]) -> Vec<BulkItemResult> {
        let mut results = Vec::with_capacity(comment_ids.len());
        for comment_id in comment_ids {
            let outcome = self.delete_comment(comment_id).await;
            results.push(bulk_item(comment_id, outcome));
        }
        results
    }

    /// Hides each comment independently. Always yields one entry per id.
    pub async fn bulk_hide_comments(&self, comment_ids: &[String]) -> Vec<BulkItemResult> {
        let mut results = Vec::with_capacity(comment_ids.len());
        for comment_id in comment_ids {
            let outcome = self.hide_comment(comment_id).await;
            results.push(bulk_item(comment_id, outcome));
        }
        results
    }

    /// Keeps the comments whose text contains a negative keyword. No remote call.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn filter_negative_comments(&self, comments: &Listing<Comment>) -> Vec<Comment> {
        sentiment::filter_negative(&comments.data)
    }

    /// Number of comments returned for a post.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_number_of_comments(&self, post_id: &str) -> Result<usize, GraphError> {
        Ok(self.get_post_comments(post_id).await?.data.len())
    }

    /// Authors of a post's comments ranked by how often they commented.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_post_top_commenters(
        &self,
        post_id: &str,
    ) -> Result<Vec<CommenterCount>, GraphError> {
        let comments = self.get_post_comments(post_id).await?;
        Ok(tally_commenters(&comments.data))
    }

    async fn set_comment_hidden(
        &self,
        comment_id: &str,
        hidden: bool,
    ) -> Result<OperationStatus, GraphError> {
        let request = self
            .request(GraphMethod::Post, comment_id)?
            .with_form("is_hidden", hidden.to_string());
        self.send(request).await
    }
}

fn bulk_item(comment_id: &str, outcome: Result<OperationStatus, GraphError>) -> BulkItemResult {
    let outcome = match outcome {
        Ok(result) => BulkOutcome::Succeeded { result },
        Err(err) => BulkOutcome::Failed {
            error: err.to_string(),
        },
    };
    BulkItemResult {
        comment_id: comment_id.to_string(),
        outcome,
    }
}

/// Counts comments per author, most active first; ties keep first-seen order.
#[must_use]
pub fn tally_commenters(comments: &[Comment]) -> Vec<CommenterCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CommenterCount> = Vec::new();
    for user_id in comments.iter().filter_map(Comment::author_id) {
        if let Some(&slot) = index.get(user_id) {
            counts[slot].count += 1;
        } else {
            index.insert(user_id, counts.len());
            counts.push(CommenterCount {
                user_id: user_id.to_string(),
                count: 1,
            });
        }
    }
    counts.sort_by(|left, right| right.count.cmp(&left.count));
    counts
}
