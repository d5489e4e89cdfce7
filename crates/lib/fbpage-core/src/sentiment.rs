//! Keyword flagging for comment moderation.
//!
//! A literal, case-insensitive substring test against a fixed keyword list. It
//! makes no attempt at linguistic analysis.

use fbpage_types::models::Comment;
use fbpage_types::schema::NEGATIVE_KEYWORDS;

/// True when the comment text contains any negative keyword.
#[must_use]
pub fn is_negative(comment: &Comment) -> bool {
    let Some(message) = comment.message.as_deref() else {
        return false;
    };
    let lowered = message.to_lowercase();
    NEGATIVE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Returns the flagged comments, preserving input order.
#[must_use]
pub fn filter_negative(comments: &[Comment]) -> Vec<Comment> {
    comments
        .iter()
        .filter(|comment| is_negative(comment))
        .cloned()
        .collect()
}
