use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::metrics::{Metric, Reaction};

/// A Graph API edge listing (`{"data": [...], "paging": {...}}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Value>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            paging: None,
        }
    }
}

/// Author reference attached to comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A Page post as returned by the posts edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A comment on a post or a reply to another comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// Author id, when the Graph API disclosed one.
    #[must_use]
    pub fn author_id(&self) -> Option<&str> {
        self.from.as_ref().and_then(|author| author.id.as_deref())
    }
}

/// Result of a create call (feed post, photo, reply).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Created {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

/// Result of an update or delete call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationStatus {
    pub success: bool,
}

/// Result of a Messenger send call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// One value sample of an insight metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricValue {
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One metric entry of an insights listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightMetric {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default)]
    pub values: Vec<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl InsightMetric {
    /// First reported sample as an integer count; non-numeric samples count as zero.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.values
            .first()
            .and_then(|sample| sample.value.as_i64())
            .unwrap_or(0)
    }
}

pub type Insights = Listing<InsightMetric>;

impl Listing<InsightMetric> {
    /// Count reported for `metric`, or zero when the metric is absent.
    #[must_use]
    pub fn count_for(&self, metric: Metric) -> i64 {
        self.data
            .iter()
            .find(|entry| entry.name == metric.as_str())
            .map_or(0, InsightMetric::count)
    }
}

/// Reaction counts for a post keyed by reaction type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReactionBreakdown {
    pub like: i64,
    pub love: i64,
    pub wow: i64,
    pub haha: i64,
    pub sorry: i64,
    pub anger: i64,
}

impl ReactionBreakdown {
    pub const fn set(&mut self, reaction: Reaction, count: i64) {
        match reaction {
            Reaction::Like => self.like = count,
            Reaction::Love => self.love = count,
            Reaction::Wow => self.wow = count,
            Reaction::Haha => self.haha = count,
            Reaction::Sorry => self.sorry = count,
            Reaction::Anger => self.anger = count,
        }
    }
}

/// Comment tally for a single author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommenterCount {
    pub user_id: String,
    pub count: usize,
}

/// Page-level statistics served by the stats endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageStats {
    pub fan_count: i64,
}

/// Outcome of one identifier inside a bulk operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BulkOutcome {
    Succeeded { result: OperationStatus },
    Failed { error: String },
}

/// Per-identifier entry of a bulk delete or hide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkItemResult {
    pub comment_id: String,
    #[serde(flatten)]
    pub outcome: BulkOutcome,
}

impl BulkItemResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, BulkOutcome::Succeeded { .. })
    }
}
