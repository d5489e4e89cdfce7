//! MCP tool modules.
//!
//! Tools are grouped by domain: post publishing, comment moderation,
//! counters and insights, and Messenger delivery.

pub mod comments;
pub mod insights;
pub mod messaging;
pub mod posts;
