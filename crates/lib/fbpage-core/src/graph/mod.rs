//! Graph API request model and transport seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GraphError;

mod http;

pub use http::ReqwestTransport;

pub const ACCESS_TOKEN_PARAM: &str = "access_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMethod {
    Get,
    Post,
    Delete,
}

impl GraphMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GraphBody {
    Empty,
    Form(Vec<(String, String)>),
    Json(Value),
}

/// One outbound Graph API call.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    pub method: GraphMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: GraphBody,
}

impl GraphRequest {
    #[must_use]
    pub const fn new(method: GraphMethod, url: String) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            body: GraphBody::Empty,
        }
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Appends a form field, switching the body to a form if needed.
    #[must_use]
    pub fn with_form(mut self, key: &str, value: impl Into<String>) -> Self {
        let pair = (key.to_string(), value.into());
        match &mut self.body {
            GraphBody::Form(fields) => fields.push(pair),
            body => *body = GraphBody::Form(vec![pair]),
        }
        self
    }

    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = GraphBody::Json(body);
        self
    }

    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        lookup(&self.query, key)
    }

    #[must_use]
    pub fn form_value(&self, key: &str) -> Option<&str> {
        match &self.body {
            GraphBody::Form(fields) => lookup(fields, key),
            GraphBody::Empty | GraphBody::Json(_) => None,
        }
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Executes Graph API requests and returns the decoded JSON payload.
#[async_trait]
pub trait GraphTransport: Send + Sync {
    /// Sends `request` and decodes the response body.
    ///
    /// # Errors
    /// Returns `GraphError::Api` for non-success statuses and
    /// `GraphError::Transport` when the remote host could not be reached.
    async fn execute(&self, request: GraphRequest) -> Result<Value, GraphError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_accumulate() {
        let request = GraphRequest::new(GraphMethod::Post, "https://example/feed".to_string())
            .with_form("message", "hi")
            .with_form("published", "false");

        assert_eq!(request.form_value("message"), Some("hi"));
        assert_eq!(request.form_value("published"), Some("false"));
        assert_eq!(request.query_value("message"), None);
    }
}
