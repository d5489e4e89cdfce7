use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::Deserialize;
use serde_json::Value;

use super::{GraphBody, GraphMethod, GraphRequest, GraphTransport};
use crate::error::GraphError;

/// Graph transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with the crate user agent and the transport's default timeouts.
    ///
    /// # Errors
    /// Returns `GraphError::Transport` if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, GraphError> {
        let client = Client::builder()
            .user_agent(concat!("fbpage-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GraphTransport for ReqwestTransport {
    async fn execute(&self, request: GraphRequest) -> Result<Value, GraphError> {
        let method = match request.method {
            GraphMethod::Get => Method::GET,
            GraphMethod::Post => Method::POST,
            GraphMethod::Delete => Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url).query(&request.query);
        builder = match request.body {
            GraphBody::Empty => builder,
            GraphBody::Form(fields) => builder.form(&fields),
            GraphBody::Json(body) => builder.json(&body),
        };

        let response = builder.send().await?;
        decode_response(response).await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<i64>,
}

async fn decode_response(response: Response) -> Result<Value, GraphError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &text));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

fn api_error(status: u16, body: &str) -> GraphError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => GraphError::Api {
            status,
            code: envelope.error.code,
            message: envelope
                .error
                .message
                .unwrap_or_else(|| body.to_string()),
        },
        Err(_) => GraphError::Api {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}
