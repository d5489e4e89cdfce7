use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::graph::{ACCESS_TOKEN_PARAM, GraphMethod, GraphRequest, GraphTransport, ReqwestTransport};

pub mod comments;
pub mod insights;
pub mod messaging;
pub mod posts;

/// Translates page operations into Graph API calls.
///
/// Cloning is cheap; clones share the configuration and transport.
pub struct PageControlPlane {
    config: Arc<GraphConfig>,
    transport: Arc<dyn GraphTransport>,
}

impl Clone for PageControlPlane {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl PageControlPlane {
    #[must_use]
    pub fn new(config: GraphConfig, transport: Arc<dyn GraphTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Builds a control plane that talks to the live Graph API.
    ///
    /// # Errors
    /// Returns `GraphError::Transport` if the HTTP client cannot be created.
    pub fn with_reqwest(config: GraphConfig) -> Result<Self, GraphError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub(crate) fn page_id(&self) -> Result<&str, GraphError> {
        self.config.page_id()
    }

    /// Starts a request for `path` with the access token attached.
    pub(crate) fn request(&self, method: GraphMethod, path: &str) -> Result<GraphRequest, GraphError> {
        let token = self.config.access_token()?;
        Ok(GraphRequest::new(method, self.config.endpoint(path)).with_query(ACCESS_TOKEN_PARAM, token))
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, request: GraphRequest) -> Result<T, GraphError> {
        debug!(method = request.method.as_str(), url = %request.url, "graph request");
        let payload = self.transport.execute(request).await?;
        Ok(serde_json::from_value(payload)?)
    }
}
