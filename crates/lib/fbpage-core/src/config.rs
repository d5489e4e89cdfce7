use crate::error::GraphError;

pub const GRAPH_API_HOST: &str = "https://graph.facebook.com";
pub const DEFAULT_GRAPH_API_VERSION: &str = "v22.0";

pub const ACCESS_TOKEN_SETTING: &str = "FACEBOOK_PAGE_ACCESS_TOKEN";
pub const LEGACY_ACCESS_TOKEN_SETTING: &str = "FACEBOOK_ACCESS_TOKEN";
pub const PAGE_ID_SETTING: &str = "FACEBOOK_PAGE_ID";

/// Immutable Graph API settings shared by every forwarded call.
///
/// Credentials are optional here; a missing token or page id is reported by
/// the first operation that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    api_version: String,
    base_url: String,
    access_token: Option<String>,
    page_id: Option<String>,
}

impl GraphConfig {
    /// Builds a configuration against the public Graph API host.
    #[must_use]
    pub fn new(api_version: impl Into<String>) -> Self {
        let api_version = api_version.into();
        let base_url = format!("{GRAPH_API_HOST}/{api_version}");
        Self {
            api_version,
            base_url,
            access_token: None,
            page_id: None,
        }
    }

    #[must_use]
    pub fn with_access_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = non_blank(access_token);
        self
    }

    #[must_use]
    pub fn with_page_id(mut self, page_id: Option<String>) -> Self {
        self.page_id = non_blank(page_id);
        self
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns the configured access token.
    ///
    /// # Errors
    /// Returns `GraphError::MissingSetting` when no token was configured.
    pub fn access_token(&self) -> Result<&str, GraphError> {
        self.access_token
            .as_deref()
            .ok_or(GraphError::MissingSetting(ACCESS_TOKEN_SETTING))
    }

    /// Returns the configured page id.
    ///
    /// # Errors
    /// Returns `GraphError::MissingSetting` when no page id was configured.
    pub fn page_id(&self) -> Result<&str, GraphError> {
        self.page_id
            .as_deref()
            .ok_or(GraphError::MissingSetting(PAGE_ID_SETTING))
    }

    /// Joins an endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_API_VERSION)
    }
}

/// Picks the current token name first, then the legacy one.
#[must_use]
pub fn resolve_access_token(current: Option<String>, legacy: Option<String>) -> Option<String> {
    non_blank(current).or_else(|| non_blank(legacy))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
