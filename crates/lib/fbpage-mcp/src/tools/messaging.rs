use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{FacebookMcp, helpers};

/// Parameters for a direct message.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DirectMessageParams {
    /// Page-scoped id of the recipient.
    pub user_id: String,
    pub message: String,
}

#[tool_router(router = tool_router_messaging, vis = "pub")]
impl FacebookMcp {
    #[tool(description = "Send a direct message to a user who has messaged the Page. Returns the recipient and message ids.")]
    async fn send_dm_to_user(
        &self,
        Parameters(params): Parameters<DirectMessageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let receipt = self
            .control()
            .send_dm_to_user(&params.user_id, &params.message)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(receipt)
    }
}

#[cfg(test)]
mod tests {
    use fbpage_core::graph::GraphBody;
    use serde_json::{Value, json};

    use super::*;
    use crate::tests::{RecordingTransport, server, text_of};

    #[tokio::test]
    async fn direct_message_uses_response_messaging_type() {
        let transport = RecordingTransport::replying(vec![Ok(json!({
            "recipient_id": "u1",
            "message_id": "m.1"
        }))]);

        let result = server(&transport)
            .send_dm_to_user(Parameters(DirectMessageParams {
                user_id: "u1".to_string(),
                message: "thanks!".to_string(),
            }))
            .await
            .expect("dm sent");

        let body: Value = serde_json::from_str(&text_of(&result)).expect("json content");
        assert_eq!(body["message_id"], "m.1");

        let request = transport.last_request().expect("one request");
        assert!(request.url.ends_with("/me/messages"));
        let GraphBody::Json(payload) = request.body else {
            panic!("direct messages are sent as json");
        };
        assert_eq!(payload["recipient"]["id"], "u1");
        assert_eq!(payload["message"]["text"], "thanks!");
        assert_eq!(payload["messaging_type"], "RESPONSE");
    }
}
