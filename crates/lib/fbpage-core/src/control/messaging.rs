use fbpage_types::models::MessageReceipt;
use fbpage_types::schema::{MESSAGES_ENDPOINT, MESSAGING_TYPE_RESPONSE};
use serde_json::json;

use super::PageControlPlane;
use crate::error::GraphError;
use crate::graph::GraphMethod;

impl PageControlPlane {
    /// Sends a Messenger text message to a user as a response message.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn send_dm_to_user(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<MessageReceipt, GraphError> {
        let request = self
            .request(GraphMethod::Post, MESSAGES_ENDPOINT)?
            .with_json(json!({
                "recipient": { "id": user_id },
                "message": { "text": message },
                "messaging_type": MESSAGING_TYPE_RESPONSE,
            }));
        self.send(request).await
    }
}
