//! Settings and export endpoints
//!
//! Backend collaborators consumed as black boxes: model selection, API key
//! validation, and session data export.

use tracing::debug;

use crate::SolaceClient;
use crate::error::Result;
use solace_core::domain::session::ChatModel;
use solace_core::dto::settings::{ApiKeyResponse, ApiKeyValidation, ModelUpdateResponse, SessionExport};

impl SolaceClient {
    /// Select the backend model for this session
    pub async fn update_model(&self, model: ChatModel) -> Result<()> {
        let response = self
            .post_form("api/update-model/", &[("model", model.wire_name())])
            .await?;

        let confirmation: ModelUpdateResponse = self.handle_response(response).await?;
        debug!(model = model.wire_name(), reply = %confirmation.response, "model updated");

        Ok(())
    }

    /// Submit an API key for validation
    ///
    /// The backend checks the key upstream and reports whether it
    /// authenticated and whether it has GPT-4 access. An invalid key is a
    /// normal outcome here, reported in the flags rather than as an error.
    pub async fn update_api_key(&self, api_key: &str) -> Result<ApiKeyValidation> {
        let response = self
            .post_form("api/update-api-key/", &[("api_key", api_key)])
            .await?;

        let envelope: ApiKeyResponse = self.handle_response(response).await?;
        Ok(envelope.response)
    }

    /// Fetch the stored session data as an opaque JSON blob
    pub async fn download_data(&self) -> Result<SessionExport> {
        let response = self.get("api/download-data/").await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_update_model_posts_wire_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/update-model/")
            .match_body(Matcher::UrlEncoded("model".into(), "GPT3.5".into()))
            .with_status(200)
            .with_body(r#"{"response": "Model updated"}"#)
            .create_async()
            .await;

        let client = SolaceClient::new(server.url());
        client.update_model(ChatModel::Gpt35).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_api_key_unwraps_validation_flags() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/update-api-key/")
            .match_body(Matcher::UrlEncoded("api_key".into(), "sk-test".into()))
            .with_status(200)
            .with_body(r#"{"response": {"api_key_valid": true, "gpt4": false}}"#)
            .create_async()
            .await;

        let client = SolaceClient::new(server.url());
        let validation = client.update_api_key("sk-test").await.unwrap();

        assert!(validation.api_key_valid);
        assert!(!validation.gpt4);
    }

    #[tokio::test]
    async fn test_download_data_returns_opaque_blob() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/download-data/")
            .with_status(200)
            .with_body(r#"{"response": {"messages": ["hi"], "only_fast_model": true}}"#)
            .create_async()
            .await;

        let client = SolaceClient::new(server.url());
        let export = client.download_data().await.unwrap();

        assert_eq!(export.response["only_fast_model"], true);
    }
}
