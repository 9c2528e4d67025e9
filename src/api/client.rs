//! Supernote API client with request/response handling.

use serde_json::Value;
use tracing::debug;

use crate::config::{ACCESS_TOKEN_HEADER, COMMON_HEADERS, ClientConfig};
use crate::error::Result;
use crate::http::HttpClient;

/// Supernote API client.
///
/// Holds no session: the access token is passed to every call that needs it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client against the production origin.
    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
            config: ClientConfig::default(),
        }
    }

    /// Create a new API client from a configuration.
    ///
    /// # Errors
    /// Returns [`crate::CloudError::Config`] if the configured proxy is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = match &config.proxy {
            Some(proxy) => HttpClient::with_proxy(proxy)?,
            None => HttpClient::new(),
        };
        Ok(Self { http, config })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying HTTP client, for requests outside the API origin.
    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// POST a JSON payload to an API endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - Path relative to the base URL (e.g. "file/list/query")
    /// * `payload` - JSON request body
    /// * `token` - Access token for authenticated endpoints
    /// * `extra_headers` - Additional headers such as signing metadata
    ///
    /// # Returns
    /// The decoded JSON body, whatever the HTTP status. Callers inspect
    /// service fields like `success` to learn the outcome.
    pub async fn post(
        &self,
        endpoint: &str,
        payload: &Value,
        token: Option<&str>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Value> {
        let url = self.config.endpoint_url(endpoint);

        let mut headers: Vec<(&str, &str)> = Vec::with_capacity(COMMON_HEADERS.len() + 4);
        headers.push(("User-Agent", self.config.user_agent.as_str()));
        headers.extend_from_slice(COMMON_HEADERS);
        headers.extend_from_slice(extra_headers);
        let token = token.filter(|t| !t.is_empty());
        if let Some(token) = token {
            headers.push((ACCESS_TOKEN_HEADER, token));
        }

        let body = serde_json::to_string(payload)?;
        debug!(endpoint, authenticated = token.is_some(), "api request");

        let (status, response_text) = self.http.post(&url, &headers, body).await?;
        debug!(
            endpoint,
            status = status.as_u16(),
            bytes = response_text.len(),
            "api response"
        );

        Ok(serde_json::from_str(&response_text)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudError;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        let config = ClientConfig::default().with_base_url(format!("{}/api/", server.url()));
        ApiClient::with_config(config).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new();
        assert_eq!(client.config(), &ClientConfig::default());
    }

    #[test]
    fn test_proxy_creation() {
        let config = ClientConfig::default().with_proxy("http://127.0.0.1:8080");
        assert!(ApiClient::with_config(config).is_ok());
    }

    #[tokio::test]
    async fn test_post_sends_common_headers_and_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/some/endpoint")
            .match_header("user-agent", crate::config::USER_AGENT)
            .match_header("content-type", "application/json")
            .match_header("x-access-token", "tok-123")
            .match_header("nonce", "51700000000000")
            .match_body(Matcher::Json(json!({"key": "value"})))
            .with_body(r#"{"success":true,"answer":42}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response = client
            .post(
                "some/endpoint",
                &json!({"key": "value"}),
                Some("tok-123"),
                &[("nonce", "51700000000000")],
            )
            .await
            .unwrap();

        assert_eq!(response["answer"], 42);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_without_token_omits_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/open")
            .match_header("x-access-token", Matcher::Missing)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        client.post("open", &json!({}), None, &[]).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_empty_token_omits_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/file/list/query")
            .match_header("x-access-token", Matcher::Missing)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .post("file/list/query", &json!({}), Some(""), &[])
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_returns_body_on_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/denied")
            .with_status(401)
            .with_body(r#"{"success":false,"errorCode":"E0712"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response = client.post("denied", &json!({}), None, &[]).await.unwrap();
        assert_eq!(response["success"], false);
        assert_eq!(response["errorCode"], "E0712");
    }

    #[tokio::test]
    async fn test_post_malformed_json_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/broken")
            .with_body("<html>gateway timeout</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.post("broken", &json!({}), None, &[]).await.unwrap_err();
        assert!(matches!(err, CloudError::JsonError(_)));
    }
}
