//! The stateless Supernote cloud client.

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;

/// Client for the Supernote cloud.
///
/// The client carries configuration and a pooled HTTP connection only. The
/// session token returned by [`CloudClient::login`] is held by the caller and
/// passed to each authenticated operation, so one client can serve any
/// number of sessions concurrently.
///
/// # Example
/// ```no_run
/// use supernote_cloud::CloudClient;
///
/// # async fn example() -> supernote_cloud::Result<()> {
/// let client = CloudClient::new();
/// let Some(token) = client.login("user@example.com", "password").await? else {
///     eprintln!("login rejected");
///     return Ok(());
/// };
///
/// if let Some(entries) = client.list_folder(&token, None).await? {
///     for entry in entries {
///         println!("{} ({})", entry.file_name, entry.id);
///     }
/// }
///
/// let ok = client.upload_file(&token, "notes.pdf", None).await?;
/// println!("upload finished: {}", ok);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CloudClient {
    api: ApiClient,
}

impl CloudClient {
    /// Create a client for the production service.
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Create a client from a configuration.
    ///
    /// # Errors
    /// Returns [`crate::CloudError::Config`] if the configured proxy is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::with_config(config)?,
        })
    }

    /// Create a client that routes all requests through an HTTP proxy.
    ///
    /// # Arguments
    /// * `proxy` - Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080")
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_proxy(proxy))
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        self.api.config()
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }
}

/// Client pointed at a mock server whose API lives under `/api/`.
#[cfg(test)]
pub(crate) fn client_for(server: &mockito::ServerGuard) -> CloudClient {
    let config = ClientConfig::default().with_base_url(format!("{}/api/", server.url()));
    CloudClient::with_config(config).unwrap()
}
