//! HTTP client wrapper for Supernote API and storage requests.

use crate::error::{CloudError, Result};
use reqwest::{Client, StatusCode};

/// HTTP client for making requests to Supernote servers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new HTTP client with a proxy.
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| CloudError::Config(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| CloudError::Config(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body.
    ///
    /// # Arguments
    /// * `url` - URL to post to
    /// * `headers` - Headers to attach, in order
    /// * `body` - JSON body as string
    ///
    /// # Returns
    /// Status code and response body. A non-2xx status is not an error here;
    /// the API reports failures inside the body.
    pub async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<(StatusCode, String)> {
        let mut request = self.client.post(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        Ok((status, response.text().await?))
    }

    /// Make a PUT request with a raw byte body.
    ///
    /// Used for direct transfers to pre-signed storage URLs.
    pub async fn put_bytes(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: Vec<u8>,
    ) -> Result<StatusCode> {
        let mut request = self.client.put(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.body(body).send().await?;
        Ok(response.status())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
