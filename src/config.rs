//! Client configuration and fixed protocol constants.

/// Base URL for the Supernote cloud API.
pub const API_URL: &str = "https://cloud.supernote.com/api/";

/// User agent the web client identifies itself with.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36";

/// Headers attached to every API request (user agent is added from config).
pub const COMMON_HEADERS: &[(&str, &str)] = &[("Content-Type", "application/json")];

/// Header carrying the session token on authenticated requests.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Identifier of the root folder.
pub const ROOT_DIRECTORY_ID: &str = "0";

/// Country code sent with every login request.
pub const COUNTRY_CODE: &str = "93";

/// Browser fingerprint sent with the login request.
pub const LOGIN_BROWSER: &str = "Chrome107";

/// Device type sent with the login request.
pub const LOGIN_EQUIPMENT: &str = "1";

/// Login method sent with the login request.
pub const LOGIN_METHOD: &str = "1";

/// Language sent with the login request.
pub const LOGIN_LANGUAGE: &str = "en";

/// Configuration for a [`CloudClient`](crate::CloudClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin; endpoint paths are appended to it.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Optional proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080").
    pub proxy: Option<String>,
}

impl ClientConfig {
    /// Point the client at a different API origin.
    ///
    /// A trailing slash is added when missing so endpoint paths join cleanly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Route all requests through a proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Full URL for an endpoint path relative to the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            proxy: None,
        }
    }
}
