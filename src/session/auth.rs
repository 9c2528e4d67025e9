use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::api::types::log_service_failure;
use crate::api::{LoginResponse, RandomCodeResponse};
use crate::config::{COUNTRY_CODE, LOGIN_BROWSER, LOGIN_EQUIPMENT, LOGIN_LANGUAGE, LOGIN_METHOD};
use crate::crypto::login_password_hash;
use crate::error::Result;

use super::client::CloudClient;

const RANDOM_CODE_ENDPOINT: &str = "official/user/query/random/code";
const LOGIN_ENDPOINT: &str = "official/user/account/login/new";

impl CloudClient {
    /// Login with account (e-mail) and password.
    ///
    /// Requests a one-time challenge code for the account, then submits
    /// `sha256(md5(password) + code)` together with the server timestamp.
    ///
    /// # Returns
    /// The session token, or `None` if the service rejected the login. The
    /// account and password are not validated locally.
    ///
    /// # Example
    /// ```no_run
    /// use supernote_cloud::CloudClient;
    ///
    /// # async fn example() -> supernote_cloud::Result<()> {
    /// let client = CloudClient::new();
    /// match client.login("user@example.com", "password").await? {
    ///     Some(_token) => println!("logged in"),
    ///     None => println!("login rejected"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&self, account: &str, password: &str) -> Result<Option<String>> {
        let challenge = self.random_code(account).await?;
        let Some(random_code) = challenge.random_code else {
            warn!("no challenge code issued, login not attempted");
            return Ok(None);
        };

        self.access_token(account, password, &random_code, challenge.timestamp)
            .await
    }

    /// Step 1: fetch the challenge code and server timestamp.
    async fn random_code(&self, account: &str) -> Result<RandomCodeResponse> {
        let response = self
            .api()
            .post(
                RANDOM_CODE_ENDPOINT,
                &json!({
                    "countryCode": COUNTRY_CODE,
                    "account": account,
                }),
                None,
                &[],
            )
            .await?;

        let parsed: RandomCodeResponse = serde_json::from_value(response.clone())?;
        if parsed.random_code.is_none() {
            log_service_failure(RANDOM_CODE_ENDPOINT, &response);
        }
        Ok(parsed)
    }

    /// Step 2: exchange the hashed credential for a session token.
    async fn access_token(
        &self,
        account: &str,
        password: &str,
        random_code: &str,
        timestamp: Value,
    ) -> Result<Option<String>> {
        let response = self
            .api()
            .post(
                LOGIN_ENDPOINT,
                &json!({
                    "countryCode": COUNTRY_CODE,
                    "browser": LOGIN_BROWSER,
                    "equipment": LOGIN_EQUIPMENT,
                    "loginMethod": LOGIN_METHOD,
                    "language": LOGIN_LANGUAGE,
                    "account": account,
                    "password": login_password_hash(password, random_code),
                    "timestamp": timestamp,
                }),
                None,
                &[],
            )
            .await?;

        let parsed: LoginResponse = serde_json::from_value(response.clone())?;
        let token = parsed.token.filter(|t| !t.is_empty());
        match &token {
            Some(_) => debug!("login accepted"),
            None => log_service_failure(LOGIN_ENDPOINT, &response),
        }
        Ok(token)
    }
}
