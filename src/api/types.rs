//! Response bodies of the Supernote API.
//!
//! Every field is optional or defaulted: a rejected request still decodes,
//! with the missing fields left empty, and the caller checks them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::fs::FileEntry;

/// Response of `official/user/query/random/code`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RandomCodeResponse {
    /// One-time challenge code mixed into the password hash.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub random_code: Option<String>,
    /// Server timestamp, echoed back verbatim on login.
    pub timestamp: Value,
}

/// Response of `official/user/account/login/new`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    #[serde(deserialize_with = "lenient_bool")]
    pub success: bool,
    /// Session token; absent when the login was rejected.
    #[serde(deserialize_with = "opt_string")]
    pub token: Option<String>,
}

/// Response of `file/list/query`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListResponse {
    #[serde(deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(rename = "userFileVOList")]
    pub user_file_vo_list: Option<Vec<FileEntry>>,
}

/// Response of `file/upload/apply`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyResponse {
    #[serde(deserialize_with = "lenient_bool")]
    pub success: bool,
    /// Pre-signed storage URL; its last path segment is the inner name.
    #[serde(deserialize_with = "opt_string")]
    pub url: Option<String>,
    /// `Authorization` header value for the storage PUT.
    #[serde(deserialize_with = "opt_string")]
    pub s3_authorization: Option<String>,
    /// `x-amz-date` header value for the storage PUT.
    #[serde(deserialize_with = "opt_string")]
    pub xamz_date: Option<String>,
}

/// Response of `file/upload/finish`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinishResponse {
    #[serde(deserialize_with = "lenient_bool")]
    pub success: bool,
}

/// Log the service's own error fields when a response reports failure.
pub(crate) fn log_service_failure(endpoint: &str, response: &Value) {
    let field = |key: &str| match response.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    };
    warn!(
        endpoint,
        error_code = %field("errorCode"),
        error_msg = %field("errorMsg"),
        "service reported failure"
    );
}

/// Only `true` is true; `null`, missing or any other value reads as `false`.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// A JSON string, or `None` for anything else.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A number or numeric string as `u64`; anything else reads as 0.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_lenient_i64(deserializer)?
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or_default())
}

/// A number or numeric string as `i64`, or `None`.
pub(crate) fn opt_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a JSON string or number, stringifying numbers.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Like [`opt_string_or_number`], mapping anything else to an empty string.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}
