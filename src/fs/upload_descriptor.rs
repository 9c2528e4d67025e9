//! Per-upload state for the apply/transfer/finish protocol.
//!
//! An [`UploadDescriptor`] is built fresh for each upload call and dropped
//! when the call returns. Nothing here is persisted.

use serde_json::{Value, json};

use crate::api::ApplyResponse;
use crate::crypto::{make_nonce, md5_hex, timestamp_millis};

/// Marker sent as `x-amz-content-sha256` on the storage PUT.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Signed storage target handed out by the apply step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    /// Pre-signed URL to PUT the bytes to.
    pub url: String,
    /// `Authorization` header value.
    pub authorization: String,
    /// `x-amz-date` header value.
    pub amz_date: String,
}

impl UploadTarget {
    /// Headers for the direct storage PUT.
    pub fn transfer_headers(&self) -> [(&str, &str); 3] {
        [
            ("Authorization", self.authorization.as_str()),
            ("x-amz-date", self.amz_date.as_str()),
            ("x-amz-content-sha256", UNSIGNED_PAYLOAD),
        ]
    }
}

/// Transient state of one upload.
#[derive(Debug, Clone)]
pub struct UploadDescriptor {
    /// Remote file name
    pub file_name: String,
    /// Size in bytes
    pub file_size: u64,
    /// MD5 hex digest of the content
    pub md5: String,
    /// Destination folder identifier
    pub directory_id: String,
    /// Millisecond timestamp sent with apply
    pub timestamp: String,
    /// Random digit followed by `timestamp`
    pub nonce: String,
    /// Storage name assigned by the server (last segment of the target URL)
    pub inner_name: String,
    /// Where to PUT the bytes, once apply has succeeded
    pub target: Option<UploadTarget>,
}

impl UploadDescriptor {
    /// Describe an upload of `data` named `file_name` into `directory_id`.
    pub fn new(file_name: &str, data: &[u8], directory_id: &str) -> Self {
        let timestamp = timestamp_millis();
        let nonce = make_nonce(&timestamp);

        Self {
            file_name: file_name.to_string(),
            file_size: data.len() as u64,
            md5: md5_hex(data),
            directory_id: directory_id.to_string(),
            timestamp,
            nonce,
            inner_name: String::new(),
            target: None,
        }
    }

    /// Body of the `file/upload/apply` request.
    pub fn apply_payload(&self) -> Value {
        json!({
            "directoryId": self.directory_id,
            "fileName": self.file_name,
            "md5": self.md5,
            "size": self.file_size,
        })
    }

    /// Extra headers of the `file/upload/apply` request.
    pub fn signing_headers(&self) -> [(&str, &str); 2] {
        [
            ("nonce", self.nonce.as_str()),
            ("timestamp", self.timestamp.as_str()),
        ]
    }

    /// Take the inner name and, on success, the storage target from an
    /// apply response.
    ///
    /// The inner name is recorded even when apply failed, since finish is
    /// sent either way.
    pub fn record_apply(&mut self, response: &ApplyResponse) {
        let url = response.url.as_deref().unwrap_or_default();
        self.inner_name = inner_name_from_url(url).to_string();

        self.target = match (&response.url, response.success) {
            (Some(url), true) => Some(UploadTarget {
                url: url.clone(),
                authorization: response.s3_authorization.clone().unwrap_or_default(),
                amz_date: response.xamz_date.clone().unwrap_or_default(),
            }),
            _ => None,
        };
    }

    /// Body of the `file/upload/finish` request.
    pub fn finish_payload(&self) -> Value {
        json!({
            "directoryId": self.directory_id,
            "fileName": self.file_name,
            "fileSize": self.file_size,
            "innerName": self.inner_name,
            "md5": self.md5,
        })
    }
}

/// Last path segment of a storage URL, ignoring query and fragment.
pub(crate) fn inner_name_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
