//! Request nonces for upload signing.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Current Unix time in milliseconds, as a decimal string.
pub fn timestamp_millis() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
        .to_string()
}

/// Build an upload nonce: one random decimal digit followed by `timestamp`.
///
/// # Example
/// ```
/// use supernote_cloud::crypto::make_nonce;
/// let nonce = make_nonce("1700000000000");
/// assert_eq!(nonce.len(), 14);
/// assert!(nonce.ends_with("1700000000000"));
/// ```
pub fn make_nonce(timestamp: &str) -> String {
    let digit: u8 = rand::thread_rng().gen_range(0..10);
    format!("{}{}", digit, timestamp)
}
