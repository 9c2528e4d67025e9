//! # supernote-cloud
//!
//! Rust client library for Supernote cloud storage.
//!
//! ## Features
//!
//! - **Authentication**: Login with account and password through the
//!   challenge-code flow.
//! - **Browsing**: List the first page of a folder (newest first) and look up
//!   entries by name.
//! - **Uploads**: Upload files or in-memory data with the service's
//!   apply/transfer/finish protocol, sending bytes straight to signed storage.
//!
//! The client is stateless. [`CloudClient::login`] returns a session token
//! that the caller keeps and passes to every other operation. Rejections by
//! the service are returned in-band: `None` for a refused login or listing,
//! `false` for a failed upload. Only transport, JSON and local I/O failures
//! are errors.
//!
//! ## Example
//!
//! ```no_run
//! use supernote_cloud::CloudClient;
//!
//! # async fn example() -> supernote_cloud::Result<()> {
//! let client = CloudClient::new();
//! let token = client
//!     .login("user@example.com", "password")
//!     .await?
//!     .expect("login rejected");
//!
//! // Upload into the "Document" folder
//! let folder = client.find_entry(&token, None, "Document").await?;
//! let folder_id = folder.as_ref().map(|f| f.id.as_str());
//! let ok = client.upload_file(&token, "example.pdf", folder_id).await?;
//! println!("upload succeeded: {}", ok);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod crypto;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{CloudError, Result};
pub use fs::{FileEntry, UploadDescriptor};
pub use session::CloudClient;
