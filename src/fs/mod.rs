//! Folder listing and file upload.

pub(crate) mod entry;
mod operations;
pub(crate) mod upload_descriptor;

pub use entry::FileEntry;
pub use upload_descriptor::{UNSIGNED_PAYLOAD, UploadDescriptor, UploadTarget};
