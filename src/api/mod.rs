//! Supernote API client and wire types.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{ApplyResponse, FinishResponse, ListResponse, LoginResponse, RandomCodeResponse};
