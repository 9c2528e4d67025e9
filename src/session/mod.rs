//! Cloud client and authentication.

mod auth;
mod client;

pub use client::CloudClient;

#[cfg(test)]
pub(crate) use client::client_for;
