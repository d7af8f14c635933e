//! # cg-github
//!
//! Remote content gateway for codeguess.
//!
//! - [`GithubClient`]: raw `contents` API client (listings and base64 files,
//!   rate-limit classification from response headers).
//! - [`Gateway`]: cache-first wrapper that enforces the per-request
//!   [`cg_core::budget::ApiBudget`] and falls back to cached content when the
//!   budget is spent.
//! - [`RemoteContent`]: the seam between the two.

mod client;
mod error;
mod gateway;
mod http;
mod remote;

pub use client::GithubClient;
pub use error::GatewayError;
pub use gateway::Gateway;
pub use remote::RemoteContent;
