#![forbid(unsafe_code)]

//! Authenticated HTTP client for the put.io API.
//!
//! Every endpoint wrapper is one request, one decode, one model. The
//! temporal behaviour lives in `skiff-monitor`, for which [`ApiClient`] is
//! the production [`skiff_monitor::TransferSource`].
//!
//! Layout:
//! - `client.rs`: shared HTTP plumbing, authentication context, config
//! - `error.rs`: the [`ApiError`] taxonomy
//! - `transfers.rs`, `files.rs`, `shares.rs`, `friends.rs`, `events.rs`,
//!   `account.rs`: endpoint wrappers by concern
//! - `oauth.rs`: OAuth sign-in URL construction and code exchange
//!
//! Authentication is an explicitly passed [`AuthContext`] value; the crate
//! keeps no process-wide credential state, so any component holding an
//! `ApiClient` is trivially substitutable in tests.

pub mod account;
pub mod client;
pub mod error;
pub mod events;
pub mod files;
pub mod friends;
pub mod oauth;
pub mod shares;
pub mod transfers;

pub use client::{ApiClient, AuthContext, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use files::FolderListing;
pub use oauth::{OauthConfig, OauthFlow};
