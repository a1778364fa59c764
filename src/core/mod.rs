//! Core components of the `checkin-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`CheckinClient`] and its builder.
//! - The primary [`CheckinError`] type.
//! - Internal networking helpers.

/// The main client (`CheckinClient`), builder, and configuration.
pub mod client;
/// The primary error type (`CheckinError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::CheckinClient`
pub use client::{CheckinClient, CheckinClientBuilder};
pub use error::CheckinError;
