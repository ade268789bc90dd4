//! REST client for the Vultr v2 API.
//!
//! Covers what the provider's data sources read: client configuration,
//! cursor-based list pagination, and the startup-script endpoints.

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod startup_scripts;

pub use client::VultrClient;
pub use config::ClientConfig;
pub use error::ApiError;
