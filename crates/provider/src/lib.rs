//! `vultr-provider` library crate.
//!
//! Data sources of the Vultr provider. The binary entrypoint in
//! `main.rs` runs a single lookup from the command line.

pub mod datasources;
pub mod error;

pub use error::LookupError;
