//! Domain types shared by the Vultr provider crates.
//!
//! Nothing in here performs I/O: filters and their matching rules, the
//! declarative attribute schema, the resource-data container that a
//! data source writes its outputs into, and the diagnostics surfaced to
//! the configuration caller.

pub mod diagnostics;
pub mod filter;
pub mod resource_data;
pub mod schema;
