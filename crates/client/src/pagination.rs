//! Cursor-based pagination shared by Vultr list endpoints.

use serde::{Deserialize, Serialize};

/// Query options for a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Page size. `None` uses the client's configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Opaque cursor from a previous page's `meta.links.next`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cursor: String,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }
}

/// `meta` object of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub links: Links,
}

impl Meta {
    /// Cursor of the next page, or `None` on the last page.
    pub fn next_cursor(&self) -> Option<&str> {
        let next = self.links.next.as_str();
        (!next.is_empty()).then_some(next)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: String,
    #[serde(default)]
    pub prev: String,
}
