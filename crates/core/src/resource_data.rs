//! Per-read container for a data source's inputs and outputs.
//!
//! [`ResourceData`] is bound to a [`Schema`]. Inputs (the `filter` block)
//! are supplied by the caller through [`ResourceData::with_filters`];
//! outputs are written by the data source with [`ResourceData::set`],
//! which rejects keys and value kinds the schema does not declare.

use std::collections::BTreeMap;

use crate::filter::FilterSet;
use crate::schema::{AttributeKind, AttributeMode, Schema};

/// Failure to write an output attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    #[error("attribute `{0}` is not declared in the schema")]
    UnknownAttribute(String),

    #[error("attribute `{0}` is not computed and cannot be set by the provider")]
    NotComputed(String),

    #[error("attribute `{name}` expects {expected:?}, got {actual:?}")]
    TypeMismatch {
        name: String,
        expected: AttributeKind,
        actual: AttributeKind,
    },
}

/// Inputs and outputs of a single data-source read.
#[derive(Debug, Clone)]
pub struct ResourceData {
    schema: Schema,
    id: Option<String>,
    filters: FilterSet,
    values: BTreeMap<&'static str, String>,
}

impl ResourceData {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            id: None,
            filters: FilterSet::default(),
            values: BTreeMap::new(),
        }
    }

    /// Attach the caller's `filter` block.
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Configured filter set. Empty when the caller supplied none.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the result key of the read.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Write a computed string attribute, validated against the schema.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), SetError> {
        let attribute = self
            .schema
            .attribute(key)
            .ok_or_else(|| SetError::UnknownAttribute(key.to_string()))?;

        if attribute.mode != AttributeMode::Computed {
            return Err(SetError::NotComputed(key.to_string()));
        }

        if attribute.kind != AttributeKind::String {
            return Err(SetError::TypeMismatch {
                name: key.to_string(),
                expected: attribute.kind,
                actual: AttributeKind::String,
            });
        }

        self.values.insert(attribute.name, value.into());
        Ok(())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Computed outputs plus `id`, as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        if let Some(id) = &self.id {
            map.insert("id".into(), serde_json::Value::String(id.clone()));
        }
        for (key, value) in &self.values {
            map.insert(key.to_string(), serde_json::Value::String(value.clone()));
        }
        serde_json::Value::Object(map)
    }
}
