//! Declarative attribute schema for data sources.
//!
//! Mirrors the subset of the plugin framework's schema that the data
//! sources in this workspace need: each attribute has a name, a value
//! kind, and whether the caller supplies it or the provider computes it.

/// Value kind of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    /// A set of `{ name, values }` filter blocks.
    FilterSet,
}

/// Who populates an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Supplied by the caller, never written by the provider.
    Optional,
    /// Written by the provider during read.
    Computed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
}

impl Attribute {
    pub const fn computed_string(name: &'static str) -> Self {
        Self {
            name,
            kind: AttributeKind::String,
            mode: AttributeMode::Computed,
        }
    }

    /// The caller-supplied `filter` block.
    pub const fn filter() -> Self {
        Self {
            name: "filter",
            kind: AttributeKind::FilterSet,
            mode: AttributeMode::Optional,
        }
    }
}

/// Attribute table for one data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Names of all computed attributes, in declaration order.
    pub fn computed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes
            .iter()
            .filter(|a| a.mode == AttributeMode::Computed)
            .map(|a| a.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::new(vec![Attribute::filter(), Attribute::computed_string("name")])
    }

    #[test]
    fn lookup_by_name() {
        let schema = sample();
        assert_eq!(schema.attribute("name").map(|a| a.kind), Some(AttributeKind::String));
        assert!(schema.attribute("missing").is_none());
    }

    #[test]
    fn computed_skips_inputs() {
        let names: Vec<_> = sample().computed().collect();
        assert_eq!(names, vec!["name"]);
    }
}
