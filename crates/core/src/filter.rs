//! Client-side filters for list endpoints.
//!
//! A [`FilterSet`] is the `filter` block a data source accepts: a set of
//! `{ name, values }` constraints. A resource satisfies one constraint
//! when its attribute named `name` equals any entry in `values`, and the
//! whole set when every constraint is satisfied.
//!
//! Resources opt in by implementing [`Matchable`], which resolves a
//! filter key to a field value through a typed accessor table rather
//! than by inspecting the struct at runtime.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Matchable
// ---------------------------------------------------------------------------

/// A resource whose fields can be looked up by filter key.
pub trait Matchable {
    /// Value of the field addressed by `key`, or `None` when the key does
    /// not name a filterable field of this resource.
    fn field_value(&self, key: &str) -> Option<Cow<'_, str>>;
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// One `{ name, values }` constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Attribute key to compare, e.g. `name` or `type`.
    pub name: String,
    /// Accepted values. The constraint holds if the attribute equals any of them.
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Shorthand for a single expected value.
    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, vec![value.into()])
    }

    /// Whether `resource` satisfies this constraint.
    ///
    /// Unknown keys and empty `values` never match.
    pub fn matches<M: Matchable + ?Sized>(&self, resource: &M) -> bool {
        self.matches_by(|key| resource.field_value(key))
    }

    /// Like [`matches`](Self::matches), resolving the key through `lookup`.
    pub fn matches_by<'a, F>(&self, lookup: F) -> bool
    where
        F: FnOnce(&str) -> Option<Cow<'a, str>>,
    {
        match lookup(&self.name) {
            Some(actual) => self.values.iter().any(|v| v.as_str() == actual.as_ref()),
            None => false,
        }
    }
}

/// Errors from parsing a `name=value[,value...]` filter expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterParseError {
    #[error("filter `{0}` must have the form name=value[,value...]")]
    MissingSeparator(String),

    #[error("filter `{0}` has an empty attribute name")]
    EmptyName(String),

    #[error("filter `{0}` has no values")]
    EmptyValues(String),
}

impl FromStr for Filter {
    type Err = FilterParseError;

    /// Parse `name=value` or `name=v1,v2`. Whitespace around the name and
    /// each value is trimmed; empty values are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw_values) = s
            .split_once('=')
            .ok_or_else(|| FilterParseError::MissingSeparator(s.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(FilterParseError::EmptyName(s.to_string()));
        }

        let values: Vec<String> = raw_values
            .split(',')
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() {
            return Err(FilterParseError::EmptyValues(s.to_string()));
        }

        Ok(Self::new(name, values))
    }
}

// ---------------------------------------------------------------------------
// FilterSet
// ---------------------------------------------------------------------------

/// Unordered set of constraints, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(Vec<Filter>);

impl FilterSet {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self(filters)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.0.iter()
    }

    /// Whether `resource` satisfies every constraint in the set.
    ///
    /// An empty set matches everything; callers that require criteria must
    /// check [`is_empty`](Self::is_empty) first.
    pub fn matches<M: Matchable + ?Sized>(&self, resource: &M) -> bool {
        self.0.iter().all(|f| f.matches(resource))
    }

    /// Like [`matches`](Self::matches), resolving keys through `lookup`.
    pub fn matches_by<'a, F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<Cow<'a, str>>,
    {
        self.0.iter().all(|f| f.matches_by(&lookup))
    }
}

impl From<Vec<Filter>> for FilterSet {
    fn from(filters: Vec<Filter>) -> Self {
        Self(filters)
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct Item {
        name: &'static str,
        kind: &'static str,
    }

    impl Matchable for Item {
        fn field_value(&self, key: &str) -> Option<Cow<'_, str>> {
            match key {
                "name" => Some(Cow::Borrowed(self.name)),
                "type" => Some(Cow::Borrowed(self.kind)),
                _ => None,
            }
        }
    }

    const BOOT: Item = Item {
        name: "setup.sh",
        kind: "boot",
    };

    #[test]
    fn single_value_matches_equal_field() {
        assert!(Filter::equals("name", "setup.sh").matches(&BOOT));
        assert!(!Filter::equals("name", "other.sh").matches(&BOOT));
    }

    #[test]
    fn any_of_values_matches() {
        let filter = Filter::new("type", vec!["pxe".into(), "boot".into()]);
        assert!(filter.matches(&BOOT));
    }

    #[test]
    fn unknown_key_never_matches() {
        assert!(!Filter::equals("region", "ewr").matches(&BOOT));
    }

    #[test]
    fn empty_values_never_match() {
        assert!(!Filter::new("name", vec![]).matches(&BOOT));
    }

    #[test]
    fn comparison_is_exact() {
        assert!(!Filter::equals("name", "SETUP.SH").matches(&BOOT));
        assert!(!Filter::equals("name", "setup").matches(&BOOT));
    }

    #[test]
    fn set_requires_every_constraint() {
        let both = FilterSet::new(vec![Filter::equals("name", "setup.sh"), Filter::equals("type", "boot")]);
        assert!(both.matches(&BOOT));

        let partial = FilterSet::new(vec![Filter::equals("name", "setup.sh"), Filter::equals("type", "pxe")]);
        assert!(!partial.matches(&BOOT));
    }

    #[test]
    fn parse_single_value() {
        let filter: Filter = "name=setup.sh".parse().unwrap();
        assert_eq!(filter, Filter::equals("name", "setup.sh"));
    }

    #[test]
    fn parse_multiple_values_trims_whitespace() {
        let filter: Filter = " type = boot , pxe ,".parse().unwrap();
        assert_eq!(filter.name, "type");
        assert_eq!(filter.values, vec!["boot", "pxe"]);
    }

    #[test]
    fn parse_keeps_equals_in_value() {
        let filter: Filter = "name=a=b".parse().unwrap();
        assert_eq!(filter.values, vec!["a=b"]);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_matches!("name".parse::<Filter>(), Err(FilterParseError::MissingSeparator(_)));
        assert_matches!("=x".parse::<Filter>(), Err(FilterParseError::EmptyName(_)));
        assert_matches!("name=".parse::<Filter>(), Err(FilterParseError::EmptyValues(_)));
        assert_matches!("name= , ".parse::<Filter>(), Err(FilterParseError::EmptyValues(_)));
    }

    #[test]
    fn filter_set_deserializes_from_block_list() {
        let json = r#"[{"name": "name", "values": ["setup.sh"]}]"#;
        let set: FilterSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.matches(&BOOT));
    }
}
