//! Read-only data sources.
//!
//! Each data source lists a resource type, narrows the result with the
//! caller's `filter` block and exposes exactly one match.

pub mod startup_script;

use crate::error::LookupError;

/// Reduce a filtered result set to its single element.
pub fn single_match<T>(mut matches: Vec<T>) -> Result<T, LookupError> {
    match matches.len() {
        0 => Err(LookupError::NoResults),
        1 => Ok(matches.remove(0)),
        count => Err(LookupError::TooManyResults { count }),
    }
}
