use vultr_client::ApiError;
use vultr_core::diagnostics::Diagnostic;
use vultr_core::resource_data::SetError;

/// Failures of a filtered single-resource lookup.
///
/// Every variant is terminal for the read.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No `filter` block was configured.
    #[error("issue with filter: at least one filter is required")]
    MissingFilter,

    /// A list page request failed.
    #[error("error getting {resource}s: {source}")]
    List {
        resource: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("no results were found")]
    NoResults,

    #[error("your search returned too many results ({count}). Please refine your search to be more specific")]
    TooManyResults { count: usize },

    /// The follow-up single-record fetch failed.
    #[error("error retrieving {resource} {id}: {source}")]
    Fetch {
        resource: &'static str,
        id: String,
        #[source]
        source: ApiError,
    },

    /// Writing an output attribute failed.
    #[error("unable to set {resource} `{field}` read value: {source}")]
    SetField {
        resource: &'static str,
        field: &'static str,
        #[source]
        source: SetError,
    },
}

impl From<&LookupError> for Diagnostic {
    fn from(err: &LookupError) -> Self {
        let diagnostic = Diagnostic::error(err.to_string());
        match err {
            LookupError::MissingFilter => diagnostic.with_attribute("filter"),
            LookupError::SetField { field, .. } => diagnostic.with_attribute(*field),
            _ => diagnostic,
        }
    }
}

impl From<LookupError> for Diagnostic {
    fn from(err: LookupError) -> Self {
        Diagnostic::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_message_names_the_id() {
        let err = LookupError::Fetch {
            resource: "startup_script",
            id: "abc-123".into(),
            source: ApiError::Status {
                status: 404,
                message: "Invalid startup script ID".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "error retrieving startup_script abc-123: Vultr API error (404): Invalid startup script ID"
        );
    }

    #[test]
    fn too_many_message_asks_for_narrower_criteria() {
        let msg = LookupError::TooManyResults { count: 3 }.to_string();
        assert!(msg.contains("too many results"));
        assert!(msg.contains("more specific"));
    }

    #[test]
    fn set_field_diagnostic_points_at_attribute() {
        let err = LookupError::SetField {
            resource: "startup_script",
            field: "type",
            source: SetError::UnknownAttribute("type".into()),
        };
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.attribute.as_deref(), Some("type"));
        assert!(diagnostic.summary.starts_with("unable to set startup_script `type`"));
    }

    #[test]
    fn missing_filter_diagnostic_points_at_filter() {
        let diagnostic = Diagnostic::from(LookupError::MissingFilter);
        assert_eq!(diagnostic.attribute.as_deref(), Some("filter"));
    }
}
