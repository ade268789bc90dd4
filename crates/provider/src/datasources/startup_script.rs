//! `vultr_startup_script` data source.
//!
//! Finds one startup script by filter. The list endpoint does not return
//! the script body, so the single match is re-fetched by ID and that
//! record populates the outputs.

use std::borrow::Cow;

use vultr_client::pagination::ListOptions;
use vultr_client::startup_scripts::{StartupScript, StartupScriptApi};
use vultr_core::diagnostics::{Diagnostic, Diagnostics};
use vultr_core::filter::FilterSet;
use vultr_core::resource_data::ResourceData;
use vultr_core::schema::{Attribute, Schema};

use super::single_match;
use crate::error::LookupError;

/// Resource name used in error messages.
pub const RESOURCE: &str = "startup_script";

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

pub fn schema() -> Schema {
    Schema::new(vec![
        Attribute::filter(),
        Attribute::computed_string(ScriptField::Name.key()),
        Attribute::computed_string(ScriptField::DateCreated.key()),
        Attribute::computed_string(ScriptField::DateModified.key()),
        Attribute::computed_string(ScriptField::Type.key()),
        Attribute::computed_string(ScriptField::Script.key()),
    ])
}

// ---------------------------------------------------------------------------
// Field table
// ---------------------------------------------------------------------------

/// Filterable fields of a [`StartupScript`], keyed by their API names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptField {
    Id,
    Name,
    DateCreated,
    DateModified,
    Type,
    Script,
}

impl ScriptField {
    pub const ALL: [ScriptField; 6] = [
        Self::Id,
        Self::Name,
        Self::DateCreated,
        Self::DateModified,
        Self::Type,
        Self::Script,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::DateCreated => "date_created",
            Self::DateModified => "date_modified",
            Self::Type => "type",
            Self::Script => "script",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn value(self, script: &StartupScript) -> &str {
        match self {
            Self::Id => &script.id,
            Self::Name => &script.name,
            Self::DateCreated => &script.date_created,
            Self::DateModified => &script.date_modified,
            Self::Type => &script.script_type,
            Self::Script => &script.script,
        }
    }
}

/// Filter names that are not startup script fields. Such filters match nothing.
pub fn unknown_filter_keys(filters: &FilterSet) -> Vec<&str> {
    filters
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| ScriptField::from_key(name).is_none())
        .collect()
}

/// Whether `script` satisfies every constraint in `filters`.
pub fn matches(filters: &FilterSet, script: &StartupScript) -> bool {
    filters.matches_by(|key| ScriptField::from_key(key).map(|f| Cow::Borrowed(f.value(script))))
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// Resolve the configured filter to exactly one startup script and write
/// its attributes into `data`.
pub async fn read<A>(api: &A, data: &mut ResourceData) -> Result<(), LookupError>
where
    A: StartupScriptApi + ?Sized,
{
    let filters = data.filters().clone();
    if filters.is_empty() {
        return Err(LookupError::MissingFilter);
    }

    for key in unknown_filter_keys(&filters) {
        tracing::warn!(
            filter = %key,
            "Filter does not name a startup script field and will match nothing",
        );
    }

    let listed = list_matching(api, &filters).await?;
    let candidate = single_match(listed)?;

    let script = api.get(&candidate.id).await.map_err(|source| LookupError::Fetch {
        resource: RESOURCE,
        id: candidate.id.clone(),
        source,
    })?;

    tracing::info!(script_id = %script.id, name = %script.name, "Resolved startup script");

    write_outputs(data, script)
}

/// Like [`read`] but reports the outcome as diagnostics: one warning per
/// unknown filter key, then the error if the read failed.
pub async fn read_with_diagnostics<A>(api: &A, data: &mut ResourceData) -> Diagnostics
where
    A: StartupScriptApi + ?Sized,
{
    let mut diagnostics = Diagnostics::new();
    for key in unknown_filter_keys(data.filters()) {
        diagnostics.push(
            Diagnostic::warning(format!("filter `{key}` does not name a {RESOURCE} field"))
                .with_detail("It matches no startup script.")
                .with_attribute("filter"),
        );
    }

    if let Err(e) = read(api, data).await {
        diagnostics.push(e.into());
    }
    diagnostics
}

/// Walk every list page, keeping scripts that satisfy `filters`.
async fn list_matching<A>(api: &A, filters: &FilterSet) -> Result<Vec<StartupScript>, LookupError>
where
    A: StartupScriptApi + ?Sized,
{
    let mut matched = Vec::new();
    let mut cursor = Some(String::new());
    let mut page = 0u32;

    while let Some(current) = cursor.take() {
        page += 1;
        let options = ListOptions::new().with_cursor(current);
        let (scripts, meta) = api.list(&options).await.map_err(|source| LookupError::List {
            resource: RESOURCE,
            source,
        })?;

        let listed = scripts.len();
        matched.extend(scripts.into_iter().filter(|s| matches(filters, s)));

        tracing::debug!(page, listed, matched = matched.len(), "Scanned startup script page");

        cursor = meta.next_cursor().map(str::to_owned);
    }

    Ok(matched)
}

fn write_outputs(data: &mut ResourceData, script: StartupScript) -> Result<(), LookupError> {
    data.set_id(script.id.clone());

    let outputs = [
        (ScriptField::Name, script.name),
        (ScriptField::DateCreated, script.date_created),
        (ScriptField::DateModified, script.date_modified),
        (ScriptField::Type, script.script_type),
        (ScriptField::Script, script.script),
    ];

    for (field, value) in outputs {
        data.set(field.key(), value)
            .map_err(|source| LookupError::SetField {
                resource: RESOURCE,
                field: field.key(),
                source,
            })?;
    }

    Ok(())
}
