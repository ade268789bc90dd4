//! Startup-script endpoints.
//!
//! `GET /v2/startup-scripts` lists scripts without their body;
//! `GET /v2/startup-scripts/{id}` returns a single script including it.
//! Both are exposed through the [`StartupScriptApi`] trait so data
//! sources can be exercised against an in-memory implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::VultrClient;
use crate::error::ApiError;
use crate::pagination::{ListOptions, Meta};

/// Path segments of the collection endpoint.
const BASE_PATH: [&str; 2] = ["v2", "startup-scripts"];

/// A startup script as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupScript {
    pub id: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub date_modified: String,
    #[serde(default)]
    pub name: String,
    /// `boot` or `pxe`.
    #[serde(default, rename = "type")]
    pub script_type: String,
    /// Script body. Empty in list responses.
    #[serde(default)]
    pub script: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    startup_scripts: Vec<StartupScript>,
    #[serde(default)]
    meta: Meta,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    startup_script: StartupScript,
}

/// Read access to startup scripts.
#[async_trait]
pub trait StartupScriptApi: Send + Sync {
    /// Fetch one page of scripts. The returned [`Meta`] carries the cursor
    /// of the next page.
    async fn list(&self, options: &ListOptions) -> Result<(Vec<StartupScript>, Meta), ApiError>;

    /// Fetch a single script, including its body.
    async fn get(&self, id: &str) -> Result<StartupScript, ApiError>;
}

#[async_trait]
impl StartupScriptApi for VultrClient {
    async fn list(&self, options: &ListOptions) -> Result<(Vec<StartupScript>, Meta), ApiError> {
        let options = ListOptions {
            per_page: options.per_page.or(Some(self.config().per_page)),
            cursor: options.cursor.clone(),
        };

        let page: ListResponse = self.get_json(&BASE_PATH, Some(&options)).await?;

        tracing::debug!(
            count = page.startup_scripts.len(),
            total = page.meta.total,
            has_next = page.meta.next_cursor().is_some(),
            "Listed startup scripts",
        );

        Ok((page.startup_scripts, page.meta))
    }

    async fn get(&self, id: &str) -> Result<StartupScript, ApiError> {
        let [version, collection] = BASE_PATH;
        let response: GetResponse = self
            .get_json::<_, ()>(&[version, collection, id], None)
            .await?;
        Ok(response.startup_script)
    }
}
