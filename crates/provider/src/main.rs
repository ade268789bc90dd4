//! `vultr-lookup` -- resolve one startup script from the command line.
//!
//! Each positional argument is a filter of the form
//! `name=value[,value...]`. On success the resolved record is printed to
//! stdout as JSON; on failure the diagnostics go to stderr and the
//! process exits non-zero.
//!
//! ```text
//! vultr-lookup name=setup.sh type=boot
//! ```
//!
//! # Environment variables
//!
//! | Variable                     | Required | Default                 | Description                 |
//! |------------------------------|----------|-------------------------|-----------------------------|
//! | `VULTR_API_KEY`              | yes      | --                      | API token                   |
//! | `VULTR_API_URL`              | no       | `https://api.vultr.com` | API base URL                |
//! | `VULTR_PER_PAGE`             | no       | `100`                   | Page size for list calls    |
//! | `VULTR_REQUEST_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout         |

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vultr_client::{ClientConfig, VultrClient};
use vultr_core::filter::{Filter, FilterSet};
use vultr_core::resource_data::ResourceData;
use vultr_provider::datasources::startup_script;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vultr_provider=info,vultr_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let filters = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Filter>())
        .collect::<Result<FilterSet, _>>()
        .context("invalid filter argument")?;

    let config = ClientConfig::from_env().context("failed to load Vultr client configuration")?;

    tracing::info!(
        api_url = %config.api_url,
        per_page = config.per_page,
        filters = filters.len(),
        "Starting vultr-lookup",
    );

    let client = VultrClient::new(config).context("failed to build HTTP client")?;

    let mut data = ResourceData::new(startup_script::schema()).with_filters(filters);
    let diagnostics = startup_script::read_with_diagnostics(&client, &mut data).await;

    for diagnostic in diagnostics.iter() {
        eprintln!("{diagnostic}");
    }

    if diagnostics.has_error() {
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&data.to_json())?);
    Ok(())
}
