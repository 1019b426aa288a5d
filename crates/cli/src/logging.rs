//! Logging setup
//!
//! Logs go to stderr so that stdout only carries the progress report.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `clouddns=info`)
//! - `CLOUDDNS_LOG_FORMAT`: `json` for structured output, anything else for pretty

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "clouddns=info";

pub fn init() -> Result<()> {
    let log_format =
        std::env::var("CLOUDDNS_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            // Development: compact human-readable lines
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
