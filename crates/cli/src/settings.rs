//! Command-line arguments and validated runtime settings

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clouddns_core::application::constants::{
    DEFAULT_DOMAIN_PREFIX, DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL, DEFAULT_RECORD_TYPE,
};
use clouddns_core::application::PollPolicy;
use clouddns_core::domain::RecordType;
use clouddns_infra_rackspace::{Credentials, RackspaceConfig, Region};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "clouddns-delete-records")]
#[command(about = "Delete every record of one type from a Rackspace Cloud DNS domain", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rackspace account username
    #[arg(env = "RACKSPACE_USERNAME")]
    pub username: String,

    /// Rackspace API key
    #[arg(env = "RACKSPACE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Region whose identity endpoint is used
    #[arg(long, value_enum, env = "CLOUDDNS_REGION", default_value_t = RegionArg::Us)]
    pub region: RegionArg,

    /// Identity endpoint override (e.g. http://127.0.0.1:8080/v2.0)
    #[arg(long, env = "CLOUDDNS_IDENTITY_URL")]
    pub identity_url: Option<String>,

    /// Cloud DNS endpoint override (skips the service catalog)
    #[arg(long, env = "CLOUDDNS_DNS_URL")]
    pub dns_url: Option<String>,

    /// Name prefix of the domain to clean up (first match wins)
    #[arg(long, default_value = DEFAULT_DOMAIN_PREFIX)]
    pub prefix: String,

    /// Record type to delete
    #[arg(long, default_value_t = DEFAULT_RECORD_TYPE)]
    pub record_type: RecordType,

    /// Seconds between two job status checks
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    pub poll_interval_secs: u64,

    /// Give up waiting for the delete job after this many seconds
    #[arg(long, default_value_t = DEFAULT_MAX_WAIT.as_secs())]
    pub max_wait_secs: u64,

    /// List the records that would be deleted without deleting them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RegionArg {
    Us,
    Uk,
}

impl From<RegionArg> for Region {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Us => Region::Us,
            RegionArg::Uk => Region::Uk,
        }
    }
}

/// Settings after validation
#[derive(Debug)]
pub struct Settings {
    pub rackspace: RackspaceConfig,
    pub prefix: String,
    pub record_type: RecordType,
    pub poll_policy: PollPolicy,
    pub dry_run: bool,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.username.trim().is_empty() || cli.api_key.trim().is_empty() {
            anyhow::bail!("username and API key must not be empty");
        }
        if cli.prefix.is_empty() {
            anyhow::bail!("--prefix must not be empty");
        }

        let poll_policy = PollPolicy::new(
            Duration::from_secs(cli.poll_interval_secs),
            Duration::from_secs(cli.max_wait_secs),
        )
        .context("Invalid polling settings")?;

        let mut rackspace = RackspaceConfig::new(
            Credentials::new(cli.username, cli.api_key),
            cli.region.into(),
        );
        if let Some(url) = cli.identity_url {
            rackspace = rackspace.with_identity_url(url);
        }
        if let Some(url) = cli.dns_url {
            rackspace = rackspace.with_dns_url(url);
        }

        Ok(Self {
            rackspace,
            prefix: cli.prefix,
            record_type: cli.record_type,
            poll_policy,
            dry_run: cli.dry_run,
        })
    }
}
