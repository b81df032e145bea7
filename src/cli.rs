use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use clap::{Parser, Subcommand};
use reqwest::Url;
use wattprice::{
    api::{monta, tibber, tibber::HomeId},
    core::PriceWindow,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the hourly prices from Tibber.
    #[clap(name = "tibber")]
    Tibber(Box<TibberArgs>),

    /// Fetch the total charging cost from Monta.
    #[clap(name = "monta")]
    Monta(Box<MontaArgs>),
}

#[derive(Parser)]
pub struct TibberArgs {
    /// GraphQL endpoint.
    #[clap(long = "base-url", env = "TIBBER_BASE_URL", default_value = tibber::DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Home to fetch the prices for, defaults to the first home.
    #[clap(long = "home-id", env = "TIBBER_HOME_ID")]
    pub home_id: Option<HomeId>,

    #[clap(long = "access-token", env = "TIBBER_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[clap(flatten)]
    pub window: WindowArgs,

    #[clap(flatten)]
    pub http: HttpArgs,
}

#[derive(Parser)]
pub struct MontaArgs {
    #[clap(long = "base-url", env = "MONTA_BASE_URL", default_value = monta::DEFAULT_BASE_URL)]
    pub base_url: Url,

    #[clap(long = "client-id", env = "MONTA_CLIENT_ID")]
    pub client_id: String,

    #[clap(long = "client-secret", env = "MONTA_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    #[clap(flatten)]
    pub window: WindowArgs,

    #[clap(flatten)]
    pub http: HttpArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct WindowArgs {
    /// Window start (inclusive), for example: `2024-01-01T00:00:00Z`.
    #[clap(long)]
    pub from: DateTime<Utc>,

    /// Window end (exclusive), defaults to one day after the start.
    #[clap(long)]
    pub to: Option<DateTime<Utc>>,
}

impl WindowArgs {
    pub fn window(self) -> PriceWindow {
        PriceWindow::new(self.from, self.to.unwrap_or_else(|| self.from + TimeDelta::days(1)))
    }
}

#[derive(Parser)]
pub struct HttpArgs {
    /// Transport timeout for every request.
    #[clap(long = "timeout", env = "HTTP_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

impl HttpArgs {
    pub fn timeout(&self) -> Duration {
        *self.timeout
    }
}
