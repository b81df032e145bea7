//! [Tibber](https://developer.tibber.com) GraphQL price client.

mod models;
mod reconcile;

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine, prelude::BASE64_STANDARD};
use bon::bon;
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::models::PriceLevel;
use self::{
    models::{Home, PriceInfo, Response},
    reconcile::reconcile,
};
use crate::{
    api::client,
    core::{point::PricePoint, provider::DynamicPriceProvider, window::PriceWindow},
    prelude::*,
};

pub const DEFAULT_BASE_URL: &str = "https://api.tibber.com/v1-beta/gql";

#[derive(
    Copy,
    Clone,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct HomeId(pub Uuid);

pub struct Api {
    client: Client,
    base_url: Url,

    /// Home to fetch the prices for, the first one when unset.
    home_id: Option<HomeId>,
}

#[bon]
impl Api {
    #[builder]
    pub fn new(
        base_url: Url,
        home_id: Option<HomeId>,
        access_token: Option<String>,
        #[builder(default = client::DEFAULT_TIMEOUT)] timeout: Duration,
    ) -> Result<Self> {
        let client = match access_token {
            Some(access_token) => client::try_new_with_bearer(timeout, &access_token)?,
            None => client::try_new(timeout)?,
        };
        Ok(Self { client, base_url, home_id })
    }
}

impl Api {
    /// Fetch the hourly prices covering the window.
    ///
    /// Requests two extra hours: one before the window start and one for the hour in progress,
    /// which the range never contains.
    #[instrument(skip_all, fields(from = %window.from, to = %window.to))]
    pub async fn get_price_data(&self, window: PriceWindow) -> Result<Vec<PricePoint>> {
        let expected = window.hour_count() + 2;
        let request = Request::new(window.from - TimeDelta::hours(1), expected);
        info!(first = expected, "fetching…");
        let response = self.client.post(self.base_url.clone()).json(&request).send().await?;
        let homes = client::read_json::<Response>(client::ensure_success(response).await?)
            .await?
            .into_data()?
            .viewer
            .homes;
        let home = self.select_home(homes)?;
        let PriceInfo { range, current } =
            home.current_subscription.ok_or(Error::NoSubscription(home.id))?.price_info;
        info!(home_id = %home.id, n_nodes = range.nodes.len(), "fetched");
        reconcile(range.nodes, current, window, expected)
    }

    fn select_home(&self, homes: Vec<Home>) -> Result<Home> {
        match self.home_id {
            Some(home_id) => homes
                .into_iter()
                .find(|home| home.id == home_id)
                .ok_or(Error::HomeNotFound(home_id)),
            None => homes.into_iter().next().ok_or(Error::NoHomes),
        }
    }
}

#[async_trait]
impl DynamicPriceProvider for Api {
    async fn get_price_data(&self, window: PriceWindow) -> Result<Vec<PricePoint>> {
        Self::get_price_data(self, window).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    operation_name: &'static str,
    query: &'static str,
    variables: Variables,
}

impl Request {
    fn new(since: DateTime<Utc>, first: usize) -> Self {
        Self {
            operation_name: "PriceData",
            query: "query PriceData($after: String!, $first: Int!) { viewer { homes { id currentSubscription { priceInfo { range(resolution: HOURLY, first: $first, after: $after) { nodes { total startsAt } } current { total startsAt level } } } } } }",
            variables: Variables { after: cursor(since), first },
        }
    }
}

#[derive(Serialize)]
struct Variables {
    /// Range starts after this cursor.
    after: String,

    /// Number of hourly nodes.
    first: usize,
}

/// Pagination cursor pointing at the timestamp.
fn cursor(at: DateTime<Utc>) -> String {
    BASE64_STANDARD.encode(at.to_rfc3339_opts(SecondsFormat::Millis, false))
}
