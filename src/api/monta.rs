//! [Monta](https://docs.public-api.monta.com) charging cost client.

use std::time::Duration;

use async_trait::async_trait;
use bon::bon;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::{
    api::client,
    core::{provider::WholePriceProvider, window::PriceWindow},
    prelude::*,
    quantity::cost::Cost,
};

pub const DEFAULT_BASE_URL: &str = "https://public-api.monta.com/api/v1";

pub struct Api {
    client: Client,
    base_url: Url,
    client_id: String,
    client_secret: String,
}

#[bon]
impl Api {
    #[builder]
    pub fn new(
        base_url: Url,
        client_id: String,
        client_secret: String,
        #[builder(default = client::DEFAULT_TIMEOUT)] timeout: Duration,
    ) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration("the base URL cannot have path segments"));
        }
        Ok(Self { client: client::try_new(timeout)?, base_url, client_id, client_secret })
    }
}

impl Api {
    /// Sum up the costs of all charges within the window.
    ///
    /// Authenticates on every call, the token is never reused.
    #[instrument(skip_all, fields(from = %window.from, to = %window.to))]
    pub async fn get_total_price(&self, window: PriceWindow) -> Result<Cost> {
        let access_token = self.get_access_token().await?;
        let charges = self.get_charges(&access_token, window).await?;
        let total = charges.iter().map(|charge| charge.cost).sum();
        info!(n_charges = charges.len(), %total, "fetched");
        Ok(total)
    }

    #[instrument(skip_all)]
    async fn get_access_token(&self) -> Result<AccessToken> {
        debug!("authenticating…");
        let request =
            TokenRequest { client_id: &self.client_id, client_secret: &self.client_secret };
        let response =
            self.client.post(self.endpoint(&["auth", "token"])).json(&request).send().await?;
        let response: TokenResponse =
            client::read_json(client::ensure_success(response).await?).await?;
        Ok(response.access_token)
    }

    #[instrument(skip_all)]
    async fn get_charges(
        &self,
        access_token: &AccessToken,
        window: PriceWindow,
    ) -> Result<Vec<Charge>> {
        let mut url = self.endpoint(&["charges"]);
        url.query_pairs_mut()
            .append_pair("from", &format_timestamp(window.from))
            .append_pair("to", &format_timestamp(window.to));
        debug!(%url, "fetching…");
        let response = self.client.get(url).bearer_auth(&access_token.0).send().await?;
        let response: ChargesResponse =
            client::read_json(client::ensure_success(response).await?).await?;
        Ok(response.data)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor.
        if let Ok(mut path_segments) = url.path_segments_mut() {
            path_segments.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl WholePriceProvider for Api {
    async fn get_total_price(&self, window: PriceWindow) -> Result<Cost> {
        Self::get_total_price(self, window).await
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: AccessToken,
}

#[derive(Deserialize)]
struct AccessToken(String);

#[derive(Deserialize)]
struct ChargesResponse {
    data: Vec<Charge>,
}

#[derive(Deserialize)]
struct Charge {
    cost: Cost,
}
