use std::time::Duration;

use reqwest::{
    Client,
    ClientBuilder,
    Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

use crate::prelude::*;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a default client.
pub fn try_new(timeout: Duration) -> Result<Client> {
    Ok(builder(timeout).build()?)
}

/// Build a client which authenticates every request with the bearer token.
pub fn try_new_with_bearer(timeout: Duration, access_token: &str) -> Result<Client> {
    let mut authorization = HeaderValue::from_str(&format!("Bearer {access_token}"))
        .map_err(|_| Error::Configuration("the access token is not a valid header value"))?;
    authorization.set_sensitive(true);
    let headers = HeaderMap::from_iter([(AUTHORIZATION, authorization)]);
    Ok(builder(timeout).default_headers(headers).build()?)
}

fn builder(timeout: Duration) -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT).timeout(timeout)
}

/// Turn a non-success response into [`Error::RequestFailed`], keeping everything for diagnostics.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().clone();
    let headers = response.headers().clone();
    let body = response.text().await.ok();
    warn!(%url, %status, "request failed");
    Err(Error::RequestFailed { url, status, headers, body })
}

/// Deserialize the response body, treating `null` as an empty response.
pub async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R> {
    let url = response.url().clone();
    let body = response.bytes().await?;
    trace!(%url, n_bytes = body.len(), "received");
    serde_json::from_slice::<Option<R>>(&body)
        .map_err(|source| Error::Decode { url: url.clone(), source })?
        .ok_or(Error::EmptyResponse { url })
}
