#![allow(clippy::doc_markdown)]

mod cli;
mod tables;

use anyhow::Context;
use clap::{Parser, crate_version};
use tracing::info;
use wattprice::api::{monta, tibber};

use crate::{
    cli::{Args, Command, MontaArgs, TibberArgs},
    tables::build_price_table,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Tibber(args) => {
            let TibberArgs { base_url, home_id, access_token, window, http } = *args;
            let window = window.window();
            let points = tibber::Api::builder()
                .base_url(base_url)
                .maybe_home_id(home_id)
                .maybe_access_token(access_token)
                .timeout(http.timeout())
                .build()?
                .get_price_data(window)
                .await
                .with_context(|| format!("failed to fetch the hourly prices for {window:?}"))?;
            println!("{}", build_price_table(&points));
        }
        Command::Monta(args) => {
            let MontaArgs { base_url, client_id, client_secret, window, http } = *args;
            let window = window.window();
            let total = monta::Api::builder()
                .base_url(base_url)
                .client_id(client_id)
                .client_secret(client_secret)
                .timeout(http.timeout())
                .build()?
                .get_total_price(window)
                .await
                .with_context(|| format!("failed to fetch the total price for {window:?}"))?;
            println!("{total}");
        }
    }

    info!("done!");
    Ok(())
}
