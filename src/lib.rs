//! Hourly electricity prices and aggregated charging costs from third-party providers.
//!
//! - [`api::tibber`] fetches an hourly price series from the Tibber GraphQL API.
//! - [`api::monta`] fetches the total charging cost from the Monta REST API.

#![allow(clippy::doc_markdown)]

pub mod api;
pub mod core;
pub mod error;
mod prelude;
pub mod quantity;
