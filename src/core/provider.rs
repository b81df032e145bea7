use async_trait::async_trait;

use crate::{
    core::{point::PricePoint, window::PriceWindow},
    prelude::*,
    quantity::cost::Cost,
};

/// Provider of a time-varying hourly price series.
#[async_trait]
pub trait DynamicPriceProvider: Sync {
    /// Fetch the hourly prices covering the window.
    ///
    /// Never returns a partial series: a response that cannot be reconciled is an error.
    async fn get_price_data(&self, window: PriceWindow) -> Result<Vec<PricePoint>>;
}

/// Provider of a single aggregated cost over a time window.
#[async_trait]
pub trait WholePriceProvider: Sync {
    async fn get_total_price(&self, window: PriceWindow) -> Result<Cost>;
}
