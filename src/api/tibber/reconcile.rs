use chrono::TimeDelta;

use crate::{
    api::tibber::models::{CurrentPrice, PriceNode},
    core::{point::PricePoint, window::PriceWindow},
    prelude::*,
};

/// Turn the fetched range into exactly `expected` hourly points.
///
/// The range never includes the hour in progress. When exactly that one point is missing,
/// it is taken from the current price, provided it falls into the window extended one hour back
/// and is not in the range yet. Any other count mismatch is an error.
///
/// The provider's order is preserved, the current price is appended to the end.
pub fn reconcile(
    nodes: Vec<PriceNode>,
    current: Option<CurrentPrice>,
    window: PriceWindow,
    expected: usize,
) -> Result<Vec<PricePoint>> {
    let mut points: Vec<PricePoint> =
        nodes.into_iter().map(|node| PricePoint::hourly(node.starts_at, node.total)).collect();
    let actual = points.len();
    let lookup_window = window.extend_back(TimeDelta::hours(1));

    if actual + 1 == expected
        && let Some(current) = current
        && lookup_window.contains(current.starts_at)
        && !points.iter().any(|point| point.valid_from() == current.starts_at)
    {
        info!(
            starts_at = %current.starts_at,
            level = ?current.level,
            "appending the current price"
        );
        points.push(PricePoint::hourly(current.starts_at, current.total));
    } else if actual != expected {
        warn!(expected, actual, "price point count mismatch");
        return Err(Error::CountMismatch { expected, actual });
    }

    Ok(points)
}
