//! Wire shapes of the `PriceData` query response.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{api::tibber::HomeId, prelude::*, quantity::rate::KilowattHourRate};

#[derive(Deserialize)]
pub struct Response {
    data: Option<Data>,
    errors: Option<Vec<GraphQlError>>,
}

impl Response {
    /// Unwrap the data, failing if the provider reported any errors.
    pub fn into_data(self) -> Result<Data> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            let messages = errors.into_iter().map(|error| error.message).collect();
            return Err(Error::Provider { messages });
        }
        self.data.ok_or(Error::MissingData)
    }
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
pub struct Data {
    pub viewer: Viewer,
}

#[derive(Deserialize)]
pub struct Viewer {
    pub homes: Vec<Home>,
}

#[derive(Deserialize)]
pub struct Home {
    pub id: HomeId,

    #[serde(rename = "currentSubscription")]
    pub current_subscription: Option<Subscription>,
}

#[derive(Deserialize)]
pub struct Subscription {
    #[serde(rename = "priceInfo")]
    pub price_info: PriceInfo,
}

#[derive(Deserialize)]
pub struct PriceInfo {
    pub range: PriceRange,

    /// Price of the hour in progress, not necessarily a part of [`PriceInfo::range`].
    pub current: Option<CurrentPrice>,
}

#[derive(Deserialize)]
pub struct PriceRange {
    pub nodes: Vec<PriceNode>,
}

#[derive(Deserialize)]
pub struct PriceNode {
    pub total: KilowattHourRate,

    #[serde(rename = "startsAt")]
    pub starts_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CurrentPrice {
    pub total: KilowattHourRate,

    #[serde(rename = "startsAt")]
    pub starts_at: DateTime<Utc>,

    pub level: PriceLevel,
}

/// Price level relative to the trailing average.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceLevel {
    VeryCheap,
    Cheap,
    Normal,
    Expensive,
    VeryExpensive,

    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_deserialize_response_ok() -> Result<(), serde_json::Error> {
        // language=json
        const RESPONSE: &str = r#"{
            "data": {
                "viewer": {
                    "homes": [
                        {
                            "id": "96a14971-525a-4420-aae9-e5aedaa129ff",
                            "currentSubscription": {
                                "priceInfo": {
                                    "range": {
                                        "nodes": [
                                            {"total": 0.2512, "startsAt": "2024-01-01T00:00:00.000+01:00"},
                                            {"total": 0.2481, "startsAt": "2024-01-01T01:00:00.000+01:00"}
                                        ]
                                    },
                                    "current": {
                                        "total": 0.2377,
                                        "startsAt": "2024-01-01T02:00:00.000+01:00",
                                        "level": "VERY_CHEAP"
                                    }
                                }
                            }
                        }
                    ]
                }
            }
        }"#;
        let response = serde_json::from_str::<Response>(RESPONSE)?;
        let Ok(data) = response.into_data() else { panic!("errors in the response") };
        let home = &data.viewer.homes[0];
        assert_eq!(home.id.to_string(), "96a14971-525a-4420-aae9-e5aedaa129ff");
        let price_info = &home.current_subscription.as_ref().unwrap().price_info;
        assert_eq!(price_info.range.nodes.len(), 2);
        assert_eq!(price_info.range.nodes[0].total, KilowattHourRate(dec!(0.2512)));
        assert_eq!(
            price_info.range.nodes[0].starts_at,
            Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap()
        );
        let current = price_info.current.as_ref().unwrap();
        assert_eq!(current.level, PriceLevel::VeryCheap);
        assert_eq!(current.starts_at, Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap());
        Ok(())
    }

    #[test]
    fn test_into_data_errors() -> Result<(), serde_json::Error> {
        // language=json
        const RESPONSE: &str = r#"{
            "data": null,
            "errors": [
                {"message": "Context creation failed: invalid token"},
                {"message": "rate limited"}
            ]
        }"#;
        let Err(error) = serde_json::from_str::<Response>(RESPONSE)?.into_data() else {
            panic!("expected an error");
        };
        assert_eq!(
            error.to_string(),
            "API call failed: Context creation failed: invalid token; rate limited"
        );
        Ok(())
    }

    #[test]
    fn test_into_data_missing() -> Result<(), serde_json::Error> {
        let Err(error) = serde_json::from_str::<Response>(r#"{"data": null}"#)?.into_data() else {
            panic!("expected an error");
        };
        assert!(matches!(error, Error::MissingData), "{error:?}");
        Ok(())
    }

    #[test]
    fn test_unknown_price_level() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::from_str::<PriceLevel>(r#""NONE""#)?, PriceLevel::Other);
        Ok(())
    }
}
