//! Line parser for JSON customer records.
//!
//! Expected shape: `{"user_id": <scalar>, "name": <string>, "latitude": <num>, "longitude": <num>}`.
//! Coordinates may also be given as numeric strings (`"53.2451022"`).

use super::types::{Customer, CustomerId, CustomerParsingError};
use crate::geo::Location;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct RawCustomer {
    user_id: CustomerId,
    name: String,
    latitude: RawCoordinate,
    longitude: RawCoordinate,
}

/// Parse one line into a [`Customer`].
///
/// Any failure (invalid JSON, missing field, non-numeric coordinate) yields
/// a [`CustomerParsingError`] carrying `line` unchanged.
pub fn parse_customer(line: &str) -> Result<Customer, CustomerParsingError> {
    let fail = || CustomerParsingError::new(line);

    // Go through a JSON object explicitly so `[...]` records are not accepted
    // positionally.
    let raw = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(line)
        .and_then(|object| RawCustomer::deserialize(serde_json::Value::Object(object)))
        .map_err(|e| {
            tracing::debug!("Rejected record: {}", e);
            fail()
        })?;

    let lat = raw.latitude.to_f64().ok_or_else(fail)?;
    let lon = raw.longitude.to_f64().ok_or_else(fail)?;

    Ok(Customer {
        id: raw.user_id,
        name: raw.name,
        location: Location::new(lat, lon),
    })
}
