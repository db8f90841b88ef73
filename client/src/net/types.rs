//! Wire DTOs for the remote crop service.
//!
//! DESIGN
//! ======
//! The service owns ids and may serialize them (and seller ids) as strings or
//! numbers, and older records can miss numeric fields entirely. Numeric
//! fields that are missing, malformed, or (for `qty`) fractional decode as
//! `None`, and the list is decoded row by row, so one odd row never blanks
//! the whole table. The outgoing payload is strict and always fully typed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A crop listing as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    /// Service-assigned identifier. Never generated client-side.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Number of bags.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub bag: Option<f64>,
    /// Quantity per listing.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub qty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub base_price: Option<f64>,
    /// Price at which the listing auto-triggers a sale.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub trigger_price: Option<f64>,
    /// Listing timestamp as sent by the service (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub seller_id: Option<String>,
}

/// Body for create and update calls. Carries no id; updates address the
/// record through the request path instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropPayload {
    pub name: String,
    pub bag: f64,
    pub qty: i64,
    pub base_price: f64,
    pub trigger_price: f64,
    /// UTC timestamp, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub created_at: String,
    pub seller_id: String,
}

/// Signed-in farmer profile used by the dashboard header.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub fname: String,
}

/// Error body the service attaches to failed responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(id_from_value::<D::Error>(value).ok())
}

fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_f64(&value))
}

fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_f64(&value).and_then(whole_number))
}

/// Numbers and numeric strings; anything else reads as absent.
fn lenient_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn whole_number(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64).then_some(value as i64)
}

/// Decode a crop list row by row. Rows that still fail (no usable id) are
/// logged and skipped.
pub fn decode_crop_list(rows: Vec<serde_json::Value>) -> Vec<Crop> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Crop>(row) {
            Ok(crop) => Some(crop),
            Err(err) => {
                log::warn!("skipping crop row {index}: {err}");
                None
            }
        })
        .collect()
}
