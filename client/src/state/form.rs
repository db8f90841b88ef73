//! Draft fields for the create/edit crop modal.
//!
//! DESIGN
//! ======
//! The form keeps every field as the raw text the inputs produced. Turning a
//! form into a `CropPayload` validates in two passes over those strings:
//! first every field must be present, then each typed field must parse. A
//! payload therefore never carries a NaN or a silently truncated quantity.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::net::types::{Crop, CropPayload};

/// `datetime-local` inputs emit minute precision; seconds and fractions are
/// accepted when typed by hand.
const LOCAL_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Length of `YYYY-MM-DDTHH:MM`.
const MINUTE_PREFIX_LEN: usize = 16;

/// One editable field of the crop form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CropField {
    Name,
    Bag,
    Qty,
    BasePrice,
    TriggerPrice,
    Datetime,
    SellerId,
}

impl CropField {
    /// Every field, in form order.
    pub const ALL: [CropField; 7] = [
        CropField::Name,
        CropField::Bag,
        CropField::Qty,
        CropField::BasePrice,
        CropField::TriggerPrice,
        CropField::Datetime,
        CropField::SellerId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Bag => "Bag",
            Self::Qty => "Quantity",
            Self::BasePrice => "Base Price",
            Self::TriggerPrice => "Trigger Price",
            Self::Datetime => "Date",
            Self::SellerId => "Seller ID",
        }
    }

    /// DOM id for the input, also used as the label's `for`.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Bag => "bag",
            Self::Qty => "qty",
            Self::BasePrice => "basePrice",
            Self::TriggerPrice => "triggerPrice",
            Self::Datetime => "datetime",
            Self::SellerId => "sellerId",
        }
    }

    /// HTML input `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name | Self::SellerId => "text",
            Self::Bag | Self::Qty | Self::BasePrice | Self::TriggerPrice => "number",
            Self::Datetime => "datetime-local",
        }
    }
}

/// Reasons a draft cannot become a payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one field is blank; lists them in form order.
    #[error("All fields are required.")]
    MissingFields(Vec<CropField>),
    #[error("{} must be a number, got {value:?}", .field.label())]
    InvalidNumber { field: CropField, value: String },
    #[error("{} must be a whole number, got {value:?}", .field.label())]
    InvalidInteger { field: CropField, value: String },
    #[error("Date {0:?} is not a valid date and time")]
    InvalidDatetime(String),
}

/// Raw text of every editable crop field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CropForm {
    pub name: String,
    pub bag: String,
    pub qty: String,
    pub base_price: String,
    pub trigger_price: String,
    /// `YYYY-MM-DDTHH:MM` as a `datetime-local` input expects.
    pub datetime: String,
    pub seller_id: String,
}

impl CropForm {
    /// Copy a server record into draft fields. Numbers keep their exact
    /// value; the timestamp is converted to UTC and cut to minute precision
    /// for the input, matching how `normalize_timestamp` reads it back.
    pub fn from_crop(crop: &Crop) -> Self {
        Self {
            name: crop.name.clone(),
            bag: crop.bag.map(format_number).unwrap_or_default(),
            qty: crop.qty.map(|q| q.to_string()).unwrap_or_default(),
            base_price: crop.base_price.map(format_number).unwrap_or_default(),
            trigger_price: crop.trigger_price.map(format_number).unwrap_or_default(),
            datetime: crop.created_at.as_deref().map(input_datetime).unwrap_or_default(),
            seller_id: crop.seller_id.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: CropField) -> &str {
        match field {
            CropField::Name => &self.name,
            CropField::Bag => &self.bag,
            CropField::Qty => &self.qty,
            CropField::BasePrice => &self.base_price,
            CropField::TriggerPrice => &self.trigger_price,
            CropField::Datetime => &self.datetime,
            CropField::SellerId => &self.seller_id,
        }
    }

    pub fn set(&mut self, field: CropField, value: String) {
        let slot = match field {
            CropField::Name => &mut self.name,
            CropField::Bag => &mut self.bag,
            CropField::Qty => &mut self.qty,
            CropField::BasePrice => &mut self.base_price,
            CropField::TriggerPrice => &mut self.trigger_price,
            CropField::Datetime => &mut self.datetime,
            CropField::SellerId => &mut self.seller_id,
        };
        *slot = value;
    }

    /// Blank fields in form order.
    pub fn missing_fields(&self) -> Vec<CropField> {
        CropField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// `MissingFields` if anything is blank, otherwise the first field that
    /// fails to parse.
    pub fn to_payload(&self) -> Result<CropPayload, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(CropPayload {
            name: self.name.trim().to_owned(),
            bag: parse_number(CropField::Bag, &self.bag)?,
            qty: parse_integer(CropField::Qty, &self.qty)?,
            base_price: parse_number(CropField::BasePrice, &self.base_price)?,
            trigger_price: parse_number(CropField::TriggerPrice, &self.trigger_price)?,
            created_at: normalize_timestamp(&self.datetime)?,
            seller_id: self.seller_id.trim().to_owned(),
        })
    }
}

fn parse_number(field: CropField, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumber {
            field,
            value: raw.to_owned(),
        }),
    }
}

fn parse_integer(field: CropField, raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse::<i64>().map_err(|_| ValidationError::InvalidInteger {
        field,
        value: raw.to_owned(),
    })
}

/// Convert a `datetime-local` or RFC 3339 value to
/// `YYYY-MM-DDTHH:MM:SS.mmmZ`. Values without an offset are taken as UTC.
///
/// # Errors
///
/// `InvalidDatetime` if no accepted format matches.
pub fn normalize_timestamp(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let utc = if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        with_offset.with_timezone(&Utc)
    } else {
        LOCAL_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(|naive| naive.and_utc())
            .ok_or_else(|| ValidationError::InvalidDatetime(raw.to_owned()))?
    };
    Ok(utc.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Shortest decimal text for a number: `50`, `20.5`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// `YYYY-MM-DDTHH:MM` in UTC for a stored timestamp. Values that are not
/// RFC 3339 are cut to their first sixteen characters.
fn input_datetime(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(parsed) => parsed.with_timezone(&Utc).format("%Y-%m-%dT%H:%M").to_string(),
        Err(_) => timestamp.chars().take(MINUTE_PREFIX_LEN).collect(),
    }
}
