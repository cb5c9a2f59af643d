//! Per-field parse-or-missing coercion.
//!
//! Every parser here returns `None` instead of an error. Rows holding a
//! `None` in any field are removed by the completeness filter.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::RawShipmentRecord;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%b-%y", "%d-%b-%Y", "%m/%d/%Y"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a freight cost. Descriptive text, blanks and non-finite values
/// are missing. No range check: a negative cost is kept.
pub fn parse_cost(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a calendar date. Timestamps contribute their date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Trim a label; blank is missing.
pub fn parse_text(raw: &str) -> Option<String> {
    let s = raw.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// A raw record after typing, before the completeness filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercedShipment {
    pub estimated_delivery_date: Option<NaiveDate>,
    pub actual_delivery_date: Option<NaiveDate>,
    pub carrier_name: Option<String>,
    pub shipping_cost: Option<f64>,
    pub destination_country: Option<String>,
}

/// The five base fields of a record that passed the completeness filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteShipment {
    pub estimated_delivery_date: NaiveDate,
    pub actual_delivery_date: NaiveDate,
    pub carrier_name: String,
    pub shipping_cost: f64,
    pub destination_country: String,
}

impl CoercedShipment {
    /// Names of the fields that ended up missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        use crate::models::columns::*;

        let mut missing = Vec::new();
        if self.estimated_delivery_date.is_none() {
            missing.push(ESTIMATED_DELIVERY_DATE);
        }
        if self.actual_delivery_date.is_none() {
            missing.push(ACTUAL_DELIVERY_DATE);
        }
        if self.carrier_name.is_none() {
            missing.push(CARRIER_NAME);
        }
        if self.shipping_cost.is_none() {
            missing.push(SHIPPING_COST);
        }
        if self.destination_country.is_none() {
            missing.push(DESTINATION_COUNTRY);
        }
        missing
    }

    /// Completeness gate: `Some` only when all five fields are present.
    pub fn complete(self) -> Option<CompleteShipment> {
        Some(CompleteShipment {
            estimated_delivery_date: self.estimated_delivery_date?,
            actual_delivery_date: self.actual_delivery_date?,
            carrier_name: self.carrier_name?,
            shipping_cost: self.shipping_cost?,
            destination_country: self.destination_country?,
        })
    }
}

/// Type every field of a projected raw record.
pub fn coerce(raw: &RawShipmentRecord) -> CoercedShipment {
    CoercedShipment {
        estimated_delivery_date: parse_date(&raw.estimated_delivery_date),
        actual_delivery_date: parse_date(&raw.actual_delivery_date),
        carrier_name: parse_text(&raw.carrier_name),
        shipping_cost: parse_cost(&raw.shipping_cost),
        destination_country: parse_text(&raw.destination_country),
    }
}
