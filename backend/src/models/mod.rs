//! Domain models for the shipment pipeline.
//!
//! - [`RawShipmentRecord`] - the five projected raw fields, still untyped
//! - [`CleanedShipmentRecord`] - a fully populated, typed interchange row
//! - [`raw_columns`] / [`columns`] - column names on both sides of the rename

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Column Names
// =============================================================================

/// Column names of the upstream export.
pub mod raw_columns {
    pub const SCHEDULED_DATE: &str = "Scheduled Delivery Date";
    pub const DELIVERED_DATE: &str = "Delivered to Client Date";
    pub const SHIPMENT_MODE: &str = "Shipment Mode";
    pub const FREIGHT_COST: &str = "Freight Cost (USD)";
    pub const COUNTRY: &str = "Country";
}

/// Column names of the interchange artifact.
pub mod columns {
    pub const ESTIMATED_DELIVERY_DATE: &str = "estimated_delivery_date";
    pub const ACTUAL_DELIVERY_DATE: &str = "actual_delivery_date";
    pub const CARRIER_NAME: &str = "carrier_name";
    pub const SHIPPING_COST: &str = "shipping_cost";
    pub const DESTINATION_COUNTRY: &str = "destination_country";
    pub const DELIVERY_TIME_DAYS: &str = "delivery_time_days";
    pub const ON_TIME: &str = "on_time";
    pub const ROUTE: &str = "route";
}

/// Raw column → target column, in projection order.
pub const RENAMES: [(&str, &str); 5] = [
    (raw_columns::SCHEDULED_DATE, columns::ESTIMATED_DELIVERY_DATE),
    (raw_columns::DELIVERED_DATE, columns::ACTUAL_DELIVERY_DATE),
    (raw_columns::SHIPMENT_MODE, columns::CARRIER_NAME),
    (raw_columns::FREIGHT_COST, columns::SHIPPING_COST),
    (raw_columns::COUNTRY, columns::DESTINATION_COUNTRY),
];

/// Interchange header, in its fixed order.
pub const INTERCHANGE_HEADER: [&str; 8] = [
    columns::ESTIMATED_DELIVERY_DATE,
    columns::ACTUAL_DELIVERY_DATE,
    columns::CARRIER_NAME,
    columns::SHIPPING_COST,
    columns::DESTINATION_COUNTRY,
    columns::DELIVERY_TIME_DAYS,
    columns::ON_TIME,
    columns::ROUTE,
];

// =============================================================================
// Raw Record
// =============================================================================

/// The projected and renamed raw fields of one export row.
///
/// Values are kept as text exactly as read; typing happens in
/// [`crate::transform::coerce`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawShipmentRecord {
    pub estimated_delivery_date: String,
    pub actual_delivery_date: String,
    pub carrier_name: String,
    pub shipping_cost: String,
    pub destination_country: String,
}

// =============================================================================
// Cleaned Record
// =============================================================================

/// One fully populated row of the interchange artifact.
///
/// `delivery_time_days` is `actual - estimated` in whole days (late is
/// positive) and `on_time` holds iff it is `<= 0`. Build through
/// [`crate::transform::kpi::derive_record`] to keep both in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedShipmentRecord {
    pub estimated_delivery_date: NaiveDate,
    pub actual_delivery_date: NaiveDate,
    pub carrier_name: String,
    pub shipping_cost: f64,
    pub destination_country: String,
    pub delivery_time_days: i64,
    pub on_time: bool,
    pub route: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_order_starts_with_renamed_columns() {
        let renamed: Vec<&str> = RENAMES.iter().map(|(_, to)| *to).collect();
        assert_eq!(&INTERCHANGE_HEADER[..5], renamed.as_slice());
    }

    #[test]
    fn test_serialized_keys_match_header() {
        let record = CleanedShipmentRecord {
            estimated_delivery_date: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap(),
            actual_delivery_date: NaiveDate::from_ymd_opt(2020, 1, 8).unwrap(),
            carrier_name: "Air".into(),
            shipping_cost: 12.5,
            destination_country: "Haiti".into(),
            delivery_time_days: -2,
            on_time: true,
            route: "Haiti".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        let mut expected: Vec<&str> = INTERCHANGE_HEADER.to_vec();
        expected.sort_unstable();
        let mut actual: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        actual.sort_unstable();
        assert_eq!(actual, expected);
        assert_eq!(json["estimated_delivery_date"], "2020-01-10");
    }
}
