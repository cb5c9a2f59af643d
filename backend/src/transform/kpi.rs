//! KPI derivation for complete shipments.
//!
//! Each record is derived on its own; nothing here looks across rows.

use chrono::NaiveDate;

use super::coerce::CompleteShipment;
use crate::models::CleanedShipmentRecord;

/// Whole days between estimated and actual delivery. Late is positive.
pub fn delivery_time_days(estimated: NaiveDate, actual: NaiveDate) -> i64 {
    (actual - estimated).num_days()
}

/// Delivered on or before the estimated date.
pub fn is_on_time(delivery_time_days: i64) -> bool {
    delivery_time_days <= 0
}

/// Route label for a destination. Only the destination is known, so the
/// route is the destination country itself.
pub fn route_for(destination_country: &str) -> String {
    destination_country.to_string()
}

/// Attach `delivery_time_days`, `on_time` and `route` to a complete shipment.
pub fn derive_record(shipment: CompleteShipment) -> CleanedShipmentRecord {
    let days = delivery_time_days(
        shipment.estimated_delivery_date,
        shipment.actual_delivery_date,
    );

    CleanedShipmentRecord {
        route: route_for(&shipment.destination_country),
        estimated_delivery_date: shipment.estimated_delivery_date,
        actual_delivery_date: shipment.actual_delivery_date,
        carrier_name: shipment.carrier_name,
        shipping_cost: shipment.shipping_cost,
        destination_country: shipment.destination_country,
        delivery_time_days: days,
        on_time: is_on_time(days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(estimated: &str, actual: &str) -> CompleteShipment {
        CompleteShipment {
            estimated_delivery_date: NaiveDate::parse_from_str(estimated, "%Y-%m-%d").unwrap(),
            actual_delivery_date: NaiveDate::parse_from_str(actual, "%Y-%m-%d").unwrap(),
            carrier_name: "Air".into(),
            shipping_cost: 120.0,
            destination_country: "Nigeria".into(),
        }
    }

    #[test]
    fn test_early_delivery_is_on_time() {
        let r = derive_record(shipment("2020-01-10", "2020-01-08"));
        assert_eq!(r.delivery_time_days, -2);
        assert!(r.on_time);
        assert_eq!(r.route, "Nigeria");
    }

    #[test]
    fn test_late_delivery_is_not_on_time() {
        let r = derive_record(shipment("2020-01-10", "2020-01-15"));
        assert_eq!(r.delivery_time_days, 5);
        assert!(!r.on_time);
    }

    #[test]
    fn test_same_day_is_on_time() {
        let r = derive_record(shipment("2020-03-01", "2020-03-01"));
        assert_eq!(r.delivery_time_days, 0);
        assert!(r.on_time);
    }

    #[test]
    fn test_spans_month_and_leap_day() {
        let r = derive_record(shipment("2020-02-27", "2020-03-02"));
        assert_eq!(r.delivery_time_days, 4);
    }
}
