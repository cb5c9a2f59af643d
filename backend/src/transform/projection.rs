//! Column projection and rename.
//!
//! Selects the five source columns of the raw export and maps them onto
//! [`RawShipmentRecord`] fields. Every other column is discarded.

use crate::error::{TransformError, TransformResult};
use crate::models::{raw_columns, RawShipmentRecord};
use crate::parser::ParseResult;

/// Header positions of the five projected columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    scheduled: usize,
    delivered: usize,
    mode: usize,
    freight: usize,
    country: usize,
}

impl Projection {
    /// Resolve the projected columns against a header row.
    ///
    /// Fails on the first expected column that is absent.
    pub fn resolve(headers: &[String]) -> TransformResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            scheduled: find(raw_columns::SCHEDULED_DATE)?,
            delivered: find(raw_columns::DELIVERED_DATE)?,
            mode: find(raw_columns::SHIPMENT_MODE)?,
            freight: find(raw_columns::FREIGHT_COST)?,
            country: find(raw_columns::COUNTRY)?,
        })
    }

    /// Apply the projection to one row.
    pub fn apply(&self, row: &[String]) -> RawShipmentRecord {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();

        RawShipmentRecord {
            estimated_delivery_date: cell(self.scheduled),
            actual_delivery_date: cell(self.delivered),
            carrier_name: cell(self.mode),
            shipping_cost: cell(self.freight),
            destination_country: cell(self.country),
        }
    }
}

/// Project every row of a parsed export.
pub fn project(parsed: &ParseResult) -> TransformResult<Vec<RawShipmentRecord>> {
    let projection = Projection::resolve(&parsed.headers)?;
    Ok(parsed.rows.iter().map(|row| projection.apply(row)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(headers: &[&str], rows: &[&[&str]]) -> ParseResult {
        ParseResult {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            encoding: "utf-8".into(),
            delimiter: ',',
        }
    }

    #[test]
    fn test_projects_and_renames_in_any_source_order() {
        let input = parsed(
            &[
                "ID",
                "Country",
                "Freight Cost (USD)",
                "Shipment Mode",
                "Delivered to Client Date",
                "Scheduled Delivery Date",
                "Vendor",
            ],
            &[&["1", "Haiti", "780.34", "Air", "2006-06-02", "2006-06-01", "ACME"]],
        );

        let records = project(&input).unwrap();

        assert_eq!(
            records[0],
            RawShipmentRecord {
                estimated_delivery_date: "2006-06-01".into(),
                actual_delivery_date: "2006-06-02".into(),
                carrier_name: "Air".into(),
                shipping_cost: "780.34".into(),
                destination_country: "Haiti".into(),
            }
        );
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let input = parsed(
            &[
                "Country",
                "Shipment Mode",
                "Delivered to Client Date",
                "Scheduled Delivery Date",
            ],
            &[],
        );

        let err = project(&input).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(ref c) if c == "Freight Cost (USD)"));
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let input = parsed(
            &[
                "country",
                "Freight Cost (USD)",
                "Shipment Mode",
                "Delivered to Client Date",
                "Scheduled Delivery Date",
            ],
            &[],
        );

        assert!(matches!(
            project(&input),
            Err(TransformError::MissingColumn(ref c)) if c == "Country"
        ));
    }
}
