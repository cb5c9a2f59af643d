//! Interchange artifact reader.
//!
//! Tolerant where the format allows it: header columns in any order,
//! dates with or without a time component, `on_time` as `0/1` or
//! `true/false`. Anything else that does not fit the schema is an error.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{LoadError, LoadResult};
use crate::models::{CleanedShipmentRecord, INTERCHANGE_HEADER};

/// Load the interchange artifact from disk.
pub fn load_records(path: &Path) -> LoadResult<Vec<CleanedShipmentRecord>> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    read_records(file)
}

/// Decode interchange CSV from any reader.
pub fn read_records<R: Read>(reader: R) -> LoadResult<Vec<CleanedShipmentRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers().map_err(malformed)?.clone();
    let mut index = [0usize; 8];
    for (slot, name) in index.iter_mut().zip(INTERCHANGE_HEADER) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| LoadError::Malformed {
                line: 1,
                message: format!("missing column '{}'", name),
            })?;
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(malformed)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let field = |i: usize| row.get(index[i]).unwrap_or("").trim();
        let bad = |column: &str, value: &str| LoadError::Malformed {
            line,
            message: format!("invalid {} '{}'", column, value),
        };

        let estimated = parse_date(field(0)).ok_or_else(|| bad(INTERCHANGE_HEADER[0], field(0)))?;
        let actual = parse_date(field(1)).ok_or_else(|| bad(INTERCHANGE_HEADER[1], field(1)))?;
        let shipping_cost = field(3)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| bad(INTERCHANGE_HEADER[3], field(3)))?;
        let delivery_time_days = field(5)
            .parse::<i64>()
            .map_err(|_| bad(INTERCHANGE_HEADER[5], field(5)))?;
        let on_time = parse_bool(field(6)).ok_or_else(|| bad(INTERCHANGE_HEADER[6], field(6)))?;

        records.push(CleanedShipmentRecord {
            estimated_delivery_date: estimated,
            actual_delivery_date: actual,
            carrier_name: field(2).to_string(),
            shipping_cost,
            destination_country: field(4).to_string(),
            delivery_time_days,
            on_time,
            route: field(7).to_string(),
        });
    }

    Ok(records)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

fn malformed(e: csv::Error) -> LoadError {
    LoadError::Malformed {
        line: e.position().map(|p| p.line()).unwrap_or(0),
        message: e.to_string(),
    }
}
