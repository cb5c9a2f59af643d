//! Transform stage orchestration.
//!
//! Raw export → projection → coercion → completeness filter → KPI
//! derivation → interchange artifact.
//!
//! # Example
//!
//! ```rust,ignore
//! use shiptrack::{run_etl, EtlConfig};
//!
//! let report = run_etl(&EtlConfig::default())?;
//! println!("{} clean shipments", report.output_rows);
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::coerce::coerce;
use super::kpi::derive_record;
use super::projection::project;
use crate::api::logs::{LogEntry, ProgressLog};
use crate::config::EtlConfig;
use crate::error::{TransformError, TransformResult};
use crate::models::CleanedShipmentRecord;
use crate::parser::{parse_csv_file_auto, ParseResult};
use crate::store::write_records;

/// Result of cleaning a parsed export, before anything is written.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub records: Vec<CleanedShipmentRecord>,
    pub input_rows: usize,
    /// How many rows were missing each base column (a row can count twice).
    pub missing_by_column: BTreeMap<&'static str, usize>,
}

impl CleaningOutcome {
    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.records.len()
    }
}

/// Summary of a complete transform run.
#[derive(Debug, Clone, Serialize)]
pub struct EtlReport {
    pub output_path: PathBuf,
    pub encoding: String,
    pub delimiter: char,
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_rows: usize,
    pub missing_by_column: BTreeMap<&'static str, usize>,
    /// First rows of the written artifact.
    pub preview: Vec<CleanedShipmentRecord>,
    /// Everything the operator saw.
    pub log: Vec<LogEntry>,
}

/// Steps 1-5: project, coerce, drop incomplete rows, derive KPIs.
pub fn clean_records(parsed: &ParseResult) -> TransformResult<CleaningOutcome> {
    let raw = project(parsed)?;
    let input_rows = raw.len();

    let mut missing_by_column = BTreeMap::new();
    let mut records = Vec::with_capacity(input_rows);

    for row in &raw {
        let coerced = coerce(row);
        for field in coerced.missing_fields() {
            *missing_by_column.entry(field).or_insert(0) += 1;
        }
        if let Some(complete) = coerced.complete() {
            records.push(derive_record(complete));
        }
    }

    Ok(CleaningOutcome {
        records,
        input_rows,
        missing_by_column,
    })
}

/// Run the transform stage with a stdout progress log.
pub fn run_etl(config: &EtlConfig) -> TransformResult<EtlReport> {
    run_etl_with_log(config, ProgressLog::stdout())
}

/// Run the transform stage, recording progress into `log`.
///
/// Fails before touching the output when the input is missing, unreadable
/// or lacks an expected column.
pub fn run_etl_with_log(config: &EtlConfig, mut log: ProgressLog) -> TransformResult<EtlReport> {
    log.info("Starting Supply Chain ETL script...");

    if !config.input_path.exists() {
        return Err(TransformError::InputNotFound(config.input_path.clone()));
    }

    let parsed = parse_csv_file_auto(&config.input_path)?;
    tracing::debug!(
        encoding = %parsed.encoding,
        delimiter = ?parsed.delimiter,
        rows = parsed.rows.len(),
        "raw export parsed"
    );

    log.info("Cleaning data and renaming columns...");
    let outcome = clean_records(&parsed)?;

    log.info_indent(format!("Read {} raw rows", outcome.input_rows), 1);
    if outcome.dropped_rows() > 0 {
        log.warning(format!(
            "{} rows dropped (missing or unparseable values)",
            outcome.dropped_rows()
        ));
        for (column, count) in &outcome.missing_by_column {
            log.info_indent(format!("{}: {} missing", column, count), 1);
        }
    }
    tracing::debug!(missing = ?outcome.missing_by_column, "completeness filter applied");

    log.info("Engineering features (KPIs)...");

    write_records(&config.output_path, &outcome.records).map_err(|source| TransformError::Write {
        path: config.output_path.clone(),
        source,
    })?;
    log.success(format!(
        "Success! Clean data saved to {}",
        config.output_path.display()
    ));

    let preview = outcome
        .records
        .iter()
        .take(config.preview_rows)
        .cloned()
        .collect();

    Ok(EtlReport {
        output_path: config.output_path.clone(),
        encoding: parsed.encoding,
        delimiter: parsed.delimiter,
        input_rows: outcome.input_rows,
        output_rows: outcome.records.len(),
        dropped_rows: outcome.dropped_rows(),
        missing_by_column: outcome.missing_by_column,
        preview,
        log: log.into_entries(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_bytes_auto;
    use tempfile::tempdir;

    const RAW: &str = "\
ID,Country,Shipment Mode,Scheduled Delivery Date,Delivered to Client Date,Freight Cost (USD),Vendor
1,Nigeria,Air,2020-01-10,2020-01-08,100.0,ACME
2,Zambia,Truck,2020-01-10,2020-01-15,250.5,ACME
3,Haiti,Air,2020-01-10,2020-01-11,Freight Included in Commodity Cost,ACME
4,Haiti,,2020-01-10,2020-01-11,80,ACME
5,Haiti,Ocean,Date Not Captured,2020-01-11,80,ACME
";

    fn config(dir: &std::path::Path) -> EtlConfig {
        EtlConfig {
            input_path: dir.join("supply_data.csv"),
            output_path: dir.join("analytics_data.csv"),
            preview_rows: 5,
        }
    }

    #[test]
    fn test_clean_records_drops_incomplete_rows() {
        let parsed = parse_bytes_auto(RAW.as_bytes()).unwrap();
        let outcome = clean_records(&parsed).unwrap();

        assert_eq!(outcome.input_rows, 5);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.dropped_rows(), 3);
        assert_eq!(outcome.missing_by_column["shipping_cost"], 1);
        assert_eq!(outcome.missing_by_column["carrier_name"], 1);
        assert_eq!(outcome.missing_by_column["estimated_delivery_date"], 1);

        assert_eq!(outcome.records[0].delivery_time_days, -2);
        assert!(outcome.records[0].on_time);
        assert_eq!(outcome.records[1].delivery_time_days, 5);
        assert!(!outcome.records[1].on_time);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path());

        let err = run_etl_with_log(&cfg, ProgressLog::silent()).unwrap_err();

        assert!(matches!(err, TransformError::InputNotFound(_)));
        assert!(err.to_string().contains("download the dataset from Kaggle"));
        assert!(!cfg.output_path.exists());
    }

    #[test]
    fn test_missing_column_writes_nothing() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path());
        std::fs::write(&cfg.input_path, "Country,Shipment Mode\nHaiti,Air\n").unwrap();

        let err = run_etl_with_log(&cfg, ProgressLog::silent()).unwrap_err();

        assert!(matches!(err, TransformError::MissingColumn(_)));
        assert!(!cfg.output_path.exists());
    }

    #[test]
    fn test_run_writes_artifact_and_report() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path());
        std::fs::write(&cfg.input_path, RAW).unwrap();

        let report = run_etl_with_log(&cfg, ProgressLog::silent()).unwrap();

        assert_eq!(report.output_rows, 2);
        assert_eq!(report.dropped_rows, 3);
        assert_eq!(report.preview.len(), 2);
        assert!(report
            .log
            .iter()
            .any(|e| e.message.starts_with("Success! Clean data saved to")));

        let written = crate::store::load_records(&cfg.output_path).unwrap();
        assert_eq!(written, report.preview);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path());
        std::fs::write(&cfg.input_path, RAW).unwrap();

        run_etl_with_log(&cfg, ProgressLog::silent()).unwrap();
        let first = std::fs::read(&cfg.output_path).unwrap();
        run_etl_with_log(&cfg, ProgressLog::silent()).unwrap();
        let second = std::fs::read(&cfg.output_path).unwrap();

        assert_eq!(first, second);
    }
}
