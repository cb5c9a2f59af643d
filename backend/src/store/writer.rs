//! Interchange artifact writer.
//!
//! Output is deterministic: the same records always encode to the same bytes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::models::{CleanedShipmentRecord, INTERCHANGE_HEADER};

/// Date format used for both date columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Encode records as interchange CSV into any writer.
pub fn encode_records<W: Write>(writer: W, records: &[CleanedShipmentRecord]) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(INTERCHANGE_HEADER)?;

    for r in records {
        out.write_record([
            r.estimated_delivery_date.format(DATE_FORMAT).to_string(),
            r.actual_delivery_date.format(DATE_FORMAT).to_string(),
            r.carrier_name.clone(),
            r.shipping_cost.to_string(),
            r.destination_country.clone(),
            r.delivery_time_days.to_string(),
            if r.on_time { "1" } else { "0" }.to_string(),
            r.route.clone(),
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Replace `path` with the encoded records.
///
/// Writes to a temporary sibling first and renames it over `path`, so the
/// destination holds either the previous content or the complete new one.
pub fn write_records(path: &Path, records: &[CleanedShipmentRecord]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    encode_records(tmp.as_file_mut(), records)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
