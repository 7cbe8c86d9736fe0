use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use triplog_core::{export_file_stem, ExportRow};

/// Writes the row matrix (header included) as CSV.
pub fn write_rows<W: Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `vehicle_log_<month>.csv` into `out_dir` and returns its path.
pub fn export_month(out_dir: &Path, month: &str, rows: &[ExportRow]) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let path = out_dir.join(format!("{}.csv", export_file_stem(month)));
    let file = std::fs::File::create(&path)
        .with_context(|| format!("create {}", path.display()))?;
    write_rows(file, rows)?;
    Ok(path)
}
