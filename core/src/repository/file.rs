use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::model::trip::TripRecord;
use crate::repository::traits::TripRepository;

const DEFAULT_FILE_NAME: &str = "trips.json";

/// Keeps every owner's trips as one JSON array, rewritten on each append.
#[derive(Clone)]
pub struct FileTripRepository {
    file_path: PathBuf,
}

impl FileTripRepository {
    pub fn new(base_dir: &Path) -> Result<Self> {
        fs::create_dir_all(base_dir)
            .with_context(|| format!("create data directory {}", base_dir.display()))?;
        let path = base_dir.join(DEFAULT_FILE_NAME);

        // Ensure the file itself exists; start with an empty array
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<TripRecord>::new())?;
            writer.flush()?;
            debug!(path = %path.display(), "initialized trip store");
        }

        Ok(FileTripRepository { file_path: path })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_records(&self) -> Result<Vec<TripRecord>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let records: Vec<TripRecord> = serde_json::from_reader(reader)
            .with_context(|| format!("parse {}", self.file_path.display()))?;
        debug!(count = records.len(), "loaded trips");
        Ok(records)
    }

    fn write_records(&self, records: &[TripRecord]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        debug!(count = records.len(), "saved trips");
        Ok(())
    }
}

impl TripRepository for FileTripRepository {
    fn create(&self, record: TripRecord) -> Result<TripRecord> {
        let mut records = self.read_records()?;
        records.push(record.clone());
        self.write_records(&records)?;
        Ok(record)
    }

    /// Documents missing a date, origin or destination stay on disk but are
    /// never handed out.
    fn list(&self) -> Result<Vec<TripRecord>> {
        let (complete, incomplete): (Vec<_>, Vec<_>) = self
            .read_records()?
            .into_iter()
            .partition(TripRecord::is_complete);
        for record in &incomplete {
            warn!(id = %record.id, "skipping stored trip without date/from/to");
        }
        Ok(complete)
    }
}
