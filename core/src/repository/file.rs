use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::error::GraphError;
use crate::repository::traits::RecordRepository;

pub const DEFAULT_DATA_PATH: &str = "data/covid-hosp-age.csv";

#[derive(Clone)]
pub struct CsvRecordRepository {
    file_path: PathBuf,
}

impl CsvRecordRepository {
    pub fn new(file_path: Option<PathBuf>) -> Self {
        let file_path = file_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        CsvRecordRepository { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>, GraphError> {
        let file = File::open(&self.file_path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(BufReader::new(file));

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}

impl RecordRepository for CsvRecordRepository {
    fn load_rows(&self) -> Result<Vec<Vec<String>>> {
        let rows = self.read_rows()?;
        debug!("loaded {} rows from {}", rows.len(), self.file_path.display());
        Ok(rows)
    }
}
