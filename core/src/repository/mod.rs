pub mod file;
pub mod traits;

// Re-export
pub use file::{CsvRecordRepository, DEFAULT_DATA_PATH};
pub use traits::RecordRepository;
