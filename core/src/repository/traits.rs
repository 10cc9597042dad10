use anyhow::Result;

pub trait RecordRepository {
    /// Every row of the source, header included, as raw string fields.
    fn load_rows(&self) -> Result<Vec<Vec<String>>>;
}
