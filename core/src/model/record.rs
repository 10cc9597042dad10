use crate::error::GraphError;

const SUB_FIELD_SEPARATOR: char = ';';

/// One packed row of the dataset: `region;year-week;age;count`.
///
/// The count stays as text until the row is known to match, so a bad count
/// in a row that is filtered out never aborts the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub region: String,
    pub week: String,
    pub age: String,
    pub count: String,
}

impl Record {
    /// `line` is the 1-based row number in the file, used in error messages.
    pub fn from_packed(line: usize, packed: &str) -> Result<Self, GraphError> {
        let mut fields = packed.split(SUB_FIELD_SEPARATOR);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(region), Some(week), Some(age), Some(count)) => Ok(Self {
                region: region.to_string(),
                week: week.to_string(),
                age: age.to_string(),
                count: count.to_string(),
            }),
            _ => Err(GraphError::MalformedRow {
                line,
                content: packed.to_string(),
            }),
        }
    }

    pub fn parse_count(&self, line: usize) -> Result<i64, GraphError> {
        self.count.parse::<i64>().map_err(|_| GraphError::InvalidCount {
            line,
            value: self.count.clone(),
        })
    }
}
