use anyhow::Result;
use log::debug;

use crate::error::GraphError;
use crate::model::criteria::Criteria;
use crate::model::record::Record;
use crate::model::series::Series;

/// Keeps the rows matching `criteria`, in file order.
///
/// The first row is the header and is always skipped. A matching row with a
/// non-numeric count aborts the whole scan.
pub fn filter_rows(rows: &[Vec<String>], criteria: &Criteria) -> Result<Series> {
    let mut series = Series::new();

    for (index, row) in rows.iter().enumerate().skip(1) {
        let line = index + 1;
        let packed = row.first().ok_or_else(|| GraphError::MalformedRow {
            line,
            content: String::new(),
        })?;
        let record = Record::from_packed(line, packed)?;

        if criteria.matches(&record.region, &record.week, &record.age) {
            let admissions = record.parse_count(line)?;
            series.push(record.week, admissions);
        }
    }

    debug!(
        "{} of {} rows matched region={} age={} years={:?}",
        series.len(),
        rows.len().saturating_sub(1),
        criteria.region,
        criteria.age,
        criteria.years
    );

    if series.is_empty() {
        return Err(GraphError::NoData {
            region: criteria.region.clone(),
            age: criteria.age.clone(),
            years: criteria.years.clone(),
        }
        .into());
    }

    Ok(series)
}
