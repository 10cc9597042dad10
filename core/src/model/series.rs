use crate::error::GraphError;
use crate::time::week_to_x;

/// Matching weeks and their admission counts, index-aligned, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    weeks: Vec<String>,
    admissions: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, week: String, admissions: i64) {
        self.weeks.push(week);
        self.admissions.push(admissions);
    }

    pub fn weeks(&self) -> &[String] {
        &self.weeks
    }

    pub fn admissions(&self) -> &[i64] {
        &self.admissions
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.weeks
            .iter()
            .map(String::as_str)
            .zip(self.admissions.iter().copied())
    }

    pub fn total(&self) -> i64 {
        self.admissions.iter().sum()
    }

    /// Week with the highest count; the earliest one wins a tie.
    pub fn peak(&self) -> Option<(&str, i64)> {
        let mut best: Option<(&str, i64)> = None;
        for (week, n) in self.iter() {
            if best.map_or(true, |(_, m)| n > m) {
                best = Some((week, n));
            }
        }
        best
    }

    pub fn to_points(&self) -> Result<Vec<ChartPoint>, GraphError> {
        to_points(&self.weeks, &self.admissions)
    }
}

pub fn to_points(weeks: &[String], admissions: &[i64]) -> Result<Vec<ChartPoint>, GraphError> {
    if weeks.len() != admissions.len() {
        return Err(GraphError::SeriesMismatch {
            weeks: weeks.len(),
            counts: admissions.len(),
        });
    }

    weeks
        .iter()
        .zip(admissions)
        .map(|(week, &n)| {
            Ok(ChartPoint {
                x: week_to_x(week)?,
                y: n as f64,
            })
        })
        .collect()
}
