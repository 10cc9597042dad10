use crate::error::GraphError;
use crate::model::criteria::Criteria;

const YEARS_LEN: usize = 4;
const REGION_LEN: usize = 2;
const AGE_LEN: usize = 2;

/// Validates the raw flag values. An empty `years` disables the year filter.
pub fn parse_criteria(years: &str, region: &str, age: &str) -> Result<Criteria, GraphError> {
    if !years.is_empty() && years.chars().count() != YEARS_LEN {
        return Err(GraphError::InvalidYears);
    }
    if region.chars().count() != REGION_LEN {
        return Err(GraphError::InvalidRegion);
    }
    if age.chars().count() != AGE_LEN {
        return Err(GraphError::InvalidAge);
    }

    Ok(Criteria {
        region: region.to_string(),
        age: age.to_string(),
        years: (!years.is_empty()).then(|| years.to_string()),
    })
}
