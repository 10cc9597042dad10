/// Validated filter criteria. Build it with [`crate::input::parse_criteria`].
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub region: String,
    pub age: String,
    pub years: Option<String>,
}

impl Criteria {
    pub fn matches(&self, region: &str, week: &str, age: &str) -> bool {
        region.contains(self.region.as_str())
            && age.contains(self.age.as_str())
            && self.years.as_deref().map_or(true, |y| week.contains(y))
    }
}
