use crate::model::criteria::Criteria;

pub const X_LABEL: &str = "Années";
pub const Y_LABEL: &str = "Nouvelles Admissions Hospitalières";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn for_criteria(criteria: &Criteria) -> Self {
        let years = criteria
            .years
            .as_ref()
            .map(|y| format!("en {}", y))
            .unwrap_or_default();

        Self {
            title: format!(
                "Admissions hospitalières {}\n dans la région {}\npour les personnes agées de {} ans",
                years, criteria.region, criteria.age
            ),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
        }
    }
}
