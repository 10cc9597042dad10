use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("Veuillez spécifier 'years' au format YYYY (ex : 2020)")]
    InvalidYears,
    #[error("Veuillez spécifier 'region' au format RR (ex : 01)")]
    InvalidRegion,
    #[error("Veuillez spécifier 'age' au format AA (ex : 09)")]
    InvalidAge,

    #[error("Erreur string to int: ligne {line}: '{value}' n'est pas un entier")]
    InvalidCount { line: usize, value: String },
    #[error("ligne {line} mal formée: '{content}'")]
    MalformedRow { line: usize, content: String },
    #[error("semaine invalide: '{0}' (format attendu YYYY-SWW)")]
    InvalidWeekLabel(String),

    #[error("{}", no_data_message(.region, .age, .years.as_deref()))]
    NoData {
        region: String,
        age: String,
        years: Option<String>,
    },

    #[error("aucun point à tracer")]
    EmptySeries,
    #[error("{weeks} semaines pour {counts} valeurs")]
    SeriesMismatch { weeks: usize, counts: usize },
    #[error("échec du rendu du graphique: {0}")]
    Render(String),
}

fn no_data_message(region: &str, age: &str, years: Option<&str>) -> String {
    match years {
        Some(y) => format!(
            "Aucune donnée pour l'année {}, la region {} et l'age {}",
            y, region, age
        ),
        None => format!("Aucune donnée pour la region {} et l'age {}", region, age),
    }
}
