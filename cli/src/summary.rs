use anyhow::Result;
use hospgraph_core::Series;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Semaine")]
    week: String,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Admissions")]
    admissions: i64,
}

fn rows(series: &Series) -> Result<Vec<SeriesRow>> {
    let points = series.to_points()?;
    Ok(series
        .iter()
        .zip(points)
        .map(|((week, admissions), point)| SeriesRow {
            week: week.to_string(),
            x: format!("{:.4}", point.x),
            admissions,
        })
        .collect())
}

pub fn show_series(series: &Series) -> Result<()> {
    let mut table = Table::new(rows(series)?);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    print!("{} semaines, {} admissions", series.len(), series.total());
    if let Some((week, peak)) = series.peak() {
        print!(", pic {} en {}", peak, week);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_series_order() {
        let mut series = Series::new();
        series.push("2020-S02".to_string(), 7);
        series.push("2020-S01".to_string(), 5);

        let rows = rows(&series).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].week, "2020-S02");
        assert_eq!(rows[0].x, "2020.0385");
        assert_eq!(rows[1].admissions, 5);
    }
}
