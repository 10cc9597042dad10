use anyhow::{Context, Result};
use log::info;

use crate::model::criteria::Criteria;
use crate::model::series::Series;
use crate::repository::RecordRepository;
use crate::service::chart_service::ChartRenderer;
use crate::service::filter_service::filter_rows;
use crate::service::labels::ChartLabels;

/// load -> filter -> render, stopping at the first failure.
pub struct GraphUseCase<'a, R: RecordRepository> {
    record_repo: &'a R,
    renderer: &'a ChartRenderer,
}

impl<'a, R: RecordRepository> GraphUseCase<'a, R> {
    pub fn new(record_repo: &'a R, renderer: &'a ChartRenderer) -> Self {
        Self {
            record_repo,
            renderer,
        }
    }

    pub fn build_series(&self, criteria: &Criteria) -> Result<Series> {
        let rows = self
            .record_repo
            .load_rows()
            .context("erreur lors de l'ouverture du fichier")?;
        filter_rows(&rows, criteria)
    }

    pub fn draw(&self, criteria: &Criteria, series: &Series) -> Result<()> {
        let labels = ChartLabels::for_criteria(criteria);
        self.renderer
            .render(&labels, series.weeks(), series.admissions())
            .context("Erreur lors de la création du graphique des hospitalisations")?;
        info!(
            "wrote {} points to {}",
            series.len(),
            self.renderer.path().display()
        );
        Ok(())
    }

    pub fn run(&self, criteria: &Criteria) -> Result<Series> {
        let series = self.build_series(criteria)?;
        self.draw(criteria, &series)?;
        Ok(series)
    }
}
