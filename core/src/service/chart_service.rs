use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::GraphError;
use crate::model::series::{to_points, ChartPoint};
use crate::service::labels::ChartLabels;

pub const DEFAULT_GRAPH_PATH: &str = "graph/hospitalisations_graph.png";

// 6x4 inches, rasterised at DPI.
const CANVAS_INCHES: (u32, u32) = (6, 4);
const DPI: u32 = 96;

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 13;
const TITLE_LINE_HEIGHT: i32 = 16;
const TITLE_PADDING: i32 = 6;
const AXIS_MARGIN_RATIO: f64 = 0.05;

#[derive(Clone)]
pub struct ChartRenderer {
    output_path: PathBuf,
}

impl ChartRenderer {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_PATH));
        Self { output_path }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    pub fn render(&self, labels: &ChartLabels, weeks: &[String], admissions: &[i64]) -> Result<()> {
        render_chart(labels, weeks, admissions, &self.output_path)
    }
}

pub fn canvas_size() -> (u32, u32) {
    (CANVAS_INCHES.0 * DPI, CANVAS_INCHES.1 * DPI)
}

/// Writes one line-with-markers PNG, overwriting `path`.
///
/// Points are drawn in the given order. The parent directory must exist.
pub fn render_chart(
    labels: &ChartLabels,
    weeks: &[String],
    admissions: &[i64],
    path: &Path,
) -> Result<()> {
    let points = to_points(weeks, admissions)?;
    if points.is_empty() {
        return Err(GraphError::EmptySeries.into());
    }

    let (x_range, y_range) = axis_ranges(&points);
    debug!(
        "drawing {} points, x {:?}, y {:?} into {}",
        points.len(),
        x_range,
        y_range,
        path.display()
    );

    draw(labels, &points, x_range, y_range, path)
        .map_err(|e| GraphError::Render(e.to_string()))?;
    Ok(())
}

pub fn axis_ranges(points: &[ChartPoint]) -> (Range<f64>, Range<f64>) {
    let (x_min, x_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
    let x_margin = if x_max > x_min {
        (x_max - x_min) * AXIS_MARGIN_RATIO
    } else {
        0.5
    };

    let (y_min, y_max) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    let y_top = if y_max > 0.0 {
        y_max * (1.0 + AXIS_MARGIN_RATIO)
    } else {
        1.0
    };
    let y_bottom = if y_min < 0.0 {
        y_min * (1.0 + AXIS_MARGIN_RATIO)
    } else {
        0.0
    };

    ((x_min - x_margin)..(x_max + x_margin), y_bottom..y_top)
}

fn draw(
    labels: &ChartLabels,
    points: &[ChartPoint],
    x_range: Range<f64>,
    y_range: Range<f64>,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = canvas_size();
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    // The plotters caption is single-line, so each title line is drawn by hand.
    let title_lines: Vec<&str> = labels.title.lines().map(str::trim).collect();
    let title_height = TITLE_LINE_HEIGHT * title_lines.len() as i32 + 2 * TITLE_PADDING;
    let (title_area, plot_area) = root.split_vertically(title_height);

    let title_style =
        TextStyle::from((FONT, TITLE_FONT_SIZE).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in title_lines.iter().enumerate() {
        let y = TITLE_PADDING + i as i32 * TITLE_LINE_HEIGHT;
        title_area.draw_text(line, &title_style, (width as i32 / 2, y))?;
    }

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(labels.x_label.as_str())
        .y_desc(labels.y_label.as_str())
        .draw()?;

    chart.draw_series(
        LineSeries::new(points.iter().map(|p| (p.x, p.y)), BLUE.stroke_width(1)).point_size(3),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_criteria;

    fn point(x: f64, y: f64) -> ChartPoint {
        ChartPoint { x, y }
    }

    #[test]
    fn test_canvas_is_six_by_four_inches() {
        assert_eq!(canvas_size(), (576, 384));
    }

    #[test]
    fn test_axis_ranges_with_margin() {
        let (x, y) = axis_ranges(&[point(2020.0, 10.0), point(2021.0, 20.0)]);
        assert!((x.start - 2019.95).abs() < 1e-9);
        assert!((x.end - 2021.05).abs() < 1e-9);
        assert_eq!(y.start, 0.0);
        assert!((y.end - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_ranges_single_point() {
        let (x, y) = axis_ranges(&[point(2020.5, 0.0)]);
        assert_eq!(x, 2020.0..2021.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn test_render_rejects_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");
        let labels = ChartLabels::for_criteria(&parse_criteria("", "01", "09").unwrap());

        let err = render_chart(&labels, &[], &[], &path).unwrap_err();
        assert!(matches!(err.downcast_ref::<GraphError>(), Some(GraphError::EmptySeries)));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_rejects_bad_week_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");
        let labels = ChartLabels::for_criteria(&parse_criteria("", "01", "09").unwrap());

        let err = render_chart(&labels, &["2020/15".to_string()], &[3], &path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::InvalidWeekLabel(_))
        ));
        assert!(!path.exists());
    }

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    // Width and height are the first two big-endian u32 of the IHDR chunk.
    fn png_size(bytes: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    fn scenario() -> (ChartLabels, Vec<String>, Vec<i64>) {
        let labels = ChartLabels::for_criteria(&parse_criteria("", "01", "09").unwrap());
        let weeks = vec!["2020-S01".to_string(), "2020-S02".to_string()];
        (labels, weeks, vec![5, 7])
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");
        let (labels, weeks, admissions) = scenario();

        render_chart(&labels, &weeks, &admissions, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&PNG_SIGNATURE));
        assert_eq!(png_size(&bytes), (576, 384));
    }

    #[test]
    fn test_render_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");
        std::fs::write(&path, b"not an image").unwrap();
        let (labels, weeks, admissions) = scenario();

        render_chart(&labels, &weeks, &admissions, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        assert!(first.starts_with(&PNG_SIGNATURE));

        render_chart(&labels, &weeks, &admissions, &path).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert!(second.starts_with(&PNG_SIGNATURE));
        assert_eq!(png_size(&first), png_size(&second));
    }

    #[test]
    fn test_render_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("graph.png");
        let (labels, weeks, admissions) = scenario();

        let err = render_chart(&labels, &weeks, &admissions, &path).unwrap_err();
        match err.downcast_ref::<GraphError>() {
            Some(GraphError::Render(_)) => {}
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().starts_with("échec du rendu du graphique: "));
        assert!(!path.exists());
        assert!(!dir.path().join("nope").exists());
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(ChartRenderer::new(None).path(), Path::new(DEFAULT_GRAPH_PATH));
    }
}
