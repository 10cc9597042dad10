pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::GraphError;
pub use input::parse_criteria;
pub use model::criteria::Criteria;
pub use model::record::Record;
pub use model::series::{ChartPoint, Series};
pub use repository::{CsvRecordRepository, RecordRepository, DEFAULT_DATA_PATH};
pub use service::chart_service::{render_chart, ChartRenderer, DEFAULT_GRAPH_PATH};
pub use service::filter_service::filter_rows;
pub use service::labels::ChartLabels;
pub use time::{parse_week_label, week_to_x};
pub use usecase::graph::GraphUseCase;
