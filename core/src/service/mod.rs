pub mod chart_service;
pub mod filter_service;
pub mod labels;
