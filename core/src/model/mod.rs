pub mod criteria;
pub mod record;
pub mod series;
