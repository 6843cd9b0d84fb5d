//! Small presentational widgets shared by the content pages.

pub mod badge;
pub mod chart;
pub mod metric_card;
