pub mod aggregation_service;
pub mod chart_service;
pub mod data_service;
pub mod ranking_service;
pub mod screen_service;
pub mod summary_service;

pub use aggregation_service::AggregationService;
pub use chart_service::{ArcSegment, ChartGeometry, ChartService, DonutChart, LegendItem, Point};
pub use data_service::DataService;
pub use ranking_service::RankingService;
pub use screen_service::{AnalyticsView, HomeView, PaymentsView, ScreenService};
pub use summary_service::{SummaryService, Totals};

use crate::errors::SpendError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] SpendError),
    #[error("{0}")]
    Invalid(String),
}
