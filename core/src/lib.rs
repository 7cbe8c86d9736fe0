pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;
pub mod usecase;
pub mod validate;

pub use config::AppConfig;
pub use error::{TripError, ValidationError};
pub use model::trip::{TripDraft, TripRecord};
pub use model::stats::{MonthlyStats, Totals};
pub use model::route::Coordinate;
pub use repository::{TripRepository, FileTripRepository};
pub use input::{parse_args, expand_key, coerce_number, draft_from_args, split_line, ParsedInput};
pub use time::{parse_human_date, parse_selection, Selection};
pub use service::aggregate::{aggregate_by_month, totals, day_total, day_trips, month_trips};
pub use service::view::{chart_series, export_rows, export_file_stem};
pub use service::route::{to_coordinate, day_route};
pub use service::trip_service::TripService;
pub use service::dto::{ChartSeries, Series, Measure, ExportRow, Dashboard};
pub use usecase::dashboard::DashboardUseCase;
pub use validate::{validate, DateMode, ValidationPolicy};
