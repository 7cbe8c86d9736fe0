use crate::repository::TripRepository;
use crate::service::aggregate::{aggregate_by_month, day_total, totals};
use crate::service::dto::{Dashboard, ExportRow};
use crate::service::route::day_route;
use crate::service::view::{chart_series, export_rows};
use crate::time::day_key;
use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

/// Recomputes every view of one owner's log from scratch.
pub struct DashboardUseCase<'a, R: TripRepository> {
    repo: &'a R,
    owner_id: &'a str,
}

impl<'a, R: TripRepository> DashboardUseCase<'a, R> {
    pub fn new(repo: &'a R, owner_id: &'a str) -> Self {
        Self { repo, owner_id }
    }

    pub fn build(&self, selected: NaiveDate) -> Result<Dashboard> {
        let trips = self.repo.list_by_owner(self.owner_id)?;
        let selected_date = day_key(selected);

        let stats = aggregate_by_month(&trips);
        debug!(trips = trips.len(), months = stats.len(), %selected_date, "dashboard recomputed");

        Ok(Dashboard {
            totals: totals(&trips),
            chart: chart_series(&stats),
            day_total: day_total(&trips, &selected_date),
            route: day_route(&trips, &selected_date),
            selected_date,
            trips,
        })
    }

    pub fn export(&self, month: &str) -> Result<Vec<ExportRow>> {
        let trips = self.repo.list_by_owner(self.owner_id)?;
        Ok(export_rows(&trips, month))
    }
}
