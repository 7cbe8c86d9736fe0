use crate::model::stats::MonthlyStats;
use crate::model::trip::TripRecord;
use crate::service::aggregate::month_trips;
use crate::service::dto::{ChartSeries, ExportRow, Measure, Series, EXPORT_HEADER};

/// One series per measure, values aligned to the month labels.
///
/// Series always come out as distance, fuel, toll so callers can assign
/// labels and colors by position.
pub fn chart_series(stats: &MonthlyStats) -> ChartSeries {
    let labels = stats.months().map(str::to_string).collect();
    let series = Measure::ALL.map(|measure| Series {
        measure,
        values: stats.iter().map(|(_, totals)| measure.pick(totals)).collect(),
    });

    ChartSeries { labels, series }
}

/// Header row followed by every trip of `month`, raw text as entered.
pub fn export_rows(records: &[TripRecord], month: &str) -> Vec<ExportRow> {
    let mut rows = vec![EXPORT_HEADER.map(str::to_string)];
    rows.extend(month_trips(records, month).into_iter().map(export_row));
    rows
}

pub fn export_row(record: &TripRecord) -> ExportRow {
    record.columns().map(str::to_string)
}

/// File stem the spreadsheet writer uses for a month export.
pub fn export_file_stem(month: &str) -> String {
    format!("vehicle_log_{}", month)
}
