use serde::{Serialize, Deserialize};
use crate::model::route::Coordinate;
use crate::model::stats::Totals;
use crate::model::trip::TripRecord;

/// The three charted measures, in the order series are always emitted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Distance,
    Fuel,
    Toll,
}

impl Measure {
    pub const ALL: [Measure; 3] = [Measure::Distance, Measure::Fuel, Measure::Toll];

    pub fn label(&self) -> &'static str {
        match self {
            Measure::Distance => "Distance (km)",
            Measure::Fuel => "Fuel (KRW)",
            Measure::Toll => "Toll (KRW)",
        }
    }

    /// RGB hex used by every chart of this measure.
    pub fn color(&self) -> &'static str {
        match self {
            Measure::Distance => "#3B82F6",
            Measure::Fuel => "#10B981",
            Measure::Toll => "#F59E0B",
        }
    }

    pub fn pick(&self, totals: &Totals) -> f64 {
        match self {
            Measure::Distance => totals.distance_km,
            Measure::Fuel => totals.fuel_cost,
            Measure::Toll => totals.toll_cost,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Series {
    pub measure: Measure,
    pub values: Vec<f64>, // aligned with ChartSeries::labels
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>, // "YYYY-MM", first-seen order
    pub series: [Series; 3], // distance, fuel, toll
}

impl ChartSeries {
    /// Value of `measure` for the month at `index`; 0 past the end.
    pub fn value(&self, measure: Measure, index: usize) -> f64 {
        self.series
            .iter()
            .find(|s| s.measure == measure)
            .and_then(|s| s.values.get(index).copied())
            .unwrap_or(0.0)
    }
}

pub type ExportRow = [String; 7];

pub const EXPORT_HEADER: [&str; 7] = ["date", "from", "to", "purpose", "fuel", "toll", "km"];

/// Everything one screen needs for an owner and a selected day.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub trips: Vec<TripRecord>,
    pub totals: Totals,
    pub chart: ChartSeries,
    pub selected_date: String,
    pub day_total: f64,
    pub route: Vec<Coordinate>,
}
