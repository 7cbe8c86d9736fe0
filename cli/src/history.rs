use triplog_core::{aggregate_by_month, totals, TripRecord};
use triplog_core::time::month_key;
use tabled::{Table, Tabled};
use tabled::settings::{Style, Color, Modify};
use tabled::settings::object::Rows;

// Helper struct for Table Row
#[derive(Tabled)]
struct TripRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Purpose")]
    purpose: String,
    #[tabled(rename = "Km")]
    km: String,
    #[tabled(rename = "Fuel")]
    fuel: String,
    #[tabled(rename = "Toll")]
    toll: String,
}

impl From<&TripRecord> for TripRow {
    fn from(trip: &TripRecord) -> Self {
        Self {
            date: trip.date.clone(),
            route: format!("{} → {}", trip.from, trip.to),
            purpose: trip.purpose.clone(),
            km: or_dash(&trip.distance_km),
            fuel: or_dash(&trip.fuel_cost),
            toll: or_dash(&trip.toll_cost),
        }
    }
}

/// Prints one table per month, months in the order they were first logged.
pub fn show_history(trips: &[TripRecord]) {
    if trips.is_empty() {
        println!("No trips logged yet.");
        return;
    }

    let stats = aggregate_by_month(trips);
    for (month, month_totals) in stats.iter() {
        let label = if month.is_empty() { "(no date)" } else { month };
        println!(
            "\n\x1b[1;36m{}\x1b[0m (Km: {}, Fuel: {}, Toll: {})",
            label,
            format_amount(month_totals.distance_km),
            format_amount(month_totals.fuel_cost),
            format_amount(month_totals.toll_cost),
        );

        let rows: Vec<TripRow> = trips
            .iter()
            .filter(|t| month_key(&t.date) == month)
            .map(TripRow::from)
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::modern())
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

        println!("{}", table);
    }

    let grand = totals(trips);
    println!(
        "\nTotal distance: {}km / Total fuel: {} / Total toll: {}",
        format_amount(grand.distance_km),
        format_amount(grand.fuel_cost),
        format_amount(grand.toll_cost),
    );
}

/// Full precision, no trailing `.0`.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        // also catches -0
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() { "-".to_string() } else { value.to_string() }
}
