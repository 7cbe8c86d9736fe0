use crate::input::coerce_number;
use crate::model::stats::{MonthlyStats, Totals};
use crate::model::trip::TripRecord;
use crate::time::month_key;

/// Per-month sums of distance, fuel and toll, months in first-seen order.
pub fn aggregate_by_month(records: &[TripRecord]) -> MonthlyStats {
    records.iter().fold(MonthlyStats::new(), |mut stats, record| {
        let (km, fuel, toll) = amounts(record);
        stats.add(month_key(&record.date), km, fuel, toll);
        stats
    })
}

/// Grand totals over every record.
pub fn totals(records: &[TripRecord]) -> Totals {
    records.iter().fold(Totals::default(), |mut acc, record| {
        let (km, fuel, toll) = amounts(record);
        acc.add(km, fuel, toll);
        acc
    })
}

/// Records dated exactly `date`. No prefix matching.
pub fn day_trips<'a>(records: &'a [TripRecord], date: &str) -> Vec<&'a TripRecord> {
    records.iter().filter(|r| r.date == date).collect()
}

/// Records whose date starts with `month`, in their original order.
pub fn month_trips<'a>(records: &'a [TripRecord], month: &str) -> Vec<&'a TripRecord> {
    records.iter().filter(|r| r.date.starts_with(month)).collect()
}

/// Distance driven on `date`; zero when nothing matches.
pub fn day_total(records: &[TripRecord], date: &str) -> f64 {
    day_trips(records, date)
        .into_iter()
        .map(|r| coerce_number(&r.distance_km))
        .sum()
}

fn amounts(record: &TripRecord) -> (f64, f64, f64) {
    (
        coerce_number(&record.distance_km),
        coerce_number(&record.fuel_cost),
        coerce_number(&record.toll_cost),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trip::TripDraft;

    fn trip(date: &str, fuel: &str, toll: &str, km: &str) -> TripRecord {
        TripDraft::new(date, "A", "B")
            .with_costs(fuel, toll, km)
            .into_record("owner")
    }

    #[test]
    fn test_single_month_scenario() {
        let records = vec![
            trip("2025-05-01", "10000", "2000", "15"),
            trip("2025-05-03", "", "", "5"),
        ];

        let stats = aggregate_by_month(&records);
        assert_eq!(stats.len(), 1);
        assert_eq!(
            stats.get("2025-05"),
            Some(&Totals { distance_km: 20.0, fuel_cost: 10000.0, toll_cost: 2000.0 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(totals(&[]), Totals::default());
        assert!(aggregate_by_month(&[]).is_empty());
        assert_eq!(day_total(&[], "2025-05-01"), 0.0);
    }

    #[test]
    fn test_blank_and_garbage_amounts_count_as_zero() {
        let records = vec![trip("2025-05-01", "abc", "", ""), trip("2025-05-02", "1", "2", "3")];

        assert_eq!(totals(&records), Totals { distance_km: 3.0, fuel_cost: 1.0, toll_cost: 2.0 });
        assert_eq!(day_total(&records, "2025-05-01"), 0.0);
    }

    #[test]
    fn test_partition_sums_to_totals() {
        let records = vec![
            trip("2025-04-30", "100", "10", "7.5"),
            trip("2025-05-01", "200", "", "12"),
            trip("2025-06-15", "x", "30", "3"),
            trip("2025-05-31", "50", "5", "-2"),
            trip("5/1", "1", "1", "1"),
        ];

        let stats = aggregate_by_month(&records);
        let grand = totals(&records);

        let mut summed = Totals::default();
        for (_, t) in stats.iter() {
            summed.add(t.distance_km, t.fuel_cost, t.toll_cost);
        }
        assert_eq!(summed, grand);
        assert_eq!(grand.distance_km, 21.5);
    }

    #[test]
    fn test_month_order_is_first_seen() {
        let records = vec![
            trip("2025-06-01", "", "", "1"),
            trip("2025-04-01", "", "", "1"),
            trip("2025-06-02", "", "", "1"),
        ];

        let stats = aggregate_by_month(&records);
        let months: Vec<&str> = stats.months().collect();
        assert_eq!(months, vec!["2025-06", "2025-04"]);
    }

    #[test]
    fn test_malformed_dates_degrade_to_truncated_keys() {
        let records = vec![trip("5/1", "", "", "2"), trip("2025-05-14T09:00", "", "", "4")];

        let stats = aggregate_by_month(&records);
        assert_eq!(stats.get("5/1").map(|t| t.distance_km), Some(2.0));
        assert_eq!(stats.get("2025-05").map(|t| t.distance_km), Some(4.0));
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_day_total_is_exact_match() {
        let records = vec![
            trip("2025-05-1", "", "", "100"),
            trip("2025-05-14", "", "", "15"),
            trip("2025-05-14", "", "", "5"),
            trip("2025-05-140", "", "", "1000"),
        ];

        assert_eq!(day_total(&records, "2025-05-14"), 20.0);
        assert_eq!(day_total(&records, "2025-05-1"), 100.0);
    }

    #[test]
    fn test_month_trips_is_prefix_match() {
        let records = vec![
            trip("2025-05-01", "", "", "1"),
            trip("2025-06-01", "", "", "2"),
            trip("2025-05-31", "", "", "3"),
        ];

        let dates: Vec<&str> = month_trips(&records, "2025-05").iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-05-01", "2025-05-31"]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let records = vec![trip("2025-05-01", "0.1", "0.2", "0.3"), trip("2025-06-01", "0.7", "", "1e3")];

        assert_eq!(aggregate_by_month(&records), aggregate_by_month(&records));
        assert_eq!(totals(&records), totals(&records));
    }
}
