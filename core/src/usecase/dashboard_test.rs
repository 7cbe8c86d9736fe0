
#[cfg(test)]
mod tests {
    use crate::usecase::dashboard::DashboardUseCase;
    use crate::repository::TripRepository;
    use crate::model::trip::{TripDraft, TripRecord};
    use crate::model::stats::Totals;
    use crate::service::route::to_coordinate;
    use crate::service::dto::{Measure, EXPORT_HEADER};
    use chrono::NaiveDate;
    use anyhow::Result;

    struct MockTripRepo {
        records: Vec<TripRecord>,
    }

    impl TripRepository for MockTripRepo {
        fn create(&self, _record: TripRecord) -> Result<TripRecord> { unimplemented!() }
        fn list(&self) -> Result<Vec<TripRecord>> { Ok(self.records.clone()) }
    }

    fn fixture() -> MockTripRepo {
        let trip = |date: &str, from: &str, to: &str, fuel: &str, toll: &str, km: &str, owner: &str| {
            TripDraft::new(date, from, to)
                .with_costs(fuel, toll, km)
                .into_record(owner)
        };

        MockTripRepo {
            records: vec![
                trip("2025-05-01", "A", "B", "10000", "2000", "15", "me"),
                trip("2025-05-14", "Home", "Office", "", "", "12", "me"),
                trip("2025-05-14", "Office", "Home", "3000", "", "12", "me"),
                trip("2025-05-14", "X", "Y", "99999", "99999", "999", "someone-else"),
                trip("2025-04-30", "B", "A", "", "500", "8", "me"),
                trip("2025-06-01", "A", "C", "1", "1", "1", "me"),
            ],
        }
    }

    fn may_14() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
    }

    #[test]
    fn test_build_composes_every_view() {
        let repo = fixture();
        let usecase = DashboardUseCase::new(&repo, "me");

        let dashboard = usecase.build(may_14()).unwrap();

        assert_eq!(dashboard.trips.len(), 5);
        assert_eq!(
            dashboard.totals,
            Totals { distance_km: 48.0, fuel_cost: 13001.0, toll_cost: 2501.0 }
        );

        assert_eq!(dashboard.chart.labels, vec!["2025-05", "2025-04", "2025-06"]);
        assert_eq!(dashboard.chart.series[0].values, vec![39.0, 8.0, 1.0]);
        assert_eq!(dashboard.chart.value(Measure::Toll, 1), 500.0);
        assert_eq!(dashboard.chart.value(Measure::Toll, 3), 0.0);

        assert_eq!(dashboard.selected_date, "2025-05-14");
        assert_eq!(dashboard.day_total, 24.0);
        assert_eq!(
            dashboard.route,
            vec![
                to_coordinate("Home"),
                to_coordinate("Office"),
                to_coordinate("Office"),
                to_coordinate("Home"),
            ]
        );
    }

    #[test]
    fn test_build_is_repeatable() {
        let repo = fixture();
        let usecase = DashboardUseCase::new(&repo, "me");

        let first = usecase.build(may_14()).unwrap();
        let second = usecase.build(may_14()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_owner_gets_empty_views() {
        let repo = fixture();
        let usecase = DashboardUseCase::new(&repo, "nobody");

        let dashboard = usecase.build(may_14()).unwrap();
        assert!(dashboard.trips.is_empty());
        assert_eq!(dashboard.totals, Totals::default());
        assert!(dashboard.chart.labels.is_empty());
        assert_eq!(dashboard.day_total, 0.0);
        assert!(dashboard.route.is_empty());
        assert_eq!(usecase.export("2025-05").unwrap().len(), 1);
    }

    #[test]
    fn test_export_month() {
        let repo = fixture();
        let usecase = DashboardUseCase::new(&repo, "me");

        // header + three May trips of this owner
        let rows = usecase.export("2025-05").unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], EXPORT_HEADER.map(str::to_string));
        assert_eq!(rows[1][1], "A");
    }

    #[test]
    fn test_export_other_month() {
        let repo = fixture();
        let usecase = DashboardUseCase::new(&repo, "me");

        let rows = usecase.export("2025-04").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "2025-04-30");
    }
}
