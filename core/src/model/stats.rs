use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub distance_km: f64,
    pub fuel_cost: f64,
    pub toll_cost: f64,
}

impl Totals {
    pub fn add(&mut self, distance_km: f64, fuel_cost: f64, toll_cost: f64) {
        self.distance_km += distance_km;
        self.fuel_cost += fuel_cost;
        self.toll_cost += toll_cost;
    }
}

/// Per-month totals, iterated in the order months were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyStats {
    months: Vec<(String, Totals)>,
    index: HashMap<String, usize>, // Key: "YYYY-MM"
}

impl MonthlyStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record's amounts into `month`, creating the entry on first use.
    pub fn add(&mut self, month: &str, distance_km: f64, fuel_cost: f64, toll_cost: f64) {
        let pos = match self.index.get(month) {
            Some(&pos) => pos,
            None => {
                self.months.push((month.to_string(), Totals::default()));
                self.index.insert(month.to_string(), self.months.len() - 1);
                self.months.len() - 1
            }
        };
        self.months[pos].1.add(distance_km, fuel_cost, toll_cost);
    }

    pub fn get(&self, month: &str) -> Option<&Totals> {
        self.index.get(month).map(|&pos| &self.months[pos].1)
    }

    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.months.iter().map(|(m, _)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Totals)> {
        self.months.iter().map(|(m, t)| (m.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_first_seen_order() {
        let mut stats = MonthlyStats::new();
        stats.add("2025-06", 1.0, 0.0, 0.0);
        stats.add("2025-04", 2.0, 0.0, 0.0);
        stats.add("2025-06", 3.0, 10.0, 5.0);

        let months: Vec<&str> = stats.months().collect();
        assert_eq!(months, vec!["2025-06", "2025-04"]);
        assert_eq!(
            stats.get("2025-06"),
            Some(&Totals { distance_km: 4.0, fuel_cost: 10.0, toll_cost: 5.0 })
        );
        assert_eq!(stats.len(), 2);
    }
}
