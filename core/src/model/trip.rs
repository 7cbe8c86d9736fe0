use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged vehicle movement.
///
/// Numeric fields are kept as the text the user typed. They are only turned
/// into numbers when aggregated, see [`crate::input::coerce_number`].
/// Field names on disk are the short ones used by existing trip dumps
/// (`fuel`, `toll`, `km`, `uid`), so old dumps load as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(rename = "fuel", alias = "fuel_cost", default)]
    pub fuel_cost: String,
    #[serde(rename = "toll", alias = "toll_cost", default)]
    pub toll_cost: String,
    #[serde(rename = "km", alias = "distance_km", default)]
    pub distance_km: String,
    #[serde(rename = "uid", alias = "owner_id")]
    owner_id: String,
}

impl TripRecord {
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Date, origin and destination are all present. Stored documents can
    /// lack them even though `validate` never admits such a draft.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.from.is_empty() && !self.to.is_empty()
    }

    /// The seven user-facing fields in export column order.
    pub fn columns(&self) -> [&str; 7] {
        [
            &self.date,
            &self.from,
            &self.to,
            &self.purpose,
            &self.fuel_cost,
            &self.toll_cost,
            &self.distance_km,
        ]
    }
}

/// A candidate trip, as entered, before it is admitted to the log.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TripDraft {
    pub date: String,
    pub from: String,
    pub to: String,
    pub purpose: String,
    pub fuel_cost: String,
    pub toll_cost: String,
    pub distance_km: String,
}

impl TripDraft {
    pub fn new(date: &str, from: &str, to: &str) -> Self {
        Self {
            date: date.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            ..Default::default()
        }
    }

    pub fn with_costs(mut self, fuel: &str, toll: &str, km: &str) -> Self {
        self.fuel_cost = fuel.to_string();
        self.toll_cost = toll.to_string();
        self.distance_km = km.to_string();
        self
    }

    pub fn with_purpose(mut self, purpose: &str) -> Self {
        self.purpose = purpose.to_string();
        self
    }

    /// Stamps the draft with a fresh id and its owner. Callers validate first.
    pub fn into_record(self, owner_id: &str) -> TripRecord {
        TripRecord {
            id: Uuid::new_v4(),
            date: self.date,
            from: self.from,
            to: self.to,
            purpose: self.purpose,
            fuel_cost: self.fuel_cost,
            toll_cost: self.toll_cost,
            distance_km: self.distance_km,
            owner_id: owner_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_assigns_owner() {
        let record = TripDraft::new("2025-05-01", "Daegu", "Gumi")
            .with_costs("10000", "2000", "15")
            .into_record("user-1");

        assert_eq!(record.owner_id(), "user-1");
        assert_eq!(
            record.columns(),
            ["2025-05-01", "Daegu", "Gumi", "", "10000", "2000", "15"]
        );
    }

    #[test]
    fn test_deserialize_legacy_document() {
        let json = r#"{"date":"2025-05-14","from":"A","to":"B","purpose":"visit",
                       "fuel":"5000","toll":"","km":"12.5","uid":"abc"}"#;
        let record: TripRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.fuel_cost, "5000");
        assert_eq!(record.toll_cost, "");
        assert_eq!(record.distance_km, "12.5");
        assert_eq!(record.owner_id(), "abc");
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"date":"2025-05-14","from":"A","to":"B","uid":"abc"}"#;
        let record: TripRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.purpose, "");
        assert_eq!(record.distance_km, "");
        assert!(record.is_complete());
    }

    #[test]
    fn test_document_without_route_is_incomplete() {
        let record: TripRecord = serde_json::from_str(r#"{"uid":"me","km":"500"}"#).unwrap();
        assert!(!record.is_complete());

        let record: TripRecord =
            serde_json::from_str(r#"{"date":"2025-05-14","from":"A","to":"","uid":"me"}"#).unwrap();
        assert!(!record.is_complete());
    }
}
