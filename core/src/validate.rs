use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::input::coerce_number;
use crate::model::trip::TripDraft;
use crate::time::DAY_FORMAT;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum DateMode {
    /// Any non-empty date is accepted; odd dates end up under odd month keys.
    Lenient,
    /// Dates must be real `YYYY-MM-DD` calendar days.
    Strict,
}

impl Default for DateMode {
    fn default() -> Self {
        DateMode::Lenient
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ValidationPolicy {
    pub date_mode: DateMode,
    pub allow_negative: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            date_mode: DateMode::Lenient,
            allow_negative: true,
        }
    }
}

/// Decides whether a draft may enter the log. Pure; inserting is up to the caller.
pub fn validate(draft: &TripDraft, policy: &ValidationPolicy) -> Result<(), ValidationError> {
    let required = [("date", &draft.date), ("from", &draft.from), ("to", &draft.to)];
    for (name, value) in required {
        if value.is_empty() {
            return Err(ValidationError::MissingField(name));
        }
    }

    if policy.date_mode == DateMode::Strict && !is_iso_day(&draft.date) {
        return Err(ValidationError::MalformedDate(draft.date.clone()));
    }

    if !policy.allow_negative {
        let amounts = [
            ("fuel", &draft.fuel_cost),
            ("toll", &draft.toll_cost),
            ("km", &draft.distance_km),
        ];
        for (name, value) in amounts {
            if coerce_number(value) < 0.0 {
                return Err(ValidationError::NegativeAmount(name));
            }
        }
    }

    Ok(())
}

/// True only when `date` is exactly how chrono would print that day.
fn is_iso_day(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DAY_FORMAT)
        .map_or(false, |d| d.format(DAY_FORMAT).to_string() == date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> ValidationPolicy {
        ValidationPolicy::default()
    }

    #[test]
    fn test_accepts_required_fields() {
        let draft = TripDraft::new("2025-05-01", "A", "B");
        assert_eq!(validate(&draft, &lenient()), Ok(()));
    }

    #[test]
    fn test_rejects_each_missing_field() {
        assert_eq!(
            validate(&TripDraft::new("", "A", "B"), &lenient()),
            Err(ValidationError::MissingField("date"))
        );
        assert_eq!(
            validate(&TripDraft::new("2025-05-01", "", "B"), &lenient()),
            Err(ValidationError::MissingField("from"))
        );
        assert_eq!(
            validate(&TripDraft::new("2025-05-01", "A", ""), &lenient()),
            Err(ValidationError::MissingField("to"))
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        // No trimming: a single space counts as a value.
        let draft = TripDraft::new(" ", " ", " ");
        assert!(validate(&draft, &lenient()).is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let draft = TripDraft::new("2025-05-01", "A", "B").with_costs("", "abc", "");
        assert!(validate(&draft, &lenient()).is_ok());
    }

    #[test]
    fn test_lenient_accepts_short_date() {
        let draft = TripDraft::new("5/1", "A", "B");
        assert!(validate(&draft, &lenient()).is_ok());
    }

    #[test]
    fn test_strict_date_mode() {
        let policy = ValidationPolicy { date_mode: DateMode::Strict, ..lenient() };

        assert!(validate(&TripDraft::new("2025-05-01", "A", "B"), &policy).is_ok());
        assert_eq!(
            validate(&TripDraft::new("2025-5-1x", "A", "B"), &policy),
            Err(ValidationError::MalformedDate("2025-5-1x".to_string()))
        );
        assert!(validate(&TripDraft::new("2025-5-1", "A", "B"), &policy).is_err());
        assert!(validate(&TripDraft::new("2025-02-30", "A", "B"), &policy).is_err());
        assert!(validate(&TripDraft::new("+2025-5-01", "A", "B"), &policy).is_err());
        assert!(validate(&TripDraft::new(" 2025-5-01", "A", "B"), &policy).is_err());
        assert!(validate(&TripDraft::new("2025-05-01 ", "A", "B"), &policy).is_err());
    }

    #[test]
    fn test_negative_amounts() {
        let draft = TripDraft::new("2025-05-01", "A", "B").with_costs("100", "0", "-3");

        assert!(validate(&draft, &lenient()).is_ok());

        let policy = ValidationPolicy { allow_negative: false, ..lenient() };
        assert_eq!(validate(&draft, &policy), Err(ValidationError::NegativeAmount("km")));
    }
}
