//! Submit-time validation for the bus search form.
//!
//! Validation runs only on submit. Each offending field gets exactly one
//! error (the first violation); messages are dictionary keys so the UI can
//! render them in the active language.

use crate::query::{date_to_timestamp, SearchQuery};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const MIN_PASSENGERS: i64 = 1;
pub const MAX_PASSENGERS: i64 = 20;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    From,
    To,
    DepartureDate,
    ReturnDate,
    Passengers,
}

/// First validation failure for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    FromRequired,
    ToRequired,
    DepartureRequired,
    ReturnBeforeDeparture,
    TooFewPassengers,
    TooManyPassengers,
}

impl ValidationError {
    /// Dictionary key for the user-facing message.
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationError::FromRequired => "validation.from_required",
            ValidationError::ToRequired => "validation.to_required",
            ValidationError::DepartureRequired => "validation.departure_date_required",
            ValidationError::ReturnBeforeDeparture => "validation.return_date_invalid",
            ValidationError::TooFewPassengers => "validation.passengers_min",
            ValidationError::TooManyPassengers => "validation.passengers_max",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, ValidationError>;

/// Raw field state collected by the bus form before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusSearchForm {
    pub from: String,
    pub to: String,
    pub departure: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    /// Free-text passenger entry, parsed here.
    pub passengers: String,
}

impl BusSearchForm {
    /// Validate and normalize into a [`SearchQuery`].
    ///
    /// Origin, destination, and departure date are required; the return
    /// date, when present, must not precede departure; the passenger count
    /// must be an integer in `[MIN_PASSENGERS, MAX_PASSENGERS]`.
    pub fn validate(&self) -> Result<SearchQuery, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.from.is_empty() {
            errors.insert(Field::From, ValidationError::FromRequired);
        }
        if self.to.is_empty() {
            errors.insert(Field::To, ValidationError::ToRequired);
        }
        if self.departure.is_none() {
            errors.insert(Field::DepartureDate, ValidationError::DepartureRequired);
        }
        if let (Some(departure), Some(return_date)) = (self.departure, self.return_date) {
            if return_date < departure {
                errors.insert(Field::ReturnDate, ValidationError::ReturnBeforeDeparture);
            }
        }

        let passengers = match self.passengers.trim().parse::<i64>() {
            Ok(n) if n > MAX_PASSENGERS => {
                errors.insert(Field::Passengers, ValidationError::TooManyPassengers);
                None
            }
            Ok(n) if n < MIN_PASSENGERS => {
                errors.insert(Field::Passengers, ValidationError::TooFewPassengers);
                None
            }
            Ok(n) => Some(n as u32),
            Err(_) => {
                errors.insert(Field::Passengers, ValidationError::TooFewPassengers);
                None
            }
        };

        if let (true, Some(departure), Some(passengers)) =
            (errors.is_empty(), self.departure, passengers)
        {
            Ok(SearchQuery {
                from: self.from.clone(),
                to: self.to.clone(),
                departure: date_to_timestamp(departure),
                return_date: self.return_date.map(date_to_timestamp),
                passengers,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::iso_timestamp;

    fn valid_form() -> BusSearchForm {
        BusSearchForm {
            from: "HAN".to_string(),
            to: "SGN".to_string(),
            departure: NaiveDate::from_ymd_opt(2024, 1, 1),
            return_date: None,
            passengers: "2".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_query() {
        let query = valid_form().validate().expect("form should validate");
        assert_eq!(query.from, "HAN");
        assert_eq!(query.to, "SGN");
        assert_eq!(iso_timestamp(&query.departure), "2024-01-01T00:00:00.000Z");
        assert_eq!(query.return_date, None);
        assert_eq!(query.passengers, 2);
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = BusSearchForm::default().validate().unwrap_err();
        assert_eq!(errors.get(&Field::From), Some(&ValidationError::FromRequired));
        assert_eq!(errors.get(&Field::To), Some(&ValidationError::ToRequired));
        assert_eq!(
            errors.get(&Field::DepartureDate),
            Some(&ValidationError::DepartureRequired)
        );
        assert_eq!(
            errors.get(&Field::Passengers),
            Some(&ValidationError::TooFewPassengers)
        );
    }

    #[test]
    fn test_return_before_departure_is_blocked() {
        let mut form = valid_form();
        form.return_date = NaiveDate::from_ymd_opt(2023, 12, 31);
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(&Field::ReturnDate),
            Some(&ValidationError::ReturnBeforeDeparture)
        );
    }

    #[test]
    fn test_return_equal_to_departure_is_allowed() {
        let mut form = valid_form();
        form.return_date = form.departure;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_passenger_boundaries() {
        for (value, ok) in [("1", true), ("20", true), ("0", false), ("21", false)] {
            let mut form = valid_form();
            form.passengers = value.to_string();
            assert_eq!(form.validate().is_ok(), ok, "passengers = {value}");
        }
    }

    #[test]
    fn test_non_numeric_passengers_rejected() {
        let mut form = valid_form();
        form.passengers = "two".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(&Field::Passengers),
            Some(&ValidationError::TooFewPassengers)
        );
    }

    #[test]
    fn test_one_error_per_field() {
        // empty form: four offending fields, one message each
        let errors = BusSearchForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_equal_from_and_to_passes_validation() {
        // mutual exclusion is enforced by option filtering in the form, not
        // by validation; out-of-band equal values are accepted here
        let mut form = valid_form();
        form.to = form.from.clone();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_message_keys_are_stable() {
        assert_eq!(
            ValidationError::ReturnBeforeDeparture.message_key(),
            "validation.return_date_invalid"
        );
    }
}
