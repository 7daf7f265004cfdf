//! Session configuration chosen on the setup screen.
use crate::constants::{
    MAX_DRINKS_PER_PERSON, MAX_PEOPLE, MIN_DRINKS_PER_PERSON, MIN_PEOPLE,
};
use crate::error::{ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Party size, drink slots per person and the optional bar theme.
///
/// The default value is the "nothing configured yet" state (both counts zero).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub number_of_people: u8,
    pub drinks_per_person: u8,
    #[serde(default)]
    pub selected_bar_id: Option<String>,
}

impl Config {
    /// Build a validated configuration. Both counts are checked; every failure is reported.
    ///
    /// # Errors
    ///
    /// Returns the range violations for the people and drink counts.
    pub fn new(
        number_of_people: i64,
        drinks_per_person: i64,
        selected_bar_id: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let people = checked_count(number_of_people, MIN_PEOPLE, MAX_PEOPLE).ok_or(
            ValidationError::PeopleOutOfRange {
                value: number_of_people,
            },
        );
        let drinks = checked_count(drinks_per_person, MIN_DRINKS_PER_PERSON, MAX_DRINKS_PER_PERSON)
            .ok_or(ValidationError::DrinksOutOfRange {
                value: drinks_per_person,
            });

        match (people, drinks) {
            (Ok(number_of_people), Ok(drinks_per_person)) => Ok(Self {
                number_of_people,
                drinks_per_person,
                selected_bar_id,
            }),
            (Err(people_err), Err(drinks_err)) => {
                let mut errors = ValidationErrors::new(people_err);
                errors.push(drinks_err);
                Err(errors)
            }
            (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err.into()),
        }
    }

    /// Parse the raw text of the setup form. Unparseable input counts as zero.
    ///
    /// # Errors
    ///
    /// Returns the range violations for the people and drink counts.
    pub fn from_inputs(
        people: &str,
        drinks: &str,
        selected_bar_id: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(parse_count(people), parse_count(drinks), selected_bar_id)
    }

    /// Re-check an already constructed value, e.g. one deserialized or built literally.
    ///
    /// # Errors
    ///
    /// Returns the range violations for the people and drink counts.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Self::new(
            i64::from(self.number_of_people),
            i64::from(self.drinks_per_person),
            None,
        )
        .map(|_| ())
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.number_of_people > 0
    }
}

fn parse_count(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

fn checked_count(value: i64, min: u8, max: u8) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|count| (min..=max).contains(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_and_keeps_bar() {
        let cfg = Config::new(1, 20, Some("fusion".into())).unwrap();
        assert_eq!(cfg.number_of_people, 1);
        assert_eq!(cfg.drinks_per_person, 20);
        assert_eq!(cfg.selected_bar_id.as_deref(), Some("fusion"));
        assert!(cfg.is_configured());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn reports_both_ranges_together() {
        let errors = Config::new(0, 21, None).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::PeopleOutOfRange { value: 0 },
                ValidationError::DrinksOutOfRange { value: 21 },
            ]
        );
    }

    #[test]
    fn parses_form_text() {
        let cfg = Config::from_inputs(" 4 ", "3", None).unwrap();
        assert_eq!((cfg.number_of_people, cfg.drinks_per_person), (4, 3));

        let errors = Config::from_inputs("", "abc", None).unwrap_err();
        assert!(errors.contains(&ValidationError::PeopleOutOfRange { value: 0 }));
        assert!(errors.contains(&ValidationError::DrinksOutOfRange { value: 0 }));
    }

    #[test]
    fn default_is_unconfigured_and_invalid() {
        let cfg = Config::default();
        assert!(!cfg.is_configured());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let cfg = Config::new(2, 1, None).unwrap();
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["numberOfPeople"], 2);
        assert_eq!(json["drinksPerPerson"], 1);
        assert!(json["selectedBarId"].is_null());
    }
}
