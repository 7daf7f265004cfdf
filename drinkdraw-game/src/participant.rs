//! Participants and the raw drafts they are built from.
use crate::constants::MAX_DRINKS_PER_PARTICIPANT;
use crate::error::{ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};

/// One person in the roster together with the drinks they put into the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Positive, unique within a session, never reused.
    pub id: u32,
    pub name: String,
    pub drinks: Vec<String>,
    /// Drink handed out by the latest draw; `None` before a draw or after invalidation.
    #[serde(default)]
    pub assigned_drink: Option<String>,
}

impl Participant {
    #[must_use]
    pub fn has_assignment(&self) -> bool {
        self.assigned_drink.is_some()
    }
}

/// Untrimmed form input for a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDraft {
    pub name: String,
    pub drinks: Vec<String>,
}

impl ParticipantDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, drinks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            drinks,
        }
    }

    /// Empty form with `slots` blank drink inputs.
    #[must_use]
    pub fn blank(slots: usize) -> Self {
        Self {
            name: String::new(),
            drinks: vec![String::new(); slots],
        }
    }

    /// Validate the draft and build a participant carrying `id`.
    ///
    /// Name and drink checks both run so the form can show every problem at once.
    ///
    /// # Errors
    ///
    /// Returns `MissingName` and/or the drink list failure.
    pub fn into_participant(self, id: u32) -> Result<Participant, ValidationErrors> {
        let name = self.name.trim().to_string();
        let drinks = normalize_drinks(&self.drinks);

        match (name.is_empty(), drinks) {
            (false, Ok(drinks)) => Ok(Participant {
                id,
                name,
                drinks,
                assigned_drink: None,
            }),
            (true, Ok(_)) => Err(ValidationError::MissingName.into()),
            (false, Err(err)) => Err(err.into()),
            (true, Err(err)) => {
                let mut errors = ValidationErrors::new(ValidationError::MissingName);
                errors.push(err);
                Err(errors)
            }
        }
    }
}

/// Trim every slot and reject blanks, empty lists and oversized lists.
///
/// # Errors
///
/// `EmptyDrinks` with the number of blank slots, `NoDrinks`, or `TooManyDrinks`.
pub fn normalize_drinks(raw: &[String]) -> Result<Vec<String>, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::NoDrinks);
    }
    if raw.len() > MAX_DRINKS_PER_PARTICIPANT {
        return Err(ValidationError::TooManyDrinks { count: raw.len() });
    }
    let trimmed: Vec<String> = raw.iter().map(|d| d.trim().to_string()).collect();
    let blanks = trimmed.iter().filter(|d| d.is_empty()).count();
    if blanks > 0 {
        return Err(ValidationError::EmptyDrinks { count: blanks });
    }
    Ok(trimmed)
}
