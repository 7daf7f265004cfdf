//! Error taxonomy for the session controllers.
//!
//! `ValidationError` covers everything a user can fix by editing a form; it never
//! mutates state. `ConsistencyViolation` describes states that the invariants rule
//! out; callers log it and degrade instead of failing.
use crate::constants::{
    MAX_DRINKS_PER_PARTICIPANT, MAX_DRINKS_PER_PERSON, MAX_PEOPLE, MIN_DRINKS_PER_PERSON,
    MIN_PEOPLE,
};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a name is required")]
    MissingName,
    #[error("{count} drink(s) left blank")]
    EmptyDrinks { count: usize },
    #[error(
        "number of people must be between {min} and {max} (got {value})",
        min = MIN_PEOPLE,
        max = MAX_PEOPLE
    )]
    PeopleOutOfRange { value: i64 },
    #[error(
        "drinks per person must be between {min} and {max} (got {value})",
        min = MIN_DRINKS_PER_PERSON,
        max = MAX_DRINKS_PER_PERSON
    )]
    DrinksOutOfRange { value: i64 },
    #[error(
        "at most {max} drinks per participant (got {count})",
        max = MAX_DRINKS_PER_PARTICIPANT
    )]
    TooManyDrinks { count: usize },
    #[error("every participant needs at least one drink")]
    NoDrinks,
    #[error("no participant with id {id}")]
    UnknownParticipant { id: u32 },
    #[error("participant id {id} is out of sequence (expected {expected})")]
    UnexpectedParticipantId { id: u32, expected: u32 },
    #[error("the roster is already full ({capacity} people)")]
    RosterFull { capacity: u8 },
    #[error("participants can only be entered while the roster is being filled")]
    NotInEntry,
    #[error("this action is only available on the results screen")]
    NotInResults,
}

/// One or more validation failures gathered from a single form submission.
///
/// Never empty: constructors take at least one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new(first: ValidationError) -> Self {
        Self(vec![first])
    }

    /// Wrap a list gathered by a validator; `None` when nothing failed.
    #[must_use]
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    /// Human-readable messages in the order the checks ran.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// States the invariants forbid. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyViolation {
    #[error("participant id {id} appears more than once")]
    DuplicateParticipantId { id: u32 },
    #[error("roster holds {len} participants but the session is configured for {capacity}")]
    RosterOverCapacity { len: usize, capacity: u8 },
    #[error("participant {id} has a blank drink entry")]
    BlankDrink { id: u32 },
    #[error("drink pool of {pool} cannot cover {participants} participants")]
    PoolShortfall { pool: usize, participants: usize },
    #[error("participant at position {position} has id {id}; ids must follow entry order from 1")]
    NonSequentialId { position: usize, id: u32 },
    #[error("setup is marked complete but the roster is empty")]
    SetupCompleteWithoutRoster,
    #[error("draw is marked complete but participant {id} has no assigned drink")]
    DrawFlagWithoutAssignment { id: u32 },
}
