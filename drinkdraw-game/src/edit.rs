//! Edit controller: revise drink lists after the roster is complete and grow the party.
//!
//! Any change to a drink list invalidates the whole draw, not just the edited entry.
use crate::constants::{MAX_DRINKS_PER_PARTICIPANT, MAX_PEOPLE};
use crate::error::{ValidationError, ValidationErrors};
use crate::participant::{Participant, normalize_drinks};
use crate::state::SessionState;

/// Replace a participant's drinks and clear every assignment.
///
/// # Errors
///
/// `UnknownParticipant` when no participant has `id`, or the drink list failure.
pub fn edit_drinks(
    state: &SessionState,
    id: u32,
    new_drinks: &[String],
) -> Result<(SessionState, Participant), ValidationErrors> {
    if !state.contains(id) {
        return Err(ValidationError::UnknownParticipant { id }.into());
    }
    let drinks = normalize_drinks(new_drinks)?;

    let mut next = state.clone();
    next.invalidate_draw();
    let mut updated = None;
    for participant in &mut next.participants {
        if participant.id == id {
            participant.drinks.clone_from(&drinks);
            updated = Some(participant.clone());
        }
    }
    let updated = updated.ok_or(ValidationError::UnknownParticipant { id })?;
    log::info!(
        "participant {id} now has {} drink(s); draw invalidated",
        updated.drinks.len()
    );
    Ok((next, updated))
}

/// Grow the party by one and reopen entry for exactly that participant.
///
/// Existing drink lists are not re-validated against `drinks_per_person`.
///
/// # Errors
///
/// `PeopleOutOfRange` when the party is already at its maximum size.
pub fn add_participant(state: &SessionState) -> Result<SessionState, ValidationError> {
    if state.config.number_of_people >= MAX_PEOPLE {
        return Err(ValidationError::PeopleOutOfRange {
            value: i64::from(state.config.number_of_people) + 1,
        });
    }
    let mut next = state.clone();
    next.config.number_of_people += 1;
    next.is_setup_complete = false;
    next.invalidate_draw();
    log::info!(
        "party grown to {}; next id {}",
        next.config.number_of_people,
        next.next_free_id()
    );
    Ok(next)
}

/// Working copy of a drink list while the edit dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    id: u32,
    drinks: Vec<String>,
}

impl EditBuffer {
    #[must_use]
    pub fn for_participant(participant: &Participant) -> Self {
        Self {
            id: participant.id,
            drinks: participant.drinks.clone(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn drinks(&self) -> &[String] {
        &self.drinks
    }

    #[must_use]
    pub fn can_add(&self) -> bool {
        self.drinks.len() < MAX_DRINKS_PER_PARTICIPANT
    }

    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.drinks.len() > 1
    }

    /// Append a blank slot; returns false at the cap.
    pub fn add_slot(&mut self) -> bool {
        if self.can_add() {
            self.drinks.push(String::new());
            true
        } else {
            false
        }
    }

    /// Remove slot `index`; the last remaining slot is kept.
    pub fn remove_slot(&mut self, index: usize) -> bool {
        if self.can_remove() && index < self.drinks.len() {
            self.drinks.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.drinks.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Validate and apply the buffer to `state`.
    ///
    /// # Errors
    ///
    /// Same failures as [`edit_drinks`].
    pub fn commit(&self, state: &SessionState) -> Result<(SessionState, Participant), ValidationErrors> {
        edit_drinks(state, self.id, &self.drinks)
    }
}
