//! Session state: the single serializable value describing one game.
use crate::bars::{Bar, BarCatalog};
use crate::config::Config;
use crate::error::ConsistencyViolation;
use crate::participant::Participant;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub config: Config,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub is_setup_complete: bool,
    #[serde(default)]
    pub is_drawing_complete: bool,
}

impl SessionState {
    /// Fresh session for `config`, discarding any roster.
    #[must_use]
    pub fn start(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Id for sequential entry: roster length + 1.
    #[must_use]
    pub fn next_entry_id(&self) -> u32 {
        u32::try_from(self.participants.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }

    /// Id for late insertion: `max(ids, 0) + 1`.
    #[must_use]
    pub fn next_free_id(&self) -> u32 {
        self.participants
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        usize::from(self.config.number_of_people)
    }

    #[must_use]
    pub fn is_roster_full(&self) -> bool {
        self.config.is_configured() && self.participants.len() >= self.capacity()
    }

    /// A draw is allowed once there is a roster and everybody contributed a drink.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.participants.is_empty() && self.participants.iter().all(|p| !p.drinks.is_empty())
    }

    #[must_use]
    pub fn unassigned_count(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| !p.has_assignment())
            .count()
    }

    /// Theme selected at setup, resolved against `catalog`.
    #[must_use]
    pub fn selected_bar<'a>(&self, catalog: &'a BarCatalog) -> Option<&'a Bar> {
        self.config
            .selected_bar_id
            .as_deref()
            .and_then(|id| catalog.get(id))
    }

    /// Clear every assignment and the draw flag.
    pub(crate) fn invalidate_draw(&mut self) {
        self.is_drawing_complete = false;
        for participant in &mut self.participants {
            participant.assigned_drink = None;
        }
    }

    /// Verify the data-model invariants; returns the first violation found.
    ///
    /// # Errors
    ///
    /// Returns the violated invariant.
    pub fn check_invariants(&self) -> Result<(), ConsistencyViolation> {
        let mut seen = HashSet::with_capacity(self.participants.len());
        for (position, participant) in self.participants.iter().enumerate() {
            if !seen.insert(participant.id) {
                return Err(ConsistencyViolation::DuplicateParticipantId {
                    id: participant.id,
                });
            }
            if usize::try_from(participant.id).ok() != Some(position + 1) {
                return Err(ConsistencyViolation::NonSequentialId {
                    position: position + 1,
                    id: participant.id,
                });
            }
            if participant.drinks.iter().any(|d| d.trim().is_empty()) {
                return Err(ConsistencyViolation::BlankDrink { id: participant.id });
            }
        }
        if self.participants.len() > self.capacity() {
            return Err(ConsistencyViolation::RosterOverCapacity {
                len: self.participants.len(),
                capacity: self.config.number_of_people,
            });
        }
        if self.is_setup_complete && self.participants.is_empty() {
            return Err(ConsistencyViolation::SetupCompleteWithoutRoster);
        }
        if self.is_drawing_complete
            && let Some(missing) = self.participants.iter().find(|p| !p.has_assignment())
        {
            return Err(ConsistencyViolation::DrawFlagWithoutAssignment { id: missing.id });
        }
        Ok(())
    }
}
