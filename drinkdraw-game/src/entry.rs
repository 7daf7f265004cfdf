//! Entry controller: fills the roster one participant at a time.
use crate::error::{ValidationError, ValidationErrors};
use crate::participant::{Participant, ParticipantDraft};
use crate::state::SessionState;

/// What the entry screen needs to label the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryProgress {
    /// Zero-based position of the participant being entered.
    pub current_index: usize,
    pub total: usize,
    pub registered: usize,
    /// Saving this participant completes the roster.
    pub is_last: bool,
    /// Id the pending participant will receive. Re-submitting with the same id replaces.
    pub entry_id: u32,
    pub drink_slots: usize,
}

impl EntryProgress {
    #[must_use]
    pub fn of(state: &SessionState) -> Self {
        let registered = state.participants.len();
        let total = state.capacity();
        Self {
            current_index: registered,
            total,
            registered,
            is_last: registered + 1 >= total,
            entry_id: state.next_free_id(),
            drink_slots: usize::from(state.config.drinks_per_person),
        }
    }
}

/// Validate the draft the entry form submitted under `id`.
///
/// `id` is the one the form was rendered with. It must be `next_free_id()` for a new
/// participant, which is roster length + 1 for sequential entry and `max(ids) + 1` after
/// an add. The id of the last saved participant is also accepted so a repeated submit
/// of the same form replaces instead of appending.
///
/// # Errors
///
/// `UnexpectedParticipantId` for any other id, otherwise every field failure of the draft.
pub fn submit_participant(
    state: &SessionState,
    id: u32,
    draft: &ParticipantDraft,
) -> Result<Participant, ValidationErrors> {
    let expected = state.next_free_id();
    let resubmit = state.participants.last().map(|p| p.id);
    if id != expected && Some(id) != resubmit {
        log::debug!("refusing participant id {id}, next is {expected}");
        return Err(ValidationError::UnexpectedParticipantId { id, expected }.into());
    }
    draft.clone().into_participant(id)
}

/// Replace the participant with the same id or append it, then mark setup complete
/// once the roster reaches the configured size.
///
/// # Errors
///
/// `RosterFull` when appending a new id would exceed the configured party size.
pub fn save_participant(
    state: &SessionState,
    participant: Participant,
) -> Result<SessionState, ValidationError> {
    let mut next = state.clone();
    if let Some(slot) = next
        .participants
        .iter_mut()
        .find(|p| p.id == participant.id)
    {
        *slot = participant;
    } else if next.is_roster_full() {
        return Err(ValidationError::RosterFull {
            capacity: next.config.number_of_people,
        });
    } else {
        next.participants.push(participant);
    }

    if next.participants.len() >= next.capacity() {
        next.is_setup_complete = true;
        log::info!(
            "roster complete with {} participants",
            next.participants.len()
        );
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn session(people: i64, drinks: i64) -> SessionState {
        SessionState::start(Config::new(people, drinks, None).unwrap())
    }

    fn draft(name: &str, drinks: &[&str]) -> ParticipantDraft {
        ParticipantDraft::new(name, drinks.iter().map(|d| (*d).to_string()).collect())
    }

    #[test]
    fn sequential_ids_and_completion() {
        let state = session(2, 1);
        let ana = submit_participant(&state, 1, &draft("Ana", &["Mojito"])).unwrap();
        assert_eq!(ana.id, 1);
        let state = save_participant(&state, ana).unwrap();
        assert!(!state.is_setup_complete);

        let leo = submit_participant(&state, 2, &draft("Leo", &["Spritz"])).unwrap();
        assert_eq!(leo.id, 2);
        let state = save_participant(&state, leo).unwrap();
        assert!(state.is_setup_complete);
        assert_eq!(state.participants.len(), 2);
    }

    #[test]
    fn missing_name_leaves_roster_untouched() {
        let state = session(2, 1);
        let errors = submit_participant(&state, 1, &draft("", &["X"])).unwrap_err();
        assert_eq!(errors.errors(), &[ValidationError::MissingName]);
        assert!(state.participants.is_empty());
    }

    #[test]
    fn same_id_replaces_instead_of_appending() {
        let state = session(3, 1);
        let first = submit_participant(&state, 1, &draft("Ana", &["Mojito"])).unwrap();
        let state = save_participant(&state, first.clone()).unwrap();
        let state = save_participant(&state, first).unwrap();
        assert_eq!(state.participants.len(), 1);

        let edited = submit_participant(&state, 1, &draft("Ana B", &["Gin"])).unwrap();
        let state = save_participant(&state, edited).unwrap();
        assert_eq!(state.participants.len(), 1);
        assert_eq!(state.participants[0].name, "Ana B");
    }

    #[test]
    fn full_roster_rejects_new_ids() {
        let state = session(1, 1);
        let ana = submit_participant(&state, 1, &draft("Ana", &["Mojito"])).unwrap();
        let state = save_participant(&state, ana).unwrap();
        let extra = draft("Leo", &["Spritz"]).into_participant(2).unwrap();
        assert_eq!(
            save_participant(&state, extra),
            Err(ValidationError::RosterFull { capacity: 1 })
        );
    }

    #[test]
    fn only_the_next_or_last_id_is_accepted() {
        let state = session(3, 1);
        for id in [0, 2, 42] {
            let errors = submit_participant(&state, id, &draft("Ana", &["Mojito"])).unwrap_err();
            assert_eq!(
                errors.errors(),
                &[ValidationError::UnexpectedParticipantId { id, expected: 1 }]
            );
        }

        let ana = submit_participant(&state, 1, &draft("Ana", &["Mojito"])).unwrap();
        let state = save_participant(&state, ana).unwrap();
        assert!(submit_participant(&state, 1, &draft("Ana", &["Gin"])).is_ok());
        assert!(submit_participant(&state, 2, &draft("Leo", &["Gin"])).is_ok());
        assert!(submit_participant(&state, 3, &draft("Leo", &["Gin"])).is_err());
    }

    #[test]
    fn late_ids_skip_past_the_highest() {
        let mut state = session(3, 1);
        state.participants.push(draft("A", &["x"]).into_participant(1).unwrap());
        state.participants.push(draft("B", &["y"]).into_participant(4).unwrap());
        let late = submit_participant(&state, 5, &draft("C", &["z"])).unwrap();
        assert_eq!(late.id, 5);
        assert!(submit_participant(&state, 3, &draft("C", &["z"])).is_err());
    }

    #[test]
    fn progress_tracks_position() {
        let state = session(2, 3);
        let progress = EntryProgress::of(&state);
        assert_eq!(progress.current_index, 0);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.drink_slots, 3);
        assert_eq!(progress.entry_id, 1);
        assert!(!progress.is_last);

        let ana = submit_participant(&state, 1, &draft("Ana", &["a", "b", "c"])).unwrap();
        let state = save_participant(&state, ana).unwrap();
        let progress = EntryProgress::of(&state);
        assert_eq!(progress.registered, 1);
        assert_eq!(progress.entry_id, 2);
        assert!(progress.is_last);
    }
}
