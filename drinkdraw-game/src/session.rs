//! The single state-replacement contract.
//!
//! [`reduce`] computes the complete next state for an action without touching storage.
//! [`SessionEngine`] owns the current state and persists every accepted transition.
use crate::assign::{DrawOutcome, draw_session};
use crate::config::Config;
use crate::edit::{add_participant, edit_drinks};
use crate::entry::{save_participant, submit_participant};
use crate::error::{ValidationError, ValidationErrors};
use crate::participant::ParticipantDraft;
use crate::screen::{Screen, resolve};
use crate::state::SessionState;
use crate::storage::SessionStorage;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a fresh session, replacing any previous one.
    Setup(Config),
    /// Validate and save the participant being entered under `id`.
    SaveParticipant { id: u32, draft: ParticipantDraft },
    Draw,
    EditDrinks { id: u32, drinks: Vec<String> },
    AddParticipant,
    NewGame,
}

impl Action {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Setup(_) => "setup",
            Self::SaveParticipant { .. } => "save-participant",
            Self::Draw => "draw",
            Self::EditDrinks { .. } => "edit-drinks",
            Self::AddParticipant => "add-participant",
            Self::NewGame => "new-game",
        }
    }
}

/// Persistence side effect the caller performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Persist,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub screen: Screen,
    pub effect: Effect,
    /// Present for `Action::Draw`.
    pub draw: Option<DrawOutcome>,
}

impl Transition {
    fn persist(state: SessionState) -> Self {
        Self {
            screen: resolve(&state),
            state,
            effect: Effect::Persist,
            draw: None,
        }
    }
}

/// Pure `(state, action) -> state'`; randomness is injected for draws.
///
/// # Errors
///
/// Returns the validation failures of the action; `state` is never modified.
pub fn reduce<R>(
    state: &SessionState,
    action: Action,
    rng: &mut R,
) -> Result<Transition, ValidationErrors>
where
    R: Rng + ?Sized,
{
    let screen = resolve(state);
    match action {
        Action::Setup(config) => {
            config.validate()?;
            Ok(Transition::persist(SessionState::start(config)))
        }
        Action::SaveParticipant { id, draft } => {
            if screen != Screen::Entry {
                return Err(ValidationError::NotInEntry.into());
            }
            let participant = submit_participant(state, id, &draft)?;
            Ok(Transition::persist(save_participant(state, participant)?))
        }
        Action::Draw => {
            if screen != Screen::Results {
                return Err(ValidationError::NotInResults.into());
            }
            if !state.can_draw() {
                return Err(ValidationError::NoDrinks.into());
            }
            let (next, outcome) = draw_session(state, rng);
            let mut transition = Transition::persist(next);
            transition.draw = Some(outcome);
            Ok(transition)
        }
        Action::EditDrinks { id, drinks } => {
            if screen != Screen::Results {
                return Err(ValidationError::NotInResults.into());
            }
            let (next, _) = edit_drinks(state, id, &drinks)?;
            Ok(Transition::persist(next))
        }
        Action::AddParticipant => {
            if screen != Screen::Results {
                return Err(ValidationError::NotInResults.into());
            }
            Ok(Transition::persist(add_participant(state)?))
        }
        Action::NewGame => Ok(Transition {
            state: SessionState::default(),
            screen: Screen::Setup,
            effect: Effect::Clear,
            draw: None,
        }),
    }
}

/// Owns the live session and funnels every mutation through [`reduce`] plus one persist.
pub struct SessionEngine<S>
where
    S: SessionStorage,
{
    storage: S,
    state: SessionState,
}

impl<S> SessionEngine<S>
where
    S: SessionStorage,
{
    /// Load once at start. Missing or unreadable saves start a fresh session.
    pub fn open(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => {
                if let Err(violation) = state.check_invariants() {
                    log::warn!("restored session is inconsistent: {violation}");
                }
                state
            }
            Ok(None) => SessionState::default(),
            Err(err) => {
                log::warn!("discarding unreadable session: {err}");
                SessionState::default()
            }
        };
        Self { storage, state }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        resolve(&self.state)
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply an action and persist the resulting state wholesale.
    ///
    /// A failing store is logged; the in-memory transition still applies so the
    /// game stays playable for the rest of the page lifetime.
    ///
    /// # Errors
    ///
    /// Returns the validation failures; the current state is kept.
    pub fn dispatch<R>(&mut self, action: Action, rng: &mut R) -> Result<Transition, ValidationErrors>
    where
        R: Rng + ?Sized,
    {
        let label = action.label();
        let transition = reduce(&self.state, action, rng)?;
        self.state = transition.state.clone();
        let stored = match transition.effect {
            Effect::Persist => self.storage.save(&self.state),
            Effect::Clear => self.storage.clear(),
        };
        if let Err(err) = stored {
            log::warn!("{label}: session store failed: {err}");
        }
        log::info!("{label} -> {:?}", transition.screen);
        Ok(transition)
    }
}
