use drinkdraw_game::{Action, DrawOutcome, Screen, SessionEngine, SessionState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = crate::storage::LocalStorageSession;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = drinkdraw_game::NullStorage;

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_SEED: u64 = 0x0D21_4E4B;

fn draw_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::entropy()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        NATIVE_SEED
    }
}

/// The last action the core refused, with its user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub action: &'static str,
    pub messages: Vec<String>,
}

/// Snapshot of the session as the views see it.
///
/// The engine behind it is shared between snapshots; every accepted action
/// replaces the stored session through it exactly once.
#[derive(Clone)]
pub struct AppModel {
    pub session: SessionState,
    pub screen: Screen,
    pub rejection: Option<Rejection>,
    pub last_draw: Option<DrawOutcome>,
    engine: Rc<RefCell<SessionEngine<PlatformStorage>>>,
    rng: Rc<RefCell<ChaCha20Rng>>,
}

impl AppModel {
    #[must_use]
    pub fn open(storage: PlatformStorage, seed: u64) -> Self {
        let engine = SessionEngine::open(storage);
        Self {
            session: engine.state().clone(),
            screen: engine.screen(),
            rejection: None,
            last_draw: None,
            engine: Rc::new(RefCell::new(engine)),
            rng: Rc::new(RefCell::new(ChaCha20Rng::seed_from_u64(seed))),
        }
    }

    /// Messages of the last rejection, if it came from `action`.
    #[must_use]
    pub fn rejection_for(&self, action: &str) -> Vec<String> {
        self.rejection
            .as_ref()
            .filter(|rejection| rejection.action == action)
            .map(|rejection| rejection.messages.clone())
            .unwrap_or_default()
    }
}

impl PartialEq for AppModel {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
            && self.rejection == other.rejection
            && self.last_draw == other.last_draw
    }
}

pub enum AppAction {
    Dispatch(Action),
    DismissRejection,
}

impl Reducible for AppModel {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let action = match action {
            AppAction::Dispatch(action) => action,
            AppAction::DismissRejection => {
                let mut next = (*self).clone();
                next.rejection = None;
                return Rc::new(next);
            }
        };
        let label = action.label();
        let result = {
            let mut rng = self.rng.borrow_mut();
            self.engine.borrow_mut().dispatch(action, &mut *rng)
        };
        let mut next = (*self).clone();
        match result {
            Ok(transition) => {
                next.session = transition.state;
                next.screen = transition.screen;
                next.rejection = None;
                next.last_draw = transition.draw;
            }
            Err(errors) => {
                log::info!("{label} rejected: {errors}");
                next.rejection = Some(Rejection {
                    action: label,
                    messages: errors.messages(),
                });
            }
        }
        Rc::new(next)
    }
}

#[hook]
pub fn use_app_state() -> UseReducerHandle<AppModel> {
    use_reducer(|| AppModel::open(PlatformStorage::default(), draw_seed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drinkdraw_game::{Config, ParticipantDraft};

    fn dispatch(model: Rc<AppModel>, action: Action) -> Rc<AppModel> {
        model.reduce(AppAction::Dispatch(action))
    }

    #[test]
    fn accepted_actions_replace_the_snapshot() {
        let model = Rc::new(AppModel::open(PlatformStorage::default(), 7));
        assert_eq!(model.screen, Screen::Setup);

        let model = dispatch(model, Action::Setup(Config::new(1, 1, None).unwrap()));
        assert_eq!(model.screen, Screen::Entry);

        let model = dispatch(
            model,
            Action::SaveParticipant {
                id: 1,
                draft: ParticipantDraft::new("Ana", vec!["Mojito".into()]),
            },
        );
        assert_eq!(model.screen, Screen::Results);

        let model = dispatch(model, Action::Draw);
        assert!(model.session.is_drawing_complete);
        assert_eq!(model.last_draw.as_ref().map(|d| d.assigned), Some(1));
    }

    #[test]
    fn rejections_are_kept_per_action_and_dismissable() {
        let model = Rc::new(AppModel::open(PlatformStorage::default(), 7));
        let model = dispatch(model, Action::Setup(Config::new(1, 2, None).unwrap()));
        let model = dispatch(
            model,
            Action::SaveParticipant {
                id: 1,
                draft: ParticipantDraft::new("", vec!["Mojito".into(), " ".into()]),
            },
        );
        assert_eq!(model.screen, Screen::Entry);
        let messages = model.rejection_for("save-participant");
        assert_eq!(messages.len(), 2);
        assert!(model.rejection_for("draw").is_empty());

        let model = model.reduce(AppAction::DismissRejection);
        assert!(model.rejection.is_none());
    }
}
