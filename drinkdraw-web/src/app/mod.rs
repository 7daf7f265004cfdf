use crate::components::edit_dialog::EditDialog;
use crate::components::header::Header;
use crate::pages::entry::EntryPage;
use crate::pages::results::ResultsPage;
use crate::pages::setup::SetupPage;
use drinkdraw_game::{Action, BarCatalog, Config, EntryProgress, ParticipantDraft, Screen};
use yew::prelude::*;

pub mod state;

pub use state::{AppAction, AppModel, Rejection, use_app_state};

#[function_component(App)]
pub fn app() -> Html {
    let model = use_app_state();
    let editing = use_state(|| None::<u32>);
    let preview_bar = use_state(|| None::<String>);

    // Setup previews the highlighted bar; later screens use the session's bar.
    let theme_bar = if model.screen == Screen::Setup {
        (*preview_bar)
            .clone()
            .or_else(|| BarCatalog::default_catalog().default_bar().map(|bar| bar.id.clone()))
    } else {
        model.session.config.selected_bar_id.clone()
    };
    use_effect_with(theme_bar, |bar_id| {
        let catalog = BarCatalog::default_catalog();
        crate::theme::apply_bar_theme(bar_id.as_deref().and_then(|id| catalog.get(id)));
        || {}
    });

    {
        let announcement = model
            .last_draw
            .as_ref()
            .map(|outcome| crate::a11y::draw_announcement(outcome.assigned, outcome.unassigned));
        use_effect_with(announcement, |text| {
            if let Some(text) = text {
                crate::a11y::set_status(text);
            }
            || {}
        });
    }

    let dispatch = {
        let model = model.clone();
        Callback::from(move |action: Action| model.dispatch(AppAction::Dispatch(action)))
    };

    let on_reset = {
        let dispatch = dispatch.clone();
        let editing = editing.clone();
        let preview_bar = preview_bar.clone();
        Callback::from(move |()| {
            editing.set(None);
            preview_bar.set(None);
            dispatch.emit(Action::NewGame);
        })
    };

    let body = match model.screen {
        Screen::Setup => {
            let on_submit = {
                let dispatch = dispatch.clone();
                Callback::from(move |config: Config| dispatch.emit(Action::Setup(config)))
            };
            let on_bar_change = {
                let preview_bar = preview_bar.clone();
                Callback::from(move |id: Option<String>| preview_bar.set(id))
            };
            html! { <SetupPage {on_submit} {on_bar_change} /> }
        }
        Screen::Entry => {
            let progress = EntryProgress::of(&model.session);
            let on_save = {
                let dispatch = dispatch.clone();
                Callback::from(move |(id, draft): (u32, ParticipantDraft)| {
                    dispatch.emit(Action::SaveParticipant { id, draft });
                })
            };
            html! {
                <EntryPage
                    key={progress.entry_id}
                    {progress}
                    {on_save}
                    errors={model.rejection_for("save-participant")}
                />
            }
        }
        Screen::Results => {
            let on_draw = {
                let dispatch = dispatch.clone();
                Callback::from(move |()| dispatch.emit(Action::Draw))
            };
            let on_add = {
                let dispatch = dispatch.clone();
                Callback::from(move |()| dispatch.emit(Action::AddParticipant))
            };
            let on_edit = {
                let editing = editing.clone();
                let model = model.clone();
                Callback::from(move |id: u32| {
                    model.dispatch(AppAction::DismissRejection);
                    editing.set(Some(id));
                })
            };
            let errors: Vec<String> = ["draw", "add-participant", "edit-drinks"]
                .into_iter()
                .flat_map(|action| model.rejection_for(action))
                .collect();
            html! {
                <ResultsPage
                    participants={model.session.participants.clone()}
                    is_drawn={model.session.is_drawing_complete}
                    can_draw={model.session.can_draw()}
                    {on_draw}
                    {on_edit}
                    {on_add}
                    last_draw={model.last_draw.clone()}
                    {errors}
                />
            }
        }
    };

    let dialog = (*editing)
        .filter(|_| model.screen == Screen::Results)
        .and_then(|id| model.session.find(id).cloned())
        .map(|participant| {
            let on_save = {
                let dispatch = dispatch.clone();
                let editing = editing.clone();
                Callback::from(move |(id, drinks): (u32, Vec<String>)| {
                    dispatch.emit(Action::EditDrinks { id, drinks });
                    editing.set(None);
                })
            };
            let on_cancel = {
                let editing = editing.clone();
                Callback::from(move |()| editing.set(None))
            };
            let key = participant.id;
            html! {
                <EditDialog
                    {key}
                    {participant}
                    {on_save}
                    {on_cancel}
                />
            }
        })
        .unwrap_or_default();

    html! {
        <>
            <Header title={AttrValue::from(model.screen.title())} {on_reset} />
            <main id="main" class="app-main">
                { body }
                { dialog }
            </main>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
        </>
    }
}
