use crate::components::button::Button;
use crate::components::error_list::ErrorList;
use crate::input::{event_value, with_slot};
use drinkdraw_game::{EntryProgress, ParticipantDraft};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub progress: EntryProgress,
    /// Called with the frozen entry id so a double submit replaces instead of appending.
    pub on_save: Callback<(u32, ParticipantDraft)>,
    #[prop_or_default]
    pub errors: Vec<String>,
}

/// One participant's name and drink list. Keyed by entry id by the caller, so
/// every new participant starts from a blank form.
#[function_component(EntryPage)]
pub fn entry_page(p: &Props) -> Html {
    let slots = p.progress.drink_slots;
    let name = use_state(String::new);
    let drinks = use_state(|| ParticipantDraft::blank(slots).drinks);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                name.set(value);
            }
        })
    };
    let on_submit = {
        let name = name.clone();
        let drinks = drinks.clone();
        let cb = p.on_save.clone();
        let id = p.progress.entry_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((id, ParticipantDraft::new((*name).clone(), (*drinks).clone())));
        })
    };

    let drink_inputs = drinks.iter().enumerate().map(|(index, drink)| {
        let oninput = {
            let drinks = drinks.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = event_value(&e) {
                    drinks.set(with_slot(&drinks, index, value));
                }
            })
        };
        html! {
            <input
                key={index}
                type="text"
                class="input"
                value={drink.clone()}
                placeholder={format!("Drink {}", index + 1)}
                aria-label={format!("Drink {}", index + 1)}
                {oninput}
            />
        }
    });

    let progress = p.progress;
    let submit_label = if progress.is_last {
        "Finish entries"
    } else {
        "Save this person"
    };

    html! {
        <section class="panel entry" aria-labelledby="entry-title">
            <h2 id="entry-title">
                { format!("Person {} of {}", progress.current_index + 1, progress.total) }
            </h2>
            <p class="muted">
                { format!("{} / {} people registered", progress.registered, progress.total) }
            </p>
            <form onsubmit={on_submit}>
                <div class="field">
                    <label for="participant-name">{ "Your name" }</label>
                    <input
                        id="participant-name"
                        type="text"
                        class="input"
                        value={(*name).clone()}
                        placeholder="e.g. Sophie"
                        oninput={on_name}
                    />
                </div>
                <div class="field">
                    <span class="label">{ format!("Your drinks ({slots})") }</span>
                    <div class="drink-grid">{ for drink_inputs }</div>
                </div>
                <ErrorList messages={p.errors.clone()} />
                <Button label={AttrValue::from(submit_label)} submit={true} />
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn progress(registered: usize, total: usize) -> EntryProgress {
        EntryProgress {
            current_index: registered,
            total,
            registered,
            is_last: registered + 1 >= total,
            entry_id: u32::try_from(registered).unwrap() + 1,
            drink_slots: 3,
        }
    }

    #[test]
    fn renders_position_and_blank_slots() {
        let props = Props {
            progress: progress(1, 4),
            on_save: Callback::noop(),
            errors: Vec::new(),
        };
        let html = block_on(LocalServerRenderer::<EntryPage>::with_props(props).render());
        assert!(html.contains("Person 2 of 4"));
        assert!(html.contains("1 / 4 people registered"));
        assert!(html.contains("Drink 3"));
        assert!(!html.contains("Drink 4"));
        assert!(html.contains("Save this person"));
    }

    #[test]
    fn last_person_finishes_and_shows_errors() {
        let props = Props {
            progress: progress(2, 3),
            on_save: Callback::noop(),
            errors: vec!["a name is required".to_string()],
        };
        let html = block_on(LocalServerRenderer::<EntryPage>::with_props(props).render());
        assert!(html.contains("Finish entries"));
        assert!(html.contains("a name is required"));
    }
}
