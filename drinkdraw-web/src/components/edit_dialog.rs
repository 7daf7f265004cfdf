use crate::components::button::{Button, Variant};
use crate::components::error_list::ErrorList;
use crate::components::modal::Modal;
use crate::input::event_value;
use drinkdraw_game::{EditBuffer, Participant, normalize_drinks};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub participant: Participant,
    /// Receives the trimmed drink list once it validates.
    pub on_save: Callback<(u32, Vec<String>)>,
    pub on_cancel: Callback<()>,
}

/// Drink-list editor for one participant. Saving discards every assignment of the game.
#[function_component(EditDialog)]
pub fn edit_dialog(p: &Props) -> Html {
    let buffer = use_state(|| EditBuffer::for_participant(&p.participant));
    let errors = use_state(Vec::<String>::new);

    let add_slot = {
        let buffer = buffer.clone();
        Callback::from(move |_| {
            let mut next = (*buffer).clone();
            if next.add_slot() {
                buffer.set(next);
            }
        })
    };

    let on_submit = {
        let buffer = buffer.clone();
        let errors = errors.clone();
        let on_save = p.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match normalize_drinks(buffer.drinks()) {
                Ok(drinks) => {
                    errors.set(Vec::new());
                    on_save.emit((buffer.id(), drinks));
                }
                Err(err) => errors.set(vec![err.to_string()]),
            }
        })
    };

    let slots = buffer.drinks().iter().enumerate().map(|(index, drink)| {
        let oninput = {
            let buffer = buffer.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = event_value(&e) {
                    let mut next = (*buffer).clone();
                    next.set(index, value);
                    buffer.set(next);
                }
            })
        };
        let onremove = {
            let buffer = buffer.clone();
            Callback::from(move |_| {
                let mut next = (*buffer).clone();
                if next.remove_slot(index) {
                    buffer.set(next);
                }
            })
        };
        html! {
            <div class="drink-slot" key={index}>
                <input
                    type="text"
                    class="input"
                    value={drink.clone()}
                    placeholder={format!("Drink {}", index + 1)}
                    aria-label={format!("Drink {}", index + 1)}
                    {oninput}
                />
                <Button
                    label={AttrValue::from("Remove")}
                    aria_label={Some(AttrValue::from(format!("Remove drink {}", index + 1)))}
                    variant={Variant::Outline}
                    disabled={!buffer.can_remove()}
                    onclick={onremove}
                />
            </div>
        }
    });

    let cancel_click = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let messages = (*errors).clone();

    html! {
        <Modal
            open={true}
            title={AttrValue::from("Edit drinks")}
            description={Some(AttrValue::from(p.participant.name.clone()))}
            on_close={p.on_cancel.clone()}
            return_focus_id={Some(AttrValue::from(format!("edit-btn-{}", p.participant.id)))}
        >
            <form class="edit-form" onsubmit={on_submit}>
                <div class="edit-form__toolbar">
                    <span class="label">{ format!("Your drinks ({})", buffer.drinks().len()) }</span>
                    <Button
                        label={AttrValue::from("Add")}
                        variant={Variant::Outline}
                        disabled={!buffer.can_add()}
                        onclick={add_slot}
                    />
                </div>
                <div class="drink-grid">{ for slots }</div>
                <ErrorList {messages} />
                <div class="modal__actions">
                    <Button label={AttrValue::from("Cancel")} variant={Variant::Outline} onclick={cancel_click} />
                    <Button label={AttrValue::from("Save")} submit={true} />
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn dialog_lists_current_drinks() {
        let props = Props {
            participant: Participant {
                id: 3,
                name: "Leo".into(),
                drinks: vec!["Spritz".into(), "Cidre".into()],
                assigned_drink: None,
            },
            on_save: Callback::noop(),
            on_cancel: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<EditDialog>::with_props(props).render());
        assert!(html.contains("Leo"));
        assert!(html.contains("Drink 2"));
        assert!(html.contains("Your drinks (2)"));
        assert!(html.contains("edit-form"));
    }
}
