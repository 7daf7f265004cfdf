use crate::components::button::{Button, Variant};
use crate::components::modal::Modal;
use yew::prelude::*;

pub const RESET_BUTTON_ID: &str = "reset-open-btn";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    /// Fired only after the user confirms the reset.
    pub on_reset: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let confirm_open = use_state(|| false);

    let open_confirm = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_| confirm_open.set(true))
    };
    let cancel = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |()| confirm_open.set(false))
    };
    let cancel_click = {
        let cancel = cancel.clone();
        Callback::from(move |_| cancel.emit(()))
    };
    let confirm = {
        let confirm_open = confirm_open.clone();
        let on_reset = p.on_reset.clone();
        Callback::from(move |_| {
            confirm_open.set(false);
            on_reset.emit(());
        })
    };

    html! {
        <>
            <header role="banner" class="app-header">
                <a href="#main" class="sr-only">{ "Skip to content" }</a>
                <div class="header-content">
                    <h1 class="brand">{ "Drinkdraw" }</h1>
                    <span class="header-title">{ p.title.clone() }</span>
                    <Button
                        id={AttrValue::from(RESET_BUTTON_ID)}
                        label={AttrValue::from("New game")}
                        variant={Variant::Outline}
                        onclick={open_confirm}
                    />
                </div>
            </header>
            <Modal
                open={*confirm_open}
                title={AttrValue::from("Start a new game?")}
                description={Some(AttrValue::from("Every participant, drink and result of the current game will be lost."))}
                on_close={cancel}
                return_focus_id={Some(AttrValue::from(RESET_BUTTON_ID))}
            >
                <div class="modal__actions">
                    <Button
                        label={AttrValue::from("Cancel")}
                        variant={Variant::Outline}
                        onclick={cancel_click}
                    />
                    <Button
                        label={AttrValue::from("Confirm")}
                        variant={Variant::Destructive}
                        onclick={confirm}
                    />
                </div>
            </Modal>
        </>
    }
}
