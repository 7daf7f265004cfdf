use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub messages: Vec<String>,
}

/// Form-level validation messages; renders nothing when the list is empty.
#[function_component(ErrorList)]
pub fn error_list(p: &Props) -> Html {
    if p.messages.is_empty() {
        return Html::default();
    }
    html! {
        <div class="form-errors" role="alert">
            <ul>
                { for p.messages.iter().map(|msg| html! { <li>{ msg.clone() }</li> }) }
            </ul>
        </div>
    }
}
