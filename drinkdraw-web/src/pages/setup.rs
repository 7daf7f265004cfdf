use crate::components::button::Button;
use crate::input::{digits_only, event_value};
use crate::paths::bar_logo_path;
use drinkdraw_game::constants::{DEFAULT_DRINKS_PER_PERSON, DEFAULT_PEOPLE};
use drinkdraw_game::{Bar, BarCatalog, Config, ValidationError};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_submit: Callback<Config>,
    /// Live preview of the highlighted bar's theme.
    #[prop_or_default]
    pub on_bar_change: Callback<Option<String>>,
}

fn field_error(errors: &[ValidationError], people: bool) -> Option<String> {
    errors
        .iter()
        .find(|err| {
            matches!(
                (err, people),
                (ValidationError::PeopleOutOfRange { .. }, true)
                    | (ValidationError::DrinksOutOfRange { .. }, false)
            )
        })
        .map(ToString::to_string)
}

#[function_component(SetupPage)]
pub fn setup_page(p: &Props) -> Html {
    let catalog = BarCatalog::default_catalog();
    let people = use_state(|| DEFAULT_PEOPLE.to_string());
    let drinks = use_state(|| DEFAULT_DRINKS_PER_PERSON.to_string());
    let selected = use_state(|| catalog.default_bar().map(|bar| bar.id.clone()));
    let errors = use_state(Vec::<ValidationError>::new);

    let on_people = {
        let people = people.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                people.set(digits_only(&value));
            }
        })
    };
    let on_drinks = {
        let drinks = drinks.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                drinks.set(digits_only(&value));
            }
        })
    };
    let on_submit = {
        let people = people.clone();
        let drinks = drinks.clone();
        let selected = selected.clone();
        let errors = errors.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match Config::from_inputs(&people, &drinks, (*selected).clone()) {
                Ok(config) => {
                    errors.set(Vec::new());
                    cb.emit(config);
                }
                Err(errs) => errors.set(errs.into_vec()),
            }
        })
    };

    let bar_card = |bar: &Bar| {
        let is_selected = selected.as_deref() == Some(bar.id.as_str());
        let onclick = {
            let selected = selected.clone();
            let on_change = p.on_bar_change.clone();
            let id = bar.id.clone();
            Callback::from(move |_| {
                selected.set(Some(id.clone()));
                on_change.emit(Some(id.clone()));
            })
        };
        let heading = bar.logo.as_ref().map_or_else(
            || html! { <h3 class="bar-card__name">{ bar.name.clone() }</h3> },
            |logo| html! { <img class="bar-card__logo" src={bar_logo_path(logo)} alt={bar.name.clone()} /> },
        );
        html! {
            <button
                type="button"
                key={bar.id.clone()}
                class={classes!("bar-card", is_selected.then_some("bar-card--selected"))}
                aria-pressed={is_selected.to_string()}
                style={format!(
                    "background: linear-gradient(135deg, hsl({}) 0%, hsl({}) 100%)",
                    bar.theme.background, bar.theme.card_bg
                )}
                {onclick}
            >
                { heading }
                <p class="muted">{ bar.description.clone() }</p>
                if !bar.drinks.is_empty() {
                    <p class="muted small">{ format!("{} drinks on the menu", bar.drinks.len()) }</p>
                }
            </button>
        }
    };

    let people_error = field_error(&errors, true);
    let drinks_error = field_error(&errors, false);

    html! {
        <section class="panel setup" aria-labelledby="setup-title">
            <h2 id="setup-title">{ "Setup" }</h2>
            <p class="muted">{ "Set up your random drink draw" }</p>
            <form onsubmit={on_submit}>
                <div class="field">
                    <label for="number-of-people">{ "Number of people" }</label>
                    <input
                        id="number-of-people"
                        type="text"
                        inputmode="numeric"
                        pattern="[0-9]*"
                        class={classes!("input", people_error.is_some().then_some("input--invalid"))}
                        value={(*people).clone()}
                        placeholder={DEFAULT_PEOPLE.to_string()}
                        aria-invalid={people_error.is_some().then_some("true")}
                        oninput={on_people}
                    />
                    if let Some(msg) = people_error.clone() {
                        <p class="field-error">{ msg }</p>
                    }
                </div>
                <div class="field">
                    <label for="drinks-per-person">{ "Drinks per person" }</label>
                    <input
                        id="drinks-per-person"
                        type="text"
                        inputmode="numeric"
                        pattern="[0-9]*"
                        class={classes!("input", drinks_error.is_some().then_some("input--invalid"))}
                        value={(*drinks).clone()}
                        placeholder={DEFAULT_DRINKS_PER_PERSON.to_string()}
                        aria-invalid={drinks_error.is_some().then_some("true")}
                        oninput={on_drinks}
                    />
                    if let Some(msg) = drinks_error.clone() {
                        <p class="field-error">{ msg }</p>
                    }
                </div>
                <fieldset class="field bar-picker">
                    <legend>{ "Choose a bar" }</legend>
                    { for catalog.iter().map(bar_card) }
                </fieldset>
                <Button label={AttrValue::from("Start")} submit={true} />
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_are_routed_by_kind() {
        let errors = vec![
            ValidationError::DrinksOutOfRange { value: 0 },
            ValidationError::PeopleOutOfRange { value: 21 },
        ];
        assert!(field_error(&errors, true).unwrap().contains("21"));
        assert!(field_error(&errors, false).unwrap().contains("got 0"));
        assert!(field_error(&[], true).is_none());
    }
}
