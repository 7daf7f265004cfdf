use crate::components::button::{Button, Variant};
use crate::components::error_list::ErrorList;
use drinkdraw_game::{DrawOutcome, Participant};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub participants: Vec<Participant>,
    pub is_drawn: bool,
    pub can_draw: bool,
    pub on_draw: Callback<()>,
    pub on_edit: Callback<u32>,
    pub on_add: Callback<()>,
    /// Summary of the draw just performed, if any.
    #[prop_or_default]
    pub last_draw: Option<DrawOutcome>,
    #[prop_or_default]
    pub errors: Vec<String>,
}

fn draw_summary(outcome: &DrawOutcome) -> Option<String> {
    match (outcome.unassigned, outcome.leftover.len()) {
        (0, 0) => None,
        (0, spare) => Some(format!("{spare} drink(s) left in the pool")),
        (short, _) => Some(format!(
            "Not enough drinks: {short} participant(s) got nothing"
        )),
    }
}

#[function_component(ResultsPage)]
pub fn results_page(p: &Props) -> Html {
    let on_draw = {
        let cb = p.on_draw.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_add = {
        let cb = p.on_add.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let cards = p.participants.iter().map(|participant| {
        let on_edit = {
            let cb = p.on_edit.clone();
            let id = participant.id;
            Callback::from(move |_| cb.emit(id))
        };
        let assignment = participant.assigned_drink.as_ref().map_or_else(
            || html! { <p class="assignment assignment--pending">{ "Not drawn yet" }</p> },
            |drink| html! { <p class="assignment">{ drink.clone() }</p> },
        );
        html! {
            <article class="card participant-card" key={participant.id}>
                <h3>{ participant.name.clone() }</h3>
                <div class="card__drink">{ assignment }</div>
                <Button
                    id={AttrValue::from(format!("edit-btn-{}", participant.id))}
                    label={AttrValue::from("Edit my drinks")}
                    variant={Variant::Outline}
                    onclick={on_edit}
                />
            </article>
        }
    });

    let summary = p.last_draw.as_ref().and_then(draw_summary);

    html! {
        <section class="results" aria-labelledby="results-title">
            <h2 id="results-title" class="sr-only">{ "Results" }</h2>
            <p class="muted lead">
                { if p.is_drawn { "Draw again for a new shuffle" } else { "Ready for the draw" } }
            </p>
            <div class="results__actions">
                <Button
                    id={AttrValue::from("draw-btn")}
                    label={AttrValue::from(if p.is_drawn { "Draw again" } else { "Draw the drinks" })}
                    disabled={!p.can_draw}
                    onclick={on_draw}
                />
                <Button
                    label={AttrValue::from("Add a participant")}
                    variant={Variant::Secondary}
                    onclick={on_add}
                />
            </div>
            if let Some(text) = summary {
                <p class="notice" role="status">{ text }</p>
            }
            <ErrorList messages={p.errors.clone()} />
            <div class="participant-grid">{ for cards }</div>
            if !p.can_draw {
                <p class="notice notice--error">{ "Some participants have not entered any drinks" }</p>
            }
        </section>
    }
}
