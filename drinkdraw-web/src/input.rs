// Form input helpers shared by the setup and entry screens.
use yew::prelude::{InputEvent, TargetCast};

/// Strip everything but ASCII digits, the way the count fields filter keystrokes.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    regex::Regex::new(r"[^0-9]+").map_or_else(
        |_| raw.chars().filter(char::is_ascii_digit).collect(),
        |re| re.replace_all(raw, "").into_owned(),
    )
}

/// Replace slot `index` of a drink list, ignoring out-of-range indices.
#[must_use]
pub fn with_slot(drinks: &[String], index: usize, value: String) -> Vec<String> {
    let mut next = drinks.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = value;
    }
    next
}

// Pulls the current value out of an input event target.
#[must_use]
pub fn event_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}
