// Accessibility helpers

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "draw-status";

/// Get CSS for visible focus indicators and screen reader utilities
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:2px solid hsl(var(--ring));outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Announces draw results and screen changes to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move keyboard focus back to the element with `id`, e.g. after a dialog closes.
pub fn restore_focus(id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Screen-reader summary of a finished draw.
#[must_use]
pub fn draw_announcement(assigned: usize, unassigned: usize) -> String {
    match unassigned {
        0 => format!("Draw complete: {assigned} drink(s) assigned."),
        n => format!("Draw finished: {assigned} assigned, {n} participant(s) without a drink."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_mentions_shortfall() {
        assert_eq!(draw_announcement(3, 0), "Draw complete: 3 drink(s) assigned.");
        assert!(draw_announcement(2, 1).contains("1 participant(s) without a drink"));
    }
}
