//! Limits and defaults shared by the session controllers and the web shell.

/// Smallest party a session can be configured for.
pub const MIN_PEOPLE: u8 = 1;
/// Largest party a session can be configured for.
pub const MAX_PEOPLE: u8 = 20;

/// Lower bound for the per-person drink slots chosen at setup.
pub const MIN_DRINKS_PER_PERSON: u8 = 1;
/// Upper bound for the per-person drink slots chosen at setup.
pub const MAX_DRINKS_PER_PERSON: u8 = 20;

/// Hard cap on a single participant's drink list (edit dialog included).
pub const MAX_DRINKS_PER_PARTICIPANT: usize = 20;

/// Value pre-filled in the setup form for the party size.
pub const DEFAULT_PEOPLE: u8 = 5;
/// Value pre-filled in the setup form for drink slots.
pub const DEFAULT_DRINKS_PER_PERSON: u8 = 5;

/// Key under which the serialized session lives in the persistent store.
pub const SESSION_STORAGE_KEY: &str = "drinkdraw.session";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_bounds() {
        assert!((MIN_PEOPLE..=MAX_PEOPLE).contains(&DEFAULT_PEOPLE));
        assert!(
            (MIN_DRINKS_PER_PERSON..=MAX_DRINKS_PER_PERSON).contains(&DEFAULT_DRINKS_PER_PERSON)
        );
        assert_eq!(
            usize::from(MAX_DRINKS_PER_PERSON),
            MAX_DRINKS_PER_PARTICIPANT
        );
    }
}
