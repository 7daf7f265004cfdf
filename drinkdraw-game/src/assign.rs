//! Assignment engine: pool every drink, shuffle, hand one out per participant.
//!
//! Each participant receives exactly one drink by roster position even when the pool
//! is larger than the roster; the surplus stays undrawn. A shortfall leaves the
//! trailing participants unassigned instead of failing.
use crate::error::ConsistencyViolation;
use crate::participant::Participant;
use crate::state::SessionState;
use rand::Rng;

/// Result of one draw over a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub participants: Vec<Participant>,
    pub pool_size: usize,
    pub assigned: usize,
    pub unassigned: usize,
    /// Pooled drinks nobody received, in shuffled order.
    pub leftover: Vec<String>,
}

impl DrawOutcome {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.unassigned == 0 && self.assigned > 0
    }
}

/// Flatten every participant's drinks, roster order first then entry order.
#[must_use]
pub fn pool_drinks(participants: &[Participant]) -> Vec<String> {
    participants
        .iter()
        .flat_map(|p| p.drinks.iter().cloned())
        .collect()
}

/// Fisher-Yates: walk from the last index down to 1, swapping with a uniform pick in `0..=i`.
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle the full pool and assign `pool[i]` to `participants[i]`.
///
/// Previous assignments are ignored; every call re-pools from the drink lists.
#[must_use]
pub fn draw<R>(participants: &[Participant], rng: &mut R) -> DrawOutcome
where
    R: Rng + ?Sized,
{
    let mut pool = pool_drinks(participants);
    let pool_size = pool.len();
    fisher_yates(&mut pool, rng);

    let mut shuffled = pool.into_iter();
    let assigned_roster: Vec<Participant> = participants
        .iter()
        .map(|participant| Participant {
            assigned_drink: shuffled.next(),
            ..participant.clone()
        })
        .collect();
    let leftover: Vec<String> = shuffled.collect();

    let assigned = assigned_roster.iter().filter(|p| p.has_assignment()).count();
    DrawOutcome {
        unassigned: assigned_roster.len() - assigned,
        participants: assigned_roster,
        pool_size,
        assigned,
        leftover,
    }
}

/// Run a draw over the session roster and return the replacement state.
///
/// `is_drawing_complete` is only raised when every participant got a drink.
#[must_use]
pub fn draw_session<R>(state: &SessionState, rng: &mut R) -> (SessionState, DrawOutcome)
where
    R: Rng + ?Sized,
{
    let outcome = draw(&state.participants, rng);
    if outcome.unassigned > 0 {
        let violation = ConsistencyViolation::PoolShortfall {
            pool: outcome.pool_size,
            participants: state.participants.len(),
        };
        log::warn!("draw degraded: {violation}");
    }
    log::info!(
        "drew {} of {} pooled drinks for {} participants",
        outcome.assigned,
        outcome.pool_size,
        state.participants.len()
    );

    let next = SessionState {
        participants: outcome.participants.clone(),
        is_drawing_complete: outcome.is_complete(),
        ..state.clone()
    };
    (next, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;

    fn person(id: u32, drinks: &[&str]) -> Participant {
        Participant {
            id,
            name: format!("P{id}"),
            drinks: drinks.iter().map(|d| (*d).to_string()).collect(),
            assigned_drink: None,
        }
    }

    fn sorted(mut items: Vec<String>) -> Vec<String> {
        items.sort();
        items
    }

    #[test]
    fn pool_preserves_roster_then_entry_order() {
        let roster = [person(1, &["a", "b"]), person(2, &["c"])];
        assert_eq!(pool_drinks(&roster), ["a", "b", "c"]);
    }

    #[test]
    fn shuffle_handles_trivial_slices() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);
        let mut single = [42];
        fisher_yates(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut items: Vec<u32> = (0..50).collect();
        fisher_yates(&mut items, &mut rng);
        let mut restored = items.clone();
        restored.sort_unstable();
        assert_eq!(restored, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn one_drink_each_with_surplus_left_over() {
        let roster = [
            person(1, &["a", "b"]),
            person(2, &["c", "d", "e"]),
            person(3, &["f"]),
        ];
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let outcome = draw(&roster, &mut rng);
        assert_eq!(outcome.pool_size, 6);
        assert_eq!(outcome.assigned, 3);
        assert_eq!(outcome.unassigned, 0);
        assert_eq!(outcome.leftover.len(), 3);
        assert!(outcome.is_complete());

        let mut handed: Vec<String> = outcome
            .participants
            .iter()
            .filter_map(|p| p.assigned_drink.clone())
            .collect();
        handed.extend(outcome.leftover.iter().cloned());
        assert_eq!(sorted(handed), sorted(pool_drinks(&roster)));
    }

    #[test]
    fn shortfall_leaves_trailing_participants_unassigned() {
        let roster = [person(1, &["a"]), person(2, &[]), person(3, &[])];
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let outcome = draw(&roster, &mut rng);
        assert_eq!(outcome.assigned, 1);
        assert_eq!(outcome.unassigned, 2);
        assert_eq!(outcome.participants[0].assigned_drink.as_deref(), Some("a"));
        assert!(outcome.participants[1].assigned_drink.is_none());
        assert!(!outcome.is_complete());
    }

    #[test]
    fn empty_roster_does_not_panic() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let outcome = draw(&[], &mut rng);
        assert_eq!(outcome.pool_size, 0);
        assert!(!outcome.is_complete());
    }

    #[test]
    fn redraw_ignores_previous_assignment() {
        let mut roster = vec![person(1, &["a"]), person(2, &["b"])];
        roster[0].assigned_drink = Some("stale".into());
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let outcome = draw(&roster, &mut rng);
        for p in &outcome.participants {
            let drink = p.assigned_drink.as_deref().unwrap();
            assert!(drink == "a" || drink == "b");
        }
    }

    #[test]
    fn same_seed_same_draw() {
        let roster = [person(1, &["a", "b"]), person(2, &["c", "d"])];
        let first = draw(&roster, &mut ChaCha20Rng::seed_from_u64(21));
        let second = draw(&roster, &mut ChaCha20Rng::seed_from_u64(21));
        assert_eq!(first, second);
    }

    #[test]
    fn three_element_shuffle_hits_every_ordering() {
        let mut rng = ChaCha20Rng::seed_from_u64(1234);
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
        for _ in 0..6_000 {
            let mut items = [0_u8, 1, 2];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (ordering, count) in counts {
            assert!(
                (800..=1_200).contains(&count),
                "ordering {ordering:?} drawn {count} times"
            );
        }
    }

    #[test]
    fn session_draw_sets_flag_only_when_complete() {
        let mut state = SessionState::default();
        state.participants = vec![person(1, &["a"]), person(2, &["b"])];
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let (next, outcome) = draw_session(&state, &mut rng);
        assert!(next.is_drawing_complete);
        assert_eq!(outcome.assigned, 2);

        state.participants[1].drinks.clear();
        state.participants.push(person(3, &[]));
        let (degraded, _) = draw_session(&state, &mut rng);
        assert!(!degraded.is_drawing_complete);
    }
}
