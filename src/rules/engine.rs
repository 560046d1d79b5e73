//! Event reducer trait for event-sourced game variants.
//!
//! A game implements `EventReducer` to define:
//! - The empty state a player starts from
//! - How a single event changes that state
//! - Which key orders the log
//!
//! The provided methods turn that into a rollup: order the log by its key,
//! then fold every event into the initial state.

use crate::core::{PlayerId, Timestamp};

/// Event-sourced reducer.
///
/// ## Implementation Notes
///
/// - `apply` must be pure: same state and event, same result
/// - `apply` consumes the state so a failed event can never leak a
///   half-applied state to the caller
/// - `ordering_key` is authoritative; array position in the input is not
pub trait EventReducer {
    /// Folded state.
    type State: Clone;

    /// Log entry.
    type Event;

    /// Failure raised by `apply`.
    type Error;

    /// The identity state for `player`.
    fn initial(&self, player: &PlayerId) -> Self::State;

    /// Ordering key of an event.
    fn ordering_key(&self, event: &Self::Event) -> Timestamp;

    /// Apply one event.
    fn apply(&self, state: Self::State, event: &Self::Event) -> Result<Self::State, Self::Error>;

    /// Key of the latest event already folded into `state`, if the state
    /// tracks one. `resume` skips events at or before it.
    fn applied_through(&self, _state: &Self::State) -> Option<Timestamp> {
        None
    }

    // === Convenience Methods ===

    /// Events in ascending key order. Ties keep their input order.
    fn ordered<'a>(&self, events: &'a [Self::Event]) -> Vec<&'a Self::Event> {
        let mut ordered: Vec<&Self::Event> = events.iter().collect();
        ordered.sort_by_key(|event| self.ordering_key(event));
        ordered
    }

    /// Fold the whole log into `player`'s current state.
    fn rollup_all(&self, player: &PlayerId, events: &[Self::Event]) -> Result<Self::State, Self::Error> {
        self.resume(self.initial(player), events)
    }

    /// Continue from a previously folded state with newer events.
    ///
    /// Events keyed at or before `applied_through` are treated as already
    /// folded and skipped, so an overlapping batch is safe to pass.
    fn resume(&self, state: Self::State, events: &[Self::Event]) -> Result<Self::State, Self::Error> {
        let watermark = self.applied_through(&state);
        self.ordered(events)
            .into_iter()
            .filter(|event| watermark.map_or(true, |seen| self.ordering_key(event) > seen))
            .try_fold(state, |state, event| self.apply(state, event))
    }

    /// The state after each event, in log order.
    ///
    /// Entry `i` is the state once the `i + 1` earliest events are applied.
    fn rollup_history(&self, player: &PlayerId, events: &[Self::Event]) -> Result<Vec<Self::State>, Self::Error> {
        let mut history = Vec::with_capacity(events.len());
        let mut state = self.initial(player);

        for event in self.ordered(events) {
            state = self.apply(state, event)?;
            history.push(state.clone());
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Concatenates labels; fails on an empty label.
    struct Concat;

    impl EventReducer for Concat {
        type State = String;
        type Event = (i64, &'static str);
        type Error = ();

        fn initial(&self, _player: &PlayerId) -> String {
            String::new()
        }

        fn ordering_key(&self, event: &Self::Event) -> Timestamp {
            Timestamp::from_seconds(event.0)
        }

        fn apply(&self, mut state: String, event: &Self::Event) -> Result<String, ()> {
            if event.1.is_empty() {
                return Err(());
            }
            state.push_str(event.1);
            Ok(state)
        }
    }

    #[test]
    fn test_rollup_orders_by_key() {
        let events = [(3, "c"), (1, "a"), (2, "b")];
        assert_eq!(Concat.rollup_all(&PlayerId::new("p"), &events), Ok("abc".to_string()));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let events = [(1, "x"), (1, "y"), (0, "w")];
        assert_eq!(Concat.rollup_all(&PlayerId::new("p"), &events), Ok("wxy".to_string()));
    }

    #[test]
    fn test_resume() {
        let state = Concat.rollup_all(&PlayerId::new("p"), &[(1, "a")]).unwrap();
        assert_eq!(Concat.resume(state, &[(2, "b")]), Ok("ab".to_string()));
    }

    /// Sums values and remembers the latest key.
    struct Tally;

    impl EventReducer for Tally {
        type State = (i64, Option<Timestamp>);
        type Event = (i64, i64);
        type Error = ();

        fn initial(&self, _player: &PlayerId) -> Self::State {
            (0, None)
        }

        fn ordering_key(&self, event: &Self::Event) -> Timestamp {
            Timestamp::from_seconds(event.0)
        }

        fn apply(&self, state: Self::State, event: &Self::Event) -> Result<Self::State, ()> {
            Ok((state.0 + event.1, Some(self.ordering_key(event))))
        }

        fn applied_through(&self, state: &Self::State) -> Option<Timestamp> {
            state.1
        }
    }

    #[test]
    fn test_resume_skips_folded_events() {
        let cached = Tally.rollup_all(&PlayerId::new("p"), &[(1, 1), (3, 10)]).unwrap();
        let resumed = Tally.resume(cached, &[(4, 100), (3, 10), (1, 1)]).unwrap();
        assert_eq!(resumed, (111, Some(Timestamp::from_seconds(4))));
    }

    #[test]
    fn test_history() {
        let history = Concat.rollup_history(&PlayerId::new("p"), &[(2, "b"), (1, "a")]).unwrap();
        assert_eq!(history, vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn test_error_stops_fold() {
        let events = [(1, "a"), (2, ""), (3, "c")];
        assert_eq!(Concat.rollup_all(&PlayerId::new("p"), &events), Err(()));
        assert_eq!(Concat.rollup_history(&PlayerId::new("p"), &events), Err(()));
    }
}
