//! Change observers.
//!
//! A live view re-renders whenever the store processes an action. The
//! observer here only logs, which is enough for the demo binary.

use tokio::sync::broadcast::{self, error::RecvError};

use crate::types::HouseholdAction;

/// Log every action the store processes until the store goes away
///
/// A slow observer skips the actions it missed and keeps going. Returns the
/// number of actions logged.
pub async fn log_changes(mut changes: broadcast::Receiver<HouseholdAction>) -> usize {
    let mut seen = 0;
    loop {
        match changes.recv().await {
            Ok(action) => {
                seen += 1;
                tracing::info!(kind = action.kind(), "Household changed");
            },
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Change observer lagged, {} actions skipped", skipped);
            },
            Err(RecvError::Closed) => return seen,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{HouseholdEnvironment, HouseholdReducer, HouseholdState};
    use splitcart_runtime::Store;
    use splitcart_testing::{SequentialIdGenerator, test_clock};
    use std::sync::Arc;

    type HouseholdStore =
        Store<HouseholdState, HouseholdAction, HouseholdEnvironment, HouseholdReducer>;

    fn store_with_capacity(capacity: usize) -> HouseholdStore {
        Store::with_broadcast_capacity(
            HouseholdState::new(),
            HouseholdReducer::new(),
            HouseholdEnvironment::new(
                Arc::new(test_clock()),
                Arc::new(SequentialIdGenerator::new()),
            ),
            capacity,
        )
    }

    async fn add_people(store: &HouseholdStore, count: usize) {
        for n in 0..count {
            store
                .send(HouseholdAction::AddPerson {
                    name: format!("Person {n}"),
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn logs_until_the_store_is_dropped() {
        let store = store_with_capacity(16);
        let changes = store.subscribe_actions();

        add_people(&store, 3).await;
        drop(store);

        assert_eq!(log_changes(changes).await, 3);
    }

    #[tokio::test]
    async fn keeps_observing_after_falling_behind() {
        let store = store_with_capacity(2);
        let changes = store.subscribe_actions();

        // Five actions into a two-slot channel before the observer reads
        add_people(&store, 5).await;
        drop(store);

        assert_eq!(log_changes(changes).await, 2);
    }
}
