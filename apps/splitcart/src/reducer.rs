//! Reducer logic for the household.
//!
//! Commands are validated and turned into events; events are applied to
//! state. Commands that name a person or item that no longer exists are
//! ignored without recording an error.

use std::sync::Arc;

use splitcart_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator, SystemClock, UuidGenerator},
    reducer::Reducer,
};

use crate::types::{HouseholdAction, HouseholdState, Item, ItemId, Person, PersonId};

/// Environment dependencies for the household reducer
#[derive(Clone)]
pub struct HouseholdEnvironment {
    /// Clock for generating timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh person and item identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl HouseholdEnvironment {
    /// Creates a new `HouseholdEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System time and random UUIDs
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
    }
}

/// Reducer for the household
#[derive(Clone, Debug)]
pub struct HouseholdReducer;

impl HouseholdReducer {
    /// Creates a new `HouseholdReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Trims a display name, rejecting blank ones
    fn validate_name(kind: &str, name: &str) -> Result<String, String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(format!("{kind} name cannot be empty"));
        }
        Ok(trimmed.to_string())
    }

    /// Applies an event to state
    fn apply_event(state: &mut HouseholdState, action: &HouseholdAction) {
        match action {
            HouseholdAction::PersonAdded {
                id,
                name,
                joined_at,
            } => {
                if state.has_person(id) {
                    tracing::warn!(person_id = %id, "Ignoring PersonAdded with duplicate id");
                    return;
                }
                state
                    .people
                    .push(Person::new(*id, name.clone(), *joined_at));
                state.last_error = None;
            },
            HouseholdAction::PersonRemoved { id } => {
                state.people.retain(|p| &p.id != id);
                state.last_error = None;
            },
            HouseholdAction::ItemAdded {
                id,
                name,
                cost,
                added_by,
                added_at,
            } => {
                if state.has_item(id) {
                    tracing::warn!(item_id = %id, "Ignoring ItemAdded with duplicate id");
                    return;
                }
                state.items.push(Item::new(
                    *id,
                    name.clone(),
                    *cost,
                    added_by.clone(),
                    *added_at,
                ));
                state.last_error = None;
            },
            HouseholdAction::ItemToggled {
                id,
                completed,
                toggled_at,
            } => {
                if let Some(item) = state.item_mut(id) {
                    item.set_completed(*completed, *toggled_at);
                }
                state.last_error = None;
            },
            HouseholdAction::ItemDeleted { id } => {
                state.items.retain(|i| &i.id != id);
                state.last_error = None;
            },
            HouseholdAction::ItemCostUpdated { id, cost } => {
                if let Some(item) = state.item_mut(id) {
                    item.cost = *cost;
                }
                state.last_error = None;
            },
            HouseholdAction::ValidationFailed { error } => {
                state.last_error = Some(error.clone());
            },
            // Commands are not applied to state
            HouseholdAction::AddPerson { .. }
            | HouseholdAction::RemovePerson { .. }
            | HouseholdAction::AddItem { .. }
            | HouseholdAction::ToggleItem { .. }
            | HouseholdAction::DeleteItem { .. }
            | HouseholdAction::UpdateItemCost { .. } => {},
        }
    }

    fn reject(state: &mut HouseholdState, error: String) {
        tracing::warn!(%error, "Command rejected");
        Self::apply_event(state, &HouseholdAction::ValidationFailed { error });
    }

    fn ignore_missing_person(id: &PersonId) {
        tracing::debug!(person_id = %id, "No such person, ignoring");
    }

    fn ignore_missing_item(id: &ItemId) {
        tracing::debug!(item_id = %id, "No such item, ignoring");
    }
}

impl Default for HouseholdReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for HouseholdReducer {
    type State = HouseholdState;
    type Action = HouseholdAction;
    type Environment = HouseholdEnvironment;

    #[allow(clippy::too_many_lines)] // one arm per command, nothing to factor out
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            HouseholdAction::AddPerson { name } => {
                match Self::validate_name("Person", &name) {
                    Ok(name) => {
                        let event = HouseholdAction::PersonAdded {
                            id: PersonId::from_uuid(env.ids.next_id()),
                            name,
                            joined_at: env.clock.now(),
                        };
                        Self::apply_event(state, &event);
                    },
                    Err(error) => Self::reject(state, error),
                }
                SmallVec::new()
            },

            HouseholdAction::RemovePerson { id } => {
                if state.has_person(&id) {
                    Self::apply_event(state, &HouseholdAction::PersonRemoved { id });
                } else {
                    Self::ignore_missing_person(&id);
                }
                SmallVec::new()
            },

            HouseholdAction::AddItem {
                name,
                cost,
                added_by,
            } => {
                match Self::validate_name("Item", &name) {
                    Ok(name) => {
                        let event = HouseholdAction::ItemAdded {
                            id: ItemId::from_uuid(env.ids.next_id()),
                            name,
                            cost,
                            added_by: added_by.unwrap_or_else(|| state.default_adder()),
                            added_at: env.clock.now(),
                        };
                        Self::apply_event(state, &event);
                    },
                    Err(error) => Self::reject(state, error),
                }
                SmallVec::new()
            },

            HouseholdAction::ToggleItem { id } => {
                if let Some(item) = state.item(&id) {
                    let event = HouseholdAction::ItemToggled {
                        id,
                        completed: !item.completed,
                        toggled_at: env.clock.now(),
                    };
                    Self::apply_event(state, &event);
                } else {
                    Self::ignore_missing_item(&id);
                }
                SmallVec::new()
            },

            HouseholdAction::DeleteItem { id } => {
                if state.has_item(&id) {
                    Self::apply_event(state, &HouseholdAction::ItemDeleted { id });
                } else {
                    Self::ignore_missing_item(&id);
                }
                SmallVec::new()
            },

            HouseholdAction::UpdateItemCost { id, cost } => {
                if state.has_item(&id) {
                    let event = HouseholdAction::ItemCostUpdated { id, cost };
                    Self::apply_event(state, &event);
                } else {
                    Self::ignore_missing_item(&id);
                }
                SmallVec::new()
            },

            // ========== Events ==========
            HouseholdAction::PersonAdded { .. }
            | HouseholdAction::PersonRemoved { .. }
            | HouseholdAction::ItemAdded { .. }
            | HouseholdAction::ItemToggled { .. }
            | HouseholdAction::ItemDeleted { .. }
            | HouseholdAction::ItemCostUpdated { .. }
            | HouseholdAction::ValidationFailed { .. } => {
                // Replayed events go straight to state
                Self::apply_event(state, &action);
                SmallVec::new()
            },
        }
    }
}
