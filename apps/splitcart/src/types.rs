//! Domain types for the shared shopping list.
//!
//! A household is two insertion-ordered collections: the people sharing the
//! bill and the items on the list. Items remember the *name* of whoever
//! added them; that name is not kept in sync if the person later leaves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::summary::{CostSummary, ListProgress};

/// Adder recorded on items added while nobody is in the household
pub const FALLBACK_ADDER: &str = "User";

/// Unique identifier for a person in the household
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Creates a new random `PersonId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `PersonId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a shopping list item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a new random `ItemId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `ItemId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A household member sharing the bill
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,
    /// Display name (not required to be unique)
    pub name: String,
    /// When the person joined the household
    pub joined_at: DateTime<Utc>,
}

impl Person {
    /// Creates a new person
    #[must_use]
    pub const fn new(id: PersonId, name: String, joined_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            joined_at,
        }
    }

    /// Upper-cased first character of the name, for avatar badges
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// A single shopping list entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What to buy
    pub name: String,
    /// Price; expected non-negative but not enforced
    pub cost: Money,
    /// Whether the item has been bought
    pub completed: bool,
    /// Name of the person who added the item, as it was at the time
    pub added_by: String,
    /// When the item was added
    pub added_at: DateTime<Utc>,
    /// When the item was last marked completed (if completed)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Creates a new, not yet completed item
    #[must_use]
    pub const fn new(
        id: ItemId,
        name: String,
        cost: Money,
        added_by: String,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            cost,
            completed: false,
            added_by,
            added_at,
            completed_at: None,
        }
    }

    /// Sets the completion flag, stamping or clearing `completed_at`
    pub fn set_completed(&mut self, completed: bool, at: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = completed.then_some(at);
    }
}

/// State of the household: who shares the bill and what is on the list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdState {
    /// People in the order they joined
    pub people: Vec<Person>,
    /// Items in the order they were added
    pub items: Vec<Item>,
    /// Last validation error (if any)
    pub last_error: Option<String>,
}

impl HouseholdState {
    /// Creates an empty household
    #[must_use]
    pub const fn new() -> Self {
        Self {
            people: Vec::new(),
            items: Vec::new(),
            last_error: None,
        }
    }

    /// Returns a person by ID
    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Returns an item by ID
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Mutable access to an item by ID
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| &i.id == id)
    }

    /// Checks if a person exists
    #[must_use]
    pub fn has_person(&self, id: &PersonId) -> bool {
        self.person(id).is_some()
    }

    /// Checks if an item exists
    #[must_use]
    pub fn has_item(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    /// Returns the number of people
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the number of items
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of completed items
    #[must_use]
    pub fn completed_item_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    /// The household owner: whoever joined first
    #[must_use]
    pub fn owner(&self) -> Option<&Person> {
        self.people.first()
    }

    /// Name recorded on items added without an explicit adder
    #[must_use]
    pub fn default_adder(&self) -> String {
        self.owner()
            .map_or_else(|| FALLBACK_ADDER.to_string(), |p| p.name.clone())
    }

    /// Totals and the even split, recomputed from the current collections
    #[must_use]
    pub fn summary(&self) -> CostSummary {
        CostSummary::compute(&self.people, &self.items)
    }

    /// How much of the list has been bought
    #[must_use]
    pub fn progress(&self) -> ListProgress {
        ListProgress::of(&self.items)
    }
}

/// Actions representing commands and events for the household
///
/// Commands express intent and may be rejected or ignored by the reducer.
/// Events record what happened and are applied to state unconditionally
/// (subject to id uniqueness), so a sequence of events can be replayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseholdAction {
    // ========== Commands ==========
    /// Command: Add a person to the household
    AddPerson {
        /// Display name; trimmed, must not be blank
        name: String,
    },

    /// Command: Remove a person from the household
    RemovePerson {
        /// Person to remove
        id: PersonId,
    },

    /// Command: Put a new item on the list
    AddItem {
        /// What to buy; trimmed, must not be blank
        name: String,
        /// Price, usually from [`crate::cost::parse_lenient`]
        cost: Money,
        /// Adder name; defaults to the household owner
        added_by: Option<String>,
    },

    /// Command: Flip an item's completion flag
    ToggleItem {
        /// Item to toggle
        id: ItemId,
    },

    /// Command: Remove an item from the list
    DeleteItem {
        /// Item to delete
        id: ItemId,
    },

    /// Command: Change an item's price
    UpdateItemCost {
        /// Item to update
        id: ItemId,
        /// New price
        cost: Money,
    },

    // ========== Events ==========
    /// Event: Person joined
    PersonAdded {
        /// Person identifier
        id: PersonId,
        /// Display name
        name: String,
        /// When the person joined
        joined_at: DateTime<Utc>,
    },

    /// Event: Person left
    PersonRemoved {
        /// Person identifier
        id: PersonId,
    },

    /// Event: Item was added to the list
    ItemAdded {
        /// Item identifier
        id: ItemId,
        /// What to buy
        name: String,
        /// Price
        cost: Money,
        /// Adder name
        added_by: String,
        /// When the item was added
        added_at: DateTime<Utc>,
    },

    /// Event: Item completion flag changed
    ItemToggled {
        /// Item identifier
        id: ItemId,
        /// The flag after the toggle
        completed: bool,
        /// When the toggle happened
        toggled_at: DateTime<Utc>,
    },

    /// Event: Item was removed from the list
    ItemDeleted {
        /// Item identifier
        id: ItemId,
    },

    /// Event: Item price changed
    ItemCostUpdated {
        /// Item identifier
        id: ItemId,
        /// New price
        cost: Money,
    },

    /// Event: Command validation failed
    ValidationFailed {
        /// Error message
        error: String,
    },
}

impl HouseholdAction {
    /// Returns `true` for commands
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(
            self,
            Self::AddPerson { .. }
                | Self::RemovePerson { .. }
                | Self::AddItem { .. }
                | Self::ToggleItem { .. }
                | Self::DeleteItem { .. }
                | Self::UpdateItemCost { .. }
        )
    }

    /// Returns `true` for events
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }

    /// Short name of the variant, for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddPerson { .. } => "add_person",
            Self::RemovePerson { .. } => "remove_person",
            Self::AddItem { .. } => "add_item",
            Self::ToggleItem { .. } => "toggle_item",
            Self::DeleteItem { .. } => "delete_item",
            Self::UpdateItemCost { .. } => "update_item_cost",
            Self::PersonAdded { .. } => "person_added",
            Self::PersonRemoved { .. } => "person_removed",
            Self::ItemAdded { .. } => "item_added",
            Self::ItemToggled { .. } => "item_toggled",
            Self::ItemDeleted { .. } => "item_deleted",
            Self::ItemCostUpdated { .. } => "item_cost_updated",
            Self::ValidationFailed { .. } => "validation_failed",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person::new(PersonId::new(), name.to_string(), Utc::now())
    }

    fn item(name: &str, units: i64, added_by: &str) -> Item {
        Item::new(
            ItemId::new(),
            name.to_string(),
            Money::from_units(units),
            added_by.to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn person_id_display() {
        let id = PersonId::from_uuid(Uuid::from_u128(7));
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000007");
    }

    #[test]
    fn item_new_is_pending() {
        let item = item("Milk", 120, "John Doe");
        assert!(!item.completed);
        assert_eq!(item.completed_at, None);
    }

    #[test]
    fn set_completed_stamps_and_clears() {
        let mut item = item("Bread", 80, "Jane Smith");
        let now = Utc::now();

        item.set_completed(true, now);
        assert!(item.completed);
        assert_eq!(item.completed_at, Some(now));

        item.set_completed(false, now);
        assert!(!item.completed);
        assert_eq!(item.completed_at, None);
    }

    #[test]
    fn person_initial_is_uppercase() {
        assert_eq!(person("jane").initial(), Some('J'));
        assert_eq!(person("").initial(), None);
    }

    #[test]
    fn owner_and_default_adder() {
        let mut state = HouseholdState::new();
        assert!(state.owner().is_none());
        assert_eq!(state.default_adder(), FALLBACK_ADDER);

        state.people.push(person("John Doe"));
        state.people.push(person("Jane Smith"));
        assert_eq!(state.owner().unwrap().name, "John Doe");
        assert_eq!(state.default_adder(), "John Doe");
    }

    #[test]
    fn counts() {
        let mut state = HouseholdState::new();
        state.items.push(item("Milk", 120, "John Doe"));
        let mut bread = item("Bread", 80, "Jane Smith");
        bread.set_completed(true, Utc::now());
        state.items.push(bread);

        assert_eq!(state.item_count(), 2);
        assert_eq!(state.completed_item_count(), 1);
        assert_eq!(state.person_count(), 0);
    }

    #[test]
    fn lookups_by_id() {
        let mut state = HouseholdState::new();
        let ann = person("Ann");
        let ann_id = ann.id;
        state.people.push(ann);

        assert!(state.has_person(&ann_id));
        assert!(!state.has_person(&PersonId::new()));
        assert!(!state.has_item(&ItemId::new()));
    }

    #[test]
    fn action_classification() {
        let command = HouseholdAction::ToggleItem { id: ItemId::new() };
        assert!(command.is_command());
        assert!(!command.is_event());

        let event = HouseholdAction::ItemDeleted { id: ItemId::new() };
        assert!(event.is_event());
        assert_eq!(event.kind(), "item_deleted");
    }

    #[test]
    fn state_serializes_to_json() {
        let mut state = HouseholdState::new();
        state.people.push(person("Ann"));
        let json = serde_json::to_string(&state).unwrap();
        let back: HouseholdState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
