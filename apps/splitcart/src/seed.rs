//! The starter household shown on first launch.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::money::Money;
use crate::types::{HouseholdState, Item, ItemId, Person, PersonId};

// High bits set so seeded ids never meet generator output in tests.
const SEED_ID_BASE: u128 = 0x5eed_u128 << 112;

fn seed_uuid(n: u128) -> Uuid {
    Uuid::from_u128(SEED_ID_BASE | n)
}

/// Two people and three groceries, one of them already bought
///
/// | item  | cost | added by   | completed |
/// |-------|------|------------|-----------|
/// | Milk  | 120  | John Doe   | no        |
/// | Bread | 80   | Jane Smith | yes       |
/// | Eggs  | 200  | John Doe   | no        |
#[must_use]
pub fn household(now: DateTime<Utc>) -> HouseholdState {
    let john = Person::new(PersonId::from_uuid(seed_uuid(1)), "John Doe".to_string(), now);
    let jane = Person::new(PersonId::from_uuid(seed_uuid(2)), "Jane Smith".to_string(), now);

    let item = |n: u128, name: &str, units: i64, added_by: &Person| {
        Item::new(
            ItemId::from_uuid(seed_uuid(n)),
            name.to_string(),
            Money::from_units(units),
            added_by.name.clone(),
            now,
        )
    };

    let milk = item(1, "Milk", 120, &john);
    let mut bread = item(2, "Bread", 80, &jane);
    bread.set_completed(true, now);
    let eggs = item(3, "Eggs", 200, &john);

    HouseholdState {
        people: vec![john, jane],
        items: vec![milk, bread, eggs],
        last_error: None,
    }
}
