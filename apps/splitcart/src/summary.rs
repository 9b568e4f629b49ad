//! Cost aggregation over the household's people and items.
//!
//! Everything here is a pure function of the two collections. Nothing is
//! cached: views call [`CostSummary::compute`] whenever they render.
//!
//! The split is always even. Every person owes `total / people` rounded to
//! the nearest cent, no matter who added or bought what. The per-person
//! `total_added` and `completed_added` figures are informational only. All
//! other amounts are exact sums of item costs.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Item, Person, PersonId};

/// One person's line in the cost breakdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCost {
    /// Person identifier
    pub id: PersonId,
    /// Display name
    pub name: String,
    /// Sum of costs of items this person added
    pub total_added: Money,
    /// Sum of costs of completed items this person added
    pub completed_added: Money,
    /// This person's share of the bill
    pub owes_amount: Money,
}

/// Totals and the even split for one snapshot of the household
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Sum of all item costs
    pub total_cost: Money,
    /// Sum of completed item costs
    pub completed_cost: Money,
    /// `total_cost - completed_cost`
    pub pending_cost: Money,
    /// `total_cost / people` to the nearest cent, or zero with nobody to
    /// split between
    pub cost_per_person: Money,
    /// Breakdown in household order
    pub people: Vec<PersonCost>,
}

impl CostSummary {
    /// Compute the summary from the current people and items
    #[must_use]
    pub fn compute(people: &[Person], items: &[Item]) -> Self {
        let total_cost = sum_costs(items.iter());
        let completed_cost = sum_costs(items.iter().filter(|i| i.completed));
        let pending_cost = total_cost - completed_cost;
        let cost_per_person = total_cost.split_evenly(people.len());

        let people = people
            .iter()
            .map(|person| {
                let added = || items.iter().filter(|i| i.added_by == person.name);
                PersonCost {
                    id: person.id,
                    name: person.name.clone(),
                    total_added: sum_costs(added()),
                    completed_added: sum_costs(added().filter(|i| i.completed)),
                    owes_amount: cost_per_person,
                }
            })
            .collect();

        Self {
            total_cost,
            completed_cost,
            pending_cost,
            cost_per_person,
            people,
        }
    }

    /// Breakdown line for one person
    #[must_use]
    pub fn for_person(&self, id: &PersonId) -> Option<&PersonCost> {
        self.people.iter().find(|p| &p.id == id)
    }
}

/// Completed vs total item counts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProgress {
    /// Items marked completed
    pub completed: usize,
    /// All items
    pub total: usize,
}

impl ListProgress {
    /// Count completed and total items
    #[must_use]
    pub fn of(items: &[Item]) -> Self {
        Self {
            completed: items.iter().filter(|i| i.completed).count(),
            total: items.len(),
        }
    }

    /// Whether every item has been bought (vacuously true for an empty list)
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.completed == self.total
    }
}

fn sum_costs<'a>(items: impl Iterator<Item = &'a Item>) -> Money {
    items.map(|i| i.cost).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ItemId;
    use chrono::Utc;

    fn person(name: &str) -> Person {
        Person::new(PersonId::new(), name.to_string(), Utc::now())
    }

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn item(cost: Money, completed: bool, added_by: &str) -> Item {
        let mut item = Item::new(
            ItemId::new(),
            "thing".to_string(),
            cost,
            added_by.to_string(),
            Utc::now(),
        );
        item.set_completed(completed, Utc::now());
        item
    }

    #[test]
    fn worked_example() {
        let people = vec![person("John Doe"), person("Jane Smith")];
        let items = vec![
            item(units(120), false, "John Doe"),
            item(units(80), true, "Jane Smith"),
            item(units(200), false, "John Doe"),
        ];

        let summary = CostSummary::compute(&people, &items);

        assert_eq!(summary.total_cost, units(400));
        assert_eq!(summary.completed_cost, units(80));
        assert_eq!(summary.pending_cost, units(320));
        assert_eq!(summary.cost_per_person, units(200));

        let john = summary.for_person(&people[0].id).unwrap();
        assert_eq!(john.total_added, units(320));
        assert_eq!(john.completed_added, Money::ZERO);
        assert_eq!(john.owes_amount, units(200));

        let jane = summary.for_person(&people[1].id).unwrap();
        assert_eq!(jane.total_added, units(80));
        assert_eq!(jane.completed_added, units(80));
        assert_eq!(jane.owes_amount, units(200));
    }

    #[test]
    fn nobody_to_split_between() {
        let items = vec![item(units(50), false, "Ghost")];
        let summary = CostSummary::compute(&[], &items);

        assert_eq!(summary.total_cost, units(50));
        assert_eq!(summary.cost_per_person, Money::ZERO);
        assert!(summary.people.is_empty());
    }

    #[test]
    fn empty_household() {
        let summary = CostSummary::compute(&[], &[]);
        assert_eq!(summary.total_cost, Money::ZERO);
        assert_eq!(summary.pending_cost, Money::ZERO);
        assert_eq!(summary.cost_per_person, Money::ZERO);
    }

    #[test]
    fn items_from_departed_people_still_count() {
        let people = vec![person("Ann")];
        let items = vec![item(units(30), false, "Ann"), item(units(90), true, "Bob")];

        let summary = CostSummary::compute(&people, &items);

        assert_eq!(summary.total_cost, units(120));
        assert_eq!(summary.cost_per_person, units(120));
        assert_eq!(summary.people[0].total_added, units(30));
    }

    #[test]
    fn duplicate_names_share_attribution() {
        let people = vec![person("Sam"), person("Sam")];
        let items = vec![item(units(10), true, "Sam")];

        let summary = CostSummary::compute(&people, &items);

        assert_eq!(summary.people[0].total_added, units(10));
        assert_eq!(summary.people[1].total_added, units(10));
        assert_eq!(summary.cost_per_person, units(5));
    }

    #[test]
    fn two_decimal_prices_add_up_exactly() {
        let people = vec![person("Ann"), person("Bob")];
        let items = vec![
            item(Money::from_cents(39_124), true, "Ann"),
            item(Money::from_cents(42_313), true, "Bob"),
            item(Money::from_cents(38_375), false, "Ann"),
            item(Money::from_cents(40_766), false, "Bob"),
            item(Money::from_cents(30_273), false, "Ann"),
        ];

        let summary = CostSummary::compute(&people, &items);

        assert_eq!(summary.total_cost, Money::from_cents(190_851));
        assert_eq!(summary.completed_cost, Money::from_cents(81_437));
        assert_eq!(summary.pending_cost, Money::from_cents(109_414));
        assert_eq!(
            summary.completed_cost + summary.pending_cost,
            summary.total_cost
        );

        let added: Money = summary.people.iter().map(|p| p.total_added).sum();
        assert_eq!(added, summary.total_cost);
    }

    #[test]
    fn uneven_split_rounds_to_the_cent() {
        let people = vec![person("A"), person("B"), person("C")];
        let items = vec![item(units(100), false, "A")];

        let summary = CostSummary::compute(&people, &items);

        assert_eq!(summary.cost_per_person, Money::from_cents(3_333));
        assert!(summary.people.iter().all(|p| p.owes_amount == summary.cost_per_person));
    }

    #[test]
    fn breakdown_keeps_household_order() {
        let people = vec![person("Zed"), person("Amy"), person("Moe")];
        let summary = CostSummary::compute(&people, &[]);
        let names: Vec<_> = summary.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Zed", "Amy", "Moe"]);
    }

    #[test]
    fn progress_counts() {
        let items = vec![item(units(1), true, "A"), item(units(2), false, "A")];
        let progress = ListProgress::of(&items);
        assert_eq!(progress, ListProgress { completed: 1, total: 2 });
        assert!(!progress.is_done());
        assert!(ListProgress::of(&[]).is_done());
    }
}
