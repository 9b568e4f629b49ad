//! Plain-text rendering of a household snapshot.
//!
//! Views only read. They take a borrowed [`HouseholdState`] (usually cloned
//! out of the store) and never hold on to it.

use std::fmt::Write;

use crate::money::Money;
use crate::summary::CostSummary;
use crate::types::HouseholdState;

/// Format an amount with the currency label and two decimals, e.g. `KES 80.00`
#[must_use]
pub fn format_amount(currency: &str, amount: Money) -> String {
    format!("{currency} {amount}")
}

/// `"1 person"`, `"3 people"`
#[must_use]
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// The people section: headcount plus one line per person, owner first
#[must_use]
pub fn render_people(state: &HouseholdState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} sharing costs",
        count_label(state.person_count(), "person", "people")
    );
    for (index, person) in state.people.iter().enumerate() {
        let badge = person.initial().unwrap_or('?');
        let owner = if index == 0 { " (Owner)" } else { "" };
        let _ = writeln!(out, "  [{badge}] {}{owner}", person.name);
    }
    out
}

/// The list section: progress, even split, then every item
#[must_use]
pub fn render_list(state: &HouseholdState, list_name: &str, currency: &str) -> String {
    let progress = state.progress();
    let summary = state.summary();

    let mut out = String::new();
    let _ = writeln!(out, "{list_name}");
    let _ = writeln!(
        out,
        "{} of {} items completed",
        progress.completed, progress.total
    );
    let _ = writeln!(
        out,
        "Split between {}: {} each",
        count_label(state.person_count(), "person", "people"),
        format_amount(currency, summary.cost_per_person)
    );

    if state.items.is_empty() {
        let _ = writeln!(out, "  No items in your shopping list yet.");
    }
    for item in &state.items {
        let check = if item.completed { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "  [{check}] {} - {} (added by {})",
            item.name,
            format_amount(currency, item.cost),
            item.added_by
        );
    }
    out
}

/// The cost summary section: the four totals and the per-person breakdown
#[must_use]
pub fn render_summary(summary: &CostSummary, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total:      {}", format_amount(currency, summary.total_cost));
    let _ = writeln!(out, "Completed:  {}", format_amount(currency, summary.completed_cost));
    let _ = writeln!(out, "Pending:    {}", format_amount(currency, summary.pending_cost));
    let _ = writeln!(out, "Per person: {}", format_amount(currency, summary.cost_per_person));

    for person in &summary.people {
        let _ = writeln!(
            out,
            "  {}: owes {} | added {} | bought {}",
            person.name,
            format_amount(currency, person.owes_amount),
            format_amount(currency, person.total_added),
            format_amount(currency, person.completed_added)
        );
    }
    out
}

/// All three sections, separated by blank lines
#[must_use]
pub fn render_household(state: &HouseholdState, list_name: &str, currency: &str) -> String {
    format!(
        "{}\n{}\n{}",
        render_people(state),
        render_list(state, list_name, currency),
        render_summary(&state.summary(), currency)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::Utc;

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount("KES", Money::from_units(400)), "KES 400.00");
        assert_eq!(format_amount("KES", Money::from_cents(13_333)), "KES 133.33");
        assert_eq!(format_amount("KES", Money::from_cents(-1_550)), "KES -15.50");
        assert_eq!(format_amount("USD", Money::ZERO), "USD 0.00");
    }

    #[test]
    fn pluralization() {
        assert_eq!(count_label(0, "person", "people"), "0 people");
        assert_eq!(count_label(1, "person", "people"), "1 person");
        assert_eq!(count_label(2, "item", "items"), "2 items");
    }

    #[test]
    fn people_section_marks_owner() {
        let text = render_people(&seed::household(Utc::now()));
        assert!(text.starts_with("2 people sharing costs\n"));
        assert!(text.contains("  [J] John Doe (Owner)\n"));
        assert!(text.contains("  [J] Jane Smith\n"));
        assert!(!text.contains("Jane Smith (Owner)"));
    }

    #[test]
    fn list_section() {
        let text = render_list(&seed::household(Utc::now()), "Weekly Grocery Shopping", "KES");
        assert!(text.contains("1 of 3 items completed"));
        assert!(text.contains("Split between 2 people: KES 200.00 each"));
        assert!(text.contains("  [x] Bread - KES 80.00 (added by Jane Smith)"));
        assert!(text.contains("  [ ] Eggs - KES 200.00 (added by John Doe)"));
    }

    #[test]
    fn empty_list_placeholder() {
        let text = render_list(&HouseholdState::new(), "Empty", "KES");
        assert!(text.contains("0 of 0 items completed"));
        assert!(text.contains("No items in your shopping list yet."));
        assert!(text.contains("KES 0.00 each"));
    }

    #[test]
    fn summary_section() {
        let state = seed::household(Utc::now());
        let text = render_summary(&state.summary(), "KES");
        assert!(text.contains("Total:      KES 400.00"));
        assert!(text.contains("Completed:  KES 80.00"));
        assert!(text.contains("Pending:    KES 320.00"));
        assert!(text.contains("Per person: KES 200.00"));
        assert!(text.contains("John Doe: owes KES 200.00 | added KES 320.00 | bought KES 0.00"));
        assert!(text.contains("Jane Smith: owes KES 200.00 | added KES 80.00 | bought KES 80.00"));
    }
}
