//! Shared household shopping list with even cost splitting.
//!
//! A household adds groceries with prices, ticks them off as they are
//! bought, and sees what everyone owes. The bill is always split evenly
//! between everyone currently in the household.
//!
//! - [`types`]: people, items, state, and the action vocabulary
//! - [`reducer`]: turns commands into events and applies them
//! - [`summary`]: totals, pending amount and the even split
//! - [`money`]: exact amounts in cents
//! - [`cost`]: lenient parsing of typed-in prices
//! - [`view`]: plain-text rendering of a snapshot
//! - [`observer`]: logs every change the store processes
//!
//! # Quick Start
//!
//! ```no_run
//! use splitcart::{HouseholdAction, HouseholdEnvironment, HouseholdReducer, HouseholdState};
//! use splitcart_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(
//!     HouseholdState::new(),
//!     HouseholdReducer::new(),
//!     HouseholdEnvironment::production(),
//! );
//!
//! store.send(HouseholdAction::AddPerson { name: "Ann".to_string() }).await?;
//! store.send(HouseholdAction::AddItem {
//!     name: "Milk".to_string(),
//!     cost: splitcart::cost::parse_lenient("120"),
//!     added_by: None,
//! }).await?;
//!
//! let summary = store.state(HouseholdState::summary).await;
//! println!("Each person owes {}", summary.cost_per_person);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod cost;
pub mod money;
pub mod observer;
pub mod reducer;
pub mod seed;
pub mod summary;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use money::Money;
pub use reducer::{HouseholdEnvironment, HouseholdReducer};
pub use summary::{CostSummary, ListProgress, PersonCost};
pub use types::{HouseholdAction, HouseholdState, Item, ItemId, Person, PersonId};
