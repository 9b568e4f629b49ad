//! SplitCart demo session.
//!
//! Starts a household (seeded unless `SPLITCART_SEED=false`), walks through
//! a typical shopping trip, and prints the household after each step. Pass
//! `--json` to print only the final cost summary as JSON. Logs always go to
//! stderr, so stdout stays parseable.

use std::time::Duration;

use splitcart::{
    Config, HouseholdAction, HouseholdEnvironment, HouseholdReducer, HouseholdState, cost,
    observer, seed, view,
};
use splitcart_core::environment::{Clock, SystemClock};
use splitcart_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;
    let json = std::env::args().any(|arg| arg == "--json");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let initial = if config.seed {
        seed::household(SystemClock.now())
    } else {
        HouseholdState::new()
    };
    let store = Store::new(
        initial,
        HouseholdReducer::new(),
        HouseholdEnvironment::production(),
    );

    // Log every change the way a live view would re-render on it
    let change_log = tokio::spawn(observer::log_changes(store.subscribe_actions()));

    if !json {
        print_household(&store, &config, "Starting household").await;
    }

    store
        .send(HouseholdAction::AddPerson {
            name: "Alex Kim".to_string(),
        })
        .await?;
    store
        .send(HouseholdAction::AddItem {
            name: "Rice".to_string(),
            cost: cost::parse_lenient("350.50"),
            added_by: Some("Alex Kim".to_string()),
        })
        .await?;
    if !json {
        print_household(&store, &config, "After Alex joins and adds rice").await;
    }

    let (milk, eggs) = store
        .state(|s| {
            (
                s.items.iter().find(|i| i.name == "Milk").map(|i| i.id),
                s.items.iter().find(|i| i.name == "Eggs").map(|i| i.id),
            )
        })
        .await;
    if let Some(id) = milk {
        store.send(HouseholdAction::ToggleItem { id }).await?;
    }
    if let Some(id) = eggs {
        store
            .send(HouseholdAction::UpdateItemCost {
                id,
                cost: cost::parse_lenient("180 (on offer)"),
            })
            .await?;
    }
    if json {
        let summary = store.state(HouseholdState::summary).await;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_household(&store, &config, "After buying milk and repricing eggs").await;
    }

    store.shutdown(Duration::from_secs(5)).await?;
    drop(store);
    let _ = change_log.await;
    Ok(())
}

async fn print_household(
    store: &Store<HouseholdState, HouseholdAction, HouseholdEnvironment, HouseholdReducer>,
    config: &Config,
    title: &str,
) {
    let snapshot = store.state(Clone::clone).await;
    println!("=== {title} ===\n");
    println!(
        "{}",
        view::render_household(&snapshot, &config.list_name, &config.currency)
    );
}
