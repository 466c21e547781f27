//! Complete user flows used for smoke and load testing.
//!
//! `login_and_order` replays the classic flow: home page, login, browse the
//! menu, look at franchises, fetch the profile, submit an order, check the
//! receipt token. `run_load` runs it with concurrent virtual users, each
//! against its own freshly attached page.

use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use tracing::{debug, warn};

use pizzasim_common::{Order, OrderItem, OrderReceipt};
use pizzasim_mock::attach;

use crate::client::PizzaClient;
use crate::error::{E2eError, E2eResult};
use crate::fixtures;
use crate::page::ScriptedPage;

fn step_failed(step: &str, reason: impl ToString) -> E2eError {
    E2eError::Scenario { step: step.to_string(), reason: reason.to_string() }
}

/// One pass through the login-and-order flow.
pub fn login_and_order(page: &ScriptedPage, email: &str, password: &str) -> E2eResult<OrderReceipt> {
    let client = PizzaClient::new(page);

    let auth = client.login(email, password)?;
    if auth.token.is_empty() {
        return Err(step_failed("login", "empty token"));
    }

    let menu = client.menu()?;
    if menu.is_empty() {
        return Err(step_failed("menu", "no items to order"));
    }

    let franchises = client.franchises()?;
    let franchise = franchises
        .franchises
        .first()
        .ok_or_else(|| step_failed("franchises", "no franchises configured"))?;
    let store = franchise
        .stores
        .first()
        .ok_or_else(|| step_failed("franchises", "first franchise has no stores"))?;

    let me = client.me()?;
    if me.map(|u| u.email) != Some(email.to_string()) {
        return Err(step_failed("me", "profile does not match the login"));
    }

    let order = Order {
        items: menu
            .iter()
            .take(2)
            .map(|item| OrderItem {
                menu_id: item.id.clone(),
                description: item.title.clone(),
                price: item.price,
            })
            .collect(),
        store_id: Some(store.id.clone()),
        franchise_id: Some(franchise.id.clone()),
        ..Default::default()
    };

    let receipt = client.create_order(&order)?;
    if receipt.jwt.is_empty() {
        return Err(step_failed("order", "missing receipt token"));
    }
    if receipt.order.id.is_none() {
        return Err(step_failed("order", "order came back without an id"));
    }
    debug!(id = ?receipt.order.id, "order placed");
    Ok(receipt)
}

/// Outcome of a load run.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub completed: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

/// Run the login-and-order flow with `vus` concurrent virtual users,
/// `iterations` apiece. Every iteration gets a fresh page with freshly
/// attached mocks, so no state leaks between them.
pub async fn run_load(vus: usize, iterations: usize) -> E2eResult<LoadReport> {
    let start = Instant::now();
    let mut tasks: JoinSet<(usize, usize)> = JoinSet::new();

    for vu in 0..vus {
        tasks.spawn(async move {
            let mut completed = 0;
            let mut failed = 0;
            for iteration in 0..iterations {
                let page = ScriptedPage::new();
                let result = async {
                    attach(&page, fixtures::diner_options()).await?;
                    login_and_order(&page, "d@jwt.com", "a")
                }
                .await;
                match result {
                    Ok(_) => completed += 1,
                    Err(e) => {
                        warn!(vu, iteration, error = %e, "iteration failed");
                        failed += 1;
                    }
                }
            }
            (completed, failed)
        });
    }

    let mut completed = 0;
    let mut failed = 0;
    while let Some(joined) = tasks.join_next().await {
        let (ok, bad) = joined.map_err(|e| E2eError::Join(e.to_string()))?;
        completed += ok;
        failed += bad;
    }

    Ok(LoadReport { completed, failed, elapsed: start.elapsed() })
}
