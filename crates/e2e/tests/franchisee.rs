//! Franchisee dashboard flows: scoped franchise data and by-id lookups.

use pizzasim_common::EntityId;
use pizzasim_e2e::fixtures;
use pizzasim_e2e::{PizzaClient, ScriptedPage};
use pizzasim_mock::{attach, MockOptions};

fn franchisee_options() -> MockOptions {
    MockOptions::new()
        .with_users(vec![fixtures::franchisee()])
        .with_franchises(fixtures::frankies_franchise())
}

#[tokio::test]
async fn franchisee_sees_their_stores_with_revenue() {
    let page = ScriptedPage::new();
    attach(&page, franchisee_options()).await.unwrap();

    let client = PizzaClient::new(&page);
    let auth = client.login("frankie@jwt.com", "a").unwrap();
    let scope = auth.user.roles[0].object_id.clone();
    assert_eq!(scope, Some(EntityId::Str("fran-abc".into())));

    let found = client.franchise_by_id("fran-abc").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Frankie's Pizza Palace");
    assert_eq!(found[0].stores[0].total_revenue, Some(55000.0));
    assert_eq!(found[0].stores[1].total_revenue, Some(82000.0));
}

#[tokio::test]
async fn missing_franchise_id_answers_empty_list_not_404() {
    let page = ScriptedPage::new();
    attach(&page, franchisee_options()).await.unwrap();

    let found = PizzaClient::new(&page).franchise_by_id("no-such-id").unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn collection_get_returns_wrapped_payload() {
    let page = ScriptedPage::new();
    attach(&page, franchisee_options()).await.unwrap();

    let listing = PizzaClient::new(&page).franchises().unwrap();
    assert_eq!(listing.franchises.len(), 1);
    assert_eq!(listing.franchises[0].stores.len(), 2);
}
