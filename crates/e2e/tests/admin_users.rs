//! Admin dashboard flows: user list filtering and paging.

use pizzasim_common::User;
use pizzasim_e2e::fixtures;
use pizzasim_e2e::{E2eError, PizzaClient, ScriptedPage};
use pizzasim_mock::{attach, MockOptions, UserListFixture};

use http::Method;
use serde_json::json;

fn named(name: &str, email: &str) -> User {
    User { name: Some(name.into()), email: email.into(), ..Default::default() }
}

fn roster() -> Vec<User> {
    vec![
        named("Alice Wonderland", "alice@jwt.com"),
        named("Bob Builder", "bob@jwt.com"),
        named("Carol", "carol@jwt.com"),
    ]
}

#[tokio::test]
async fn admin_can_filter_users_by_name() {
    let page = ScriptedPage::new();
    let options = MockOptions::new()
        .with_users(vec![fixtures::admin()])
        .with_users_list(roster());
    attach(&page, options).await.unwrap();

    let client = PizzaClient::new(&page);
    client.login("a@jwt.com", "admin").unwrap();

    let all = client.list_users(None, None).unwrap();
    assert_eq!(all.users.len(), 3);

    let filtered = client.list_users(Some("Alice"), None).unwrap();
    assert_eq!(filtered.users.len(), 1);
    assert_eq!(filtered.users[0].name.as_deref(), Some("Alice Wonderland"));

    // The filter arrives wildcard-wrapped and matches case-insensitively.
    let lower = client.list_users(Some("alice"), None).unwrap();
    assert_eq!(lower.users.len(), 1);
}

#[tokio::test]
async fn admin_can_paginate_users() {
    let page = ScriptedPage::new();
    let options = MockOptions::new()
        .with_users(vec![fixtures::admin()])
        .with_users_list(UserListFixture::paged(vec![
            vec![named("Page0 User", "p0@jwt")],
            vec![named("Page1 User", "p1@jwt")],
        ]));
    attach(&page, options).await.unwrap();

    let client = PizzaClient::new(&page);
    client.login("a@jwt.com", "admin").unwrap();

    let first = client.list_users(None, Some(0)).unwrap();
    assert_eq!(first.users[0].name.as_deref(), Some("Page0 User"));
    assert!(first.more);

    let second = client.list_users(None, Some(1)).unwrap();
    assert_eq!(second.users[0].name.as_deref(), Some("Page1 User"));
    assert!(!second.more);

    let past_the_end = client.list_users(None, Some(5)).unwrap();
    assert!(past_the_end.users.is_empty());
    assert!(!past_the_end.more);
}

#[tokio::test]
async fn non_get_on_the_user_collection_is_unrouted() {
    let page = ScriptedPage::new();
    let options = MockOptions::new()
        .with_users(vec![fixtures::admin()])
        .with_users_list(roster());
    attach(&page, options).await.unwrap();

    match page.fetch(Method::POST, "/api/user", Some(json!({}))) {
        Err(E2eError::Unrouted { .. }) => {}
        other => panic!("expected an unrouted call, got {other:?}"),
    }
}
