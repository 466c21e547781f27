//! Registration, profile update, and logout flows.

use pizzasim_common::{User, UserPatch};
use pizzasim_e2e::fixtures;
use pizzasim_e2e::{PizzaClient, ScriptedPage};
use pizzasim_mock::{attach, MockOptions};

use rand::Rng;

#[tokio::test]
async fn register_then_edit_then_relogin() {
    let page = ScriptedPage::new();
    attach(&page, MockOptions::new()).await.unwrap();

    let email = format!("user{}@jwt.com", rand::thread_rng().gen_range(0..10_000));
    let client = PizzaClient::new(&page);

    let auth = client
        .register(&User {
            name: Some("pizza diner".into()),
            email: email.clone(),
            password: Some("diner".into()),
            ..Default::default()
        })
        .unwrap();
    let id = auth.user.id.clone().expect("registration assigns an id");
    assert_eq!(client.me().unwrap().map(|u| u.email), Some(email.clone()));

    // Update the display name; the empty password must not wipe the real one.
    let updated = client
        .update_user(
            &id,
            &UserPatch {
                id: Some(id.clone()),
                name: Some("pizza dinerx".into()),
                email: Some(email.clone()),
                password: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.user.name.as_deref(), Some("pizza dinerx"));

    client.logout().unwrap();
    assert!(client.me().unwrap().is_none());

    // Relogin with the original password sees the updated name.
    let auth = client.login(&email, "diner").unwrap();
    assert_eq!(auth.user.name.as_deref(), Some("pizza dinerx"));
}

#[tokio::test]
async fn update_with_new_password_replaces_the_old_one() {
    let page = ScriptedPage::new();
    attach(&page, MockOptions::new().with_users(vec![fixtures::diner()])).await.unwrap();

    let client = PizzaClient::new(&page);
    client.login("d@jwt.com", "a").unwrap();

    client
        .update_user(
            "3",
            &UserPatch { password: Some("brand-new".into()), ..Default::default() },
        )
        .unwrap();

    client.logout().unwrap();
    assert_eq!(client.login_raw("d@jwt.com", "a").unwrap().status.as_u16(), 401);
    assert!(client.login("d@jwt.com", "brand-new").is_ok());
}

#[tokio::test]
async fn every_auth_success_mints_a_fresh_token() {
    let page = ScriptedPage::new();
    attach(&page, MockOptions::new().with_users(vec![fixtures::diner()])).await.unwrap();

    let client = PizzaClient::new(&page);
    let first = client.login("d@jwt.com", "a").unwrap().token;
    let second = client.login("d@jwt.com", "a").unwrap().token;
    assert_ne!(first, second);

    let third = client
        .update_user("3", &UserPatch { name: Some("Kai C.".into()), ..Default::default() })
        .unwrap()
        .token;
    assert_ne!(second, third);
}

#[tokio::test]
async fn admin_and_franchisee_can_edit_their_profiles() {
    for (user, password) in [(fixtures::admin(), "admin"), (fixtures::franchisee(), "a")] {
        let page = ScriptedPage::new();
        let email = user.email.clone();
        let id = user.id.clone().unwrap();
        attach(&page, MockOptions::new().with_users(vec![user])).await.unwrap();

        let client = PizzaClient::new(&page);
        client.login(&email, password).unwrap();

        let updated = client
            .update_user(
                &id,
                &UserPatch { name: Some("Updated Person".into()), ..Default::default() },
            )
            .unwrap();
        assert_eq!(updated.user.name.as_deref(), Some("Updated Person"));
        // Role assignments survive a profile edit untouched.
        assert!(!updated.user.roles.is_empty());
    }
}

#[tokio::test]
async fn simulated_account_deletion_is_acknowledged() {
    let page = ScriptedPage::new();
    attach(&page, MockOptions::new().with_users(vec![fixtures::diner()])).await.unwrap();

    let client = PizzaClient::new(&page);
    client.login("d@jwt.com", "a").unwrap();

    let resp = client.delete_user_raw("3").unwrap();
    assert_eq!(resp.status.as_u16(), 200);

    // No registry removal: the user can still log in afterwards.
    assert!(client.login("d@jwt.com", "a").is_ok());
}
