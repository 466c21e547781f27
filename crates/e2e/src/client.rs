//! A browser-side API client mirroring the pizza app's service layer.
//!
//! Every call goes through the scripted page's network stack, so the mock
//! backend sees exactly the traffic the real UI would produce. Successful
//! auth calls persist the token under the same storage key the app uses.

use http::Method;
use serde_json::json;

use pizzasim_common::{
    ApiDocs, AuthResponse, Franchise, FranchiseListResponse, MenuItem, Order, OrderHistory,
    OrderReceipt, User, UserListResponse, UserPatch,
};
use pizzasim_mock::TOKEN_STORAGE_KEY;

use crate::error::E2eResult;
use crate::page::{Fetched, ScriptedPage};

pub struct PizzaClient<'a> {
    page: &'a ScriptedPage,
}

impl<'a> PizzaClient<'a> {
    pub fn new(page: &'a ScriptedPage) -> Self {
        Self { page }
    }

    /// Raw login call; lets tests assert on 401 outcomes.
    pub fn login_raw(&self, email: &str, password: &str) -> E2eResult<Fetched> {
        self.page.fetch(
            Method::PUT,
            "/api/auth",
            Some(json!({"email": email, "password": password})),
        )
    }

    /// Login and persist the minted token the way the app would.
    pub fn login(&self, email: &str, password: &str) -> E2eResult<AuthResponse> {
        let auth: AuthResponse = self
            .login_raw(email, password)?
            .expect_ok("login")?
            .json()?;
        self.page.set_storage(TOKEN_STORAGE_KEY, &auth.token);
        Ok(auth)
    }

    pub fn register(&self, user: &User) -> E2eResult<AuthResponse> {
        let auth: AuthResponse = self
            .page
            .fetch(Method::POST, "/api/auth", Some(serde_json::to_value(user)?))?
            .expect_ok("register")?
            .json()?;
        self.page.set_storage(TOKEN_STORAGE_KEY, &auth.token);
        Ok(auth)
    }

    pub fn logout(&self) -> E2eResult<()> {
        self.page
            .fetch(Method::DELETE, "/api/auth", None)?
            .expect_ok("logout")?;
        self.page.remove_storage(TOKEN_STORAGE_KEY);
        Ok(())
    }

    /// The current principal, or `None` when nobody is logged in.
    pub fn me(&self) -> E2eResult<Option<User>> {
        self.page
            .fetch(Method::GET, "/api/user/me", None)?
            .expect_ok("me")?
            .json()
    }

    pub fn update_user(&self, id: &str, patch: &UserPatch) -> E2eResult<AuthResponse> {
        let auth: AuthResponse = self
            .page
            .fetch(
                Method::PUT,
                &format!("/api/user/{id}"),
                Some(serde_json::to_value(patch)?),
            )?
            .expect_ok("update user")?
            .json()?;
        self.page.set_storage(TOKEN_STORAGE_KEY, &auth.token);
        Ok(auth)
    }

    pub fn delete_user_raw(&self, id: &str) -> E2eResult<Fetched> {
        self.page.fetch(Method::DELETE, &format!("/api/user/{id}"), None)
    }

    /// List users, wildcard-wrapping the name filter the way the admin
    /// dashboard does.
    pub fn list_users(&self, name: Option<&str>, page: Option<usize>) -> E2eResult<UserListResponse> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(format!("name=*{name}*"));
        }
        if let Some(page) = page {
            query.push(format!("page={page}"));
        }
        let path = if query.is_empty() {
            "/api/user".to_string()
        } else {
            format!("/api/user?{}", query.join("&"))
        };
        self.page
            .fetch(Method::GET, &path, None)?
            .expect_ok("list users")?
            .json()
    }

    pub fn menu(&self) -> E2eResult<Vec<MenuItem>> {
        self.page
            .fetch(Method::GET, "/api/order/menu", None)?
            .expect_ok("menu")?
            .json()
    }

    pub fn order_history(&self) -> E2eResult<OrderHistory> {
        self.page
            .fetch(Method::GET, "/api/order", None)?
            .expect_ok("order history")?
            .json()
    }

    pub fn create_order(&self, order: &Order) -> E2eResult<OrderReceipt> {
        self.page
            .fetch(Method::POST, "/api/order", Some(serde_json::to_value(order)?))?
            .expect_ok("create order")?
            .json()
    }

    pub fn franchises(&self) -> E2eResult<FranchiseListResponse> {
        self.page
            .fetch(Method::GET, "/api/franchise", None)?
            .expect_ok("franchises")?
            .json()
    }

    /// By-id lookup; the service answers with `[found]` or `[]`.
    pub fn franchise_by_id(&self, id: &str) -> E2eResult<Vec<Franchise>> {
        self.page
            .fetch(Method::GET, &format!("/api/franchise/{id}"), None)?
            .expect_ok("franchise by id")?
            .json()
    }

    pub fn docs(&self) -> E2eResult<ApiDocs> {
        self.page
            .fetch(Method::GET, "/api/docs", None)?
            .expect_ok("docs")?
            .json()
    }
}
