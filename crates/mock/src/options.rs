//! Per-test configuration: which resources get an interception handler and
//! the fixture data each one serves.
//!
//! Every field is independently optional. Absence means "do not install a
//! handler for that resource" and the corresponding calls pass through
//! unanswered. The auth, current-user and update-user handlers are always
//! installed; `users` only seeds their registry.

use serde::{Deserialize, Serialize};

use pizzasim_common::{
    ApiDocs, Franchise, FranchiseListResponse, MenuItem, Order, OrderHistory, User,
    UserListResponse,
};

/// Configuration handed to [`attach`](crate::attach) for one test.
#[derive(Debug, Clone, Default)]
pub struct MockOptions {
    /// Seed users for the registry backing auth and profile updates.
    pub users: Option<Vec<User>>,
    /// Franchise data; installs the franchises handler.
    pub franchises: Option<FranchiseFixture>,
    /// Menu items; installs the menu handler.
    pub menu: Option<Vec<MenuItem>>,
    /// Order history; installs the orders handler (GET history, POST create).
    pub orders: Option<OrderFixture>,
    /// API documentation payload; installs the docs handler.
    pub docs: Option<ApiDocs>,
    /// Canned user list pages; installs the list-users handler.
    pub users_list: Option<UserListFixture>,
}

impl MockOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_franchises(mut self, fixture: impl Into<FranchiseFixture>) -> Self {
        self.franchises = Some(fixture.into());
        self
    }

    pub fn with_menu(mut self, menu: Vec<MenuItem>) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn with_orders(mut self, fixture: impl Into<OrderFixture>) -> Self {
        self.orders = Some(fixture.into());
        self
    }

    pub fn with_docs(mut self, docs: ApiDocs) -> Self {
        self.docs = Some(docs);
        self
    }

    pub fn with_users_list(mut self, fixture: impl Into<UserListFixture>) -> Self {
        self.users_list = Some(fixture.into());
        self
    }
}

/// Franchise fixture data, accepted either as a bare list or already wrapped
/// in the `{franchises: [...]}` response shape. Normalized to the wrapped
/// form before serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FranchiseFixture {
    Wrapped(FranchiseListResponse),
    Bare(Vec<Franchise>),
}

impl FranchiseFixture {
    pub fn franchises(&self) -> &[Franchise] {
        match self {
            FranchiseFixture::Wrapped(resp) => &resp.franchises,
            FranchiseFixture::Bare(list) => list,
        }
    }

    /// The normalized collection response.
    pub fn to_response(&self) -> FranchiseListResponse {
        FranchiseListResponse { franchises: self.franchises().to_vec() }
    }
}

impl From<Vec<Franchise>> for FranchiseFixture {
    fn from(list: Vec<Franchise>) -> Self {
        FranchiseFixture::Bare(list)
    }
}

impl From<FranchiseListResponse> for FranchiseFixture {
    fn from(resp: FranchiseListResponse) -> Self {
        FranchiseFixture::Wrapped(resp)
    }
}

/// Order history fixture, bare list or wrapped `{orders: [...]}` shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderFixture {
    Wrapped(OrderHistory),
    Bare(Vec<Order>),
}

impl OrderFixture {
    pub fn orders(&self) -> &[Order] {
        match self {
            OrderFixture::Wrapped(history) => &history.orders,
            OrderFixture::Bare(list) => list,
        }
    }

    /// The normalized history response.
    pub fn to_response(&self) -> OrderHistory {
        OrderHistory { orders: self.orders().to_vec() }
    }
}

impl From<Vec<Order>> for OrderFixture {
    fn from(list: Vec<Order>) -> Self {
        OrderFixture::Bare(list)
    }
}

impl From<OrderHistory> for OrderFixture {
    fn from(history: OrderHistory) -> Self {
        OrderFixture::Wrapped(history)
    }
}

/// Canned pages for the user list resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListFixture {
    pub pages: Vec<Vec<User>>,
}

impl UserListFixture {
    pub fn single_page(users: Vec<User>) -> Self {
        Self { pages: vec![users] }
    }

    pub fn paged(pages: Vec<Vec<User>>) -> Self {
        Self { pages }
    }

    /// Resolve one canned page with the name filter applied.
    ///
    /// The filter arrives wildcard-wrapped (e.g. `*Alice*`); literal `*`
    /// characters are stripped and the remainder matched case-insensitively
    /// against display names. `more` reports whether later pages exist; an
    /// out-of-range index yields an empty page with `more == false`.
    pub fn resolve(&self, page: usize, name_filter: Option<&str>) -> UserListResponse {
        let mut users = self.pages.get(page).cloned().unwrap_or_default();
        if let Some(raw) = name_filter {
            let needle = raw.replace('*', "").to_lowercase();
            users.retain(|u| {
                u.name
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle)
            });
        }
        let more = page + 1 < self.pages.len();
        UserListResponse { users, more }
    }
}

impl From<Vec<User>> for UserListFixture {
    fn from(users: Vec<User>) -> Self {
        Self::single_page(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: &str, email: &str) -> User {
        User {
            name: Some(name.into()),
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn franchise_fixture_accepts_both_shapes() {
        let bare: FranchiseFixture =
            serde_json::from_value(json!([{"id": 2, "name": "LotaPizza", "stores": []}])).unwrap();
        let wrapped: FranchiseFixture = serde_json::from_value(
            json!({"franchises": [{"id": 2, "name": "LotaPizza", "stores": []}]}),
        )
        .unwrap();
        assert_eq!(bare.to_response(), wrapped.to_response());
        assert_eq!(bare.franchises().len(), 1);
    }

    #[test]
    fn order_fixture_normalizes_to_wrapped() {
        let fixture = OrderFixture::from(Vec::new());
        let value = serde_json::to_value(fixture.to_response()).unwrap();
        assert_eq!(value, json!({"orders": []}));
    }

    #[test]
    fn name_filter_is_case_insensitive_and_strips_wildcards() {
        let fixture = UserListFixture::single_page(vec![
            named("Alice Wonderland", "alice@jwt.com"),
            named("Bob Builder", "bob@jwt.com"),
            named("Carol", "carol@jwt.com"),
        ]);

        let all = fixture.resolve(0, None);
        assert_eq!(all.users.len(), 3);
        assert!(!all.more);

        let filtered = fixture.resolve(0, Some("*Alice*"));
        assert_eq!(filtered.users.len(), 1);
        assert_eq!(filtered.users[0].name.as_deref(), Some("Alice Wonderland"));

        let lower = fixture.resolve(0, Some("*alice*"));
        assert_eq!(lower.users.len(), 1);
    }

    #[test]
    fn paging_reports_remaining_pages() {
        let fixture = UserListFixture::paged(vec![
            vec![named("Page0 User", "p0@jwt")],
            vec![named("Page1 User", "p1@jwt")],
        ]);
        assert!(fixture.resolve(0, None).more);
        assert!(!fixture.resolve(1, None).more);

        let out_of_range = fixture.resolve(5, None);
        assert!(out_of_range.users.is_empty());
        assert!(!out_of_range.more);
    }
}
