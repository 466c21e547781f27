//! Wire types for the pizza-shop service API.
//!
//! These are the JSON shapes the UI under test exchanges with its backend.
//! Field names follow the service's camelCase wire format (`objectId`,
//! `totalRevenue`, `menuId`, `requiresAuth`); role kinds are lowercase
//! strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of role a principal holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Diner,
    Franchisee,
    Admin,
}

/// An id that fixture data may carry either as a JSON number or a string.
///
/// URL path segments are always text, so matching renders both forms to the
/// segment's textual representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Num(i64),
    Str(String),
}

impl EntityId {
    /// Compare against the textual form found in a URL path segment.
    pub fn matches_segment(&self, segment: &str) -> bool {
        match self {
            EntityId::Num(n) => n.to_string() == segment,
            EntityId::Str(s) => s == segment,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Num(n) => write!(f, "{}", n),
            EntityId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Num(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Str(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId::Str(s)
    }
}

/// A role assignment, optionally scoped to an object such as a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role: RoleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<EntityId>,
}

impl RoleAssignment {
    pub fn diner() -> Self {
        Self { role: RoleKind::Diner, object_id: None }
    }

    pub fn admin() -> Self {
        Self { role: RoleKind::Admin, object_id: None }
    }

    pub fn franchisee(franchise_id: impl Into<EntityId>) -> Self {
        Self { role: RoleKind::Franchisee, object_id: Some(franchise_id.into()) }
    }
}

/// A user record in the simulated principal store.
///
/// The password is plaintext: this is a principal store for tests, not a
/// security implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            email: String::new(),
            password: None,
            roles: Vec::new(),
        }
    }
}

impl User {
    pub fn has_role(&self, kind: RoleKind) -> bool {
        self.roles.iter().any(|r| r.role == kind || r.role == RoleKind::Admin)
    }

    /// Overlay a partial update onto this record.
    ///
    /// An absent or empty password in the patch keeps the stored one; every
    /// other provided field replaces the existing value.
    pub fn merged_with(&self, patch: &UserPatch) -> User {
        let mut out = self.clone();
        if let Some(id) = &patch.id {
            out.id = Some(id.clone());
        }
        if let Some(name) = &patch.name {
            out.name = Some(name.clone());
        }
        if let Some(email) = &patch.email {
            out.email = email.clone();
        }
        if let Some(password) = &patch.password {
            if !password.is_empty() {
                out.password = Some(password.clone());
            }
        }
        if let Some(roles) = &patch.roles {
            out.roles = roles.clone();
        }
        out
    }
}

/// A partial user shape, as submitted by the profile edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleAssignment>>,
}

/// A franchise with its stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub stores: Vec<Store>,
}

/// A store belonging to a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
}

/// An item on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: EntityId,
    pub title: String,
    pub image: String,
    pub price: f64,
    pub description: String,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id: EntityId,
    pub description: String,
    pub price: f64,
}

/// An order, submitted or historical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub franchise_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// One documented API endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEndpoint {
    pub requires_auth: bool,
    pub method: String,
    pub path: String,
    pub description: String,
    pub example: String,
    pub response: serde_json::Value,
}

/// The API documentation payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDocs {
    pub endpoints: Vec<DocEndpoint>,
}

// ============================================================================
// Request/Response shapes
// ============================================================================

/// Login request body (`PUT /api/auth`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login, registration, or profile update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Error payload for rejected calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Paged user list (`GET /api/user`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub more: bool,
}

/// Wrapped franchise collection (`GET /api/franchise`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FranchiseListResponse {
    pub franchises: Vec<Franchise>,
}

/// Wrapped order history (`GET /api/order`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    pub orders: Vec<Order>,
}

/// Receipt for a created order (`POST /api/order`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order: Order,
    pub jwt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_assignment_uses_wire_names() {
        let role = RoleAssignment::franchisee("fran-abc");
        let value = serde_json::to_value(&role).unwrap();
        assert_eq!(value, json!({"role": "franchisee", "objectId": "fran-abc"}));

        let diner = serde_json::to_value(RoleAssignment::diner()).unwrap();
        assert_eq!(diner, json!({"role": "diner"}));
    }

    #[test]
    fn entity_id_accepts_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_value(json!([2, "fran-abc"])).unwrap();
        assert_eq!(ids, vec![EntityId::Num(2), EntityId::Str("fran-abc".into())]);
        assert!(ids[0].matches_segment("2"));
        assert!(ids[1].matches_segment("fran-abc"));
        assert!(!ids[0].matches_segment("20"));
    }

    #[test]
    fn user_deserializes_partial_shapes() {
        let user: User =
            serde_json::from_value(json!({"email": "d@jwt.com", "password": "a"})).unwrap();
        assert_eq!(user.email, "d@jwt.com");
        assert!(user.id.is_none());
        assert!(user.roles.is_empty());
    }

    #[test]
    fn merge_preserves_password_when_patch_omits_it() {
        let existing = User {
            id: Some("3".into()),
            name: Some("Kai Chen".into()),
            email: "d@jwt.com".into(),
            password: Some("a".into()),
            roles: vec![RoleAssignment::diner()],
        };

        let patch = UserPatch { name: Some("Kai C.".into()), ..Default::default() };
        let merged = existing.merged_with(&patch);
        assert_eq!(merged.name.as_deref(), Some("Kai C."));
        assert_eq!(merged.password.as_deref(), Some("a"));

        let empty_pw = UserPatch { password: Some(String::new()), ..Default::default() };
        let merged = existing.merged_with(&empty_pw);
        assert_eq!(merged.password.as_deref(), Some("a"));

        let new_pw = UserPatch { password: Some("b".into()), ..Default::default() };
        let merged = existing.merged_with(&new_pw);
        assert_eq!(merged.password.as_deref(), Some("b"));
    }

    #[test]
    fn admin_satisfies_any_role_check() {
        let admin = User {
            email: "a@jwt.com".into(),
            roles: vec![RoleAssignment::admin()],
            ..Default::default()
        };
        assert!(admin.has_role(RoleKind::Admin));
        assert!(admin.has_role(RoleKind::Franchisee));

        let diner = User {
            email: "d@jwt.com".into(),
            roles: vec![RoleAssignment::diner()],
            ..Default::default()
        };
        assert!(!diner.has_role(RoleKind::Admin));
    }

    #[test]
    fn store_revenue_uses_camel_case() {
        let store = Store {
            id: EntityId::Str("s-001".into()),
            name: "Downtown".into(),
            total_revenue: Some(55000.0),
        };
        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["totalRevenue"], json!(55000.0));
    }

    #[test]
    fn order_round_trips_wire_names() {
        let order: Order = serde_json::from_value(json!({
            "items": [{"menuId": 2, "description": "Pepperoni", "price": 0.0042}],
            "storeId": "4",
            "franchiseId": 2
        }))
        .unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.store_id, Some(EntityId::Str("4".into())));
        let back = serde_json::to_value(&order).unwrap();
        assert_eq!(back["items"][0]["menuId"], json!(2));
        assert!(back.get("id").is_none());
    }
}
