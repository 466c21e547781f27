//! Test-scoped backend state: the logged-in principal, the user registry,
//! and the token table.
//!
//! One `SessionState` is constructed per attached simulator and dropped with
//! it; nothing is shared across tests.

use std::collections::HashMap;

use rand::Rng;
use uuid::Uuid;

use pizzasim_common::{User, UserPatch};

/// Mint a fresh opaque session token.
///
/// Tokens are recorded in the token table but never checked against incoming
/// `Authorization` headers; the simulator assumes good-faith callers.
pub fn mint_token() -> String {
    format!("tok-{}", Uuid::new_v4().simple())
}

/// Mint a numeric-looking id for registered users.
pub(crate) fn mint_user_id() -> String {
    rand::thread_rng().gen_range(0..100_000).to_string()
}

/// Mint an integer id for created orders.
pub(crate) fn mint_order_id() -> i64 {
    rand::thread_rng().gen_range(0..1_000)
}

/// Mutable per-test state shared by every installed handler.
#[derive(Debug, Default)]
pub struct SessionState {
    logged_in: Option<User>,
    registry: HashMap<String, User>,
    tokens: HashMap<String, String>,
}

impl SessionState {
    /// Seed the registry from caller-supplied fixture users, keyed by email.
    pub fn seeded(users: &[User]) -> Self {
        let registry = users.iter().map(|u| (u.email.clone(), u.clone())).collect();
        Self { logged_in: None, registry, tokens: HashMap::new() }
    }

    /// The currently authenticated principal, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.logged_in.as_ref()
    }

    /// Registry entry for an email, if present.
    pub fn user(&self, email: &str) -> Option<&User> {
        self.registry.get(email)
    }

    pub fn registry_len(&self) -> usize {
        self.registry.len()
    }

    /// Number of tokens issued so far in this session.
    pub fn issued_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Exact, case-sensitive credential check against the registry.
    ///
    /// On success the session principal becomes a copy of the registry entry
    /// and a fresh token is issued. On failure the session is left untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Option<(User, String)> {
        let user = self.registry.get(email)?;
        if user.password.as_deref() != Some(password) {
            return None;
        }
        let user = user.clone();
        self.logged_in = Some(user.clone());
        let token = self.issue_token(&user);
        Some((user, token))
    }

    /// Insert a new user keyed by email and authenticate the session as them.
    ///
    /// The id is freshly generated and numeric-looking; uniqueness against
    /// seeded ids is probabilistic, not guaranteed.
    pub fn register(&mut self, mut user: User) -> (User, String) {
        user.id = Some(mint_user_id());
        self.registry.insert(user.email.clone(), user.clone());
        self.logged_in = Some(user.clone());
        let token = self.issue_token(&user);
        (user, token)
    }

    /// Clear the session so a subsequent login is required.
    pub fn logout(&mut self) {
        self.logged_in = None;
    }

    /// Merge an update over the existing record and re-authenticate as the
    /// result.
    ///
    /// The base record is the session principal when present, else a registry
    /// lookup by id, else an empty record. The merged result becomes the
    /// session principal and replaces the registry entry keyed by its email,
    /// so later logins see the update.
    pub fn update_user(&mut self, id: &str, patch: &UserPatch) -> (User, String) {
        let existing = self
            .logged_in
            .clone()
            .or_else(|| {
                self.registry
                    .values()
                    .find(|u| u.id.as_deref() == Some(id))
                    .cloned()
            })
            .unwrap_or_default();
        let merged = existing.merged_with(patch);
        self.logged_in = Some(merged.clone());
        self.registry.insert(merged.email.clone(), merged.clone());
        let token = self.issue_token(&merged);
        (merged, token)
    }

    fn issue_token(&mut self, user: &User) -> String {
        let token = mint_token();
        self.tokens
            .insert(token.clone(), user.id.clone().unwrap_or_default());
        token
    }
}
