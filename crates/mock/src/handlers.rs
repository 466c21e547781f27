//! Per-resource decision logic for intercepted calls.
//!
//! Each function answers one resource's requests from the shared session
//! state and the configured fixtures. Methods a resource does not define
//! pass through unmodified.

use http::{Method, StatusCode};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, warn};

use pizzasim_common::{
    AuthResponse, EntityId, ErrorResponse, Franchise, LoginRequest, MenuItem, Order, OrderReceipt,
    User, UserPatch,
};

use crate::options::{FranchiseFixture, OrderFixture, UserListFixture};
use crate::request::{InterceptedRequest, MockResponse, RouteDecision};
use crate::session::{mint_order_id, SessionState};

/// Simulated payment receipt token returned on order creation. No real
/// signing takes place.
pub const RECEIPT_JWT: &str = "eyJpYXQ";

fn unauthorized() -> RouteDecision {
    RouteDecision::Fulfill(MockResponse::new(
        StatusCode::UNAUTHORIZED,
        serde_json::to_value(ErrorResponse { message: "Unauthorized".to_string() })
            .unwrap_or(Value::Null),
    ))
}

fn bad_request(message: &str) -> RouteDecision {
    RouteDecision::Fulfill(MockResponse::new(
        StatusCode::BAD_REQUEST,
        serde_json::to_value(ErrorResponse { message: message.to_string() })
            .unwrap_or(Value::Null),
    ))
}

/// Auth resource: login (PUT), registration (POST), logout (DELETE).
pub fn auth(session: &Mutex<SessionState>, req: &InterceptedRequest) -> RouteDecision {
    let method = req.method();
    if *method == Method::PUT {
        let body: LoginRequest = match req.body_json() {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "login body was not a credential pair");
                return unauthorized();
            }
        };
        let mut state = session.lock();
        match state.login(&body.email, &body.password) {
            Some((user, token)) => {
                debug!(email = %user.email, "login accepted");
                RouteDecision::Fulfill(MockResponse::ok(&AuthResponse { user, token }))
            }
            None => {
                debug!(email = %body.email, "login rejected");
                unauthorized()
            }
        }
    } else if *method == Method::POST {
        let user: User = match req.body_json() {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "registration body was not a user shape");
                return bad_request("invalid registration");
            }
        };
        let (user, token) = session.lock().register(user);
        debug!(email = %user.email, id = ?user.id, "registered new user");
        RouteDecision::Fulfill(MockResponse::ok(&AuthResponse { user, token }))
    } else if *method == Method::DELETE {
        session.lock().logout();
        debug!("logout, session cleared");
        RouteDecision::Fulfill(MockResponse::ok_empty())
    } else {
        RouteDecision::PassThrough
    }
}

/// Current-user resource: the session principal, or JSON null when nobody is
/// logged in.
pub fn current_user(session: &Mutex<SessionState>, _req: &InterceptedRequest) -> RouteDecision {
    let state = session.lock();
    let body = serde_json::to_value(state.current_user()).unwrap_or(Value::Null);
    RouteDecision::Fulfill(MockResponse::new(StatusCode::OK, body))
}

/// Update-user resource, parameterized by a trailing user-id segment.
pub fn update_user(session: &Mutex<SessionState>, req: &InterceptedRequest) -> RouteDecision {
    let method = req.method();
    if *method == Method::PUT {
        let id = match req.last_segment() {
            Some(id) => id.to_string(),
            None => return RouteDecision::PassThrough,
        };
        let patch: UserPatch = match req.body_json() {
            Ok(patch) => patch,
            Err(e) => {
                warn!(error = %e, "update body was not a user patch");
                return bad_request("invalid update");
            }
        };
        let (user, token) = session.lock().update_user(&id, &patch);
        debug!(id = %id, email = %user.email, "user updated");
        RouteDecision::Fulfill(MockResponse::ok(&AuthResponse { user, token }))
    } else if *method == Method::DELETE {
        // Simulated account deletion: acknowledged, registry kept.
        RouteDecision::Fulfill(MockResponse::ok_empty())
    } else {
        RouteDecision::PassThrough
    }
}

/// List-users resource with optional `name` and `page` query parameters.
pub fn list_users(fixture: &UserListFixture, req: &InterceptedRequest) -> RouteDecision {
    let page = req
        .query_param("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(0);
    let name = req.query_param("name");
    let response = fixture.resolve(page, name.as_deref());
    debug!(page, filter = ?name, hits = response.users.len(), "user list served");
    RouteDecision::Fulfill(MockResponse::ok(&response))
}

/// Menu resource: the configured fixture, verbatim.
pub fn menu(fixture: &[MenuItem], _req: &InterceptedRequest) -> RouteDecision {
    RouteDecision::Fulfill(MockResponse::ok(&fixture))
}

/// Orders resource: history on GET, create-and-receipt on POST.
pub fn orders(fixture: &OrderFixture, req: &InterceptedRequest) -> RouteDecision {
    let method = req.method();
    if *method == Method::POST {
        let mut order: Order = match req.body_json() {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "order body was not an order shape");
                return bad_request("invalid order");
            }
        };
        order.id = Some(EntityId::Num(mint_order_id()));
        debug!(id = ?order.id, items = order.items.len(), "order created");
        RouteDecision::Fulfill(MockResponse::ok(&OrderReceipt {
            order,
            jwt: RECEIPT_JWT.to_string(),
        }))
    } else if *method == Method::GET {
        RouteDecision::Fulfill(MockResponse::ok(&fixture.to_response()))
    } else {
        RouteDecision::PassThrough
    }
}

/// Franchises resource: the full wrapped payload for collection GETs, a
/// single-element or empty list for by-id GETs. A missing id is answered
/// with `[]` and 200, never a 404.
pub fn franchises(fixture: &FranchiseFixture, req: &InterceptedRequest) -> RouteDecision {
    match franchise_id_segment(req) {
        Some(id) => {
            let found: Vec<&Franchise> = fixture
                .franchises()
                .iter()
                .filter(|f| f.id.matches_segment(id))
                .collect();
            debug!(id = %id, hits = found.len(), "franchise lookup by id");
            RouteDecision::Fulfill(MockResponse::ok(&found))
        }
        None => RouteDecision::Fulfill(MockResponse::ok(&fixture.to_response())),
    }
}

fn franchise_id_segment(req: &InterceptedRequest) -> Option<&str> {
    req.last_segment().filter(|segment| *segment != "franchise")
}

/// Docs resource: the configured payload, verbatim.
pub fn docs(fixture: &pizzasim_common::ApiDocs, _req: &InterceptedRequest) -> RouteDecision {
    RouteDecision::Fulfill(MockResponse::ok(fixture))
}
