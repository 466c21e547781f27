//! Route table construction and the attach entry point.

use std::sync::Arc;

use http::Method;
use parking_lot::Mutex;
use tracing::{debug, info};

use pizzasim_common::{ApiDocs, MenuItem, Result};

use crate::handlers;
use crate::options::{FranchiseFixture, MockOptions, OrderFixture, UserListFixture};
use crate::page::{Page, RouteHandler};
use crate::pattern::RoutePattern;
use crate::request::{InterceptedRequest, RouteDecision};
use crate::session::SessionState;

/// Storage key the UI uses for the persisted auth token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Storage key the UI uses for a pending order awaiting payment.
pub const ORDER_STORAGE_KEY: &str = "jwtp-order";

/// Resources a route can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resource {
    Auth,
    CurrentUser,
    UpdateUser,
    ListUsers,
    Menu,
    Orders,
    Franchises,
    Docs,
}

struct Route {
    pattern: RoutePattern,
    resource: Resource,
}

/// A mock backend bound to one test's state and fixtures.
///
/// Constructed fresh per test, shared into the page's interception handlers,
/// and discarded when the test ends.
pub struct MockBackend {
    session: Arc<Mutex<SessionState>>,
    routes: Vec<Route>,
    menu: Option<Vec<MenuItem>>,
    orders: Option<OrderFixture>,
    franchises: Option<FranchiseFixture>,
    docs: Option<ApiDocs>,
    users_list: Option<UserListFixture>,
}

impl MockBackend {
    /// Build the ordered route table from the options.
    ///
    /// Auth, current-user and update-user are always installed; the rest
    /// only when the matching fixture was supplied. Specific paths precede
    /// general ones so first-match-wins stays unambiguous.
    pub fn new(options: MockOptions) -> Result<Self> {
        let seed = options.users.unwrap_or_default();
        let session = Arc::new(Mutex::new(SessionState::seeded(&seed)));

        let mut routes = vec![
            Route {
                pattern: RoutePattern::any_method("/api/auth")?,
                resource: Resource::Auth,
            },
            Route {
                pattern: RoutePattern::for_methods(&[Method::GET], "/api/user/me")?,
                resource: Resource::CurrentUser,
            },
            Route {
                pattern: RoutePattern::for_methods(
                    &[Method::PUT, Method::DELETE],
                    "/api/user/[^/]+",
                )?,
                resource: Resource::UpdateUser,
            },
        ];

        if options.users_list.is_some() {
            routes.push(Route {
                pattern: RoutePattern::for_methods(&[Method::GET], "/api/user")?,
                resource: Resource::ListUsers,
            });
        }
        if options.menu.is_some() {
            routes.push(Route {
                pattern: RoutePattern::for_methods(&[Method::GET], "/api/order/menu")?,
                resource: Resource::Menu,
            });
        }
        if options.orders.is_some() {
            routes.push(Route {
                pattern: RoutePattern::for_methods(&[Method::GET, Method::POST], "/api/order")?,
                resource: Resource::Orders,
            });
        }
        if options.franchises.is_some() {
            routes.push(Route {
                pattern: RoutePattern::for_methods(&[Method::GET], "/api/franchise(/[^/]+)?")?,
                resource: Resource::Franchises,
            });
        }
        if options.docs.is_some() {
            routes.push(Route {
                pattern: RoutePattern::for_methods(&[Method::GET], "/api/docs")?,
                resource: Resource::Docs,
            });
        }

        Ok(Self {
            session,
            routes,
            menu: options.menu,
            orders: options.orders,
            franchises: options.franchises,
            docs: options.docs,
            users_list: options.users_list,
        })
    }

    /// Decide what to do with an intercepted call: the first route in table
    /// order whose pattern matches wins; no match means pass-through.
    pub fn handle(&self, req: &InterceptedRequest) -> RouteDecision {
        for route in &self.routes {
            if route.pattern.matches(req) {
                debug!(
                    method = %req.method(),
                    path = req.path(),
                    resource = ?route.resource,
                    "dispatching intercepted call"
                );
                return self.dispatch(route.resource, req);
            }
        }
        debug!(method = %req.method(), path = req.path(), "no route, passing through");
        RouteDecision::PassThrough
    }

    fn dispatch(&self, resource: Resource, req: &InterceptedRequest) -> RouteDecision {
        match resource {
            Resource::Auth => handlers::auth(&self.session, req),
            Resource::CurrentUser => handlers::current_user(&self.session, req),
            Resource::UpdateUser => handlers::update_user(&self.session, req),
            Resource::ListUsers => match &self.users_list {
                Some(fixture) => handlers::list_users(fixture, req),
                None => RouteDecision::PassThrough,
            },
            Resource::Menu => match &self.menu {
                Some(fixture) => handlers::menu(fixture, req),
                None => RouteDecision::PassThrough,
            },
            Resource::Orders => match &self.orders {
                Some(fixture) => handlers::orders(fixture, req),
                None => RouteDecision::PassThrough,
            },
            Resource::Franchises => match &self.franchises {
                Some(fixture) => handlers::franchises(fixture, req),
                None => RouteDecision::PassThrough,
            },
            Resource::Docs => match &self.docs {
                Some(fixture) => handlers::docs(fixture, req),
                None => RouteDecision::PassThrough,
            },
        }
    }

    /// The patterns of the installed route table, in evaluation order.
    pub fn patterns(&self) -> Vec<RoutePattern> {
        self.routes.iter().map(|r| r.pattern.clone()).collect()
    }

    /// Shared handle to the session state, for assertions in tests.
    pub fn session(&self) -> Arc<Mutex<SessionState>> {
        self.session.clone()
    }
}

/// Install the mock backend on a page.
///
/// Clears persisted auth-token and pending-order keys from the page's
/// storage, registers one interception route per table entry (each
/// delegating into the shared first-match-wins table), and finally navigates
/// the page to `/`. Registration failures are not caught here; they surface
/// as fatal test setup errors.
pub async fn attach<P: Page + ?Sized>(page: &P, options: MockOptions) -> Result<()> {
    let backend = Arc::new(MockBackend::new(options)?);

    for key in [TOKEN_STORAGE_KEY, ORDER_STORAGE_KEY] {
        page.clear_storage_key(key).await?;
    }

    for pattern in backend.patterns() {
        let shared = backend.clone();
        let handler: RouteHandler = Arc::new(move |req| shared.handle(req));
        page.route(pattern, handler).await?;
    }

    info!(routes = backend.patterns().len(), "mock backend attached");
    page.goto("/").await?;
    Ok(())
}
