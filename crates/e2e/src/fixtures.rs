//! Canned fixture data shared by scenarios and integration tests.

use pizzasim_common::{
    ApiDocs, DocEndpoint, EntityId, Franchise, MenuItem, RoleAssignment, Store, User,
};
use pizzasim_mock::MockOptions;

pub fn diner() -> User {
    User {
        id: Some("3".into()),
        name: Some("Kai Chen".into()),
        email: "d@jwt.com".into(),
        password: Some("a".into()),
        roles: vec![RoleAssignment::diner()],
    }
}

pub fn admin() -> User {
    User {
        id: Some("a-001".into()),
        name: Some("Addy Min".into()),
        email: "a@jwt.com".into(),
        password: Some("admin".into()),
        roles: vec![RoleAssignment::admin()],
    }
}

pub fn franchisee() -> User {
    User {
        id: Some("f-123".into()),
        name: Some("Frankie Owner".into()),
        email: "frankie@jwt.com".into(),
        password: Some("a".into()),
        roles: vec![RoleAssignment::franchisee("fran-abc")],
    }
}

pub fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: EntityId::Num(1),
            title: "Veggie".into(),
            image: "pizza1.png".into(),
            price: 0.0038,
            description: "A garden of delight".into(),
        },
        MenuItem {
            id: EntityId::Num(2),
            title: "Pepperoni".into(),
            image: "pizza2.png".into(),
            price: 0.0042,
            description: "Spicy treat".into(),
        },
    ]
}

pub fn franchise_list() -> Vec<Franchise> {
    vec![
        Franchise {
            id: EntityId::Num(2),
            name: "LotaPizza".into(),
            stores: vec![
                Store { id: EntityId::Num(4), name: "Lehi".into(), total_revenue: None },
                Store { id: EntityId::Num(5), name: "Springville".into(), total_revenue: None },
                Store { id: EntityId::Num(6), name: "American Fork".into(), total_revenue: None },
            ],
        },
        Franchise {
            id: EntityId::Num(3),
            name: "PizzaCorp".into(),
            stores: vec![Store {
                id: EntityId::Num(7),
                name: "Spanish Fork".into(),
                total_revenue: None,
            }],
        },
        Franchise { id: EntityId::Num(4), name: "topSpot".into(), stores: vec![] },
    ]
}

pub fn frankies_franchise() -> Vec<Franchise> {
    vec![Franchise {
        id: EntityId::Str("fran-abc".into()),
        name: "Frankie's Pizza Palace".into(),
        stores: vec![
            Store {
                id: EntityId::Str("s-001".into()),
                name: "Downtown".into(),
                total_revenue: Some(55000.0),
            },
            Store {
                id: EntityId::Str("s-002".into()),
                name: "Uptown".into(),
                total_revenue: Some(82000.0),
            },
        ],
    }]
}

pub fn docs() -> ApiDocs {
    ApiDocs {
        endpoints: vec![DocEndpoint {
            requires_auth: false,
            method: "GET".into(),
            path: "/api/health".into(),
            description: "Health check".into(),
            example: "GET /api/health".into(),
            response: serde_json::json!({"ok": true}),
        }],
    }
}

/// Options for a full diner flow: seeded diner, menu, franchises, empty
/// order history, docs.
pub fn diner_options() -> MockOptions {
    MockOptions::new()
        .with_users(vec![diner()])
        .with_menu(menu())
        .with_franchises(franchise_list())
        .with_orders(Vec::<pizzasim_common::Order>::new())
        .with_docs(docs())
}
