//! Shared fixtures for integration tests.

use regex::Regex;
use serde_json::json;
use xanthus::{ActionError, ControllerBase, Router};

pub fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// A small users resource: index, show, create, update, destroy.
pub fn users_controller() -> ControllerBase {
    ControllerBase::new()
        .action("index", |ctx| {
            let page = ctx.param("page").unwrap_or("1").to_string();
            ctx.render_json(&json!({ "users": ["ada", "grace"], "page": page }))
        })
        .action("show", |ctx| {
            let id = ctx.param("id").unwrap_or_default().to_string();
            ctx.render_text(format!("user {id}"))
        })
        .action("create", |ctx| ctx.redirect_to("/users/3"))
        .action("update", |ctx| {
            let body = String::from_utf8_lossy(ctx.request().body()).into_owned();
            ctx.render_text(format!("updated with {body}"))
        })
        .action("destroy", |ctx| ctx.head(204))
        .action("explode", |_| Err(ActionError::failed("database unavailable")))
}

/// Router with the users resource drawn and its controller registered.
#[allow(dead_code)]
pub fn users_router() -> Router {
    let mut router = Router::new();
    router
        .draw(|r| {
            r.get(re("^/users$"), "UsersController", "index");
            r.post(re("^/users$"), "UsersController", "create");
            r.get(re("^/users/explode$"), "UsersController", "explode");
            r.get(re(r"^/users/(?<id>\d+)$"), "UsersController", "show");
            r.put(re(r"^/users/(?<id>\d+)$"), "UsersController", "update");
            r.delete(re(r"^/users/(?<id>\d+)$"), "UsersController", "destroy");
            r.get(re("^/orphans$"), "OrphansController", "index");
        })
        .register_controller("UsersController", users_controller());
    router
}
