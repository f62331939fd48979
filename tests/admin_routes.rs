use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use admin_guard::app::{build_router, build_state};
use admin_guard::config::Config;
use admin_guard::sessions::{SessionDirectory, User};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

#[derive(Default)]
struct FakeDirectory {
    users: HashMap<String, User>,
    lookups: AtomicUsize,
}

impl FakeDirectory {
    fn with(mut self, token: &str, user: User) -> Self {
        self.users.insert(token.to_string(), user);
        self
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl SessionDirectory for FakeDirectory {
    fn lookup(&self, token: &str) -> Option<User> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.users.get(token).cloned()
    }
}

fn directory() -> Arc<FakeDirectory> {
    Arc::new(
        FakeDirectory::default()
            .with("admin-token", User::admin("alice"))
            .with("member-token", User::member("bob")),
    )
}

fn app(protected: Option<&str>, sessions: Arc<FakeDirectory>) -> Router {
    let config = Config::from_lookup(|key| match key {
        "PROTECTED_METHODS" => protected.map(str::to_string),
        _ => None,
    })
    .unwrap();

    let state = build_state(&config, sessions);
    build_router(state, &config)
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn recipe() -> Value {
    json!({ "name": "Tomato Soup", "instructions": "simmer" })
}

fn access_denied() -> Value {
    json!({ "error": { "code": "UNAUTHORIZED", "message": "Access denied" } })
}

#[tokio::test]
async fn reads_need_no_token() {
    let app = app(None, directory());

    let (status, body) = send(&app, request(Method::GET, "/api/v1/recipes", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn admin_can_create_update_and_delete() {
    let app = app(None, directory());
    let auth = Some("Bearer admin-token");

    let (status, created) = send(
        &app,
        request(Method::POST, "/api/v1/recipes", auth, Some(recipe())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, updated) = send(
        &app,
        request(
            Method::PUT,
            "/api/v1/recipes/1",
            auth,
            Some(json!({ "instructions": "simmer for 20 minutes" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Tomato Soup");
    assert_eq!(updated["instructions"], "simmer for 20 minutes");

    let (status, _) = send(&app, request(Method::DELETE, "/api/v1/recipes/1", auth, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn bare_token_is_accepted() {
    let app = app(None, directory());

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/v1/recipes", Some("admin-token"), Some(recipe())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn every_denial_looks_the_same() {
    let app = app(None, directory());

    for auth in [
        None,
        Some("   "),
        Some("Bearer member-token"),
        Some("Bearer unknown-token"),
    ] {
        let (status, body) = send(
            &app,
            request(Method::POST, "/api/v1/recipes", auth, Some(recipe())),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{auth:?}");
        assert_eq!(body, access_denied(), "{auth:?}");
    }
}

#[tokio::test]
async fn rejected_request_does_no_work() {
    let app = app(None, directory());

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/recipes",
            Some("Bearer member-token"),
            Some(recipe()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, list) = send(&app, request(Method::GET, "/api/v1/recipes", None, None)).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn extra_header_parts_are_ignored() {
    let app = app(None, directory());

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/recipes",
            Some("Bearer    admin-token   extra"),
            Some(recipe()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn unprotected_methods_never_touch_the_directory() {
    let sessions = directory();
    let app = app(Some("DELETE"), sessions.clone());

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/v1/recipes", Some("Bearer junk"), Some(recipe())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sessions.lookups(), 0);

    let (status, _) = send(&app, request(Method::DELETE, "/api/v1/recipes/1", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // rejected before lookup: no credential
    assert_eq!(sessions.lookups(), 0);

    let (status, _) = send(
        &app,
        request(
            Method::DELETE,
            "/api/v1/recipes/1",
            Some("Bearer member-token"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(sessions.lookups(), 1);
}

#[tokio::test]
async fn create_alias_does_not_cover_put() {
    let app = app(Some("create"), directory());

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/v1/recipes", None, Some(recipe())),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // PUT is open, so an anonymous update reaches the handler (and 404s).
    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/api/v1/recipes/7",
            None,
            Some(json!({ "name": "x" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_configuration_protects_nothing() {
    let app = app(Some(""), directory());

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/v1/recipes", None, Some(recipe())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, request(Method::DELETE, "/api/v1/recipes/1", None, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn health_is_outside_the_guard() {
    let app = app(Some("GET"), directory());

    let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "protected_methods": ["GET"] }));

    let (status, _) = send(&app, request(Method::GET, "/api/v1/recipes", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn blank_recipe_name_is_bad_request_for_admin() {
    let app = app(None, directory());

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/recipes",
            Some("Bearer admin-token"),
            Some(json!({ "name": "  " })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_RECIPE");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = app(None, directory());

    let res = app
        .clone()
        .oneshot(request(Method::GET, "/health", None, None))
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}
