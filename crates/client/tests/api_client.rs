//! Integration tests: the client against a local stand-in backend.
//!
//! Each test stands up an axum router on an ephemeral port and points an
//! `ApiClient` at it, so the full path (URL building, bearer injection,
//! envelope normalization, 401 teardown) is exercised over real HTTP.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use client::domain::{a001_brand, a002_product, a003_grocery, a004_order, a008_warehouse};
use client::shared::config::{ApiConfig, Config};
use client::system::auth;
use client::{ApiClient, FileField, RedirectGuard, SessionStore};
use contracts::domain::a003_grocery::aggregate::GroceryDto;
use contracts::domain::common::ListQuery;

fn init_tracing() {
    static INIT: once_cell::sync::OnceCell<()> = once_cell::sync::OnceCell::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .try_init();
    });
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> ApiClient {
    init_tracing();
    let config = Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
        },
    };
    ApiClient::new(&config, SessionStore::in_memory())
}

fn login_body() -> Value {
    json!({
        "token": "tok-123",
        "expires_at": 1_900_000_000_000i64,
        "user": {
            "id": "u-1",
            "email": "admin@example.com",
            "full_name": "Admin",
            "role": "admin",
            "avatar": null,
            "is_admin": true
        }
    })
}

// ============================================================================
// Listing + pagination
// ============================================================================

#[tokio::test]
async fn test_list_brands_with_pagination_params() {
    let seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let seen_clone = seen.clone();

    let router = Router::new().route(
        "/api/admin/get_all_brand",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen_clone.clone();
            async move {
                *seen.lock().unwrap() = Some(params);
                Json(json!({"success": true, "data": [{"id": "1", "name": "Acme"}]}))
            }
        }),
    );

    let base = spawn(router).await;
    let api = client_for(&base);

    let brands = a001_brand::api::fetch_brands(&api, &ListQuery::new().with_page(1, 10))
        .await
        .unwrap();

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].id, "1");
    assert_eq!(brands[0].name, "Acme");

    let params = seen.lock().unwrap().clone().unwrap();
    assert_eq!(params.get("page").map(String::as_str), Some("1"));
    assert_eq!(params.get("limit").map(String::as_str), Some("10"));
}

#[tokio::test]
async fn test_unrecognized_envelope_lists_as_empty() {
    let router = Router::new()
        .route("/api/warehouses", get(|| async { Json(json!({})) }))
        .route("/api/orders", get(|| async { Json(json!({"data": null})) }));

    let base = spawn(router).await;
    let api = client_for(&base);

    let warehouses = a008_warehouse::api::fetch_warehouses(&api, &ListQuery::new())
        .await
        .unwrap();
    assert!(warehouses.is_empty());

    let orders = a004_order::api::fetch_orders(&api, &ListQuery::new())
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_not_found_record_is_none() {
    let router = Router::new().route(
        "/api/products/:id",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"message": "no such product"}))) }),
    );

    let base = spawn(router).await;
    let api = client_for(&base);

    let product = a002_product::api::fetch_product(&api, "missing").await.unwrap();
    assert!(product.is_none());
}

// ============================================================================
// Multipart vs JSON
// ============================================================================

#[tokio::test]
async fn test_create_grocery_with_images_sends_multipart() {
    let content_type: Arc<Mutex<String>> = Arc::new(Mutex::new(String::new()));
    let part_names: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let ct_clone = content_type.clone();
    let names_clone = part_names.clone();

    let router = Router::new().route(
        "/api/admin/create_grocery",
        post(move |headers: HeaderMap, mut multipart: Multipart| {
            let content_type = ct_clone.clone();
            let part_names = names_clone.clone();
            async move {
                *content_type.lock().unwrap() = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                while let Ok(Some(field)) = multipart.next_field().await {
                    part_names
                        .lock()
                        .unwrap()
                        .push(field.name().unwrap_or_default().to_string());
                    let _ = field.bytes().await;
                }
                Json(json!({
                    "success": true,
                    "data": {
                        "id": uuid::Uuid::new_v4().to_string(),
                        "name": "Молоко",
                        "price": 89.0
                    }
                }))
            }
        }),
    );

    let base = spawn(router).await;
    let api = client_for(&base);

    let dto = GroceryDto {
        name: "Молоко".into(),
        price: 89.0,
        unit: Some("l".into()),
        ..Default::default()
    };
    let image = FileField::new("milk.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]);

    let created = a003_grocery::api::create_grocery(&api, &dto, vec![image])
        .await
        .unwrap();

    assert_eq!(created.map(|g| g.name).as_deref(), Some("Молоко"));
    assert!(content_type
        .lock()
        .unwrap()
        .starts_with("multipart/form-data"));
    let names = part_names.lock().unwrap().clone();
    assert!(names.contains(&"name".to_string()));
    assert!(names.contains(&"images".to_string()));
}

#[tokio::test]
async fn test_create_grocery_without_images_sends_json() {
    let content_type: Arc<Mutex<String>> = Arc::new(Mutex::new(String::new()));
    let ct_clone = content_type.clone();

    let router = Router::new().route(
        "/api/admin/create_grocery",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let content_type = ct_clone.clone();
            async move {
                *content_type.lock().unwrap() = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({"success": true, "data": {
                    "id": "g-1",
                    "name": body.get("name").cloned().unwrap_or_default(),
                    "price": 89.0
                }}))
            }
        }),
    );

    let base = spawn(router).await;
    let api = client_for(&base);

    let dto = GroceryDto {
        name: "Хлеб".into(),
        price: 45.0,
        ..Default::default()
    };
    let created = a003_grocery::api::create_grocery(&api, &dto, Vec::new())
        .await
        .unwrap();

    assert_eq!(created.map(|g| g.name).as_deref(), Some("Хлеб"));
    assert!(content_type.lock().unwrap().starts_with("application/json"));
}

// ============================================================================
// Session: login, bearer, 401 teardown
// ============================================================================

#[tokio::test]
async fn test_login_persists_session_and_bearer_is_attached() {
    let auth_header: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let header_clone = auth_header.clone();

    let router = Router::new()
        .route(
            "/api/auth/login",
            post(|| async { Json(login_body()) }),
        )
        .route(
            "/api/auth/me",
            get(move |headers: HeaderMap| {
                let auth_header = header_clone.clone();
                async move {
                    *auth_header.lock().unwrap() = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    Json(json!({"success": true, "data": login_body()["user"].clone()}))
                }
            }),
        );

    let base = spawn(router).await;
    let api = client_for(&base);

    let login = auth::api::login(&api, "admin@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(login.token, "tok-123");
    assert_eq!(api.session().token().as_deref(), Some("tok-123"));
    assert_eq!(api.session().expires_at(), Some(1_900_000_000_000));
    assert!(!api.session().is_expired(1_899_999_999_999));

    let me = auth::api::current_user(&api).await.unwrap();
    assert_eq!(me.map(|u| u.id).as_deref(), Some("u-1"));
    assert_eq!(
        auth_header.lock().unwrap().as_deref(),
        Some("Bearer tok-123")
    );
}

#[tokio::test]
async fn test_401_clears_session_and_redirects_exactly_once() {
    let router = Router::new().route(
        "/api/orders",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"message": "jwt expired"}))) }),
    );

    let base = spawn(router).await;

    let navigations = Arc::new(AtomicUsize::new(0));
    let nav_clone = navigations.clone();
    let guard = Arc::new(RedirectGuard::new("/sign-in", move |route: &str| {
        assert_eq!(route, "/sign-in");
        nav_clone.fetch_add(1, Ordering::SeqCst);
    }));
    guard.set_current_route("/orders");

    let config = Config {
        api: ApiConfig {
            base_url: base.clone(),
        },
    };
    let session = SessionStore::in_memory();
    session.save_login(&serde_json::from_value(login_body()).unwrap());
    let api = ApiClient::new(&config, session.clone()).with_redirect_guard(guard.clone());

    let err = a004_order::api::fetch_orders(&api, &ListQuery::new())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "jwt expired");

    // all three keys are gone
    assert_eq!(session.token(), None);
    assert!(session.profile().is_none());
    assert_eq!(session.expires_at(), None);
    assert_eq!(navigations.load(Ordering::SeqCst), 1);

    // a second 401 while already on the sign-in screen: no redirect loop
    let err = a004_order::api::fetch_orders(&api, &ListQuery::new())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(navigations.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Error normalization
// ============================================================================

#[tokio::test]
async fn test_server_error_normalizes_with_message() {
    let router = Router::new().route(
        "/api/warehouses",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "db connection lost"})),
            )
        }),
    );

    let base = spawn(router).await;
    let api = client_for(&base);

    let err = a008_warehouse::api::fetch_warehouses(&api, &ListQuery::new())
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "db connection lost");
    assert!(err.error.is_some());
}

#[tokio::test]
async fn test_network_failure_normalizes_with_message() {
    // Bind a port, then drop the listener so nothing answers there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client_for(&format!("http://{}", addr));
    let err = a008_warehouse::api::fetch_warehouses(&api, &ListQuery::new())
        .await
        .unwrap_err();

    assert_eq!(err.status, None);
    assert!(!err.message.is_empty());
    assert!(err.error.is_some());
}

// ============================================================================
// Empty bodies and deletes
// ============================================================================

#[tokio::test]
async fn test_delete_with_empty_body() {
    let router = Router::new().route(
        "/api/warehouses/:id",
        axum::routing::delete(|| async { StatusCode::OK }),
    );

    let base = spawn(router).await;
    let api = client_for(&base);

    a008_warehouse::api::delete_warehouse(&api, "w-1").await.unwrap();
}

#[tokio::test]
async fn test_client_side_validation_blocks_request() {
    // No routes at all: a validation failure must not reach the wire
    let base = spawn(Router::new()).await;
    let api = client_for(&base);

    let dto = GroceryDto {
        name: "  ".into(),
        price: 10.0,
        ..Default::default()
    };
    let err = a003_grocery::api::create_grocery(&api, &dto, Vec::new())
        .await
        .unwrap_err();
    assert_eq!(err.status, None);
    assert!(!err.message.is_empty());
}
