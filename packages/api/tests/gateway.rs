//! Gateway tests against a stub catalog API.
//!
//! The stub mimics the remote service's contract closely enough to exercise
//! the client's request shapes and error mapping: bearer auth on the item
//! endpoints, multipart bodies with a `_method=PUT` override on update, and
//! Laravel-style 422 bodies with per-field messages.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use api::{ApiClient, ApiError, ImageFile, ItemId, NewItem, RegisterPayload, UpdateItem};

const TOKEN: &str = "stub-token";

#[derive(Clone, Debug)]
struct StubItem {
    id: u64,
    name: String,
    price: String,
    image_url: String,
}

#[derive(Clone, Default)]
struct StubState {
    items: Arc<Mutex<Vec<StubItem>>>,
    next_id: Arc<AtomicU64>,
}

impl StubState {
    fn seed(&self, name: &str, price: &str) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.items.lock().unwrap().push(StubItem {
            id,
            name: name.to_string(),
            price: price.to_string(),
            image_url: format!("https://cdn.example.com/{id}.png"),
        });
        id
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(&format!("Bearer {TOKEN}"))
}

async fn login(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    if body["email"] == "admin@example.com" && body["password"] == "secret123" {
        Json(json!({
            "token": TOKEN,
            "user": {
                "user_name": "Admin_User",
                "profile_image_url": "https://cdn.example.com/admin.png"
            }
        }))
        .into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn register(mut multipart: Multipart) -> impl IntoResponse {
    let mut email = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("email") {
            email = Some(field.text().await.unwrap());
        }
    }
    match email.filter(|email| !email.is_empty()) {
        Some(_) => Json(json!({ "data": { "token": TOKEN } })).into_response(),
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": { "email": ["The email field is required."] }
            })),
        )
            .into_response(),
    }
}

async fn list_items(State(state): State<StubState>, headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let items: Vec<serde_json::Value> = state
        .items
        .lock()
        .unwrap()
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "name": item.name,
                "price": item.price,
                "image_url": item.image_url
            })
        })
        .collect();
    Json(items).into_response()
}

async fn get_item(
    State(state): State<StubState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let items = state.items.lock().unwrap();
    match items.iter().find(|item| item.id == id) {
        Some(item) => Json(json!({
            "name": item.name,
            "price": item.price,
            "image_url": item.image_url
        }))
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_item(
    State(state): State<StubState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut name = String::new();
    let mut price = String::new();
    let mut image = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        match field.name() {
            Some("name") => name = field.text().await.unwrap(),
            Some("price") => price = field.text().await.unwrap(),
            Some("image") => image = Some(field.bytes().await.unwrap()),
            _ => {}
        }
    }

    if image.is_none() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": { "image": ["The image field is required."] }
            })),
        )
            .into_response();
    }

    let id = state.seed(&name, &price);
    (
        StatusCode::CREATED,
        Json(json!({ "id": id, "name": name, "price": price })),
    )
        .into_response()
}

async fn update_item(
    State(state): State<StubState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut name = String::new();
    let mut price = String::new();
    let mut method = String::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        match field.name() {
            Some("name") => name = field.text().await.unwrap(),
            Some("price") => price = field.text().await.unwrap(),
            Some("_method") => method = field.text().await.unwrap(),
            _ => {}
        }
    }

    // The real API only routes this POST to the update handler when the
    // override is present.
    if method != "PUT" {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let mut items = state.items.lock().unwrap();
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.name = name;
            item.price = price;
            Json(json!({ "id": id, "name": item.name, "price": item.price })).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_item(
    State(state): State<StubState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.items.lock().unwrap().retain(|item| item.id != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn spawn_stub() -> (ApiClient, StubState) {
    let state = StubState::default();
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).post(update_item).delete(delete_item),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (ApiClient::new(format!("http://{addr}/api")), state)
}

fn sample_image() -> ImageFile {
    ImageFile::new("photo.png", vec![0x89, b'P', b'N', b'G'])
}

#[tokio::test]
async fn login_returns_token_and_profile() {
    let (client, _state) = spawn_stub().await;

    let response = client.login("admin@example.com", "secret123").await.unwrap();
    assert_eq!(response.token, TOKEN);
    assert_eq!(response.user.user_name, "Admin_User");
    assert_eq!(
        response.user.profile_image_url.as_deref(),
        Some("https://cdn.example.com/admin.png")
    );
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let (client, _state) = spawn_stub().await;

    let err = client
        .login("admin@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn register_returns_nested_token() {
    let (client, _state) = spawn_stub().await;

    let token = client
        .register(RegisterPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            user_name: "Ada_Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret123".into(),
            password_confirmation: "secret123".into(),
            profile_image: Some(sample_image()),
        })
        .await
        .unwrap();
    assert_eq!(token, TOKEN);
}

#[tokio::test]
async fn list_requires_bearer_token() {
    let (client, state) = spawn_stub().await;
    state.seed("Desk", "120.00");

    let err = client.list_items("not-the-token").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let (client, _state) = spawn_stub().await;

    client
        .create_item(
            TOKEN,
            NewItem {
                name: "Walnut Desk".into(),
                price: "249.99".into(),
                image: sample_image(),
            },
        )
        .await
        .unwrap();

    let items = client.list_items(TOKEN).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Walnut Desk");
    assert_eq!(items[0].price, "249.99");
}

#[tokio::test]
async fn rejected_field_maps_to_validation_error() {
    let (client, _state) = spawn_stub().await;

    let err = client
        .register(RegisterPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            user_name: "Ada_Lovelace".into(),
            email: String::new(),
            password: "secret123".into(),
            password_confirmation: "secret123".into(),
            profile_image: None,
        })
        .await
        .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors.first("email"), Some("The email field is required."));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_item_returns_detail() {
    let (client, state) = spawn_stub().await;
    let id = state.seed("Desk", "120.00");

    let detail = client
        .get_item(TOKEN, &ItemId::from(id.to_string()))
        .await
        .unwrap();
    assert_eq!(detail.name, "Desk");
    assert_eq!(detail.price, "120.00");
}

#[tokio::test]
async fn update_sends_method_override() {
    let (client, state) = spawn_stub().await;
    let id = state.seed("Desk", "120.00");

    client
        .update_item(
            TOKEN,
            &ItemId::from(id.to_string()),
            UpdateItem {
                name: "Standing Desk".into(),
                price: "320.00".into(),
                image: None,
            },
        )
        .await
        .unwrap();

    let items = client.list_items(TOKEN).await.unwrap();
    assert_eq!(items[0].name, "Standing Desk");
    assert_eq!(items[0].price, "320.00");
}

#[tokio::test]
async fn delete_removes_item() {
    let (client, state) = spawn_stub().await;
    let keep = state.seed("Desk", "120.00");
    let drop = state.seed("Chair", "45.00");

    client
        .delete_item(TOKEN, &ItemId::from(drop.to_string()))
        .await
        .unwrap();

    let items = client.list_items(TOKEN).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::from(keep.to_string()));
}
