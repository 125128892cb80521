//! Stub upstream product API served on an ephemeral local port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_proxy::{AppState, Config};
use serde_json::{json, Value};

pub struct StubState {
    products: Vec<Value>,
    requests: Mutex<Vec<String>>,
    failing: AtomicBool,
    delay: Mutex<Duration>,
}

#[derive(Clone)]
pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubUpstream {
    /// Paths and queries received so far, e.g. `/products?limit=5&skip=10`.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = delay;
    }

    pub fn config(&self) -> Config {
        Config {
            upstream_base_url: self.base_url.clone(),
            ..Config::default()
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::from_config(&self.config()).unwrap()
    }
}

/// 16 smartphones, 5 laptops and 130 groceries; ids start at 1.
pub fn catalog() -> Vec<Value> {
    let mut products = Vec::new();
    let mut push = |category: &str, price: f64| {
        let id = products.len() + 1;
        products.push(json!({
            "id": id,
            "title": format!("{} {}", category, id),
            "category": category,
            "price": price,
            "rating": 4.5,
        }));
    };

    for i in 0..16u32 {
        // distinct prices, upstream order not sorted
        push("smartphones", ((i * 5) % 16) as f64 * 50.0 + 99.0);
    }
    for i in 0..5u32 {
        push("laptops", 1999.0 - i as f64 * 100.0);
    }
    for i in 0..130u32 {
        push("groceries", (i % 10) as f64 + 0.99);
    }
    products
}

pub async fn spawn_upstream() -> StubUpstream {
    spawn_upstream_with(catalog()).await
}

pub async fn spawn_upstream_with(products: Vec<Value>) -> StubUpstream {
    let state = Arc::new(StubState {
        products,
        requests: Mutex::new(Vec::new()),
        failing: AtomicBool::new(false),
        delay: Mutex::new(Duration::ZERO),
    });

    let app = Router::new()
        .route("/products", get(list))
        .route("/products/categories", get(categories))
        .route("/products/category/:name", get(by_category))
        .route("/products/:id", get(one))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{}/products", addr),
        state,
    }
}

/// Records the request and applies failure/delay settings.
async fn enter(state: &StubState, uri: &Uri) -> Result<(), Response> {
    state.requests.lock().unwrap().push(uri.to_string());

    let delay = *state.delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    if state.failing.load(Ordering::SeqCst) {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "upstream down").into_response());
    }
    Ok(())
}

fn page(products: Vec<&Value>, params: &HashMap<String, String>) -> Json<Value> {
    let total = products.len();
    let limit = params
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(30);
    let skip = params
        .get("skip")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let items: Vec<&Value> = products.into_iter().skip(skip).take(limit).collect();

    Json(json!({
        "products": items,
        "total": total,
        "skip": skip,
        "limit": limit,
    }))
}

async fn list(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = enter(&state, &uri).await {
        return resp;
    }
    page(state.products.iter().collect(), &params).into_response()
}

async fn by_category(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = enter(&state, &uri).await {
        return resp;
    }
    let matching = state
        .products
        .iter()
        .filter(|p| p["category"] == name.as_str())
        .collect();
    page(matching, &params).into_response()
}

async fn categories(State(state): State<Arc<StubState>>, uri: Uri) -> Response {
    if let Err(resp) = enter(&state, &uri).await {
        return resp;
    }
    let mut slugs: Vec<&str> = state
        .products
        .iter()
        .filter_map(|p| p["category"].as_str())
        .collect();
    slugs.dedup();

    let body: Vec<Value> = slugs
        .into_iter()
        .map(|slug| json!({"slug": slug, "name": slug.to_uppercase()}))
        .collect();
    Json(body).into_response()
}

async fn one(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = enter(&state, &uri).await {
        return resp;
    }
    match state.products.iter().find(|p| p["id"].to_string() == id) {
        Some(product) => Json(product.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Product with id '{}' not found", id)})),
        )
            .into_response(),
    }
}
