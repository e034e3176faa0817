/// HTTP surface of the directory.
///
/// Routes:
/// - `GET /`: list page, filtered by `?q=`
/// - `GET /cards`: the card list fragment used by live search
/// - `GET /councillor/{name}`: detail page for one councillor (`/councillor/` for an
///   empty name)
/// - `GET /healthz`: store size and dataset fingerprint
use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::{debug, info};

use directory_common::store::Store;

use crate::views::{detail, list};

#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Raw query pairs. A repeated `q` keeps its first value; an unparsable query string
/// searches for nothing, so the list view never fails.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn search_text(query: QueryPairs) -> String {
    match query {
        Ok(Query(pairs)) => pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .unwrap_or_default(),
        Err(rejection) => {
            debug!(error = %rejection, "unparsable search query");
            String::new()
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_page))
        .route("/cards", get(card_list))
        .route("/councillor/", get(councillor_detail_empty_name))
        .route("/councillor/{name}", get(councillor_detail))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn list_page(State(state): State<AppState>, query: QueryPairs) -> Html<String> {
    let q = search_text(query);
    debug!(query = %q, "list page");
    Html(list::render_list_page(&q, state.store.filter(&q)))
}

async fn card_list(State(state): State<AppState>, query: QueryPairs) -> Html<String> {
    let q = search_text(query);
    debug!(query = %q, "card list");
    Html(list::render_card_list(state.store.filter(&q)))
}

/// A parameter that fails to percent-decode is treated the same as an unknown name.
async fn councillor_detail(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Response {
    match name {
        Ok(Path(name)) => detail_response(&state.store, &name),
        Err(rejection) => {
            debug!(error = %rejection, "undecodable councillor name");
            not_found()
        }
    }
}

/// `/councillor/` is where a record keyed by the empty string links to.
async fn councillor_detail_empty_name(State(state): State<AppState>) -> Response {
    detail_response(&state.store, "")
}

fn detail_response(store: &Store, name: &str) -> Response {
    match store.get(name) {
        Some(councillor) => Html(detail::render_detail_page(councillor)).into_response(),
        None => {
            info!(name = %name, "councillor not found");
            not_found()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(detail::render_not_found())).into_response()
}

async fn healthz(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "councillors": state.store.len(),
        "fingerprint": state.store.fingerprint(),
    }))
}
