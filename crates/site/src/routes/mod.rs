//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Landing page
//! GET  /countdown             - Countdown fragment (HTMX, polled every second)
//! POST /rsvp                  - Submit an RSVP
//!
//! # Drinks (HTMX fragments)
//! GET  /drinks                - Drinks menu (?category=beer|wine|traditional|soft)
//! POST /drinks/cart/add       - Add one serving (returns selection panel)
//! POST /drinks/cart/remove    - Remove one serving (returns selection panel)
//! POST /drinks/selection      - Save the cart as the drink selection
//!
//! # Admin
//! GET  /admin                 - Login page
//! POST /admin                 - Login action
//! POST /admin/logout          - Logout action
//! GET  /admin/dashboard       - Statistics and registrations (requires login)
//! GET  /admin/export.csv      - CSV download (requires login)
//!
//! # Health
//! GET  /health                - Liveness
//! GET  /health/ready          - Readiness (storage reachable)
//! ```

pub mod admin;
pub mod drinks;
pub mod home;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};

use crate::db::EventStore;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the drinks routes router.
pub fn drinks_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(drinks::index))
        .route("/cart/add", post(drinks::add))
        .route("/cart/remove", post(drinks::remove))
        .route("/selection", post(drinks::save))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::login_page).post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/dashboard", get(admin::dashboard))
        .route("/export.csv", get(admin::export_csv))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/countdown", get(home::countdown))
        .route("/rsvp", post(home::rsvp))
        .nest("/drinks", drinks_routes())
        .nest("/admin", admin_routes())
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the storage cannot be read.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match with_store(&state, EventStore::is_reachable).await {
        Ok(true) => StatusCode::OK,
        Ok(false) | Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Whether the request was issued by HTMX.
pub(crate) fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Run a store operation on the blocking pool.
///
/// The store does synchronous file I/O, so it is kept off the async workers.
pub(crate) async fn with_store<T, F>(state: &AppState, op: F) -> Result<T>
where
    F: FnOnce(&EventStore) -> T + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || op(state.store()))
        .await
        .map_err(|e| AppError::Internal(format!("store task failed: {e}")))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));
        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }
}
