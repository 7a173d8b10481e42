//! Integration tests for the Aris Farm site.
//!
//! Tests drive the full router (sessions, middleware, templates) in-process
//! with `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aris-farm-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `public` - Landing page, countdown, RSVP and health checks
//! - `drinks` - Drinks menu, session cart and saved selection
//! - `admin` - Dashboard login, statistics and CSV export

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use aris_farm_site::config::SiteConfig;
use aris_farm_site::db::{EventStore, MemoryStorage};
use aris_farm_site::state::AppState;

/// Default dashboard credentials.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "arisfarm2025";

/// The site router over in-memory storage.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Build the app with default configuration and empty storage.
    #[must_use]
    pub fn new() -> Self {
        let config = SiteConfig::for_data_dir(std::env::temp_dir().join("aris-farm-tests"));
        let state = AppState::new(config, Arc::new(MemoryStorage::new()));
        Self {
            router: aris_farm_site::app(state.clone()),
            state,
        }
    }

    /// The store behind the app, for checking what was persisted.
    #[must_use]
    pub fn store(&self) -> &EventStore {
        self.state.store()
    }

    /// Send a request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Plain GET, optionally with a session cookie.
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Form POST, optionally as HTMX and with a session cookie.
    pub async fn post_form(
        &self,
        uri: &str,
        form: &str,
        htmx: bool,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(form.to_string())).unwrap())
            .await
    }

    /// Log in to the dashboard and return the session cookie.
    pub async fn login(&self) -> String {
        let response = self
            .post_form(
                "/admin",
                &format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}"),
                false,
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie(&response).unwrap()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// The `name=value` part of the session cookie set by `response`, if any.
#[must_use]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("af_session="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Collect the response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Location header of a redirect.
#[must_use]
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
