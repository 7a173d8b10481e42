//! Landing page, countdown, RSVP and health checks.

#![allow(clippy::unwrap_used)]

use axum::http::{StatusCode, header};

use aris_farm_integration_tests::{TestApp, body_text};

const VALID_RSVP: &str = "full_name=Jane+Doe&email=jane%40example.com&phone=0811234567\
&attendees=2&meal_preference=braai&beverage_preference=beer&accessibility=";

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();

    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    let response = app.get("/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_home_page_renders_with_security_headers() {
    let app = TestApp::new();
    let response = app.get("/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert!(
        response
            .headers()
            .contains_key(header::CONTENT_SECURITY_POLICY)
    );

    let body = body_text(response).await;
    assert!(body.contains("Aris Farm"));
    assert!(body.contains("March 15, 2025"));
    assert!(body.contains("Sunset Gathering"));
    assert!(body.contains(r#"id="rsvp-card""#));
}

#[tokio::test]
async fn test_stylesheet_served_outside_workspace_root() {
    // Tests run from this crate's directory, not the workspace root
    let app = TestApp::new();
    let response = app.get("/static/css/main.css", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(".hero"));
}

#[tokio::test]
async fn test_countdown_fragment_after_start() {
    // The default start date has passed, so the fragment shows the done message
    let app = TestApp::new();
    let response = app.get("/countdown", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"id="countdown""#));
    assert!(body.contains("The celebration has begun!"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_rsvp_shows_persisted_confirmation_id() {
    let app = TestApp::new();
    let response = app.post_form("/rsvp", VALID_RSVP, true, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    let stored = app.store().list_registrations();
    assert_eq!(stored.len(), 1);
    let registration = &stored[0];
    assert_eq!(registration.full_name, "Jane Doe");
    assert_eq!(registration.email, "jane@example.com");
    assert_eq!(registration.attendees, 2);
    assert_eq!(registration.meal_preference, "braai");
    assert!(
        registration
            .confirmation_id
            .as_str()
            .starts_with("AF2025-")
    );
    assert!(body.contains(registration.confirmation_id.as_str()));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_rsvp_without_htmx_renders_full_page() {
    let app = TestApp::new();
    let response = app.post_form("/rsvp", VALID_RSVP, false, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<html"));
    let stored = app.store().list_registrations();
    assert!(body.contains(stored[0].confirmation_id.as_str()));
}

#[tokio::test]
async fn test_rsvp_missing_fields_stores_nothing() {
    let app = TestApp::new();
    let response = app
        .post_form("/rsvp", "full_name=Jane+Doe&email=&phone=", true, None)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("email is required"));
    assert!(body.contains("Jane Doe"));
    assert!(app.store().list_registrations().is_empty());
}

#[tokio::test]
async fn test_rsvp_unknown_preference_rejected() {
    let app = TestApp::new();
    let form = "full_name=Jane+Doe&email=jane%40example.com&phone=0811234567\
&meal_preference=lobster";
    let response = app.post_form("/rsvp", form, true, None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.store().list_registrations().is_empty());
}

#[tokio::test]
async fn test_repeat_rsvps_append_in_order() {
    let app = TestApp::new();
    for name in ["Jane+Doe", "Tom+Shikongo"] {
        let form = format!("full_name={name}&email=guest%40example.com&phone=0811234567");
        let response = app.post_form("/rsvp", &form, true, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let names: Vec<_> = app
        .store()
        .list_registrations()
        .into_iter()
        .map(|r| r.full_name)
        .collect();
    assert_eq!(names, ["Jane Doe", "Tom Shikongo"]);
}
