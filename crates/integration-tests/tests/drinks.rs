//! Drinks menu, session cart and saved selection.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;

use aris_farm_integration_tests::{TestApp, body_text, location, session_cookie};

#[tokio::test]
async fn test_menu_defaults_to_beer() {
    let app = TestApp::new();
    let body = body_text(app.get("/drinks", None).await).await;
    assert!(body.contains("Windhoek Lager"));
    assert!(!body.contains("Kristall Kellerei Red"));

    let body = body_text(app.get("/drinks?category=wine", None).await).await;
    assert!(body.contains("Kristall Kellerei Red"));
    assert!(!body.contains("Windhoek Lager"));

    let body = body_text(app.get("/drinks?category=cocktails", None).await).await;
    assert!(body.contains("Windhoek Lager"));
}

#[tokio::test]
async fn test_cart_add_and_remove_in_session() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/drinks/cart/add",
            "drink_id=windhoek-lager&category=beer",
            true,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response).unwrap();
    let body = body_text(response).await;
    assert!(body.contains(r#"id="selection""#));
    assert!(body.contains(r#"id="selection-count""#));
    assert!(body.contains(r#"id="controls-windhoek-lager""#));
    assert!(body.contains("Qty: 1"));

    let response = app
        .post_form(
            "/drinks/cart/add",
            "drink_id=windhoek-lager&category=beer",
            true,
            Some(&cookie),
        )
        .await;
    assert!(body_text(response).await.contains("Qty: 2"));

    let response = app
        .post_form(
            "/drinks/cart/remove",
            "drink_id=windhoek-lager&category=beer",
            true,
            Some(&cookie),
        )
        .await;
    assert!(body_text(response).await.contains("Qty: 1"));

    // The cart shows on a fresh page load in the same session
    let body = body_text(app.get("/drinks", Some(&cookie)).await).await;
    assert!(body.contains("Qty: 1"));

    // A different visitor starts empty
    let body = body_text(app.get("/drinks", None).await).await;
    assert!(!body.contains("Qty:"));
}

#[tokio::test]
async fn test_add_unknown_drink_is_not_found() {
    let app = TestApp::new();
    let response = app
        .post_form("/drinks/cart/add", "drink_id=moonshine", true, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_without_htmx_redirects_to_menu() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/drinks/cart/add",
            "drink_id=rooibos-tea&category=soft",
            false,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/drinks?category=soft"));
}

#[tokio::test]
async fn test_save_empty_cart_writes_nothing() {
    let app = TestApp::new();
    let response = app
        .post_form("/drinks/selection", "category=beer", true, None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No drinks selected yet"));
    assert!(app.store().saved_selection().is_empty());
}

#[tokio::test]
async fn test_save_selection_persists_cart() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/drinks/cart/add",
            "drink_id=windhoek-lager&category=beer",
            true,
            None,
        )
        .await;
    let cookie = session_cookie(&response).unwrap();

    let response = app
        .post_form("/drinks/selection", "category=beer", true, Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Drink selection saved!"));

    let saved = app.store().saved_selection();
    assert_eq!(saved.total_items(), 1);
    assert_eq!(saved.quantity_of("windhoek-lager"), 1);
}

#[tokio::test]
async fn test_latest_save_wins() {
    let app = TestApp::new();

    for drink in ["windhoek-lager", "rooibos-tea"] {
        let response = app
            .post_form("/drinks/cart/add", &format!("drink_id={drink}"), true, None)
            .await;
        let cookie = session_cookie(&response).unwrap();
        app.post_form("/drinks/selection", "", true, Some(&cookie))
            .await;
    }

    let saved = app.store().saved_selection();
    assert_eq!(saved.quantity_of("windhoek-lager"), 0);
    assert_eq!(saved.quantity_of("rooibos-tea"), 1);
}
