//! Drinks menu and selection handlers.
//!
//! The cart lives in the visitor's session. Cart operations use HTMX: each
//! returns the selection panel, with the count badge and the changed drink's
//! controls swapped out-of-band. Without HTMX the handlers redirect back to the
//! menu.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use aris_farm_core::{Cart, Drink, DrinkCategory, find_drink};

use super::{is_htmx, with_store};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session::{load_cart, store_cart};
use crate::state::AppState;

const SAVED_NOTICE: &str = "Drink selection saved! This will be noted for the event.";
const EMPTY_NOTICE: &str = "No drinks selected yet. Add a drink before saving.";

/// A category tab.
pub struct TabView {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

fn tabs(active: DrinkCategory) -> Vec<TabView> {
    DrinkCategory::ALL
        .iter()
        .map(|&c| TabView {
            value: c.as_str(),
            label: c.label(),
            icon: c.icon(),
            active: c == active,
        })
        .collect()
}

/// Parse a category from the query or form, falling back to beer.
fn category_or_default(raw: Option<&str>) -> DrinkCategory {
    raw.and_then(|value| match value.parse() {
        Ok(category) => Some(category),
        Err(e) => {
            tracing::debug!("Ignoring category: {e}");
            None
        }
    })
    .unwrap_or_default()
}

/// Drinks page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DrinksQuery {
    pub category: Option<String>,
    #[serde(default)]
    pub saved: bool,
}

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartForm {
    pub drink_id: String,
    pub category: Option<String>,
}

/// Save selection form data.
#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    pub category: Option<String>,
}

/// Drinks page template.
#[derive(Template, WebTemplate)]
#[template(path = "drinks.html")]
pub struct DrinksTemplate {
    pub tabs: Vec<TabView>,
    pub category: DrinkCategory,
    pub drinks: Vec<&'static Drink>,
    pub cart: Cart,
    pub notice: Option<&'static str>,
    pub oob: bool,
}

/// Selection panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_update.html")]
pub struct CartUpdateTemplate {
    pub category: DrinkCategory,
    pub cart: Cart,
    pub notice: Option<&'static str>,
    /// Drink whose controls are visible on the current tab and need refreshing.
    pub changed: Option<&'static Drink>,
    pub oob: bool,
}

/// Display the drinks menu for one category.
#[instrument(skip(session))]
pub async fn index(session: Session, Query(query): Query<DrinksQuery>) -> impl IntoResponse {
    let category = category_or_default(query.category.as_deref());
    DrinksTemplate {
        tabs: tabs(category),
        category,
        drinks: category.drinks().collect(),
        cart: load_cart(&session).await,
        notice: query.saved.then_some(SAVED_NOTICE),
        oob: false,
    }
}

/// Add one serving of a drink to the cart (HTMX).
#[instrument(skip(session, headers))]
pub async fn add(
    session: Session,
    headers: HeaderMap,
    Form(form): Form<CartForm>,
) -> Result<Response> {
    let drink = find_drink(&form.drink_id)
        .ok_or_else(|| AppError::NotFound(format!("drink {}", form.drink_id)))?;

    let mut cart = load_cart(&session).await;
    cart.add(drink);
    store_cart(&session, &cart).await?;

    let category = category_or_default(form.category.as_deref());
    Ok(cart_response(&headers, category, cart, Some(drink), None))
}

/// Remove one serving of a drink from the cart (HTMX).
///
/// Removing a drink that is not in the cart changes nothing.
#[instrument(skip(session, headers))]
pub async fn remove(
    session: Session,
    headers: HeaderMap,
    Form(form): Form<CartForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    cart.remove(&form.drink_id);
    store_cart(&session, &cart).await?;

    let category = category_or_default(form.category.as_deref());
    let drink = find_drink(&form.drink_id);
    Ok(cart_response(&headers, category, cart, drink, None))
}

/// Persist the visitor's cart as the drink selection (HTMX).
///
/// The saved selection replaces whatever was saved before, by any visitor.
#[instrument(skip(state, session, headers))]
pub async fn save(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<SaveForm>,
) -> Result<Response> {
    let category = category_or_default(form.category.as_deref());
    let cart = load_cart(&session).await;

    if cart.is_empty() {
        return Ok(cart_response(&headers, category, cart, None, Some(EMPTY_NOTICE)));
    }

    add_breadcrumb("drinks", "Selection saved", None);
    let to_save = cart.clone();
    with_store(&state, move |store| store.save_selection(&to_save)).await??;

    if is_htmx(&headers) {
        Ok(cart_response(&headers, category, cart, None, Some(SAVED_NOTICE)))
    } else {
        Ok(Redirect::to(&format!("/drinks?category={category}&saved=true")).into_response())
    }
}

fn cart_response(
    headers: &HeaderMap,
    category: DrinkCategory,
    cart: Cart,
    changed: Option<&'static Drink>,
    notice: Option<&'static str>,
) -> Response {
    if !is_htmx(headers) {
        return Redirect::to(&format!("/drinks?category={category}")).into_response();
    }
    CartUpdateTemplate {
        category,
        cart,
        notice,
        changed: changed.filter(|drink| drink.category == category),
        oob: true,
    }
    .into_response()
}
