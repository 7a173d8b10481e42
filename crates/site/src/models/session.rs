//! Session-stored visitor state.
//!
//! Each visitor's drink cart and dashboard login live in their own session;
//! nothing here is shared between visitors.

use aris_farm_core::Cart;
use tower_sessions::Session;

/// Session keys for visitor state.
pub mod keys {
    /// Set to `true` once the visitor has logged in to the dashboard.
    pub const ADMIN_LOGGED_IN: &str = "adminLoggedIn";

    /// The visitor's in-progress drink cart.
    pub const CART: &str = "cart";
}

/// Load the visitor's cart, empty if none or unreadable.
pub async fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(keys::CART).await {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read cart from session: {e}");
            Cart::new()
        }
    }
}

/// Store the visitor's cart.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Whether the visitor has logged in to the dashboard.
pub async fn is_admin(session: &Session) -> bool {
    session
        .get::<bool>(keys::ADMIN_LOGGED_IN)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Mark the visitor as logged in to the dashboard.
///
/// Cycles the session ID first so a pre-login cookie cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(keys::ADMIN_LOGGED_IN, true).await
}

/// Clear the dashboard login (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<bool>(keys::ADMIN_LOGGED_IN).await?;
    Ok(())
}
