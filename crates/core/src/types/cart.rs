//! A guest's in-progress drink selection.

use serde::{Deserialize, Serialize};

use super::drink::Drink;

/// A drink with the number of servings the guest wants.
///
/// Serializes flat: the drink's fields plus `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub drink: Drink,
    pub quantity: u32,
}

/// Drink selection keyed by drink ID.
///
/// ## Invariants
///
/// - At most one item per drink ID, kept in the order drinks were first added
/// - Every item has a quantity of at least 1; removing the last serving drops
///   the item
///
/// Deserialization goes through [`Cart::from_items`], so persisted data that
/// breaks these invariants is repaired on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from raw items, merging duplicate drinks and dropping
    /// items with a zero quantity.
    #[must_use]
    pub fn from_items(raw: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in raw {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(&item.drink.id) {
                Some(idx) => {
                    if let Some(existing) = cart.items.get_mut(idx) {
                        existing.quantity = existing.quantity.saturating_add(item.quantity);
                    }
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Current items in first-added order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add one serving of `drink`.
    pub fn add(&mut self, drink: &Drink) {
        match self.position(&drink.id) {
            Some(idx) => {
                if let Some(item) = self.items.get_mut(idx) {
                    item.quantity = item.quantity.saturating_add(1);
                }
            }
            None => self.items.push(CartItem {
                drink: drink.clone(),
                quantity: 1,
            }),
        }
    }

    /// Remove one serving of the drink with `drink_id`.
    ///
    /// Drops the item when its last serving is removed. Does nothing if the
    /// drink is not in the cart.
    pub fn remove(&mut self, drink_id: &str) {
        let Some(idx) = self.position(drink_id) else {
            return;
        };
        match self.items.get_mut(idx) {
            Some(item) if item.quantity > 1 => item.quantity -= 1,
            _ => {
                self.items.remove(idx);
            }
        }
    }

    /// Servings of a drink currently selected (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, drink_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.drink.id == drink_id)
            .map_or(0, |item| item.quantity)
    }

    /// Total servings across all drinks.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, drink_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.drink.id == drink_id)
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::drink::find_drink;

    fn beer() -> &'static Drink {
        find_drink("windhoek-lager").unwrap()
    }

    fn wine() -> &'static Drink {
        find_drink("kristall-kellerei-red").unwrap()
    }

    #[test]
    fn test_add_twice_remove_once_leaves_one() {
        let mut cart = Cart::new();
        cart.add(beer());
        cart.add(beer());
        cart.remove(&beer().id);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(&beer().id), 1);
    }

    #[test]
    fn test_add_then_remove_restores_prior_cart() {
        let mut cart = Cart::new();
        cart.add(wine());
        cart.add(beer());
        let before = cart.clone();

        cart.add(beer());
        cart.remove(&beer().id);
        assert_eq!(cart, before);

        let mut empty = Cart::new();
        empty.add(beer());
        empty.remove(&beer().id);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add(beer());
        let before = cart.clone();
        cart.remove("not-a-drink");
        assert_eq!(cart, before);

        let mut empty = Cart::new();
        empty.remove(&beer().id);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_items_keep_first_added_order() {
        let mut cart = Cart::new();
        cart.add(wine());
        cart.add(beer());
        cart.add(wine());
        let ids: Vec<_> = cart.items().iter().map(|i| i.drink.id.as_str()).collect();
        assert_eq!(ids, ["kristall-kellerei-red", "windhoek-lager"]);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_serializes_flat() {
        let mut cart = Cart::new();
        cart.add(beer());
        let json = serde_json::to_value(&cart).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["id"], "windhoek-lager");
        assert_eq!(first["category"], "beer");
        assert_eq!(first["quantity"], 1);
    }

    #[test]
    fn test_deserialize_repairs_invariants() {
        let json = serde_json::json!([
            { "id": "sprite", "name": "Sprite", "category": "soft", "image": "", "description": "", "quantity": 2 },
            { "id": "otombo", "name": "Otombo", "category": "traditional", "image": "", "description": "", "quantity": 0 },
            { "id": "sprite", "name": "Sprite", "category": "soft", "image": "", "description": "", "quantity": 1 }
        ]);
        let cart: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("sprite"), 3);
        assert_eq!(cart.quantity_of("otombo"), 0);
    }
}
