//! In-Memory Cart Storage
//!
//! The store owns an ordered sequence of carts for the lifetime of the
//! process. Lookup is a linear scan in insertion order and creation is an
//! append; nothing is ever updated or removed. Ids are not checked for
//! uniqueness, so a duplicate coexists with the original and lookup keeps
//! returning the earliest insertion.

use super::models::{Cart, CartItem};
use std::sync::RwLock;

/// Holds all carts, guarded for access from concurrent request handlers.
///
/// The guard is never held across an await point; each operation runs to
/// completion under the lock.
pub struct CartStore {
    carts: RwLock<Vec<Cart>>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            carts: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with the demo carts.
    pub fn seeded() -> Self {
        let carts = demo_carts();
        tracing::info!("Cart store seeded with {} carts", carts.len());

        Self {
            carts: RwLock::new(carts),
        }
    }

    /// Returns the first cart whose id matches exactly, if any.
    ///
    /// Matching is case-sensitive. Repeated calls on an unmutated store
    /// return the same result.
    pub fn find(&self, cart_id: &str) -> Option<Cart> {
        self.carts
            .read()
            .unwrap()
            .iter()
            .find(|cart| cart.cart_id == cart_id)
            .cloned()
    }

    /// Appends a cart to the end of the sequence and echoes it back.
    pub fn append(&self, cart: Cart) -> Cart {
        self.carts.write().unwrap().push(cart.clone());
        cart
    }

    /// Number of carts currently held.
    pub fn len(&self) -> usize {
        self.carts.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The two carts the service starts with.
fn demo_carts() -> Vec<Cart> {
    vec![
        Cart {
            cart_id: "777".to_string(),
            cart_items: vec![
                CartItem {
                    title: "Fresh Strawberries".to_string(),
                    description: "Assorted sizes, 2 cartons".to_string(),
                    cost: 200.0,
                    image_url: "stawberries.jpg".to_string(),
                },
                CartItem {
                    title: "Fresh Blackberries".to_string(),
                    description: "Assorted sizes, 2 cartons".to_string(),
                    cost: 295.0,
                    image_url: "blackberries.jpg".to_string(),
                },
            ],
        },
        Cart {
            cart_id: "888".to_string(),
            cart_items: vec![CartItem {
                title: "Yummy cookies".to_string(),
                description: "Flour and chocolate chips".to_string(),
                cost: 150.0,
                image_url: "cookies.jpg".to_string(),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart(id: &str, titles: &[&str]) -> Cart {
        Cart {
            cart_id: id.to_string(),
            cart_items: titles
                .iter()
                .map(|title| CartItem {
                    title: title.to_string(),
                    description: String::new(),
                    cost: 0.0,
                    image_url: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = CartStore::new();
        assert!(store.is_empty());
        assert!(store.find("777").is_none());
    }

    #[test]
    fn seeded_store_holds_the_demo_carts() {
        let store = CartStore::seeded();
        assert_eq!(store.len(), 2);

        let berries = store.find("777").unwrap();
        assert_eq!(berries.cart_items.len(), 2);
        assert_eq!(berries.cart_items[0].title, "Fresh Strawberries");
        assert_eq!(berries.cart_items[1].title, "Fresh Blackberries");

        let cookies = store.find("888").unwrap();
        assert_eq!(cookies.cart_items.len(), 1);
        assert_eq!(cookies.cart_items[0].title, "Yummy cookies");
    }

    #[test]
    fn append_echoes_the_cart_unchanged() {
        let store = CartStore::new();
        let stored = store.append(cart("1", &["Apple"]));

        assert_eq!(stored, cart("1", &["Apple"]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let store = CartStore::new();
        store.append(cart("1", &[]));

        assert!(store.find("2").is_none());
    }

    #[test]
    fn find_is_case_sensitive() {
        let store = CartStore::new();
        store.append(cart("abc", &[]));

        assert!(store.find("abc").is_some());
        assert!(store.find("ABC").is_none());
    }

    #[test]
    fn duplicate_ids_are_kept_and_lookup_returns_the_earliest() {
        let store = CartStore::new();
        store.append(cart("1", &["First"]));
        store.append(cart("1", &["Second"]));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find("1").unwrap().cart_items[0].title, "First");
    }

    #[test]
    fn repeated_lookup_without_writes_is_stable() {
        let store = CartStore::seeded();

        let first = store.find("777");
        let second = store.find("777");
        assert_eq!(first, second);
    }
}
