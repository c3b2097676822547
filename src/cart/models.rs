//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

/// Represents an item held in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Display name of the product
    pub title: String,

    /// Short product description
    pub description: String,

    /// Price of the item
    pub cost: f64,

    /// Product image file name
    pub image_url: String,
}

/// A named collection of items, identified by a client-supplied id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Client-supplied identifier; empty when the field was absent,
    /// which the create handler rejects
    #[serde(rename = "cartID", default)]
    pub cart_id: String,

    /// Items in the cart, kept in the order they were supplied
    #[serde(rename = "cartItems", default)]
    pub cart_items: Vec<CartItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cart_uses_wire_field_names() {
        let cart: Cart = serde_json::from_value(json!({
            "cartID": "1",
            "cartItems": [{
                "title": "Milk",
                "description": "Whole, 1L",
                "cost": 120.0,
                "imageUrl": "milk.jpg"
            }]
        }))
        .unwrap();

        assert_eq!(cart.cart_id, "1");
        assert_eq!(cart.cart_items[0].image_url, "milk.jpg");

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["cartID"], "1");
        assert_eq!(value["cartItems"][0]["imageUrl"], "milk.jpg");
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let cart: Cart = serde_json::from_value(json!({})).unwrap();

        assert!(cart.cart_id.is_empty());
        assert!(cart.cart_items.is_empty());
    }
}
