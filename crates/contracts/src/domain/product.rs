use crate::shared::lenient::f64_or_string;
use serde::{Deserialize, Serialize};

/// Category catalogue the Gateway accepts, as `(key, label)` pairs.
pub const CATEGORY_CHOICES: &[(&str, &str)] = &[
    ("electronics", "Electronics"),
    ("furniture", "Furniture"),
    ("apparel", "Apparel"),
    ("books", "Books"),
    ("kitchen", "Kitchen"),
    ("gaming", "Gaming"),
    ("beauty", "Beauty"),
    ("office", "Office"),
    ("sports", "Sports"),
    ("toys", "Toys"),
    ("groceries", "Groceries / Food & Beverages"),
    ("automotive", "Automotive / Vehicle Accessories"),
    ("health", "Health / Personal Care"),
    ("stationery", "Stationery / School Supplies"),
    ("home_decor", "Home Decor / Garden"),
];

/// Human label for a category key; unknown keys display as-is.
pub fn category_label(key: &str) -> String {
    CATEGORY_CHOICES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// An inventory item as the Gateway returns it. Stock is authoritative on
/// the Gateway side; the client only reflects the latest fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub min_stock: i64,
    #[serde(default)]
    pub max_stock: i64,
    #[serde(default, deserialize_with = "f64_or_string")]
    pub price: f64,
    #[serde(default, deserialize_with = "f64_or_string")]
    pub selling_price: f64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }
}

/// Payload for product create (`POST /products/`) and update
/// (`PUT /products/<id>/`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductForm {
    pub sku: String,
    pub product_name: String,
    pub category: String,
    pub current_stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub price: f64,
    pub selling_price: f64,
    pub supplier: String,
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            sku: p.sku.clone(),
            product_name: p.product_name.clone(),
            category: p.category.clone(),
            current_stock: p.current_stock,
            min_stock: p.min_stock,
            max_stock: p.max_stock,
            price: p.price,
            selling_price: p.selling_price,
            supplier: p.supplier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_known_and_unknown() {
        assert_eq!(category_label("groceries"), "Groceries / Food & Beverages");
        assert_eq!(category_label("misc"), "misc");
    }

    #[test]
    fn decimal_price_as_string_parses() {
        let p: Product = serde_json::from_str(
            r#"{"id": 1, "sku": "W-1", "product_name": "Widget", "price": "49.99"}"#,
        )
        .unwrap();
        assert_eq!(p.price, 49.99);
        assert_eq!(p.selling_price, 0.0);
    }
}
