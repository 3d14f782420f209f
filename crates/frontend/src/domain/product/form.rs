//! Local validation for the product add/edit form.

use std::collections::BTreeMap;

use contracts::domain::product::{Product, ProductForm};

/// Field-keyed errors; empty map means the form may be submitted.
/// `editing_id` is the product being edited, if any — its own sku does not
/// count as a duplicate.
pub fn validate_product(
    form: &ProductForm,
    products: &[Product],
    editing_id: Option<i64>,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    if form.product_name.trim().is_empty() {
        errors.insert("product_name".into(), "Product name is required".into());
    }
    if form.sku.trim().is_empty() {
        errors.insert("sku".into(), "SKU is required".into());
    }
    if form.category.is_empty() {
        errors.insert("category".into(), "Category is required".into());
    }
    if form.price <= 0.0 {
        errors.insert("price".into(), "Price is required".into());
    }
    if form.selling_price <= 0.0 {
        errors.insert("selling_price".into(), "Selling price is required".into());
    }
    if form.supplier.trim().is_empty() {
        errors.insert("supplier".into(), "Supplier is required".into());
    }

    let duplicate = products
        .iter()
        .any(|p| p.sku == form.sku && Some(p.id) != editing_id);
    if duplicate {
        errors.insert("sku".into(), "SKU already exists!".into());
    }

    errors
}

/// Client-side list filtering: search over sku and name, plus the category
/// dropdown ("All" disables it).
pub fn filter_products(products: &[Product], search: &str, category: &str) -> Vec<Product> {
    let query = search.to_lowercase();
    products
        .iter()
        .filter(|p| {
            let matches_search = p.sku.to_lowercase().contains(&query)
                || p.product_name.to_lowercase().contains(&query);
            let matches_category = category == "All" || p.category == category;
            matches_search && matches_category
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, sku: &str, name: &str, category: &str) -> Product {
        Product {
            id,
            sku: sku.to_string(),
            product_name: name.to_string(),
            category: category.to_string(),
            current_stock: 0,
            min_stock: 0,
            max_stock: 0,
            price: 1.0,
            selling_price: 1.0,
            supplier: "Acme".to_string(),
            updated_at: String::new(),
        }
    }

    fn valid_form() -> ProductForm {
        ProductForm {
            sku: "W-1".into(),
            product_name: "Widget".into(),
            category: "office".into(),
            current_stock: 3,
            min_stock: 1,
            max_stock: 10,
            price: 9.5,
            selling_price: 12.0,
            supplier: "Acme".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate_product(&valid_form(), &[], None).is_empty());
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let errors = validate_product(&ProductForm::default(), &[], None);
        for field in [
            "product_name",
            "sku",
            "category",
            "price",
            "selling_price",
            "supplier",
        ] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }

    #[test]
    fn duplicate_sku_is_rejected_for_new_products() {
        let existing = vec![product(1, "W-1", "Widget", "office")];
        let errors = validate_product(&valid_form(), &existing, None);
        assert_eq!(errors.get("sku").unwrap(), "SKU already exists!");
    }

    #[test]
    fn own_sku_is_not_a_duplicate_when_editing() {
        let existing = vec![product(1, "W-1", "Widget", "office")];
        assert!(validate_product(&valid_form(), &existing, Some(1)).is_empty());
    }

    #[test]
    fn filter_matches_sku_or_name_and_category() {
        let products = vec![
            product(1, "W-1", "Widget", "office"),
            product(2, "G-1", "Gadget", "gaming"),
        ];
        assert_eq!(filter_products(&products, "wid", "All").len(), 1);
        assert_eq!(filter_products(&products, "g-1", "All").len(), 1);
        assert_eq!(filter_products(&products, "", "gaming").len(), 1);
        assert_eq!(filter_products(&products, "widget", "gaming").len(), 0);
    }
}
