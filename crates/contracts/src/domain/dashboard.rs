use crate::shared::lenient::f64_or_string;
use serde::Deserialize;

/// Aggregate the Gateway computes for the dashboard page. Every member
/// defaults so a partial payload still renders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "f64_or_string")]
    pub total_sales: f64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default, deserialize_with = "f64_or_string")]
    pub net_profit: f64,
    #[serde(default)]
    pub total_returns: i64,
    #[serde(default)]
    pub top_sales: Vec<TopSale>,
    #[serde(default)]
    pub low_stock_products: Vec<LowStockProduct>,
    #[serde(default)]
    pub sales_chart_data: Vec<SalesPoint>,
    #[serde(default)]
    pub category_chart_data: Vec<CategorySlice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopSale {
    pub product_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default, deserialize_with = "f64_or_string")]
    pub revenue: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LowStockProduct {
    pub product_name: String,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub min_stock: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalesPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "f64_or_string")]
    pub sales: f64,
}

/// Category breakdown row. Older Gateway builds emit `category`/`count`,
/// newer ones `name`/`value`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategorySlice {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_or_string")]
    pub value: Option<f64>,
}

fn opt_f64_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64_or_string(deserializer).map(Some)
}

impl CategorySlice {
    pub fn label(&self) -> String {
        self.category
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_default()
    }

    pub fn amount(&self) -> f64 {
        self.count.or(self.value).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_slice_tolerates_both_shapes() {
        let old: CategorySlice =
            serde_json::from_str(r#"{"category": "books", "count": 4}"#).unwrap();
        assert_eq!(old.label(), "books");
        assert_eq!(old.amount(), 4.0);

        let new: CategorySlice = serde_json::from_str(r#"{"name": "toys", "value": 2}"#).unwrap();
        assert_eq!(new.label(), "toys");
        assert_eq!(new.amount(), 2.0);
    }

    #[test]
    fn summary_defaults_on_partial_payload() {
        let s: DashboardSummary =
            serde_json::from_str(r#"{"total_sales": "150.50", "total_orders": 3}"#).unwrap();
        assert_eq!(s.total_sales, 150.50);
        assert_eq!(s.total_orders, 3);
        assert!(s.top_sales.is_empty());
    }
}
