use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An order as the Gateway returns it. `order_id` is the user-supplied
/// business reference; `id` is the Gateway's internal key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub tracking_id: String,
    pub product_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub customer_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_returned: bool,
}

/// Payload for `POST /orders/add/`. The Gateway decrements the product's
/// stock as a side effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub order_id: String,
    pub tracking_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub customer_name: String,
    pub date: NaiveDate,
}
