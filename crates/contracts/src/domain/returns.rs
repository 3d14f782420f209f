use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded return. Always created from an existing order; the Gateway
/// restores the product's stock when one is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub id: i64,
    /// Internal id of the source order.
    pub order: i64,
    pub product_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub tracking_id: String,
    pub quantity: i64,
    pub date: NaiveDate,
}

/// Payload for `POST /returns/add/` — the source order's id, its full
/// quantity, and the date the return is recorded under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReturn {
    pub order: i64,
    pub quantity: i64,
    pub date: NaiveDate,
}
