pub mod api;
pub mod page;

pub use page::OrdersReturnsPage;

use contracts::domain::order::Order;
use contracts::domain::returns::ReturnRecord;

use crate::shared::list_utils::{any_field_contains, Searchable};

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[
                self.product_name.clone(),
                self.customer_name.clone(),
                self.order_id.clone(),
                self.tracking_id.clone(),
                self.quantity.to_string(),
            ],
            filter,
        )
    }
}

impl Searchable for ReturnRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[
                self.product_name.clone(),
                self.customer_name.clone(),
                self.order_id.clone(),
                self.tracking_id.clone(),
                self.quantity.to_string(),
            ],
            filter,
        )
    }
}
