//! Dashboard aggregate fetch and the per-business fan-out behind the
//! reconciliation export.

use contracts::domain::business::Business;
use contracts::domain::dashboard::DashboardSummary;
use contracts::domain::order::Order;
use contracts::domain::returns::ReturnRecord;
use futures::future::{try_join, try_join_all};

use crate::shared::api::{api_url, QueryParams};
use crate::shared::error::ApiError;
use crate::shared::http;
use crate::shared::report::dashboard::BusinessActivity;

pub async fn fetch_summary(selected: &str) -> Result<DashboardSummary, ApiError> {
    let mut query = QueryParams::new();
    query.set("business", selected);
    http::get_json(&query.append_to(&api_url("/dashboard/"))).await
}

/// Trim the aggregate to what the page actually renders: five top sellers,
/// five low-stock products, the last 30 chart points, seven category
/// slices.
pub fn limit_summary(mut summary: DashboardSummary) -> DashboardSummary {
    summary.top_sales.truncate(5);
    summary.low_stock_products.truncate(5);
    let len = summary.sales_chart_data.len();
    if len > 30 {
        summary.sales_chart_data.drain(..len - 30);
    }
    summary.category_chart_data.truncate(7);
    summary
}

/// Fetch every business's full (undated) order and return history, all
/// businesses in flight at once. One failed fetch fails the whole export —
/// a partial workbook is worse than none.
pub async fn fetch_business_activity(
    businesses: Vec<Business>,
) -> Result<Vec<BusinessActivity>, ApiError> {
    try_join_all(businesses.into_iter().map(|business| async move {
        let mut query = QueryParams::new();
        query.set("business", business.id);
        let orders_url = query.append_to(&api_url("/orders/"));
        let returns_url = query.append_to(&api_url("/returns/"));
        let (orders, returns): (Vec<Order>, Vec<ReturnRecord>) = try_join(
            http::get_json(&orders_url),
            http::get_json(&returns_url),
        )
        .await?;
        Ok::<_, ApiError>(BusinessActivity::from_records(business, &orders, &returns))
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::dashboard::{LowStockProduct, SalesPoint, TopSale};

    #[test]
    fn limit_trims_lists_and_keeps_the_latest_chart_points() {
        let summary = DashboardSummary {
            top_sales: (0..8)
                .map(|i| TopSale {
                    product_name: format!("P{}", i),
                    quantity: i,
                    revenue: 0.0,
                })
                .collect(),
            low_stock_products: (0..7)
                .map(|i| LowStockProduct {
                    product_name: format!("P{}", i),
                    current_stock: 0,
                    min_stock: 1,
                })
                .collect(),
            sales_chart_data: (0..40)
                .map(|i| SalesPoint {
                    date: format!("2024-01-{:02}", i + 1),
                    sales: i as f64,
                })
                .collect(),
            ..Default::default()
        };
        let limited = limit_summary(summary);
        assert_eq!(limited.top_sales.len(), 5);
        assert_eq!(limited.low_stock_products.len(), 5);
        assert_eq!(limited.sales_chart_data.len(), 30);
        // The tail survives, not the head.
        assert_eq!(limited.sales_chart_data[0].sales, 10.0);
    }

    #[test]
    fn limit_leaves_short_lists_alone() {
        let summary = DashboardSummary {
            top_sales: vec![TopSale {
                product_name: "P".into(),
                quantity: 1,
                revenue: 5.0,
            }],
            ..Default::default()
        };
        assert_eq!(limit_summary(summary).top_sales.len(), 1);
    }
}
