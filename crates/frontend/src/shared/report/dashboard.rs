//! Reconciliation export: products joined with per-business order and
//! return quantities. The column set is only known once the business list
//! has been enumerated, so the table is built dynamically.

use std::collections::HashMap;

use contracts::domain::business::Business;
use contracts::domain::order::Order;
use contracts::domain::product::Product;
use contracts::domain::returns::ReturnRecord;
use rust_xlsxwriter::XlsxError;

use super::{single_sheet_workbook, Cell, ReportTable, TotalsSpec};

pub const FIXED_HEADERS: [&str; 11] = [
    "id",
    "product name",
    "sku",
    "unit price",
    "max stock",
    "selling qty",
    "return qty",
    "final selling qty",
    "current stock",
    "sell qty amount",
    "purchase qty amount",
];

/// One business's order/return activity, keyed by product name.
#[derive(Debug, Clone)]
pub struct BusinessActivity {
    pub business: Business,
    pub sold: HashMap<String, i64>,
    pub returned: HashMap<String, i64>,
}

impl BusinessActivity {
    pub fn from_records(business: Business, orders: &[Order], returns: &[ReturnRecord]) -> Self {
        let mut sold: HashMap<String, i64> = HashMap::new();
        for order in orders {
            *sold.entry(order.product_name.clone()).or_default() += order.quantity;
        }
        let mut returned: HashMap<String, i64> = HashMap::new();
        for ret in returns {
            *returned.entry(ret.product_name.clone()).or_default() += ret.quantity;
        }
        Self {
            business,
            sold,
            returned,
        }
    }

    fn sold_of(&self, product_name: &str) -> i64 {
        self.sold.get(product_name).copied().unwrap_or(0)
    }

    fn returned_of(&self, product_name: &str) -> i64 {
        self.returned.get(product_name).copied().unwrap_or(0)
    }
}

/// The fixed columns followed by an `orders (...)`/`returns (...)` pair per
/// business.
pub fn report_headers(activity: &[BusinessActivity]) -> Vec<String> {
    let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
    for entry in activity {
        let name = entry.business.display_name();
        headers.push(format!("orders ({})", name));
        headers.push(format!("returns ({})", name));
    }
    headers
}

/// Columns whose totals cell gets a `SUM` formula.
pub fn is_summable_header(header: &str) -> bool {
    let lower = header.to_lowercase();
    lower == "selling qty"
        || lower == "return qty"
        || lower == "final selling qty"
        || lower == "sell qty amount"
        || lower == "purchase qty amount"
        || lower.starts_with("orders (")
        || lower.starts_with("returns (")
}

pub fn dashboard_table(products: &[Product], activity: &[BusinessActivity]) -> ReportTable {
    let rows = products
        .iter()
        .map(|p| {
            let unit_price = p.price;
            let max_stock = p.max_stock;
            // Totals sum over every business, wherever the order was placed.
            let selling_qty: i64 = activity.iter().map(|a| a.sold_of(&p.product_name)).sum();
            let return_qty: i64 = activity
                .iter()
                .map(|a| a.returned_of(&p.product_name))
                .sum();
            let final_selling_qty = selling_qty - return_qty;
            let sell_qty_amount = final_selling_qty as f64 * unit_price;
            let purchase_qty_amount = unit_price * max_stock as f64;

            let mut row = vec![
                Cell::Int(p.id),
                Cell::Text(p.product_name.clone()),
                Cell::Text(p.sku.clone()),
                Cell::Number(unit_price),
                Cell::Int(max_stock),
                Cell::Int(selling_qty),
                Cell::Int(return_qty),
                Cell::Int(final_selling_qty),
                Cell::Int(p.current_stock),
                Cell::Number(sell_qty_amount),
                Cell::Number(purchase_qty_amount),
            ];
            for entry in activity {
                row.push(Cell::Int(entry.sold_of(&p.product_name)));
                row.push(Cell::Int(entry.returned_of(&p.product_name)));
            }
            row
        })
        .collect();

    ReportTable {
        headers: report_headers(activity),
        rows,
    }
}

/// TOTAL label in the second column, formulas in every summable column.
pub fn totals_spec(table: &ReportTable) -> TotalsSpec {
    TotalsSpec {
        label_col: 1,
        sum_cols: table
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| is_summable_header(h))
            .map(|(i, _)| i as u16)
            .collect(),
    }
}

/// Build the `dashboard_report_<ts>.xlsx` workbook.
pub fn build_workbook(
    products: &[Product],
    activity: &[BusinessActivity],
) -> Result<Vec<u8>, XlsxError> {
    let table = dashboard_table(products, activity);
    let totals = totals_spec(&table);
    single_sheet_workbook("Dashboard Report", &table, Some(&totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn business(id: i64, name: &str) -> Business {
        Business {
            id,
            business_name: name.to_string(),
            business_type: String::new(),
            contact_number: String::new(),
            gst_tax_id: String::new(),
            business_address: String::new(),
            department_branch: String::new(),
        }
    }

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            id,
            sku: format!("SKU-{}", id),
            product_name: name.to_string(),
            category: String::new(),
            current_stock: 10,
            min_stock: 2,
            max_stock: 20,
            price,
            selling_price: price,
            supplier: String::new(),
            updated_at: String::new(),
        }
    }

    fn order(product_name: &str, quantity: i64) -> Order {
        Order {
            id: 1,
            order_id: "O-1".to_string(),
            tracking_id: "T-1".to_string(),
            product_name: product_name.to_string(),
            quantity,
            customer_name: "Acme".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            is_returned: false,
        }
    }

    fn ret(product_name: &str, quantity: i64) -> ReturnRecord {
        ReturnRecord {
            id: 1,
            order: 1,
            product_name: product_name.to_string(),
            customer_name: "Acme".to_string(),
            order_id: "O-1".to_string(),
            tracking_id: "T-1".to_string(),
            quantity,
            date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        }
    }

    fn two_business_activity() -> Vec<BusinessActivity> {
        vec![
            BusinessActivity::from_records(
                business(1, "North"),
                &[order("Widget", 3), order("Widget", 2)],
                &[ret("Widget", 1)],
            ),
            BusinessActivity::from_records(
                business(2, "South"),
                &[order("Widget", 4)],
                &[],
            ),
        ]
    }

    #[test]
    fn two_columns_per_business_after_the_fixed_set() {
        let headers = report_headers(&two_business_activity());
        assert_eq!(headers.len(), FIXED_HEADERS.len() + 4);
        assert_eq!(headers[11], "orders (North)");
        assert_eq!(headers[12], "returns (North)");
        assert_eq!(headers[13], "orders (South)");
        assert_eq!(headers[14], "returns (South)");
    }

    #[test]
    fn final_selling_qty_is_sales_minus_returns_across_businesses() {
        let products = vec![product(1, "Widget", 10.0)];
        let table = dashboard_table(&products, &two_business_activity());
        let row = &table.rows[0];
        assert_eq!(row[5], Cell::Int(9)); // selling qty: 3+2+4
        assert_eq!(row[6], Cell::Int(1)); // return qty
        assert_eq!(row[7], Cell::Int(8)); // final selling qty
        assert_eq!(row[9], Cell::Number(80.0)); // final qty * unit price
        assert_eq!(row[10], Cell::Number(200.0)); // unit price * max stock
    }

    #[test]
    fn per_business_columns_hold_that_business_only() {
        let products = vec![product(1, "Widget", 10.0)];
        let table = dashboard_table(&products, &two_business_activity());
        let row = &table.rows[0];
        assert_eq!(row[11], Cell::Int(5)); // orders (North)
        assert_eq!(row[12], Cell::Int(1)); // returns (North)
        assert_eq!(row[13], Cell::Int(4)); // orders (South)
        assert_eq!(row[14], Cell::Int(0)); // returns (South)
    }

    #[test]
    fn products_with_no_activity_get_zero_rows_not_gaps() {
        let products = vec![product(2, "Gadget", 5.0)];
        let table = dashboard_table(&products, &two_business_activity());
        let row = &table.rows[0];
        assert_eq!(row[5], Cell::Int(0));
        assert_eq!(row[7], Cell::Int(0));
        assert_eq!(row[11], Cell::Int(0));
    }

    #[test]
    fn summable_headers_are_the_quantity_and_amount_columns() {
        assert!(is_summable_header("selling qty"));
        assert!(is_summable_header("Final Selling Qty"));
        assert!(is_summable_header("orders (North)"));
        assert!(is_summable_header("returns (South)"));
        assert!(!is_summable_header("unit price"));
        assert!(!is_summable_header("max stock"));
        assert!(!is_summable_header("sku"));
    }

    #[test]
    fn totals_spec_targets_every_summable_column() {
        let products = vec![product(1, "Widget", 10.0)];
        let table = dashboard_table(&products, &two_business_activity());
        let spec = totals_spec(&table);
        assert_eq!(spec.label_col, 1);
        assert_eq!(spec.sum_cols, vec![5, 6, 7, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn workbook_builds_with_dynamic_columns() {
        let products = vec![product(1, "Widget", 10.0)];
        let bytes = build_workbook(&products, &two_business_activity()).unwrap();
        assert!(!bytes.is_empty());
    }
}
