//! Product inventory export: one data sheet plus a summary sheet.

use contracts::domain::product::Product;
use rust_xlsxwriter::{Workbook, XlsxError};

use super::{write_table, Cell, ReportTable, TotalsSpec};

pub const HEADERS: [&str; 8] = [
    "id",
    "Product name",
    "sku",
    "max stock",
    "current stock",
    "unit price",
    "Selling price",
    "total price",
];

/// `total price` lives in column H; the TOTAL label goes in the column
/// before it.
const TOTAL_PRICE_COL: u16 = 7;
const TOTAL_LABEL_COL: u16 = 6;

pub fn products_table(products: &[Product]) -> ReportTable {
    let rows = products
        .iter()
        .map(|p| {
            vec![
                Cell::Int(p.id),
                Cell::Text(p.product_name.clone()),
                Cell::Text(p.sku.clone()),
                Cell::Int(p.max_stock),
                Cell::Int(p.current_stock),
                Cell::Number(p.price),
                Cell::Number(p.selling_price),
                Cell::Number(p.price * p.max_stock as f64),
            ]
        })
        .collect();
    ReportTable {
        headers: HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

pub fn totals_spec() -> TotalsSpec {
    TotalsSpec {
        label_col: TOTAL_LABEL_COL,
        sum_cols: vec![TOTAL_PRICE_COL],
    }
}

pub fn total_stock(products: &[Product]) -> i64 {
    products.iter().map(|p| p.max_stock).sum()
}

pub fn total_inventory_value(products: &[Product]) -> f64 {
    products.iter().map(|p| p.price * p.max_stock as f64).sum()
}

fn summary_table(products: &[Product]) -> ReportTable {
    let mut rows: Vec<Vec<Cell>> = products
        .iter()
        .map(|p| {
            vec![
                Cell::Text(p.product_name.clone()),
                Cell::Int(p.max_stock),
                Cell::Number(p.price * p.max_stock as f64),
            ]
        })
        .collect();
    rows.push(vec![]);
    rows.push(vec![
        Cell::Text("Total stock (sum of max stock)".to_string()),
        Cell::Int(total_stock(products)),
    ]);
    rows.push(vec![
        Cell::Text("Total inventory value".to_string()),
        Cell::Number(total_inventory_value(products)),
    ]);
    ReportTable {
        headers: vec![
            "Product name".to_string(),
            "Max stock".to_string(),
            "Total price".to_string(),
        ],
        rows,
    }
}

/// Build the `products_<ts>.xlsx` workbook: the "Products" sheet with its
/// formula totals row and the "Summary" sheet with literal grand totals.
pub fn build_workbook(products: &[Product]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Products")?;
    write_table(sheet, &products_table(products), Some(&totals_spec()))?;

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")?;
    write_table(summary, &summary_table(products), None)?;

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::report::sum_formula;

    fn product(id: i64, name: &str, price: f64, max_stock: i64) -> Product {
        Product {
            id,
            sku: format!("SKU-{}", id),
            product_name: name.to_string(),
            category: "office".to_string(),
            current_stock: 5,
            min_stock: 1,
            max_stock,
            price,
            selling_price: price * 1.2,
            supplier: "Acme".to_string(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn table_has_the_fixed_column_set() {
        let table = products_table(&[product(1, "Widget", 10.0, 3)]);
        assert_eq!(table.headers, HEADERS);
    }

    #[test]
    fn total_price_is_unit_price_times_max_stock() {
        let table = products_table(&[product(1, "Widget", 10.0, 3)]);
        assert_eq!(
            table.rows[0][TOTAL_PRICE_COL as usize],
            Cell::Number(30.0)
        );
    }

    #[test]
    fn totals_formula_covers_every_data_row() {
        // Three products: data occupies rows 2..=4 (1-based), so the totals
        // cell in H must sum exactly that span.
        let products = vec![
            product(1, "Widget", 10.0, 3),
            product(2, "Gadget", 5.0, 2),
            product(3, "Gizmo", 2.5, 8),
        ];
        let table = products_table(&products);
        let last_data_row = table.rows.len() as u32 + 1;
        assert_eq!(
            sum_formula(TOTAL_PRICE_COL, 2, last_data_row),
            "=SUM(H2:H4)"
        );
        assert_eq!(totals_spec().label_col, 6);
        assert_eq!(totals_spec().sum_cols, vec![7]);
    }

    #[test]
    fn grand_totals_sum_all_products() {
        let products = vec![product(1, "Widget", 10.0, 3), product(2, "Gadget", 5.0, 2)];
        assert_eq!(total_stock(&products), 5);
        assert_eq!(total_inventory_value(&products), 40.0);
    }

    #[test]
    fn workbook_builds_for_nonempty_inventory() {
        let bytes = build_workbook(&[product(1, "Widget", 10.0, 3)]).unwrap();
        assert!(!bytes.is_empty());
    }
}
