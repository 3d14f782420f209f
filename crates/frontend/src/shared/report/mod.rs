//! Workbook construction for the export flows.
//!
//! Each export builds a [`ReportTable`] first (pure, testable), then writes
//! it to an xlsx worksheet. Totals rows hold real `SUM` formulas over the
//! data range, so the file stays correct when recalculated after editing.

pub mod dashboard;
pub mod products;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet, XlsxError};

/// One cell of a built report.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Number(f64),
}

/// A fully computed tabular report, header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Where the totals row puts its label and which columns get a `SUM`.
#[derive(Debug, Clone)]
pub struct TotalsSpec {
    pub label_col: u16,
    pub sum_cols: Vec<u16>,
}

/// 0-based column index to spreadsheet letters (0 -> "A", 26 -> "AA").
pub fn col_to_letter(col: u16) -> String {
    let mut result = String::new();
    let mut n = col as u32;
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// `=SUM(H2:H11)`-style formula over a 1-based row span of one column.
pub fn sum_formula(col: u16, first_row: u32, last_row: u32) -> String {
    let letter = col_to_letter(col);
    format!("=SUM({}{}:{}{})", letter, first_row, letter, last_row)
}

struct SheetFormats {
    header: Format,
    cell: Format,
    total: Format,
}

fn sheet_formats() -> SheetFormats {
    let header = Format::new()
        .set_bold()
        .set_font_color(0xFFFFFF)
        .set_background_color(0x2563EB)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let cell = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let total = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    SheetFormats {
        header,
        cell,
        total,
    }
}

const COLUMN_WIDTH: f64 = 18.0;
const HEADER_HEIGHT: f64 = 24.0;

/// Write a table to a worksheet: styled header, centered data cells, and —
/// when a [`TotalsSpec`] is given and there is data — a totals row whose
/// numeric cells are formulas over the data range.
pub fn write_table(
    sheet: &mut Worksheet,
    table: &ReportTable,
    totals: Option<&TotalsSpec>,
) -> Result<(), XlsxError> {
    let formats = sheet_formats();

    for (col, header) in table.headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, header.as_str(), &formats.header)?;
        sheet.set_column_width(col as u16, COLUMN_WIDTH)?;
    }
    sheet.set_row_height(0, HEADER_HEIGHT)?;

    for (i, row) in table.rows.iter().enumerate() {
        let row_idx = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => sheet.write_with_format(row_idx, col, s.as_str(), &formats.cell)?,
                Cell::Int(n) => sheet.write_with_format(row_idx, col, *n, &formats.cell)?,
                Cell::Number(n) => sheet.write_with_format(row_idx, col, *n, &formats.cell)?,
            };
        }
    }

    if let (Some(spec), false) = (totals, table.rows.is_empty()) {
        let total_row = table.rows.len() as u32 + 1;
        // 1-based bounds of the data range the formulas sum over.
        let first_data = 2;
        let last_data = table.rows.len() as u32 + 1;
        sheet.write_with_format(total_row, spec.label_col, "TOTAL", &formats.total)?;
        for &col in &spec.sum_cols {
            sheet.write_formula_with_format(
                total_row,
                col,
                sum_formula(col, first_data, last_data).as_str(),
                &formats.total,
            )?;
        }
    }

    Ok(())
}

/// Convenience: one table, one named sheet, buffered bytes out.
pub fn single_sheet_workbook(
    sheet_name: &str,
    table: &ReportTable,
    totals: Option<&TotalsSpec>,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;
    write_table(sheet, table, totals)?;
    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn col_to_letter_works() {
        assert_eq!(col_to_letter(0), "A");
        assert_eq!(col_to_letter(7), "H");
        assert_eq!(col_to_letter(25), "Z");
        assert_eq!(col_to_letter(26), "AA");
        assert_eq!(col_to_letter(51), "AZ");
        assert_eq!(col_to_letter(52), "BA");
    }

    #[test]
    fn sum_formula_spans_the_requested_rows() {
        assert_eq!(sum_formula(7, 2, 11), "=SUM(H2:H11)");
        assert_eq!(sum_formula(0, 2, 2), "=SUM(A2:A2)");
    }

    #[test]
    fn single_sheet_workbook_produces_bytes() {
        let table = ReportTable {
            headers: vec!["name".into(), "qty".into()],
            rows: vec![
                vec![Cell::Text("Widget".into()), Cell::Int(3)],
                vec![Cell::Text("Gadget".into()), Cell::Int(5)],
            ],
        };
        let spec = TotalsSpec {
            label_col: 0,
            sum_cols: vec![1],
        };
        let bytes = single_sheet_workbook("Report", &table, Some(&spec)).unwrap();
        assert!(!bytes.is_empty());
    }
}
