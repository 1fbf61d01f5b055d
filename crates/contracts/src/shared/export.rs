//! CSV content for the "Exportar a Excel" buttons
//!
//! Excel opens `;`-separated UTF-8 files with a BOM correctly, accents included.

use chrono::NaiveDate;

/// Types that can be written as a spreadsheet row
pub trait ExcelExportable {
    /// Column headers, in the order of [`ExcelExportable::to_csv_row`]
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

pub const CSV_SEPARATOR: char = ';';

/// Build the whole CSV document; empty data is an error
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> Result<String, String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }

    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&join_row(T::headers().iter().copied()));
    csv_content.push('\n');

    for item in data {
        let row = item.to_csv_row();
        csv_content.push_str(&join_row(row.iter().map(String::as_str)));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells
        .map(escape_csv_cell)
        .collect::<Vec<_>>()
        .join(&CSV_SEPARATOR.to_string())
}

/// Quote cells containing the separator, quotes or line breaks
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// `{prefix}_{YYYY-MM-DD}.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// Decimal with two places and a dot, the way spreadsheets parse it
pub fn csv_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        qty: i64,
    }

    impl ExcelExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Producto", "Cantidad"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.qty.to_string()]
        }
    }

    #[test]
    fn test_build_csv_with_bom_and_separator() {
        let csv = build_csv(&[Line { name: "Chai", qty: 5 }, Line { name: "Tofu", qty: 2 }]).unwrap();
        assert_eq!(csv, "\u{FEFF}Producto;Cantidad\nChai;5\nTofu;2\n");
    }

    #[test]
    fn test_build_csv_escapes_cells() {
        let csv = build_csv(&[Line { name: "Queso \"Cabrales\"; 1kg", qty: 1 }]).unwrap();
        assert!(csv.ends_with("\"Queso \"\"Cabrales\"\"; 1kg\";1\n"));
    }

    #[test]
    fn test_build_csv_rejects_empty() {
        let data: Vec<Line> = Vec::new();
        assert_eq!(build_csv(&data), Err("No data to export".to_string()));
    }

    #[test]
    fn test_escape_line_breaks() {
        assert_eq!(escape_csv_cell("a\nb"), "\"a\nb\"");
        assert_eq!(escape_csv_cell("a\rb"), "\"a\rb\"");
        assert_eq!(escape_csv_cell("plain"), "plain");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name("reporte_detalle_pedidos", date), "reporte_detalle_pedidos_2024-03-09.csv");
    }

    #[test]
    fn test_csv_decimal() {
        assert_eq!(csv_decimal(81.0), "81.00");
        assert_eq!(csv_decimal(0.126), "0.13");
    }
}
