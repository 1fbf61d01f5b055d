//! In-memory transforms behind the report screens
//!
//! Report endpoints return the full result set; filtering, sorting and
//! pagination happen client-side over these helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Asc
    }
}

/// Column of a report table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportColumn {
    /// JSON name of the row field, also the sort key
    pub key: &'static str,
    pub label: &'static str,
    /// Right-aligned
    pub numeric: bool,
}

impl ReportColumn {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self { key, label, numeric: false }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self { key, label, numeric: true }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: &str, direction: SortDirection) -> Self {
        Self {
            column: column.to_string(),
            direction,
        }
    }

    /// Clicking the active column flips the direction; another column starts ascending
    pub fn toggle(&mut self, column: &str) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column.to_string();
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.column == column
    }
}

/// Comparable cell value
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Empty,
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl SortValue {
    pub fn text(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Number(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
        }
    }

    /// Total order: empty first, text case- and accent-insensitive
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => fold_key(a).cmp(&fold_key(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(n) => n.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Collation key for text: accents stripped, lowercased
pub fn fold_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<&String> for SortValue {
    fn from(value: &String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<V: Into<SortValue>> From<Option<V>> for SortValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

impl From<NaiveDate> for SortValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// A row of a report screen, addressed by column key
pub trait ReportRow {
    fn sort_value(&self, column: &str) -> SortValue;

    fn text_value(&self, column: &str) -> String {
        self.sort_value(column).display()
    }

    /// Date used by the date range filter
    fn row_date(&self) -> Option<NaiveDate> {
        None
    }
}

/// Stable sort; descending reverses the comparator so ties keep input order
pub fn sort_rows<T: ReportRow>(rows: &mut [T], column: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = a.sort_value(column).compare(&b.sort_value(column));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Free-text search over several columns joined together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSearch {
    pub columns: Vec<String>,
    pub needle: String,
}

/// Conditions of a report screen. Every active condition must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    /// (column, needle) substring conditions
    pub text: Vec<(String, String)>,
    pub search: Option<TextSearch>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, column: &str, needle: &str) -> Self {
        self.text.push((column.to_string(), needle.to_string()));
        self
    }

    pub fn with_search(mut self, columns: &[&str], needle: &str) -> Self {
        self.search = Some(TextSearch {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            needle: needle.to_string(),
        });
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn matches<T: ReportRow>(&self, row: &T) -> bool {
        let text_ok = self.text.iter().all(|(column, needle)| {
            let needle = needle.trim();
            needle.is_empty() || contains_ci(&row.text_value(column), needle)
        });
        if !text_ok {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.needle.trim();
            if !needle.is_empty() {
                let joined = search
                    .columns
                    .iter()
                    .map(|c| row.text_value(c))
                    .collect::<Vec<_>>()
                    .join(" ");
                if !contains_ci(&joined, needle) {
                    return false;
                }
            }
        }

        // Rows without a date are never excluded by the range
        match row.row_date() {
            Some(date) => {
                self.date_from.map_or(true, |from| date >= from)
                    && self.date_to.map_or(true, |to| date <= to)
            }
            None => true,
        }
    }

    pub fn apply<T: ReportRow + Clone>(&self, rows: &[T]) -> Vec<T> {
        rows.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

/// Slice of one page; out-of-range pages and `page_size == 0` give an empty slice
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Sorted, de-duplicated, non-empty values of a column for filter dropdowns
pub fn distinct_values<T: ReportRow>(rows: &[T], column: &str) -> Vec<String> {
    let mut values: Vec<String> = rows
        .iter()
        .map(|r| r.text_value(column).trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    values.sort_by(|a, b| fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b)));
    values.dedup();
    values
}

/// Filter, sort and paginate in one call
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub filter: ReportFilter,
    pub sort: Option<SortState>,
    pub page: usize,
    pub page_size: usize,
}

/// Result of [`ReportView::apply`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage<T> {
    /// Rows of the requested page
    pub rows: Vec<T>,
    /// Every filtered row in sort order (what the export writes)
    pub filtered: Vec<T>,
    pub total: usize,
    pub total_pages: usize,
}

impl ReportView {
    pub fn apply<T: ReportRow + Clone>(&self, rows: &[T]) -> ReportPage<T> {
        let mut filtered = self.filter.apply(rows);
        if let Some(sort) = &self.sort {
            sort_rows(&mut filtered, &sort.column, sort.direction);
        }
        let total = filtered.len();
        ReportPage {
            rows: paginate(&filtered, self.page, self.page_size).to_vec(),
            total_pages: page_count(total, self.page_size),
            total,
            filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        city: &'static str,
        amount: Option<f64>,
        date: Option<NaiveDate>,
    }

    impl ReportRow for Row {
        fn sort_value(&self, column: &str) -> SortValue {
            match column {
                "name" => self.name.into(),
                "city" => self.city.into(),
                "amount" => self.amount.into(),
                "date" => self.date.into(),
                _ => SortValue::Empty,
            }
        }

        fn row_date(&self) -> Option<NaiveDate> {
            self.date
        }
    }

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "bravo", city: "Lima", amount: Some(20.0), date: d(2024, 1, 10) },
            Row { id: 2, name: "Alfa", city: "Quito", amount: Some(5.5), date: d(2024, 2, 1) },
            Row { id: 3, name: "charlie", city: "lima", amount: None, date: None },
            Row { id: 4, name: "alfa", city: "Bogotá", amount: Some(20.0), date: d(2024, 3, 5) },
            Row { id: 5, name: "", city: "Quito", amount: Some(1.0), date: d(2023, 12, 31) },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_text_case_insensitive_and_stable() {
        let mut data = rows();
        sort_rows(&mut data, "name", SortDirection::Asc);
        // empty first, "Alfa"/"alfa" keep input order
        assert_eq!(ids(&data), vec![5, 2, 4, 1, 3]);

        sort_rows(&mut data, "name", SortDirection::Desc);
        assert_eq!(ids(&data), vec![3, 1, 2, 4, 5]);
    }

    #[test]
    fn test_sort_text_ignores_accents() {
        let names = [
            "Bottom-Dollar Markets",
            "Bólido Comidas preparadas",
            "Cactus Comidas",
            "Ángel Pérez",
            "Around the Horn",
        ];
        let mut data: Vec<Row> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Row { id: i as u32, name: *name, city: "", amount: None, date: None })
            .collect();
        sort_rows(&mut data, "name", SortDirection::Asc);
        let sorted: Vec<&str> = data.iter().map(|r| r.name).collect();
        assert_eq!(
            sorted,
            vec![
                "Ángel Pérez",
                "Around the Horn",
                "Bólido Comidas preparadas",
                "Bottom-Dollar Markets",
                "Cactus Comidas",
            ]
        );

        let mut again = data.clone();
        sort_rows(&mut again, "name", SortDirection::Asc);
        assert_eq!(again, data);
    }

    #[test]
    fn test_fold_key() {
        assert_eq!(fold_key("Ángel Pérez"), "angel perez");
        assert_eq!(fold_key("Bogotá"), fold_key("bogota"));
    }

    #[test]
    fn test_distinct_values_ignore_accents_in_order() {
        let data = vec![
            Row { id: 1, name: "Zeta", city: "Oslo", amount: None, date: None },
            Row { id: 2, name: "Émile", city: "Oslo", amount: None, date: None },
            Row { id: 3, name: "Ernst", city: "Oslo", amount: None, date: None },
        ];
        assert_eq!(distinct_values(&data, "name"), vec!["Émile", "Ernst", "Zeta"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        for column in ["name", "city", "amount", "date"] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let mut once = rows();
                sort_rows(&mut once, column, direction);
                let mut twice = once.clone();
                sort_rows(&mut twice, column, direction);
                assert_eq!(once, twice, "column {column} {direction:?}");
            }
        }
    }

    #[test]
    fn test_sort_numbers_with_missing_values() {
        let mut data = rows();
        sort_rows(&mut data, "amount", SortDirection::Asc);
        assert_eq!(ids(&data), vec![3, 5, 2, 1, 4]);
    }

    #[test]
    fn test_sort_dates() {
        let mut data = rows();
        sort_rows(&mut data, "date", SortDirection::Desc);
        assert_eq!(ids(&data), vec![4, 2, 1, 5, 3]);
    }

    #[test]
    fn test_toggle_sort_state() {
        let mut state = SortState::new("cliente", SortDirection::Asc);
        state.toggle("cliente");
        assert_eq!(state.direction, SortDirection::Desc);
        state.toggle("producto");
        assert_eq!(state, SortState::new("producto", SortDirection::Asc));
    }

    #[test]
    fn test_filter_case_insensitive_and_anded() {
        let data = rows();
        let filter = ReportFilter::new().with_text("city", "LIMA");
        assert_eq!(ids(&filter.apply(&data)), vec![1, 3]);

        let filter = filter.with_text("name", "char");
        assert_eq!(ids(&filter.apply(&data)), vec![3]);
    }

    #[test]
    fn test_empty_needles_are_noops() {
        let data = rows();
        let filter = ReportFilter::new()
            .with_text("city", "")
            .with_text("name", "   ")
            .with_search(&["name", "city"], "");
        assert_eq!(filter.apply(&data), data);
    }

    #[test]
    fn test_search_over_joined_columns() {
        let data = rows();
        let filter = ReportFilter::new().with_search(&["name", "city"], "quito");
        assert_eq!(ids(&filter.apply(&data)), vec![2, 5]);

        let filter = ReportFilter::new().with_search(&["name", "city"], "alfa bog");
        assert_eq!(ids(&filter.apply(&data)), vec![4]);
    }

    #[test]
    fn test_date_range_inclusive_and_keeps_undated_rows() {
        let data = rows();
        let filter = ReportFilter::new().with_date_range(d(2024, 1, 10), d(2024, 2, 1));
        assert_eq!(ids(&filter.apply(&data)), vec![1, 2, 3]);

        let filter = ReportFilter::new().with_date_range(None, d(2023, 12, 31));
        assert_eq!(ids(&filter.apply(&data)), vec![3, 5]);
    }

    #[test]
    fn test_paginate_concatenates_back() {
        let data: Vec<u32> = (0..23).collect();
        for size in [1, 5, 10, 25, 50] {
            let mut joined = Vec::new();
            for page in 0..page_count(data.len(), size) {
                let slice = paginate(&data, page, size);
                assert!(slice.len() <= size);
                joined.extend_from_slice(slice);
            }
            assert_eq!(joined, data);
        }
    }

    #[test]
    fn test_paginate_edges() {
        let data = [1, 2, 3];
        assert!(paginate(&data, 5, 10).is_empty());
        assert!(paginate(&data, 0, 0).is_empty());
        assert!(paginate(&data, usize::MAX, 2).is_empty());
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn test_distinct_values() {
        let data = rows();
        assert_eq!(distinct_values(&data, "city"), vec!["Bogotá", "Lima", "lima", "Quito"]);
        assert_eq!(distinct_values(&data, "name"), vec!["Alfa", "alfa", "bravo", "charlie"]);
    }

    #[test]
    fn test_report_view_apply() {
        let view = ReportView {
            filter: ReportFilter::new().with_date_range(d(2024, 1, 1), None),
            sort: Some(SortState::new("amount", SortDirection::Desc)),
            page: 1,
            page_size: 2,
        };
        let page = view.apply(&rows());
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(ids(&page.filtered), vec![1, 4, 2, 3]);
        assert_eq!(ids(&page.rows), vec![2, 3]);
    }
}
