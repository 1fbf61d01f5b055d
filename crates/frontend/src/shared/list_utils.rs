/// Sort indicator helpers shared by server and report tables

/// Arrow shown next to a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator; inactive columns are dimmed
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("cliente", "cliente", true), " ▲");
        assert_eq!(get_sort_indicator("cliente", "cliente", false), " ▼");
        assert_eq!(get_sort_indicator("cliente", "producto", true), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert!(get_sort_class("a", "a").ends_with("--active"));
        assert_eq!(get_sort_class("a", "b"), "table__sort-indicator");
    }
}
