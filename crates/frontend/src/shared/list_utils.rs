/// List helpers shared by the table views: sorting and paging
use std::cmp::Ordering;

use contracts::dashboards::d404_customer_report::CustomerRow;

/// Types that can be ordered by a named column
pub trait Sortable {
    /// Compares two items by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

impl Sortable for CustomerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        CustomerRow::compare_by_field(self, other, field)
    }
}

/// Stable sort of a list by a field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Sort indicator shown next to a header label
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Number of pages needed for `total` items (at least one)
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Items of a 0-indexed page; an out-of-range page is empty
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, total: i64) -> CustomerRow {
        CustomerRow {
            nome_cliente: name.to_string(),
            contato: String::new(),
            total_vendas: total,
            ultima_compra_data: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_sort_list_descending() {
        let mut rows = vec![customer("a", 1), customer("b", 5), customer("c", 3)];
        sort_list(&mut rows, "total_vendas", false);
        let names: Vec<&str> = rows.iter().map(|r| r.nome_cliente.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("total_vendas", "total_vendas", true), " ▲");
        assert_eq!(get_sort_indicator("total_vendas", "total_vendas", false), " ▼");
        assert_eq!(get_sort_indicator("contato", "total_vendas", true), " ⇅");
    }

    #[test]
    fn test_paging() {
        let items: Vec<usize> = (0..32).collect();
        assert_eq!(total_pages(items.len(), 15), 3);
        assert_eq!(total_pages(0, 15), 1);
        assert_eq!(page_slice(&items, 0, 15).len(), 15);
        assert_eq!(page_slice(&items, 2, 15), &[30, 31]);
        assert!(page_slice(&items, 5, 15).is_empty());
    }
}
