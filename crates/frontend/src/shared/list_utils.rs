//! List helpers shared by the record pages (client-side filtering).

/// Types that can be matched against a free-text search term.
pub trait Searchable {
    /// True when the record matches the query (case-insensitive).
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Filter a list by a search term; a blank term keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let query = filter.trim();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(query))
        .cloned()
        .collect()
}

/// Case-insensitive containment over a set of haystack fields.
pub fn any_field_contains(fields: &[String], query: &str) -> bool {
    let q = query.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&q))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(String);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            any_field_contains(&[self.0.clone()], filter)
        }
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let rows = vec![Row("Widget".into()), Row("Gadget".into())];
        assert_eq!(filter_list(&rows, "   ").len(), 2);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let rows = vec![Row("Widget".into()), Row("Gadget".into())];
        let hits = filter_list(&rows, "wid");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Widget");
    }

    #[test]
    fn numeric_fields_match_as_text() {
        assert!(any_field_contains(&["42".to_string()], "4"));
        assert!(!any_field_contains(&["42".to_string()], "5"));
    }
}
