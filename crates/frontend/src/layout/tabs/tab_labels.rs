//! Titles for tab keys, shared by the sidebar and by tabs restored from the URL.

use contracts::domain::descriptor_by_key;

pub fn tab_label_for_key(key: &str) -> &'static str {
    descriptor_by_key(key)
        .map(|d| d.texts.title)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(tab_label_for_key("a001_category"), "Categories");
        assert_eq!(tab_label_for_key("a002_news"), "News");
        assert_eq!(tab_label_for_key("a003_news_type"), "News Categories");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(tab_label_for_key("p900_sales_register"), "Unknown");
    }
}
