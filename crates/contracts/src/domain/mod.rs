pub mod a001_category;
pub mod a002_news;
pub mod a003_news_type;
pub mod common;

use common::ResourceDescriptor;

/// All resources exposed by the console, in sidebar order.
pub fn all_descriptors() -> [&'static ResourceDescriptor; 3] {
    [
        &a001_category::DESCRIPTOR,
        &a002_news::DESCRIPTOR,
        &a003_news_type::DESCRIPTOR,
    ]
}

/// Найти дескриптор ресурса по ключу таба
pub fn descriptor_by_key(key: &str) -> Option<&'static ResourceDescriptor> {
    all_descriptors().into_iter().find(|d| d.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_keys_are_unique() {
        let keys: Vec<&str> = all_descriptors().iter().map(|d| d.key).collect();
        let mut dedup = keys.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(keys.len(), dedup.len());
    }

    #[test]
    fn test_descriptor_by_key() {
        assert_eq!(
            descriptor_by_key("a002_news").map(|d| d.texts.title),
            Some("News")
        );
        assert!(descriptor_by_key("a999_unknown").is_none());
    }
}
