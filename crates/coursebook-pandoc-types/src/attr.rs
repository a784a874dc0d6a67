/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

/// Attributes attached to a node: (identifier, classes, key-value pairs).
///
/// Key-value pairs are kept as a plain list rather than a map so that
/// duplicate keys in the input survive a round-trip through the filters.
pub type Attr = (String, Vec<String>, Vec<(String, String)>);

pub fn empty_attr() -> Attr {
    (String::new(), vec![], vec![])
}

pub fn is_empty_attr(attr: &Attr) -> bool {
    attr.0.is_empty() && attr.1.is_empty() && attr.2.is_empty()
}

/// Membership test on the class list. Class order carries no meaning.
pub fn attr_has_class(attr: &Attr, class: &str) -> bool {
    attr.1.iter().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attr_is_empty() {
        assert!(is_empty_attr(&empty_attr()));
    }

    #[test]
    fn test_nonempty_attr() {
        let attr = ("id".to_string(), vec![], vec![]);
        assert!(!is_empty_attr(&attr));
    }

    #[test]
    fn test_has_class() {
        let attr = (
            String::new(),
            vec!["solution".to_string(), "note".to_string()],
            vec![],
        );
        assert!(attr_has_class(&attr, "solution"));
        assert!(attr_has_class(&attr, "note"));
        assert!(!attr_has_class(&attr, "solutions"));
    }
}
