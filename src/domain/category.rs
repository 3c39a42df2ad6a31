/// Expense categories every new ledger starts with, in display order.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Retirement",
    "Student Loan",
    "Transportation",
    "Communications",
    "Savings",
    "Groceries",
    "Health Insurance",
];

/// The set of known expense categories, in insertion order.
///
/// Matching is exact: "groceries" and "Groceries" are different names.
/// The book only ever grows; categories are never removed or renamed.
#[derive(Debug, Clone)]
pub struct CategoryBook {
    names: Vec<String>,
}

impl CategoryBook {
    /// A book seeded with the default categories.
    pub fn with_defaults() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A book with no categories at all. A fresh ledger always seeds the
    /// defaults; the display layer still handles this case.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Register a new category at the end of the book. Returns false (and
    /// changes nothing) if the name is already known.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryBook {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_order() {
        let book = CategoryBook::with_defaults();
        assert_eq!(book.names(), &DEFAULT_CATEGORIES);
        assert_eq!(book.len(), 7);
    }

    #[test]
    fn test_register_appends() {
        let mut book = CategoryBook::with_defaults();
        assert!(book.register("Rent"));
        assert_eq!(book.len(), 8);
        assert_eq!(book.names().last().map(String::as_str), Some("Rent"));
        assert!(book.contains("Rent"));
    }

    #[test]
    fn test_register_known_name_is_a_no_op() {
        let mut book = CategoryBook::with_defaults();
        assert!(!book.register("Groceries"));
        assert_eq!(book.len(), 7);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let book = CategoryBook::with_defaults();
        assert!(book.contains("Groceries"));
        assert!(!book.contains("groceries"));
    }

    #[test]
    fn test_empty_book() {
        let book = CategoryBook::empty();
        assert!(book.is_empty());
        assert!(!book.contains("Groceries"));
    }
}
