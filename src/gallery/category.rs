#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
}

// Display order of carousels and project cards
pub const CATEGORIES: &[Category] = &[
    Category { key: "roofing", label: "Roofing Projects" },
    Category { key: "building", label: "Building Projects" },
    Category { key: "painting", label: "Painting Projects" },
    Category { key: "awnings", label: "Awnings Projects" },
    Category { key: "renovations", label: "Renovations Projects" },
    Category { key: "cupboards_kitchens", label: "Cupboards & Kitchens" },
    Category { key: "all-projects", label: "All Projects" },
];

pub fn find_category(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Label for a category key, falling back to the key itself for folders
/// that are not part of the fixed list.
pub fn label_for(key: &str) -> &str {
    find_category(key).map(|c| c.label).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            assert!(CATEGORIES[i + 1..].iter().all(|b| b.key != a.key), "duplicate key {}", a.key);
        }
    }

    #[test]
    fn label_lookup_falls_back_to_key() {
        assert_eq!(label_for("roofing"), "Roofing Projects");
        assert_eq!(label_for("sheds"), "sheds");
    }
}
