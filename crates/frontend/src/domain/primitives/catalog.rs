//! Static primitive catalog
//!
//! Three fixed categories (atoms, molecules, compounds) with their items.
//! Items are defined once at load time; selection state lives in the page.

use contracts::domain::primitives::{PrimitiveItem, PrimitiveKind};

/// One catalog category with its items
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub kind: PrimitiveKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<PrimitiveItem>,
}

pub fn category_label(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Atoms => "Atoms",
        PrimitiveKind::Molecules => "Molecules",
        PrimitiveKind::Compounds => "Compounds",
    }
}

pub fn catalog() -> Vec<Category> {
    vec![
        Category {
            kind: PrimitiveKind::Atoms,
            label: category_label(PrimitiveKind::Atoms),
            icon: "atom",
            items: vec![
                PrimitiveItem::with_content(
                    "atom-x",
                    "Atom X",
                    "Asset Class Context - Wealth Management",
                    "/atoms/atom-x.yaml",
                ),
                PrimitiveItem::with_content(
                    "atom-y",
                    "Atom Y",
                    "Investment Goal Context - Wealth Management",
                    "/atoms/atom-y.yaml",
                ),
            ],
        },
        Category {
            kind: PrimitiveKind::Molecules,
            label: category_label(PrimitiveKind::Molecules),
            icon: "molecule",
            items: vec![
                PrimitiveItem::new("molecule-1", "Molecule 1", "Combination of atoms forming a molecule"),
                PrimitiveItem::new("molecule-2", "Molecule 2", "Another molecular component"),
            ],
        },
        Category {
            kind: PrimitiveKind::Compounds,
            label: category_label(PrimitiveKind::Compounds),
            icon: "compound",
            items: vec![
                PrimitiveItem::new("compound-1", "Compound 1", "Complex component combining molecules"),
                PrimitiveItem::new("compound-2", "Compound 2", "Another compound structure"),
            ],
        },
    ]
}

/// Toggle the expanded sublist of a category.
///
/// At most one category is expanded at a time: toggling the expanded one
/// collapses it, toggling any other replaces it.
pub fn toggle_expanded(
    current: Option<PrimitiveKind>,
    kind: PrimitiveKind,
) -> Option<PrimitiveKind> {
    if current == Some(kind) {
        None
    } else {
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_categories() {
        let cats = catalog();
        let kinds: Vec<PrimitiveKind> = cats.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PrimitiveKind::Atoms,
                PrimitiveKind::Molecules,
                PrimitiveKind::Compounds
            ]
        );
    }

    #[test]
    fn test_keys_unique_within_category() {
        for category in catalog() {
            let mut keys: Vec<&str> = category.items.iter().map(|i| i.key.as_str()).collect();
            keys.sort();
            let before = keys.len();
            keys.dedup();
            assert_eq!(keys.len(), before, "duplicate key in {:?}", category.kind);
        }
    }

    #[test]
    fn test_only_atoms_declare_content() {
        for category in catalog() {
            for item in &category.items {
                match category.kind {
                    PrimitiveKind::Atoms => assert!(item.content_path.is_some()),
                    _ => assert!(item.content_path.is_none()),
                }
            }
        }
    }

    #[test]
    fn test_toggle_collapses_and_replaces() {
        // expanding from nothing
        assert_eq!(
            toggle_expanded(None, PrimitiveKind::Atoms),
            Some(PrimitiveKind::Atoms)
        );
        // toggling the expanded category collapses it
        assert_eq!(toggle_expanded(Some(PrimitiveKind::Atoms), PrimitiveKind::Atoms), None);
        // toggling another category replaces the expansion, it does not
        // leave the previous one expanded
        assert_eq!(
            toggle_expanded(Some(PrimitiveKind::Atoms), PrimitiveKind::Compounds),
            Some(PrimitiveKind::Compounds)
        );
    }
}
