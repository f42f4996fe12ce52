use serde::{Deserialize, Serialize};

/// Тир каталога примитивов
///
/// Атомы, молекулы и компаунды — фиксированная трёхуровневая группировка
/// переиспользуемых строительных блоков семантического слоя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Atoms,
    Molecules,
    Compounds,
}

impl PrimitiveKind {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "atoms" => Ok(PrimitiveKind::Atoms),
            "molecules" => Ok(PrimitiveKind::Molecules),
            "compounds" => Ok(PrimitiveKind::Compounds),
            _ => Err(format!("Unknown primitive kind: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Atoms => "atoms",
            PrimitiveKind::Molecules => "molecules",
            PrimitiveKind::Compounds => "compounds",
        }
    }
}

/// Один переиспользуемый строительный блок каталога.
///
/// Items are defined once at load time and never mutated. `content_path`
/// points at the raw text resource rendered in the detail viewer; items
/// without one fall back to the structured field view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveItem {
    pub key: String,
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<String>,
}

impl PrimitiveItem {
    pub fn new(key: &str, label: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            content_path: None,
        }
    }

    pub fn with_content(key: &str, label: &str, description: &str, content_path: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            content_path: Some(content_path.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            PrimitiveKind::Atoms,
            PrimitiveKind::Molecules,
            PrimitiveKind::Compounds,
        ] {
            assert_eq!(PrimitiveKind::from_str(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn test_kind_unknown() {
        assert!(PrimitiveKind::from_str("electrons").is_err());
        assert!(PrimitiveKind::from_str("").is_err());
    }

    #[test]
    fn test_item_constructors() {
        let plain = PrimitiveItem::new("molecule-1", "Molecule 1", "Combination of atoms");
        assert_eq!(plain.content_path, None);

        let with_content =
            PrimitiveItem::with_content("atom-x", "Atom X", "Asset Class Context", "/atoms/atom-x.yaml");
        assert_eq!(with_content.content_path.as_deref(), Some("/atoms/atom-x.yaml"));
    }
}
