use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Вид шага в поэтапном отображении генерации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStepKind {
    /// Regular progress step
    Step,
    /// "AI thinking" step, displayed with a longer pause
    Thinking,
}

/// Одна запись фиксированной последовательности шагов генерации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStep {
    pub text: String,
    pub kind: GenerationStepKind,
}

impl GenerationStep {
    pub fn step(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: GenerationStepKind::Step,
        }
    }

    pub fn thinking(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: GenerationStepKind::Thinking,
        }
    }
}

/// Одна заявка мастера генерации атома.
///
/// Captures the cascading database → schema → tables selection at the
/// moment the user triggers generation. The mock endpoint ignores the
/// payload, so the request is used for logging and result metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub id: Uuid,
    pub database: String,
    pub schema: String,
    pub tables: Vec<String>,
    pub requested_at: DateTime<Utc>,
}

impl GenerationRequest {
    pub fn new(database: String, schema: String, tables: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            database,
            schema,
            tables,
            requested_at: Utc::now(),
        }
    }

    /// Все три зависимых выбора заполнены
    pub fn is_complete(&self) -> bool {
        !self.database.is_empty() && !self.schema.is_empty() && !self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_complete() {
        let full = GenerationRequest::new(
            "portfolio_management_db".to_string(),
            "customers_portfolio".to_string(),
            vec!["investor_profiles".to_string()],
        );
        assert!(full.is_complete());

        let no_tables = GenerationRequest::new(
            "market_data_db".to_string(),
            "market_data_db_schema_1".to_string(),
            Vec::new(),
        );
        assert!(!no_tables.is_complete());

        let no_schema = GenerationRequest::new(
            "market_data_db".to_string(),
            String::new(),
            vec!["t".to_string()],
        );
        assert!(!no_schema.is_complete());
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = GenerationRequest::new("db".into(), "s".into(), vec!["t".into()]);
        let b = GenerationRequest::new("db".into(), "s".into(), vec!["t".into()]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_request_serializes_selection_fields() {
        let request = GenerationRequest::new(
            "portfolio_management_db".to_string(),
            "customers_portfolio".to_string(),
            vec!["investor_profiles".to_string()],
        );
        let value = serde_json::to_value(&request).expect("serializable request");
        assert_eq!(value["database"], "portfolio_management_db");
        assert_eq!(value["schema"], "customers_portfolio");
        assert_eq!(value["tables"][0], "investor_profiles");
        assert!(value["id"].is_string());
        assert!(value["requested_at"].is_string());
    }

    #[test]
    fn test_step_constructors() {
        let step = GenerationStep::step("Analyzing table structures...");
        assert_eq!(step.kind, GenerationStepKind::Step);

        let thinking = GenerationStep::thinking("Understanding your data schema...");
        assert_eq!(thinking.kind, GenerationStepKind::Thinking);
    }
}
