//! Generate Atom wizard - ViewModel
//!
//! Reactive state over the pure model: the cascading selection signals and
//! the attempt state driven by the timed sequence in `view.rs`.

use contracts::domain::primitives::GenerationRequest;
use leptos::prelude::*;

use super::model::{schema_options, table_options, WizardModel, WizardPhase};

/// ViewModel for the generate-atom wizard
#[derive(Clone, Copy)]
pub struct GenerateAtomVm {
    pub database: RwSignal<String>,
    pub schema: RwSignal<String>,
    /// Selected tables; holds at most one entry today, kept as a Vec to
    /// match the request contract
    pub tables: RwSignal<Vec<String>>,
    pub model: RwSignal<WizardModel>,
    pub is_copied: RwSignal<bool>,
}

impl GenerateAtomVm {
    pub fn new() -> Self {
        Self {
            database: RwSignal::new(String::new()),
            schema: RwSignal::new(String::new()),
            tables: RwSignal::new(Vec::new()),
            model: RwSignal::new(WizardModel::new()),
            is_copied: RwSignal::new(false),
        }
    }

    /// Choosing a database invalidates the dependent selections
    pub fn select_database(&self, value: String) {
        self.database.set(value);
        self.schema.set(String::new());
        self.tables.set(Vec::new());
    }

    /// Choosing a schema invalidates the table selection
    pub fn select_schema(&self, value: String) {
        self.schema.set(value);
        self.tables.set(Vec::new());
    }

    pub fn select_table(&self, value: String) {
        if value.is_empty() {
            self.tables.set(Vec::new());
        } else {
            self.tables.set(vec![value]);
        }
    }

    pub fn schema_options(&self) -> Vec<(String, String)> {
        schema_options(&self.database.get())
    }

    pub fn table_options(&self) -> Vec<(String, String)> {
        table_options(&self.schema.get())
    }

    pub fn can_generate(&self) -> bool {
        !self.database.get().is_empty()
            && !self.schema.get().is_empty()
            && !self.tables.get().is_empty()
    }

    pub fn build_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.database.get_untracked(),
            self.schema.get_untracked(),
            self.tables.get_untracked(),
        )
    }

    pub fn phase(&self) -> WizardPhase {
        self.model.get().phase
    }

    pub fn begin(&self) {
        self.model.update(|m| m.begin());
    }

    pub fn step_completed(&self) {
        self.model.update(|m| m.step_completed());
    }

    pub fn complete(&self, formatted: String) {
        self.model.update(|m| m.complete(formatted));
    }

    pub fn fail(&self, message: &str) {
        self.model.update(|m| m.fail(message));
    }

    pub fn close_progress(&self) {
        self.model.update(|m| m.close_progress());
    }

    /// Reset action from the result screen: clears the attempt and every
    /// selection, returning the wizard to the empty form
    pub fn reset(&self) {
        self.model.update(|m| m.reset());
        self.database.set(String::new());
        self.schema.set(String::new());
        self.tables.set(Vec::new());
        self.is_copied.set(false);
    }
}

impl Default for GenerateAtomVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_change_resets_downstream() {
        let vm = GenerateAtomVm::new();
        vm.select_database("portfolio_management_db".to_string());
        vm.select_schema("customers_portfolio".to_string());
        vm.select_table("investor_profiles".to_string());

        vm.select_database("market_data_db".to_string());
        assert_eq!(vm.schema.get_untracked(), "");
        assert!(vm.tables.get_untracked().is_empty());
    }

    #[test]
    fn test_schema_change_resets_tables() {
        let vm = GenerateAtomVm::new();
        vm.select_database("portfolio_management_db".to_string());
        vm.select_schema("customers_portfolio".to_string());
        vm.select_table("cash_flows".to_string());

        vm.select_schema("sales_analytics".to_string());
        assert!(vm.tables.get_untracked().is_empty());
    }

    #[test]
    fn test_request_captures_selection() {
        let vm = GenerateAtomVm::new();
        vm.select_database("advisory_services_db".to_string());
        vm.select_schema("advisory_services_db_schema_1".to_string());
        vm.select_table("advisory_services_db_schema_1_table_2".to_string());

        let request = vm.build_request();
        assert!(request.is_complete());
        assert_eq!(request.database, "advisory_services_db");
        assert_eq!(request.tables, vec!["advisory_services_db_schema_1_table_2"]);
    }
}
