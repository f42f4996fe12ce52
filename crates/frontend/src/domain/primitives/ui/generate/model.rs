//! Generate Atom wizard - pure model
//!
//! The timed driver in `view.rs` advances this state machine; everything
//! here is plain data so the transition rules stay testable off-wasm.

use contracts::domain::primitives::{GenerationStep, GenerationStepKind};

/// Pause after a regular display step, in milliseconds
pub const STEP_DELAY_MS: u32 = 2_000;
/// Longer pause after an "AI thinking" step
pub const THINKING_DELAY_MS: u32 = 2_500;
/// Pause before the finished progress view yields to the result screen
pub const PROGRESS_CLOSE_DELAY_MS: u32 = 1_000;
/// How long the "Copied!" acknowledgment stays visible
pub const COPY_ACK_MS: u32 = 2_000;

/// Fixed sequence of display steps for one generation attempt
pub fn generation_steps() -> Vec<GenerationStep> {
    vec![
        GenerationStep::step("Analyzing table structures..."),
        GenerationStep::thinking("Understanding your data schema..."),
        GenerationStep::step("Identifying entity relationships..."),
        GenerationStep::step("Generating semantic mappings..."),
        GenerationStep::thinking("Refining context definitions..."),
        GenerationStep::step("Creating atom configuration..."),
        GenerationStep::step("Optimizing for performance..."),
        GenerationStep::step("Finalizing generated atom..."),
    ]
}

pub fn step_delay_ms(kind: GenerationStepKind) -> u32 {
    match kind {
        GenerationStepKind::Thinking => THINKING_DELAY_MS,
        GenerationStepKind::Step => STEP_DELAY_MS,
    }
}

/// Selectable databases as (value, label) pairs
pub fn database_options() -> Vec<(String, String)> {
    [
        "advisory_services_db",
        "market_data_db",
        "portfolio_management_db",
    ]
    .iter()
    .map(|db| (db.to_string(), db.to_string()))
    .collect()
}

/// Schemas available for the chosen database.
///
/// `portfolio_management_db` carries the real portfolio schemas; any other
/// database gets two synthesized placeholders derived from its name.
pub fn schema_options(database: &str) -> Vec<(String, String)> {
    if database.is_empty() {
        return Vec::new();
    }
    if database == "portfolio_management_db" {
        ["customers_portfolio", "marketing_analytics", "sales_analytics"]
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect()
    } else {
        (1..=2)
            .map(|n| {
                let name = format!("{}_schema_{}", database, n);
                (name.clone(), name)
            })
            .collect()
    }
}

/// Tables available for the chosen schema.
///
/// `customers_portfolio` carries the real portfolio tables; any other
/// schema gets two synthesized placeholders derived from its name.
pub fn table_options(schema: &str) -> Vec<(String, String)> {
    if schema.is_empty() {
        return Vec::new();
    }
    if schema == "customers_portfolio" {
        [
            "investor_profiles",
            "investment_goals",
            "portfolio_holdings",
            "goal_tracking",
            "goal_performance",
            "goal_risk_metrics",
            "cash_flows",
            "portfolio_health",
            "sector_allocation",
            "scenario_based_rebalancing",
            "sector",
            "segment",
            "category",
            "investment_type",
        ]
        .iter()
        .map(|t| (t.to_string(), t.to_string()))
        .collect()
    } else {
        (1..=2)
            .map(|n| {
                let name = format!("{}_table_{}", schema, n);
                (name.clone(), name)
            })
            .collect()
    }
}

/// Phase of the generate-atom wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Selection form, waiting for user input
    Form,
    /// Timed step sequence running, network call pending
    Generating,
    /// Output (or the fixed error text) on display
    Result,
}

/// State of one generation attempt
#[derive(Debug, Clone, PartialEq)]
pub struct WizardModel {
    pub phase: WizardPhase,
    /// Count of finished display steps, 0..=generation_steps().len()
    pub completed_steps: usize,
    /// Pretty-printed payload on success, fixed error text on failure
    pub output: Option<String>,
    pub failed: bool,
}

impl WizardModel {
    pub fn new() -> Self {
        Self {
            phase: WizardPhase::Form,
            completed_steps: 0,
            output: None,
            failed: false,
        }
    }

    /// Enter the generating phase, dropping any previous output
    pub fn begin(&mut self) {
        self.phase = WizardPhase::Generating;
        self.completed_steps = 0;
        self.output = None;
        self.failed = false;
    }

    /// One timed delay finished. Counts up monotonically and saturates at
    /// the step total; ignored outside the generating phase.
    pub fn step_completed(&mut self) {
        if self.phase == WizardPhase::Generating
            && self.completed_steps < generation_steps().len()
        {
            self.completed_steps += 1;
        }
    }

    /// Network call succeeded. The progress view stays up (all steps
    /// checked) until `close_progress` runs after its short delay.
    pub fn complete(&mut self, formatted: String) {
        self.output = Some(formatted);
        self.failed = false;
    }

    /// Network call failed. Leaves the generating phase immediately; the
    /// step counter stays wherever it reached.
    pub fn fail(&mut self, message: &str) {
        self.output = Some(message.to_string());
        self.failed = true;
        self.phase = WizardPhase::Result;
    }

    /// Move from the finished progress view to the result screen
    pub fn close_progress(&mut self) {
        if self.phase == WizardPhase::Generating && self.output.is_some() {
            self.phase = WizardPhase::Result;
        }
    }

    /// Reset action from the result screen
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn progress_percent(&self) -> usize {
        let total = generation_steps().len();
        if total == 0 {
            return 0;
        }
        self.completed_steps * 100 / total
    }
}

impl Default for WizardModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_sequence_shape() {
        let steps = generation_steps();
        assert_eq!(steps.len(), 8);
        let thinking: Vec<usize> = steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind == GenerationStepKind::Thinking)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(thinking, vec![1, 4]);
    }

    #[test]
    fn test_thinking_steps_pause_longer() {
        assert!(step_delay_ms(GenerationStepKind::Thinking) > step_delay_ms(GenerationStepKind::Step));
    }

    #[test]
    fn test_schema_options_portfolio_special_case() {
        let schemas: Vec<String> = schema_options("portfolio_management_db")
            .into_iter()
            .map(|(v, _)| v)
            .collect();
        assert_eq!(
            schemas,
            vec!["customers_portfolio", "marketing_analytics", "sales_analytics"]
        );
    }

    #[test]
    fn test_schema_options_synthesized() {
        let schemas: Vec<String> = schema_options("market_data_db")
            .into_iter()
            .map(|(v, _)| v)
            .collect();
        assert_eq!(schemas, vec!["market_data_db_schema_1", "market_data_db_schema_2"]);
        assert!(schema_options("").is_empty());
    }

    #[test]
    fn test_table_options_portfolio_special_case() {
        let tables = table_options("customers_portfolio");
        assert_eq!(tables.len(), 14);
        assert_eq!(tables[0].0, "investor_profiles");
    }

    #[test]
    fn test_table_options_synthesized() {
        let tables: Vec<String> = table_options("sales_analytics")
            .into_iter()
            .map(|(v, _)| v)
            .collect();
        assert_eq!(tables, vec!["sales_analytics_table_1", "sales_analytics_table_2"]);
        assert!(table_options("").is_empty());
    }

    #[test]
    fn test_step_counter_monotonic_and_saturating() {
        let mut model = WizardModel::new();
        model.begin();
        let total = generation_steps().len();
        for expected in 1..=total {
            model.step_completed();
            assert_eq!(model.completed_steps, expected);
        }
        // an extra tick must not push the counter past the total
        model.step_completed();
        assert_eq!(model.completed_steps, total);
    }

    #[test]
    fn test_step_ignored_outside_generating() {
        let mut model = WizardModel::new();
        model.step_completed();
        assert_eq!(model.completed_steps, 0);
    }

    #[test]
    fn test_failure_is_terminal_and_keeps_counter() {
        let mut model = WizardModel::new();
        model.begin();
        model.step_completed();
        model.step_completed();
        model.step_completed();
        model.fail("Error generating atom. Please try again.");

        assert_eq!(model.phase, WizardPhase::Result);
        assert!(model.failed);
        assert_eq!(model.output.as_deref(), Some("Error generating atom. Please try again."));
        // counter is not reset retroactively
        assert_eq!(model.completed_steps, 3);
    }

    #[test]
    fn test_success_waits_for_close() {
        let mut model = WizardModel::new();
        model.begin();
        for _ in 0..generation_steps().len() {
            model.step_completed();
        }
        model.complete("{\n  \"name\": \"atom-z\"\n}".to_string());
        // progress view still up until the close delay elapses
        assert_eq!(model.phase, WizardPhase::Generating);

        model.close_progress();
        assert_eq!(model.phase, WizardPhase::Result);
        assert!(!model.failed);
    }

    #[test]
    fn test_close_without_output_is_ignored() {
        let mut model = WizardModel::new();
        model.begin();
        model.close_progress();
        assert_eq!(model.phase, WizardPhase::Generating);
    }

    #[test]
    fn test_begin_drops_previous_output() {
        let mut model = WizardModel::new();
        model.begin();
        model.fail("Error generating atom. Please try again.");
        model.begin();
        assert_eq!(model.output, None);
        assert!(!model.failed);
        assert_eq!(model.completed_steps, 0);
    }

    #[test]
    fn test_reset_returns_to_form() {
        let mut model = WizardModel::new();
        model.begin();
        model.step_completed();
        model.complete("{}".to_string());
        model.close_progress();
        model.reset();
        assert_eq!(model, WizardModel::new());
    }

    #[test]
    fn test_progress_percent() {
        let mut model = WizardModel::new();
        model.begin();
        assert_eq!(model.progress_percent(), 0);
        for _ in 0..4 {
            model.step_completed();
        }
        assert_eq!(model.progress_percent(), 50);
        for _ in 0..4 {
            model.step_completed();
        }
        assert_eq!(model.progress_percent(), 100);
    }
}
