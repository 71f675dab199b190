use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::resource::{ImportOutcome, ImportReport};

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "ADDRESS")]
    address: String,
    #[tabled(rename = "ACTION")]
    action: &'static str,
    #[tabled(rename = "DETAIL")]
    detail: String,
}

impl From<&ImportOutcome> for OutcomeRow {
    fn from(outcome: &ImportOutcome) -> Self {
        let (action, detail) = match outcome {
            ImportOutcome::Imported { .. } => ("imported", String::new()),
            ImportOutcome::AlreadyPresent { .. } => ("skip", "already in state".to_string()),
            ImportOutcome::WouldImport { import_id, .. } => ("import", import_id.clone()),
            ImportOutcome::NotFound { reason, .. } => ("skip", reason.clone()),
        };

        Self {
            address: outcome.address().to_string(),
            action,
            detail,
        }
    }
}

pub fn print_outcome(outcome: &ImportOutcome) {
    println!("{}", outcome);
}

pub fn render_table(report: &ImportReport) -> String {
    let rows: Vec<OutcomeRow> = report.outcomes.iter().map(OutcomeRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}
