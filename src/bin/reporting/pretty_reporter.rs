use super::Summary;
use colored::*;
use reify::declarations::*;
use reify::typing::Assignability;
use reify::DeclarationError;

pub struct PrettyReporter;

impl PrettyReporter {
    pub fn report_file(file_name: &str) {
        println!("{}", file_name.bright_black());
    }

    pub fn report_outcome(outcome: &CheckOutcome) {
        let mark = if outcome.passed() {
            "  ok  ".green()
        } else {
            "  FAIL".red()
        };
        let line = outcome.to_string();

        println!(
            "{} {}",
            mark,
            if outcome.passed() {
                line.normal()
            } else {
                line.red()
            }
        );
    }

    pub fn report_error(context: &str, error: &DeclarationError) {
        let header = format!("{} [{}]", error, error.kind());

        eprintln!("{}\n{}\n", header.red(), format!("{}:", context).bright_black());
    }

    pub fn report_assignability(assignability: &Assignability) {
        let message = assignability.to_string();
        if assignability.is_valid() {
            println!("{}", message.green());
        } else {
            println!("{}", message.red());
        }
    }

    pub fn report_summary(summary: &Summary) {
        let counts = format!(
            "{} passed, {} failed, {} unreadable",
            summary.passed, summary.failed, summary.broken_files
        );

        if summary.succeeded() {
            println!("\n{}", counts.green());
        } else {
            println!("\n{}", counts.red());
        }
    }
}
