//! Console output for document generation results

use colored::Colorize;
use docgen_application::GenerateDocumentOutput;

/// Formats group chat events and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Line printed after every agent turn
    pub fn agent_responded(agent: &str) -> String {
        format!("==== {} just responded ====", agent)
    }

    /// The final draft, preceded by a run summary
    pub fn format_result(output: &GenerateDocumentOutput) -> String {
        let status = if output.is_complete {
            "approved".green().bold()
        } else {
            "not approved".yellow().bold()
        };

        let mut text = String::new();
        text.push_str(&format!(
            "\n{} {} after {} turns\n\n",
            "Result:".cyan().bold(),
            status,
            output.iterations
        ));
        text.push_str(&format!("{}\n", "Final content:".bold()));
        text.push_str(&output.content);
        text.push('\n');
        text
    }
}
