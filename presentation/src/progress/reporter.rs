//! Progress reporting for the group chat

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use docgen_application::GroupChatProgress;
use docgen_domain::{ChatMessage, TerminationVerdict};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Spinner showing which agent is working
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self::from_spinner(spinner)
    }

    fn from_spinner(spinner: ProgressBar) -> Self {
        Self { spinner }
    }

    /// Write the per-turn line to `out` with the spinner cleared.
    fn write_response(&self, out: &mut impl Write, agent: &str) -> io::Result<()> {
        self.spinner
            .suspend(|| writeln!(out, "{}", ConsoleFormatter::agent_responded(agent)))
    }

    /// Handle for hiding the spinner while the terminal is used for input
    pub fn spinner(&self) -> ProgressBar {
        self.spinner.clone()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupChatProgress for ProgressReporter {
    fn on_agent_selected(&self, agent: &str, iteration: usize) {
        self.spinner.set_prefix(format!("Turn {}", iteration));
        self.spinner.set_message(format!("{} is working...", agent));
    }

    fn on_tool_call_started(&self, agent: &str, tool: &str) {
        self.spinner
            .set_message(format!("{} -> {}", agent, tool.dimmed()));
    }

    fn on_tool_call_finished(&self, agent: &str, tool: &str, success: bool) {
        if !success {
            self.spinner
                .println(format!("  {} {} ({})", "x".red(), tool, agent.dimmed()));
        }
    }

    fn on_agent_response(&self, message: &ChatMessage) {
        let name = message.author().unwrap_or("assistant");
        let _ = self.write_response(&mut io::stdout().lock(), name);
    }

    fn on_termination_check(&self, _agent: &str, verdict: TerminationVerdict) {
        if verdict.is_complete() {
            self.spinner.set_message("Content approved".green().to_string());
        }
    }

    fn on_chat_finished(&self, _iterations: usize, _is_complete: bool) {
        self.spinner.finish_and_clear();
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl GroupChatProgress for SimpleProgress {
    fn on_agent_response(&self, message: &ChatMessage) {
        let name = message.author().unwrap_or("assistant");
        println!("{}", ConsoleFormatter::agent_responded(name));
    }
}
