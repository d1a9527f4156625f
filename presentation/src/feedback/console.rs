//! Console human feedback.
//!
//! Shows the draft the user agent relays and reads one line of feedback:
//!
//! ```text
//! ═══════════════════════════════════════════════════════════════
//!   Feedback requested
//! ═══════════════════════════════════════════════════════════════
//!
//! <draft>
//!
//! Reply with your feedback, or approve the content (empty line to skip).
//! feedback>
//! ```

use async_trait::async_trait;
use colored::Colorize;
use docgen_application::{HumanFeedbackError, HumanFeedbackPort};
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};

/// Interactive feedback over stdin/stdout.
pub struct ConsoleHumanFeedback {
    spinner: Option<ProgressBar>,
}

impl ConsoleHumanFeedback {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Hide `spinner` while the prompt is on screen
    pub fn with_spinner(mut self, spinner: ProgressBar) -> Self {
        self.spinner = Some(spinner);
        self
    }

    fn display_prompt(content: &str) {
        let rule = "═══════════════════════════════════════════════════════════════";
        println!();
        println!("{}", rule.cyan().bold());
        println!("{}", "  Feedback requested".cyan().bold());
        println!("{}", rule.cyan().bold());
        println!();
        println!("{}", content);
        println!();
        println!(
            "{}",
            "Reply with your feedback, or approve the content (empty line to skip).".dimmed()
        );
    }

    fn prompt(content: &str) -> Result<String, HumanFeedbackError> {
        Self::display_prompt(content);
        print!("{} ", "feedback>".magenta().bold());
        io::stdout().flush().map_err(|e| {
            HumanFeedbackError::IoError(format!("Failed to flush stdout: {}", e))
        })?;
        read_reply(&mut io::stdin().lock())
    }
}

impl Default for ConsoleHumanFeedback {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one line; end of input cancels.
fn read_reply(input: &mut impl BufRead) -> Result<String, HumanFeedbackError> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| HumanFeedbackError::IoError(format!("Failed to read input: {}", e)))?;
    if read == 0 {
        return Err(HumanFeedbackError::Cancelled);
    }
    Ok(line.trim().to_string())
}

#[async_trait]
impl HumanFeedbackPort for ConsoleHumanFeedback {
    async fn request_feedback(&self, content: &str) -> Result<String, HumanFeedbackError> {
        let content = content.to_string();
        let spinner = self.spinner.clone();

        tokio::task::spawn_blocking(move || match spinner {
            Some(spinner) => spinner.suspend(|| Self::prompt(&content)),
            None => Self::prompt(&content),
        })
        .await
        .map_err(|e| HumanFeedbackError::IoError(format!("Feedback prompt failed: {}", e)))?
    }
}
