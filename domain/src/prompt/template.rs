//! Prompt templates for the termination check

/// Templates for asking a model whether the group chat is finished
pub struct TerminationPromptTemplate;

impl TerminationPromptTemplate {
    /// System prompt for the completion check
    pub fn system() -> &'static str {
        r#"You are a strict reviewer of a collaborative document creation chat.
Determine whether the user has approved the latest version of the document.
Respond with a single word: "yes" if the user approved the content, otherwise "no"."#
    }

    /// User prompt carrying the conversation to judge
    pub fn query(transcript: &str) -> String {
        format!(
            r#"Here is the conversation so far:

{}

Has the user approved the content? Answer "yes" or "no"."#,
            transcript
        )
    }
}
