//! User plugin: request_user_feedback
//!
//! Relays a draft to a person through the
//! [`HumanFeedbackPort`](docgen_application::HumanFeedbackPort) and returns
//! what they answered.

use async_trait::async_trait;
use docgen_application::ports::human_feedback::{HumanFeedbackError, HumanFeedbackPort};
use docgen_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    plugin::{Plugin, PluginError},
};
use std::sync::Arc;

pub const PLUGIN_NAME: &str = "UserPlugin";

pub const REQUEST_USER_FEEDBACK: &str = "request_user_feedback";

pub struct UserPlugin {
    feedback: Arc<dyn HumanFeedbackPort>,
}

impl UserPlugin {
    pub fn new(feedback: Arc<dyn HumanFeedbackPort>) -> Self {
        Self { feedback }
    }

    pub async fn request_user_feedback(&self, content: &str) -> Result<String, PluginError> {
        match self.feedback.request_feedback(content).await {
            Ok(reply) if reply.trim().is_empty() => {
                Ok("The user gave no feedback.".to_string())
            }
            Ok(reply) => Ok(reply),
            Err(HumanFeedbackError::Cancelled) => Err(PluginError::ExecutionFailed(
                "The user cancelled the feedback request.".to_string(),
            )),
            Err(HumanFeedbackError::IoError(e)) => Err(PluginError::ExecutionFailed(format!(
                "Could not read user feedback: {}",
                e
            ))),
        }
    }
}

#[async_trait]
impl Plugin for UserPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn functions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::new(
                REQUEST_USER_FEEDBACK,
                "Show the current content to the user and return their feedback.",
            )
            .with_parameter(ToolParameter::new(
                "content",
                "The content to show to the user.",
                true,
            )),
        ]
    }

    async fn invoke(&self, function: &str, call: &ToolCall) -> Result<String, PluginError> {
        match function {
            REQUEST_USER_FEEDBACK => {
                let content = call
                    .require_string("content")
                    .map_err(PluginError::InvalidArgument)?;
                self.request_user_feedback(content).await
            }
            other => Err(PluginError::NotFound(format!(
                "Function {} not found in {}.",
                other, PLUGIN_NAME
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_application::AutoApproveFeedback;
    use std::sync::Mutex;

    struct RecordingFeedback {
        shown: Mutex<Vec<String>>,
        reply: Result<&'static str, ()>,
    }

    #[async_trait]
    impl HumanFeedbackPort for RecordingFeedback {
        async fn request_feedback(&self, content: &str) -> Result<String, HumanFeedbackError> {
            self.shown.lock().unwrap().push(content.to_string());
            self.reply
                .map(str::to_string)
                .map_err(|_| HumanFeedbackError::Cancelled)
        }
    }

    #[tokio::test]
    async fn test_reply_is_returned_and_content_shown() {
        let feedback = Arc::new(RecordingFeedback {
            shown: Mutex::new(Vec::new()),
            reply: Ok("Add a conclusion."),
        });
        let plugin = UserPlugin::new(feedback.clone());

        let call = ToolCall::new("UserPlugin-request_user_feedback").with_arg("content", "# Draft");
        let reply = plugin.invoke(REQUEST_USER_FEEDBACK, &call).await.unwrap();

        assert_eq!(reply, "Add a conclusion.");
        assert_eq!(feedback.shown.lock().unwrap().as_slice(), &["# Draft"]);
    }

    #[tokio::test]
    async fn test_empty_reply_is_reported() {
        let plugin = UserPlugin::new(Arc::new(AutoApproveFeedback::with_reply("  ")));
        assert_eq!(
            plugin.request_user_feedback("x").await.unwrap(),
            "The user gave no feedback."
        );
    }

    #[tokio::test]
    async fn test_cancel_is_an_error() {
        let plugin = UserPlugin::new(Arc::new(RecordingFeedback {
            shown: Mutex::new(Vec::new()),
            reply: Err(()),
        }));
        let err = plugin.request_user_feedback("x").await.unwrap_err();
        assert!(matches!(err, PluginError::ExecutionFailed(_)));
    }
}
