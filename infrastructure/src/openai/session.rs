//! Chat-completions session
//!
//! The API is stateless, so the session keeps the full message list and
//! the offered tools, and resends both on every call.

use super::client::ChatClient;
use super::types::WireMessage;
use async_trait::async_trait;
use docgen_application::ports::llm_gateway::{GatewayError, LlmSession, ToolResultMessage};
use docgen_domain::{LlmResponse, Model};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct OpenAiSession {
    client: Arc<ChatClient>,
    model: Model,
    messages: Mutex<Vec<WireMessage>>,
    tools: Mutex<Vec<Value>>,
}

impl OpenAiSession {
    pub fn new(client: Arc<ChatClient>, model: Model, messages: Vec<WireMessage>) -> Self {
        Self {
            client,
            model,
            messages: Mutex::new(messages),
            tools: Mutex::new(Vec::new()),
        }
    }

    /// Append `pending`, call the API with the stored tools and keep the
    /// assistant reply.
    ///
    /// Nothing is appended when the call fails.
    async fn round_trip(&self, pending: Vec<WireMessage>) -> Result<LlmResponse, GatewayError> {
        let tools = self.tools.lock().await.clone();
        let mut messages = self.messages.lock().await;
        let base = messages.len();
        messages.extend(pending);

        let result = self
            .client
            .complete(&self.model, &messages, &tools)
            .await
            .and_then(|r| r.into_parts());

        match result {
            Ok((response, assistant)) => {
                messages.push(assistant);
                Ok(response)
            }
            Err(e) => {
                messages.truncate(base);
                Err(e)
            }
        }
    }

    #[cfg(test)]
    async fn message_count(&self) -> usize {
        self.messages.lock().await.len()
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let response = self
            .round_trip(vec![WireMessage::user(content)])
            .await?;
        Ok(response.text_content())
    }

    async fn complete_with_tools(&self, tools: &[Value]) -> Result<LlmResponse, GatewayError> {
        *self.tools.lock().await = tools.to_vec();
        self.round_trip(Vec::new()).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        let pending = results.iter().map(WireMessage::tool_result).collect();
        self.round_trip(pending).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::client::Endpoint;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve canned HTTP responses, one connection each, and hand back the
    /// raw requests in order.
    async fn scripted_server(
        replies: Vec<(&'static str, &'static str)>,
    ) -> (String, tokio::task::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in replies {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    let n = socket.read(&mut buf).await.unwrap();
                    request.extend_from_slice(&buf[..n]);
                    let text = String::from_utf8_lossy(&request);
                    if let Some(header_end) = text.find("\r\n\r\n") {
                        let content_length = text[..header_end]
                            .lines()
                            .find_map(|l| {
                                let lower = l.to_ascii_lowercase();
                                lower
                                    .strip_prefix("content-length:")
                                    .map(|v| v.trim().parse::<usize>().unwrap())
                            })
                            .unwrap_or(0);
                        if request.len() >= header_end + 4 + content_length {
                            break;
                        }
                    }
                    if n == 0 {
                        break;
                    }
                }

                let reply = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
                requests.push(String::from_utf8_lossy(&request).into_owned());
            }
            requests
        });

        (format!("http://{}", addr), handle)
    }

    async fn one_shot_server(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<Vec<String>>) {
        scripted_server(vec![(status, body)]).await
    }

    fn session(base_url: String) -> OpenAiSession {
        let client = ChatClient::new(
            Endpoint::OpenAi {
                base_url,
                organization: None,
            },
            "sk-test",
            Duration::from_secs(5),
        )
        .unwrap();
        OpenAiSession::new(
            Arc::new(client),
            Model::Gpt4o,
            vec![WireMessage::system("Be brief")],
        )
    }

    #[tokio::test]
    async fn test_send_appends_user_and_assistant_messages() {
        let (url, server) = one_shot_server(
            "200 OK",
            r#"{"model":"gpt-4o","choices":[{"message":{"role":"assistant","content":"Hello!"},"finish_reason":"stop"}]}"#,
        )
        .await;
        let session = session(url);

        let reply = session.send("Hi").await.unwrap();

        assert_eq!(reply, "Hello!");
        assert_eq!(session.message_count().await, 3);
        let request = server.await.unwrap().remove(0);
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""content":"Hi""#));
    }

    #[tokio::test]
    async fn test_failed_call_leaves_history_untouched() {
        let (url, server) = one_shot_server(
            "429 Too Many Requests",
            r#"{"error":{"message":"Slow down"}}"#,
        )
        .await;
        let session = session(url);

        let err = session.send("Hi").await.unwrap_err();

        assert!(matches!(err, GatewayError::RateLimited(msg) if msg.contains("Slow down")));
        assert_eq!(session.message_count().await, 1);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_tool_calls_are_parsed() {
        let (url, server) = one_shot_server(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":null,"tool_calls":[{"id":"call_1","type":"function","function":{"name":"RepoFilePlugin-read_file_by_name","arguments":"{\"file_name\":\"main.py\"}"}}]},"finish_reason":"tool_calls"}]}"#,
        )
        .await;
        let session = session(url);

        let response = session.complete_with_tools(&[]).await.unwrap();

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "RepoFilePlugin-read_file_by_name");
        assert_eq!(calls[0].get_string("file_name"), Some("main.py"));
        assert_eq!(calls[0].native_id.as_deref(), Some("call_1"));
        assert_eq!(session.message_count().await, 2);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_tools_are_resent_with_tool_results() {
        let (url, server) = scripted_server(vec![
            (
                "200 OK",
                r#"{"choices":[{"message":{"role":"assistant","content":null,"tool_calls":[{"id":"call_1","type":"function","function":{"name":"RepoFilePlugin-list_directory","arguments":"{\"path\":\"src\"}"}}]},"finish_reason":"tool_calls"}]}"#,
            ),
            (
                "200 OK",
                r#"{"choices":[{"message":{"role":"assistant","content":"Done"},"finish_reason":"stop"}]}"#,
            ),
        ])
        .await;
        let session = session(url);
        let tools = vec![serde_json::json!({
            "type": "function",
            "function": {"name": "RepoFilePlugin-list_directory", "parameters": {"type": "object"}}
        })];

        let first = session.complete_with_tools(&tools).await.unwrap();
        assert_eq!(first.tool_calls().len(), 1);
        let second = session
            .send_tool_results(&[ToolResultMessage {
                tool_use_id: "call_1".to_string(),
                tool_name: "RepoFilePlugin-list_directory".to_string(),
                output: "main.py".to_string(),
                is_error: false,
            }])
            .await
            .unwrap();

        assert_eq!(second.text_content(), "Done");
        assert_eq!(session.message_count().await, 4);
        let requests = server.await.unwrap();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert!(request.contains(r#""tools":["#), "request: {request}");
            assert!(request.contains("RepoFilePlugin-list_directory"));
        }
        assert!(requests[1].contains(r#""tool_call_id":"call_1""#));
    }
}
