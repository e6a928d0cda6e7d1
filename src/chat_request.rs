use super::*;

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
  pub(crate) content: String,
  pub(crate) role: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
  pub(crate) messages: Vec<ChatMessage>,
  pub(crate) model: &'static str,
}
