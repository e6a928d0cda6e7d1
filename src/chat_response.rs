use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
  pub(crate) message: ChatReply,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatReply {
  pub(crate) content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
  pub(crate) choices: Vec<ChatChoice>,
}
