use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  pub(crate) author_username: String,
  pub(crate) content: String,
  pub(crate) depth: u32,
  pub(crate) parent_id: String,
  pub(crate) sentiment: String,
  pub(crate) sub_comments: Vec<Comment>,
  pub(crate) thing_id: String,
}
