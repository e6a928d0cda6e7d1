use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Post {
  pub(crate) author_username: String,
  pub(crate) comments: Vec<Comment>,
  pub(crate) content: String,
  pub(crate) sentiment: String,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl Post {
  pub(crate) fn empty(url: String) -> Self {
    Self {
      author_username: String::new(),
      comments: Vec::new(),
      content: String::new(),
      sentiment: String::new(),
      title: String::new(),
      url,
    }
  }
}
