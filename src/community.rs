use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Community {
  pub(crate) posts: Vec<Post>,
  pub(crate) url: String,
}
