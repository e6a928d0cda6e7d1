use super::*;

/// Writes the aggregated run output: a pretty-printed JSON list of
/// communities with their nested posts and comment forests.
pub(crate) fn write(communities: &[Community], path: &Path) -> Result {
  let serialized = serde_json::to_vec_pretty(communities)?;

  fs::write(path, serialized)?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Vec<Community> {
    vec![Community {
      posts: vec![Post {
        author_username: "ada".to_string(),
        comments: vec![Comment {
          author_username: "grace".to_string(),
          content: "first".to_string(),
          depth: 0,
          parent_id: String::new(),
          sentiment: "approving".to_string(),
          sub_comments: Vec::new(),
          thing_id: "t1_a".to_string(),
        }],
        content: "body".to_string(),
        sentiment: "happy".to_string(),
        title: "title".to_string(),
        url: "https://example.test/r/one/p/1".to_string(),
      }],
      url: "https://example.test/r/one".to_string(),
    }]
  }

  #[test]
  fn writes_two_space_indented_json_with_the_nested_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("communities.json");

    write(&sample(), &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();

    assert!(written.starts_with("[\n  {"));
    assert!(written.contains("\"authorUsername\": \"grace\""));
    assert!(written.contains("\"subComments\": []"));

    let parsed = serde_json::from_str::<Vec<Community>>(&written).unwrap();

    assert_eq!(parsed, sample());
  }
}
