use super::*;

/// Rebuilds the flat, attribute-tagged comment list of one post into a
/// forest of nested comments.
///
/// Nodes are kept in an insertion-order arena and attached to their parents
/// in input order, so sibling order is deterministically first-seen. A
/// duplicate `thingId` follows last-write-wins: the earlier node is dropped
/// entirely and any later reference to the id resolves to the newer node. A
/// non-empty `parentId` that resolves to no known id makes the node an
/// orphan, silently discarded.
pub(crate) async fn assemble<C: Classifier>(
  columns: &CommentColumns,
  classifier: &C,
) -> Result<Vec<Comment>, Error> {
  if let Some(error) = columns.alignment_error() {
    return Err(error);
  }

  let mut lookup = HashMap::new();
  let mut nodes = Vec::with_capacity(columns.row_count());

  for i in 0..columns.row_count() {
    let depth = parse_depth(&columns.depths[i]);

    let sentiment = annotate(classifier, &columns.texts[i]).await;

    nodes.push(Comment {
      author_username: columns.authors[i].clone(),
      content: columns.texts[i].clone(),
      depth,
      parent_id: columns.parent_ids[i].clone(),
      sentiment,
      sub_comments: Vec::new(),
      thing_id: columns.thing_ids[i].clone(),
    });

    lookup.insert(columns.thing_ids[i].clone(), i);
  }

  let mut children = vec![Vec::new(); nodes.len()];
  let mut roots = Vec::new();

  for (i, node) in nodes.iter().enumerate() {
    if lookup.get(&node.thing_id) != Some(&i) {
      continue;
    }

    if node.parent_id.is_empty() || node.depth == 0 {
      roots.push(i);
    } else if let Some(&parent) = lookup.get(&node.parent_id) {
      children[parent].push(i);
    } else {
      debug!(
        thing_id = %node.thing_id,
        parent_id = %node.parent_id,
        "dropping orphan comment"
      );
    }
  }

  Ok(
    roots
      .into_iter()
      .map(|root| materialize(root, &nodes, &children))
      .collect(),
  )
}

fn materialize(
  index: usize,
  nodes: &[Comment],
  children: &[Vec<usize>],
) -> Comment {
  let mut comment = nodes[index].clone();

  comment.sub_comments = children[index]
    .iter()
    .map(|&child| materialize(child, nodes, children))
    .collect();

  comment
}

fn parse_depth(text: &str) -> u32 {
  text.trim().parse().unwrap_or_else(|_| {
    debug!(text, "unparseable comment depth, defaulting to 0");
    0
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Happy;

  impl Classifier for Happy {
    async fn classify(&self, _text: &str) -> Result<String, Error> {
      Ok("happy".to_string())
    }
  }

  struct Broken;

  impl Classifier for Broken {
    async fn classify(&self, _text: &str) -> Result<String, Error> {
      Err(Error::Classifier("offline".to_string()))
    }
  }

  fn columns(rows: &[(&str, &str, &str)]) -> CommentColumns {
    CommentColumns {
      authors: rows.iter().map(|(id, ..)| format!("author_{id}")).collect(),
      depths: rows.iter().map(|(.., depth)| (*depth).to_string()).collect(),
      parent_ids: rows
        .iter()
        .map(|(_, parent, _)| (*parent).to_string())
        .collect(),
      texts: rows.iter().map(|(id, ..)| format!("text_{id}")).collect(),
      thing_ids: rows.iter().map(|(id, ..)| (*id).to_string()).collect(),
    }
  }

  fn ids(forest: &[Comment]) -> Vec<&str> {
    forest
      .iter()
      .map(|comment| comment.thing_id.as_str())
      .collect()
  }

  #[tokio::test]
  async fn empty_input_yields_an_empty_forest() {
    let forest = assemble(&CommentColumns::default(), &Happy).await.unwrap();

    assert!(forest.is_empty());
  }

  #[tokio::test]
  async fn misaligned_columns_are_rejected() {
    let mut columns = columns(&[("a", "", "0"), ("b", "a", "1")]);

    columns.depths.pop();

    assert!(matches!(
      assemble(&columns, &Happy).await,
      Err(Error::MalformedCommentData { .. })
    ));
  }

  #[tokio::test]
  async fn siblings_keep_first_seen_order() {
    let forest =
      assemble(&columns(&[("a", "", "0"), ("b", "a", "1"), ("c", "a", "1")]), &Happy)
        .await
        .unwrap();

    assert_eq!(ids(&forest), ["a"]);
    assert_eq!(ids(&forest[0].sub_comments), ["b", "c"]);
  }

  #[tokio::test]
  async fn grandchildren_attach_under_their_parents() {
    let forest =
      assemble(&columns(&[("a", "", "0"), ("b", "a", "1"), ("c", "b", "2")]), &Happy)
        .await
        .unwrap();

    assert_eq!(ids(&forest), ["a"]);
    assert_eq!(ids(&forest[0].sub_comments), ["b"]);
    assert_eq!(ids(&forest[0].sub_comments[0].sub_comments), ["c"]);
  }

  #[tokio::test]
  async fn root_detection_is_a_disjunction() {
    let forest = assemble(
      &columns(&[("a", "missing", "0"), ("b", "", "7"), ("c", "a", "1")]),
      &Happy,
    )
    .await
    .unwrap();

    assert_eq!(ids(&forest), ["a", "b"]);
    assert_eq!(ids(&forest[0].sub_comments), ["c"]);
  }

  #[tokio::test]
  async fn orphans_are_discarded_everywhere() {
    let forest = assemble(
      &columns(&[("a", "", "0"), ("b", "ghost", "1"), ("c", "b", "2")]),
      &Happy,
    )
    .await
    .unwrap();

    // b's parent is unknown, so neither b nor anything only reachable
    // through it survives.
    assert_eq!(ids(&forest), ["a"]);
    assert!(forest[0].sub_comments.is_empty());
  }

  #[tokio::test]
  async fn duplicate_thing_id_keeps_the_last_node() {
    let forest = assemble(
      &columns(&[("a", "", "0"), ("x", "a", "1"), ("x", "a", "1"), ("y", "x", "2")]),
      &Happy,
    )
    .await
    .unwrap();

    let roots = &forest[0].sub_comments;

    assert_eq!(ids(roots), ["x"]);
    assert_eq!(roots[0].author_username, "author_x");
    assert_eq!(ids(&roots[0].sub_comments), ["y"]);
  }

  #[tokio::test]
  async fn unparseable_depth_defaults_to_zero() {
    let forest = assemble(&columns(&[("a", "b", "not-a-number")]), &Happy)
      .await
      .unwrap();

    assert_eq!(ids(&forest), ["a"]);
    assert_eq!(forest[0].depth, 0);
  }

  #[tokio::test]
  async fn every_comment_gets_a_sentiment() {
    let forest =
      assemble(&columns(&[("a", "", "0"), ("b", "a", "1")]), &Happy)
        .await
        .unwrap();

    assert_eq!(forest[0].sentiment, "happy");
    assert_eq!(forest[0].sub_comments[0].sentiment, "happy");
  }

  #[tokio::test]
  async fn classifier_failure_leaves_labels_empty() {
    let forest = assemble(&columns(&[("a", "", "0")]), &Broken).await.unwrap();

    assert_eq!(forest[0].sentiment, "");
  }
}
