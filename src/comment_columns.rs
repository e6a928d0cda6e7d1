use super::*;

/// The five attribute arrays extracted from one post page. Each comes from an
/// independent DOM query, so alignment is a precondition callers must check,
/// not a guarantee.
#[derive(Clone, Debug, Default)]
pub(crate) struct CommentColumns {
  pub(crate) authors: Vec<String>,
  pub(crate) depths: Vec<String>,
  pub(crate) parent_ids: Vec<String>,
  pub(crate) texts: Vec<String>,
  pub(crate) thing_ids: Vec<String>,
}

impl CommentColumns {
  pub(crate) fn alignment_error(&self) -> Option<Error> {
    if self.is_aligned() {
      None
    } else {
      Some(Error::MalformedCommentData {
        authors: self.authors.len(),
        depths: self.depths.len(),
        parent_ids: self.parent_ids.len(),
        texts: self.texts.len(),
        thing_ids: self.thing_ids.len(),
      })
    }
  }

  pub(crate) fn is_aligned(&self) -> bool {
    let len = self.authors.len();

    self.texts.len() == len
      && self.thing_ids.len() == len
      && self.parent_ids.len() == len
      && self.depths.len() == len
  }

  pub(crate) fn row_count(&self) -> usize {
    self.authors.len()
  }
}
