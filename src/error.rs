use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("classifier call failed: {0}")]
  Classifier(String),
  #[error("page driver call failed: {0}")]
  Driver(String),
  #[error(
    "comment attribute arrays are misaligned: \
     authors={authors}, texts={texts}, thing_ids={thing_ids}, \
     parent_ids={parent_ids}, depths={depths}"
  )]
  MalformedCommentData {
    authors: usize,
    depths: usize,
    parent_ids: usize,
    texts: usize,
    thing_ids: usize,
  },
  #[error("could not parse community page count from {text:?}")]
  PageCount { text: String },
}

impl From<reqwest::Error> for Error {
  fn from(error: reqwest::Error) -> Self {
    Self::Classifier(error.to_string())
  }
}

impl From<thirtyfour::error::WebDriverError> for Error {
  fn from(error: thirtyfour::error::WebDriverError) -> Self {
    Self::Driver(error.to_string())
  }
}
