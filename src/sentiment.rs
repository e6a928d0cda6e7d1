use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Sentiment {
  Angry,
  Approving,
  Discouraging,
  Excited,
  Happy,
  Negation,
  Sad,
  Supportive,
}

impl Sentiment {
  pub(crate) fn all() -> &'static [Sentiment] {
    &[
      Sentiment::Angry,
      Sentiment::Approving,
      Sentiment::Discouraging,
      Sentiment::Excited,
      Sentiment::Happy,
      Sentiment::Negation,
      Sentiment::Sad,
      Sentiment::Supportive,
    ]
  }

  /// Parses a classifier answer leniently: surrounding whitespace, case and
  /// trailing punctuation are ignored. Anything outside the closed label set
  /// yields `None`.
  pub(crate) fn from_label(label: &str) -> Option<Sentiment> {
    let normalized = label
      .trim()
      .trim_end_matches(['.', '!', ','])
      .to_lowercase();

    Self::all()
      .iter()
      .copied()
      .find(|sentiment| sentiment.label() == normalized)
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Sentiment::Angry => "angry",
      Sentiment::Approving => "approving",
      Sentiment::Discouraging => "discouraging",
      Sentiment::Excited => "excited",
      Sentiment::Happy => "happy",
      Sentiment::Negation => "negation",
      Sentiment::Sad => "sad",
      Sentiment::Supportive => "supportive",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_label_accepts_every_known_label() {
    for sentiment in Sentiment::all() {
      assert_eq!(Sentiment::from_label(sentiment.label()), Some(*sentiment));
    }
  }

  #[test]
  fn from_label_ignores_case_whitespace_and_trailing_punctuation() {
    assert_eq!(Sentiment::from_label(" Happy.\n"), Some(Sentiment::Happy));
    assert_eq!(Sentiment::from_label("SUPPORTIVE!"), Some(Sentiment::Supportive));
  }

  #[test]
  fn from_label_rejects_unknown_labels() {
    assert_eq!(Sentiment::from_label("ecstatic"), None);
    assert_eq!(Sentiment::from_label(""), None);
  }
}
