use super::*;

/// Maps a unit of text to a sentiment label. One call is made per post and
/// per individual comment, never batched.
pub(crate) trait Classifier {
  async fn classify(&self, text: &str) -> Result<String, Error>;
}

/// Wraps [`Classifier::classify`] with the degrade-to-empty policy: any
/// failure, and any answer outside the closed label set, resolves to an
/// empty label without interrupting the surrounding traversal.
pub(crate) async fn annotate<C: Classifier>(
  classifier: &C,
  text: &str,
) -> String {
  match classifier.classify(text).await {
    Ok(label) => match Sentiment::from_label(&label) {
      Some(sentiment) => sentiment.label().to_string(),
      None => {
        warn!(%label, "classifier answered outside the label set");
        String::new()
      }
    },
    Err(error) => {
      warn!(%error, "sentiment classification failed");
      String::new()
    }
  }
}

pub(crate) struct OpenAiClassifier {
  api_key: Option<String>,
  client: reqwest::Client,
}

impl OpenAiClassifier {
  const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

  const MODEL: &str = "gpt-4";

  const SYSTEM_PROMPT: &str = "You are a sentiment analysis assistant.";

  pub(crate) fn new(api_key: Option<String>) -> Self {
    Self {
      api_key,
      client: reqwest::Client::new(),
    }
  }

  fn prompt(text: &str) -> String {
    format!(
      "Analyze the sentiment of the following text and respond with one \
       word: {text}. Possible sentiments: sad, happy, angry, excited, \
       supportive, discouraging, approving, negation."
    )
  }
}

impl Classifier for OpenAiClassifier {
  async fn classify(&self, text: &str) -> Result<String, Error> {
    let api_key = self
      .api_key
      .as_deref()
      .ok_or_else(|| Error::Classifier("api key is missing".to_string()))?;

    let request = ChatRequest {
      messages: vec![
        ChatMessage {
          content: Self::SYSTEM_PROMPT.to_string(),
          role: "system",
        },
        ChatMessage {
          content: Self::prompt(text),
          role: "user",
        },
      ],
      model: Self::MODEL,
    };

    let response = self
      .client
      .post(Self::COMPLETIONS_URL)
      .bearer_auth(api_key)
      .json(&request)
      .send()
      .await?
      .json::<ChatResponse>()
      .await?;

    response
      .choices
      .into_iter()
      .next()
      .map(|choice| choice.message.content)
      .filter(|content| !content.is_empty())
      .ok_or_else(|| Error::Classifier("empty response".to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Canned(Result<&'static str, ()>);

  impl Classifier for Canned {
    async fn classify(&self, _text: &str) -> Result<String, Error> {
      self
        .0
        .map(ToString::to_string)
        .map_err(|()| Error::Classifier("boom".to_string()))
    }
  }

  #[tokio::test]
  async fn annotate_normalizes_answers_into_the_label_set() {
    assert_eq!(annotate(&Canned(Ok(" Happy.")), "text").await, "happy");
  }

  #[tokio::test]
  async fn annotate_resolves_failures_to_an_empty_label() {
    assert_eq!(annotate(&Canned(Err(())), "text").await, "");
  }

  #[tokio::test]
  async fn annotate_resolves_out_of_set_answers_to_an_empty_label() {
    assert_eq!(annotate(&Canned(Ok("ambivalent")), "text").await, "");
  }

  #[tokio::test]
  async fn classify_fails_without_an_api_key() {
    let classifier = OpenAiClassifier::new(None);

    assert!(matches!(
      classifier.classify("text").await,
      Err(Error::Classifier(_))
    ));
  }
}
