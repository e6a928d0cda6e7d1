use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Credentials {
  pub(crate) password: String,
  pub(crate) username: String,
}

/// Process-wide configuration, read from the environment exactly once at
/// startup. The classifier credential is deliberately optional: its absence
/// degrades every sentiment label to empty instead of aborting the run.
#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) credentials: Credentials,
  pub(crate) deadline: Duration,
  pub(crate) index_url: String,
  pub(crate) login_url: String,
  pub(crate) openai_api_key: Option<String>,
  pub(crate) output: PathBuf,
  pub(crate) scroll: ScrollSettings,
  pub(crate) webdriver_url: String,
}

impl Config {
  const DEFAULT_DEADLINE_SECS: u64 = 5000;

  const DEFAULT_INDEX_URL: &str = "https://www.reddit.com/best/communities";

  const DEFAULT_LOGIN_URL: &str = "https://www.reddit.com/login/";

  const DEFAULT_OUTPUT: &str = "communities.json";

  const DEFAULT_SCROLL_INTERVAL_SECS: u64 = 2;

  const DEFAULT_SCROLL_MAX_POLLS: usize = 60;

  const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

  pub(crate) fn load() -> Result<Self> {
    let credentials = Credentials {
      password: required("BURROW_PASSWORD")?,
      username: required("BURROW_USERNAME")?,
    };

    let scroll = ScrollSettings {
      interval: Duration::from_secs(seconds(
        "BURROW_SCROLL_INTERVAL_SECS",
        Self::DEFAULT_SCROLL_INTERVAL_SECS,
      )?),
      max_polls: number("BURROW_SCROLL_MAX_POLLS", Self::DEFAULT_SCROLL_MAX_POLLS)?,
    };

    Ok(Self {
      credentials,
      deadline: Duration::from_secs(seconds(
        "BURROW_DEADLINE_SECS",
        Self::DEFAULT_DEADLINE_SECS,
      )?),
      index_url: optional("BURROW_INDEX_URL")
        .unwrap_or_else(|| Self::DEFAULT_INDEX_URL.to_string()),
      login_url: optional("BURROW_LOGIN_URL")
        .unwrap_or_else(|| Self::DEFAULT_LOGIN_URL.to_string()),
      openai_api_key: optional("OPENAI_API_KEY"),
      output: optional("BURROW_OUTPUT")
        .map_or_else(|| PathBuf::from(Self::DEFAULT_OUTPUT), PathBuf::from),
      scroll,
      webdriver_url: optional("BURROW_WEBDRIVER_URL")
        .unwrap_or_else(|| Self::DEFAULT_WEBDRIVER_URL.to_string()),
    })
  }
}

fn number(name: &str, default: usize) -> Result<usize> {
  optional(name).map_or(Ok(default), |value| {
    value
      .parse()
      .with_context(|| format!("{name} is not a valid count: {value:?}"))
  })
}

fn optional(name: &str) -> Option<String> {
  env::var(name).ok().filter(|value| !value.is_empty())
}

fn required(name: &str) -> Result<String> {
  env::var(name)
    .with_context(|| format!("missing required environment variable {name}"))
}

fn seconds(name: &str, default: u64) -> Result<u64> {
  optional(name).map_or(Ok(default), |value| {
    value
      .parse()
      .with_context(|| format!("{name} is not a number of seconds: {value:?}"))
  })
}
