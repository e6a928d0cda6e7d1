use {
  anyhow::Context,
  browser::Browser,
  chat_request::{ChatMessage, ChatRequest},
  chat_response::ChatResponse,
  classifier::{Classifier, OpenAiClassifier, annotate},
  comment::Comment,
  comment_columns::CommentColumns,
  community::Community,
  config::{Config, Credentials},
  driver::PageDriver,
  error::Error,
  post::Post,
  scroll::ScrollSettings,
  sentiment::Sentiment,
  serde::{Deserialize, Serialize},
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  walker::Walker,
};

mod browser;
mod chat_request;
mod chat_response;
mod classifier;
mod comment;
mod comment_columns;
mod community;
mod config;
mod driver;
mod error;
mod forest;
mod post;
mod scroll;
mod sentiment;
mod snapshot;
mod walker;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  let config = Config::load().context("invalid configuration")?;

  let browser = Browser::connect(&config.webdriver_url)
    .await
    .context("could not open a webdriver session")?;

  let classifier = OpenAiClassifier::new(config.openai_api_key.clone());

  let mut walker = Walker::new(browser, classifier, config.scroll);

  walker
    .login(&config.login_url, &config.credentials)
    .await
    .context("login failed")?;

  let traversal = tokio::time::timeout(
    config.deadline,
    walker.walk(&config.index_url),
  )
  .await;

  match traversal {
    Ok(outcome) => outcome.context("community index traversal failed")?,
    Err(_) => warn!("run deadline exceeded, keeping the partial snapshot"),
  }

  let (browser, communities) = walker.into_parts();

  snapshot::write(&communities, &config.output)
    .with_context(|| format!("could not write {}", config.output.display()))?;

  info!(
    communities = communities.len(),
    path = %config.output.display(),
    "snapshot written"
  );

  if let Err(error) = browser.quit().await {
    warn!(%error, "could not close the webdriver session");
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
