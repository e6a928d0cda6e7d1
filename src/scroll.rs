use super::*;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ScrollSettings {
  /// Debounce between polls so lazily-loaded content can catch up. This is a
  /// heuristic, not a correctness guarantee.
  pub(crate) interval: Duration,
  /// Ceiling on polls. Pages that grow forever would otherwise stall the
  /// whole run; hitting the ceiling stops scrolling and extraction proceeds
  /// with whatever has loaded.
  pub(crate) max_polls: usize,
}

const GROWTH_METRIC_SCRIPT: &str =
  "window.scrollTo(0, document.body.scrollHeight); \
   return document.body.scrollHeight;";

/// Scrolls to the bottom of the document until two consecutive height
/// readings are equal, meaning no more lazy-loaded content arrived.
pub(crate) async fn stabilize<D: PageDriver>(
  driver: &D,
  settings: ScrollSettings,
) -> Result<(), Error> {
  let mut last_height = None;

  for poll in 1usize.. {
    let value = driver.evaluate(GROWTH_METRIC_SCRIPT).await?;

    let height = value.as_i64().ok_or_else(|| {
      Error::Driver(format!("growth metric is not a number: {value}"))
    })?;

    debug!(poll, height, "scroll poll");

    if last_height == Some(height) {
      break;
    }

    if poll >= settings.max_polls {
      warn!(
        polls = poll,
        "page kept growing past the scroll ceiling, extracting as-is"
      );
      break;
    }

    last_height = Some(height);

    tokio::time::sleep(settings.interval).await;
  }

  Ok(())
}
