use super::*;

/// The capabilities the traversal needs from a remote page renderer. The
/// handle is owned by exactly one caller and never invoked concurrently, so
/// implementations do not need to be reentrant.
pub(crate) trait PageDriver {
  async fn evaluate(&self, script: &str) -> Result<Value, Error>;

  async fn navigate(&self, url: &str) -> Result<(), Error>;

  async fn read_attribute_list(
    &self,
    selector: &str,
    attribute: &str,
  ) -> Result<Vec<String>, Error>;

  async fn read_text(&self, selector: &str) -> Result<String, Error>;

  async fn send_keys(&self, selector: &str, text: &str) -> Result<(), Error>;

  async fn wait_visible(&self, selector: &str) -> Result<(), Error>;
}
