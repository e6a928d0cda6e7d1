use {
  super::*,
  thirtyfour::{By, DesiredCapabilities, WebDriver, prelude::*},
};

/// Production [`PageDriver`] backed by a `WebDriver` session. One session is
/// opened at startup and reused for every navigation in the run.
pub(crate) struct Browser {
  driver: WebDriver,
}

impl Browser {
  const LIST_ATTRIBUTES_SCRIPT: &str = "\
    return Array.from(document.querySelectorAll(arguments[0]))\
      .map(el => el.getAttribute(arguments[1]) ?? '');";

  pub(crate) async fn connect(webdriver_url: &str) -> Result<Self, Error> {
    let capabilities = DesiredCapabilities::chrome();

    let driver = WebDriver::new(webdriver_url, capabilities).await?;

    Ok(Self { driver })
  }

  pub(crate) async fn quit(self) -> Result<(), Error> {
    self.driver.quit().await?;

    Ok(())
  }
}

impl PageDriver for Browser {
  async fn evaluate(&self, script: &str) -> Result<Value, Error> {
    Ok(self.driver.execute(script, Vec::new()).await?.convert()?)
  }

  async fn navigate(&self, url: &str) -> Result<(), Error> {
    Ok(self.driver.goto(url).await?)
  }

  async fn read_attribute_list(
    &self,
    selector: &str,
    attribute: &str,
  ) -> Result<Vec<String>, Error> {
    Ok(
      self
        .driver
        .execute(
          Self::LIST_ATTRIBUTES_SCRIPT,
          vec![Value::from(selector), Value::from(attribute)],
        )
        .await?
        .convert()?,
    )
  }

  async fn read_text(&self, selector: &str) -> Result<String, Error> {
    Ok(self.driver.find(By::Css(selector)).await?.text().await?)
  }

  async fn send_keys(&self, selector: &str, text: &str) -> Result<(), Error> {
    Ok(
      self
        .driver
        .find(By::Css(selector))
        .await?
        .send_keys(text)
        .await?,
    )
  }

  async fn wait_visible(&self, selector: &str) -> Result<(), Error> {
    let element = self.driver.query(By::Css(selector)).first().await?;

    Ok(element.wait_until().displayed().await?)
  }
}
