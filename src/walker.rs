use super::*;

const COMMENT_AUTHORS_SCRIPT: &str =
  "return Array.from(document.querySelectorAll('faceplate-tracker[noun=comment_author]'))\
    .map(a => a.innerText);";

const COMMENT_SELECTOR: &str = "shreddit-comment";

const COMMENT_TEXTS_SCRIPT: &str =
  "return Array.from(document.querySelectorAll('div[slot=comment]'))\
    .map(a => a.innerText);";

const COMMUNITY_LINKS_SCRIPT: &str =
  "return Array.from(document.querySelectorAll('.items-start a'))\
    .map(a => a.href);";

const EXPAND_PAGINATION_SCRIPT: &str =
  "document.querySelector('shreddit-ud-pagination')\
    .shadowRoot.querySelector('icon-caret-down').click();";

const LAST_PAGE_NUMBER_SELECTOR: &str =
  "#directory-pagination .page-number:last-of-type";

const LOGIN_PASSWORD_SELECTOR: &str = "#login-password";

const LOGIN_USERNAME_SELECTOR: &str = "#login-username";

const POST_AUTHOR_SELECTOR: &str = ".author-name:first-of-type";

const POST_BODY_SELECTOR: &str =
  "div[data-post-click-location=\"text-body\"]";

const POST_LINKS_SCRIPT: &str =
  "return Array.from(document.querySelectorAll('a[slot=\"full-post-link\"]'))\
    .map(a => a.href);";

const POST_TITLE_SELECTOR: &str = "h1[slot=title]";

/// Drives the three pagination levels (community index pages, community
/// pages, posts) through a single page-driver session, strictly
/// sequentially. Harvested communities accumulate on the walker itself so a
/// deadline abort mid-walk still leaves everything gathered so far
/// available for the snapshot.
pub(crate) struct Walker<D, C> {
  classifier: C,
  communities: Vec<Community>,
  driver: D,
  scroll: ScrollSettings,
}

impl<D: PageDriver, C: Classifier> Walker<D, C> {
  async fn attribute_list_or_empty(&self, attribute: &str) -> Vec<String> {
    match self
      .driver
      .read_attribute_list(COMMENT_SELECTOR, attribute)
      .await
    {
      Ok(values) => values,
      Err(error) => {
        debug!(attribute, %error, "comment attribute query failed");
        Vec::new()
      }
    }
  }

  /// Best-effort extraction of the five comment attribute arrays. Each DOM
  /// query degrades independently to an empty array; a partial failure then
  /// shows up as misaligned columns downstream.
  async fn collect_comment_columns(&self) -> CommentColumns {
    CommentColumns {
      authors: self.evaluate_list_or_empty(COMMENT_AUTHORS_SCRIPT).await,
      depths: self.attribute_list_or_empty("depth").await,
      parent_ids: self.attribute_list_or_empty("parentid").await,
      texts: self.evaluate_list_or_empty(COMMENT_TEXTS_SCRIPT).await,
      thing_ids: self.attribute_list_or_empty("thingid").await,
    }
  }

  async fn community_links(
    &self,
    index_url: &str,
    page: usize,
  ) -> Result<Vec<String>, Error> {
    self.driver.navigate(&format!("{index_url}/{page}")).await?;

    string_list(self.driver.evaluate(COMMUNITY_LINKS_SCRIPT).await?)
  }

  async fn community_page_count(
    &self,
    index_url: &str,
  ) -> Result<usize, Error> {
    self.driver.navigate(&format!("{index_url}/1")).await?;

    tokio::time::sleep(self.scroll.interval).await;

    self.driver.evaluate(EXPAND_PAGINATION_SCRIPT).await?;

    self.driver.wait_visible(LAST_PAGE_NUMBER_SELECTOR).await?;

    let text = self.driver.read_text(LAST_PAGE_NUMBER_SELECTOR).await?;

    parse_page_count(&text)
  }

  async fn evaluate_list_or_empty(&self, script: &str) -> Vec<String> {
    match self.driver.evaluate(script).await {
      Ok(value) => string_list(value).unwrap_or_default(),
      Err(error) => {
        debug!(%error, "list extraction failed");
        Vec::new()
      }
    }
  }

  async fn harvest_community(&self, url: &str) -> Community {
    info!(url, "harvesting community");

    let post_urls = match self.post_links(url).await {
      Ok(urls) => urls,
      Err(error) => {
        warn!(url, %error, "could not list posts, recording empty community");
        Vec::new()
      }
    };

    let mut posts = Vec::with_capacity(post_urls.len());

    for post_url in post_urls {
      posts.push(self.harvest_post(&post_url).await);
    }

    Community {
      posts,
      url: url.to_string(),
    }
  }

  async fn harvest_post(&self, url: &str) -> Post {
    let mut post = Post::empty(url.to_string());

    if let Err(error) = self.driver.navigate(url).await {
      warn!(url, %error, "could not open post");
      return post;
    }

    let stabilized = scroll::stabilize(&self.driver, self.scroll).await;

    post.title = self.read_field_or_empty(POST_TITLE_SELECTOR).await;
    post.content = self.read_field_or_empty(POST_BODY_SELECTOR).await;
    post.author_username =
      self.read_field_or_empty(POST_AUTHOR_SELECTOR).await;

    match stabilized {
      Ok(()) => {
        let columns = self.collect_comment_columns().await;

        match forest::assemble(&columns, &self.classifier).await {
          Ok(comments) => post.comments = comments,
          Err(error) => {
            warn!(url, %error, "skipping comment reconstruction for post");
          }
        }
      }
      Err(error) => {
        warn!(url, %error, "scroll never stabilized, comments unavailable");
      }
    }

    if !post.content.is_empty() || !post.title.is_empty() {
      post.sentiment = annotate(
        &self.classifier,
        &format!("Content:{} Title:{}", post.content, post.title),
      )
      .await;
    }

    post
  }

  pub(crate) fn into_parts(self) -> (D, Vec<Community>) {
    (self.driver, self.communities)
  }

  /// Submits the platform login form. A failure here is fatal for the run,
  /// like any other top-level navigation failure.
  pub(crate) async fn login(
    &self,
    login_url: &str,
    credentials: &Credentials,
  ) -> Result<(), Error> {
    self.driver.navigate(login_url).await?;

    tokio::time::sleep(self.scroll.interval).await;

    self.driver.wait_visible(LOGIN_USERNAME_SELECTOR).await?;

    self
      .driver
      .send_keys(LOGIN_USERNAME_SELECTOR, &credentials.username)
      .await?;

    self.driver.wait_visible(LOGIN_PASSWORD_SELECTOR).await?;

    self
      .driver
      .send_keys(LOGIN_PASSWORD_SELECTOR, &credentials.password)
      .await?;

    self.driver.send_keys(LOGIN_PASSWORD_SELECTOR, "\n").await?;

    tokio::time::sleep(self.scroll.interval).await;

    info!("login submitted");

    Ok(())
  }

  pub(crate) fn new(driver: D, classifier: C, scroll: ScrollSettings) -> Self {
    Self {
      classifier,
      communities: Vec::new(),
      driver,
      scroll,
    }
  }

  async fn post_links(&self, community_url: &str) -> Result<Vec<String>, Error> {
    self.driver.navigate(community_url).await?;

    tokio::time::sleep(self.scroll.interval).await;

    string_list(self.driver.evaluate(POST_LINKS_SCRIPT).await?)
  }

  async fn read_field_or_empty(&self, selector: &str) -> String {
    match self.driver.read_text(selector).await {
      Ok(text) => text,
      Err(error) => {
        debug!(selector, %error, "field read failed, leaving it empty");
        String::new()
      }
    }
  }

  /// Walks the full hierarchy under `index_url`. Only index-level failures
  /// (navigation or page-count parsing) are fatal; everything below is
  /// isolated, logged, and skipped.
  pub(crate) async fn walk(&mut self, index_url: &str) -> Result<(), Error> {
    let pages = self.community_page_count(index_url).await?;

    info!(pages, "community index read");

    for page in 1..=pages {
      let urls = match self.community_links(index_url, page).await {
        Ok(urls) => urls,
        Err(error) => {
          warn!(page, %error, "skipping community index page");
          continue;
        }
      };

      for url in urls {
        let community = self.harvest_community(&url).await;
        self.communities.push(community);
      }
    }

    Ok(())
  }
}

fn parse_page_count(text: &str) -> Result<usize, Error> {
  text
    .replace("...", "")
    .replace('…', "")
    .trim()
    .parse()
    .map_err(|_| Error::PageCount {
      text: text.to_string(),
    })
}

fn string_list(value: Value) -> Result<Vec<String>, Error> {
  serde_json::from_value(value)
    .map_err(|error| Error::Driver(format!("expected a list of strings: {error}")))
}
