// Page interaction harness
//
// Turns user intentions ("log in as X", "wait until page Y has loaded",
// "we should now be at Z") into driver calls against the live page.
// Holds no state of its own beyond the page handle: where we are is always
// read back from the browser.

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::locate::By;
use crate::storefront::{self, CheckoutDetails, Endpoint, classes, ids};
use crate::users::{KnownUser, VALID_PASSWORD};
use crate::wait::Wait;
use playwright_rs::{Locator, Page};
use std::sync::Arc;
use std::time::Duration;

/// How the login form gets submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Click the LOGIN button
    Button,
    /// Press Enter in the password field
    EnterKey,
}

/// Interaction handle for one browser page.
///
/// Cheap to clone; clones drive the same page.
#[derive(Clone)]
pub struct Harness {
    page: Page,
    config: Arc<HarnessConfig>,
}

impl Harness {
    pub fn new(page: Page, config: Arc<HarnessConfig>) -> Self {
        Self { page, config }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// URL of the last committed navigation.
    pub fn current_url(&self) -> String {
        self.page.url()
    }

    fn wait(&self) -> Wait {
        Wait::new(self.config.wait_timeout()).with_poll_interval(self.config.poll_interval())
    }

    // Navigation

    /// Navigates straight to a storefront endpoint.
    pub async fn open(&self, endpoint: Endpoint) -> Result<()> {
        let url = self.config.endpoint_url(endpoint.path())?;
        tracing::debug!("Navigating to {}", url);
        self.page.goto(url.as_str(), None).await?;
        Ok(())
    }

    /// Opens the login page and empties both credential fields.
    pub async fn login_page_setup(&self) -> Result<()> {
        self.open(Endpoint::Login).await?;
        self.wait_for(&By::id(ids::USERNAME)).await?.clear(None).await?;
        self.wait_for(&By::id(ids::PASSWORD)).await?.clear(None).await?;
        Ok(())
    }

    // Waiting

    /// Waits for an element with the given id to be present.
    pub async fn wait_for_element_by_id(&self, id: &str) -> Result<Locator> {
        self.wait_for(&By::id(id)).await
    }

    /// Waits for an element carrying the given class to be present.
    pub async fn wait_for_element_by_class(&self, class: &str) -> Result<Locator> {
        self.wait_for(&By::class_name(class)).await
    }

    pub async fn wait_for(&self, by: &By) -> Result<Locator> {
        self.wait().for_presence(&self.page, by).await
    }

    pub async fn wait_for_with_timeout(&self, by: &By, timeout: Duration) -> Result<Locator> {
        self.wait()
            .with_timeout(timeout)
            .for_presence(&self.page, by)
            .await
    }

    /// Waits for a descendant of `parent` matching `by`.
    pub async fn wait_within(&self, parent: &Locator, by: &By) -> Result<Locator> {
        self.wait().for_presence_within(parent, by).await
    }

    /// Waits for an endpoint's marker, then checks the URL agrees.
    pub async fn wait_for_page(&self, endpoint: Endpoint) -> Result<()> {
        self.wait_for(&endpoint.marker()).await?;
        self.assert_url_ends_with(endpoint.path())
    }

    // Assertions

    /// Fails unless the current URL ends with `expected`.
    pub fn assert_url_ends_with(&self, expected: &str) -> Result<()> {
        let actual = self.current_url();
        if actual.ends_with(expected) {
            Ok(())
        } else {
            Err(Error::UrlMismatch {
                actual,
                expected: expected.to_string(),
            })
        }
    }

    /// Fails if the current URL ends with `unexpected`.
    pub fn assert_url_does_not_end_with(&self, unexpected: &str) -> Result<()> {
        let actual = self.current_url();
        if actual.ends_with(unexpected) {
            Err(Error::UnexpectedUrl {
                actual,
                unexpected: unexpected.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Fails unless the first element matching `by` has exactly `expected`
    /// as its text.
    pub async fn assert_text(&self, by: &By, expected: &str) -> Result<()> {
        let actual = self.text_of(by).await?;
        if actual == expected {
            Ok(())
        } else {
            Err(Error::TextMismatch {
                what: by.to_string(),
                expected: expected.to_string(),
                actual,
            })
        }
    }

    // Element access

    // Single-element access waits for presence first, so a missing element
    // fails with `ElementNotFound` inside the configured window rather than
    // after the driver's own action timeout.

    /// Locator for every element matching `by`. Does not wait.
    pub async fn find(&self, by: &By) -> Locator {
        self.page.locator(&by.selector()).await
    }

    /// Number of elements matching `by` right now. Does not wait.
    pub async fn count_of(&self, by: &By) -> Result<usize> {
        Ok(self.find(by).await.count().await?)
    }

    /// Rendered text of the first match, trimmed.
    pub async fn text_of(&self, by: &By) -> Result<String> {
        let found = self.wait_for(by).await?;
        element_text(&found.first()).await
    }

    /// Rendered text of every match, in document order.
    pub async fn texts_of(&self, by: &By) -> Result<Vec<String>> {
        let locator = self.find(by).await;
        inner_texts(&locator).await
    }

    pub async fn click(&self, by: &By) -> Result<()> {
        tracing::debug!("Clicking {}", by);
        self.wait_for(by).await?.first().click(None).await?;
        Ok(())
    }

    pub async fn fill(&self, by: &By, text: &str) -> Result<()> {
        self.wait_for(by).await?.first().fill(text, None).await?;
        Ok(())
    }

    // Flows

    /// Types credentials into the login form and submits it.
    pub async fn login(&self, username: &str, password: &str, submit: Submit) -> Result<()> {
        tracing::info!("Logging in as {} ({:?})", username, submit);
        self.fill(&By::id(ids::USERNAME), username).await?;
        let password_field = self.wait_for(&By::id(ids::PASSWORD)).await?.first();
        password_field.fill(password, None).await?;

        match submit {
            Submit::Button => self.click(&By::class_name(classes::LOGIN_BUTTON)).await,
            Submit::EnterKey => {
                password_field.press("Enter", None).await?;
                Ok(())
            }
        }
    }

    /// Logs a known user in with the valid password via the LOGIN button.
    ///
    /// Usernames outside the known set are rejected before touching the page.
    pub async fn complete_login_page(&self, user: &str) -> Result<()> {
        let user: KnownUser = user.parse()?;
        self.login(user.username(), VALID_PASSWORD, Submit::Button)
            .await
    }

    /// Fills the first checkout step with the default details and submits.
    pub async fn complete_checkout_step_one(&self) -> Result<()> {
        self.complete_checkout_step_one_with(&CheckoutDetails::default())
            .await
    }

    pub async fn complete_checkout_step_one_with(&self, details: &CheckoutDetails) -> Result<()> {
        self.fill(&By::id(ids::FIRST_NAME), &details.first_name).await?;
        self.fill(&By::id(ids::LAST_NAME), &details.last_name).await?;
        self.fill(&By::id(ids::POSTAL_CODE), &details.postal_code)
            .await?;
        self.click(&By::class_name(classes::CONTINUE_BUTTON)).await
    }

    /// Text of the error banner on the login form.
    pub async fn login_error_text(&self) -> Result<String> {
        self.text_of(&By::xpath(storefront::LOGIN_ERROR_XPATH)).await
    }
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("url", &self.page.url())
            .field("config", &self.config)
            .finish()
    }
}

/// Rendered text of a single-element locator, trimmed.
pub(crate) async fn element_text(locator: &Locator) -> Result<String> {
    Ok(locator.inner_text().await?.trim().to_string())
}

/// Rendered text of every element the locator matches, trimmed.
pub(crate) async fn inner_texts(locator: &Locator) -> Result<Vec<String>> {
    let count = locator.count().await?;
    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        texts.push(element_text(&locator.nth(i as i32)).await?);
    }
    Ok(texts)
}
