// Session - one browser per test case
//
// A session owns the Playwright server, one browser and one page. It is
// started fresh for every test and closed afterwards whatever the outcome,
// so nothing a test does can leak into the next one.

use crate::config::{BrowserKind, HarnessConfig};
use crate::error::Result;
use crate::harness::Harness;
use futures_util::FutureExt;
use playwright_rs::{Browser, LaunchOptions, Playwright};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// A live browser under automated control.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    harness: Harness,
}

impl Session {
    /// Launches the configured browser and opens a blank page.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The Playwright driver cannot be started
    /// - The browser is not installed or fails to launch
    pub async fn start(config: HarnessConfig) -> Result<Self> {
        let playwright = Playwright::launch().await?;

        let browser_type = match config.browser() {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let options = LaunchOptions::new().headless(config.headless());
        let browser = browser_type.launch_with_options(options).await?;
        tracing::info!(
            "Session started: {} {} (headless: {})",
            browser.name(),
            browser.version(),
            config.headless()
        );

        let page = match browser.new_page().await {
            Ok(page) => page,
            Err(e) => {
                if let Err(close_err) = browser.close().await {
                    tracing::warn!("Failed to close browser after page error: {}", close_err);
                }
                return Err(e.into());
            }
        };

        Ok(Self {
            playwright,
            browser,
            harness: Harness::new(page, Arc::new(config)),
        })
    }

    /// Interaction handle for the session's page.
    pub fn harness(&self) -> Harness {
        self.harness.clone()
    }

    /// Closes the browser and stops the driver.
    ///
    /// Both steps are attempted; the first failure is returned.
    pub async fn close(self) -> Result<()> {
        let closed = self.browser.close().await;
        let shut_down = self.playwright.shutdown().await;
        tracing::debug!("Session closed");
        closed?;
        shut_down?;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("browser", &self.browser.name())
            .field("harness", &self.harness)
            .finish()
    }
}

/// Runs `test` against a fresh session and always closes it afterwards.
///
/// The test's own result is returned. If the test panics, the session is
/// closed first and the panic then resumes. A failure to close is logged
/// rather than masking the test outcome.
///
/// # Example
///
/// ```ignore
/// use saucedemo_e2e::{HarnessConfig, Submit, with_session};
///
/// # async fn run() -> saucedemo_e2e::Result<()> {
/// let config = HarnessConfig::from_env()?;
/// with_session(&config, |h| async move {
///     h.login_page_setup().await?;
///     h.login("standard_user", "secret_sauce", Submit::EnterKey).await?;
///     h.wait_for_element_by_id("searchbox_container").await?;
///     h.assert_url_ends_with("inventory.html")
/// })
/// .await
/// # }
/// ```
pub async fn with_session<F, Fut, T>(config: &HarnessConfig, test: F) -> Result<T>
where
    F: FnOnce(Harness) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let session = Session::start(config.clone()).await?;
    let outcome = AssertUnwindSafe(test(session.harness()))
        .catch_unwind()
        .await;

    if let Err(e) = session.close().await {
        tracing::warn!("Failed to close session: {}", e);
    }

    match outcome {
        Ok(result) => {
            if let Err(e) = &result {
                tracing::info!("Test failed: {}", e);
            }
            result
        }
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
