// Wait - bounded polling for page transitions
//
// Page loads are asynchronous with respect to the click that triggers them.
// A page counts as loaded once a marker element is present in the DOM.
// Presence is polled at a fixed interval until it holds or the window
// closes; there is no retry or backoff beyond that.

use crate::config::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
use crate::error::{Error, Result};
use crate::locate::By;
use playwright_rs::{Locator, Page};
use std::time::{Duration, Instant};

/// Presence wait with a fixed timeout.
#[derive(Debug, Clone, Copy)]
pub struct Wait {
    timeout: Duration,
    poll_interval: Duration,
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Wait {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the delay between polls. Zero is clamped to one millisecond.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Waits until at least one element matching `by` exists on the page.
    ///
    /// Returns a locator for the matched element(s). Visibility is not
    /// required, only presence in the DOM.
    pub async fn for_presence(&self, page: &Page, by: &By) -> Result<Locator> {
        let locator = page.locator(&by.selector()).await;
        self.until_present(&locator, by).await?;
        Ok(locator)
    }

    /// Like [`Wait::for_presence`], but only matches descendants of `parent`.
    pub async fn for_presence_within(&self, parent: &Locator, by: &By) -> Result<Locator> {
        let locator = parent.locator(&by.selector());
        self.until_present(&locator, by).await?;
        Ok(locator)
    }

    async fn until_present(&self, locator: &Locator, by: &By) -> Result<()> {
        let start = Instant::now();
        let mut polls = 0u32;

        loop {
            polls += 1;
            // A count can fail while the previous document is torn down
            // mid-navigation; that only means "not there yet".
            match locator.count().await {
                Ok(count) if count > 0 => {
                    tracing::debug!(
                        "Found {} after {:?} ({} polls, {} matches)",
                        by,
                        start.elapsed(),
                        polls,
                        count
                    );
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => tracing::debug!("Presence poll for {} failed: {}", by, e),
            }

            if start.elapsed() >= self.timeout {
                tracing::warn!("Gave up waiting for {} after {:?}", by, self.timeout);
                return Err(Error::ElementNotFound {
                    locator: by.to_string(),
                    timeout: self.timeout,
                });
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
