// Harness configuration
//
// Defaults reproduce the constants the suite was written against. Each
// value can be overridden from the environment so the same tests run
// against the hosted storefront or a local stand-in.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Hosted storefront the suite targets by default.
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// How long a page gets to show its marker element.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(1);

/// Delay between DOM polls while waiting.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub const ENV_BASE_URL: &str = "SAUCEDEMO_BASE_URL";
pub const ENV_BROWSER: &str = "SAUCEDEMO_BROWSER";
pub const ENV_HEADLESS: &str = "SAUCEDEMO_HEADLESS";
pub const ENV_WAIT_TIMEOUT_MS: &str = "SAUCEDEMO_WAIT_TIMEOUT_MS";
pub const ENV_POLL_INTERVAL_MS: &str = "SAUCEDEMO_POLL_INTERVAL_MS";

/// Browser engine a session launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::config(
                ENV_BROWSER,
                format!("unknown browser '{}', expected chromium, firefox or webkit", other),
            )),
        }
    }
}

/// Settings shared by every session in a test run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    base_url: Url,
    browser: BrowserKind,
    headless: bool,
    wait_timeout: Duration,
    poll_interval: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: normalize_base(
                Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            ),
            browser: BrowserKind::default(),
            headless: true,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a config from `SAUCEDEMO_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(&base)?;
        }
        if let Some(browser) = lookup(ENV_BROWSER) {
            config.browser = browser.parse()?;
        }
        if let Some(headless) = lookup(ENV_HEADLESS) {
            config.headless = parse_bool(ENV_HEADLESS, &headless)?;
        }
        if let Some(ms) = lookup(ENV_WAIT_TIMEOUT_MS) {
            config.wait_timeout = parse_millis(ENV_WAIT_TIMEOUT_MS, &ms)?;
        }
        if let Some(ms) = lookup(ENV_POLL_INTERVAL_MS) {
            config.poll_interval = parse_millis(ENV_POLL_INTERVAL_MS, &ms)?;
        }

        Ok(config)
    }

    /// Sets the storefront root. Endpoints resolve relative to it.
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        let url = Url::parse(base)
            .map_err(|e| Error::config(ENV_BASE_URL, format!("'{}': {}", base, e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::config(
                ENV_BASE_URL,
                format!("'{}' cannot be used as a base URL", base),
            ));
        }
        self.base_url = normalize_base(url);
        Ok(self)
    }

    pub fn with_browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn browser(&self) -> BrowserKind {
        self.browser
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn wait_timeout(&self) -> Duration {
        self.wait_timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Resolves an endpoint such as `inventory.html` against the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| Error::config(ENV_BASE_URL, format!("cannot join '{}': {}", endpoint, e)))
    }
}

// `Url::join` replaces the last path segment unless the path ends in '/'
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(key, format!("'{}' is not a boolean", other))),
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| Error::config(key, format!("'{}': {}", value, e)))
}
