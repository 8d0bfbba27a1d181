// Error types for saucedemo-e2e

use std::time::Duration;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can end a test case.
///
/// Every variant fails the current test only. Sessions are per-test, so the
/// next test starts from a fresh browser regardless of what went wrong here.
#[derive(Debug, Error)]
pub enum Error {
    /// No element matched before the wait window closed
    #[error("Page should contain element with {locator} but does not (waited {timeout:?})")]
    ElementNotFound { locator: String, timeout: Duration },

    /// Current URL does not end with the expected endpoint
    #[error("URL is {actual}\nShould end with {expected}")]
    UrlMismatch { actual: String, expected: String },

    /// Current URL ends with an endpoint it should have left
    #[error("URL is {actual}\nShould not end with {unexpected}")]
    UnexpectedUrl { actual: String, unexpected: String },

    /// Element text differs from what the flow requires
    #[error("Expected {what} to be '{expected}', actually was '{actual}'")]
    TextMismatch {
        what: String,
        expected: String,
        actual: String,
    },

    /// Element text does not contain a required fragment
    #[error("Did not find '{expected}' in {what}, found '{actual}'")]
    MissingText {
        what: String,
        expected: String,
        actual: String,
    },

    /// Cart or checkout summary lists different items than were added
    #[error("Expected {view} to be {expected:?} but got {actual:?}")]
    CartMismatch {
        view: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// The cart page rendered without any line items
    #[error("There were no items in the cart, expected {expected}")]
    EmptyCart { expected: usize },

    /// Fewer inventory items exist than the scenario asked for
    #[error("Inventory lists {available} items, cannot pick {requested}")]
    NotEnoughItems { requested: usize, available: usize },

    /// A selection named the same inventory position twice
    #[error("Item {index} selected more than once; a second click would remove it")]
    DuplicateItem { index: usize },

    /// Login attempted with a user outside the known set
    #[error("{user} not a known user, choose from {known:?}")]
    UnknownUser { user: String, known: Vec<&'static str> },

    /// Configuration value could not be parsed
    #[error("Invalid configuration for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    /// Browser driver failure (launch, navigation, protocol)
    #[error("Browser driver error: {0}")]
    Driver(#[from] playwright_rs::Error),
}

impl Error {
    pub(crate) fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns true for failures raised by the wait/assertion layer rather
    /// than the driver.
    pub fn is_assertion(&self) -> bool {
        !matches!(self, Error::Driver(_) | Error::InvalidConfig { .. })
    }
}
