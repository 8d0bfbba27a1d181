//! saucedemo-e2e: browser-driven end-to-end tests for the Sauce Labs demo storefront
//!
//! A thin harness over [`playwright_rs`] that logs in, fills the cart, checks
//! out and asserts on what the browser shows at every step. Page loads are
//! detected by polling for a marker element with a short, fixed timeout.
//!
//! # Examples
//!
//! ## Logging in
//!
//! ```ignore
//! use saucedemo_e2e::{HarnessConfig, Submit, with_session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HarnessConfig::from_env()?;
//!
//!     with_session(&config, |h| async move {
//!         h.login_page_setup().await?;
//!         h.login("standard_user", "secret_sauce", Submit::Button).await?;
//!         h.wait_for_element_by_id("searchbox_container").await?;
//!         h.assert_url_ends_with("inventory.html")
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Full purchase
//!
//! ```ignore
//! use saucedemo_e2e::{HarnessConfig, ItemSelection, scenarios, with_session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HarnessConfig::from_env()?;
//!     let bought = with_session(&config, |h| async move {
//!         scenarios::purchase(&h, &ItemSelection::Random(3)).await
//!     })
//!     .await?;
//!     println!("Bought {:?}", bought);
//!     Ok(())
//! }
//! ```

pub mod config;
mod error;
pub mod harness;
pub mod locate;
pub mod scenarios;
pub mod session;
pub mod storefront;
pub mod users;
pub mod wait;

// Re-export error types
pub use error::{Error, Result};

// Re-export configuration
pub use config::{BrowserKind, HarnessConfig};

// Re-export session and page interaction API
pub use harness::{Harness, Submit};
pub use session::{Session, with_session};

// Re-export locating and waiting
pub use locate::By;
pub use wait::Wait;

// Re-export storefront model
pub use scenarios::ItemSelection;
pub use storefront::{CheckoutDetails, Endpoint};
pub use users::{KnownUser, VALID_PASSWORD};
