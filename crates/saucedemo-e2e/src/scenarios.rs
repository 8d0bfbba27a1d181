// Scenarios - end-to-end storefront flows
//
// Each scenario starts on a fresh page, walks the storefront the way a
// shopper would and checks every page it lands on. The same flows run
// against the hosted storefront and the local stand-in.

use crate::error::{Error, Result};
use crate::harness::{Harness, Submit, element_text, inner_texts};
use crate::locate::By;
use crate::storefront::{self, Endpoint, classes};
use crate::users::{KnownUser, VALID_PASSWORD};
use rand::Rng;
use std::collections::HashSet;

/// Which inventory items a purchase adds to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelection {
    /// The first item listed
    First,
    /// Every item listed
    All,
    /// This many distinct items picked at random
    Random(usize),
    /// Items at these positions, in this order
    Indices(Vec<usize>),
}

impl ItemSelection {
    /// Resolves the selection against an inventory of `available` items.
    pub fn resolve<R: Rng + ?Sized>(&self, available: usize, rng: &mut R) -> Result<Vec<usize>> {
        let not_enough = |requested| Error::NotEnoughItems {
            requested,
            available,
        };
        match self {
            ItemSelection::First if available == 0 => Err(not_enough(1)),
            ItemSelection::First => Ok(vec![0]),
            ItemSelection::All if available == 0 => Err(not_enough(1)),
            ItemSelection::All => Ok((0..available).collect()),
            ItemSelection::Random(n) if *n > available => Err(not_enough(*n)),
            ItemSelection::Random(n) => {
                Ok(rand::seq::index::sample(rng, available, *n).into_vec())
            }
            ItemSelection::Indices(indices) => {
                if let Some(&max) = indices.iter().max().filter(|&&max| max >= available) {
                    return Err(not_enough(max + 1));
                }
                let mut seen = HashSet::with_capacity(indices.len());
                if let Some(&index) = indices.iter().find(|&&i| !seen.insert(i)) {
                    return Err(Error::DuplicateItem { index });
                }
                Ok(indices.clone())
            }
        }
    }
}

/// Logs the standard user in and checks the inventory page loads.
pub async fn valid_login(h: &Harness, submit: Submit) -> Result<()> {
    h.login_page_setup().await?;
    h.login(KnownUser::Standard.username(), VALID_PASSWORD, submit)
        .await?;
    h.wait_for_page(Endpoint::Inventory).await
}

/// Attempts to log the locked-out user in and checks the rejection.
///
/// Returns the error banner text.
pub async fn locked_out_login(h: &Harness, submit: Submit) -> Result<String> {
    h.login_page_setup().await?;
    h.login(KnownUser::LockedOut.username(), VALID_PASSWORD, submit)
        .await?;
    h.wait_for_element_by_class(classes::ERROR_BUTTON).await?;

    // Still on the login page, never reached the inventory
    h.assert_url_ends_with(Endpoint::Login.path())?;
    h.assert_url_does_not_end_with(Endpoint::Inventory.path())?;

    let message = h.login_error_text().await?;
    if !message.contains(storefront::LOCKED_OUT_MESSAGE) {
        return Err(Error::MissingText {
            what: "login error".to_string(),
            expected: storefront::LOCKED_OUT_MESSAGE.to_string(),
            actual: message,
        });
    }
    Ok(message)
}

/// Logs in, adds the selected items, checks out and confirms the order.
///
/// Returns the names of the purchased items, sorted.
pub async fn purchase(h: &Harness, selection: &ItemSelection) -> Result<Vec<String>> {
    purchase_as(h, KnownUser::Standard, selection).await
}

/// [`purchase`] as a specific user.
///
/// `problem_user` is served a storefront with deliberate faults, so the
/// same flow doubles as a check that those faults are caught.
pub async fn purchase_as(
    h: &Harness,
    user: KnownUser,
    selection: &ItemSelection,
) -> Result<Vec<String>> {
    h.login_page_setup().await?;
    h.complete_login_page(user.username()).await?;
    h.wait_for_page(Endpoint::Inventory).await?;

    let expected = add_to_cart(h, selection).await?;

    h.click(&By::class_name(classes::CART_LINK)).await?;
    h.wait_for_page(Endpoint::Cart).await?;
    if h.count_of(&By::class_name(classes::CART_ITEM)).await? == 0 {
        return Err(Error::EmptyCart {
            expected: expected.len(),
        });
    }
    let cart = h.texts_of(&By::class_name(classes::ITEM_NAME)).await?;
    compare_items("cart", &expected, cart)?;

    h.click(&By::class_name(classes::CHECKOUT_BUTTON)).await?;
    h.wait_for_page(Endpoint::CheckoutStepOne).await?;
    h.complete_checkout_step_one().await?;

    h.wait_for_page(Endpoint::CheckoutStepTwo).await?;
    let summary = h.texts_of(&By::class_name(classes::ITEM_NAME)).await?;
    compare_items("checkout summary", &expected, summary)?;

    h.click(&By::class_name(classes::CONTINUE_BUTTON)).await?;
    h.wait_for_page(Endpoint::CheckoutComplete).await?;
    h.assert_text(
        &By::class_name(classes::COMPLETE_HEADER),
        storefront::ORDER_CONFIRMATION,
    )
    .await?;

    tracing::info!("Order confirmed for {} item(s)", expected.len());
    Ok(expected)
}

/// Adds the selected inventory items one at a time.
///
/// After each click the item's button must read REMOVE and the cart
/// counter must show how many items have been added so far. Returns the
/// added names, sorted.
pub async fn add_to_cart(h: &Harness, selection: &ItemSelection) -> Result<Vec<String>> {
    let items = h.find(&By::class_name(classes::INVENTORY_ITEM)).await;
    let available = items.count().await?;
    let picks = selection.resolve(available, &mut rand::thread_rng())?;
    tracing::debug!("Adding items {:?} of {}", picks, available);

    let name = By::class_name(classes::ITEM_NAME);
    let button = By::css(storefront::ITEM_BUTTON_CSS);
    let mut names = Vec::with_capacity(picks.len());

    for (added, index) in picks.into_iter().enumerate() {
        let item = items.nth(index as i32);
        let item_name = h.wait_within(&item, &name).await?.first();
        names.push(element_text(&item_name).await?);

        let item_button = h.wait_within(&item, &button).await?.first();
        item_button.click(None).await?;

        let label = element_text(&item_button).await?;
        if label != storefront::REMOVE_LABEL {
            return Err(Error::TextMismatch {
                what: "button".to_string(),
                expected: storefront::REMOVE_LABEL.to_string(),
                actual: label,
            });
        }

        let expected_count = (added + 1).to_string();
        let counter = h.text_of(&By::class_name(classes::CART_COUNTER)).await?;
        if counter != expected_count {
            return Err(Error::TextMismatch {
                what: "item count".to_string(),
                expected: expected_count,
                actual: counter,
            });
        }
    }

    names.sort();
    Ok(names)
}

/// Names of every item currently listed on the inventory page.
pub async fn inventory_names(h: &Harness) -> Result<Vec<String>> {
    let names = h
        .find(&By::class_name(classes::INVENTORY_ITEM))
        .await
        .locator(&By::class_name(classes::ITEM_NAME).selector());
    inner_texts(&names).await
}

/// Order-insensitive comparison of item names shown in `view`.
///
/// `expected` must already be sorted.
pub fn compare_items(view: &str, expected: &[String], mut actual: Vec<String>) -> Result<()> {
    actual.sort();
    if actual == expected {
        Ok(())
    } else {
        Err(Error::CartMismatch {
            view: view.to_string(),
            expected: expected.to_vec(),
            actual,
        })
    }
}
