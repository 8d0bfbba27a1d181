// Storefront page map
//
// Endpoints of the demo storefront, the marker element each one is known to
// have loaded by, and the identifiers the flows interact with.

use crate::locate::By;

/// A page of the storefront, identified by its URL suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Inventory,
    Cart,
    CheckoutStepOne,
    CheckoutStepTwo,
    CheckoutComplete,
}

impl Endpoint {
    /// URL suffix the page is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "index.html",
            Endpoint::Inventory => "inventory.html",
            Endpoint::Cart => "cart.html",
            Endpoint::CheckoutStepOne => "checkout-step-one.html",
            Endpoint::CheckoutStepTwo => "checkout-step-two.html",
            Endpoint::CheckoutComplete => "checkout-complete.html",
        }
    }

    /// Element whose presence means the page has loaded.
    pub fn marker(&self) -> By {
        match self {
            Endpoint::Login => By::id(ids::USERNAME),
            Endpoint::Inventory => By::id("searchbox_container"),
            Endpoint::Cart => By::class_name("cart_list"),
            Endpoint::CheckoutStepOne => By::id("checkout_info_container"),
            Endpoint::CheckoutStepTwo => By::id("checkout_summary_container"),
            Endpoint::CheckoutComplete => By::id("checkout_complete_container"),
        }
    }
}

/// Element ids.
pub mod ids {
    pub const USERNAME: &str = "user-name";
    pub const PASSWORD: &str = "password";
    pub const FIRST_NAME: &str = "first-name";
    pub const LAST_NAME: &str = "last-name";
    pub const POSTAL_CODE: &str = "postal-code";
}

/// Class names.
pub mod classes {
    pub const LOGIN_BUTTON: &str = "btn_action";
    pub const ERROR_BUTTON: &str = "error-button";
    pub const INVENTORY_ITEM: &str = "inventory_item";
    pub const ITEM_NAME: &str = "inventory_item_name";
    pub const CART_COUNTER: &str = "fa-layers-counter";
    pub const CART_LINK: &str = "shopping_cart_link";
    pub const CART_ITEM: &str = "cart_item";
    pub const CHECKOUT_BUTTON: &str = "checkout_button";
    pub const CONTINUE_BUTTON: &str = "cart_button";
    pub const COMPLETE_HEADER: &str = "complete-header";
}

/// Login error banner, rendered inside the login form.
pub const LOGIN_ERROR_XPATH: &str = "//div[@class='login-box']/form/h3";

/// Add/remove button of an inventory item, relative to the item.
pub const ITEM_BUTTON_CSS: &str = ".pricebar button";

pub const LOCKED_OUT_MESSAGE: &str = "user has been locked out";
pub const REMOVE_LABEL: &str = "REMOVE";
pub const ORDER_CONFIRMATION: &str = "THANK YOU FOR YOUR ORDER";

/// Shipping details entered on the first checkout step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

impl Default for CheckoutDetails {
    fn default() -> Self {
        Self {
            first_name: "Firstname".to_string(),
            last_name: "Lastname".to_string(),
            postal_code: "postal code".to_string(),
        }
    }
}
