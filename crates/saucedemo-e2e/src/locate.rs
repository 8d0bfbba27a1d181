// Element location strategies
//
// The storefront is addressed by element ids, class names and a single XPath
// for the login error. Each strategy renders to a Playwright selector string.
//
// See: https://playwright.dev/docs/other-locators

use std::fmt;

/// How to find an element on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
    /// Element whose `id` attribute equals the value
    Id(String),
    /// Element carrying the class name among its classes
    ClassName(String),
    /// XPath expression, absolute or relative to a parent locator
    XPath(String),
    /// Raw CSS selector
    Css(String),
}

impl By {
    pub fn id(id: impl Into<String>) -> Self {
        By::Id(id.into())
    }

    pub fn class_name(class: impl Into<String>) -> Self {
        By::ClassName(class.into())
    }

    pub fn xpath(expr: impl Into<String>) -> Self {
        By::XPath(expr.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        By::Css(selector.into())
    }

    /// Renders the strategy as a Playwright selector.
    ///
    /// Ids and class names are escaped so values such as `user-name` or
    /// `fa-layers-counter` survive CSS parsing.
    pub fn selector(&self) -> String {
        match self {
            By::Id(id) => format!("#{}", css_escape(id)),
            By::ClassName(class) => format!(".{}", css_escape(class)),
            By::XPath(expr) => format!("xpath={}", expr),
            By::Css(selector) => selector.clone(),
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            By::Id(id) => write!(f, "id '{}'", id),
            By::ClassName(class) => write!(f, "class '{}'", class),
            By::XPath(expr) => write!(f, "xpath '{}'", expr),
            By::Css(selector) => write!(f, "selector '{}'", selector),
        }
    }
}

// Identifier escaping per CSSOM `CSS.escape`, limited to what ids and class
// names in practice contain.
fn css_escape(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for (i, c) in ident.chars().enumerate() {
        let leading_digit = i == 0 && c.is_ascii_digit();
        if leading_digit {
            out.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        assert_eq!(By::id("user-name").selector(), "#user-name");
        assert_eq!(By::class_name("btn_action").selector(), ".btn_action");
        assert_eq!(
            By::xpath("//div[@class='login-box']/form/h3").selector(),
            "xpath=//div[@class='login-box']/form/h3"
        );
        assert_eq!(By::css(".pricebar button").selector(), ".pricebar button");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(By::id("a.b").selector(), "#a\\.b");
        assert_eq!(By::id("1st").selector(), "#\\31 st");
        assert_eq!(By::class_name("w:50").selector(), ".w\\:50");
    }

    #[test]
    fn test_display_names_strategy() {
        assert_eq!(By::id("searchbox_container").to_string(), "id 'searchbox_container'");
        assert_eq!(By::class_name("cart_list").to_string(), "class 'cart_list'");
    }
}
