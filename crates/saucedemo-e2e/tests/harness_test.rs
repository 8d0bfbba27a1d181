// Integration tests for the wait and assertion layer
//
// Tests cover:
// - Presence waits succeed as soon as a late element appears
// - Presence waits fail with the missing identifier once the window closes
// - Text lookups and clicks on missing elements fail inside the same window
// - URL suffix assertions carry actual and expected values
// - Sessions are released on failure and on panic, and never share state

mod common;

use saucedemo_e2e::{By, Endpoint, Error, ItemSelection, scenarios, with_session};
use std::time::{Duration, Instant};
use test_server::{DELAYED_ELEMENT_ID, DELAYED_ELEMENT_MS, TestServer};

// ============================================================================
// Presence waits
// ============================================================================

#[tokio::test]
async fn test_wait_for_late_element() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url());
    let delayed = format!("{}/delayed.html", server.url());

    let elapsed = with_session(&config, |h| async move {
        h.page().goto(&delayed, None).await?;
        let start = Instant::now();
        h.wait_for_element_by_id(DELAYED_ELEMENT_ID).await?;
        // Found by class as well once present
        h.wait_for_element_by_class(DELAYED_ELEMENT_ID).await?;
        Ok(start.elapsed())
    })
    .await
    .expect("Late element should be found within the wait window");

    // The element is inserted DELAYED_ELEMENT_MS after the page script runs,
    // which is shortly before navigation returns
    assert!(
        elapsed >= Duration::from_millis(DELAYED_ELEMENT_MS - 300),
        "found before the element was inserted: {:?}",
        elapsed
    );
    assert!(
        elapsed < Duration::from_millis(DELAYED_ELEMENT_MS + 1000),
        "wait should end as soon as the element appears, took {:?}",
        elapsed
    );

    server.shutdown();
}

#[tokio::test]
async fn test_wait_times_out_with_identifier() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url());
    let delayed = format!("{}/delayed.html", server.url());

    let (result, elapsed) = with_session(&config, |h| async move {
        h.page().goto(&delayed, None).await?;
        let start = Instant::now();
        let result = h
            .wait_for_with_timeout(&By::id(DELAYED_ELEMENT_ID), Duration::from_millis(150))
            .await
            .map(|_| ());
        Ok((result, start.elapsed()))
    })
    .await
    .expect("Session should run");

    let err = result.expect_err("Element appears after the window closes");
    assert!(err.is_assertion());
    match &err {
        Error::ElementNotFound { locator, timeout } => {
            assert_eq!(locator, &format!("id '{}'", DELAYED_ELEMENT_ID));
            assert_eq!(*timeout, Duration::from_millis(150));
        }
        other => panic!("expected ElementNotFound, got {:?}", other),
    }
    assert!(
        err.to_string().starts_with("Page should contain element with id 'late-arrival'"),
        "{}",
        err
    );
    assert!(elapsed >= Duration::from_millis(150), "gave up early: {:?}", elapsed);
    assert!(
        elapsed < Duration::from_millis(DELAYED_ELEMENT_MS + 2000),
        "overran the window: {:?}",
        elapsed
    );

    server.shutdown();
}

#[tokio::test]
async fn test_wait_for_missing_class_fails() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url())
        .with_wait_timeout(Duration::from_millis(300));

    let err = with_session(&config, |h| async move {
        h.open(Endpoint::Login).await?;
        h.wait_for_element_by_class("no-such-class").await?;
        Ok(())
    })
    .await
    .expect_err("No element carries the class");

    assert!(
        err.to_string().contains("class 'no-such-class'"),
        "error should name the class: {}",
        err
    );

    server.shutdown();
}

#[tokio::test]
async fn test_text_of_missing_element_respects_wait_window() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url())
        .with_wait_timeout(Duration::from_millis(300));

    let (result, elapsed) = with_session(&config, |h| async move {
        h.open(Endpoint::Login).await?;
        let start = Instant::now();
        let result = h.text_of(&By::class_name("fa-layers-counter")).await;
        Ok((result, start.elapsed()))
    })
    .await
    .expect("Session should run");

    let err = result.expect_err("The login page has no cart counter");
    assert!(err.is_assertion(), "expected a harness failure, got {:?}", err);
    match &err {
        Error::ElementNotFound { locator, timeout } => {
            assert_eq!(locator, "class 'fa-layers-counter'");
            assert_eq!(*timeout, Duration::from_millis(300));
        }
        other => panic!("expected ElementNotFound, got {:?}", other),
    }
    assert!(
        elapsed < Duration::from_millis(300 + 2000),
        "should give up with the wait window, took {:?}",
        elapsed
    );

    server.shutdown();
}

#[tokio::test]
async fn test_click_on_missing_element_fails_fast() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url())
        .with_wait_timeout(Duration::from_millis(300));

    let err = with_session(&config, |h| async move {
        h.open(Endpoint::Login).await?;
        h.click(&By::class_name("checkout_button")).await
    })
    .await
    .expect_err("The login page has no checkout button");

    assert!(
        matches!(&err, Error::ElementNotFound { locator, .. } if locator == "class 'checkout_button'"),
        "expected ElementNotFound, got {:?}",
        err
    );

    server.shutdown();
}

// ============================================================================
// URL assertions
// ============================================================================

#[tokio::test]
async fn test_url_assertions() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url());

    let mismatch = with_session(&config, |h| async move {
        h.open(Endpoint::Cart).await?;
        h.wait_for_page(Endpoint::Cart).await?;
        h.assert_url_does_not_end_with("inventory.html")?;
        Ok(h.assert_url_ends_with("inventory.html"))
    })
    .await
    .expect("Cart page should load");

    match mismatch {
        Err(Error::UrlMismatch { actual, expected }) => {
            assert!(actual.ends_with("cart.html"), "{}", actual);
            assert_eq!(expected, "inventory.html");
        }
        other => panic!("expected UrlMismatch, got {:?}", other),
    }

    server.shutdown();
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[tokio::test]
async fn test_sessions_do_not_share_cart() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url());

    with_session(&config, |h| async move {
        h.login_page_setup().await?;
        h.complete_login_page("standard_user").await?;
        h.wait_for_page(Endpoint::Inventory).await?;
        scenarios::add_to_cart(&h, &ItemSelection::Indices(vec![0, 1])).await?;
        Ok(())
    })
    .await
    .expect("First session should fill the cart");

    let counters = with_session(&config, |h| async move {
        h.open(Endpoint::Inventory).await?;
        h.wait_for_page(Endpoint::Inventory).await?;
        h.count_of(&By::class_name("fa-layers-counter")).await
    })
    .await
    .expect("Second session should load the inventory");

    assert_eq!(counters, 0, "a fresh session should start with an empty cart");

    server.shutdown();
}

#[tokio::test]
async fn test_failed_test_still_releases_session() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url())
        .with_wait_timeout(Duration::from_millis(200));

    let first = with_session(&config, |h| async move {
        h.open(Endpoint::Login).await?;
        h.wait_for_element_by_id("searchbox_container").await?;
        Ok(())
    })
    .await;
    assert!(matches!(first, Err(Error::ElementNotFound { .. })));

    // A later session starts cleanly after the failure
    with_session(&config, |h| async move {
        h.open(Endpoint::Login).await?;
        h.wait_for_page(Endpoint::Login).await
    })
    .await
    .expect("Next session should be unaffected");

    server.shutdown();
}

#[tokio::test]
#[should_panic(expected = "assertion inside the session")]
async fn test_panic_inside_session_propagates() {
    common::init_tracing();
    let server = TestServer::start().await;
    let config = common::local_config(&server.url());

    let _ = with_session(&config, |h| async move {
        h.open(Endpoint::Login).await?;
        if h.current_url().ends_with("index.html") {
            panic!("assertion inside the session");
        }
        Ok(())
    })
    .await;
}
