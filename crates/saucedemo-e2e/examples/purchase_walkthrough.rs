// Purchase walkthrough - log in, buy a few items, confirm the order
//
// Shows: config from the environment, scoped session, scenario reuse
//
// Runs against SAUCEDEMO_BASE_URL (default: the hosted storefront).
// Set SAUCEDEMO_HEADLESS=false to watch it happen.

use saucedemo_e2e::{HarnessConfig, ItemSelection, scenarios, with_session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("saucedemo_e2e=info")),
        )
        .init();

    let config = HarnessConfig::from_env()?;
    println!("Storefront: {}", config.base_url());
    println!("Browser: {} (headless: {})", config.browser(), config.headless());

    let bought = with_session(&config, |h| async move {
        scenarios::purchase(&h, &ItemSelection::Random(3)).await
    })
    .await?;

    println!("Order confirmed:");
    for name in &bought {
        println!("  - {}", name);
    }

    Ok(())
}
