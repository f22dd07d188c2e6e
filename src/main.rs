//! Composition root.
//!
//! The production dependency bundle is built here and only here: canned
//! transport → greeting service → dependencies → view-model → UI loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use stratum::config::Config;
use stratum::domain::GreetingService;
use stratum::logging;
use stratum::net::StaticTransport;
use stratum::ui::runtime;
use stratum::ui::view_model::{Dependencies, GreetingViewModel};

const GREETING_PAYLOAD: &str = r#"{"message":"Hola"}"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::load().context("loading configuration")?;
    tracing::info!(tick_ms = config.ui.tick_ms, "starting stratum");

    let transport = Arc::new(StaticTransport::new(
        config.greeting.endpoint.clone(),
        GREETING_PAYLOAD.as_bytes().to_vec(),
    ));
    let service = GreetingService::new(transport, config.greeting.endpoint.clone());
    let view_model = Arc::new(GreetingViewModel::new(Dependencies::production(service)));

    runtime::run(view_model, Duration::from_millis(config.ui.tick_ms))
        .await
        .context("running UI")?;

    Ok(())
}
