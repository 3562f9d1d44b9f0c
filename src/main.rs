use std::net::TcpListener;

use anyhow::Context;

use lantrn::app;
use lantrn::settings::Settings;
use lantrn::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber(telemetry::DEFAULT_ENV_FILTER, std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load().context("Failed to load settings")?;

    let pool = settings.database.pool().await?;

    let listener = TcpListener::bind(settings.app.addr()).context("Failed to bind listener")?;
    tracing::info!(addr = ?listener.local_addr()?, "Listening");

    app::run(listener, pool)?.await.context("Failed to run app")
}
