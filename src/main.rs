use care_checklist::{
    export::PdfReport, handlers::today_string, mailer::RelayClient, relay::MailRelay, router,
    AppState, Config, Session, Store,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let store = Store::open(&config.data_path).await;
    let session = Session::open(store, &today_string()).await?;
    let transmitter = RelayClient::new(config.relay_url.clone(), config.mail_timeout)?;
    let relay = MailRelay::from_config(&config)?;
    let state = AppState::new(
        session,
        Arc::new(PdfReport),
        Arc::new(transmitter),
        relay,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("store at {}", config.data_path.display());
    info!("mail relay at {}", config.relay_url);
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
