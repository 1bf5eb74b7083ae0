mod config;

pub use self::config::ServerConfig;

use dioxus::prelude::*;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::OnceLock;
use tracing::instrument;

static SERVER_CONFIG: OnceLock<ServerConfig> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Server configuration has not been loaded")]
    ConfigNotLoaded,
}

/// Configuration loaded at startup by [`launch_server`].
pub fn server_config() -> Result<&'static ServerConfig, Error> {
    SERVER_CONFIG.get().ok_or(Error::ConfigNotLoaded)
}

/// Stores `config` unless one is already loaded, in which case the first one is kept.
fn install_config(cell: &OnceLock<ServerConfig>, config: ServerConfig) -> bool {
    match cell.set(config) {
        Ok(()) => true,
        Err(ignored) => {
            tracing::warn!(
                registrations_open = ignored.registrations_open,
                "Server configuration already loaded, ignoring the new one"
            );
            false
        }
    }
}

#[instrument(skip(app))]
pub async fn launch_server(app: fn() -> Element) -> anyhow::Result<()> {
    use dioxus::fullstack::prelude::*;

    tracing_subscriber::fmt().init();

    let config = ServerConfig::load()?;
    tracing::info!(
        registrations_open = config.registrations_open,
        "Loaded server configuration"
    );
    install_config(&SERVER_CONFIG, config);

    // Get the address the server should run on. If the CLI is running, the CLI proxies fullstack into the main address
    // and we use the generated address the CLI gives us
    let ip =
        dioxus::cli_config::server_ip().unwrap_or_else(|| IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)));
    let port = dioxus::cli_config::server_port().unwrap_or(8080);
    let address = SocketAddr::new(ip, port);
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "Serving team registration");

    let router = axum::Router::new()
        // serve_dioxus_application adds routes to server side render the application, serve static assets, and register server functions
        .serve_dioxus_application(ServeConfigBuilder::default(), app)
        .into_make_service();
    axum::serve(listener, router).await?;
    Ok(())
}
