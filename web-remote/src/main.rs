//! Entry point for the Sonos web remote.

use soap_client::{DeviceConfig, SoapClient};
use tracing_subscriber::EnvFilter;
use web_remote::{routes, SpeakerControl};

/// Address of the speaker's UPnP control interface on the local network.
const SONOS_HOST: &str = "192.168.2.228";
const SONOS_PORT: u16 = 1400;

/// Port the remote page and control endpoints are served on.
const LISTEN_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = SoapClient::new(DeviceConfig::new(SONOS_HOST, SONOS_PORT));
    let control = SpeakerControl::new(client);

    let (addr, server) = warp::serve(routes(control, "public")).bind_with_graceful_shutdown(
        ([0, 0, 0, 0], LISTEN_PORT),
        async {
            let _ = tokio::signal::ctrl_c().await;
        },
    );

    tracing::info!("Sonos web remote listening on http://{addr}");
    server.await;
}
