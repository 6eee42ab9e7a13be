//! Minimal SOAP request helper for a Sonos speaker's UPnP control endpoints.
//!
//! This crate knows how to wrap an action in the SOAP envelope the speaker
//! expects, POST it to the device's control interface, and hand back the raw
//! response body. It does not interpret the response; callers extract the
//! fields they care about.

mod error;

pub use error::SoapError;

/// Address of the speaker's UPnP control interface.
///
/// Passed into [`SoapClient::new`] so tests can point the client at a fake
/// device instead of relying on a module-level constant.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    pub host: String,
    pub port: u16,
}

impl DeviceConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// A minimal SOAP client bound to one device.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct SoapClient {
    http: reqwest::Client,
    config: DeviceConfig,
}

impl SoapClient {
    /// Create a new SOAP client for the given device.
    ///
    /// The HTTP client keeps its library-default timeout behavior; there is
    /// no retry logic at this layer.
    pub fn new(config: DeviceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Send a SOAP action and return the raw response body.
    ///
    /// `control_path` is the device endpoint (e.g.
    /// `/MediaRenderer/AVTransport/Control`), `service` the UPnP service
    /// suffix (e.g. `AVTransport:1`), and `payload` the inner argument XML
    /// (e.g. `<InstanceID>0</InstanceID>`).
    ///
    /// A non-success HTTP status maps to [`SoapError::Status`] carrying the
    /// status text; network failures surface as [`SoapError::Network`].
    pub async fn call(
        &self,
        control_path: &str,
        service: &str,
        action: &str,
        payload: &str,
    ) -> Result<String, SoapError> {
        let body = build_envelope(service, action, payload);
        let url = format!(
            "http://{}:{}{}",
            self.config.host, self.config.port, control_path
        );
        // The stock controller sends the SOAPACTION value unquoted; some
        // UPnP stacks quote it, the speaker accepts both.
        let soap_action = format!("urn:schemas-upnp-org:service:{service}#{action}");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "text/xml")
            .header("SOAPACTION", soap_action)
            .header("Connection", "close")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SoapError::Status(status.to_string()));
        }

        Ok(response.text().await?)
    }
}

/// Wrap an action and its argument XML in the speaker's SOAP envelope.
fn build_envelope(service: &str, action: &str, payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:{action} xmlns:u="urn:schemas-upnp-org:service:{service}">{payload}</u:{action}></s:Body></s:Envelope>"#
    )
}
