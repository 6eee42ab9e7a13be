//! Playback and volume control for a single speaker.

use once_cell::sync::Lazy;
use regex::Regex;
use soap_client::{SoapClient, SoapError};

const AV_TRANSPORT_CONTROL: &str = "/MediaRenderer/AVTransport/Control";
const AV_TRANSPORT_SERVICE: &str = "AVTransport:1";

const RENDERING_CONTROL: &str = "/MediaRenderer/RenderingControl/Control";
const RENDERING_CONTROL_SERVICE: &str = "RenderingControl:1";

/// Volume change per button press.
const VOLUME_STEP: i32 = 5;

static CURRENT_VOLUME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<CurrentVolume>(\d+)</CurrentVolume>").unwrap());

/// Which way a volume request moves the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeDirection {
    Up,
    Down,
}

impl VolumeDirection {
    fn step(self) -> i32 {
        match self {
            Self::Up => VOLUME_STEP,
            Self::Down => -VOLUME_STEP,
        }
    }
}

/// Stateless controller for one speaker.
///
/// Holds only the SOAP client; every operation re-queries the device for the
/// state it needs, so concurrent requests may race against the real speaker
/// (accepted limitation, see the volume read-modify-write below).
#[derive(Debug, Clone)]
pub struct SpeakerControl {
    client: SoapClient,
}

impl SpeakerControl {
    pub fn new(client: SoapClient) -> Self {
        Self { client }
    }

    /// Query the transport state, then send Play or Pause accordingly.
    ///
    /// The "is playing" decision is a literal substring check on the response
    /// body, matching what the stock controller does. A device reporting
    /// TRANSITIONING therefore counts as not playing and gets a Play.
    pub async fn toggle_playback(&self) -> Result<(), SoapError> {
        let state = self
            .client
            .call(
                AV_TRANSPORT_CONTROL,
                AV_TRANSPORT_SERVICE,
                "GetTransportInfo",
                "<InstanceID>0</InstanceID>",
            )
            .await?;

        if state.contains("PLAYING") {
            self.client
                .call(
                    AV_TRANSPORT_CONTROL,
                    AV_TRANSPORT_SERVICE,
                    "Pause",
                    "<InstanceID>0</InstanceID>",
                )
                .await?;
        } else {
            self.client
                .call(
                    AV_TRANSPORT_CONTROL,
                    AV_TRANSPORT_SERVICE,
                    "Play",
                    "<InstanceID>0</InstanceID><Speed>1</Speed>",
                )
                .await?;
        }

        Ok(())
    }

    /// Read the current volume, step it by 5, and write the clamped result
    /// back to the device.
    ///
    /// At a clamp boundary the SetVolume is still sent with the unchanged
    /// value; the device treats it as a no-op.
    pub async fn step_volume(&self, direction: VolumeDirection) -> Result<(), SoapError> {
        let body = self
            .client
            .call(
                RENDERING_CONTROL,
                RENDERING_CONTROL_SERVICE,
                "GetVolume",
                "<InstanceID>0</InstanceID><Channel>Master</Channel>",
            )
            .await?;

        let current = parse_current_volume(&body);
        let desired = next_volume(current, direction);

        let payload = format!(
            "<InstanceID>0</InstanceID><Channel>Master</Channel><DesiredVolume>{desired}</DesiredVolume>"
        );
        self.client
            .call(
                RENDERING_CONTROL,
                RENDERING_CONTROL_SERVICE,
                "SetVolume",
                &payload,
            )
            .await?;

        Ok(())
    }
}

/// Extract the reported volume from a GetVolume response body.
///
/// A response without a readable CurrentVolume field reads as volume 0.
fn parse_current_volume(body: &str) -> i32 {
    CURRENT_VOLUME
        .captures(body)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

fn next_volume(current: i32, direction: VolumeDirection) -> i32 {
    (current + direction.step()).clamp(0, 100)
}
