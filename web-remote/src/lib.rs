//! Local web remote for a Sonos speaker.
//!
//! Three HTTP control endpoints (play/pause toggle, volume up, volume down)
//! proxy commands to the speaker's UPnP/SOAP control interface, and a static
//! file server delivers the browser remote-control page. The speaker itself
//! is the only source of truth: every command re-reads the relevant device
//! state first, and nothing is cached between requests.

pub mod control;
pub mod routes;

pub use control::{SpeakerControl, VolumeDirection};
pub use routes::routes;
