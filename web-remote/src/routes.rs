//! HTTP route layer: three control endpoints plus the static remote page.

use std::convert::Infallible;
use std::path::PathBuf;

use warp::http::StatusCode;
use warp::Filter;

use crate::control::{SpeakerControl, VolumeDirection};

/// Build the full route tree.
///
/// Control errors stop at this boundary: they are logged and turned into a
/// bare 500 so the process keeps serving later requests. Successes are a
/// bare 200. `asset_dir` is the directory holding the remote-control page;
/// it is a parameter so tests can substitute their own.
pub fn routes(
    control: SpeakerControl,
    asset_dir: impl Into<PathBuf>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let asset_dir = asset_dir.into();
    let index = asset_dir.join("index.html");

    // Path before method: a non-matching path must reject as not-found, not
    // method-not-allowed, so unmatched GETs fall through to the asset 404.
    let playpause = warp::path!("sonos" / "playpause")
        .and(warp::post())
        .and(with_control(control.clone()))
        .and_then(handle_playpause);

    let volumeup = warp::path!("sonos" / "volumeup")
        .and(warp::post())
        .and(with_control(control.clone()))
        .and_then(|control| handle_volume(control, VolumeDirection::Up));

    let volumedown = warp::path!("sonos" / "volumedown")
        .and(warp::post())
        .and(with_control(control))
        .and_then(|control| handle_volume(control, VolumeDirection::Down));

    let page = warp::get().and(warp::path::end()).and(warp::fs::file(index));
    let assets = warp::get().and(warp::fs::dir(asset_dir));

    playpause
        .or(volumeup)
        .or(volumedown)
        .or(page)
        .or(assets)
}

fn with_control(
    control: SpeakerControl,
) -> impl Filter<Extract = (SpeakerControl,), Error = Infallible> + Clone {
    warp::any().map(move || control.clone())
}

async fn handle_playpause(control: SpeakerControl) -> Result<StatusCode, Infallible> {
    match control.toggle_playback().await {
        Ok(()) => Ok(StatusCode::OK),
        Err(error) => {
            tracing::error!(%error, "playback toggle failed");
            Ok(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn handle_volume(
    control: SpeakerControl,
    direction: VolumeDirection,
) -> Result<StatusCode, Infallible> {
    match control.step_volume(direction).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(error) => {
            tracing::error!(%error, ?direction, "volume step failed");
            Ok(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
