//! Route layer tests: status codes, empty bodies, and static assets.

use std::path::PathBuf;

use mockito::{Server, ServerGuard};
use soap_client::{DeviceConfig, SoapClient};
use warp::http::StatusCode;
use warp::test::request;
use web_remote::{routes, SpeakerControl};

fn control_for(server: &ServerGuard) -> SpeakerControl {
    let addr = server.host_with_port();
    let (host, port) = addr.rsplit_once(':').unwrap();
    SpeakerControl::new(SoapClient::new(DeviceConfig::new(host, port.parse().unwrap())))
}

fn asset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

#[tokio::test]
async fn playpause_reports_bare_200_on_success() {
    let mut server = Server::new_async().await;
    let _query = server
        .mock("POST", "/MediaRenderer/AVTransport/Control")
        .match_header(
            "soapaction",
            "urn:schemas-upnp-org:service:AVTransport:1#GetTransportInfo",
        )
        .with_status(200)
        .with_body("<CurrentTransportState>STOPPED</CurrentTransportState>")
        .create_async()
        .await;
    let _play = server
        .mock("POST", "/MediaRenderer/AVTransport/Control")
        .match_header(
            "soapaction",
            "urn:schemas-upnp-org:service:AVTransport:1#Play",
        )
        .with_status(200)
        .create_async()
        .await;

    let filter = routes(control_for(&server), asset_dir());
    let response = request()
        .method("POST")
        .path("/sonos/playpause")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn device_failure_maps_to_bare_500() {
    let mut server = Server::new_async().await;
    let _broken = server
        .mock("POST", "/MediaRenderer/AVTransport/Control")
        .with_status(503)
        .create_async()
        .await;

    let filter = routes(control_for(&server), asset_dir());
    let response = request()
        .method("POST")
        .path("/sonos/playpause")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn volumedown_steps_the_device_volume() {
    let mut server = Server::new_async().await;
    let _query = server
        .mock("POST", "/MediaRenderer/RenderingControl/Control")
        .match_header(
            "soapaction",
            "urn:schemas-upnp-org:service:RenderingControl:1#GetVolume",
        )
        .with_status(200)
        .with_body("<CurrentVolume>20</CurrentVolume>")
        .create_async()
        .await;
    let set = server
        .mock("POST", "/MediaRenderer/RenderingControl/Control")
        .match_header(
            "soapaction",
            "urn:schemas-upnp-org:service:RenderingControl:1#SetVolume",
        )
        .match_body(mockito::Matcher::Regex(
            "<DesiredVolume>15</DesiredVolume>".to_string(),
        ))
        .with_status(200)
        .create_async()
        .await;

    let filter = routes(control_for(&server), asset_dir());
    let response = request()
        .method("POST")
        .path("/sonos/volumedown")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    set.assert_async().await;
}

#[tokio::test]
async fn unreachable_device_maps_to_bare_500() {
    // No fake device at all; the outbound call fails at the network level
    let control = SpeakerControl::new(SoapClient::new(DeviceConfig::new("127.0.0.1", 9)));

    let filter = routes(control, asset_dir());
    let response = request()
        .method("POST")
        .path("/sonos/volumeup")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn root_serves_the_remote_page() {
    let server = Server::new_async().await;

    let filter = routes(control_for(&server), asset_dir());
    let response = request().method("GET").path("/").reply(&filter).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8_lossy(response.body());
    assert!(body.contains("Sonos Remote"));
}

#[tokio::test]
async fn assets_are_served_by_path() {
    let server = Server::new_async().await;

    let filter = routes(control_for(&server), asset_dir());
    let response = request().method("GET").path("/app.js").reply(&filter).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8_lossy(response.body());
    assert!(body.contains("fetch"));
}

#[tokio::test]
async fn missing_asset_is_404() {
    let server = Server::new_async().await;

    let filter = routes(control_for(&server), asset_dir());
    let response = request()
        .method("GET")
        .path("/missing.css")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_on_a_control_path_is_not_routed_to_the_device() {
    let server = Server::new_async().await;

    let filter = routes(control_for(&server), asset_dir());
    let response = request()
        .method("GET")
        .path("/sonos/playpause")
        .reply(&filter)
        .await;

    // Control endpoints are POST-only
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
