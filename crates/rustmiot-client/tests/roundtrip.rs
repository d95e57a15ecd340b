//! End-to-end exercises of the client against the simulated device.

use rustmiot_client::{
    DeviceModel, PowerMode, SimulatedSwitch, SwitchClient, SwitchState, SystemStatus,
};
use std::sync::Arc;

#[tokio::test]
async fn set_then_status_round_trip() {
    let client = SwitchClient::with_model(
        DeviceModel::Powerstrip2a1c1,
        SimulatedSwitch::new(DeviceModel::Powerstrip2a1c1),
    );

    let status = client.status().await.unwrap();
    assert_eq!(status.is_on().unwrap(), Some(false));

    assert!(client.turn_on().await.unwrap());
    let status = client.status().await.unwrap();
    assert_eq!(status.is_on().unwrap(), Some(true));
    assert_eq!(status.switch_state().unwrap(), Some(SwitchState::On));

    assert!(client.set_power_mode(PowerMode::Eco).await.unwrap());
    let status = client.status().await.unwrap();
    assert_eq!(status.power_mode().unwrap(), Some(1));

    assert!(client.set_countdown_seconds(120).await.unwrap());
    assert!(client.set_countdown_enabled(true).await.unwrap());
    let status = client.status().await.unwrap();
    assert_eq!(status.countdown_time().unwrap(), Some(120));
    assert_eq!(status.countdown_enabled().unwrap(), Some(true));
}

#[tokio::test]
async fn full_poll_decodes_every_mapped_property() {
    for model in DeviceModel::ALL {
        let client = SwitchClient::with_model(model, SimulatedSwitch::new(model));
        let status = client.status().await.unwrap();

        assert_eq!(status.is_on().unwrap(), Some(false));
        assert_eq!(status.system_status().unwrap(), Some(SystemStatus::Normal));
        assert_eq!(status.temperature().unwrap(), Some(25));
        assert_eq!(status.voltage().unwrap(), Some(230.0));
        assert_eq!(status.countdown_remaining().unwrap(), Some(0));
        assert_eq!(status.relay_open_time().unwrap(), Some(0));
        assert_eq!(status.relay_close_time().unwrap(), Some(0));
    }
}

#[tokio::test]
async fn injected_property_failure_degrades_gracefully() {
    let simulator = SimulatedSwitch::new(DeviceModel::Powerstrip2a1c1);
    simulator.fail_property("temperature").await.unwrap();
    let client = SwitchClient::with_model(DeviceModel::Powerstrip2a1c1, simulator);

    let status = client.status().await.unwrap();
    assert_eq!(status.temperature().unwrap(), None);
    assert_eq!(status.is_on().unwrap(), Some(false));
    assert_eq!(status.load_power().unwrap(), Some(0.0));
}

#[tokio::test]
async fn availability_flips_once_per_outage_and_recovers() {
    let simulator = Arc::new(SimulatedSwitch::new(DeviceModel::PlugTw02));
    let client = SwitchClient::with_model(DeviceModel::PlugTw02, Arc::clone(&simulator));

    assert!(client.status().await.is_ok());
    assert!(client.is_online());

    simulator.set_offline(true);
    assert!(client.status().await.is_err());
    assert!(!client.is_online());
    assert!(client.status().await.is_err());
    assert!(!client.is_online());

    simulator.set_offline(false);
    assert!(client.status().await.is_ok());
    assert!(client.is_online());
}

#[tokio::test]
async fn wifi_led_write_echoes_on_next_read() {
    let client = SwitchClient::with_model(
        DeviceModel::Powerstrip2a1c1,
        SimulatedSwitch::new(DeviceModel::Powerstrip2a1c1),
    );

    assert_eq!(client.status().await.unwrap().wifi_led().unwrap(), Some(true));
    assert!(client.set_wifi_led(false).await.unwrap());
    assert_eq!(
        client.status().await.unwrap().wifi_led().unwrap(),
        Some(false)
    );
}
