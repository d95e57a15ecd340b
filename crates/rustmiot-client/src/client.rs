//! The MIoT switch client.
//!
//! [`SwitchClient`] is constructed once per configured device with the model
//! fixed, and issues stateless request/response exchanges through a
//! [`Transport`]: a fresh batched read per `status()` call and exactly one
//! single-property write per setter. Retry and timeout policy belong to the
//! transport, not here.

use crate::error::ClientError;
use crate::transport::{PropertyRequest, PropertyResponse, Transport, TransportError};
use rustmiot_core::{mapping_for, DeviceModel, PropertyMapping, PropertyValue, SwitchStatus};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

/// Power mode tokens accepted by [`SwitchClient::set_power_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    Normal,
    Eco,
}

impl FromStr for PowerMode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "green" | "eco" => Ok(Self::Eco),
            other => Err(ClientError::InvalidArgument(format!(
                "unrecognized power mode \"{other}\""
            ))),
        }
    }
}

/// Client for one MIoT plug or power strip.
pub struct SwitchClient<T: Transport> {
    model: DeviceModel,
    mapping: &'static PropertyMapping,
    transport: T,
    online: AtomicBool,
}

impl<T: Transport> SwitchClient<T> {
    /// Create a client from a vendor model string. Fails with
    /// `UnsupportedModel` for models without a registered mapping.
    pub fn new(model: &str, transport: T) -> Result<Self, ClientError> {
        Ok(Self::with_model(model.parse()?, transport))
    }

    pub fn with_model(model: DeviceModel, transport: T) -> Self {
        Self {
            model,
            mapping: mapping_for(model),
            transport,
            online: AtomicBool::new(true),
        }
    }

    pub const fn model(&self) -> DeviceModel {
        self.model
    }

    /// Availability as observed by the edge-triggered failure tracking:
    /// `false` after a transport failure, restored by the next success.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }

    fn note_success(&self) {
        if !self.online.swap(true, Ordering::Relaxed) {
            log::info!("{}: device reachable again", self.model);
        }
    }

    // Logs at error level only on the healthy-to-failing edge so a device
    // that stays down does not flood the log.
    fn note_failure(&self, err: &TransportError) {
        if self.online.swap(false, Ordering::Relaxed) {
            log::error!("{}: transport failure: {err}", self.model);
        } else {
            log::debug!("{}: transport still failing: {err}", self.model);
        }
    }

    /// Poll the full property table and decode a status snapshot.
    ///
    /// Per-property failures (nonzero result code) become absent values in
    /// the snapshot; the call itself fails only when the transport cannot
    /// complete the exchange.
    pub async fn status(&self) -> Result<SwitchStatus, ClientError> {
        let requests: Vec<PropertyRequest> = self
            .mapping
            .entries()
            .iter()
            .map(|e| PropertyRequest {
                did: e.name.to_string(),
                siid: e.siid,
                piid: e.piid,
            })
            .collect();

        let responses = match self.transport.get_properties(&requests).await {
            Ok(responses) => {
                self.note_success();
                responses
            }
            Err(err) => {
                self.note_failure(&err);
                return Err(err.into());
            }
        };

        Ok(SwitchStatus::new(self.model, self.correlate(responses)))
    }

    fn correlate(
        &self,
        responses: Vec<PropertyResponse>,
    ) -> HashMap<String, Option<PropertyValue>> {
        let mut values = HashMap::with_capacity(responses.len());
        for response in responses {
            if !self.mapping.contains(&response.did) {
                log::debug!("{}: ignoring unknown did \"{}\"", self.model, response.did);
                continue;
            }
            let value = if response.code == 0 {
                response.value
            } else {
                log::debug!(
                    "{}: property \"{}\" read failed with code {}",
                    self.model,
                    response.did,
                    response.code
                );
                None
            };
            values.insert(response.did, value);
        }
        values
    }

    /// Write one property. Resolves the name before touching the transport,
    /// so an unknown name never produces wire traffic.
    pub async fn set_property(
        &self,
        name: &'static str,
        value: impl Into<PropertyValue>,
    ) -> Result<bool, ClientError> {
        let (siid, piid) = self.mapping.resolve(name)?;
        match self.transport.set_property(siid, piid, value.into()).await {
            Ok(acknowledged) => {
                self.note_success();
                Ok(acknowledged)
            }
            Err(err) => {
                self.note_failure(&err);
                Err(err.into())
            }
        }
    }

    pub async fn turn_on(&self) -> Result<bool, ClientError> {
        self.set_property(self.model.power_property(), true).await
    }

    pub async fn turn_off(&self) -> Result<bool, ClientError> {
        self.set_property(self.model.power_property(), false).await
    }

    /// Set the power mode. The tw02 has no `mode` property; its vendor
    /// integration redirects power-mode writes to `on`, preserved here.
    pub async fn set_power_mode(&self, mode: PowerMode) -> Result<bool, ClientError> {
        let name = match self.model {
            DeviceModel::Powerstrip2a1c1 => "mode",
            DeviceModel::PlugTw02 => "on",
        };
        self.set_property(name, mode == PowerMode::Eco).await
    }

    pub async fn set_countdown_enabled(&self, enabled: bool) -> Result<bool, ClientError> {
        self.set_property("enable_count_down", enabled).await
    }

    pub async fn set_countdown_seconds(&self, seconds: u32) -> Result<bool, ClientError> {
        self.set_property("count_down_time", seconds).await
    }

    pub async fn set_wifi_led(&self, enabled: bool) -> Result<bool, ClientError> {
        self.set_property("enable_led", enabled).await
    }

    pub async fn set_buzzer(&self, enabled: bool) -> Result<bool, ClientError> {
        self.set_property("enable_buzzer", enabled).await
    }

    pub async fn set_keep_relay(&self, enabled: bool) -> Result<bool, ClientError> {
        self.set_property("keep_relay", enabled).await
    }
}
