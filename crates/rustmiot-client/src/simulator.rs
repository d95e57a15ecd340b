//! Lightweight simulated MIoT switch.
//!
//! [`SimulatedSwitch`] answers get-properties and set-property exchanges
//! from an in-memory table. Useful for testing and development without
//! physical hardware: writes are echoed on subsequent reads, and failures
//! can be injected per property or for the whole transport.

use crate::transport::{PropertyRequest, PropertyResponse, Transport, TransportError};
use rustmiot_core::{mapping_for, DeviceModel, MappingError, PropertyValue};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// MIoT result code the simulator reports for an injected property failure.
const CODE_UNREADABLE: i32 = -4004;

/// A simulated plug or power strip.
pub struct SimulatedSwitch {
    model: DeviceModel,
    properties: RwLock<HashMap<(u32, u32), PropertyValue>>,
    failing: RwLock<HashSet<(u32, u32)>>,
    offline: AtomicBool,
}

impl SimulatedSwitch {
    /// Create a simulated device seeded with defaults for every property of
    /// the model's mapping.
    pub fn new(model: DeviceModel) -> Self {
        let mut properties = HashMap::new();
        for entry in mapping_for(model).entries() {
            properties.insert((entry.siid, entry.piid), default_value(entry.name));
        }
        Self {
            model,
            properties: RwLock::new(properties),
            failing: RwLock::new(HashSet::new()),
            offline: AtomicBool::new(false),
        }
    }

    pub const fn model(&self) -> DeviceModel {
        self.model
    }

    /// Overwrite one property by semantic name.
    pub async fn set_value(
        &self,
        name: &'static str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), MappingError> {
        let addr = mapping_for(self.model).resolve(name)?;
        self.properties.write().await.insert(addr, value.into());
        Ok(())
    }

    /// Current value of one property by semantic name.
    pub async fn value(&self, name: &'static str) -> Result<Option<PropertyValue>, MappingError> {
        let addr = mapping_for(self.model).resolve(name)?;
        Ok(self.properties.read().await.get(&addr).cloned())
    }

    /// Make reads of one property answer with a nonzero result code.
    pub async fn fail_property(&self, name: &'static str) -> Result<(), MappingError> {
        let addr = mapping_for(self.model).resolve(name)?;
        self.failing.write().await.insert(addr);
        Ok(())
    }

    /// Clear an injected per-property failure.
    pub async fn restore_property(&self, name: &'static str) -> Result<(), MappingError> {
        let addr = mapping_for(self.model).resolve(name)?;
        self.failing.write().await.remove(&addr);
        Ok(())
    }

    /// Simulate the device dropping off the network. While offline every
    /// exchange fails with a timeout.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    fn check_reachable(&self) -> Result<(), TransportError> {
        if self.offline.load(Ordering::Relaxed) {
            Err(TransportError::Timeout)
        } else {
            Ok(())
        }
    }
}

fn default_value(name: &str) -> PropertyValue {
    match name {
        "status" | "on" => PropertyValue::Int(0),
        "temperature" => PropertyValue::Int(25),
        "voltage" => PropertyValue::Float(230.0),
        "load_power" | "current" | "power_consumption" | "energy" => PropertyValue::Float(0.0),
        "enable_count_down" | "enable_relay_loop" | "enable_buzzer" | "keep_relay"
        | "control_locked" | "local_cd_enable" | "lowerpower_enable" => PropertyValue::Bool(false),
        "enable_led" => PropertyValue::Bool(true),
        _ => PropertyValue::Int(0),
    }
}

impl Transport for SimulatedSwitch {
    async fn get_properties(
        &self,
        requests: &[PropertyRequest],
    ) -> Result<Vec<PropertyResponse>, TransportError> {
        self.check_reachable()?;
        let properties = self.properties.read().await;
        let failing = self.failing.read().await;

        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            let addr = (request.siid, request.piid);
            let (code, value) = if failing.contains(&addr) {
                (CODE_UNREADABLE, None)
            } else {
                match properties.get(&addr) {
                    Some(value) => (0, Some(value.clone())),
                    None => (CODE_UNREADABLE, None),
                }
            };
            responses.push(PropertyResponse {
                did: request.did.clone(),
                code,
                value,
            });
        }
        Ok(responses)
    }

    async fn set_property(
        &self,
        siid: u32,
        piid: u32,
        value: PropertyValue,
    ) -> Result<bool, TransportError> {
        self.check_reachable()?;
        self.properties.write().await.insert((siid, piid), value);
        Ok(true)
    }
}
