//! Decoded status snapshots.
//!
//! [`SwitchStatus`] wraps the name → value map assembled from one batch read
//! and exposes typed accessors. The two device families report the same
//! semantic state under different raw keys; the accessors select the raw key
//! by model so callers see one uniform surface.

use crate::error::StatusError;
use crate::model::DeviceModel;
use crate::value::PropertyValue;
use std::collections::HashMap;

/// On/off state as reported by the `status`/`on` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    Unknown,
    Off,
    On,
}

impl SwitchState {
    pub const fn code(self) -> i64 {
        match self {
            Self::Unknown => -1,
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Total decode: out-of-range codes yield [`Unknown`](Self::Unknown) and
    /// a warning, never an error. A firmware reporting a bogus state must
    /// not abort the poll cycle.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Off,
            1 => Self::On,
            other => {
                log::warn!("unknown switch state code {other}");
                Self::Unknown
            }
        }
    }
}

/// Protection/alarm state reported by `system_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Unknown,
    Normal,
    ProtectedOverCurrent,
    ProtectedOverTemperature,
    AlarmOverCurrent,
    AlarmOverTemperature,
}

impl SystemStatus {
    pub const fn code(self) -> i64 {
        match self {
            Self::Unknown => -1,
            Self::Normal => 0,
            Self::ProtectedOverCurrent => 1,
            Self::ProtectedOverTemperature => 2,
            Self::AlarmOverCurrent => 3,
            Self::AlarmOverTemperature => 4,
        }
    }

    /// Total decode with the same fallback policy as [`SwitchState::from_code`].
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Normal,
            1 => Self::ProtectedOverCurrent,
            2 => Self::ProtectedOverTemperature,
            3 => Self::AlarmOverCurrent,
            4 => Self::AlarmOverTemperature,
            other => {
                log::warn!("unknown system status code {other}");
                Self::Unknown
            }
        }
    }
}

/// Immutable snapshot of one poll cycle.
///
/// Built once from the correlated batch-read results: an entry is `None`
/// when the device answered that property with a nonzero result code. Names
/// the device never echoed are not present at all, and reading them fails
/// with [`StatusError::MissingProperty`].
#[derive(Debug, Clone)]
pub struct SwitchStatus {
    model: DeviceModel,
    values: HashMap<String, Option<PropertyValue>>,
}

impl SwitchStatus {
    pub fn new(model: DeviceModel, values: HashMap<String, Option<PropertyValue>>) -> Self {
        Self { model, values }
    }

    pub const fn model(&self) -> DeviceModel {
        self.model
    }

    /// Raw value of a reported property. `Ok(None)` means the read for this
    /// property failed in an otherwise successful poll.
    pub fn raw(&self, name: &'static str) -> Result<Option<&PropertyValue>, StatusError> {
        match self.values.get(name) {
            Some(value) => Ok(value.as_ref()),
            None => Err(StatusError::MissingProperty {
                model: self.model,
                name,
            }),
        }
    }

    fn bool_value(&self, name: &'static str) -> Result<Option<bool>, StatusError> {
        match self.raw(name)? {
            Some(v) => v
                .as_bool()
                .map(Some)
                .ok_or(StatusError::UnexpectedType { name }),
            None => Ok(None),
        }
    }

    fn int_value(&self, name: &'static str) -> Result<Option<i64>, StatusError> {
        match self.raw(name)? {
            Some(v) => v
                .as_i64()
                .map(Some)
                .ok_or(StatusError::UnexpectedType { name }),
            None => Ok(None),
        }
    }

    fn float_value(&self, name: &'static str) -> Result<Option<f64>, StatusError> {
        match self.raw(name)? {
            Some(v) => v
                .as_f64()
                .map(Some)
                .ok_or(StatusError::UnexpectedType { name }),
            None => Ok(None),
        }
    }

    /// `true` if the relay is closed.
    pub fn is_on(&self) -> Result<Option<bool>, StatusError> {
        self.bool_value(self.model.power_property())
    }

    /// On/off state as a decoded enum.
    pub fn switch_state(&self) -> Result<Option<SwitchState>, StatusError> {
        Ok(self
            .int_value(self.model.power_property())?
            .map(SwitchState::from_code))
    }

    pub fn system_status(&self) -> Result<Option<SystemStatus>, StatusError> {
        Ok(self
            .int_value("system_status")?
            .map(SystemStatus::from_code))
    }

    /// Power mode. The tw02 firmware exposes no separate mode property and
    /// reports the `on` state here instead, matching the vendor integration.
    pub fn power_mode(&self) -> Result<Option<i64>, StatusError> {
        match self.model {
            DeviceModel::Powerstrip2a1c1 => self.int_value("mode"),
            DeviceModel::PlugTw02 => self.int_value("on"),
        }
    }

    pub fn temperature(&self) -> Result<Option<i64>, StatusError> {
        self.int_value("temperature")
    }

    pub fn working_time(&self) -> Result<Option<i64>, StatusError> {
        self.int_value("working_time")
    }

    pub fn load_power(&self) -> Result<Option<f64>, StatusError> {
        self.float_value("load_power")
    }

    pub fn voltage(&self) -> Result<Option<f64>, StatusError> {
        self.float_value("voltage")
    }

    pub fn current(&self) -> Result<Option<f64>, StatusError> {
        self.float_value("current")
    }

    pub fn power_consumption(&self) -> Result<Option<f64>, StatusError> {
        self.float_value("power_consumption")
    }

    pub fn energy(&self) -> Result<Option<f64>, StatusError> {
        self.float_value("energy")
    }

    /// Configured countdown duration in seconds.
    pub fn countdown_time(&self) -> Result<Option<i64>, StatusError> {
        self.int_value("count_down_time")
    }

    /// Seconds left on a running countdown.
    pub fn countdown_remaining(&self) -> Result<Option<i64>, StatusError> {
        match self.model {
            DeviceModel::Powerstrip2a1c1 => self.int_value("remain_time"),
            DeviceModel::PlugTw02 => self.int_value("count_down_remain_tm"),
        }
    }

    pub fn countdown_enabled(&self) -> Result<Option<bool>, StatusError> {
        self.bool_value("enable_count_down")
    }

    pub fn relay_loop_enabled(&self) -> Result<Option<bool>, StatusError> {
        self.bool_value("enable_relay_loop")
    }

    /// Relay-loop open timer. On the tw02 this is the `loop_relay_break_tm`
    /// property; the break/close pairing follows the vendor integration and
    /// is unverified against hardware.
    pub fn relay_open_time(&self) -> Result<Option<i64>, StatusError> {
        match self.model {
            DeviceModel::Powerstrip2a1c1 => self.int_value("open_time"),
            DeviceModel::PlugTw02 => self.int_value("loop_relay_break_tm"),
        }
    }

    /// Relay-loop close timer (`loop_relay_close_tm` on the tw02).
    pub fn relay_close_time(&self) -> Result<Option<i64>, StatusError> {
        match self.model {
            DeviceModel::Powerstrip2a1c1 => self.int_value("close_time"),
            DeviceModel::PlugTw02 => self.int_value("loop_relay_close_tm"),
        }
    }

    pub fn wifi_led(&self) -> Result<Option<bool>, StatusError> {
        self.bool_value("enable_led")
    }

    pub fn buzzer(&self) -> Result<Option<bool>, StatusError> {
        self.bool_value("enable_buzzer")
    }

    pub fn keep_relay(&self) -> Result<Option<bool>, StatusError> {
        self.bool_value("keep_relay")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot(model: DeviceModel, entries: &[(&str, Option<PropertyValue>)]) -> SwitchStatus {
        let values = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        SwitchStatus::new(model, values)
    }

    #[test]
    fn switch_state_decode_table() {
        assert_eq!(SwitchState::from_code(0), SwitchState::Off);
        assert_eq!(SwitchState::from_code(1), SwitchState::On);
        assert_eq!(SwitchState::from_code(7), SwitchState::Unknown);
        assert_eq!(SwitchState::from_code(-5), SwitchState::Unknown);
    }

    #[test]
    fn system_status_decode_table() {
        assert_eq!(SystemStatus::from_code(0), SystemStatus::Normal);
        assert_eq!(SystemStatus::from_code(1), SystemStatus::ProtectedOverCurrent);
        assert_eq!(SystemStatus::from_code(2), SystemStatus::ProtectedOverTemperature);
        assert_eq!(SystemStatus::from_code(3), SystemStatus::AlarmOverCurrent);
        assert_eq!(SystemStatus::from_code(4), SystemStatus::AlarmOverTemperature);
        assert_eq!(SystemStatus::from_code(5), SystemStatus::Unknown);
        assert_eq!(SystemStatus::from_code(-1), SystemStatus::Unknown);
    }

    #[test]
    fn powerstrip_scenario() {
        let status = snapshot(
            DeviceModel::Powerstrip2a1c1,
            &[
                ("status", Some(PropertyValue::Int(1))),
                ("mode", Some(PropertyValue::Int(0))),
                ("temperature", Some(PropertyValue::Int(25))),
                ("load_power", Some(PropertyValue::Float(12.3))),
                ("system_status", Some(PropertyValue::Int(0))),
            ],
        );
        assert_eq!(status.is_on().unwrap(), Some(true));
        assert_eq!(status.system_status().unwrap(), Some(SystemStatus::Normal));
        assert_eq!(status.load_power().unwrap(), Some(12.3));
        assert_eq!(status.temperature().unwrap(), Some(25));
        assert_eq!(status.power_mode().unwrap(), Some(0));
    }

    #[test]
    fn tw02_scenario_with_out_of_range_system_status() {
        let status = snapshot(
            DeviceModel::PlugTw02,
            &[
                ("on", Some(PropertyValue::Int(0))),
                ("system_status", Some(PropertyValue::Int(9))),
            ],
        );
        assert_eq!(status.is_on().unwrap(), Some(false));
        assert_eq!(status.system_status().unwrap(), Some(SystemStatus::Unknown));
    }

    #[test]
    fn tw02_is_on_ignores_status_key() {
        let status = snapshot(
            DeviceModel::PlugTw02,
            &[
                ("on", Some(PropertyValue::Bool(false))),
                ("status", Some(PropertyValue::Int(1))),
            ],
        );
        assert_eq!(status.is_on().unwrap(), Some(false));
    }

    #[test]
    fn powerstrip_is_on_ignores_on_key() {
        let status = snapshot(
            DeviceModel::Powerstrip2a1c1,
            &[
                ("status", Some(PropertyValue::Int(1))),
                ("on", Some(PropertyValue::Bool(false))),
            ],
        );
        assert_eq!(status.is_on().unwrap(), Some(true));
    }

    #[test]
    fn failed_read_is_absent_not_an_error() {
        let status = snapshot(
            DeviceModel::Powerstrip2a1c1,
            &[
                ("status", Some(PropertyValue::Int(1))),
                ("temperature", None),
            ],
        );
        assert_eq!(status.temperature().unwrap(), None);
        assert_eq!(status.is_on().unwrap(), Some(true));
    }

    #[test]
    fn unreported_property_is_an_error() {
        let status = snapshot(
            DeviceModel::Powerstrip2a1c1,
            &[("status", Some(PropertyValue::Int(1)))],
        );
        assert_eq!(
            status.keep_relay().unwrap_err(),
            StatusError::MissingProperty {
                model: DeviceModel::Powerstrip2a1c1,
                name: "keep_relay",
            }
        );
    }

    #[test]
    fn wrong_wire_type_is_reported() {
        let status = snapshot(
            DeviceModel::Powerstrip2a1c1,
            &[("temperature", Some(PropertyValue::Str("hot".into())))],
        );
        assert_eq!(
            status.temperature().unwrap_err(),
            StatusError::UnexpectedType {
                name: "temperature"
            }
        );
    }

    #[test]
    fn variant_countdown_and_relay_keys() {
        let strip = snapshot(
            DeviceModel::Powerstrip2a1c1,
            &[
                ("remain_time", Some(PropertyValue::Int(30))),
                ("open_time", Some(PropertyValue::Int(5))),
                ("close_time", Some(PropertyValue::Int(10))),
            ],
        );
        assert_eq!(strip.countdown_remaining().unwrap(), Some(30));
        assert_eq!(strip.relay_open_time().unwrap(), Some(5));
        assert_eq!(strip.relay_close_time().unwrap(), Some(10));

        let plug = snapshot(
            DeviceModel::PlugTw02,
            &[
                ("count_down_remain_tm", Some(PropertyValue::Int(40))),
                ("loop_relay_break_tm", Some(PropertyValue::Int(6))),
                ("loop_relay_close_tm", Some(PropertyValue::Int(11))),
            ],
        );
        assert_eq!(plug.countdown_remaining().unwrap(), Some(40));
        assert_eq!(plug.relay_open_time().unwrap(), Some(6));
        assert_eq!(plug.relay_close_time().unwrap(), Some(11));
    }

    proptest! {
        #[test]
        fn switch_state_decode_is_total(code in any::<i64>()) {
            let state = SwitchState::from_code(code);
            match code {
                0 => prop_assert_eq!(state, SwitchState::Off),
                1 => prop_assert_eq!(state, SwitchState::On),
                _ => prop_assert_eq!(state, SwitchState::Unknown),
            }
        }

        #[test]
        fn system_status_decode_is_total(code in any::<i64>()) {
            let status = SystemStatus::from_code(code);
            if (0..=4).contains(&code) {
                prop_assert_eq!(status.code(), code);
            } else {
                prop_assert_eq!(status, SystemStatus::Unknown);
            }
        }
    }
}
