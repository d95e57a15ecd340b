//! Per-model MIoT property mappings.
//!
//! Each registered model carries a static, ordered table mapping a semantic
//! property name to its service and property identifiers. The table order is
//! the wire order of the batch read request; responses are correlated back by
//! the echoed name, never by position.

use crate::error::MappingError;
use crate::model::DeviceModel;

/// One property of a device model: semantic name plus siid/piid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEntry {
    pub name: &'static str,
    pub siid: u32,
    pub piid: u32,
}

const fn entry(name: &'static str, siid: u32, piid: u32) -> PropertyEntry {
    PropertyEntry { name, siid, piid }
}

/// The full property table of one device model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMapping {
    model: DeviceModel,
    entries: &'static [PropertyEntry],
}

impl PropertyMapping {
    pub const fn model(&self) -> DeviceModel {
        self.model
    }

    /// Entries in wire request order.
    pub const fn entries(&self) -> &'static [PropertyEntry] {
        self.entries
    }

    /// Resolve a semantic name to its (siid, piid) address.
    pub fn resolve(&self, name: &'static str) -> Result<(u32, u32), MappingError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.siid, e.piid))
            .ok_or(MappingError::UnknownProperty {
                model: self.model,
                name,
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }
}

// https://home.miot-spec.com/spec?type=urn:miot-spec-v2:device:outlet:0000A002:qmi-2a1c1:1
static POWERSTRIP_2A1C1: PropertyMapping = PropertyMapping {
    model: DeviceModel::Powerstrip2a1c1,
    entries: &[
        entry("status", 2, 1),
        entry("mode", 2, 2),
        entry("temperature", 2, 3),
        entry("working_time", 2, 4),
        entry("power_consumption", 3, 1),
        entry("load_power", 3, 2),
        entry("voltage", 3, 3),
        entry("current", 3, 4),
        entry("energy", 3, 5),
        entry("count_down_time", 4, 1),
        entry("remain_time", 4, 2),
        entry("enable_count_down", 4, 3),
        entry("open_time", 5, 1),
        entry("close_time", 5, 2),
        entry("enable_relay_loop", 5, 3),
        entry("enable_led", 6, 1),
        entry("enable_buzzer", 6, 2),
        entry("system_status", 6, 3),
        entry("keep_relay", 6, 4),
        entry("calibration", 7, 1),
    ],
};

// https://home.miot-spec.com/spec?type=urn:miot-spec-v2:device:outlet:0000A002:qmi-tw02:1
static PLUG_TW02: PropertyMapping = PropertyMapping {
    model: DeviceModel::PlugTw02,
    entries: &[
        entry("on", 2, 1),
        entry("system_status", 2, 3),
        entry("temperature", 2, 6),
        entry("working_time", 2, 7),
        entry("power_consumption", 4, 1),
        entry("current", 4, 2),
        entry("voltage", 4, 3),
        entry("load_power", 4, 4),
        entry("energy", 4, 5),
        entry("control_locked", 5, 1),
        entry("enable_count_down", 6, 1),
        entry("count_down_time", 6, 2),
        entry("count_down_remain_tm", 6, 3),
        entry("enable_relay_loop", 6, 4),
        entry("loop_relay_close_tm", 6, 5),
        entry("loop_relay_break_tm", 6, 6),
        entry("timer_ifo", 6, 8),
        entry("timer_cfg", 6, 9),
        entry("local_cd_enable", 6, 10),
        entry("local_cd_set_time", 6, 11),
        entry("local_cd_remain_time", 6, 12),
        entry("local_cd_action", 6, 13),
        entry("lowerpower_threshold", 7, 1),
        entry("lowerpower_time", 7, 2),
        entry("lowerpower_enable", 7, 3),
        entry("calibration", 8, 3),
    ],
};

/// The property mapping of a registered model. Total over [`DeviceModel`];
/// unknown model strings are rejected earlier, when parsing the model id.
pub const fn mapping_for(model: DeviceModel) -> &'static PropertyMapping {
    match model {
        DeviceModel::Powerstrip2a1c1 => &POWERSTRIP_2A1C1,
        DeviceModel::PlugTw02 => &PLUG_TW02,
    }
}
