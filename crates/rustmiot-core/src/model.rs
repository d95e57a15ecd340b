use crate::error::ModelError;
use core::fmt;
use std::str::FromStr;

/// MIoT plug and power strip models with a registered property mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceModel {
    /// Mi PowerStrip (global), `qmi.plug.2a1c1`.
    Powerstrip2a1c1,
    /// Mi Plug TW02, `qmi.plug.tw02`.
    PlugTw02,
}

pub const MODEL_QMI_POWERSTRIP_2A1C1: &str = "qmi.plug.2a1c1";
pub const MODEL_QMI_PLUG_TW02: &str = "qmi.plug.tw02";

impl DeviceModel {
    pub const ALL: [DeviceModel; 2] = [Self::Powerstrip2a1c1, Self::PlugTw02];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Powerstrip2a1c1 => MODEL_QMI_POWERSTRIP_2A1C1,
            Self::PlugTw02 => MODEL_QMI_PLUG_TW02,
        }
    }

    /// Raw property carrying the on/off state: `status` on the power strip
    /// family, `on` on the tw02.
    pub const fn power_property(self) -> &'static str {
        match self {
            Self::Powerstrip2a1c1 => "status",
            Self::PlugTw02 => "on",
        }
    }

    /// Capability bitmask used by callers to gate the domain setters.
    pub const fn features(self) -> Features {
        match self {
            Self::Powerstrip2a1c1 => Features::POWER_STRIP_V3,
            Self::PlugTw02 => Features::NONE,
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MODEL_QMI_POWERSTRIP_2A1C1 => Ok(Self::Powerstrip2a1c1),
            MODEL_QMI_PLUG_TW02 => Ok(Self::PlugTw02),
            other => Err(ModelError::UnsupportedModel(other.to_string())),
        }
    }
}

/// Per-model capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features(u32);

impl Features {
    pub const NONE: Features = Features(0);
    pub const SET_POWER_MODE: Features = Features(1);
    pub const SET_WIFI_LED: Features = Features(2);
    pub const SET_POWER_PRICE: Features = Features(4);
    pub const SET_BUZZER: Features = Features(8);
    pub const COUNTDOWN: Features = Features(16);
    pub const SET_KEEP_RELAY: Features = Features(32);

    /// Feature set of the 2a1c1-class power strips.
    pub const POWER_STRIP_V3: Features = Features(
        Self::SET_POWER_MODE.0
            | Self::SET_WIFI_LED.0
            | Self::SET_BUZZER.0
            | Self::COUNTDOWN.0
            | Self::SET_KEEP_RELAY.0,
    );

    pub const fn contains(self, other: Features) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}
