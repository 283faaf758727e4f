//! Device preview commands

use crate::{CommandError, Result};
use serde::{Deserialize, Serialize};

/// Preview device the editor canvas can switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    /// Command id that switches the canvas to this device
    pub fn command_id(&self) -> &'static str {
        match self {
            Device::Desktop => "set-device-desktop",
            Device::Tablet => "set-device-tablet",
            Device::Mobile => "set-device-mobile",
        }
    }

    /// Device name as registered with the host editor
    pub fn host_name(&self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Mobile => "Mobile portrait",
        }
    }

    /// Look up a device by its command id
    pub fn from_command_id(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|device| device.command_id() == id)
            .ok_or_else(|| CommandError::UnknownCommand(id.to_string()))
    }
}
