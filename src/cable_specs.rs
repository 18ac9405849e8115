//! Physical limits and per-meter pricing for every supported cable type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CableType {
    #[serde(rename = "HDMI-2.0")]
    Hdmi20,
    #[serde(rename = "HDMI-2.1")]
    Hdmi21,
    #[serde(rename = "HDBaseT")]
    HdBaseT,
    #[serde(rename = "Cat6")]
    Cat6,
    #[serde(rename = "Cat6a")]
    Cat6a,
    #[serde(rename = "Fiber-OM3")]
    FiberOm3,
    #[serde(rename = "Fiber-OM4")]
    FiberOm4,
    #[serde(rename = "Speaker-16AWG")]
    Speaker16Awg,
    #[serde(rename = "Speaker-14AWG")]
    Speaker14Awg,
    #[serde(rename = "XLR")]
    Xlr,
    #[serde(rename = "USB-3.0")]
    Usb30,
    #[serde(rename = "DisplayPort-1.4")]
    DisplayPort14,
}

impl CableType {
    pub const ALL: [CableType; 12] = [
        CableType::Hdmi20,
        CableType::Hdmi21,
        CableType::HdBaseT,
        CableType::Cat6,
        CableType::Cat6a,
        CableType::FiberOm3,
        CableType::FiberOm4,
        CableType::Speaker16Awg,
        CableType::Speaker14Awg,
        CableType::Xlr,
        CableType::Usb30,
        CableType::DisplayPort14,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CableType::Hdmi20 => "HDMI-2.0",
            CableType::Hdmi21 => "HDMI-2.1",
            CableType::HdBaseT => "HDBaseT",
            CableType::Cat6 => "Cat6",
            CableType::Cat6a => "Cat6a",
            CableType::FiberOm3 => "Fiber-OM3",
            CableType::FiberOm4 => "Fiber-OM4",
            CableType::Speaker16Awg => "Speaker-16AWG",
            CableType::Speaker14Awg => "Speaker-14AWG",
            CableType::Xlr => "XLR",
            CableType::Usb30 => "USB-3.0",
            CableType::DisplayPort14 => "DisplayPort-1.4",
        }
    }

    pub const fn is_hdmi(self) -> bool {
        matches!(self, CableType::Hdmi20 | CableType::Hdmi21)
    }

    pub fn spec(self) -> &'static CableSpec {
        get_cable_specs(self)
    }
}

impl fmt::Display for CableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CableType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CableType::ALL
            .into_iter()
            .find(|cable| cable.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlanError::UnknownCableType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CableSpec {
    /// Longest unassisted run in meters
    pub max_distance: f64,
    /// USD
    pub cost_per_meter: f64,
    pub bandwidth: &'static str,
    pub notes: &'static str,
}

const HDMI_20: CableSpec = CableSpec {
    max_distance: 15.0,
    cost_per_meter: 3.5,
    bandwidth: "18 Gbps",
    notes: "4K60 4:2:0 / 4K30 4:4:4; passive copper",
};

const HDMI_21: CableSpec = CableSpec {
    max_distance: 10.0,
    cost_per_meter: 8.0,
    bandwidth: "48 Gbps",
    notes: "8K60, 4K120, 4K60 4:4:4; certified Ultra High Speed required",
};

const HDBASET: CableSpec = CableSpec {
    max_distance: 100.0,
    cost_per_meter: 1.5,
    bandwidth: "10.2 Gbps",
    notes: "Video, audio, control and PoH over one Cat6a run; needs TX/RX extenders",
};

const CAT6: CableSpec = CableSpec {
    max_distance: 100.0,
    cost_per_meter: 0.8,
    bandwidth: "1 Gbps (10 Gbps to 55 m)",
    notes: "Control, Dante/AVB audio, general network",
};

const CAT6A: CableSpec = CableSpec {
    max_distance: 100.0,
    cost_per_meter: 1.2,
    bandwidth: "10 Gbps",
    notes: "AV-over-IP backbone, HDBaseT carrier",
};

const FIBER_OM3: CableSpec = CableSpec {
    max_distance: 300.0,
    cost_per_meter: 2.5,
    bandwidth: "10 Gbps",
    notes: "Multimode; long runs between rooms or floors",
};

const FIBER_OM4: CableSpec = CableSpec {
    max_distance: 550.0,
    cost_per_meter: 3.5,
    bandwidth: "10 Gbps (40/100 Gbps to 150 m)",
    notes: "Multimode; uncompressed 8K transport",
};

const SPEAKER_16AWG: CableSpec = CableSpec {
    max_distance: 30.0,
    cost_per_meter: 0.6,
    bandwidth: "n/a",
    notes: "Low-impedance runs up to 30 m",
};

const SPEAKER_14AWG: CableSpec = CableSpec {
    max_distance: 60.0,
    cost_per_meter: 0.9,
    bandwidth: "n/a",
    notes: "Longer low-impedance runs with acceptable loss",
};

const XLR: CableSpec = CableSpec {
    max_distance: 100.0,
    cost_per_meter: 2.0,
    bandwidth: "Balanced analog audio",
    notes: "Microphones and line-level audio",
};

const USB_30: CableSpec = CableSpec {
    max_distance: 5.0,
    cost_per_meter: 6.0,
    bandwidth: "5 Gbps",
    notes: "Camera to codec, short runs only",
};

const DISPLAYPORT_14: CableSpec = CableSpec {
    max_distance: 15.0,
    cost_per_meter: 7.0,
    bandwidth: "32.4 Gbps",
    notes: "4K120 / 8K60 with DSC",
};

/// Look up the physical and cost properties of a cable type.
///
/// The match is exhaustive over [`CableType`], so a variant added without a
/// table entry fails to compile rather than producing an undefined cost.
pub fn get_cable_specs(cable_type: CableType) -> &'static CableSpec {
    match cable_type {
        CableType::Hdmi20 => &HDMI_20,
        CableType::Hdmi21 => &HDMI_21,
        CableType::HdBaseT => &HDBASET,
        CableType::Cat6 => &CAT6,
        CableType::Cat6a => &CAT6A,
        CableType::FiberOm3 => &FIBER_OM3,
        CableType::FiberOm4 => &FIBER_OM4,
        CableType::Speaker16Awg => &SPEAKER_16AWG,
        CableType::Speaker14Awg => &SPEAKER_14AWG,
        CableType::Xlr => &XLR,
        CableType::Usb30 => &USB_30,
        CableType::DisplayPort14 => &DISPLAYPORT_14,
    }
}

/// Look up a cable by its catalog name, e.g. `"HDBaseT"`
pub fn get_cable_specs_by_name(name: &str) -> Result<&'static CableSpec, PlanError> {
    Ok(get_cable_specs(name.parse()?))
}
