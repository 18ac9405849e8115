//! Data models for AV equipment placement and cable runs

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cable_specs::CableType;

/// A piece of equipment from the project's equipment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free text, e.g. "Display", "Matrix Switcher", "PTZ Camera"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl EquipmentItem {
    pub fn new(sku: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            name: None,
            category: Some(category.into()),
            quantity: 1,
        }
    }

    /// Category text, empty when the item has none
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Name for display, falling back to the SKU
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.sku)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountType {
    Floor,
    Wall,
    Ceiling,
    Rack,
    Table,
}

/// Coordinates in meters; `y` is height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Placement of one equipment item in the room
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquipmentPosition<'a> {
    pub equipment: &'a EquipmentItem,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub mount_type: MountType,
}

impl<'a> EquipmentPosition<'a> {
    pub fn new(equipment: &'a EquipmentItem, point: Point3, mount_type: MountType) -> Self {
        Self {
            equipment,
            x: point.x,
            y: point.y,
            z: point.z,
            mount_type,
        }
    }

    pub fn point(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn category(&self) -> &'a str {
        self.equipment.category()
    }
}

/// How a cable is run between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Routing {
    Direct,
    Wall,
    Ceiling,
    Floor,
    Conduit,
}

impl fmt::Display for Routing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Routing::Direct => "direct",
            Routing::Wall => "wall",
            Routing::Ceiling => "ceiling",
            Routing::Floor => "floor",
            Routing::Conduit => "conduit",
        };
        f.write_str(s)
    }
}

/// One planned cable run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CableRoute<'a> {
    pub from: &'a EquipmentPosition<'a>,
    pub to: &'a EquipmentPosition<'a>,
    /// Meters, rounded up to 0.1
    pub distance: f64,
    pub cable_type: CableType,
    /// USD, including termination
    pub estimated_cost: f64,
    pub routing: Routing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1080p")]
    Fhd1080p,
    #[serde(rename = "4K")]
    Uhd4k,
    #[serde(rename = "8K")]
    Uhd8k,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resolution::Fhd1080p => "1080p",
            Resolution::Uhd4k => "4K",
            Resolution::Uhd8k => "8K",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RefreshRate {
    Hz30,
    Hz60,
    Hz120,
}

impl RefreshRate {
    pub const fn hz(self) -> u32 {
        match self {
            RefreshRate::Hz30 => 30,
            RefreshRate::Hz60 => 60,
            RefreshRate::Hz120 => 120,
        }
    }
}

impl From<RefreshRate> for u32 {
    fn from(rate: RefreshRate) -> Self {
        rate.hz()
    }
}

impl TryFrom<u32> for RefreshRate {
    type Error = String;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        match hz {
            30 => Ok(RefreshRate::Hz30),
            60 => Ok(RefreshRate::Hz60),
            120 => Ok(RefreshRate::Hz120),
            other => Err(format!("unsupported refresh rate {other}Hz (expected 30, 60 or 120)")),
        }
    }
}

impl fmt::Display for RefreshRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.hz())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSubsampling {
    #[serde(rename = "4:2:0")]
    Yuv420,
    #[serde(rename = "4:2:2")]
    Yuv422,
    #[serde(rename = "4:4:4")]
    Yuv444,
}

impl fmt::Display for ColorSubsampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorSubsampling::Yuv420 => "4:2:0",
            ColorSubsampling::Yuv422 => "4:2:2",
            ColorSubsampling::Yuv444 => "4:4:4",
        };
        f.write_str(s)
    }
}

/// What the room's displays will mostly be showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Presentation,
    VideoConference,
    DigitalSignage,
    Broadcast,
    Training,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Presentation,
        ContentType::VideoConference,
        ContentType::DigitalSignage,
        ContentType::Broadcast,
        ContentType::Training,
    ];
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentType::Presentation => "presentation",
            ContentType::VideoConference => "video-conference",
            ContentType::DigitalSignage => "digital-signage",
            ContentType::Broadcast => "broadcast",
            ContentType::Training => "training",
        };
        f.write_str(s)
    }
}

/// Target video quality tier for a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyRequirement {
    pub resolution: Resolution,
    pub refresh_rate: RefreshRate,
    pub color_subsampling: ColorSubsampling,
    pub hdr: bool,
    /// Longest rated run among the recommended cables, in meters
    pub max_distance: f64,
    /// Most preferred first
    pub recommended_cables: Vec<CableType>,
    #[serde(default)]
    pub notes: String,
}

/// A named technology option to price against others
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub requirement: TechnologyRequirement,
}

/// Priced outcome of one scenario at a given run length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub scenario: String,
    /// First recommended cable of the scenario
    pub preferred_cable: CableType,
    /// Cable actually priced, after any long-run substitution
    pub cable_type: CableType,
    pub hardware_surcharge: f64,
    pub cost: f64,
    /// True when even the priced cable is rated below the run length
    pub exceeds_rating: bool,
    pub resolution: Resolution,
    pub refresh_rate: RefreshRate,
    pub hdr: bool,
}
