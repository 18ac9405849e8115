//! Room layout files
//!
//! A layout is a JSON document listing the room's equipment, optionally with
//! saved positions from the 3D viewer:
//!
//! ```json
//! {
//!   "name": "Boardroom 4.02",
//!   "room_type": "Boardroom",
//!   "content_type": "video-conference",
//!   "equipment": [
//!     { "sku": "MX-88", "category": "Matrix Switcher",
//!       "position": { "x": 0.0, "y": 1.0, "z": 0.0, "mount_type": "rack" } },
//!     { "sku": "QM85", "category": "Display" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;
use walkdir::WalkDir;

use crate::error::{PlanError, Result};
use crate::models::{ContentType, EquipmentItem, EquipmentPosition, MountType, Point3};
use crate::placement::auto_place;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub mount_type: MountType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    #[serde(flatten)]
    pub equipment: EquipmentItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<SavedPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub equipment: Vec<LayoutItem>,
}

impl RoomLayout {
    /// Positions for every item, in file order. Items without a saved
    /// position are auto-placed on the grid.
    pub fn positions(&self) -> Vec<EquipmentPosition<'_>> {
        let unplaced = self
            .equipment
            .iter()
            .filter(|item| item.position.is_none())
            .map(|item| &item.equipment);
        let mut auto = auto_place(unplaced).into_iter();

        self.equipment
            .iter()
            .filter_map(|item| match item.position {
                Some(saved) => Some(EquipmentPosition::new(
                    &item.equipment,
                    Point3::new(saved.x, saved.y, saved.z),
                    saved.mount_type,
                )),
                None => auto.next(),
            })
            .collect()
    }

    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

pub fn parse_layout(json: &str) -> serde_json::Result<RoomLayout> {
    serde_json::from_str(json)
}

pub fn load_layout(path: &Path) -> Result<RoomLayout> {
    let content = fs::read_to_string(path)?;
    let layout = parse_layout(&content).map_err(|e| PlanError::Layout {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(
        path = %path.display(),
        items = layout.equipment.len(),
        "loaded room layout"
    );
    Ok(layout)
}

/// Find every `*.json` layout under a directory, sorted by path
pub fn find_layout_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PlanError::Layout {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let mut layouts: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    layouts.sort();

    Ok(layouts)
}

/// Sample conference room used by the `sample` command
pub fn sample_layout() -> RoomLayout {
    let item = |sku: &str, name: &str, category: &str, position: Option<(f64, f64, f64, MountType)>| {
        LayoutItem {
            equipment: EquipmentItem {
                sku: sku.to_string(),
                name: Some(name.to_string()),
                category: Some(category.to_string()),
                quantity: 1,
            },
            position: position.map(|(x, y, z, mount_type)| SavedPosition { x, y, z, mount_type }),
        }
    };

    RoomLayout {
        name: Some("Boardroom 4.02".to_string()),
        room_type: Some("Boardroom".to_string()),
        content_type: Some(ContentType::VideoConference),
        equipment: vec![
            item("DM-MD8X8", "8x8 Matrix", "Matrix Switcher", Some((0.5, 1.0, 0.5, MountType::Rack))),
            item("UC-P10", "Table Input", "Source Input", Some((4.0, 0.75, 3.0, MountType::Table))),
            item("EVI-D80", "PTZ Camera", "Camera", Some((3.0, 1.8, 0.1, MountType::Wall))),
            item("QM85R", "85in Display", "Display", Some((4.5, 1.5, 0.1, MountType::Wall))),
            item("QM55R", "Confidence Monitor", "Monitor", Some((4.5, 1.2, 7.9, MountType::Wall))),
            item("CS-6", "Ceiling Speaker", "Speaker", Some((2.5, 2.7, 2.5, MountType::Ceiling))),
            item("CS-6B", "Ceiling Speaker", "Speaker", Some((6.5, 2.7, 2.5, MountType::Ceiling))),
            item("TCC2", "Ceiling Mic", "Audio Microphone", None),
        ],
    }
}
