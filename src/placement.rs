//! Grid auto-placement for equipment that has no saved position

use crate::classify::{category_mentions, classify, Keyword};
use crate::models::{EquipmentItem, EquipmentPosition, MountType, Point3};

const ITEMS_PER_ROW: usize = 4;
const GRID_SPACING_M: f64 = 1.5;

const DISPLAY_HEIGHT_M: f64 = 1.5;
const CAMERA_HEIGHT_M: f64 = 1.8;
const CEILING_HEIGHT_M: f64 = 2.7;
const RACK_HEIGHT_M: f64 = 1.0;
const TABLE_HEIGHT_M: f64 = 0.75;

/// Mount type and height for an item based on what it is
pub fn default_mount(item: &EquipmentItem) -> (MountType, f64) {
    let category = item.category();
    let roles = classify(category);

    if roles.display {
        (MountType::Wall, DISPLAY_HEIGHT_M)
    } else if category_mentions(category, Keyword::Camera) {
        (MountType::Wall, CAMERA_HEIGHT_M)
    } else if roles.speaker && !category_mentions(category, Keyword::Audio) {
        (MountType::Ceiling, CEILING_HEIGHT_M)
    } else if roles.switcher || roles.source || roles.speaker {
        (MountType::Rack, RACK_HEIGHT_M)
    } else {
        (MountType::Table, TABLE_HEIGHT_M)
    }
}

/// Lay items out four to a row, 1.5 m apart, in input order
pub fn auto_place<'a, I>(items: I) -> Vec<EquipmentPosition<'a>>
where
    I: IntoIterator<Item = &'a EquipmentItem>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let (mount_type, height) = default_mount(item);
            let column = (index % ITEMS_PER_ROW) as f64;
            let row = (index / ITEMS_PER_ROW) as f64;
            EquipmentPosition::new(
                item,
                Point3::new(column * GRID_SPACING_M, height, row * GRID_SPACING_M),
                mount_type,
            )
        })
        .collect()
}
