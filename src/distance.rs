//! Installed cable length between two points in a room

use crate::models::{Point3, Routing};

impl Routing {
    /// Allowance for slack, corners and terminations on top of the geometric length
    pub const fn slack_multiplier(self) -> f64 {
        match self {
            Routing::Direct => 1.15,
            Routing::Wall => 1.25,
            Routing::Ceiling => 1.30,
            Routing::Floor => 1.25,
            Routing::Conduit => 1.35,
        }
    }

    /// Wall and ceiling runs go up, across and back down instead of point to point
    pub const fn follows_surfaces(self) -> bool {
        matches!(self, Routing::Wall | Routing::Ceiling)
    }
}

pub fn straight_line_distance(from: Point3, to: Point3) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dz = to.z - from.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Horizontal run plus the full height difference
pub fn surface_distance(from: Point3, to: Point3) -> f64 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    (dx * dx + dz * dz).sqrt() + (to.y - from.y).abs()
}

/// Cable length to order for a run, in meters, rounded up to the next 0.1 m.
///
/// Never shorter than the straight line between the two points.
pub fn calculate_cable_distance(from: Point3, to: Point3, routing: Routing) -> f64 {
    let base = if routing.follows_surfaces() {
        surface_distance(from, to)
    } else {
        straight_line_distance(from, to)
    };

    ceil_to(base * routing.slack_multiplier(), 10.0)
}

/// Round up to `1/per_unit` steps, ignoring float noise below 1e-6 of a step
pub(crate) fn ceil_to(value: f64, per_unit: f64) -> f64 {
    let scaled = ((value * per_unit) * 1e6).round() / 1e6;
    scaled.ceil() / per_unit
}
