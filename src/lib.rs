//! AV cable planner
//!
//! Estimates cable runs for an AV room design: installed cable lengths
//! between positioned equipment, the cable type for each run, the video
//! format a room needs, and what it all costs.

pub mod cable_specs;
pub mod classify;
pub mod config;
pub mod costs;
pub mod distance;
pub mod error;
pub mod layout;
pub mod models;
pub mod placement;
pub mod planner;
pub mod requirements;
pub mod selector;

pub use cable_specs::{get_cable_specs, CableSpec, CableType};
pub use costs::{calculate_total_cable_costs, compare_technology_costs, CostSummary};
pub use distance::{calculate_cable_distance, straight_line_distance};
pub use error::{PlanError, Result};
pub use models::*;
pub use planner::{calculate_room_cable_routes, calculate_room_cable_routes_with};
pub use requirements::analyze_technology_requirements;
pub use selector::determine_cable_type;
