//! Room cable route planning
//!
//! Builds every cable run a room needs: sources into the switcher, the
//! switcher out to each display (or sources straight to displays when there
//! is no switcher), then one speaker run per speaker.

use tracing::debug;

use crate::classify::{classify, RoleSet};
use crate::config::PlannerConfig;
use crate::distance::calculate_cable_distance;
use crate::models::{CableRoute, ContentType, EquipmentPosition, Routing, TechnologyRequirement};
use crate::requirements::analyze_technology_requirements;
use crate::selector::determine_cable_type;

/// Fixed connector and labour cost per video or signal run, USD
pub const VIDEO_TERMINATION_FEE: f64 = 25.0;
/// Fixed connector and labour cost per speaker run, USD
pub const SPEAKER_TERMINATION_FEE: f64 = 15.0;

/// Positions sorted into role buckets; one position may sit in several
#[derive(Debug, Default)]
pub struct RoleBuckets<'p, 'a> {
    pub sources: Vec<&'p EquipmentPosition<'a>>,
    pub displays: Vec<&'p EquipmentPosition<'a>>,
    pub switchers: Vec<&'p EquipmentPosition<'a>>,
    pub speakers: Vec<&'p EquipmentPosition<'a>>,
}

impl<'p, 'a> RoleBuckets<'p, 'a> {
    pub fn from_positions(positions: &'p [EquipmentPosition<'a>]) -> Self {
        let mut buckets = Self::default();
        for position in positions {
            let RoleSet {
                source,
                display,
                switcher,
                speaker,
            } = classify(position.category());
            if source {
                buckets.sources.push(position);
            }
            if display {
                buckets.displays.push(position);
            }
            if switcher {
                buckets.switchers.push(position);
            }
            if speaker {
                buckets.speakers.push(position);
            }
        }
        buckets
    }
}

/// Plan all cable runs for a room using the standard 75" / 4 m analysis inputs
pub fn calculate_room_cable_routes<'p, 'a>(
    positions: &'p [EquipmentPosition<'a>],
    room_type: &str,
    content_type: ContentType,
) -> Vec<CableRoute<'p>>
where
    'a: 'p,
{
    calculate_room_cable_routes_with(positions, room_type, content_type, &PlannerConfig::default())
}

/// Plan all cable runs for a room.
///
/// Returns an empty list when the room has no source or no display.
pub fn calculate_room_cable_routes_with<'p, 'a>(
    positions: &'p [EquipmentPosition<'a>],
    room_type: &str,
    content_type: ContentType,
    config: &PlannerConfig,
) -> Vec<CableRoute<'p>>
where
    'a: 'p,
{
    let buckets = RoleBuckets::from_positions(positions);
    debug!(
        sources = buckets.sources.len(),
        displays = buckets.displays.len(),
        switchers = buckets.switchers.len(),
        speakers = buckets.speakers.len(),
        "classified room equipment"
    );

    if buckets.sources.is_empty() || buckets.displays.is_empty() {
        debug!("no source or no display, nothing to route");
        return Vec::new();
    }

    // Same inputs for every run in the room, not per display
    let requirement = analyze_technology_requirements(
        room_type,
        config.display_size,
        config.viewing_distance,
        content_type,
    );

    let mut routes = Vec::new();

    // TODO: route each source to its nearest switcher once multi-switcher rooms are priced that way
    if let Some(&switcher) = buckets.switchers.first() {
        for &source in &buckets.sources {
            routes.push(video_route(source, switcher, Routing::Wall, &requirement));
        }
        for &switcher in &buckets.switchers {
            for &display in &buckets.displays {
                routes.push(video_route(switcher, display, Routing::Ceiling, &requirement));
            }
        }
    } else {
        for &source in &buckets.sources {
            for &display in &buckets.displays {
                routes.push(video_route(source, display, Routing::Wall, &requirement));
            }
        }
    }

    let audio_origin = buckets
        .switchers
        .first()
        .or_else(|| buckets.sources.first())
        .copied();
    if let Some(origin) = audio_origin {
        for &speaker in &buckets.speakers {
            routes.push(speaker_route(origin, speaker));
        }
    }

    debug!(routes = routes.len(), "planned room cable routes");
    routes
}

fn video_route<'p>(
    from: &'p EquipmentPosition<'p>,
    to: &'p EquipmentPosition<'p>,
    routing: Routing,
    requirement: &TechnologyRequirement,
) -> CableRoute<'p> {
    let distance = calculate_cable_distance(from.point(), to.point(), routing);
    let cable_type = determine_cable_type(from, to, distance, Some(requirement));
    let estimated_cost = distance * cable_type.spec().cost_per_meter + VIDEO_TERMINATION_FEE;
    debug!(
        from = %from.equipment.sku,
        to = %to.equipment.sku,
        distance,
        cable = %cable_type,
        "video route"
    );

    CableRoute {
        from,
        to,
        distance,
        cable_type,
        estimated_cost,
        routing,
    }
}

fn speaker_route<'p>(from: &'p EquipmentPosition<'p>, to: &'p EquipmentPosition<'p>) -> CableRoute<'p> {
    let routing = Routing::Ceiling;
    let distance = calculate_cable_distance(from.point(), to.point(), routing);
    let cable_type = determine_cable_type(from, to, distance, None);
    let estimated_cost = distance * cable_type.spec().cost_per_meter + SPEAKER_TERMINATION_FEE;

    CableRoute {
        from,
        to,
        distance,
        cable_type,
        estimated_cost,
        routing,
    }
}
