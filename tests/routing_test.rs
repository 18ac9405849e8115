//! End-to-end room planning scenarios

use av_cable_planner::planner::{SPEAKER_TERMINATION_FEE, VIDEO_TERMINATION_FEE};
use av_cable_planner::{
    calculate_cable_distance, calculate_room_cable_routes, calculate_total_cable_costs, determine_cable_type,
    CableType, ContentType, EquipmentItem, EquipmentPosition, MountType, Point3, Routing,
};

struct Room {
    items: Vec<(EquipmentItem, Point3, MountType)>,
}

impl Room {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn with(mut self, sku: &str, category: &str, at: (f64, f64, f64), mount: MountType) -> Self {
        self.items
            .push((EquipmentItem::new(sku, category), Point3::new(at.0, at.1, at.2), mount));
        self
    }

    fn positions(&self) -> Vec<EquipmentPosition<'_>> {
        self.items
            .iter()
            .map(|(item, point, mount)| EquipmentPosition::new(item, *point, *mount))
            .collect()
    }
}

fn boardroom() -> Room {
    Room::new()
        .with("PC-1", "Source PC", (0.0, 1.0, 0.0), MountType::Rack)
        .with("CAM-1", "Camera", (3.0, 1.8, 0.0), MountType::Wall)
        .with("MX-1", "Matrix Switcher", (0.0, 1.0, 1.0), MountType::Rack)
        .with("TV-1", "Display", (4.0, 1.5, 6.0), MountType::Wall)
        .with("TV-2", "Display", (8.0, 1.5, 6.0), MountType::Wall)
        .with("SPK-1", "Ceiling Speaker", (2.0, 2.7, 3.0), MountType::Ceiling)
}

#[test]
fn switched_room_routes_in_planning_order() {
    let room = boardroom();
    let positions = room.positions();
    let routes = calculate_room_cable_routes(&positions, "Boardroom", ContentType::Broadcast);

    let pairs: Vec<_> = routes
        .iter()
        .map(|r| (r.from.equipment.sku.as_str(), r.to.equipment.sku.as_str(), r.routing))
        .collect();
    assert_eq!(
        pairs,
        [
            ("PC-1", "MX-1", Routing::Wall),
            ("CAM-1", "MX-1", Routing::Wall),
            ("MX-1", "TV-1", Routing::Ceiling),
            ("MX-1", "TV-2", Routing::Ceiling),
            ("MX-1", "SPK-1", Routing::Ceiling),
        ]
    );
}

#[test]
fn switched_room_cables_and_costs() {
    let room = boardroom();
    let positions = room.positions();
    let routes = calculate_room_cable_routes(&positions, "Boardroom", ContentType::Broadcast);

    // only the sending side is checked for distribution gear
    assert_eq!(routes[0].cable_type, CableType::Cat6);
    assert_eq!(routes[1].cable_type, CableType::Cat6);
    // short ceiling runs carrying 4K60 4:4:4
    for route in &routes[2..4] {
        assert!(route.distance <= 15.0, "{}", route.distance);
        assert_eq!(route.cable_type, CableType::Hdmi21);
    }
    let speaker = &routes[4];
    assert_eq!(speaker.cable_type, CableType::Speaker16Awg);

    for route in &routes[..4] {
        let expected = route.distance * route.cable_type.spec().cost_per_meter + VIDEO_TERMINATION_FEE;
        assert_eq!(route.estimated_cost, expected);
    }
    assert_eq!(
        speaker.estimated_cost,
        speaker.distance * CableType::Speaker16Awg.spec().cost_per_meter + SPEAKER_TERMINATION_FEE
    );
}

#[test]
fn every_switcher_feeds_every_display_but_only_the_first_takes_sources() {
    let room = Room::new()
        .with("PL-1", "Media Player", (0.0, 1.0, 0.0), MountType::Rack)
        .with("MX-A", "Matrix", (0.0, 1.0, 0.5), MountType::Rack)
        .with("MX-B", "Presentation Switcher", (10.0, 1.0, 10.0), MountType::Rack)
        .with("TV-1", "Display", (5.0, 1.5, 8.0), MountType::Wall);
    let positions = room.positions();
    let routes = calculate_room_cable_routes(&positions, "Training Room", ContentType::Training);

    let pairs: Vec<_> = routes
        .iter()
        .map(|r| (r.from.equipment.sku.as_str(), r.to.equipment.sku.as_str()))
        .collect();
    assert_eq!(pairs, [("PL-1", "MX-A"), ("MX-A", "TV-1"), ("MX-B", "TV-1")]);
}

#[test]
fn direct_room_cross_connects_sources_and_displays() {
    let room = Room::new()
        .with("PL-1", "Media Player", (0.0, 0.75, 0.0), MountType::Table)
        .with("PL-2", "Signage Player", (1.0, 0.75, 0.0), MountType::Table)
        .with("PJ-1", "Projector", (3.0, 2.7, 4.0), MountType::Ceiling)
        .with("TV-1", "Display", (0.0, 1.5, 30.0), MountType::Wall)
        .with("SPK-1", "Speaker", (2.0, 2.7, 2.0), MountType::Ceiling);
    let positions = room.positions();
    let routes = calculate_room_cable_routes(&positions, "Lobby", ContentType::DigitalSignage);

    // 2 sources x 2 displays + 1 speaker fed from the first source
    assert_eq!(routes.len(), 5);
    assert!(routes[..4].iter().all(|r| r.routing == Routing::Wall));
    assert_eq!(routes[4].from.equipment.sku, "PL-1");

    // projector is a display role but not a display keyword for cable choice
    let to_projector = &routes[0];
    assert_eq!(to_projector.to.equipment.sku, "PJ-1");
    assert_eq!(to_projector.cable_type, CableType::Cat6);

    // 30 m wall run to the far display goes over HDBaseT
    let to_far_display = &routes[1];
    assert_eq!(to_far_display.to.equipment.sku, "TV-1");
    assert!(to_far_display.distance > 15.0);
    assert_eq!(to_far_display.cable_type, CableType::HdBaseT);
}

#[test]
fn room_without_sources_is_empty() {
    let room = Room::new()
        .with("MX-1", "Matrix Switcher", (0.0, 1.0, 0.0), MountType::Rack)
        .with("TV-1", "Display", (4.0, 1.5, 0.0), MountType::Wall)
        .with("SPK-1", "Speaker", (2.0, 2.7, 2.0), MountType::Ceiling);
    let positions = room.positions();
    assert!(calculate_room_cable_routes(&positions, "Boardroom", ContentType::Presentation).is_empty());
}

#[test]
fn totals_match_route_sum() {
    let room = boardroom();
    let positions = room.positions();
    let routes = calculate_room_cable_routes(&positions, "Boardroom", ContentType::Presentation);
    let summary = calculate_total_cable_costs(&routes);

    let cost: f64 = routes.iter().map(|r| r.estimated_cost).sum();
    let distance: f64 = routes.iter().map(|r| r.distance).sum();
    assert!(summary.total_cost >= cost - 1e-6 && summary.total_cost - cost < 0.1 + 1e-6);
    assert!(summary.total_distance >= distance - 1e-6 && summary.total_distance - distance < 1.0 + 1e-6);
    assert_eq!(summary.route_count(), routes.len());
}

#[test]
fn documented_examples() {
    let origin = Point3::new(0.0, 0.0, 0.0);
    let ten_m = Point3::new(10.0, 0.0, 0.0);
    assert_eq!(calculate_cable_distance(origin, ten_m, Routing::Direct), 11.5);

    let camera = EquipmentItem::new("CAM", "Camera");
    let display = EquipmentItem::new("TV", "Display");
    let speaker = EquipmentItem::new("SPK", "Speaker");
    let amp = EquipmentItem::new("AMP", "Amplifier");
    let at = |item| EquipmentPosition::new(item, origin, MountType::Rack);

    assert_eq!(determine_cable_type(&at(&camera), &at(&display), 50.0, None), CableType::HdBaseT);
    assert_eq!(determine_cable_type(&at(&speaker), &at(&amp), 40.0, None), CableType::Speaker14Awg);
}
