//! Cable cost comparison and aggregation

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::cable_specs::{get_cable_specs, CableType};
use crate::distance::ceil_to;
use crate::error::{PlanError, Result};
use crate::models::{CableRoute, ComparisonResult, Scenario};
use crate::planner::VIDEO_TERMINATION_FEE;

/// Transmitter/receiver pair needed to stretch HDMI over HDBaseT, USD
pub const HDBASET_EXTENDER_COST: f64 = 250.0;
/// Fiber transceivers and media converters for very long runs, USD
pub const FIBER_CONVERTER_COST: f64 = 600.0;

const FIBER_THRESHOLD_M: f64 = 100.0;

/// Price every scenario for a run of `distance` meters.
///
/// Each scenario is priced on its first recommended cable. When the run is
/// longer than that cable is rated for, HDMI is swapped for HDBaseT and
/// anything else beyond 100 m for OM3 fiber, with the extra hardware added.
/// Results keep the input order.
pub fn compare_technology_costs(distance: f64, scenarios: &[Scenario]) -> Result<Vec<ComparisonResult>> {
    scenarios
        .iter()
        .map(|scenario| price_scenario(distance, scenario))
        .collect()
}

fn price_scenario(distance: f64, scenario: &Scenario) -> Result<ComparisonResult> {
    let req = &scenario.requirement;
    let preferred = *req
        .recommended_cables
        .first()
        .ok_or_else(|| PlanError::NoRecommendedCable {
            scenario: scenario.name.clone(),
        })?;

    let (cable_type, hardware_surcharge) = if distance > get_cable_specs(preferred).max_distance {
        if preferred.is_hdmi() {
            (CableType::HdBaseT, HDBASET_EXTENDER_COST)
        } else if distance > FIBER_THRESHOLD_M {
            (CableType::FiberOm3, FIBER_CONVERTER_COST)
        } else {
            (preferred, 0.0)
        }
    } else {
        (preferred, 0.0)
    };

    let spec = get_cable_specs(cable_type);
    let exceeds_rating = distance > spec.max_distance;
    if cable_type != preferred {
        warn!(
            scenario = %scenario.name,
            from = %preferred,
            to = %cable_type,
            distance,
            "run exceeds preferred cable, substituting"
        );
    }
    if exceeds_rating {
        warn!(scenario = %scenario.name, cable = %cable_type, distance, "run exceeds rated distance");
    }

    Ok(ComparisonResult {
        scenario: scenario.name.clone(),
        preferred_cable: preferred,
        cable_type,
        hardware_surcharge,
        cost: distance * spec.cost_per_meter + VIDEO_TERMINATION_FEE + hardware_surcharge,
        exceeds_rating,
        resolution: req.resolution,
        refresh_rate: req.refresh_rate,
        hdr: req.hdr,
    })
}

/// Per-cable-type totals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CableTotals {
    pub distance: f64,
    pub cost: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostSummary {
    /// Meters, rounded up to a whole meter
    pub total_distance: f64,
    /// USD, rounded up to 0.1
    pub total_cost: f64,
    /// Only cable types that appear in the routes
    pub breakdown: BTreeMap<CableType, CableTotals>,
}

/// Sum the routes into totals and a per-cable breakdown
pub fn calculate_total_cable_costs(routes: &[CableRoute<'_>]) -> CostSummary {
    let mut breakdown: BTreeMap<CableType, CableTotals> = BTreeMap::new();
    let mut total_distance = 0.0;
    let mut total_cost = 0.0;

    for route in routes {
        let totals = breakdown.entry(route.cable_type).or_default();
        totals.distance += route.distance;
        totals.cost += route.estimated_cost;
        totals.count += 1;

        total_distance += route.distance;
        total_cost += route.estimated_cost;
    }

    CostSummary {
        total_distance: ceil_to(total_distance, 1.0),
        total_cost: ceil_to(total_cost, 10.0),
        breakdown,
    }
}

impl CostSummary {
    /// Merge another room's totals into this one
    pub fn absorb(&mut self, other: &CostSummary) {
        for (cable, totals) in &other.breakdown {
            let entry = self.breakdown.entry(*cable).or_default();
            entry.distance += totals.distance;
            entry.cost += totals.cost;
            entry.count += totals.count;
        }
        let distance: f64 = self.breakdown.values().map(|t| t.distance).sum();
        let cost: f64 = self.breakdown.values().map(|t| t.cost).sum();
        self.total_distance = ceil_to(distance, 1.0);
        self.total_cost = ceil_to(cost, 10.0);
    }

    pub fn route_count(&self) -> usize {
        self.breakdown.values().map(|t| t.count).sum()
    }
}

impl fmt::Display for CostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Cable Summary ===")?;
        writeln!(
            f,
            "{:<18} {:>6} {:>10} {:>12}",
            "Cable", "Runs", "Length (m)", "Cost (USD)"
        )?;
        writeln!(f, "{}", "-".repeat(49))?;
        for (cable, totals) in &self.breakdown {
            writeln!(
                f,
                "{:<18} {:>6} {:>10.1} {:>12.2}",
                cable.name(),
                totals.count,
                totals.distance,
                totals.cost
            )?;
        }
        writeln!(f, "{}", "-".repeat(49))?;
        writeln!(
            f,
            "{:<18} {:>6} {:>10.0} {:>12.2}",
            "Total",
            self.route_count(),
            self.total_distance,
            self.total_cost
        )?;
        Ok(())
    }
}

/// One line per route, in planning order
pub fn format_routes(routes: &[CableRoute<'_>]) -> String {
    let mut output = String::new();
    for route in routes {
        output.push_str(&format!(
            "{} -> {} ({}, {:.1} m) {} ${:.2}\n",
            route.from.equipment.label(),
            route.to.equipment.label(),
            route.routing,
            route.distance,
            route.cable_type,
            route.estimated_cost
        ));
    }
    output
}

/// Comparison results as an aligned table
pub fn format_comparison(distance: f64, results: &[ComparisonResult]) -> String {
    let mut output = format!("Cost comparison for a {:.1} m run\n", distance);
    output.push_str(&format!(
        "{:<20} {:<8} {:<16} {:>10} {:>10}\n",
        "Scenario", "Format", "Cable", "Hardware", "Cost"
    ));
    for r in results {
        let cable = if r.cable_type == r.preferred_cable {
            r.cable_type.to_string()
        } else {
            format!("{} (was {})", r.cable_type, r.preferred_cable)
        };
        let flag = if r.exceeds_rating { "  over rated length" } else { "" };
        output.push_str(&format!(
            "{:<20} {:<8} {:<16} {:>10.2} {:>10.2}{}\n",
            r.scenario,
            format!("{}{}", r.resolution, r.refresh_rate.hz()),
            cable,
            r.hardware_surcharge,
            r.cost,
            flag
        ));
    }
    output
}
