//! AV Cable Planner
//!
//! Cable routing and cost estimates for AV room designs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use av_cable_planner::cable_specs::{get_cable_specs, get_cable_specs_by_name, CableType};
use av_cable_planner::config::{CliConfigOverrides, LayeredConfig};
use av_cable_planner::costs::{
    calculate_total_cable_costs, compare_technology_costs, format_comparison, format_routes, CostSummary,
};
use av_cable_planner::distance::{calculate_cable_distance, straight_line_distance};
use av_cable_planner::layout::{find_layout_files, load_layout, sample_layout, RoomLayout};
use av_cable_planner::models::{CableRoute, ContentType, Point3, Routing, Scenario};
use av_cable_planner::planner::calculate_room_cable_routes_with;
use av_cable_planner::requirements::analyze_technology_requirements;

#[derive(Parser)]
#[command(name = "av-cable-planner")]
#[command(about = "Cable routing and cost estimates for AV room designs")]
#[command(version)]
struct Cli {
    /// TOML file with planner defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan every cable run in a room layout
    Plan {
        /// Room layout JSON file
        layout: PathBuf,

        /// Room type, overriding the layout's
        #[arg(long)]
        room_type: Option<String>,

        /// Content type, overriding the layout's
        #[arg(long, value_enum)]
        content: Option<ContentType>,

        /// Display size (inches) used for the requirement analysis
        #[arg(long)]
        display_size: Option<f64>,

        /// Viewing distance (m) used for the requirement analysis
        #[arg(long)]
        viewing_distance: Option<f64>,

        /// List every route
        #[arg(short, long)]
        verbose: bool,
    },

    /// Plan every layout under a directory
    Batch {
        /// Directory searched recursively for *.json layouts
        dir: PathBuf,
    },

    /// Cable length between two points
    Distance {
        /// Start point as x,y,z in meters
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point3,

        /// End point as x,y,z in meters
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point3,

        #[arg(short, long, value_enum, default_value = "direct")]
        routing: Routing,
    },

    /// Video format and cables a room needs
    Analyze {
        #[arg(long, default_value = "Conference Room")]
        room_type: String,

        /// Inches
        #[arg(long, default_value = "75")]
        display_size: f64,

        /// Meters
        #[arg(long, default_value = "4")]
        viewing_distance: f64,

        #[arg(long, value_enum)]
        content: ContentType,
    },

    /// Compare technology scenarios for one run length
    Compare {
        /// Run length in meters
        #[arg(short, long)]
        distance: f64,

        /// JSON array of {name, requirement}; defaults to one scenario per content type
        #[arg(long)]
        scenarios: Option<PathBuf>,
    },

    /// List the cable specification table
    Specs {
        /// Show a single cable by catalog name, e.g. "HDBaseT"
        cable: Option<String>,
    },

    /// Print a sample room layout
    Sample,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Plan {
            layout,
            room_type,
            content,
            display_size,
            viewing_distance,
            verbose,
        } => {
            config.update_from_cli(CliConfigOverrides {
                display_size,
                viewing_distance,
                room_type: None,
                content_type: None,
            })?;
            let room = load_layout(&layout)
                .with_context(|| format!("Failed to load layout {}", layout.display()))?;
            let room_type = room_type
                .or_else(|| room.room_type.clone())
                .unwrap_or_else(|| config.room_type.value.clone());
            let content_type = content.or(room.content_type).unwrap_or(config.content_type.value);

            let positions = room.positions();
            let routes = calculate_room_cable_routes_with(&positions, &room_type, content_type, &config.planner());
            let summary = calculate_total_cable_costs(&routes);
            let name = room.display_name(&room_type);

            if cli.json {
                let report = PlanReport {
                    room: name,
                    room_type: &room_type,
                    content_type,
                    routes: &routes,
                    summary: &summary,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} ({}, {})\n", name, room_type, content_type);
                if routes.is_empty() {
                    println!("No routes: the room needs at least one source and one display.");
                } else {
                    if verbose {
                        println!("Routes:\n{}", format_routes(&routes));
                    }
                    println!("{}", summary);
                }
            }
        }

        Commands::Batch { dir } => {
            let files = find_layout_files(&dir)?;
            if files.is_empty() {
                println!("No layouts found under {}", dir.display());
                return Ok(());
            }

            let mut rooms = Vec::new();
            let mut grand_total = CostSummary::default();
            for path in &files {
                let room = load_layout(path).with_context(|| format!("Failed to load layout {}", path.display()))?;
                let summary = plan_room(&room, &config);
                grand_total.absorb(&summary);
                rooms.push(BatchRoom {
                    file: path.clone(),
                    room: room.display_name(&file_stem(path)).to_string(),
                    summary,
                });
            }

            if cli.json {
                let report = BatchReport {
                    rooms: &rooms,
                    total: &grand_total,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{:<32} {:>6} {:>10} {:>12}", "Room", "Runs", "Length (m)", "Cost (USD)");
                println!("{}", "-".repeat(63));
                for r in &rooms {
                    println!(
                        "{:<32} {:>6} {:>10.0} {:>12.2}",
                        r.room,
                        r.summary.route_count(),
                        r.summary.total_distance,
                        r.summary.total_cost
                    );
                }
                println!();
                println!("{}", grand_total);
            }
        }

        Commands::Distance { from, to, routing } => {
            let straight = straight_line_distance(from, to);
            let cable = calculate_cable_distance(from, to, routing);
            if cli.json {
                let report = DistanceReport {
                    straight_line: straight,
                    routing,
                    slack_multiplier: routing.slack_multiplier(),
                    cable_length: cable,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Straight line: {:.2} m", straight);
                println!("Cable ({}, x{:.2}): {:.1} m", routing, routing.slack_multiplier(), cable);
            }
        }

        Commands::Analyze {
            room_type,
            display_size,
            viewing_distance,
            content,
        } => {
            let req = analyze_technology_requirements(&room_type, display_size, viewing_distance, content);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&req)?);
            } else {
                println!("Resolution:     {}", req.resolution);
                println!("Refresh rate:   {}", req.refresh_rate);
                println!("Chroma:         {}", req.color_subsampling);
                println!("HDR:            {}", if req.hdr { "yes" } else { "no" });
                let cables: Vec<_> = req.recommended_cables.iter().map(|c| c.name()).collect();
                println!("Cables:         {}", cables.join(", "));
                println!("Max distance:   {:.0} m", req.max_distance);
                println!("\n{}", req.notes);
            }
        }

        Commands::Compare { distance, scenarios } => {
            let scenarios = match scenarios {
                Some(path) => read_scenarios(&path)?,
                None => default_scenarios(&config),
            };
            let results = compare_technology_costs(distance, &scenarios)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", format_comparison(distance, &results));
            }
        }

        Commands::Specs { cable: Some(name) } => {
            let spec = get_cable_specs_by_name(&name)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(spec)?);
            } else {
                println!("{}", name);
                println!("Max distance:   {:.0} m", spec.max_distance);
                println!("Cost:           ${:.2}/m", spec.cost_per_meter);
                println!("Bandwidth:      {}", spec.bandwidth);
                println!("Notes:          {}", spec.notes);
            }
        }

        Commands::Specs { cable: None } => {
            if cli.json {
                let table: Vec<_> = CableType::ALL
                    .iter()
                    .map(|&cable| SpecRow {
                        cable_type: cable,
                        spec: get_cable_specs(cable),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!(
                    "{:<18} {:>10} {:>8}  {:<32} {}",
                    "Cable", "Max (m)", "$/m", "Bandwidth", "Notes"
                );
                println!("{}", "-".repeat(100));
                for cable in CableType::ALL {
                    let spec = get_cable_specs(cable);
                    println!(
                        "{:<18} {:>10.0} {:>8.2}  {:<32} {}",
                        cable.name(),
                        spec.max_distance,
                        spec.cost_per_meter,
                        spec.bandwidth,
                        spec.notes
                    );
                }
            }
        }

        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&sample_layout())?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = path {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
    }
    Ok(config.load_from_env())
}

fn plan_room(room: &RoomLayout, config: &LayeredConfig) -> CostSummary {
    let room_type = room.room_type.as_deref().unwrap_or(&config.room_type.value);
    let content_type = room.content_type.unwrap_or(config.content_type.value);
    let positions = room.positions();
    let routes = calculate_room_cable_routes_with(&positions, room_type, content_type, &config.planner());
    calculate_total_cable_costs(&routes)
}

/// One scenario per content type, analyzed with the configured display
fn default_scenarios(config: &LayeredConfig) -> Vec<Scenario> {
    ContentType::ALL
        .into_iter()
        .map(|content_type| Scenario {
            name: content_type.to_string(),
            requirement: analyze_technology_requirements(
                &config.room_type.value,
                config.display_size.value,
                config.viewing_distance.value,
                content_type,
            ),
        })
        .collect()
}

fn read_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid scenarios file {}", path.display()))
}

fn parse_point(s: &str) -> Result<Point3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{}': {}", s, e))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got '{}'", s)),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Serialize)]
struct PlanReport<'r> {
    room: &'r str,
    room_type: &'r str,
    content_type: ContentType,
    routes: &'r [CableRoute<'r>],
    summary: &'r CostSummary,
}

#[derive(Serialize)]
struct BatchRoom {
    file: PathBuf,
    room: String,
    summary: CostSummary,
}

#[derive(Serialize)]
struct BatchReport<'r> {
    rooms: &'r [BatchRoom],
    total: &'r CostSummary,
}

#[derive(Serialize)]
struct DistanceReport {
    straight_line: f64,
    routing: Routing,
    slack_multiplier: f64,
    cable_length: f64,
}

#[derive(Serialize)]
struct SpecRow {
    cable_type: CableType,
    #[serde(flatten)]
    spec: &'static av_cable_planner::cable_specs::CableSpec,
}
