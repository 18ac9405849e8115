//! Target video quality for a room, derived from what it will be used for

use crate::cable_specs::{get_cable_specs, CableType};
use crate::models::{ColorSubsampling, ContentType, RefreshRate, Resolution, TechnologyRequirement};

/// Displays above this diagonal (inches) get 4K for conferencing
const LARGE_DISPLAY_INCHES: f64 = 65.0;

struct Format {
    resolution: Resolution,
    refresh_rate: RefreshRate,
    color_subsampling: ColorSubsampling,
    hdr: bool,
}

fn format_for(content_type: ContentType, display_size: f64) -> Format {
    use ColorSubsampling::*;

    let (resolution, refresh_rate, color_subsampling, hdr) = match content_type {
        ContentType::Presentation => (Resolution::Uhd4k, RefreshRate::Hz30, Yuv444, false),
        ContentType::VideoConference => {
            let resolution = if display_size > LARGE_DISPLAY_INCHES {
                Resolution::Uhd4k
            } else {
                Resolution::Fhd1080p
            };
            (resolution, RefreshRate::Hz30, Yuv420, false)
        }
        ContentType::DigitalSignage => (Resolution::Uhd4k, RefreshRate::Hz30, Yuv422, true),
        ContentType::Broadcast => (Resolution::Uhd4k, RefreshRate::Hz60, Yuv444, true),
        ContentType::Training => (Resolution::Uhd4k, RefreshRate::Hz30, Yuv444, false),
    };

    Format {
        resolution,
        refresh_rate,
        color_subsampling,
        hdr,
    }
}

/// Cables able to carry the format, most preferred first
pub fn recommended_cables_for(
    resolution: Resolution,
    refresh_rate: RefreshRate,
    color_subsampling: ColorSubsampling,
) -> Vec<CableType> {
    match (resolution, refresh_rate, color_subsampling) {
        (Resolution::Uhd8k, _, _) => vec![CableType::Hdmi21, CableType::FiberOm4],
        (Resolution::Uhd4k, RefreshRate::Hz60, ColorSubsampling::Yuv444) => {
            vec![CableType::Hdmi21, CableType::HdBaseT, CableType::DisplayPort14]
        }
        (Resolution::Uhd4k, RefreshRate::Hz30, ColorSubsampling::Yuv444) => {
            vec![CableType::Hdmi20, CableType::HdBaseT]
        }
        _ => vec![CableType::Hdmi20, CableType::HdBaseT],
    }
}

/// Longest rated run among the given cables, 0 for none
pub fn max_rated_distance(cables: &[CableType]) -> f64 {
    cables
        .iter()
        .map(|&cable| get_cable_specs(cable).max_distance)
        .fold(0.0, f64::max)
}

fn chroma_rationale(subsampling: ColorSubsampling) -> &'static str {
    match subsampling {
        ColorSubsampling::Yuv444 => "full 4:4:4 chroma keeps small text and spreadsheet detail crisp",
        ColorSubsampling::Yuv422 => "4:2:2 chroma holds colour edges on motion-heavy signage loops",
        ColorSubsampling::Yuv420 => "4:2:0 chroma is enough for camera feeds and far-end video",
    }
}

/// Work out the video format a room needs and the cables that can carry it.
pub fn analyze_technology_requirements(
    room_type: &str,
    display_size: f64,
    viewing_distance: f64,
    content_type: ContentType,
) -> TechnologyRequirement {
    let format = format_for(content_type, display_size);
    let recommended_cables =
        recommended_cables_for(format.resolution, format.refresh_rate, format.color_subsampling);
    let max_distance = max_rated_distance(&recommended_cables);

    let mut notes = format!(
        "{content_type} content in a {room_type} ({display_size}\" display viewed from {viewing_distance} m) \
         calls for {} at {}: {}.",
        format.resolution,
        format.refresh_rate,
        chroma_rationale(format.color_subsampling),
    );
    if format.hdr {
        notes.push_str(" HDR passthrough must be preserved end to end.");
    }

    TechnologyRequirement {
        resolution: format.resolution,
        refresh_rate: format.refresh_rate,
        color_subsampling: format.color_subsampling,
        hdr: format.hdr,
        max_distance,
        recommended_cables,
        notes,
    }
}
