//! Picks a cable type for one run between two pieces of equipment

use crate::cable_specs::CableType;
use crate::classify::{category_mentions, Keyword};
use crate::models::{ColorSubsampling, EquipmentPosition, RefreshRate, Resolution, TechnologyRequirement};

/// Runs longer than this leave copper behind
const FIBER_THRESHOLD_M: f64 = 100.0;
/// Longest HDMI run before switching to HDBaseT extenders
const HDMI_THRESHOLD_M: f64 = 15.0;
const HEAVY_SPEAKER_THRESHOLD_M: f64 = 30.0;
const USB_CAMERA_THRESHOLD_M: f64 = 5.0;

/// Choose the best-fit cable for a run.
///
/// Rules are checked in order and the first match wins, so an item tagged
/// both "speaker" and "display" is wired as a speaker. Every input yields a
/// cable; anything unrecognised gets `Cat6`.
pub fn determine_cable_type(
    from: &EquipmentPosition<'_>,
    to: &EquipmentPosition<'_>,
    distance: f64,
    requirement: Option<&TechnologyRequirement>,
) -> CableType {
    let (from_cat, to_cat) = (from.category(), to.category());
    let either = |kw: Keyword| category_mentions(from_cat, kw) || category_mentions(to_cat, kw);

    if either(Keyword::Speaker) {
        return if distance > HEAVY_SPEAKER_THRESHOLD_M {
            CableType::Speaker14Awg
        } else {
            CableType::Speaker16Awg
        };
    }

    if either(Keyword::Audio) {
        return CableType::Xlr;
    }

    if either(Keyword::Display) {
        return display_cable(distance, requirement);
    }

    if category_mentions(from_cat, Keyword::Distribution) {
        return if distance > FIBER_THRESHOLD_M {
            CableType::FiberOm3
        } else {
            CableType::Cat6a
        };
    }

    if category_mentions(from_cat, Keyword::Camera) && category_mentions(to_cat, Keyword::Codec) {
        return if distance > USB_CAMERA_THRESHOLD_M {
            CableType::Cat6a
        } else {
            CableType::Usb30
        };
    }

    CableType::Cat6
}

fn display_cable(distance: f64, requirement: Option<&TechnologyRequirement>) -> CableType {
    if distance > FIBER_THRESHOLD_M {
        let is_8k = requirement.is_some_and(|req| req.resolution == Resolution::Uhd8k);
        return if is_8k {
            CableType::FiberOm4
        } else {
            CableType::FiberOm3
        };
    }

    if distance > HDMI_THRESHOLD_M {
        return CableType::HdBaseT;
    }

    if requirement.is_some_and(needs_hdmi_21) {
        CableType::Hdmi21
    } else {
        CableType::Hdmi20
    }
}

/// Signal formats beyond the 18 Gbps of HDMI 2.0
fn needs_hdmi_21(req: &TechnologyRequirement) -> bool {
    match req.resolution {
        Resolution::Uhd8k => true,
        Resolution::Uhd4k => {
            req.refresh_rate >= RefreshRate::Hz120
                || (req.color_subsampling == ColorSubsampling::Yuv444
                    && req.refresh_rate == RefreshRate::Hz60)
        }
        Resolution::Fhd1080p => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EquipmentItem, MountType, Point3};

    fn at<'a>(item: &'a EquipmentItem) -> EquipmentPosition<'a> {
        EquipmentPosition::new(item, Point3::new(0.0, 0.0, 0.0), MountType::Rack)
    }

    fn requirement(res: Resolution, hz: RefreshRate, chroma: ColorSubsampling) -> TechnologyRequirement {
        TechnologyRequirement {
            resolution: res,
            refresh_rate: hz,
            color_subsampling: chroma,
            hdr: false,
            max_distance: 15.0,
            recommended_cables: vec![CableType::Hdmi20],
            notes: String::new(),
        }
    }

    #[test]
    fn camera_to_display_beyond_hdmi_reach_uses_hdbaset() {
        let camera = EquipmentItem::new("CAM-1", "Camera");
        let display = EquipmentItem::new("TV-1", "Display");
        let cable = determine_cable_type(&at(&camera), &at(&display), 50.0, None);
        assert_eq!(cable, CableType::HdBaseT);
    }

    #[test]
    fn long_speaker_runs_use_heavier_gauge() {
        let speaker = EquipmentItem::new("SPK-1", "Speaker");
        let amp = EquipmentItem::new("AMP-1", "Amplifier");
        assert_eq!(
            determine_cable_type(&at(&speaker), &at(&amp), 40.0, None),
            CableType::Speaker14Awg
        );
        assert_eq!(
            determine_cable_type(&at(&amp), &at(&speaker), 30.0, None),
            CableType::Speaker16Awg
        );
    }

    #[test]
    fn speaker_rule_beats_display_rule() {
        let soundbar = EquipmentItem::new("SB-1", "Display Speaker");
        let display = EquipmentItem::new("TV-1", "Display");
        assert_eq!(
            determine_cable_type(&at(&soundbar), &at(&display), 3.0, None),
            CableType::Speaker16Awg
        );
    }

    #[test]
    fn audio_gear_uses_xlr() {
        let mic = EquipmentItem::new("MIC-1", "Audio Microphone");
        let dsp = EquipmentItem::new("DSP-1", "DSP");
        assert_eq!(determine_cable_type(&at(&mic), &at(&dsp), 12.0, None), CableType::Xlr);
    }

    #[test]
    fn short_display_runs_follow_requirement() {
        let player = EquipmentItem::new("PL-1", "Media Player");
        let display = EquipmentItem::new("TV-1", "Monitor");
        let (from, to) = (at(&player), at(&display));

        assert_eq!(determine_cable_type(&from, &to, 5.0, None), CableType::Hdmi20);

        let cases = [
            (Resolution::Uhd8k, RefreshRate::Hz30, ColorSubsampling::Yuv420, CableType::Hdmi21),
            (Resolution::Uhd4k, RefreshRate::Hz120, ColorSubsampling::Yuv420, CableType::Hdmi21),
            (Resolution::Uhd4k, RefreshRate::Hz60, ColorSubsampling::Yuv444, CableType::Hdmi21),
            (Resolution::Uhd4k, RefreshRate::Hz30, ColorSubsampling::Yuv444, CableType::Hdmi20),
            (Resolution::Uhd4k, RefreshRate::Hz60, ColorSubsampling::Yuv422, CableType::Hdmi20),
            (Resolution::Fhd1080p, RefreshRate::Hz120, ColorSubsampling::Yuv444, CableType::Hdmi20),
        ];
        for (res, hz, chroma, expected) in cases {
            let req = requirement(res, hz, chroma);
            assert_eq!(
                determine_cable_type(&from, &to, 5.0, Some(&req)),
                expected,
                "{res} {hz} {chroma}"
            );
        }
    }

    #[test]
    fn very_long_display_runs_go_fiber() {
        let matrix = EquipmentItem::new("MX-1", "Matrix Switcher");
        let display = EquipmentItem::new("TV-1", "Display");
        let (from, to) = (at(&matrix), at(&display));
        let req_8k = requirement(Resolution::Uhd8k, RefreshRate::Hz60, ColorSubsampling::Yuv444);

        assert_eq!(determine_cable_type(&from, &to, 150.0, None), CableType::FiberOm3);
        assert_eq!(determine_cable_type(&from, &to, 150.0, Some(&req_8k)), CableType::FiberOm4);
    }

    #[test]
    fn distribution_gear_uses_cat6a_or_fiber() {
        let encoder = EquipmentItem::new("ENC-1", "Encoder");
        let rack = EquipmentItem::new("NET-1", "Network Switch");
        let (from, to) = (at(&encoder), at(&rack));
        assert_eq!(determine_cable_type(&from, &to, 40.0, None), CableType::Cat6a);
        assert_eq!(determine_cable_type(&from, &to, 120.0, None), CableType::FiberOm3);
        // only the sending side counts
        assert_eq!(determine_cable_type(&to, &from, 40.0, None), CableType::Cat6);
    }

    #[test]
    fn camera_to_codec_prefers_usb_when_short() {
        let camera = EquipmentItem::new("CAM-1", "PTZ Camera");
        let codec = EquipmentItem::new("VC-1", "Video Codec");
        let (from, to) = (at(&camera), at(&codec));
        assert_eq!(determine_cable_type(&from, &to, 4.0, None), CableType::Usb30);
        assert_eq!(determine_cable_type(&from, &to, 8.0, None), CableType::Cat6a);
    }

    #[test]
    fn unknown_and_missing_categories_default_to_cat6() {
        let mystery = EquipmentItem::new("X-1", "Thing");
        let blank = EquipmentItem {
            sku: "X-2".to_string(),
            name: None,
            category: None,
            quantity: 1,
        };
        assert_eq!(determine_cable_type(&at(&mystery), &at(&blank), 10.0, None), CableType::Cat6);
    }
}
