//! Face rendering: one pure dispatch from `(Mode, Heading)` to a
//! renderer-agnostic `VisualDescriptor`.
//!
//! The descriptor is consumed both by the live presentation layer and by
//! the capture compositor. Keeping this function deterministic and
//! side-effect-free is what guarantees the captured overlay matches what
//! was on screen at the moment of capture.

use crate::compass::{CHAKRA_DEITIES, Heading, ZoneCount, cardinal_16, classify};
use crate::config::Mode;
use crate::constants::UNKNOWN_PLACEHOLDER;

/// One tick mark of a compass face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Offset from north in degrees, before face rotation
    pub angle_degrees: f32,
    /// Drawn heavier (active zone, or decorative cadence on the chakra face)
    pub emphasized: bool,
}

/// Renderer-agnostic description of a compass face for one (mode, heading)
/// pair.
///
/// An unknown heading never suppresses geometry: the face is produced
/// unrotated with neutral labeling so it remains visible before the first
/// valid reading arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualDescriptor {
    /// Face rotation in degrees (the heading, or 0 when unknown)
    pub rotation_degrees: f32,
    /// Tick marks in angle order; empty for the Normal face
    pub ticks: Vec<TickMark>,
    /// Needle angle; present only on the Normal face
    pub needle_degrees: Option<f32>,
    /// Decorative ring labels, evenly spaced clockwise from north;
    /// empty except on the Chakra face, where they are the 16 deity
    /// names of the Vastu chakra
    pub ring_labels: &'static [&'static str],
    /// Display string for the face footer
    pub caption: String,
}

/// Render a face descriptor. Pure: identical arguments always produce
/// structurally identical descriptors.
pub fn render(mode: Mode, heading: Heading) -> VisualDescriptor {
    match mode {
        Mode::Normal => render_normal(heading),
        Mode::Sixteen => render_zoned(heading, ZoneCount::Sixteen),
        Mode::ThirtyTwo => render_zoned(heading, ZoneCount::ThirtyTwo),
        Mode::Chakra => render_chakra(heading),
    }
}

fn render_normal(heading: Heading) -> VisualDescriptor {
    let caption = match heading.degrees() {
        Some(deg) => format!("{:.0}\u{b0} \u{2022} {}", deg, cardinal_16(deg)),
        None => UNKNOWN_PLACEHOLDER.to_string(),
    };
    VisualDescriptor {
        rotation_degrees: heading.rotation_degrees(),
        ticks: Vec::new(),
        needle_degrees: Some(heading.rotation_degrees()),
        ring_labels: &[],
        caption,
    }
}

fn render_zoned(heading: Heading, count: ZoneCount) -> VisualDescriptor {
    let active = classify(heading, count);
    let width = count.width_degrees();
    let ticks = (0..count.count())
        .map(|i| TickMark {
            angle_degrees: i as f32 * width,
            emphasized: active.is_some_and(|zone| zone.index == i),
        })
        .collect();

    let caption = match (heading.degrees(), active) {
        (Some(deg), Some(zone)) => match count {
            ZoneCount::Sixteen => format!("Zone {} \u{2022} {:.0}\u{b0}", zone.index + 1, deg),
            ZoneCount::ThirtyTwo => format!("{} \u{2022} {:.0}\u{b0}", zone.label, deg),
        },
        _ => UNKNOWN_PLACEHOLDER.to_string(),
    };

    VisualDescriptor {
        rotation_degrees: heading.rotation_degrees(),
        ticks,
        needle_degrees: None,
        ring_labels: &[],
        caption,
    }
}

fn render_chakra(heading: Heading) -> VisualDescriptor {
    let count = ZoneCount::ThirtyTwo;
    let width = count.width_degrees();
    // Decorative cadence: every fourth spoke is heavy, independent of the
    // heading, so the chakra face reads the same at any rotation.
    let ticks = (0..count.count())
        .map(|i| TickMark {
            angle_degrees: i as f32 * width,
            emphasized: i % 4 == 0,
        })
        .collect();

    VisualDescriptor {
        rotation_degrees: heading.rotation_degrees(),
        ticks,
        needle_degrees: None,
        ring_labels: &CHAKRA_DEITIES,
        caption: "Applied Vastu Chakra".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_render_is_pure() {
        for mode in [Mode::Normal, Mode::Sixteen, Mode::ThirtyTwo, Mode::Chakra] {
            for heading in [Heading::Known(123.4), Heading::Unknown] {
                assert_eq!(render(mode, heading), render(mode, heading));
            }
        }
    }

    #[test]
    fn test_normal_face() {
        let desc = render(Mode::Normal, Heading::Known(45.0));
        assert_abs_diff_eq!(desc.rotation_degrees, 45.0);
        assert_eq!(desc.needle_degrees, Some(45.0));
        assert!(desc.ticks.is_empty());
        assert_eq!(desc.caption, "45\u{b0} \u{2022} NE");
    }

    #[test]
    fn test_normal_face_unknown_heading() {
        let desc = render(Mode::Normal, Heading::Unknown);
        assert_abs_diff_eq!(desc.rotation_degrees, 0.0);
        assert_eq!(desc.needle_degrees, Some(0.0));
        assert_eq!(desc.caption, "\u{2014}");
    }

    #[test]
    fn test_sixteen_face_emphasizes_active_zone() {
        let desc = render(Mode::Sixteen, Heading::Known(50.0));
        assert_eq!(desc.ticks.len(), 16);
        // 50 / 22.5 floors to zone 2
        let emphasized: Vec<usize> = desc
            .ticks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.emphasized)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(emphasized, vec![2]);
        assert_eq!(desc.caption, "Zone 3 \u{2022} 50\u{b0}");
        assert_eq!(desc.needle_degrees, None);
    }

    #[test]
    fn test_thirty_two_face_uses_label_caption() {
        let desc = render(Mode::ThirtyTwo, Heading::Known(90.0));
        assert_eq!(desc.ticks.len(), 32);
        assert!(desc.ticks[8].emphasized);
        assert_eq!(desc.caption, "E \u{2022} 90\u{b0}");
    }

    #[test]
    fn test_zoned_faces_keep_geometry_when_unknown() {
        for mode in [Mode::Sixteen, Mode::ThirtyTwo] {
            let desc = render(mode, Heading::Unknown);
            assert!(!desc.ticks.is_empty());
            assert!(desc.ticks.iter().all(|t| !t.emphasized));
            assert_abs_diff_eq!(desc.rotation_degrees, 0.0);
            assert_eq!(desc.caption, "\u{2014}");
        }
    }

    #[test]
    fn test_chakra_face_is_decorative() {
        let with_heading = render(Mode::Chakra, Heading::Known(200.0));
        let without = render(Mode::Chakra, Heading::Unknown);

        assert_eq!(with_heading.caption, "Applied Vastu Chakra");
        assert_eq!(with_heading.caption, without.caption);
        assert_eq!(with_heading.ticks, without.ticks);
        assert_abs_diff_eq!(with_heading.rotation_degrees, 200.0);

        let heavy = with_heading.ticks.iter().filter(|t| t.emphasized).count();
        assert_eq!(heavy, 8);
    }

    #[test]
    fn test_chakra_face_carries_deity_ring() {
        let desc = render(Mode::Chakra, Heading::Known(10.0));
        assert_eq!(desc.ring_labels.len(), 16);
        assert_eq!(desc.ring_labels[0], "Agni");
        assert_eq!(desc.ring_labels[15], "Surya");
    }

    #[test]
    fn test_only_chakra_has_ring_labels() {
        for mode in [Mode::Normal, Mode::Sixteen, Mode::ThirtyTwo] {
            let desc = render(mode, Heading::Known(10.0));
            assert!(desc.ring_labels.is_empty(), "{:?} must not carry ring labels", mode);
        }
    }

    #[test]
    fn test_tick_spacing_is_even() {
        let desc = render(Mode::ThirtyTwo, Heading::Known(0.0));
        for (i, tick) in desc.ticks.iter().enumerate() {
            assert_abs_diff_eq!(tick.angle_degrees, i as f32 * 11.25);
        }
    }
}
