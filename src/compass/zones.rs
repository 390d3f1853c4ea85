//! Directional zone partitions of the compass circle.
//!
//! A zone is a half-open angular interval `[start, end)`; the N zones of a
//! partition are contiguous and exhaustive over `[0, 360)`. Zone 0 always
//! starts at north.

use crate::compass::Heading;
use crate::constants::FULL_CIRCLE_DEGREES;

/// 16-way label table: the standard 16-point cardinal abbreviations.
const LABELS_16: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 32-way label table: the traditional 32-point compass rose ("by" points
/// abbreviated with a lowercase b).
const LABELS_32: [&str; 32] = [
    "N", "NbE", "NNE", "NEbN", "NE", "NEbE", "ENE", "EbN", "E", "EbS", "ESE", "SEbE", "SE", "SEbS",
    "SSE", "SbE", "S", "SbW", "SSW", "SWbS", "SW", "SWbW", "WSW", "WbS", "W", "WbN", "WNW", "NWbW",
    "NW", "NWbN", "NNW", "NbW",
];

/// Deity names of the 16-petal Vastu chakra, starting at north and
/// proceeding clockwise. Decorative ring labels for the Chakra face.
pub const CHAKRA_DEITIES: [&str; 16] = [
    "Agni", "Indra", "Vayu", "Kubera", "Ishanya", "Jalad", "Varuna", "Pitra", "Nairitya", "Yama",
    "Naga", "Apavatsa", "Pusha", "Brahma", "Rudra", "Surya",
];

/// Partition granularity of the compass circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneCount {
    Sixteen,
    ThirtyTwo,
}

impl ZoneCount {
    /// Number of zones in the partition
    pub fn count(self) -> usize {
        match self {
            ZoneCount::Sixteen => 16,
            ZoneCount::ThirtyTwo => 32,
        }
    }

    /// Angular width of each zone in degrees
    pub fn width_degrees(self) -> f32 {
        FULL_CIRCLE_DEGREES / self.count() as f32
    }

    /// Fixed ordered label table, exactly `count()` entries
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ZoneCount::Sixteen => &LABELS_16,
            ZoneCount::ThirtyTwo => &LABELS_32,
        }
    }
}

/// One zone of a partition: a half-open interval `[start, end)` with its
/// display label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub index: usize,
    pub start_degrees: f32,
    pub end_degrees: f32,
    pub label: &'static str,
}

/// Classification result for a known heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveZone {
    /// Zone index in `[0, count-1]`
    pub index: usize,
    /// Display label from the partition's table
    pub label: &'static str,
}

/// All zones of a partition, in index order.
///
/// The returned intervals are contiguous and exhaustive: zone `i` ends
/// exactly where zone `i + 1` starts, and the last zone ends at 360.
pub fn zones(count: ZoneCount) -> Vec<Zone> {
    let width = count.width_degrees();
    let labels = count.labels();
    (0..count.count())
        .map(|i| Zone {
            index: i,
            start_degrees: i as f32 * width,
            end_degrees: (i + 1) as f32 * width,
            label: labels[i],
        })
        .collect()
}

/// Classify a heading into its zone.
///
/// Returns `None` for an unknown heading (no zone active). A heading
/// exactly on a zone's start angle belongs to that zone, never the
/// preceding one. The index is clamped into `[0, count-1]` to guard the
/// floating-point edge where a heading lands numerically at 360.
pub fn classify(heading: Heading, count: ZoneCount) -> Option<ActiveZone> {
    let degrees = heading.degrees()?;
    let width = count.width_degrees();
    let index = ((degrees / width).floor() as usize).min(count.count() - 1);
    Some(ActiveZone {
        index,
        label: count.labels()[index],
    })
}
