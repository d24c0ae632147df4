use crate::constants::SPIN_LEAD_IN_MS;
use crate::sequence::SequenceConfig;
use crate::wheel_geometry::{GeometryError, WheelConfig};

pub const GOLD: &str = "#FFD700";
pub const BLACK: &str = "#1A1A1A";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub fill: &'static str,
    pub text: &'static str,
}

const fn segment(label: &'static str, fill: &'static str, text: &'static str) -> Segment {
    Segment { label, fill, text }
}

/// A labelled wheel together with its rigged outcome. The target is chosen
/// here, at design time, and nothing at runtime can change it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPreset {
    pub name: &'static str,
    pub segments: &'static [Segment],
    pub target_segment_index: u32,
    pub min_full_rotations: u32,
    pub angular_offset_degrees: f64,
    pub spin_lead_in_ms: u32,
    /// Rotate labels along the radius instead of keeping them upright.
    pub radial_labels: bool,
    pub label_radius_ratio: f64,
}

impl WheelPreset {
    pub fn wheel_config(&self) -> Result<WheelConfig, GeometryError> {
        WheelConfig::new(
            self.segments.len() as u32,
            self.target_segment_index,
            self.min_full_rotations,
            self.angular_offset_degrees,
        )
    }

    pub fn sequence_config(&self) -> SequenceConfig {
        SequenceConfig {
            spin_lead_in_ms: self.spin_lead_in_ms,
            ..SequenceConfig::default()
        }
    }

    pub fn target_label(&self) -> &'static str {
        self.segments
            .get(self.target_segment_index as usize)
            .map(|s| s.label)
            .unwrap_or_default()
    }
}

static GOLD_SEGMENTS: [Segment; 10] = [
    segment("70%", BLACK, GOLD),
    segment("80%", GOLD, BLACK),
    segment("10%", BLACK, GOLD),
    segment("12%", GOLD, BLACK),
    segment("5%", BLACK, GOLD),
    segment("8%", GOLD, BLACK),
    segment("4%", BLACK, GOLD),
    segment("2%", GOLD, BLACK),
    segment("25%", BLACK, GOLD),
    segment("30%", GOLD, BLACK),
];

static SPECTRUM_SEGMENTS: [Segment; 10] = [
    segment("5%", "#ef4444", "#ffffff"),
    segment("10%", "#f97316", "#ffffff"),
    segment("15%", "#eab308", "#ffffff"),
    segment("20%", "#22c55e", "#ffffff"),
    segment("25%", "#06b6d4", "#ffffff"),
    segment("30%", "#3b82f6", "#ffffff"),
    segment("35%", "#8b5cf6", "#ffffff"),
    segment("40%", "#ec4899", "#ffffff"),
    segment("45%", "#f59e0b", "#ffffff"),
    segment("50%", "#10b981", "#ffffff"),
];

/// Alternating gold and black wheel; always stops on "70%".
pub static GOLD_WHEEL: WheelPreset = WheelPreset {
    name: "gold",
    segments: &GOLD_SEGMENTS,
    target_segment_index: 0,
    min_full_rotations: 6,
    angular_offset_degrees: 1.0,
    spin_lead_in_ms: SPIN_LEAD_IN_MS,
    radial_labels: false,
    label_radius_ratio: 0.7,
};

pub static SPECTRUM_WHEEL: WheelPreset = WheelPreset {
    name: "spectrum",
    segments: &SPECTRUM_SEGMENTS,
    target_segment_index: 9,
    min_full_rotations: 5,
    angular_offset_degrees: 0.0,
    spin_lead_in_ms: 500,
    radial_labels: true,
    label_radius_ratio: 0.85,
};

pub fn preset_by_name(name: &str) -> Option<&'static WheelPreset> {
    [&GOLD_WHEEL, &SPECTRUM_WHEEL].into_iter().find(|p| p.name == name)
}
