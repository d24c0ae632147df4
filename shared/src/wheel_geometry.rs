use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::fmt;
use crate::constants::FULL_TURN_DEGREES;

/// Reasons a wheel configuration cannot guarantee its landing segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    TooFewSegments(u32),
    TargetOutOfRange { index: u32, segment_count: u32 },
    NoRotations,
    OffsetOutOfRange(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewSegments(count) => {
                write!(f, "wheel needs at least 2 segments, got {}", count)
            }
            GeometryError::TargetOutOfRange { index, segment_count } => {
                write!(f, "target segment {} is outside a {}-segment wheel", index, segment_count)
            }
            GeometryError::NoRotations => write!(f, "wheel must turn at least one full rotation"),
            GeometryError::OffsetOutOfRange(offset) => {
                write!(f, "angular offset {} would move the pointer off the target segment", offset)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Immutable input for one spin. Fields are private so a constructed
/// config always satisfies the landing guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    segment_count: u32,
    target_segment_index: u32,
    min_full_rotations: u32,
    angular_offset_degrees: f64,
}

impl WheelConfig {
    pub fn new(
        segment_count: u32,
        target_segment_index: u32,
        min_full_rotations: u32,
        angular_offset_degrees: f64,
    ) -> Result<Self, GeometryError> {
        if segment_count < 2 {
            return Err(GeometryError::TooFewSegments(segment_count));
        }
        if target_segment_index >= segment_count {
            return Err(GeometryError::TargetOutOfRange {
                index: target_segment_index,
                segment_count,
            });
        }
        if min_full_rotations == 0 {
            return Err(GeometryError::NoRotations);
        }
        let half_segment = segment_angle(segment_count) / 2.0;
        if !angular_offset_degrees.is_finite() || angular_offset_degrees.abs() >= half_segment {
            return Err(GeometryError::OffsetOutOfRange(angular_offset_degrees));
        }

        Ok(Self {
            segment_count,
            target_segment_index,
            min_full_rotations,
            angular_offset_degrees,
        })
    }

    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    pub fn target_segment_index(&self) -> u32 {
        self.target_segment_index
    }

    pub fn min_full_rotations(&self) -> u32 {
        self.min_full_rotations
    }

    pub fn angular_offset_degrees(&self) -> f64 {
        self.angular_offset_degrees
    }

    pub fn segment_angle(&self) -> f64 {
        segment_angle(self.segment_count)
    }
}

/// Rotation handed to the animation layer. Created once per spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub final_rotation_degrees: f64,
}

impl SpinResult {
    /// Resting angle of the wheel once the visible spins are stripped.
    pub fn landing_degrees(&self) -> f64 {
        self.final_rotation_degrees.rem_euclid(FULL_TURN_DEGREES)
    }
}

pub fn segment_angle(segment_count: u32) -> f64 {
    FULL_TURN_DEGREES / segment_count as f64
}

/// Clockwise rotation that parks the target segment's centre (nudged by the
/// angular offset) under the pointer at the top of the wheel.
pub fn compute_final_rotation(config: &WheelConfig) -> SpinResult {
    let segment_angle = config.segment_angle();
    let full_turns = config.min_full_rotations as f64 * FULL_TURN_DEGREES;
    let target_angle = config.target_segment_index as f64 * segment_angle;
    let offset = segment_angle / 2.0 - config.angular_offset_degrees;

    SpinResult {
        final_rotation_degrees: full_turns + (FULL_TURN_DEGREES - target_angle) - offset,
    }
}

/// Index of the segment under the top pointer after rotating the wheel
/// clockwise by `rotation_degrees` from rest.
pub fn landed_segment(rotation_degrees: f64, segment_count: u32) -> u32 {
    let pointer = (-rotation_degrees).rem_euclid(FULL_TURN_DEGREES);
    let index = (pointer / segment_angle(segment_count)).floor() as u32;
    index.min(segment_count.saturating_sub(1))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Projects a wheel angle (0 at the top, clockwise) onto the circle.
pub fn polar(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = to_canvas_radians(degrees);
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// Canvas and SVG measure from the positive x axis; the wheel measures from the top.
pub fn to_canvas_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentArc {
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub end: Point,
}

impl SegmentArc {
    pub fn svg_path(&self) -> String {
        format!(
            "M{},{} L{},{} A{},{} 0 0,1 {},{} Z",
            self.center.x, self.center.y,
            self.start.x, self.start.y,
            self.radius, self.radius,
            self.end.x, self.end.y,
        )
    }

    pub fn start_radians(&self) -> f64 {
        to_canvas_radians(self.start_degrees)
    }

    pub fn end_radians(&self) -> f64 {
        to_canvas_radians(self.end_degrees)
    }
}

pub fn segment_arc(index: u32, segment_count: u32, center: Point, radius: f64) -> SegmentArc {
    let angle = segment_angle(segment_count);
    let start_degrees = index as f64 * angle;
    let end_degrees = (index + 1) as f64 * angle;

    SegmentArc {
        start_degrees,
        end_degrees,
        center,
        radius,
        start: polar(center, radius, start_degrees),
        end: polar(center, radius, end_degrees),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub position: Point,
    /// Angle of the segment centre; radial labels rotate by this much.
    pub rotation_degrees: f64,
}

pub fn label_anchor(index: u32, segment_count: u32, center: Point, radius: f64) -> LabelAnchor {
    let angle = segment_angle(segment_count);
    let mid = index as f64 * angle + angle / 2.0;
    LabelAnchor {
        position: polar(center, radius, mid),
        rotation_degrees: mid,
    }
}

/// Rim triangle pointing outward at a segment's centre.
pub fn tick_marker(
    index: u32,
    segment_count: u32,
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    half_width_degrees: f64,
) -> [Point; 3] {
    let angle = segment_angle(segment_count);
    let mid = index as f64 * angle + angle / 2.0;
    [
        polar(center, outer_radius, mid),
        polar(center, inner_radius, mid - half_width_degrees),
        polar(center, inner_radius, mid + half_width_degrees),
    ]
}

// Modified ease-out: 1 - (1-t)^4
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Rotation at `elapsed_ms` into an eased spin from `from` to `to`.
pub fn animated_rotation(from: f64, to: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return to;
    }
    from + (to - from) * ease_out_quart(elapsed_ms / duration_ms)
}
