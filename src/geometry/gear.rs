//! Gear silhouette synthesis
//!
//! A gear is a closed tooth polygon, three concentric hub circles and a
//! handful of spokes, all laid out in a `size x size` viewbox centered on
//! `(size/2, size/2)`. Two tooth profiles share one code path, selected by
//! [`ToothProfile`].

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Point, Segment};
use crate::constants::gear::*;
use crate::error::{Error, Result};

/// Shape of each tooth in the outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToothProfile {
    /// Flat-topped teeth: two tip points and two root points per tooth
    #[default]
    Trapezoidal,
    /// Pointed teeth: one tip point and one root point per tooth
    ZigZag,
}

impl ToothProfile {
    pub fn points_per_tooth(self) -> usize {
        match self {
            ToothProfile::Trapezoidal => 4,
            ToothProfile::ZigZag => 2,
        }
    }
}

impl fmt::Display for ToothProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToothProfile::Trapezoidal => f.write_str("trapezoidal"),
            ToothProfile::ZigZag => f.write_str("zigzag"),
        }
    }
}

impl FromStr for ToothProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trapezoidal" | "trapezoid" => Ok(ToothProfile::Trapezoidal),
            "zigzag" | "zig-zag" => Ok(ToothProfile::ZigZag),
            other => Err(Error::invalid(
                "profile",
                format!("unknown tooth profile '{other}' (expected trapezoidal or zigzag)"),
            )),
        }
    }
}

/// Hub proportions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubVariant {
    /// Body at 0.42, hub at 0.30 of size
    #[default]
    Compact,
    /// Body at 0.50, hub at 0.35 of size
    Wide,
}

impl HubVariant {
    fn ratios(self) -> (f64, f64) {
        match self {
            HubVariant::Compact => (COMPACT_OUTER_RATIO, COMPACT_INNER_RATIO),
            HubVariant::Wide => (WIDE_OUTER_RATIO, WIDE_INNER_RATIO),
        }
    }
}

impl fmt::Display for HubVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubVariant::Compact => f.write_str("compact"),
            HubVariant::Wide => f.write_str("wide"),
        }
    }
}

impl FromStr for HubVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(HubVariant::Compact),
            "wide" => Ok(HubVariant::Wide),
            other => Err(Error::invalid(
                "hub",
                format!("unknown hub variant '{other}' (expected compact or wide)"),
            )),
        }
    }
}

/// Direction the presentation layer spins a gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Rotation::CounterClockwise
        } else {
            Rotation::Clockwise
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// Radii of the concentric hub circles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HubGeometry {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub hole_radius: f64,
}

/// Input parameters of a gear
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearSpec {
    pub size: f64,
    pub tooth_count: u32,
    /// Tooth depth relative to `size`, in (0, 1)
    pub tooth_depth_ratio: f64,
    /// Only changes the spin direction, never the static geometry
    pub reverse: bool,
    pub profile: ToothProfile,
    pub hub: HubVariant,
}

impl GearSpec {
    /// Decorative defaults: 16 trapezoidal teeth, compact hub
    pub fn new(size: f64) -> Self {
        Self {
            size,
            tooth_count: DEFAULT_TOOTH_COUNT,
            tooth_depth_ratio: DEFAULT_TOOTH_DEPTH_RATIO,
            reverse: false,
            profile: ToothProfile::default(),
            hub: HubVariant::default(),
        }
    }

    pub fn with_teeth(mut self, tooth_count: u32) -> Self {
        self.tooth_count = tooth_count;
        self
    }

    pub fn with_depth(mut self, tooth_depth_ratio: f64) -> Self {
        self.tooth_depth_ratio = tooth_depth_ratio;
        self
    }

    pub fn with_profile(mut self, profile: ToothProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_hub(mut self, hub: HubVariant) -> Self {
        self.hub = hub;
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    fn validate(&self) -> Result<()> {
        validate_size(self.size)?;
        if self.tooth_count < MIN_TOOTH_COUNT {
            return Err(Error::invalid(
                "tooth_count",
                format!("{} is below the minimum of {MIN_TOOTH_COUNT}", self.tooth_count),
            ));
        }
        let depth = self.tooth_depth_ratio;
        if !(depth > 0.0 && depth < 1.0) {
            return Err(Error::invalid(
                "tooth_depth_ratio",
                format!("{depth} is outside (0, 1)"),
            ));
        }
        Ok(())
    }

    /// Compute every piece of the gear at once
    pub fn build(&self) -> Result<GearShape> {
        let points = compute_gear_outline(self)?;
        let hub = compute_hub_geometry(self.size, self.hub)?;
        let spokes = compute_spoke_endpoints(self.size, hub.inner_radius, &SPOKE_ANGLES)?;

        Ok(GearShape {
            size: self.size,
            points,
            hub,
            spokes,
            rotation: Rotation::from_reverse(self.reverse),
        })
    }
}

/// Everything a renderer needs to draw one gear
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearShape {
    pub size: f64,
    /// Closed outline in ascending angle order
    pub points: Vec<Point>,
    pub hub: HubGeometry,
    pub spokes: Vec<Segment>,
    pub rotation: Rotation,
}

impl GearShape {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Clicking a gear flips its spin direction
    pub fn toggle_rotation(&mut self) -> Rotation {
        self.rotation = self.rotation.flipped();
        self.rotation
    }
}

fn validate_size(size: f64) -> Result<()> {
    if !(size.is_finite() && size > 0.0) {
        return Err(Error::invalid("size", format!("{size} must be a positive finite number")));
    }
    Ok(())
}

/// Tooth polygon for `spec`.
///
/// For tooth `i` the angular span runs from `2πi/n` to `2π(i+1)/n`. The
/// trapezoidal profile emits two tip points `±w/2` around the base angle
/// and two root points on the body circle, where `w` is 0.4 of the span.
/// The zig-zag profile emits the tip on the base angle and a root half a
/// span later.
pub fn compute_gear_outline(spec: &GearSpec) -> Result<Vec<Point>> {
    spec.validate()?;

    let size = spec.size;
    let half = size / 2.0;
    let center = Point::new(half, half);
    let hub = compute_hub_geometry(size, spec.hub)?;
    let depth = size * spec.tooth_depth_ratio;

    // Tips never leave the viewbox; roots sit one tooth depth below them
    let tip_radius = (hub.outer_radius + depth).min(half);
    let root_radius = (tip_radius - depth).max(0.0);

    let n = spec.tooth_count as usize;
    let step = TAU / n as f64;
    let tooth_half_width = step * TOOTH_WIDTH_FRACTION / 2.0;
    let mut points = Vec::with_capacity(n * spec.profile.points_per_tooth());

    let mut push = |radius: f64, angle: f64| {
        points.push(Point::polar(center, radius, angle).clamped(size));
    };

    for i in 0..n {
        let base = i as f64 * step;
        let next = (i + 1) as f64 * step;
        match spec.profile {
            ToothProfile::Trapezoidal => {
                push(tip_radius, base - tooth_half_width);
                push(tip_radius, base + tooth_half_width);
                push(root_radius, base + tooth_half_width);
                push(root_radius, next - tooth_half_width);
            }
            ToothProfile::ZigZag => {
                push(tip_radius, base);
                push(root_radius, base + step / 2.0);
            }
        }
    }

    Ok(points)
}

/// Hub circle radii for a gear of `size`
pub fn compute_hub_geometry(size: f64, variant: HubVariant) -> Result<HubGeometry> {
    validate_size(size)?;
    let (outer, inner) = variant.ratios();
    let inner_radius = size * inner;

    Ok(HubGeometry {
        outer_radius: size * outer,
        inner_radius,
        hole_radius: inner_radius * HOLE_RATIO,
    })
}

/// One radial segment per angle (degrees), from 0.4 to 0.95 of `inner_radius`
pub fn compute_spoke_endpoints(size: f64, inner_radius: f64, angles: &[f64]) -> Result<Vec<Segment>> {
    validate_size(size)?;
    if !(inner_radius.is_finite() && inner_radius > 0.0 && inner_radius <= size / 2.0) {
        return Err(Error::invalid(
            "inner_radius",
            format!("{inner_radius} must lie in (0, {}]", size / 2.0),
        ));
    }

    let center = Point::new(size / 2.0, size / 2.0);
    Ok(angles
        .iter()
        .map(|deg| {
            let rad = deg.to_radians();
            Segment::new(
                Point::polar(center, inner_radius * SPOKE_INNER_RATIO, rad),
                Point::polar(center, inner_radius * SPOKE_OUTER_RATIO, rad),
            )
        })
        .collect())
}

/// Page corner a decorative gear is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Where one decorative gear sits on the page (offsets in CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearPlacement {
    pub size: f64,
    pub corner: Corner,
    /// Distance from the anchored vertical edge (top or bottom)
    pub vertical: f64,
    /// Distance from the anchored horizontal edge (left or right)
    pub horizontal: f64,
    pub opacity: f64,
    pub reverse: bool,
}

const fn placement(
    size: f64,
    corner: Corner,
    vertical: f64,
    horizontal: f64,
    opacity: f64,
    reverse: bool,
) -> GearPlacement {
    GearPlacement {
        size,
        corner,
        vertical,
        horizontal,
        opacity,
        reverse,
    }
}

/// Three gears per corner, meshing clockwise/counter-clockwise
pub const DECORATIVE_GEARS: [GearPlacement; 12] = [
    placement(180.0, Corner::TopLeft, 32.0, 32.0, 0.8, false),
    placement(140.0, Corner::TopLeft, 64.0, 128.0, 0.6, true),
    placement(100.0, Corner::TopLeft, 128.0, 80.0, 0.7, false),
    placement(200.0, Corner::TopRight, 16.0, 16.0, 0.8, true),
    placement(160.0, Corner::TopRight, 80.0, 112.0, 0.6, false),
    placement(120.0, Corner::TopRight, 96.0, 48.0, 0.7, true),
    placement(150.0, Corner::BottomLeft, 32.0, 48.0, 0.8, true),
    placement(110.0, Corner::BottomLeft, 80.0, 112.0, 0.6, false),
    placement(90.0, Corner::BottomLeft, 64.0, 32.0, 0.7, false),
    placement(170.0, Corner::BottomRight, 48.0, 64.0, 0.8, false),
    placement(130.0, Corner::BottomRight, 96.0, 128.0, 0.6, true),
    placement(95.0, Corner::BottomRight, 80.0, 48.0, 0.7, false),
];

impl GearPlacement {
    pub fn spec(&self) -> GearSpec {
        GearSpec::new(self.size).reversed(self.reverse)
    }
}
