//! Procedural vector geometry for the page decorations
//!
//! Pure functions only: every output is plain data (points, segments,
//! angles) that a renderer turns into shapes. Nothing here holds state.

pub mod clock;
pub mod gear;

use serde::Serialize;

pub use clock::{ClockAngles, DialLayout, HandEndpoints, compute_clock_angles};
pub use gear::{
    GearShape, GearSpec, HubGeometry, HubVariant, Rotation, ToothProfile, compute_gear_outline,
    compute_hub_geometry, compute_spoke_endpoints,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Standard polar-to-Cartesian conversion around `center` (angle in radians,
    /// measured from the +x axis towards +y, i.e. clockwise on a y-down canvas)
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Dial convention: degrees measured clockwise from 12 o'clock
    pub fn on_dial(center: Point, radius: f64, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        Self {
            x: center.x + radius * rad.sin(),
            y: center.y - radius * rad.cos(),
        }
    }

    /// Clamp into the `[0, size] x [0, size]` viewbox (absorbs float rounding at the rim)
    pub(crate) fn clamped(self, size: f64) -> Self {
        Self {
            x: self.x.clamp(0.0, size),
            y: self.y.clamp(0.0, size),
        }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Straight line between two points (spokes, dial markers)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}
