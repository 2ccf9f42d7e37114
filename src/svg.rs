//! Standalone SVG rendering of the geometry kernel's output
//!
//! Formatting only; every coordinate comes from `geometry`.

use std::fmt;

use crate::geometry::clock::{DialLayout, dial_center};
use crate::geometry::{ClockAngles, GearShape, Point, Rotation, Segment};
use crate::constants::clock::DIAL_SIZE;
use crate::theme::ThemeConfig;

const GEAR_LIGHT: &str = "hsl(35, 28%, 62%)";
const GEAR_DARK: &str = "hsl(30, 22%, 38%)";
const GEAR_STROKE: &str = "hsl(30, 18%, 28%)";
const GEAR_HUB: &str = "hsl(30, 22%, 48%)";
const GEAR_HOLE: &str = "hsl(30, 15%, 22%)";

/// Light ink for numerals and hands on the themed face
const DIAL_INK: &str = "#f3e9d2";

/// `Display` adapter: `GearSvg(&shape).to_string()`
pub struct GearSvg<'a>(pub &'a GearShape);

/// `Display` adapter for the clock dial with its hands at `angles`
pub struct ClockSvg<'a> {
    pub angles: &'a ClockAngles,
    pub theme: &'a ThemeConfig,
}

fn line(f: &mut fmt::Formatter<'_>, seg: &Segment, stroke: &str, width: f64) -> fmt::Result {
    writeln!(
        f,
        r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{stroke}" stroke-width="{width}" stroke-linecap="round"/>"#,
        seg.start.x, seg.start.y, seg.end.x, seg.end.y
    )
}

fn circle(f: &mut fmt::Formatter<'_>, c: Point, r: f64, fill: &str, stroke: &str, width: f64) -> fmt::Result {
    writeln!(
        f,
        r#"  <circle cx="{:.3}" cy="{:.3}" r="{r:.3}" fill="{fill}" stroke="{stroke}" stroke-width="{width}"/>"#,
        c.x, c.y
    )
}

impl fmt::Display for GearSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gear = self.0;
        let size = gear.size;
        let direction = match gear.rotation {
            Rotation::Clockwise => "clockwise",
            Rotation::CounterClockwise => "counter-clockwise",
        };
        let gradient = format!("gearGradient-{size}-{}", if gear.rotation == Rotation::Clockwise { 'f' } else { 'r' });

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" data-rotation="{direction}">"#
        )?;
        writeln!(f, r#"  <defs>"#)?;
        writeln!(f, r#"    <radialGradient id="{gradient}">"#)?;
        writeln!(f, r#"      <stop offset="20%" stop-color="{GEAR_LIGHT}"/>"#)?;
        writeln!(f, r#"      <stop offset="100%" stop-color="{GEAR_DARK}"/>"#)?;
        writeln!(f, r#"    </radialGradient>"#)?;
        writeln!(f, r#"  </defs>"#)?;

        write!(f, r#"  <polygon points=""#)?;
        for (i, p) in gear.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:.3},{:.3}", p.x, p.y)?;
        }
        writeln!(f, r#"" fill="url(#{gradient})" stroke="{GEAR_STROKE}" stroke-width="1.5"/>"#)?;

        let center = gear.center();
        circle(f, center, gear.hub.inner_radius, GEAR_HUB, GEAR_STROKE, 2.0)?;
        circle(f, center, gear.hub.hole_radius, GEAR_HOLE, GEAR_STROKE, 2.0)?;
        for spoke in &gear.spokes {
            line(f, spoke, GEAR_STROKE, 1.5)?;
        }
        writeln!(f, "</svg>")
    }
}

impl fmt::Display for ClockSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = &self.theme.main_color;
        let accent = &self.theme.accent_color;
        let center = dial_center();
        let dial = DialLayout::standard();
        let hands = self.angles.hand_endpoints();

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{DIAL_SIZE}" height="{DIAL_SIZE}" viewBox="0 0 {DIAL_SIZE} {DIAL_SIZE}">"#
        )?;
        circle(f, center, 95.0, "none", main, 8.0)?;
        circle(f, center, 90.0, main, accent, 4.0)?;
        circle(f, center, 85.0, "none", accent, 2.0)?;

        for marker in &dial.hour_markers {
            line(f, marker, DIAL_INK, 3.0)?;
        }
        for label in &dial.numerals {
            writeln!(
                f,
                r#"  <text x="{:.3}" y="{:.3}" text-anchor="middle" dominant-baseline="middle" fill="{DIAL_INK}" font-size="14" font-family="serif" font-weight="bold">{}</text>"#,
                label.position.x, label.position.y, label.text
            )?;
        }
        for tick in &dial.minute_ticks {
            line(f, tick, DIAL_INK, 1.0)?;
        }

        line(f, &Segment::new(center, hands.hour), DIAL_INK, 6.0)?;
        line(f, &Segment::new(center, hands.minute), DIAL_INK, 4.0)?;
        line(f, &Segment::new(center, hands.second), accent, 2.0)?;

        circle(f, center, 8.0, accent, DIAL_INK, 2.0)?;
        circle(f, center, 3.0, DIAL_INK, "none", 0.0)?;
        for screw in &dial.screws {
            circle(f, *screw, 4.0, accent, DIAL_INK, 1.0)?;
            let slot = Segment::new(
                Point::new(screw.x - 2.0, screw.y),
                Point::new(screw.x + 2.0, screw.y),
            );
            line(f, &slot, DIAL_INK, 1.0)?;
        }
        writeln!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GearSpec, compute_clock_angles};
    use chrono::NaiveTime;

    #[test]
    fn test_gear_svg_structure() {
        let gear = GearSpec::new(80.0).with_teeth(5).build().unwrap();
        let svg = GearSvg(&gear).to_string();

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 80 80""#));
        assert!(svg.contains(r#"data-rotation="clockwise""#));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<line").count(), 6);

        let points = svg
            .split(r#"points=""#)
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert_eq!(points.split(' ').count(), 20);
    }

    #[test]
    fn test_reversed_gear_marked_counter_clockwise() {
        let gear = GearSpec::new(100.0).reversed(true).build().unwrap();
        let svg = GearSvg(&gear).to_string();
        assert!(svg.contains(r#"data-rotation="counter-clockwise""#));
        assert!(svg.contains("gearGradient-100-r"));
    }

    #[test]
    fn test_clock_svg_uses_theme_colors() {
        let theme = ThemeConfig {
            main_color: "#101010".to_string(),
            accent_color: "#abcdef".to_string(),
            bg_image: String::new(),
        };
        let angles = compute_clock_angles(&NaiveTime::from_hms_opt(10, 10, 0).unwrap());
        let svg = ClockSvg { angles: &angles, theme: &theme }.to_string();

        assert!(svg.contains(r##"fill="#101010""##));
        assert!(svg.contains(r##"stroke="#abcdef""##));
        assert!(svg.contains(">XII</text>"));
        // 12 hour markers + 48 ticks + 3 hands + 4 screw slots
        assert_eq!(svg.matches("<line").count(), 67);
    }
}
