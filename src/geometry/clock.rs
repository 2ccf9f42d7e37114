//! Analog clock geometry
//!
//! Angles are degrees measured clockwise from 12 o'clock. The dial layout is
//! fixed to a 200x200 viewbox; only the hands move, and they are recomputed
//! from the wall clock on every tick, so a skipped tick self-corrects.

use chrono::Timelike;
use serde::Serialize;

use super::{Point, Segment};
use crate::constants::clock::*;

/// Hand angles for one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClockAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Hour hand advances half a degree per minute; minute and second hands
/// jump six degrees per unit.
pub fn compute_clock_angles<T: Timelike>(time: &T) -> ClockAngles {
    let hour = (time.hour() % 12) as f64;
    let minute = time.minute() as f64;
    // chrono encodes leap seconds in the nanosecond field, so this stays in 0..60
    let second = time.second() as f64;

    ClockAngles {
        hour: hour * 30.0 + minute * 0.5,
        minute: minute * 6.0,
        second: second * 6.0,
    }
}

/// Tip positions of the three hands (all hands start at the dial center)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandEndpoints {
    pub hour: Point,
    pub minute: Point,
    pub second: Point,
}

impl ClockAngles {
    pub fn hand_endpoints(&self) -> HandEndpoints {
        let center = dial_center();
        HandEndpoints {
            hour: Point::on_dial(center, HOUR_HAND_LENGTH, self.hour),
            minute: Point::on_dial(center, MINUTE_HAND_LENGTH, self.minute),
            second: Point::on_dial(center, SECOND_HAND_LENGTH, self.second),
        }
    }
}

pub fn dial_center() -> Point {
    Point::new(DIAL_SIZE / 2.0, DIAL_SIZE / 2.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumeralLabel {
    pub text: &'static str,
    pub position: Point,
}

/// Static parts of the dial
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialLayout {
    pub hour_markers: Vec<Segment>,
    pub numerals: Vec<NumeralLabel>,
    /// One per minute that isn't on an hour marker
    pub minute_ticks: Vec<Segment>,
    pub screws: Vec<Point>,
}

impl DialLayout {
    pub fn standard() -> Self {
        let center = dial_center();
        let radial = |inner: f64, outer: f64, degrees: f64| {
            Segment::new(
                Point::on_dial(center, inner, degrees),
                Point::on_dial(center, outer, degrees),
            )
        };

        let hour_markers = (0..12)
            .map(|i| radial(HOUR_MARKER_INNER, HOUR_MARKER_OUTER, i as f64 * 30.0))
            .collect();

        let numerals = ROMAN_NUMERALS
            .iter()
            .enumerate()
            .map(|(i, &text)| NumeralLabel {
                text,
                position: Point::on_dial(center, NUMERAL_RADIUS, i as f64 * 30.0),
            })
            .collect();

        let minute_ticks = (0..60)
            .filter(|i| i % 5 != 0)
            .map(|i| radial(MINUTE_TICK_INNER, MINUTE_TICK_OUTER, i as f64 * 6.0))
            .collect();

        let screws = SCREW_ANGLES
            .iter()
            .map(|deg| Point::on_dial(center, SCREW_RADIUS, *deg))
            .collect();

        Self {
            hour_markers,
            numerals,
            minute_ticks,
            screws,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime};

    const EPS: f64 = 1e-9;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_known_times() {
        let angles = compute_clock_angles(&at(15, 30, 45));
        assert_eq!(angles.hour, 105.0);
        assert_eq!(angles.minute, 180.0);
        assert_eq!(angles.second, 270.0);

        let midnight = compute_clock_angles(&at(0, 0, 0));
        assert_eq!(midnight, ClockAngles { hour: 0.0, minute: 0.0, second: 0.0 });
    }

    #[test]
    fn test_angles_stay_below_full_turn() {
        for h in 0..24 {
            for m in 0..60 {
                for s in (0..60).step_by(7) {
                    let a = compute_clock_angles(&at(h, m, s));
                    for v in [a.hour, a.minute, a.second] {
                        assert!((0.0..360.0).contains(&v), "{h}:{m}:{s} -> {v}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_hour_angle_twelve_hour_period() {
        for h in 0..12 {
            for m in [0, 17, 59] {
                let t = at(h, m, 30);
                let later = t + Duration::hours(12);
                assert_eq!(
                    compute_clock_angles(&t).hour,
                    compute_clock_angles(&later).hour
                );
            }
        }
    }

    #[test]
    fn test_one_hour_adds_thirty_degrees() {
        for h in 0..24 {
            let t = at(h, 42, 0);
            let next = t + Duration::hours(1);
            let before = compute_clock_angles(&t).hour;
            let after = compute_clock_angles(&next).hour;
            assert!(((before + 30.0) % 360.0 - after).abs() < EPS, "hour {h}");
        }
    }

    #[test]
    fn test_hand_endpoints() {
        let hands = compute_clock_angles(&at(3, 0, 30)).hand_endpoints();
        // 3 o'clock: straight right
        assert!((hands.hour.x - 140.0).abs() < EPS);
        assert!((hands.hour.y - 100.0).abs() < EPS);
        // minute hand at 12: straight up
        assert!((hands.minute.x - 100.0).abs() < EPS);
        assert!((hands.minute.y - 45.0).abs() < EPS);
        // 30 seconds: straight down
        assert!((hands.second.x - 100.0).abs() < EPS);
        assert!((hands.second.y - 165.0).abs() < EPS);
    }

    #[test]
    fn test_dial_layout_counts() {
        let dial = DialLayout::standard();
        assert_eq!(dial.hour_markers.len(), 12);
        assert_eq!(dial.numerals.len(), 12);
        assert_eq!(dial.minute_ticks.len(), 48);
        assert_eq!(dial.screws.len(), 4);

        assert_eq!(dial.numerals[0].text, "XII");
        assert!((dial.numerals[0].position.y - 35.0).abs() < EPS);
        assert!((dial.numerals[3].position.x - 165.0).abs() < EPS);

        let center = dial_center();
        for screw in &dial.screws {
            assert!((screw.distance_to(center) - 88.0).abs() < EPS);
        }
    }
}
