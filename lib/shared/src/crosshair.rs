//! Geometry of the crosshair glyph.
//!
//! The glyph is a center dot plus four ticks (N/S/E/W). Everything is derived
//! from a single `size`, the edge length of the square canvas, and
//! `gap = 0.30 * size`.
//!
//! The vertical ticks end `gap` away from the center (`r - gap`, `r + gap`).
//! The horizontal ticks end `gap` away from the canvas edges (`gap`,
//! `size - gap`), giving the 14px glyph its left tick at 0..4.2 and right tick
//! at 9.8..14. Both pairs stay mirror images about the center.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE: f64 = 14.0;
/// Half-length of the blank region around the center, as a fraction of `size`.
pub const GAP_RATIO: f64 = 0.30;
pub const DOT_RADIUS: f64 = 1.4;
pub const STROKE_WIDTH: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairGeometry {
    pub size: f64,
    pub radius: f64,
    pub gap: f64,
    pub dot_radius: f64,
    pub stroke_width: f64,
    pub center: Point,
    pub top: Segment,
    pub bottom: Segment,
    pub left: Segment,
    pub right: Segment,
}

impl CrosshairGeometry {
    /// Computes the glyph for a canvas of `size` x `size`.
    ///
    /// Never fails. Non-finite sizes collapse to `0.0`; zero and negative
    /// sizes produce a degenerate glyph that draws nothing useful.
    pub fn new(size: f64) -> Self {
        // also folds -0.0 into 0.0
        let size = if size.is_finite() && size != 0.0 { size } else { 0.0 };
        let r = size / 2.0;
        let gap = GAP_RATIO * size;

        Self {
            size,
            radius: r,
            gap,
            dot_radius: DOT_RADIUS,
            stroke_width: STROKE_WIDTH,
            center: Point::new(r, r),
            top: Segment::new(Point::new(r, 0.0), Point::new(r, r - gap)),
            bottom: Segment::new(Point::new(r, r + gap), Point::new(r, size)),
            left: Segment::new(Point::new(0.0, r), Point::new(gap, r)),
            right: Segment::new(Point::new(size - gap, r), Point::new(size, r)),
        }
    }

    /// `0 0 size size`, with `size` printed exactly as given.
    pub fn view_box(&self) -> String {
        format!("0 0 {size} {size}", size = self.size)
    }

    pub fn is_degenerate(&self) -> bool {
        self.size <= 0.0
    }

    /// Ticks in drawing order: top, bottom, left, right.
    pub fn ticks(&self) -> [Segment; 4] {
        [self.top, self.bottom, self.left, self.right]
    }
}

impl Default for CrosshairGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

/// Formats a derived coordinate for an SVG attribute, rounded to three
/// decimals. Values too large to scale are printed as they are.
pub fn format_coord(value: f64) -> String {
    let scaled = value * 1000.0;
    if !scaled.is_finite() {
        return format!("{value}");
    }
    let rounded = scaled.round() / 1000.0;
    // avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn length(segment: Segment) -> f64 {
        (segment.to.x - segment.from.x).hypot(segment.to.y - segment.from.y)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_segment(segment: Segment, from: (f64, f64), to: (f64, f64)) {
        assert_close(segment.from.x, from.0);
        assert_close(segment.from.y, from.1);
        assert_close(segment.to.x, to.0);
        assert_close(segment.to.y, to.1);
    }

    #[test]
    fn default_size_ticks() {
        let geometry = CrosshairGeometry::default();

        assert_close(geometry.size, 14.0);
        assert_close(geometry.gap, 4.2);
        assert_segment(geometry.top, (7.0, 0.0), (7.0, 2.8));
        assert_segment(geometry.bottom, (7.0, 11.2), (7.0, 14.0));
        assert_segment(geometry.left, (0.0, 7.0), (4.2, 7.0));
        assert_segment(geometry.right, (9.8, 7.0), (14.0, 7.0));
    }

    #[test]
    fn landing_size_ticks() {
        let geometry = CrosshairGeometry::new(18.0);

        assert_close(geometry.radius, 9.0);
        assert_close(geometry.gap, 5.4);
        assert_segment(geometry.top, (9.0, 0.0), (9.0, 3.6));
        assert_segment(geometry.bottom, (9.0, 14.4), (9.0, 18.0));
        assert_segment(geometry.left, (0.0, 9.0), (5.4, 9.0));
        assert_segment(geometry.right, (12.6, 9.0), (18.0, 9.0));
        assert_eq!(geometry.view_box(), "0 0 18 18");
    }

    #[test]
    fn symmetric_about_center() {
        for size in [0.5, 1.0, 7.3, 14.0, 18.0, 64.0, 1000.0] {
            let g = CrosshairGeometry::new(size);

            assert_close(g.center.x, size / 2.0);
            assert_close(g.center.y, size / 2.0);
            assert_close(g.gap, 0.3 * size);

            // vertical ticks mirror across y = r
            assert_close(g.center.y - g.top.to.y, g.bottom.from.y - g.center.y);
            assert_close(length(g.top), length(g.bottom));
            // horizontal ticks mirror across x = r
            assert_close(g.center.x - g.left.to.x, g.right.from.x - g.center.x);
            assert_close(length(g.left), length(g.right));

            assert_eq!(g.view_box(), format!("0 0 {size} {size}"));
        }
    }

    #[test]
    fn constants_do_not_scale() {
        let small = CrosshairGeometry::new(10.0);
        let large = CrosshairGeometry::new(100.0);

        assert_eq!(small.dot_radius, large.dot_radius);
        assert_eq!(small.stroke_width, large.stroke_width);
        assert_close(large.dot_radius, 1.4);
        assert_close(large.stroke_width, 0.9);
    }

    #[test]
    fn degenerate_sizes_do_not_fail() {
        let zero = CrosshairGeometry::new(0.0);
        assert!(zero.is_degenerate());
        assert_eq!(zero.view_box(), "0 0 0 0");

        let negative = CrosshairGeometry::new(-4.0);
        assert!(negative.is_degenerate());
        assert_close(negative.gap, -1.2);

        let nan = CrosshairGeometry::new(f64::NAN);
        assert!(nan.is_degenerate());
        assert_eq!(nan.size, 0.0);

        let inf = CrosshairGeometry::new(f64::INFINITY);
        assert_eq!(inf.view_box(), "0 0 0 0");

        let negative_zero = CrosshairGeometry::new(-0.0);
        assert_eq!(negative_zero.view_box(), "0 0 0 0");
    }

    #[test]
    fn view_box_keeps_the_exact_size() {
        assert_eq!(CrosshairGeometry::new(1.23456).view_box(), "0 0 1.23456 1.23456");

        let tiny = CrosshairGeometry::new(0.0004);
        assert!(!tiny.is_degenerate());
        assert_eq!(tiny.view_box(), "0 0 0.0004 0.0004");

        let huge = CrosshairGeometry::new(1e306);
        assert!(!huge.view_box().contains("inf"), "{}", huge.view_box());
        assert!(!format_coord(huge.right.to.x).contains("inf"));
    }

    #[test]
    fn ticks_in_drawing_order() {
        let g = CrosshairGeometry::default();
        assert_eq!(g.ticks(), [g.top, g.bottom, g.left, g.right]);
    }

    #[test]
    fn coordinates_are_trimmed() {
        assert_eq!(format_coord(7.0), "7");
        assert_eq!(format_coord(2.8), "2.8");
        assert_eq!(format_coord(7.0 + 0.3 * 14.0), "11.2");
        assert_eq!(format_coord(9.8000000001), "9.8");
        assert_eq!(format_coord(-0.0), "0");
        assert_eq!(format_coord(-0.0001), "0");
        assert_eq!(format_coord(1.4), "1.4");
        assert_eq!(format_coord(14.0 - 0.3 * 14.0), "9.8");
        assert_eq!(format_coord(1e306), format!("{}", 1e306));
    }
}
