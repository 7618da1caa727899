//! SVG rendering of spline frames.
//!
//! Produces a standalone SVG document showing the sampled curve, the control
//! polygon (when visible) and a square marker on every control point. Data
//! coordinates are y-up; the document flips them so the picture matches a
//! conventional plot.
//!
//! # Example
//!
//! ```
//! use splinum::{Point2, io::{render_frame_svg, SvgStyle}, session::Session};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(4.0, 0.0),
//! ];
//!
//! let session = Session::new(points);
//! let svg = render_frame_svg(&session.frame(), &SvgStyle::default());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("stroke=\"blue\""));
//! ```

use crate::primitives::Point2;
use crate::session::Frame;
use num_traits::Float;
use std::fmt;

/// Colors and sizes used by [`render_frame_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Document width in pixels
    pub width: f64,
    /// Document height in pixels
    pub height: f64,
    /// Stroke color of the curve
    pub curve_color: String,
    /// Stroke color of the control polygon and fill of the point markers
    pub control_color: String,
    /// Curve stroke width in pixels
    pub curve_width: f64,
    /// Control polygon stroke width in pixels
    pub polygon_width: f64,
    /// Marker edge length as a fraction of the larger data extent
    pub marker_fraction: f64,
    /// Empty margin around the data as a fraction of the larger extent
    pub margin_fraction: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            curve_color: "blue".to_string(),
            control_color: "red".to_string(),
            curve_width: 2.0,
            polygon_width: 1.0,
            marker_fraction: 0.015,
            margin_fraction: 0.05,
        }
    }
}

/// Converts a polyline to an SVG path string.
///
/// # Example
///
/// ```
/// use splinum::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// let path = polyline_to_svg_path(&points, false);
/// assert_eq!(path, "M 0 0 L 10 0 L 10 10");
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut result = String::new();

    // Move to first point
    result.push_str(&format!("M {} {}", points[0].x, points[0].y));

    // Line to remaining points
    for p in &points[1..] {
        result.push_str(&format!(" L {} {}", p.x, p.y));
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Renders one frame as an SVG document.
pub fn render_frame_svg<F: Float>(frame: &Frame<'_, F>, style: &SvgStyle) -> String {
    let curve: Vec<Point2<f64>> = frame.curve.iter().map(|p| to_f64(*p)).collect();
    let controls: Vec<Point2<f64>> = frame.control_points.iter().map(|p| to_f64(*p)).collect();

    let (min, max) = bounds(curve.iter().chain(controls.iter()));
    let extent = (max.x - min.x).max(max.y - min.y).max(1e-9);
    let margin = extent * style.margin_fraction;
    let marker = extent * style.marker_fraction;

    // Under scale(1,-1) the data y range [min.y, max.y] lands on [-max.y, -min.y].
    let view_x = min.x - margin;
    let view_y = -(max.y + margin);
    let view_w = max.x - min.x + 2.0 * margin;
    let view_h = max.y - min.y + 2.0 * margin;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet">"#,
        style.width, style.height, view_x, view_y, view_w, view_h
    ));
    svg.push('\n');
    svg.push_str(r#"<g transform="scale(1,-1)">"#);
    svg.push('\n');

    if !curve.is_empty() {
        svg.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" vector-effect="non-scaling-stroke"/>"#,
            polyline_to_svg_path(&curve, false),
            style.curve_color,
            style.curve_width
        ));
        svg.push('\n');
    }

    if frame.show_control_polygon && controls.len() > 1 {
        svg.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="0.5" stroke-width="{}" vector-effect="non-scaling-stroke"/>"#,
            polyline_to_svg_path(&controls, false),
            style.control_color,
            style.polygon_width
        ));
        svg.push('\n');
    }

    for p in &controls {
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            p.x - marker / 2.0,
            p.y - marker / 2.0,
            marker,
            marker,
            style.control_color
        ));
        svg.push('\n');
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn to_f64<F: Float>(p: Point2<F>) -> Point2<f64> {
    Point2::new(p.x.to_f64().unwrap_or(0.0), p.y.to_f64().unwrap_or(0.0))
}

fn bounds<'a>(points: impl Iterator<Item = &'a Point2<f64>>) -> (Point2<f64>, Point2<f64>) {
    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    if min.x > max.x {
        // Nothing to draw.
        return (Point2::origin(), Point2::new(1.0, 1.0));
    }
    (min, max)
}
