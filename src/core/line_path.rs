use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space vertex fed to the path generator.
pub type PathPoint = (f64, f64);

const CARDINAL_TENSION: f64 = 0.7;
const BUNDLE_TENSION: f64 = 0.7;
const FLAT_SLOPE_EPSILON: f64 = 1e-6;

const BASIS_BEZIER_1: [f64; 4] = [0.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
const BASIS_BEZIER_2: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 0.0];
const BASIS_BEZIER_3: [f64; 4] = [0.0, 1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0];

/// Strategy used to connect consecutive vertices of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interpolation {
    /// Straight segments.
    #[default]
    Linear,
    /// Straight segments, closed back to the first vertex.
    LinearClosed,
    /// Horizontal-vertical steps centered between vertices.
    Step,
    /// Vertical then horizontal steps.
    StepBefore,
    /// Horizontal then vertical steps.
    StepAfter,
    /// Cubic B-spline; passes through the end vertices only.
    Basis,
    /// Cubic B-spline that starts and ends between vertices.
    BasisOpen,
    /// Closed cubic B-spline loop.
    BasisClosed,
    /// B-spline straightened towards the chord by the line tension.
    Bundle,
    /// Cardinal spline through every vertex.
    Cardinal,
    /// Cardinal spline using the end vertices only as control points.
    CardinalOpen,
    /// Closed cardinal spline loop.
    CardinalClosed,
    /// Cubic spline that preserves monotonicity in y.
    Monotone,
}

impl Interpolation {
    pub const ALL: [Self; 13] = [
        Self::Linear,
        Self::LinearClosed,
        Self::Step,
        Self::StepBefore,
        Self::StepAfter,
        Self::Basis,
        Self::BasisOpen,
        Self::BasisClosed,
        Self::Bundle,
        Self::Cardinal,
        Self::CardinalOpen,
        Self::CardinalClosed,
        Self::Monotone,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LinearClosed => "linear-closed",
            Self::Step => "step",
            Self::StepBefore => "step-before",
            Self::StepAfter => "step-after",
            Self::Basis => "basis",
            Self::BasisOpen => "basis-open",
            Self::BasisClosed => "basis-closed",
            Self::Bundle => "bundle",
            Self::Cardinal => "cardinal",
            Self::CardinalOpen => "cardinal-open",
            Self::CardinalClosed => "cardinal-closed",
            Self::Monotone => "monotone",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or_else(|| ChartError::UnsupportedInterpolation(name.to_owned()))
    }
}

impl TryFrom<String> for Interpolation {
    type Error = ChartError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Interpolation> for String {
    fn from(mode: Interpolation) -> Self {
        mode.as_str().to_owned()
    }
}

/// Parses an interpolation name such as `"basis"` or `"step-after"`.
pub fn parse_interpolation(name: &str) -> ChartResult<Interpolation> {
    name.parse()
}

/// Builds SVG path data through `points` using `interpolation`.
///
/// An empty input yields an empty string. Spline modes fall back to straight
/// segments when there are too few vertices: three for `basis`, `bundle`,
/// `cardinal`, `cardinal-closed` (closed segments) and `monotone`, four for
/// the open variants.
#[must_use]
pub fn line_path(points: &[PathPoint], interpolation: Interpolation) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::from("M");
    match interpolation {
        Interpolation::Linear => linear(&mut path, points),
        Interpolation::LinearClosed => {
            linear(&mut path, points);
            path.push('Z');
        }
        Interpolation::Step => step(&mut path, points),
        Interpolation::StepBefore => step_before(&mut path, points),
        Interpolation::StepAfter => step_after(&mut path, points),
        Interpolation::Basis => basis(&mut path, points),
        Interpolation::BasisOpen => basis_open(&mut path, points),
        Interpolation::BasisClosed => basis_closed(&mut path, points),
        Interpolation::Bundle => basis(&mut path, &bundle(points, BUNDLE_TENSION)),
        Interpolation::Cardinal => {
            if points.len() < 3 {
                linear(&mut path, points);
            } else {
                push_point(&mut path, points[0]);
                hermite(&mut path, points, &cardinal_tangents(points, CARDINAL_TENSION));
            }
        }
        Interpolation::CardinalOpen => {
            if points.len() < 4 {
                linear(&mut path, points);
            } else {
                push_point(&mut path, points[1]);
                hermite(
                    &mut path,
                    &points[1..points.len() - 1],
                    &cardinal_tangents(points, CARDINAL_TENSION),
                );
            }
        }
        Interpolation::CardinalClosed => cardinal_closed(&mut path, points),
        Interpolation::Monotone => {
            if points.len() < 3 {
                linear(&mut path, points);
            } else {
                push_point(&mut path, points[0]);
                hermite(&mut path, points, &monotone_tangents(points));
            }
        }
    }
    path
}

/// Shortest decimal form of a coordinate for SVG attributes.
pub(crate) struct SvgNumber(pub(crate) f64);

impl fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0` would otherwise leak into the markup.
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}")
    }
}

fn push_point(path: &mut String, (x, y): PathPoint) {
    let _ = write!(path, "{},{}", SvgNumber(x), SvgNumber(y));
}

fn linear(path: &mut String, points: &[PathPoint]) {
    for (index, point) in points.iter().enumerate() {
        if index > 0 {
            path.push('L');
        }
        push_point(path, *point);
    }
}

fn step(path: &mut String, points: &[PathPoint]) {
    let mut previous = points[0];
    push_point(path, previous);
    for &point in &points[1..] {
        let _ = write!(
            path,
            "H{}V{}",
            SvgNumber((previous.0 + point.0) / 2.0),
            SvgNumber(point.1)
        );
        previous = point;
    }
    if points.len() > 1 {
        let _ = write!(path, "H{}", SvgNumber(previous.0));
    }
}

fn step_before(path: &mut String, points: &[PathPoint]) {
    push_point(path, points[0]);
    for &(x, y) in &points[1..] {
        let _ = write!(path, "V{}H{}", SvgNumber(y), SvgNumber(x));
    }
}

fn step_after(path: &mut String, points: &[PathPoint]) {
    push_point(path, points[0]);
    for &(x, y) in &points[1..] {
        let _ = write!(path, "H{}V{}", SvgNumber(x), SvgNumber(y));
    }
}

fn dot4(weights: [f64; 4], values: [f64; 4]) -> f64 {
    weights
        .iter()
        .zip(values.iter())
        .map(|(weight, value)| weight * value)
        .sum()
}

fn shift_in(window: &mut [f64; 4], value: f64) {
    window.rotate_left(1);
    window[3] = value;
}

fn basis(path: &mut String, points: &[PathPoint]) {
    if points.len() < 3 {
        linear(path, points);
        return;
    }

    let (x0, y0) = points[0];
    let mut px = [x0, x0, x0, points[1].0];
    let mut py = [y0, y0, y0, points[1].1];
    push_point(path, (x0, y0));
    path.push('L');
    push_point(path, (dot4(BASIS_BEZIER_3, px), dot4(BASIS_BEZIER_3, py)));

    // The last vertex is fed twice so the curve is pulled onto it.
    let last = points[points.len() - 1];
    for &(x, y) in points[2..].iter().chain(std::iter::once(&last)) {
        shift_in(&mut px, x);
        shift_in(&mut py, y);
        basis_segment(path, &px, &py);
    }
    path.push('L');
    push_point(path, last);
}

fn basis_segment(path: &mut String, px: &[f64; 4], py: &[f64; 4]) {
    let _ = write!(
        path,
        "C{},{},{},{},{},{}",
        SvgNumber(dot4(BASIS_BEZIER_1, *px)),
        SvgNumber(dot4(BASIS_BEZIER_1, *py)),
        SvgNumber(dot4(BASIS_BEZIER_2, *px)),
        SvgNumber(dot4(BASIS_BEZIER_2, *py)),
        SvgNumber(dot4(BASIS_BEZIER_3, *px)),
        SvgNumber(dot4(BASIS_BEZIER_3, *py)),
    );
}

/// Starts at the spline point of the first three vertices; the first and
/// last vertex only pull on the curve.
fn basis_open(path: &mut String, points: &[PathPoint]) {
    if points.len() < 4 {
        linear(path, points);
        return;
    }

    let mut px = [0.0, points[0].0, points[1].0, points[2].0];
    let mut py = [0.0, points[0].1, points[1].1, points[2].1];
    push_point(path, (dot4(BASIS_BEZIER_3, px), dot4(BASIS_BEZIER_3, py)));
    for &(x, y) in &points[3..] {
        shift_in(&mut px, x);
        shift_in(&mut py, y);
        basis_segment(path, &px, &py);
    }
}

/// One segment per vertex, wrapping around so the loop closes smoothly.
fn basis_closed(path: &mut String, points: &[PathPoint]) {
    let n = points.len();
    let vertex = |index: usize| points[index % n];
    let mut px = [0.0; 4];
    let mut py = [0.0; 4];
    for index in 0..4 {
        px[index] = vertex(index).0;
        py[index] = vertex(index).1;
    }
    push_point(path, (dot4(BASIS_BEZIER_3, px), dot4(BASIS_BEZIER_3, py)));
    for index in 4..n + 4 {
        let (x, y) = vertex(index);
        shift_in(&mut px, x);
        shift_in(&mut py, y);
        basis_segment(path, &px, &py);
    }
}

/// Pulls every vertex towards the straight chord from first to last vertex.
fn bundle(points: &[PathPoint], tension: f64) -> Vec<PathPoint> {
    let n = points.len() - 1;
    if n == 0 {
        return points.to_vec();
    }

    let (x0, y0) = points[0];
    let dx = points[n].0 - x0;
    let dy = points[n].1 - y0;
    points
        .iter()
        .enumerate()
        .map(|(index, &(x, y))| {
            let t = index as f64 / n as f64;
            (
                tension * x + (1.0 - tension) * (x0 + t * dx),
                tension * y + (1.0 - tension) * (y0 + t * dy),
            )
        })
        .collect()
}

fn cardinal_closed(path: &mut String, points: &[PathPoint]) {
    if points.len() < 3 {
        linear(path, points);
        path.push('Z');
        return;
    }

    let n = points.len();
    let mut looped = points.to_vec();
    looped.push(points[0]);
    let mut padded = Vec::with_capacity(n + 3);
    padded.push(points[n - 1]);
    padded.extend_from_slice(&looped);
    padded.push(points[1]);

    push_point(path, points[0]);
    hermite(path, &looped, &cardinal_tangents(&padded, CARDINAL_TENSION));
}

fn cardinal_tangents(points: &[PathPoint], tension: f64) -> Vec<PathPoint> {
    let scale = (1.0 - tension) / 2.0;
    points
        .windows(3)
        .map(|window| {
            (
                scale * (window[2].0 - window[0].0),
                scale * (window[2].1 - window[0].1),
            )
        })
        .collect()
}

fn slope(from: PathPoint, to: PathPoint) -> f64 {
    (to.1 - from.1) / (to.0 - from.0)
}

fn finite_differences(points: &[PathPoint]) -> Vec<f64> {
    let last = points.len() - 1;
    let mut differences = vec![0.0; points.len()];
    let mut previous = slope(points[0], points[1]);
    differences[0] = previous;
    for index in 1..last {
        let next = slope(points[index], points[index + 1]);
        differences[index] = (previous + next) / 2.0;
        previous = next;
    }
    differences[last] = previous;
    differences
}

fn or_zero(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 { 0.0 } else { value }
}

fn monotone_tangents(points: &[PathPoint]) -> Vec<PathPoint> {
    let last = points.len() - 1;
    let mut m = finite_differences(points);

    for index in 0..last {
        let d = slope(points[index], points[index + 1]);
        if d.abs() < FLAT_SLOPE_EPSILON {
            m[index] = 0.0;
            m[index + 1] = 0.0;
        } else {
            let a = m[index] / d;
            let b = m[index + 1] / d;
            let s = a * a + b * b;
            if s > 9.0 {
                let s = d * 3.0 / s.sqrt();
                m[index] = s * a;
                m[index + 1] = s * b;
            }
        }
    }

    (0..=last)
        .map(|index| {
            let dx = points[last.min(index + 1)].0 - points[index.saturating_sub(1)].0;
            let s = or_zero(dx / (6.0 * (1.0 + m[index] * m[index])));
            (s, or_zero(m[index] * s))
        })
        .collect()
}

/// Appends Hermite segments; `tangents` has one entry per vertex, or one per
/// interior vertex in which case the ends are drawn as quadratic curves.
fn hermite(path: &mut String, points: &[PathPoint], tangents: &[PathPoint]) {
    debug_assert!(
        !tangents.is_empty()
            && (points.len() == tangents.len() || points.len() == tangents.len() + 2)
    );

    let quadratic_ends = points.len() != tangents.len();
    let mut p0 = points[0];
    let mut p = points[1];
    let t0 = tangents[0];
    let mut t = t0;
    let mut next = 1;

    if quadratic_ends {
        let _ = write!(
            path,
            "Q{},{},{},{}",
            SvgNumber(p.0 - t0.0 * 2.0 / 3.0),
            SvgNumber(p.1 - t0.1 * 2.0 / 3.0),
            SvgNumber(p.0),
            SvgNumber(p.1)
        );
        p0 = points[1];
        next = 2;
    }

    if tangents.len() > 1 {
        t = tangents[1];
        p = points[next];
        next += 1;
        let _ = write!(
            path,
            "C{},{},{},{},{},{}",
            SvgNumber(p0.0 + t0.0),
            SvgNumber(p0.1 + t0.1),
            SvgNumber(p.0 - t.0),
            SvgNumber(p.1 - t.1),
            SvgNumber(p.0),
            SvgNumber(p.1)
        );
        for &tangent in &tangents[2..] {
            p = points[next];
            t = tangent;
            let _ = write!(
                path,
                "S{},{},{},{}",
                SvgNumber(p.0 - t.0),
                SvgNumber(p.1 - t.1),
                SvgNumber(p.0),
                SvgNumber(p.1)
            );
            next += 1;
        }
    }

    if quadratic_ends {
        let end = points[next];
        let _ = write!(
            path,
            "Q{},{},{},{}",
            SvgNumber(p.0 + t.0 * 2.0 / 3.0),
            SvgNumber(p.1 + t.1 * 2.0 / 3.0),
            SvgNumber(end.0),
            SvgNumber(end.1)
        );
    }
}
