//! Closed-form line segment / circle intersection.

use super::{Circle, LineSegment, Point};
use crate::error::{Degeneracy, GeometryError};
use serde::Serialize;

/// Relative discriminant band treated as tangency by default.
pub const DEFAULT_TANGENT_TOLERANCE: f64 = 1e-9;

/// How a discriminant close to zero is classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tangency {
    /// Only a discriminant of exactly `0.0` counts as tangent.
    Exact,
    /// `|D| <= eps * max(B², |4AC|)` counts as tangent.
    Relative(f64),
}

impl Default for Tangency {
    fn default() -> Self {
        Self::Relative(DEFAULT_TANGENT_TOLERANCE)
    }
}

impl Tangency {
    /// Non-positive or non-finite tolerances select [`Tangency::Exact`].
    ///
    /// A band of `1` or wider would classify every crossing as tangent, so
    /// such tolerances fall back to the default band.
    pub fn from_tolerance(eps: f64) -> Self {
        if !eps.is_finite() || eps <= 0.0 {
            Self::Exact
        } else if eps < 1.0 {
            Self::Relative(eps)
        } else {
            log::warn!(
                "tangent tolerance {eps} must be below 1; using {DEFAULT_TANGENT_TOLERANCE}"
            );
            Self::default()
        }
    }

    #[allow(clippy::float_cmp)]
    fn is_tangent(self, disc: f64, qa: f64, qb: f64, qc: f64) -> bool {
        match self {
            Self::Exact => disc == 0.0,
            Self::Relative(eps) => {
                let scale = (qb * qb).max((4.0 * qa * qc).abs());
                disc.abs() <= eps * scale
            }
        }
    }
}

/// Intersection point together with its parameter along the segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    pub t: f64,
    pub point: Point,
}

/// Zero, one or two hits ordered by ascending `t`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Intersections {
    hits: Vec<Hit>,
}

impl Intersections {
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Finds every point where `segment` crosses the boundary of `circle`.
///
/// The segment is parametrized as `P(t) = (a*t + b, c*t + d)` for
/// `t ∈ [0, 1]` and substituted into the circle equation, giving
/// `A*t² + B*t + C = 0`. Roots outside `[0, 1]` are dropped.
pub fn intersect(
    circle: &Circle,
    segment: &LineSegment,
    tangency: Tangency,
) -> Result<Intersections, GeometryError> {
    let r = circle.radius();
    if r <= 0.0 || r.is_nan() {
        return Err(Degeneracy::ZeroRadiusCircle.into());
    }

    let a = segment.end.x - segment.start.x;
    let b = segment.start.x;
    let c = segment.end.y - segment.start.y;
    let d = segment.start.y;
    let e = circle.center.x;
    let f = circle.center.y;

    let qa = a.mul_add(a, c * c);
    if qa == 0.0 {
        return Err(Degeneracy::ZeroLengthSegment.into());
    }
    let qb = 2.0 * (a * b - a * e + c * d - c * f);
    let qc = b * b + d * d + e * e + f * f - r * r - 2.0 * (b * e + d * f);
    let disc = qb * qb - 4.0 * qa * qc;

    let mut roots = Vec::with_capacity(2);
    if tangency.is_tangent(disc, qa, qb, qc) {
        roots.push(-qb / (2.0 * qa));
    } else if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        roots.push(-(qb + sqrt_disc) / (2.0 * qa));
        roots.push(-(qb - sqrt_disc) / (2.0 * qa));
    }

    let mut hits: Vec<Hit> = roots
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| Hit {
            t,
            point: segment.point_at(t),
        })
        .collect();
    hits.sort_by(|lhs, rhs| lhs.t.total_cmp(&rhs.t));

    Ok(Intersections { hits })
}
