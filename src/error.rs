use thiserror::Error;

/// Geometry that cannot feed the intersection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Degeneracy {
    /// Both segment endpoints coincide, so the quadratic has no leading term.
    #[error("line segment has zero length")]
    ZeroLengthSegment,
    /// Circle center and boundary point coincide.
    #[error("circle has zero radius")]
    ZeroRadiusCircle,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Drawing surface dimensions must be finite and strictly positive.
    #[error("invalid surface size {width}x{height}: both sides must be positive")]
    InvalidInput { width: f64, height: f64 },
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] Degeneracy),
}
