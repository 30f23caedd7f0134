use crate::math::Point2;

/// Point type vocabulary of the outline model.
///
/// An on-curve point's type names the segment that ends at it; control
/// handles are `OffCurve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    /// Anchor ending a straight line segment.
    Line,
    /// Bézier control handle.
    OffCurve,
    /// Anchor ending a cubic curve segment.
    Curve,
    /// Anchor ending a quadratic curve segment.
    QCurve,
}

impl PointType {
    /// Whether this point lies on the curve (is not a control handle).
    #[must_use]
    pub fn is_on_curve(self) -> bool {
        !matches!(self, PointType::OffCurve)
    }
}

/// A single point of a contour, with its editing flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourPoint {
    /// Position in glyph coordinates.
    pub position: Point2,
    /// Point type.
    pub typ: PointType,
    /// Tangent-continuous join marker; only meaningful on-curve.
    pub smooth: bool,
    /// Host-editor selection flag.
    pub selected: bool,
}

impl ContourPoint {
    /// Creates a point with the given type; smooth and selected are off.
    #[must_use]
    pub fn new(x: f64, y: f64, typ: PointType) -> Self {
        Self {
            position: Point2::new(x, y),
            typ,
            smooth: false,
            selected: false,
        }
    }

    /// Creates a line anchor.
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, PointType::Line)
    }

    /// Creates an off-curve control handle.
    #[must_use]
    pub fn off_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, PointType::OffCurve)
    }

    /// Creates a cubic curve anchor.
    #[must_use]
    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, PointType::Curve)
    }

    /// Sets the smooth flag.
    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Sets the selection flag.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Whether this point lies on the curve.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        self.typ.is_on_curve()
    }
}
