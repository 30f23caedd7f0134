use super::point::{ContourPoint, PointType};

/// The drawing primitive a segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Straight line between two anchors.
    Line,
    /// Cubic Bézier with two control handles.
    Curve,
    /// Quadratic Bézier.
    QCurve,
}

/// A derived view of one edge of a contour.
///
/// Segments are never stored; they are recomputed from the point list.
/// `points` holds the indices of the segment's own points in contour
/// order, with the closing anchor last. The anchor of the preceding
/// segment (the segment's geometric start) is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Position of this segment within the contour.
    pub index: usize,
    /// Drawing primitive.
    pub kind: SegmentKind,
    /// Indices of the segment's own points; anchor last.
    pub points: Vec<usize>,
    /// Whether any of the segment's own points is selected.
    pub selected: bool,
}

/// Splits a closed contour's point list into segments.
///
/// The walk starts after point 0 (which must be on-curve) and closes a
/// segment at every on-curve point; a trailing off-curve run wraps
/// around to close at point 0.
#[must_use]
pub fn segments_of(points: &[ContourPoint]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut run: Vec<usize> = Vec::new();
    for (i, point) in points.iter().enumerate().skip(1) {
        run.push(i);
        if point.is_on_curve() {
            push_segment(&mut segments, std::mem::take(&mut run), points);
        }
    }
    if !points.is_empty() {
        // Wrap segment: whatever remains closes at point 0.
        run.push(0);
        push_segment(&mut segments, run, points);
    }
    segments
}

fn push_segment(segments: &mut Vec<Segment>, run: Vec<usize>, points: &[ContourPoint]) {
    let anchor = run[run.len() - 1];
    let kind = match points[anchor].typ {
        PointType::Curve => SegmentKind::Curve,
        PointType::QCurve => SegmentKind::QCurve,
        PointType::Line | PointType::OffCurve => SegmentKind::Line,
    };
    let selected = run.iter().any(|&i| points[i].selected);
    segments.push(Segment {
        index: segments.len(),
        kind,
        points: run,
        selected,
    });
}
