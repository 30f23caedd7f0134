use tracing::debug;

use crate::error::{OutlineError, Result};
use crate::math::cubic_2d::{cubic_extrema, split_cubic_at};
use crate::math::transform_2d::rotate_2d;
use crate::math::{Point2, TOLERANCE};
use crate::outline::{GlyphId, OutlineStore, SegmentKind};

use super::select::SelectionMap;
use super::ExtremaConfig;

/// One planned segment replacement: the ordered sub-curve point groups
/// that stand in for the original curve segment.
#[derive(Debug, Clone)]
pub struct SplitEntry {
    /// Contour index within the glyph.
    pub contour: usize,
    /// Segment index within the contour.
    pub segment: usize,
    /// Consecutive 4-point cubics; concatenated they reproduce the
    /// original curve exactly (before any grid rounding).
    pub groups: Vec<[Point2; 4]>,
}

/// The full plan of one insertion run, in application order.
pub type SplitPlan = Vec<SplitEntry>;

/// Builds the per-contour coordinate run: for every segment, its point
/// positions prefixed with the previous segment's anchor (cyclic), so
/// each cubic is self-contained.
pub(super) fn coordinate_runs(
    store: &OutlineStore,
    glyph: GlyphId,
) -> Result<Vec<Vec<Vec<Point2>>>> {
    let mut runs = Vec::new();
    for &contour_id in &store.glyph(glyph)?.contours {
        let contour = store.contour(contour_id)?;
        let segments = contour.segments();
        let count = segments.len();
        let mut contour_runs = Vec::with_capacity(count);
        for (index, segment) in segments.iter().enumerate() {
            let previous = &segments[(index + count - 1) % count];
            let previous_anchor = previous.points[previous.points.len() - 1];
            let mut coords = Vec::with_capacity(segment.points.len() + 1);
            coords.push(contour.points[previous_anchor].position);
            coords.extend(segment.points.iter().map(|&i| contour.points[i].position));
            contour_runs.push(coords);
        }
        runs.push(contour_runs);
    }
    Ok(runs)
}

/// Plans the splits for every in-scope curve segment.
///
/// Segments are visited in reverse index order within each contour so
/// that the mutator's later insertions never invalidate the indices of
/// entries still to be applied.
pub(super) fn plan_splits(
    store: &OutlineStore,
    glyph: GlyphId,
    selection: &SelectionMap,
    config: &ExtremaConfig,
) -> Result<SplitPlan> {
    let runs = coordinate_runs(store, glyph)?;
    let origin = Point2::origin();
    let mut plan = SplitPlan::new();

    for (&contour_index, segment_indices) in selection {
        let contour_id = store.glyph(glyph)?.contours[contour_index];
        let segments = store.contour(contour_id)?.segments();
        for &segment_index in segment_indices.iter().rev() {
            if segments[segment_index].kind != SegmentKind::Curve {
                continue;
            }
            let coords = &runs[contour_index][segment_index];
            let [p0, p1, p2, p3] = match coords[..] {
                [p0, p1, p2, p3] => [p0, p1, p2, p3],
                _ => {
                    return Err(OutlineError::InvalidContour(format!(
                        "curve segment {segment_index} of contour {contour_index} \
                         spans {} points, expected 4",
                        coords.len()
                    ))
                    .into())
                }
            };

            // Extrema are solved in the rotated frame; the split itself
            // happens on the unrotated points, so the inserted geometry
            // stays in glyph coordinates.
            let rotated: Vec<Point2> = [p0, p1, p2, p3]
                .iter()
                .map(|p| rotate_2d(p, config.angle, &origin))
                .collect();
            let mut params = cubic_extrema(
                &rotated[0],
                &rotated[1],
                &rotated[2],
                &rotated[3],
                config.horizontal,
                config.vertical,
            );

            // A lone root at an endpoint is no true interior extremum;
            // splitting there would add a zero-length piece.
            if params.len() == 1
                && (params[0] < TOLERANCE || (1.0 - params[0]) < TOLERANCE)
            {
                continue;
            }

            // split_cubic_at needs strictly increasing interior values.
            params.retain(|&t| t > TOLERANCE && t < 1.0 - TOLERANCE);
            params.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
            if params.is_empty() {
                continue;
            }

            let groups = split_cubic_at(&p0, &p1, &p2, &p3, &params)?;
            debug!(
                contour = contour_index,
                segment = segment_index,
                splits = params.len(),
                "planned curve split"
            );
            plan.push(SplitEntry {
                contour: contour_index,
                segment: segment_index,
                groups,
            });
        }
    }
    Ok(plan)
}
