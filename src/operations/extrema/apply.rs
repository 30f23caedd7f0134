use crate::error::{OutlineError, Result};
use crate::outline::{GlyphId, OutlineStore, PointType};

use super::plan::SplitPlan;

/// Applies a split plan to the live glyph, replacing each planned curve
/// segment with its chain of sub-curves.
///
/// Precondition: within a contour, entries must be ordered by
/// descending segment index (the planner's production order), so that
/// insertions for one segment never shift the point indices of entries
/// still to be applied.
///
/// Returns the number of inserted on-curve extremum points.
pub(super) fn apply_plan(
    store: &mut OutlineStore,
    glyph: GlyphId,
    plan: &SplitPlan,
) -> Result<usize> {
    let contour_ids = store.glyph(glyph)?.contours.clone();
    let mut inserted = 0usize;

    for entry in plan {
        let &contour_id = contour_ids.get(entry.contour).ok_or_else(|| {
            OutlineError::EntityNotFound(format!("contour index {}", entry.contour))
        })?;
        let contour = store.contour_mut(contour_id)?;
        let segments = contour.segments();
        let segment = segments.get(entry.segment).ok_or_else(|| {
            OutlineError::InvalidContour(format!("segment index {} out of range", entry.segment))
        })?;
        let (first_handle, second_handle) = match segment.points[..] {
            [h1, h2, _] => (h1, h2),
            _ => {
                return Err(OutlineError::InvalidContour(format!(
                    "segment {} is not a two-handle curve",
                    entry.segment
                ))
                .into())
            }
        };
        let Some(last_group) = entry.groups.last() else {
            continue;
        };

        // Shape continuity at the tail and head: the original handles
        // are repositioned, not replaced, so the first point's identity
        // survives as the tail of the previous segment.
        contour.points[second_handle].position = last_group[2];
        contour.points[first_handle].position = entry.groups[0][1];

        // Interior points go in right after the first handle, walked in
        // reverse so repeated insertion at one index yields curve order.
        // The overall-last group's tail handle and the overall-first
        // group's head handle were consumed by the rewrites above; each
        // group contributes [p0, p1, p2] with p0 the on-curve boundary.
        let group_count = entry.groups.len();
        for (gi, group) in entry.groups.iter().rev().enumerate() {
            for (pj, point) in group[..3].iter().rev().enumerate() {
                if gi == 0 && pj == 0 {
                    continue;
                }
                if gi == group_count - 1 && pj > 0 {
                    continue;
                }
                let (typ, smooth) = if pj == 2 {
                    (PointType::Curve, true)
                } else {
                    (PointType::OffCurve, false)
                };
                contour.insert_point(first_handle + 1, *point, typ, smooth)?;
                if pj == 2 {
                    inserted += 1;
                }
            }
        }
    }
    Ok(inserted)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::cubic_2d::cubic_point_at;
    use crate::math::Point2;
    use crate::operations::creation::{MakeContour, MakeGlyph};
    use crate::operations::extrema::plan::{coordinate_runs, SplitEntry};
    use crate::outline::{ContourPoint, SegmentKind};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// One curve segment from (0,0) to (100,0) plus a closing line.
    fn arch_glyph(store: &mut OutlineStore) -> GlyphId {
        let contour = MakeContour::new(vec![
            ContourPoint::line(0.0, 0.0),
            ContourPoint::off_curve(0.0, 100.0),
            ContourPoint::off_curve(100.0, 100.0),
            ContourPoint::curve(100.0, 0.0),
        ])
        .execute(store)
        .unwrap();
        MakeGlyph::new("arch", vec![contour]).execute(store).unwrap()
    }

    #[test]
    fn single_split_inserts_three_points() {
        let mut store = OutlineStore::new();
        let glyph = arch_glyph(&mut store);

        // Split the arch at its apex (t = 0.5, de Casteljau midpoints).
        let original = [p(0.0, 0.0), p(0.0, 100.0), p(100.0, 100.0), p(100.0, 0.0)];
        let groups = vec![
            [p(0.0, 0.0), p(0.0, 50.0), p(25.0, 75.0), p(50.0, 75.0)],
            [p(50.0, 75.0), p(75.0, 75.0), p(100.0, 50.0), p(100.0, 0.0)],
        ];
        let plan = vec![SplitEntry {
            contour: 0,
            segment: 0,
            groups,
        }];
        let inserted = apply_plan(&mut store, glyph, &plan).unwrap();
        assert_eq!(inserted, 1);

        let contour_id = store.glyph(glyph).unwrap().contours[0];
        let contour = store.contour(contour_id).unwrap();
        assert_eq!(contour.points.len(), 7);

        // Point run: start, h, h, apex(curve, smooth), h, h, end.
        assert_eq!(contour.points[1].position, p(0.0, 50.0));
        assert_eq!(contour.points[2].position, p(25.0, 75.0));
        assert_eq!(contour.points[3].position, p(50.0, 75.0));
        assert_eq!(contour.points[3].typ, PointType::Curve);
        assert!(contour.points[3].smooth);
        assert!(!contour.points[3].selected);
        assert_eq!(contour.points[4].position, p(75.0, 75.0));
        assert_eq!(contour.points[4].typ, PointType::OffCurve);
        assert_eq!(contour.points[5].position, p(100.0, 50.0));
        assert_eq!(contour.points[6].position, p(100.0, 0.0));

        // The segment list now holds two curves plus the closing line.
        let segments = contour.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].kind, SegmentKind::Curve);
        assert_eq!(segments[1].kind, SegmentKind::Curve);
        assert_eq!(segments[2].kind, SegmentKind::Line);

        // Sampled shape of the two new segments matches the original.
        let runs = coordinate_runs(&store, glyph).unwrap();
        for (piece, (t0, t1)) in runs[0][..2].iter().zip([(0.0, 0.5), (0.5, 1.0)]) {
            let piece: [Point2; 4] = [piece[0], piece[1], piece[2], piece[3]];
            for i in 0..=20 {
                let local = f64::from(i) / 20.0;
                let global = t0 + (t1 - t0) * local;
                let expected = cubic_point_at(&original, global);
                let actual = cubic_point_at(&piece, local);
                assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
                assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn missing_contour_index_fails() {
        let mut store = OutlineStore::new();
        let glyph = arch_glyph(&mut store);
        let plan = vec![SplitEntry {
            contour: 7,
            segment: 0,
            groups: vec![[p(0.0, 0.0); 4], [p(0.0, 0.0); 4]],
        }];
        assert!(apply_plan(&mut store, glyph, &plan).is_err());
    }

    #[test]
    fn non_curve_segment_fails() {
        let mut store = OutlineStore::new();
        let glyph = arch_glyph(&mut store);
        // Segment 1 is the closing line; it has no handle pair.
        let plan = vec![SplitEntry {
            contour: 0,
            segment: 1,
            groups: vec![[p(0.0, 0.0); 4], [p(0.0, 0.0); 4]],
        }];
        assert!(apply_plan(&mut store, glyph, &plan).is_err());
    }
}
