use crate::math::Point2;

use super::plan::SplitPlan;

/// Snaps planned split boundaries to the integer grid.
///
/// For every adjacent pair of sub-curve groups, the shared boundary
/// point is rounded to the nearest integer coordinate and the two
/// flanking handles are forced to an equal, rounded, symmetric offset
/// from it: per axis, `step = round((|off1| + |off2|) / 2)`, with each
/// handle's sign taken from its original offset. This is a deliberate,
/// bounded shape perturbation; it does not preserve the curve exactly.
///
/// Offsets are measured from the unrounded boundary, so the direction
/// of a handle relative to the true split point decides its sign. A
/// non-positive offset moves in the negative direction.
///
/// Only the π/4 angle has a defined adjustment rule; the caller skips
/// this pass for any other angle.
#[must_use]
pub(super) fn round_aligned(mut plan: SplitPlan) -> SplitPlan {
    for entry in &mut plan {
        for i in 0..entry.groups.len().saturating_sub(1) {
            let base = entry.groups[i][3];
            let rounded = Point2::new(base.x.round(), base.y.round());
            let off1 = entry.groups[i][2] - base;
            let off2 = entry.groups[i + 1][1] - base;

            let step_x = ((off1.x.abs() + off2.x.abs()) / 2.0).round();
            let step_y = ((off1.y.abs() + off2.y.abs()) / 2.0).round();

            entry.groups[i][2] = Point2::new(
                signed_step(rounded.x, step_x, off1.x),
                signed_step(rounded.y, step_y, off1.y),
            );
            entry.groups[i][3] = rounded;
            entry.groups[i + 1][0] = rounded;
            entry.groups[i + 1][1] = Point2::new(
                signed_step(rounded.x, step_x, off2.x),
                signed_step(rounded.y, step_y, off2.y),
            );
        }
    }
    plan
}

fn signed_step(base: f64, step: f64, offset: f64) -> f64 {
    if offset > 0.0 {
        base + step
    } else {
        base - step
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::extrema::plan::SplitEntry;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn entry(groups: Vec<[Point2; 4]>) -> SplitEntry {
        SplitEntry {
            contour: 0,
            segment: 0,
            groups,
        }
    }

    #[test]
    fn symmetric_positive_offsets() {
        // Boundary at (10.3, 20.6); approaching handle offset (3, 3),
        // leaving handle offset (5, 5). Per axis step = round(8/2) = 4.
        let base = p(10.3, 20.6);
        let plan = vec![entry(vec![
            [p(0.0, 0.0), p(1.0, 1.0), p(base.x + 3.0, base.y + 3.0), base],
            [base, p(base.x + 5.0, base.y + 5.0), p(30.0, 30.0), p(40.0, 40.0)],
        ])];
        let plan = round_aligned(plan);

        let rounded = p(10.0, 21.0);
        assert_eq!(plan[0].groups[0][3], rounded);
        assert_eq!(plan[0].groups[1][0], rounded);
        let off1 = plan[0].groups[0][2] - rounded;
        let off2 = plan[0].groups[1][1] - rounded;
        assert_relative_eq!(off1.x, 4.0);
        assert_relative_eq!(off1.y, 4.0);
        assert_relative_eq!(off2.x, 4.0);
        assert_relative_eq!(off2.y, 4.0);
    }

    #[test]
    fn signs_follow_original_offsets() {
        let base = p(0.0, 0.0);
        let plan = vec![entry(vec![
            [p(-10.0, 10.0), p(-8.0, 8.0), p(-2.0, 1.5), base],
            [base, p(2.0, -1.5), p(8.0, -8.0), p(10.0, -10.0)],
        ])];
        let plan = round_aligned(plan);

        // step = round((2 + 2) / 2) = 2 on x, round((1.5 + 1.5) / 2) = 2 on y.
        assert_eq!(plan[0].groups[0][2], p(-2.0, 2.0));
        assert_eq!(plan[0].groups[1][1], p(2.0, -2.0));
    }

    #[test]
    fn zero_offset_is_pushed_negative() {
        let base = p(5.4, 5.4);
        let plan = vec![entry(vec![
            [p(0.0, 0.0), p(1.0, 1.0), p(5.4, 2.4), base],
            [base, p(5.4, 8.4), p(9.0, 9.0), p(10.0, 10.0)],
        ])];
        let plan = round_aligned(plan);

        // X offsets are exactly zero on both handles: step_x = 0, but
        // the zero offset still moves in the negative direction.
        assert_eq!(plan[0].groups[0][2].x, 5.0);
        // Y: step = round((3 + 3) / 2) = 3; approaching handle below,
        // leaving handle above.
        assert_eq!(plan[0].groups[0][2].y, 2.0);
        assert_eq!(plan[0].groups[1][1].y, 8.0);
    }

    #[test]
    fn single_group_entries_are_untouched() {
        let groups = vec![[p(0.0, 0.0), p(1.1, 1.1), p(2.2, 2.2), p(3.3, 3.3)]];
        let plan = vec![entry(groups.clone())];
        let plan = round_aligned(plan);
        assert_eq!(plan[0].groups, groups);
    }

    #[test]
    fn chained_boundaries_are_each_rounded() {
        let plan = vec![entry(vec![
            [p(0.0, 0.0), p(1.0, 1.0), p(2.3, 2.3), p(3.4, 3.4)],
            [p(3.4, 3.4), p(4.5, 4.5), p(5.6, 5.6), p(6.7, 6.7)],
            [p(6.7, 6.7), p(7.8, 7.8), p(8.9, 8.9), p(10.0, 10.0)],
        ])];
        let plan = round_aligned(plan);
        assert_eq!(plan[0].groups[0][3], p(3.0, 3.0));
        assert_eq!(plan[0].groups[1][0], p(3.0, 3.0));
        assert_eq!(plan[0].groups[1][3], p(7.0, 7.0));
        assert_eq!(plan[0].groups[2][0], p(7.0, 7.0));
    }
}
