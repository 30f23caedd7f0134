use crate::error::{OutlineError, Result};
use crate::outline::{ContourData, ContourId, ContourPoint, OutlineStore, PointType};

/// Creates a closed contour from a point list.
///
/// Validates the cyclic segment structure before inserting: point 0
/// must be on-curve, every `Curve` anchor must be preceded by exactly
/// two off-curves, every `Line` anchor by none, and every `QCurve`
/// anchor by at least one.
pub struct MakeContour {
    points: Vec<ContourPoint>,
}

impl MakeContour {
    /// Creates a new `MakeContour` operation.
    #[must_use]
    pub fn new(points: Vec<ContourPoint>) -> Self {
        Self { points }
    }

    /// Executes the operation, creating the contour in the outline store.
    ///
    /// # Errors
    ///
    /// Returns an error if the point list violates the contour invariants.
    pub fn execute(&self, store: &mut OutlineStore) -> Result<ContourId> {
        validate(&self.points)?;
        Ok(store.add_contour(ContourData::new(self.points.clone())))
    }
}

fn validate(points: &[ContourPoint]) -> Result<()> {
    if points.is_empty() {
        return Err(OutlineError::InvalidContour("contour has no points".into()).into());
    }
    if !points[0].is_on_curve() {
        return Err(
            OutlineError::InvalidContour("contour must start with an on-curve point".into())
                .into(),
        );
    }

    // Walk cyclically from point 1, counting the off-curve run before
    // each anchor; the run after the last anchor wraps onto point 0.
    let mut run = 0usize;
    for index in (1..points.len()).chain(std::iter::once(0)) {
        let point = &points[index];
        match point.typ {
            PointType::OffCurve => run += 1,
            PointType::Line => {
                if run != 0 {
                    return Err(OutlineError::InvalidContour(format!(
                        "line anchor at point {index} preceded by {run} off-curves"
                    ))
                    .into());
                }
            }
            PointType::Curve => {
                if run != 2 {
                    return Err(OutlineError::InvalidContour(format!(
                        "curve anchor at point {index} preceded by {run} off-curves, expected 2"
                    ))
                    .into());
                }
                run = 0;
            }
            PointType::QCurve => {
                if run == 0 {
                    return Err(OutlineError::InvalidContour(format!(
                        "qcurve anchor at point {index} has no off-curves"
                    ))
                    .into());
                }
                run = 0;
            }
        }
    }
    Ok(())
}
