use crate::error::OutlineError;
use crate::math::Point2;

use super::point::{ContourPoint, PointType};
use super::segment::{segments_of, Segment};

slotmap::new_key_type! {
    /// Unique identifier for a contour in the outline store.
    pub struct ContourId;
}

/// Data associated with a contour: a closed loop of points.
///
/// The point list is cyclic; by convention point 0 is on-curve and each
/// segment ends at an on-curve point. `MakeContour` validates these
/// invariants on construction.
#[derive(Debug, Clone, Default)]
pub struct ContourData {
    /// The ordered, cyclic point list.
    pub points: Vec<ContourPoint>,
}

impl ContourData {
    /// Creates contour data from a point list, without validation.
    #[must_use]
    pub fn new(points: Vec<ContourPoint>) -> Self {
        Self { points }
    }

    /// Returns the derived segment views of this contour.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        segments_of(&self.points)
    }

    /// Inserts a point at `index`, shifting later points.
    ///
    /// The inserted point is unselected.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than the point count.
    pub fn insert_point(
        &mut self,
        index: usize,
        position: Point2,
        typ: PointType,
        smooth: bool,
    ) -> Result<(), OutlineError> {
        if index > self.points.len() {
            return Err(OutlineError::PointIndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.points.insert(
            index,
            ContourPoint {
                position,
                typ,
                smooth,
                selected: false,
            },
        );
        Ok(())
    }

    /// Clears the selection flag of every point.
    pub fn deselect(&mut self) {
        for point in &mut self.points {
            point.selected = false;
        }
    }

    /// Whether any point of this contour is selected.
    #[must_use]
    pub fn has_any_selection(&self) -> bool {
        self.points.iter().any(|p| p.selected)
    }
}
