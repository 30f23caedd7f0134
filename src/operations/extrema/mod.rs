mod align;
mod apply;
mod plan;
mod select;

pub use plan::{SplitEntry, SplitPlan};
pub use select::SelectionMap;

use std::f64::consts::FRAC_PI_4;

use tracing::{debug, info};

use crate::error::{OperationError, Result};
use crate::math::TOLERANCE;
use crate::outline::{GlyphId, OutlineStore};

/// Configuration for one extremum insertion run.
#[derive(Debug, Clone, Copy)]
pub struct ExtremaConfig {
    /// Rotation of the analysis frame, in radians.
    pub angle: f64,
    /// Solve for extrema along the rotated X axis.
    pub horizontal: bool,
    /// Solve for extrema along the rotated Y axis.
    pub vertical: bool,
    /// Snap split boundaries to the integer grid (π/4 only).
    pub round_aligned: bool,
}

impl Default for ExtremaConfig {
    fn default() -> Self {
        Self {
            angle: FRAC_PI_4,
            horizontal: true,
            vertical: true,
            round_aligned: true,
        }
    }
}

/// Inserts on-curve points at a glyph's curve extrema under a rotated axis.
///
/// Resolves the segment scope from the glyph's selection (falling back
/// to all segments), plans the splits from read-only snapshots, then
/// mutates the glyph inside one named undo group and deselects it. All
/// planning precedes the first mutation, so a planning failure leaves
/// the glyph untouched.
pub struct AddExtrema {
    glyph: GlyphId,
    config: ExtremaConfig,
}

impl AddExtrema {
    /// Creates a new `AddExtrema` operation.
    ///
    /// # Errors
    ///
    /// Returns an error if both axis flags are disabled; the operation
    /// must cut somewhere.
    pub fn new(glyph: GlyphId, config: ExtremaConfig) -> Result<Self> {
        if !config.horizontal && !config.vertical {
            return Err(OperationError::InvalidInput(
                "at least one of horizontal or vertical must be enabled".into(),
            )
            .into());
        }
        Ok(Self { glyph, config })
    }

    /// Executes the full pipeline against one glyph.
    ///
    /// Returns the number of inserted on-curve extremum points.
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph is not in the store, a contour is
    /// malformed, or the mutation phase fails (the undo group then
    /// restores the glyph).
    pub fn execute(&self, store: &mut OutlineStore) -> Result<usize> {
        let selection = select::resolve_selection(store, self.glyph)?;
        let mut split_plan = plan::plan_splits(store, self.glyph, &selection, &self.config)?;
        if self.config.round_aligned && (self.config.angle - FRAC_PI_4).abs() < TOLERANCE {
            split_plan = align::round_aligned(split_plan);
        }

        let name = store.glyph(self.glyph)?.name.clone();
        debug!(glyph = %name, entries = split_plan.len(), "applying split plan");
        let label = format!("add extrema in {name}");
        let inserted = store.edit_glyph(self.glyph, &label, |store| {
            apply::apply_plan(store, self.glyph, &split_plan)
        })?;
        store.deselect(self.glyph)?;
        info!(glyph = %name, inserted, "inserted extremum points");
        Ok(inserted)
    }
}
