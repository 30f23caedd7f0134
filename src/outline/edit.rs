use tracing::debug;

use crate::error::Result;

use super::contour::{ContourData, ContourId};
use super::glyph::GlyphId;
use super::OutlineStore;

impl OutlineStore {
    /// Runs a named, undoable edit against one glyph.
    ///
    /// The glyph's contour data is snapshotted before `f` runs; if `f`
    /// returns an error every contour is restored from the snapshot
    /// before the error propagates, so the glyph is either fully
    /// updated or untouched. Edits inside the scope must be limited to
    /// the glyph's contours.
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph or one of its contours is not
    /// found, or if `f` fails (after rollback).
    pub fn edit_glyph<T>(
        &mut self,
        glyph: GlyphId,
        name: &str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let snapshot: Vec<(ContourId, ContourData)> = {
            let contour_ids = self.glyph(glyph)?.contours.clone();
            let mut saved = Vec::with_capacity(contour_ids.len());
            for id in contour_ids {
                saved.push((id, self.contour(id)?.clone()));
            }
            saved
        };

        debug!(edit = name, "opening undo group");
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                for (id, data) in snapshot {
                    if let Ok(slot) = self.contour_mut(id) {
                        *slot = data;
                    }
                }
                debug!(edit = name, "rolled back undo group");
                Err(err)
            }
        }
    }
}
