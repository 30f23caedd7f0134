pub mod contour;
mod edit;
pub mod glyph;
pub mod point;
pub mod segment;

pub use contour::{ContourData, ContourId};
pub use glyph::{GlyphData, GlyphId};
pub use point::{ContourPoint, PointType};
pub use segment::{Segment, SegmentKind};

use crate::error::OutlineError;
use slotmap::SlotMap;

/// Central arena that owns all outline entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
#[derive(Debug, Default)]
pub struct OutlineStore {
    glyphs: SlotMap<GlyphId, GlyphData>,
    contours: SlotMap<ContourId, ContourData>,
}

impl OutlineStore {
    /// Creates a new, empty outline store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Glyph operations ---

    /// Inserts a glyph and returns its ID.
    pub fn add_glyph(&mut self, data: GlyphData) -> GlyphId {
        self.glyphs.insert(data)
    }

    /// Returns a reference to the glyph data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn glyph(&self, id: GlyphId) -> Result<&GlyphData, OutlineError> {
        self.glyphs
            .get(id)
            .ok_or_else(|| OutlineError::EntityNotFound("glyph".into()))
    }

    /// Returns a mutable reference to the glyph data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn glyph_mut(&mut self, id: GlyphId) -> Result<&mut GlyphData, OutlineError> {
        self.glyphs
            .get_mut(id)
            .ok_or_else(|| OutlineError::EntityNotFound("glyph".into()))
    }

    // --- Contour operations ---

    /// Inserts a contour and returns its ID.
    pub fn add_contour(&mut self, data: ContourData) -> ContourId {
        self.contours.insert(data)
    }

    /// Returns a reference to the contour data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn contour(&self, id: ContourId) -> Result<&ContourData, OutlineError> {
        self.contours
            .get(id)
            .ok_or_else(|| OutlineError::EntityNotFound("contour".into()))
    }

    /// Returns a mutable reference to the contour data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn contour_mut(&mut self, id: ContourId) -> Result<&mut ContourData, OutlineError> {
        self.contours
            .get_mut(id)
            .ok_or_else(|| OutlineError::EntityNotFound("contour".into()))
    }

    // --- Glyph-level selection ---

    /// Whether any point of any of the glyph's contours is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph or one of its contours is not found.
    pub fn has_any_selection(&self, glyph: GlyphId) -> Result<bool, OutlineError> {
        for &contour_id in &self.glyph(glyph)?.contours {
            if self.contour(contour_id)?.has_any_selection() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Clears the selection flag of every point of the glyph.
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph or one of its contours is not found.
    pub fn deselect(&mut self, glyph: GlyphId) -> Result<(), OutlineError> {
        let contour_ids = self.glyph(glyph)?.contours.clone();
        for contour_id in contour_ids {
            self.contour_mut(contour_id)?.deselect();
        }
        Ok(())
    }
}
