use crate::error::Result;
use crate::outline::{ContourId, GlyphData, GlyphId, OutlineStore};

/// Creates a glyph from an ordered list of existing contours.
pub struct MakeGlyph {
    name: String,
    contours: Vec<ContourId>,
}

impl MakeGlyph {
    /// Creates a new `MakeGlyph` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, contours: Vec<ContourId>) -> Self {
        Self {
            name: name.into(),
            contours,
        }
    }

    /// Executes the operation, creating the glyph in the outline store.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced contour is not in the store.
    pub fn execute(&self, store: &mut OutlineStore) -> Result<GlyphId> {
        for &id in &self.contours {
            store.contour(id)?;
        }
        Ok(store.add_glyph(GlyphData::new(self.name.clone(), self.contours.clone())))
    }
}
