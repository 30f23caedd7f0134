use super::contour::ContourId;

slotmap::new_key_type! {
    /// Unique identifier for a glyph in the outline store.
    pub struct GlyphId;
}

/// Data associated with a glyph: an ordered collection of contours.
#[derive(Debug, Clone)]
pub struct GlyphData {
    /// Glyph name, used to label undo groups.
    pub name: String,
    /// The ordered contour ids.
    pub contours: Vec<ContourId>,
}

impl GlyphData {
    /// Creates glyph data from a name and contour list.
    #[must_use]
    pub fn new(name: impl Into<String>, contours: Vec<ContourId>) -> Self {
        Self {
            name: name.into(),
            contours,
        }
    }
}
