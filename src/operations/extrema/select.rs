use std::collections::BTreeMap;

use crate::error::Result;
use crate::outline::{GlyphId, OutlineStore};

/// Scope of one insertion run: contour index → ascending segment indices.
pub type SelectionMap = BTreeMap<usize, Vec<usize>>;

/// Resolves which segments are in scope for processing.
///
/// When the glyph has no selection anywhere, every segment of every
/// contour is in scope. Otherwise only segments with their own selected
/// flag set are; any selection state disables the implicit select-all
/// fallback, so contours with no selected segments contribute nothing.
pub(super) fn resolve_selection(store: &OutlineStore, glyph: GlyphId) -> Result<SelectionMap> {
    let select_all = !store.has_any_selection(glyph)?;
    let mut map = SelectionMap::new();
    for (contour_index, &contour_id) in store.glyph(glyph)?.contours.iter().enumerate() {
        for segment in store.contour(contour_id)?.segments() {
            if segment.selected || select_all {
                map.entry(contour_index).or_default().push(segment.index);
            }
        }
    }
    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::outline::{ContourData, ContourPoint, GlyphData};

    fn two_squares(selected_point: Option<(usize, usize)>) -> (OutlineStore, GlyphId) {
        let mut store = OutlineStore::new();
        let mut ids = Vec::new();
        for c in 0..2 {
            let offset = if c == 0 { 0.0 } else { 200.0 };
            let mut points = vec![
                ContourPoint::line(offset, 0.0),
                ContourPoint::line(offset + 100.0, 0.0),
                ContourPoint::line(offset + 100.0, 100.0),
                ContourPoint::line(offset, 100.0),
            ];
            if let Some((sel_c, sel_p)) = selected_point {
                if sel_c == c {
                    points[sel_p].selected = true;
                }
            }
            ids.push(store.add_contour(ContourData::new(points)));
        }
        let glyph = store.add_glyph(GlyphData::new("n", ids));
        (store, glyph)
    }

    #[test]
    fn no_selection_scopes_everything() {
        let (store, glyph) = two_squares(None);
        let map = resolve_selection(&store, glyph).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&0], vec![0, 1, 2, 3]);
        assert_eq!(map[&1], vec![0, 1, 2, 3]);
    }

    #[test]
    fn any_selection_disables_fallback() {
        // Point 2 of contour 1 belongs to its segment 1.
        let (store, glyph) = two_squares(Some((1, 2)));
        let map = resolve_selection(&store, glyph).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&1], vec![1]);
    }
}
