mod make_contour;
mod make_glyph;

pub use make_contour::MakeContour;
pub use make_glyph::MakeGlyph;
