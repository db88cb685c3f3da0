use crate::geometry::{Outline, Segment};

#[derive(Debug, Clone)]
pub struct Glyph {
    /// In-memory code points are full Unicode scalar values; the on-disk
    /// format only stores 16 bits, so anything above U+FFFF is rejected at
    /// encode time.
    pub codepoint: u32,
    /// Advance width in font design units.
    pub width: u16,
    pub segments: Vec<Segment>,
}

impl Glyph {
    pub fn new(codepoint: u32, width: u16, segments: Vec<Segment>) -> Self {
        Self {
            codepoint,
            width,
            segments,
        }
    }

    pub fn outline(&self) -> Outline {
        Outline::from_segments(&self.segments)
    }
}
