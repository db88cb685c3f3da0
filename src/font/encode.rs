use std::{collections::HashSet, io::Write};

use crate::{
    error::{FontError, FontResult},
    geometry::{Point, Segment},
};

use super::{Glyph, GLYPH_HEADER_LEN, MAGIC, TAG_CURVE_TO, TAG_LINE_TO, TAG_MOVE_TO};

/// Encoder for the tinyfont binary format.
#[derive(Debug)]
pub struct FontWriter<W> {
    writer: W,
}

impl<W: Write> FontWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_u16(&mut self, n: u16) -> FontResult<()> {
        self.writer.write_all(&n.to_be_bytes())?;

        Ok(())
    }

    /// Writes a complete font: header, index table, then glyph records
    /// back-to-back in encounter order.
    pub fn write_font(&mut self, copyright: &str, em: u16, glyphs: &[Glyph]) -> FontResult<()> {
        let mut seen = HashSet::new();
        for glyph in glyphs {
            if glyph.codepoint > u16::MAX as u32 {
                return Err(FontError::CodepointOutOfRange {
                    codepoint: glyph.codepoint,
                });
            }
            if !seen.insert(glyph.codepoint) {
                return Err(FontError::DuplicateCodepoint {
                    codepoint: glyph.codepoint,
                });
            }
        }

        let streams: Vec<Vec<u8>> = glyphs.iter().map(|g| encode_commands(&g.segments)).collect();

        self.writer.write_all(MAGIC)?;

        let copyright_len = u16::try_from(copyright.len()).map_err(|_| {
            FontError::CopyrightTooLong {
                len: copyright.len(),
            }
        })?;
        self.write_u16(copyright_len)?;
        self.writer.write_all(copyright.as_bytes())?;

        self.write_u16(em)?;

        let index_len = glyphs
            .len()
            .checked_mul(4)
            .and_then(|len| u16::try_from(len).ok())
            .ok_or(FontError::FontTooLarge {
                offset: glyphs.len() * 4,
            })?;
        self.write_u16(index_len)?;

        // index entries: offsets are the cumulative byte length of all
        // previously written glyph records
        let mut offset = 0usize;
        for (glyph, stream) in glyphs.iter().zip(&streams) {
            self.write_u16(glyph.codepoint as u16)?;
            let stored =
                u16::try_from(offset).map_err(|_| FontError::FontTooLarge { offset })?;
            self.write_u16(stored)?;

            offset += GLYPH_HEADER_LEN + stream.len();
        }

        for (glyph, stream) in glyphs.iter().zip(&streams) {
            self.write_u16(glyph.codepoint as u16)?;
            self.write_u16(glyph.width)?;
            let stream_len = u16::try_from(stream.len()).map_err(|_| FontError::FontTooLarge {
                offset: stream.len(),
            })?;
            self.write_u16(stream_len)?;
            self.writer.write_all(stream)?;
        }

        Ok(())
    }
}

fn push_point(stream: &mut Vec<u8>, p: Point) {
    stream.extend_from_slice(&p.x.to_be_bytes());
    stream.extend_from_slice(&p.y.to_be_bytes());
}

/// 12 bytes per move/line, 28 per curve.
pub(crate) fn encode_commands(segments: &[Segment]) -> Vec<u8> {
    let mut stream = Vec::new();

    for &segment in segments {
        match segment {
            Segment::MoveTo(p) => {
                push_point(&mut stream, p);
                stream.extend_from_slice(&TAG_MOVE_TO.to_be_bytes());
            }
            Segment::LineTo(p) => {
                push_point(&mut stream, p);
                stream.extend_from_slice(&TAG_LINE_TO.to_be_bytes());
            }
            Segment::CurveTo {
                first_control_point,
                second_control_point,
                end,
            } => {
                push_point(&mut stream, first_control_point);
                push_point(&mut stream, second_control_point);
                push_point(&mut stream, end);
                stream.extend_from_slice(&TAG_CURVE_TO.to_be_bytes());
            }
        }
    }

    stream
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::font::parse::parse_commands;

    #[test]
    fn command_stream_lengths() {
        let segments = [
            Segment::MoveTo(Point::new(0.0, 0.0)),
            Segment::LineTo(Point::new(4.0, 4.0)),
            Segment::CurveTo {
                first_control_point: Point::new(5.0, 5.0),
                second_control_point: Point::new(6.0, 6.0),
                end: Point::new(7.0, 0.0),
            },
        ];

        let stream = encode_commands(&segments);

        assert_eq!(stream.len(), 12 + 12 + 28);
        assert_eq!(parse_commands(&stream).unwrap(), segments);
    }

    #[test]
    fn rejects_wide_codepoints() {
        let glyph = Glyph::new(0x1F600, 10, Vec::new());
        let mut writer = FontWriter::new(Vec::new());

        assert!(matches!(
            writer.write_font("", 10, &[glyph]),
            Err(FontError::CodepointOutOfRange { codepoint: 0x1F600 })
        ));
    }

    #[test]
    fn rejects_duplicate_codepoints() {
        let glyphs = [Glyph::new(65, 10, Vec::new()), Glyph::new(65, 12, Vec::new())];
        let mut writer = FontWriter::new(Vec::new());

        assert!(matches!(
            writer.write_font("", 10, &glyphs),
            Err(FontError::DuplicateCodepoint { codepoint: 65 })
        ));
    }
}
