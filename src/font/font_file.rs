use std::io::{Read, Seek};

use crate::error::FontResult;

use super::{
    index::ProbeMap,
    parse::{FontHeader, FontParser},
    Glyph,
};

/// An opened tinyfont file.
///
/// The offset index is built eagerly from the on-disk index table; glyphs
/// are decoded lazily on first use and cached for the lifetime of the file.
#[derive(Debug)]
pub struct FontFile<R> {
    parser: FontParser<R>,
    copyright: String,
    em: u16,
    offsets: ProbeMap<u32>,
    glyphs: ProbeMap<Glyph>,
    /// File position where the glyph-record region begins; stored offsets
    /// are relative to it.
    glyphs_offset: u64,
}

impl<R: Read + Seek> FontFile<R> {
    pub fn open(reader: R) -> FontResult<Self> {
        let mut parser = FontParser::new(reader);

        let FontHeader { copyright, em } = parser.read_header()?;
        let (offsets, glyphs_offset) = parser.read_offset_index()?;

        log::debug!("opened tinyfont: em {}, {} glyphs", em, offsets.len());

        Ok(Self {
            parser,
            copyright,
            em,
            glyphs: ProbeMap::with_capacity(offsets.len()),
            offsets,
            glyphs_offset,
        })
    }

    pub fn em(&self) -> u16 {
        self.em
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Resolves a glyph, decoding and caching it on first use.
    ///
    /// A code point absent from the index (or not representable in the
    /// 16-bit on-disk format) is not an error: the caller renders it as
    /// blank with advance width 0.
    pub fn glyph(&mut self, codepoint: char) -> FontResult<Option<&Glyph>> {
        let codepoint = codepoint as u32;

        let key = match u16::try_from(codepoint) {
            Ok(key) => key,
            Err(..) => {
                log::warn!("code point U+{:X} not representable in tinyfont", codepoint);
                return Ok(None);
            }
        };

        if self.glyphs.get(key).is_none() {
            let offset = match self.offsets.get(key) {
                Some(&offset) => offset,
                None => {
                    log::warn!("no glyph for U+{:04X}", codepoint);
                    return Ok(None);
                }
            };

            let glyph = self.parser.read_glyph(self.glyphs_offset + offset as u64)?;
            self.glyphs.insert(key, glyph);
        }

        Ok(self.glyphs.get(key))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::{
        font::FontWriter,
        geometry::{Point, Segment},
    };

    fn sample_font() -> Vec<u8> {
        let glyphs = [
            Glyph::new(
                65,
                10,
                vec![
                    Segment::MoveTo(Point::new(0.0, 0.0)),
                    Segment::LineTo(Point::new(10.0, 10.0)),
                ],
            ),
            Glyph::new(32, 5, Vec::new()),
            Glyph::new(
                66,
                12,
                vec![
                    Segment::MoveTo(Point::new(0.0, 0.0)),
                    Segment::CurveTo {
                        first_control_point: Point::new(2.0, 8.0),
                        second_control_point: Point::new(8.0, 8.0),
                        end: Point::new(10.0, 0.0),
                    },
                ],
            ),
        ];

        let mut bytes = Vec::new();
        FontWriter::new(&mut bytes)
            .write_font("example font", 10, &glyphs)
            .unwrap();
        bytes
    }

    #[test]
    fn round_trips_header_and_glyphs() {
        let mut font = FontFile::open(Cursor::new(sample_font())).unwrap();

        assert_eq!(font.em(), 10);
        assert_eq!(font.copyright(), "example font");

        // decoded record code points match the index keys they resolve from
        for (codepoint, width, segment_count) in [('A', 10, 2), (' ', 5, 0), ('B', 12, 2)] {
            let glyph = font.glyph(codepoint).unwrap().unwrap();
            assert_eq!(glyph.codepoint, codepoint as u32);
            assert_eq!(glyph.width, width);
            assert_eq!(glyph.segments.len(), segment_count);
        }
    }

    #[test]
    fn empty_command_stream_decodes_to_empty_glyph() {
        let mut font = FontFile::open(Cursor::new(sample_font())).unwrap();

        let space = font.glyph(' ').unwrap().unwrap();
        assert!(space.segments.is_empty());
    }

    #[test]
    fn missing_glyph_is_none_not_error() {
        let mut font = FontFile::open(Cursor::new(sample_font())).unwrap();

        assert!(font.glyph('z').unwrap().is_none());
        assert!(font.glyph('\u{1F600}').unwrap().is_none());
    }

    #[test]
    fn second_request_returns_cached_glyph() {
        let mut font = FontFile::open(Cursor::new(sample_font())).unwrap();

        let first: *const Glyph = font.glyph('A').unwrap().unwrap();
        let second: *const Glyph = font.glyph('A').unwrap().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_bad_magic() {
        let result = FontFile::open(Cursor::new(b"notafont\x00\x00".to_vec()));

        assert!(matches!(
            result,
            Err(crate::FontError::BadMagic { found }) if &found == b"notafont"
        ));
    }
}
