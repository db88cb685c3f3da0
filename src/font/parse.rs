use std::io::{Read, Seek, SeekFrom};

use crate::{
    error::{FontError, FontResult},
    geometry::{Point, Segment},
};

use super::{
    index::ProbeMap, Glyph, MAGIC, TAG_CURVE_TO, TAG_LINE_TO, TAG_MOVE_TO,
};

/// Decoder for the tinyfont binary format. All file access (seek + read)
/// goes through here; no other component touches the underlying reader.
#[derive(Debug)]
pub(crate) struct FontParser<R> {
    reader: R,
}

pub(crate) struct FontHeader {
    pub copyright: String,
    pub em: u16,
}

/// Base parsing
impl<R: Read + Seek> FontParser<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_u16(&mut self) -> FontResult<u16> {
        let mut buf = [0; 2];
        self.reader.read_exact(&mut buf)?;

        Ok(u16::from_be_bytes(buf))
    }

    fn read_bytes(&mut self, len: usize) -> FontResult<Vec<u8>> {
        let mut buf = vec![0; len];
        self.reader.read_exact(&mut buf)?;

        Ok(buf)
    }
}

/// Section parsing
impl<R: Read + Seek> FontParser<R> {
    pub fn read_header(&mut self) -> FontResult<FontHeader> {
        let mut magic = [0; 8];
        self.reader.read_exact(&mut magic)?;

        if &magic != MAGIC {
            return Err(FontError::BadMagic { found: magic });
        }

        let copyright_len = self.read_u16()?;
        let copyright = String::from_utf8_lossy(&self.read_bytes(copyright_len as usize)?)
            .into_owned();

        let em = self.read_u16()?;
        if em == 0 {
            return Err(FontError::ZeroEm);
        }

        Ok(FontHeader { copyright, em })
    }

    /// Reads the index table following the header and returns the offset map
    /// together with the file position where the glyph-record region begins
    /// (stored offsets are relative to it).
    pub fn read_offset_index(&mut self) -> FontResult<(ProbeMap<u32>, u64)> {
        let index_len = self.read_u16()?;
        let glyph_count = index_len as usize / 4;

        let mut offsets = ProbeMap::with_capacity(glyph_count);
        for _ in 0..glyph_count {
            let codepoint = self.read_u16()?;
            let offset = self.read_u16()?;
            offsets.insert(codepoint, offset as u32);
        }

        let glyphs_offset = self.reader.stream_position()?;

        Ok((offsets, glyphs_offset))
    }

    /// Decodes one glyph record at an absolute file offset.
    pub fn read_glyph(&mut self, offset: u64) -> FontResult<Glyph> {
        self.reader.seek(SeekFrom::Start(offset))?;

        let codepoint = self.read_u16()?;
        let width = self.read_u16()?;
        let command_len = self.read_u16()?;

        let commands = self.read_bytes(command_len as usize)?;
        let segments = parse_commands(&commands)?;

        Ok(Glyph::new(codepoint as u32, width, segments))
    }
}

/// Parses a glyph's command bytes back into a segment sequence.
///
/// The stream is a run of 4-byte big-endian words. Each segment is two
/// floats followed by an `m`/`l` tag word, or six floats followed by a `c`
/// tag word, so after two floats the next word is either a tag or the third
/// float of a curve; in the latter case the word after the sixth float must
/// be the curve tag.
pub(crate) fn parse_commands(bytes: &[u8]) -> FontResult<Vec<Segment>> {
    if bytes.len() % 4 != 0 {
        return Err(FontError::TruncatedCommandStream { len: bytes.len() });
    }

    let words: Vec<[u8; 4]> = bytes
        .chunks_exact(4)
        .map(|chunk| chunk.try_into().unwrap())
        .collect();

    let float_at = |index: usize| -> FontResult<f32> {
        words
            .get(index)
            .map(|word| f32::from_be_bytes(*word))
            .ok_or(FontError::TruncatedCommandStream { len: bytes.len() })
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    while cursor < words.len() {
        let x = float_at(cursor)?;
        let y = float_at(cursor + 1)?;

        let tag_index = cursor + 2;
        let tag = words
            .get(tag_index)
            .map(|word| u32::from_be_bytes(*word))
            .ok_or(FontError::TruncatedCommandStream { len: bytes.len() })?;

        match tag {
            TAG_MOVE_TO => {
                segments.push(Segment::MoveTo(Point::new(x, y)));
                cursor += 3;
            }
            TAG_LINE_TO => {
                segments.push(Segment::LineTo(Point::new(x, y)));
                cursor += 3;
            }
            _ => {
                // not a two-float segment: the word was the third of six
                // curve floats
                let x2 = f32::from_be_bytes(words[tag_index]);
                let y2 = float_at(cursor + 3)?;
                let x3 = float_at(cursor + 4)?;
                let y3 = float_at(cursor + 5)?;

                let tag_index = cursor + 6;
                let tag = words
                    .get(tag_index)
                    .map(|word| u32::from_be_bytes(*word))
                    .ok_or(FontError::TruncatedCommandStream { len: bytes.len() })?;

                if tag != TAG_CURVE_TO {
                    return Err(FontError::UnknownCommandTag {
                        tag,
                        offset: tag_index * 4,
                    });
                }

                segments.push(Segment::CurveTo {
                    first_control_point: Point::new(x, y),
                    second_control_point: Point::new(x2, y2),
                    end: Point::new(x3, y3),
                });
                cursor += 7;
            }
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod test {
    use super::*;

    fn word(f: f32) -> [u8; 4] {
        f.to_be_bytes()
    }

    fn tag(t: u32) -> [u8; 4] {
        t.to_be_bytes()
    }

    fn stream(words: &[[u8; 4]]) -> Vec<u8> {
        words.concat()
    }

    #[test]
    fn parses_move_line_curve() {
        let bytes = stream(&[
            word(0.0),
            word(1.0),
            tag(TAG_MOVE_TO),
            word(10.0),
            word(1.0),
            tag(TAG_LINE_TO),
            word(11.0),
            word(2.0),
            word(11.0),
            word(4.0),
            word(10.0),
            word(5.0),
            tag(TAG_CURVE_TO),
        ]);

        let segments = parse_commands(&bytes).unwrap();

        assert_eq!(
            segments,
            vec![
                Segment::MoveTo(Point::new(0.0, 1.0)),
                Segment::LineTo(Point::new(10.0, 1.0)),
                Segment::CurveTo {
                    first_control_point: Point::new(11.0, 2.0),
                    second_control_point: Point::new(11.0, 4.0),
                    end: Point::new(10.0, 5.0),
                },
            ]
        );
    }

    #[test]
    fn empty_stream_is_empty_glyph() {
        assert!(parse_commands(&[]).unwrap().is_empty());
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let bytes = stream(&[
            word(0.0),
            word(1.0),
            word(2.0),
            word(3.0),
            word(4.0),
            word(5.0),
            tag('q' as u32),
        ]);

        match parse_commands(&bytes) {
            Err(FontError::UnknownCommandTag { tag, offset }) => {
                assert_eq!(tag, 'q' as u32);
                assert_eq!(offset, 24);
            }
            other => panic!("expected UnknownCommandTag, got {:?}", other),
        }
    }

    #[test]
    fn truncated_segment_is_an_error() {
        let bytes = stream(&[word(0.0), word(1.0)]);

        assert!(matches!(
            parse_commands(&bytes),
            Err(FontError::TruncatedCommandStream { .. })
        ));
    }
}
