//! Line-oriented parser for the SplineFont-style outline description text
//! consumed by the compiler.
//!
//! Only the subset the tinyfont format can represent is recognized:
//! font-wide `Copyright`, `Ascent` and `Descent` keys, and per glyph the
//! `Encoding` and `Width` lines plus the foreground `SplineSet` block.
//! Outline commands are leading floats followed by a tag token: `m` and `l`
//! take two floats, `c` takes six (two control points then the endpoint,
//! left to right); trailing point flags after the tag are ignored.

use anyhow::{anyhow, bail, Context};

use crate::{
    font::Glyph,
    geometry::{Point, Segment},
};

#[derive(Debug)]
pub struct SfdFont {
    pub copyright: String,
    pub ascent: i32,
    pub descent: i32,
    pub glyphs: Vec<Glyph>,
}

impl SfdFont {
    pub fn em(&self) -> anyhow::Result<u16> {
        u16::try_from(self.ascent + self.descent)
            .map_err(|_| anyhow!("em {} out of range", self.ascent + self.descent))
    }
}

pub fn parse(input: &str) -> anyhow::Result<SfdFont> {
    let mut font = SfdFont {
        copyright: String::new(),
        ascent: 0,
        descent: 0,
        glyphs: Vec::new(),
    };

    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };

        match key {
            "Copyright" => font.copyright = rest.trim().to_owned(),
            "Ascent" => {
                font.ascent = rest.trim().parse().context("malformed Ascent")?;
            }
            "Descent" => {
                font.descent = rest.trim().parse().context("malformed Descent")?;
            }
            "StartChar" => {
                if let Some(glyph) = parse_glyph(&mut lines)
                    .with_context(|| format!("glyph \"{}\"", rest.trim()))?
                {
                    font.glyphs.push(glyph);
                }
            }
            _ => {}
        }
    }

    Ok(font)
}

/// Parses one `StartChar` .. `EndChar` block. Returns `None` for glyphs
/// without a usable code point.
fn parse_glyph<'a>(lines: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Option<Glyph>> {
    let encoding = lines.next().ok_or_else(|| anyhow!("unexpected eof"))?;
    let codepoint = parse_encoding(encoding)?;

    let width_line = lines.next().ok_or_else(|| anyhow!("unexpected eof"))?;
    let width = width_line
        .strip_prefix("Width:")
        .ok_or_else(|| anyhow!("expected Width, found {:?}", width_line))?
        .trim()
        .parse::<u16>()
        .context("malformed Width")?;

    let mut segments = Vec::new();
    let mut previous = "";

    loop {
        let line = lines.next().ok_or_else(|| anyhow!("unterminated glyph"))?;

        if line == "EndChar" {
            break;
        }

        // outlines live in the foreground layer only
        if line == "SplineSet" && previous == "Fore" {
            parse_spline_set(lines, &mut segments)?;
        }

        previous = line;
    }

    let codepoint = match codepoint {
        Some(codepoint) => codepoint,
        None => {
            log::warn!("skipping unencoded glyph");
            return Ok(None);
        }
    };

    Ok(Some(Glyph::new(codepoint, width, segments)))
}

/// `Encoding: <enc> <unicode> <gid>` — the code point is the second field.
/// A negative value marks an unencoded glyph.
fn parse_encoding(line: &str) -> anyhow::Result<Option<u32>> {
    let fields = line
        .strip_prefix("Encoding:")
        .ok_or_else(|| anyhow!("expected Encoding, found {:?}", line))?;

    let unicode = fields
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| anyhow!("malformed Encoding line"))?
        .parse::<i64>()
        .context("malformed Encoding line")?;

    if unicode < 0 {
        return Ok(None);
    }

    u32::try_from(unicode)
        .map(Some)
        .map_err(|_| anyhow!("code point {} out of range", unicode))
}

fn parse_spline_set<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    segments: &mut Vec<Segment>,
) -> anyhow::Result<()> {
    loop {
        let line = lines.next().ok_or_else(|| anyhow!("unterminated SplineSet"))?;

        if line == "EndSplineSet" {
            return Ok(());
        }

        let mut floats = Vec::new();
        let mut tokens = line.split_whitespace();

        let tag = loop {
            let token = tokens.next().ok_or_else(|| anyhow!("missing tag: {:?}", line))?;

            match token.parse::<f32>() {
                Ok(f) => floats.push(f),
                Err(..) => break token,
            }
        };

        let segment = match (tag, floats.as_slice()) {
            ("m", [x, y]) => Segment::MoveTo(Point::new(*x, *y)),
            ("l", [x, y]) => Segment::LineTo(Point::new(*x, *y)),
            ("c", [x1, y1, x2, y2, x, y]) => Segment::CurveTo {
                first_control_point: Point::new(*x1, *y1),
                second_control_point: Point::new(*x2, *y2),
                end: Point::new(*x, *y),
            },
            ("m" | "l" | "c", ..) => {
                bail!("wrong coordinate count for {:?}: {:?}", tag, line)
            }
            _ => bail!("unknown command {:?}: {:?}", tag, line),
        };

        segments.push(segment);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = "\
SplineFontDB: 3.0
Copyright: example copyright
Ascent: 8
Descent: 2
BeginChars: 65536 2

StartChar: A
Encoding: 65 65 0
Width: 10
Flags: W
Fore
SplineSet
0 0 m 1
10 10 l 1
2 12 8 12 10 0 c 0
EndSplineSet
EndChar

StartChar: space
Encoding: 32 32 1
Width: 5
Flags: W
EndChar
";

    #[test]
    fn parses_header_and_glyphs() {
        let font = parse(SAMPLE).unwrap();

        assert_eq!(font.copyright, "example copyright");
        assert_eq!(font.ascent, 8);
        assert_eq!(font.descent, 2);
        assert_eq!(font.em().unwrap(), 10);
        assert_eq!(font.glyphs.len(), 2);

        let a = &font.glyphs[0];
        assert_eq!(a.codepoint, 65);
        assert_eq!(a.width, 10);
        assert_eq!(
            a.segments,
            vec![
                Segment::MoveTo(Point::new(0.0, 0.0)),
                Segment::LineTo(Point::new(10.0, 10.0)),
                Segment::CurveTo {
                    first_control_point: Point::new(2.0, 12.0),
                    second_control_point: Point::new(8.0, 12.0),
                    end: Point::new(10.0, 0.0),
                },
            ]
        );

        let space = &font.glyphs[1];
        assert_eq!(space.codepoint, 32);
        assert_eq!(space.width, 5);
        assert!(space.segments.is_empty());
    }

    #[test]
    fn skips_unencoded_glyphs() {
        let input = "\
Ascent: 8
Descent: 2
StartChar: orn001
Encoding: -1 -1 3
Width: 4
EndChar
";

        let font = parse(input).unwrap();
        assert!(font.glyphs.is_empty());
    }

    #[test]
    fn background_outlines_are_ignored() {
        let input = "\
StartChar: A
Encoding: 65 65 0
Width: 10
Back
SplineSet
0 0 m 1
5 5 l 1
EndSplineSet
Fore
SplineSet
1 1 m 1
2 2 l 1
EndSplineSet
EndChar
";

        let font = parse(input).unwrap();
        assert_eq!(
            font.glyphs[0].segments,
            vec![
                Segment::MoveTo(Point::new(1.0, 1.0)),
                Segment::LineTo(Point::new(2.0, 2.0)),
            ]
        );
    }

    #[test]
    fn malformed_command_is_an_error() {
        let input = "\
StartChar: A
Encoding: 65 65 0
Width: 10
Fore
SplineSet
1 2 3 m 1
EndSplineSet
EndChar
";

        assert!(parse(input).is_err());
    }
}
