pub use canvas::Canvas;

mod canvas;
mod roots;

use std::io::{Read, Seek};

use crate::{
    error::FontResult,
    font::FontFile,
    geometry::Spline,
};

use roots::row_crossings;

/// Rasterizes text into a monochrome coverage grid.
///
/// Glyphs are laid out left to right with zero kerning, each shifted by the
/// running sum of previous advance widths scaled to pixels. Rendering is two
/// passes: a measuring pass over every glyph the string uses establishes the
/// vertical extent and total width before the buffer is allocated, then the
/// drawing pass fills each row by exact root-finding under the even-odd rule
/// and additively plots the outline midline for stroke visibility.
#[derive(Debug)]
pub struct Rasterizer<R> {
    font: FontFile<R>,
    px: i32,
    scale: f32,
}

struct PlacedGlyph {
    advance: i32,
    splines: Vec<Spline>,
}

impl<R: Read + Seek> Rasterizer<R> {
    pub fn new(font: FontFile<R>, px: u16) -> Self {
        let scale = px as f32 / font.em() as f32;

        Self {
            font,
            px: px as i32,
            scale,
        }
    }

    fn resolve(&mut self, codepoint: char) -> FontResult<Option<PlacedGlyph>> {
        let scale = self.scale;

        Ok(self.font.glyph(codepoint)?.map(|glyph| PlacedGlyph {
            advance: (scale * glyph.width as f32) as i32,
            splines: glyph
                .outline()
                .splines
                .iter()
                .map(|s| s.scaled(scale))
                .collect(),
        }))
    }

    pub fn rasterize(&mut self, text: &str) -> FontResult<Canvas> {
        // measuring pass: vertical extent is the union over every glyph the
        // string uses of the scaled y-coordinates of all endpoints and
        // control points, seeded with the em box
        let mut max_y = self.px;
        let mut min_y = 0;
        let mut width = 0i32;

        for codepoint in text.chars() {
            let Some(glyph) = self.resolve(codepoint)? else {
                continue;
            };

            width += glyph.advance;

            for spline in &glyph.splines {
                for y in [
                    spline.start.y,
                    spline.first_control_point.y,
                    spline.second_control_point.y,
                    spline.end.y,
                ] {
                    max_y = max_y.max(y as i32);
                    min_y = min_y.min(y as i32);
                }
            }
        }

        let height = max_y - min_y + 1;
        let mut canvas = Canvas::new(width.max(0) as usize, height as usize);

        // drawing pass
        let mut hshift = 0;
        for codepoint in text.chars() {
            let Some(glyph) = self.resolve(codepoint)? else {
                continue;
            };

            for spline in &glyph.splines {
                stroke_spline(&mut canvas, spline, hshift, max_y);
            }

            for y in min_y..=max_y {
                fill_row(&mut canvas, &glyph.splines, y, glyph.advance, hshift, max_y)?;
            }

            hshift += glyph.advance;
        }

        Ok(canvas)
    }
}

/// Even-odd fill of one output row of one glyph.
///
/// Collects every crossing of the outline with this row, sorts them, and
/// walks the glyph's columns left to right, toggling fill state each time a
/// column passes a crossing.
fn fill_row(
    canvas: &mut Canvas,
    splines: &[Spline],
    y: i32,
    glyph_width: i32,
    hshift: i32,
    max_y: i32,
) -> FontResult<()> {
    let mut crossings = Vec::new();
    for spline in splines {
        row_crossings(spline, y as f32, &mut crossings)?;
    }

    crossings.retain(|&x| x >= 0 && x < glyph_width);
    crossings.sort_unstable();

    let mut inside = false;
    let mut next = 0;

    for x in 0..glyph_width {
        while next < crossings.len() && crossings[next] == x {
            inside = !inside;
            next += 1;
        }

        if inside {
            canvas.set(x + hshift, max_y - y);
        }
    }

    Ok(())
}

/// Plots the outline's midline into the buffer: one sample per output row
/// for lines, twice that for curves. Purely additive over the fill.
fn stroke_spline(canvas: &mut Canvas, spline: &Spline, hshift: i32, max_y: i32) {
    let steps = if spline.is_line() {
        canvas.height()
    } else {
        canvas.height() * 2
    };

    for i in 0..steps {
        let t = i as f32 / steps as f32;
        let p = if spline.is_line() {
            spline.lerp(t)
        } else {
            spline.basis(t)
        };

        canvas.set(p.x as i32 + hshift, max_y - p.y as i32);
    }
}
