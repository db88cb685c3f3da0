use super::{Point, Segment, Spline};

/// A glyph's path with start points resolved, ready for rasterization.
#[derive(Debug, Clone)]
pub struct Outline {
    pub splines: Vec<Spline>,
}

impl Outline {
    pub const fn empty() -> Self {
        Self {
            splines: Vec::new(),
        }
    }

    /// Threads the implicit current point through a segment sequence. The
    /// current point starts at the origin; `MoveTo` only repositions it.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut splines = Vec::new();
        let mut current_point = Point::origin();

        for &segment in segments {
            match segment {
                Segment::MoveTo(p) => current_point = p,
                Segment::LineTo(p) => {
                    splines.push(Spline::line(current_point, p));
                    current_point = p;
                }
                Segment::CurveTo {
                    first_control_point,
                    second_control_point,
                    end,
                } => {
                    splines.push(Spline::cubic(
                        current_point,
                        first_control_point,
                        second_control_point,
                        end,
                    ));
                    current_point = end;
                }
            }
        }

        Self { splines }
    }
}
