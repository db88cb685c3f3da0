use super::Point;

/// One drawing command of a glyph's path.
///
/// The start point of a `LineTo` or `CurveTo` is the current point left
/// behind by the previous segment; `MoveTo` repositions the current point
/// without drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        first_control_point: Point,
        second_control_point: Point,
        end: Point,
    },
}
