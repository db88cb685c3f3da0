use super::Point;

/// A path segment with its start point resolved.
///
/// Straight lines are stored with both control points at the origin, the
/// same sentinel the on-disk format uses, and are told apart from true
/// cubics by that sentinel rather than by a type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spline {
    pub start: Point,
    pub first_control_point: Point,
    pub second_control_point: Point,
    pub end: Point,
}

impl Spline {
    pub const fn line(start: Point, end: Point) -> Self {
        Self {
            start,
            first_control_point: Point::origin(),
            second_control_point: Point::origin(),
            end,
        }
    }

    pub const fn cubic(
        start: Point,
        first_control_point: Point,
        second_control_point: Point,
        end: Point,
    ) -> Self {
        Self {
            start,
            first_control_point,
            second_control_point,
            end,
        }
    }

    pub fn is_line(&self) -> bool {
        self.first_control_point.is_origin() && self.second_control_point.is_origin()
    }

    /// The cubic Bézier basis evaluated at `t`. Only meaningful for true
    /// cubics; lines use `lerp`.
    pub fn basis(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;

        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.start * mt3
            + 3.0 * self.first_control_point * mt2 * t
            + 3.0 * self.second_control_point * mt * t2
            + self.end * t3
    }

    pub fn lerp(&self, t: f32) -> Point {
        self.start * (1.0 - t) + self.end * t
    }

    /// Uniform scale about the origin. The line sentinel is preserved since
    /// the origin scales to itself.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            start: self.start * factor,
            first_control_point: self.first_control_point * factor,
            second_control_point: self.second_control_point * factor,
            end: self.end * factor,
        }
    }
}
