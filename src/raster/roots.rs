//! Exact scanline/segment intersection via polynomial root-finding.
//!
//! Everything here operates in pixel space: splines are scaled before the
//! fill pass, and crossings come back as integer pixel columns.

use std::f32::consts::PI;

use crate::{
    error::{FontError, FontResult},
    geometry::Spline,
};

fn in_range(t: f32) -> bool {
    // NaN fails both comparisons, so invalid roots are discarded here too
    (0.0..=1.0).contains(&t)
}

/// Appends the x-coordinates at which `spline` crosses the horizontal line
/// at `y`, as pixel columns.
pub(crate) fn row_crossings(spline: &Spline, y: f32, out: &mut Vec<i32>) -> FontResult<()> {
    if spline.is_line() {
        if let Some(t) = line_root(spline, y) {
            out.push(spline.lerp(t).x as i32);
        }

        return Ok(());
    }

    for t in cubic_roots(
        spline.start.y,
        spline.first_control_point.y,
        spline.second_control_point.y,
        spline.end.y,
        y,
    )? {
        if in_range(t) {
            out.push(spline.basis(t).x as i32);
        }
    }

    Ok(())
}

/// Parametrizes the line from start to end and solves for the single `t`
/// where it meets the row. Horizontal lines have no root (the division
/// yields a non-finite `t`, which fails the range check).
fn line_root(spline: &Spline, y: f32) -> Option<f32> {
    let y0 = spline.start.y;
    let y3 = spline.end.y;

    let t = -(y0 - y) / (y3 - y0);

    in_range(t).then_some(t)
}

/// Solves `B_y(t) = y` for a cubic Bézier y-basis in `y0..y3`.
///
/// Returns up to three parameter values; unused slots are NaN and roots are
/// NOT filtered to `[0, 1]` here. The cubic is normalized to monic form,
/// depressed via `t = s - a/3`, and classified by the discriminant
/// `D = (p/3)^3 + (q/2)^2`:
///
/// - `D > 0` (or `p = q = 0`): one real root, by Cardano's formula
/// - `D < 0`: three real roots, by the trigonometric method
/// - `D == 0`: a repeated root plus one more
///
/// A leading coefficient of zero means the polynomial is really quadratic
/// (or lower) and is solved directly, so the case split above is only ever
/// non-exhaustive if the discriminant is NaN; that is reported as a
/// `MathDomain` error rather than silently skipped.
pub(crate) fn cubic_roots(y0: f32, y1: f32, y2: f32, y3: f32, y: f32) -> FontResult<[f32; 3]> {
    let pa = -y0 + 3.0 * y1 - 3.0 * y2 + y3;
    let pb = 3.0 * y0 - 6.0 * y1 + 3.0 * y2;
    let pc = -3.0 * y0 + 3.0 * y1;
    let pd = y0 - y;

    let mut roots = [f32::NAN; 3];

    if pa == 0.0 {
        quadratic_roots(pb, pc, pd, &mut roots);
        return Ok(roots);
    }

    let a = pb / pa;
    let b = pc / pa;
    let c = pd / pa;

    let p = b - a * a / 3.0;
    let q = c + (2.0 * a * a * a - 9.0 * a * b) / 27.0;
    let p3 = p / 3.0;
    let q2 = q / 2.0;
    let d = p3 * p3 * p3 + q2 * q2;

    if d > 0.0 || (p == 0.0 && q == 0.0) {
        let sd = d.sqrt();
        let u1 = (sd - q2).cbrt();
        let v1 = (sd + q2).cbrt();
        roots[0] = u1 - v1 - a / 3.0;
    } else if d < 0.0 {
        let r = (-p3 * -p3 * -p3).sqrt();
        let cos_phi = (-q / (2.0 * r)).clamp(-1.0, 1.0);
        let phi = cos_phi.acos();
        let t1 = 2.0 * r.cbrt();
        roots[0] = t1 * (phi / 3.0).cos() - a / 3.0;
        roots[1] = t1 * ((phi + 2.0 * PI) / 3.0).cos() - a / 3.0;
        roots[2] = t1 * ((phi + 4.0 * PI) / 3.0).cos() - a / 3.0;
    } else if d == 0.0 {
        let u1 = if q2 < 0.0 { (-q2).cbrt() } else { -q2.cbrt() };
        roots[0] = 2.0 * u1 - a / 3.0;
        roots[1] = -u1 - a / 3.0;
    } else {
        return Err(FontError::MathDomain { discriminant: d });
    }

    Ok(roots)
}

fn quadratic_roots(a: f32, b: f32, c: f32, roots: &mut [f32; 3]) {
    if a == 0.0 {
        if b != 0.0 {
            roots[0] = -c / b;
        }
        return;
    }

    let d = b * b - 4.0 * a * c;
    if d < 0.0 {
        return;
    }

    let sd = d.sqrt();
    roots[0] = (-b + sd) / (2.0 * a);
    roots[1] = (-b - sd) / (2.0 * a);
}
