use crate::point2d::IPoint;
use crate::screen::{Color, ScreenSpace};

/// Depth given to line pixels; lines only show where nothing nearer was drawn.
pub const LINE_DEPTH: f64 = 0.0;

/// Draws a line from `p0` towards `p1`, returning the pixels written.
///
/// Steep lines are walked along y by transposing both endpoints, and the
/// walk always runs from the lower to the higher major coordinate. The far
/// endpoint is not drawn. Pixels off the screen are skipped; the walk itself
/// is clipped to the screen along the major axis.
pub fn draw_line(screen: &mut ScreenSpace, mut p0: IPoint, mut p1: IPoint, color: Color) -> usize {
    let span = |a: i32, b: i32| (b as i64 - a as i64).abs();
    let steep = span(p0.y, p1.y) > span(p0.x, p1.x);
    if steep {
        std::mem::swap(&mut p0.x, &mut p0.y);
        std::mem::swap(&mut p1.x, &mut p1.y);
    }
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
    }

    let dx = (p1.x as i64 - p0.x as i64) as f64;
    let dy = (p1.y as i64 - p0.y as i64) as f64;
    let limit = (if steep { screen.height } else { screen.width }) as i32;
    let mut written = 0;
    for x in p0.x.max(0)..p1.x.min(limit) {
        let t = (x as i64 - p0.x as i64) as f64 / dx;
        let Ok(y) = i32::try_from(p0.y as i64 + (t * dy) as i64) else {
            continue;
        };
        let (px, py) = if steep { (y, x) } else { (x, y) };
        if screen.in_bounds(px, py) && screen.set_pixel(px, py, color, LINE_DEPTH) {
            written += 1;
        }
    }
    written
}
