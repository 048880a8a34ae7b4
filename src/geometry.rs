/*
geometry.rs

Copyright 2026 The Mazegen developers

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Line rasterization on the cell grid.
//!
//! The algorithm is Bresenham's compact variant, extended to thick lines by
//! rasterizing a perpendicular segment on both sides of every stepped pixel
//! (after A. S. Murphy, "Line Thickening by Modification to Bresenham's
//! Algorithm", IBM TDB, May 1978).

/// Rasterize the line from `(x0, y0)` to `(x1, y1)` with the given width and
/// feed every covered grid coordinate to `sink`.
///
/// Coordinates outside of any particular grid may be produced; it is up to
/// the sink to discard them. The same coordinate can be emitted more than
/// once on thick lines. A degenerate line (start equal to end) covers exactly
/// the start coordinate, whatever the width.
pub fn bresenham<F: FnMut(i32, i32)>(x0: i32, y0: i32, x1: i32, y1: i32, width: f64, sink: &mut F) {
    let dx: f64 = f64::from((x1 - x0).abs());
    let dy: f64 = f64::from(-(y1 - y0).abs());
    let sx: i32 = if x0 < x1 { 1 } else { -1 };
    let sy: i32 = if y0 < y1 { 1 } else { -1 };

    // A degenerate line has no direction to thicken along.
    let width: f64 = if dx == 0.0 && dy == 0.0 { 0.0 } else { width };

    sink(x0, y0);

    raster(x0, y0, dx, dy, sx, sy, width / 2.0, sink);
}

/// Sign of `value` as an integer, with zero mapping to zero.
fn signum(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// The inner loop of the rasterizer. `dx` is the non-negative distance along
/// `sx` and `dy` the non-positive distance along `sy`. The start coordinate
/// itself is not emitted.
fn raster<F: FnMut(i32, i32)>(
    x: i32,
    y: i32,
    dx: f64,
    dy: f64,
    sx: i32,
    sy: i32,
    half_width: f64,
    sink: &mut F,
) {
    let x_vector: f64 = f64::from(sx) * dx;
    let y_vector: f64 = f64::from(sy) * -dy;

    let mut x: i32 = x;
    let mut y: i32 = y;
    let mut dx_left: f64 = dx;
    let mut dy_left: f64 = -dy;
    let mut err: f64 = dx + dy;

    let mut x_perpendicular: f64 = 0.0;
    let mut y_perpendicular: f64 = 0.0;
    let mut sx_perpendicular: i32 = 0;
    let mut sy_perpendicular: i32 = 0;

    if half_width > 0.0 {
        // Degenerate lines reset the width beforehand, so dx and dy cannot
        // both be zero here.
        if dx == 0.0 {
            let normalize: f64 = 1.0 / (1.0 + (dx / dy).powi(2)).sqrt();
            x_perpendicular = half_width * normalize;
            y_perpendicular = half_width * normalize * -x_vector / y_vector;
        } else {
            let normalize: f64 = 1.0 / ((dy / dx).powi(2) + 1.0).sqrt();
            x_perpendicular = half_width * normalize * -y_vector / x_vector;
            y_perpendicular = half_width * normalize;
        }

        sx_perpendicular = signum(x_perpendicular);
        sy_perpendicular = signum(y_perpendicular);
    }

    while dx_left > 0.0 || dy_left > 0.0 {
        let err2: f64 = 2.0 * err;

        // Horizontal step.
        if (err2 > dy && dx_left > 0.0) || (dx_left > 0.0 && dy_left <= 0.0) {
            if half_width > 0.0 {
                raster(
                    x,
                    y,
                    x_perpendicular.abs(),
                    -y_perpendicular.abs(),
                    sx_perpendicular,
                    sy_perpendicular,
                    0.0,
                    sink,
                );
                raster(
                    x,
                    y,
                    x_perpendicular.abs(),
                    -y_perpendicular.abs(),
                    -sx_perpendicular,
                    -sy_perpendicular,
                    0.0,
                    sink,
                );
            }

            err += dy;
            dx_left -= 1.0;

            x += sx;
            sink(x, y);
        }

        // Vertical step.
        if (err2 < dx && dy_left > 0.0) || (dy_left > 0.0 && dx_left <= 0.0) {
            if half_width > 0.0 {
                raster(
                    x,
                    y,
                    x_perpendicular.abs(),
                    -y_perpendicular.abs(),
                    sx_perpendicular,
                    sy_perpendicular,
                    0.0,
                    sink,
                );
                raster(
                    x,
                    y,
                    x_perpendicular.abs(),
                    -y_perpendicular.abs(),
                    -sx_perpendicular,
                    -sy_perpendicular,
                    0.0,
                    sink,
                );
            }

            err += dx;
            dy_left -= 1.0;

            y += sy;
            sink(x, y);
        }
    }

    // Thicken the last pixel of the segment as well.
    if half_width > 0.0 {
        raster(
            x,
            y,
            x_perpendicular.abs(),
            -y_perpendicular.abs(),
            sx_perpendicular,
            sy_perpendicular,
            0.0,
            sink,
        );
        raster(
            x,
            y,
            x_perpendicular.abs(),
            -y_perpendicular.abs(),
            -sx_perpendicular,
            -sy_perpendicular,
            0.0,
            sink,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn collect(x0: i32, y0: i32, x1: i32, y1: i32, width: f64) -> Vec<(i32, i32)> {
        let mut cells: Vec<(i32, i32)> = Vec::new();
        bresenham(x0, y0, x1, y1, width, &mut |x, y| cells.push((x, y)));
        cells
    }

    #[test]
    fn degenerate_line_covers_one_cell() {
        assert_eq!(collect(3, 4, 3, 4, 0.0), vec![(3, 4)]);
        assert_eq!(collect(3, 4, 3, 4, 10.0), vec![(3, 4)]);
    }

    #[test]
    fn horizontal_thin_line() {
        assert_eq!(
            collect(0, 0, 4, 0, 0.0),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn thin_line_steps_one_cell_at_a_time() {
        let cells = collect(0, 0, 5, 3, 0.0);
        // One emission per horizontal and per vertical step, plus the start.
        assert_eq!(cells.len(), 5 + 3 + 1);
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(5, 3)));
        for pair in cells.windows(2) {
            let moved = (pair[1].0 - pair[0].0).abs() + (pair[1].1 - pair[0].1).abs();
            assert_eq!(moved, 1);
        }
    }

    #[test]
    fn diagonal_thin_line() {
        let cells: HashSet<(i32, i32)> = collect(0, 0, 3, 3, 0.0).into_iter().collect();
        for i in 0..=3 {
            assert!(cells.contains(&(i, i)));
        }
    }

    #[test]
    fn thick_line_is_a_superset_of_the_thin_one() {
        let thin: HashSet<(i32, i32)> = collect(0, 0, 8, 2, 0.0).into_iter().collect();
        let thick: HashSet<(i32, i32)> = collect(0, 0, 8, 2, 3.0).into_iter().collect();
        assert!(thin.is_subset(&thick));
        assert!(thick.len() > thin.len());
    }

    #[test]
    fn thick_horizontal_line_spreads_vertically() {
        let cells: HashSet<(i32, i32)> = collect(0, 0, 6, 0, 2.0).into_iter().collect();
        assert!(cells.contains(&(3, -1)));
        assert!(cells.contains(&(3, 1)));
    }
}
