//! Connected-region color replacement (bucket fill).

use enough::Stop;
use rgb::RGB8;

use crate::error::Error;
use crate::raster::{PixelBuffer, VisitedMask};

/// How many worklist pops between stop-token polls.
const STOP_INTERVAL: usize = 4096;

/// Statistics from one fill pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Coordinates marked visited, filled or rejected as region boundary.
    pub visited: usize,
    /// Pixels overwritten with the replacement color.
    pub filled: usize,
}

/// Repaint the 4-connected region of exactly `target`-colored pixels
/// around `seed` with `replacement`, marking every inspected coordinate
/// in `mask`.
///
/// Each coordinate moves through one of three states: unvisited,
/// visited-and-filled (color matched `target`, channels overwritten), or
/// visited-and-rejected (color differed — the region boundary). The mask
/// is monotone and the grid finite, so at most `rows * cols` coordinates
/// are ever resolved and the traversal always terminates, including when
/// `target == replacement` (an idempotent repaint: same bytes out, full
/// mask coverage).
///
/// The traversal runs on an explicit heap worklist, so its depth is
/// independent of the call stack even when the region spans the whole
/// image. Neighbors are taken north, south, west, east; the order only
/// affects the visitation sequence, not the final region.
///
/// `seed` must be in bounds and `mask` must shadow `pixels` exactly; the
/// caller validates both. Aside from the stop token this operation cannot
/// fail.
pub fn flood_fill(
    pixels: &mut PixelBuffer,
    mask: &mut VisitedMask,
    seed: (usize, usize),
    target: RGB8,
    replacement: RGB8,
    stop: &dyn Stop,
) -> Result<FillReport, Error> {
    debug_assert!(pixels.in_bounds(seed.0, seed.1));
    debug_assert_eq!(
        (mask.rows(), mask.cols()),
        (pixels.rows(), pixels.cols()),
    );

    let rows = pixels.rows();
    let cols = pixels.cols();
    let mut report = FillReport::default();
    let mut pending = vec![seed];
    let mut pops = 0usize;

    while let Some((row, col)) = pending.pop() {
        pops += 1;
        if pops % STOP_INTERVAL == 0 {
            stop.check()?;
        }

        if mask.visited(row, col) {
            continue;
        }
        mask.mark(row, col);
        report.visited += 1;

        if pixels.color_at(row, col) != target {
            // region boundary
            continue;
        }
        pixels.set_color(row, col, replacement);
        report.filled += 1;

        if row != 0 {
            pending.push((row - 1, col));
        }
        if row != rows - 1 {
            pending.push((row + 1, col));
        }
        if col != 0 {
            pending.push((row, col - 1));
        }
        if col != cols - 1 {
            pending.push((row, col + 1));
        }
    }

    Ok(report)
}
