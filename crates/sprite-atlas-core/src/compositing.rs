use crate::config::Background;
use image::{Rgba, RgbaImage};

/// Fill `canvas` with the configured background.
///
/// The checkerboard alternates per `cell`-sized square, anchored at the
/// canvas origin, the way editor previews indicate transparency.
pub fn fill_background(canvas: &mut RgbaImage, background: &Background) {
    match background {
        Background::Transparent => {}
        Background::Checkerboard { cell, light, dark } => {
            let cell = (*cell).max(1);
            for (x, y, px) in canvas.enumerate_pixels_mut() {
                let even = ((x / cell) + (y / cell)) % 2 == 0;
                *px = Rgba(if even { *light } else { *dark });
            }
        }
    }
}

/// Blit a sub-rectangle from `src` into `canvas` at destination (dx, dy).
///
/// Direct pixel copy, no resampling. Pixels falling outside the canvas
/// are skipped; placements produced by the packers never do.
///
/// - (sx, sy, sw, sh): source rectangle within `src`
/// - (dx, dy): destination top-left in `canvas`
pub fn blit_rgba(
    src: &RgbaImage,
    canvas: &mut RgbaImage,
    dx: u32,
    dy: u32,
    sx: u32,
    sy: u32,
    sw: u32,
    sh: u32,
) {
    let (cw, ch) = canvas.dimensions();
    let (iw, ih) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if sx + xx >= iw || sy + yy >= ih {
                continue;
            }
            if dx + xx < cw && dy + yy < ch {
                let px = *src.get_pixel(sx + xx, sy + yy);
                canvas.put_pixel(dx + xx, dy + yy, px);
            }
        }
    }
}
