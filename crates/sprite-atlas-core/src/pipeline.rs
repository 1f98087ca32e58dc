use crate::config::{OverflowPolicy, PackConfig, Strategy};
use crate::error::{AtlasError, Result};
use crate::model::{Layout, SourceSpec, Trim};
use crate::packer::{Packer, maxrects::MaxRectsPacker, shelf::ShelfPacker};
use image::{DynamicImage, RgbaImage};
use std::collections::HashMap;
use tracing::instrument;

/// In-memory sprite to pack (key + decoded image + trim margins).
///
/// Decoding is the caller's job; use `compute_trim` to derive margins from
/// transparent borders, or leave them zero to pack the full image.
pub struct InputSprite {
    pub key: String,
    pub image: DynamicImage,
    pub trim: Trim,
}

/// Output of a packing run: the layout and the composited RGBA atlas.
pub struct PackOutput {
    pub layout: Layout,
    pub rgba: RgbaImage,
}

impl PackOutput {
    /// Computes packing statistics for this output.
    /// This is a convenience method that delegates to `layout.stats()`.
    pub fn stats(&self) -> crate::model::PackStats {
        self.layout.stats()
    }
}

#[instrument(skip_all)]
/// Packs `inputs` into one atlas using configuration `cfg` and returns the
/// layout plus the composited RGBA canvas.
///
/// Notes:
/// - Sorting inside the packers is stable for deterministic results.
/// - Sources whose trim margins cover the whole image still receive a
///   placement; they just contribute no pixels to the canvas.
/// - With `Strategy::MaxRects` and `OverflowPolicy::Error`, exhausting bin
///   growth fails with `AtlasError::Overflow` listing the rejects.
pub fn pack_sprites(inputs: Vec<InputSprite>, cfg: PackConfig) -> Result<PackOutput> {
    cfg.validate()?;

    let specs: Vec<SourceSpec> = inputs
        .iter()
        .map(|inp| {
            let (w, h) = (inp.image.width(), inp.image.height());
            SourceSpec {
                key: inp.key.clone(),
                width: w,
                height: h,
                trim: inp.trim,
            }
        })
        .collect();

    let layout = run_strategy(&specs, &cfg)?;

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    crate::compositing::fill_background(&mut canvas, &cfg.background);

    let pixels: HashMap<&str, RgbaImage> = inputs
        .iter()
        .map(|inp| (inp.key.as_str(), inp.image.to_rgba8()))
        .collect();
    for f in &layout.frames {
        if let Some(rgba) = pixels.get(f.key.as_str()) {
            crate::compositing::blit_rgba(
                rgba,
                &mut canvas,
                f.frame.x,
                f.frame.y,
                f.source.x,
                f.source.y,
                f.source.w,
                f.source.h,
            );
        }
    }

    Ok(PackOutput { layout, rgba: canvas })
}

#[instrument(skip_all)]
/// Packs dimensions into a layout without compositing pixel data.
pub fn pack_layout(specs: Vec<SourceSpec>, cfg: PackConfig) -> Result<Layout> {
    cfg.validate()?;
    run_strategy(&specs, &cfg)
}

fn run_strategy(specs: &[SourceSpec], cfg: &PackConfig) -> Result<Layout> {
    let layout = match cfg.strategy {
        Strategy::Shelf => ShelfPacker::new().pack(specs, cfg.padding),
        Strategy::MaxRects => MaxRectsPacker::from_config(cfg).pack(specs, cfg.padding),
    };
    if !layout.unplaced.is_empty() && cfg.overflow == OverflowPolicy::Error {
        return Err(AtlasError::Overflow {
            unplaced: layout.unplaced,
        });
    }
    Ok(layout)
}

/// Derive trim margins from fully-transparent borders (alpha <= threshold).
///
/// A fully transparent image trims to zero size (`left = width`,
/// `top = height`); such a source still packs to a degenerate slot.
pub fn compute_trim(rgba: &RgbaImage, threshold: u8) -> Trim {
    let (w, h) = rgba.dimensions();
    if w == 0 || h == 0 {
        return Trim::ZERO;
    }
    let col_transparent = |x: u32| (0..h).all(|y| rgba.get_pixel(x, y)[3] <= threshold);

    let mut x1 = 0;
    while x1 < w && col_transparent(x1) {
        x1 += 1;
    }
    if x1 == w {
        return Trim {
            left: w,
            right: 0,
            top: h,
            bottom: 0,
        };
    }
    let mut x2 = w - 1;
    while x2 > x1 && col_transparent(x2) {
        x2 -= 1;
    }

    let row_transparent = |y: u32| (x1..=x2).all(|x| rgba.get_pixel(x, y)[3] <= threshold);
    let mut y1 = 0;
    while y1 < h && row_transparent(y1) {
        y1 += 1;
    }
    let mut y2 = h - 1;
    while y2 > y1 && row_transparent(y2) {
        y2 -= 1;
    }

    Trim {
        top: y1,
        right: w - 1 - x2,
        bottom: h - 1 - y2,
        left: x1,
    }
}
