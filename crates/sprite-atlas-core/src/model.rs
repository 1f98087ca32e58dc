use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    /// Returns true if `r` is fully inside `self`.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
    /// Returns true if `self` and `r` overlap by at least one pixel.
    pub fn intersects(&self, r: &Rect) -> bool {
        !(self.x >= r.right() || r.x >= self.right() || self.y >= r.bottom() || r.y >= self.bottom())
    }
}

/// Pixels cropped from each edge of a source image before packing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trim {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Trim {
    pub const ZERO: Trim = Trim {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Packing input: a source image's key, raw dimensions and trim margins.
///
/// Pixel data is not part of the spec; layout-only callers can pack from
/// dimensions alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    /// User-specified key (e.g., filename or asset path). Must be unique.
    pub key: String,
    /// Raw (untrimmed) width in pixels.
    pub width: u32,
    /// Raw (untrimmed) height in pixels.
    pub height: u32,
    /// Margins stripped from each edge before packing.
    pub trim: Trim,
}

impl SourceSpec {
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
            trim: Trim::ZERO,
        }
    }

    pub fn with_trim(mut self, trim: Trim) -> Self {
        self.trim = trim;
        self
    }

    /// Width after trimming, clamped at zero when margins over-cover.
    pub fn trimmed_width(&self) -> u32 {
        self.width
            .saturating_sub(self.trim.left.saturating_add(self.trim.right))
    }

    /// Height after trimming, clamped at zero when margins over-cover.
    pub fn trimmed_height(&self) -> u32 {
        self.height
            .saturating_sub(self.trim.top.saturating_add(self.trim.bottom))
    }

    /// Trimmed sub-rect within the original image.
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            self.trim.left.min(self.width),
            self.trim.top.min(self.height),
            self.trimmed_width(),
            self.trimmed_height(),
        )
    }
}

/// A placed source within the atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Key of the source this frame was packed from.
    pub key: String,
    /// Placed rectangle within the atlas; `w,h` equal the trimmed size.
    pub frame: Rect,
    /// True if trim margins removed any pixels.
    pub trimmed: bool,
    /// Source sub-rect within the original image after trimming.
    pub source: Rect,
    /// Original (untrimmed) image size.
    pub source_size: (u32, u32),
}

/// Result of one packing run: achieved bin size and per-source placements.
///
/// Placements are an explicit output keyed by source key; packers never
/// mutate their inputs. `unplaced` lists sources MaxRects could not fit
/// after exhausting bin growth (empty for Shelf, which grows unbounded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<Frame>,
    pub unplaced: Vec<String>,
}

impl Layout {
    /// Key -> placed rect map, for callers that persist placements.
    pub fn placements(&self) -> HashMap<String, Rect> {
        self.frames
            .iter()
            .map(|f| (f.key.clone(), f.frame))
            .collect()
    }

    pub fn frame(&self, key: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.key == key)
    }

    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> PackStats {
        let bin_area = (self.width as u64) * (self.height as u64);
        let mut used_area = 0u64;
        let mut num_trimmed = 0;
        for f in &self.frames {
            used_area += (f.frame.w as u64) * (f.frame.h as u64);
            if f.trimmed {
                num_trimmed += 1;
            }
        }
        let occupancy = if bin_area > 0 {
            used_area as f64 / bin_area as f64
        } else {
            0.0
        };
        PackStats {
            num_frames: self.frames.len(),
            num_unplaced: self.unplaced.len(),
            bin_width: self.width,
            bin_height: self.height,
            bin_area,
            used_area,
            occupancy,
            num_trimmed,
        }
    }
}

/// Statistics about atlas packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of sources placed in the atlas.
    pub num_frames: usize,
    /// Number of sources left without a placement.
    pub num_unplaced: usize,
    pub bin_width: u32,
    pub bin_height: u32,
    /// Bin area in pixels (width * height).
    pub bin_area: u64,
    /// Area covered by placed frames.
    pub used_area: u64,
    /// used_area / bin_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
    /// Number of frames with non-zero trim margins.
    pub num_trimmed: usize,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Bin: {}x{}, Frames: {}, Occupancy: {:.2}%, Used Area: {} px², Trimmed: {}, Unplaced: {}",
            self.bin_width,
            self.bin_height,
            self.num_frames,
            self.occupancy * 100.0,
            self.used_area,
            self.num_trimmed,
            self.num_unplaced,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.bin_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.bin_area > 0 {
            (self.wasted_area() as f64 / self.bin_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
