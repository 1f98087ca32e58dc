use super::Packer;
use crate::model::{Frame, Layout, Rect, SourceSpec};

/// Row-based packer: places sources left-to-right in shelves, wrapping to
/// a new shelf when the row would exceed the widest row seen so far.
///
/// The bin grows as needed, so every source is always placed. Sources are
/// ordered by trimmed width descending (stable, so ties keep input order).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShelfPacker;

impl ShelfPacker {
    pub fn new() -> Self {
        Self
    }
}

impl Packer for ShelfPacker {
    fn pack(&self, sources: &[SourceSpec], padding: u32) -> Layout {
        let mut order: Vec<usize> = (0..sources.len()).collect();
        order.sort_by(|&a, &b| sources[b].trimmed_width().cmp(&sources[a].trimmed_width()));

        let mut frames: Vec<Frame> = Vec::with_capacity(sources.len());
        let mut x = padding;
        let mut y = padding;
        let mut row_height = 0u32;
        let mut max_width = 0u32;

        for idx in order {
            let src = &sources[idx];
            let (w, h) = (src.trimmed_width(), src.trimmed_height());
            // Wrap once the row would outgrow the widest row so far. The
            // first item of a row always extends the bin instead.
            if x > padding && x + w + padding > max_width {
                y += row_height + padding;
                x = padding;
                row_height = 0;
            }
            frames.push(Frame {
                key: src.key.clone(),
                frame: Rect::new(x, y, w, h),
                trimmed: !src.trim.is_zero(),
                source: src.source_rect(),
                source_size: (src.width, src.height),
            });
            x += w + padding;
            row_height = row_height.max(h);
            max_width = max_width.max(x);
        }

        if frames.is_empty() {
            return Layout {
                width: padding * 2,
                height: padding * 2,
                frames,
                unplaced: Vec::new(),
            };
        }

        Layout {
            width: max_width,
            height: y + row_height + padding,
            frames,
            unplaced: Vec::new(),
        }
    }
}
