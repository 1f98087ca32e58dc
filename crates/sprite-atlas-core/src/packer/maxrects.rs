use super::Packer;
use crate::config::PackConfig;
use crate::model::{Frame, Layout, Rect, SourceSpec};
use tracing::{debug, warn};

/// Free-rectangle packer with Best Short Side Fit placement and bin
/// growth on failure.
///
/// Packing starts in an `initial_size` square bin. Whenever a source
/// finds no free rectangle, the attempt is abandoned and the smaller bin
/// dimension doubles (width on ties); after `max_attempts` failures one
/// forced attempt runs at `fallback_size` and its partial result is kept,
/// with leftover sources reported in `Layout::unplaced`.
///
/// Sources are ordered by trimmed area descending (stable, so ties keep
/// input order).
#[derive(Debug, Clone, Copy)]
pub struct MaxRectsPacker {
    initial_size: u32,
    max_attempts: u32,
    fallback_size: u32,
}

impl Default for MaxRectsPacker {
    fn default() -> Self {
        Self {
            initial_size: 512,
            max_attempts: 10,
            fallback_size: 4096,
        }
    }
}

impl MaxRectsPacker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_growth(initial_size: u32, max_attempts: u32, fallback_size: u32) -> Self {
        Self {
            initial_size,
            max_attempts,
            fallback_size,
        }
    }

    pub fn from_config(cfg: &PackConfig) -> Self {
        Self {
            initial_size: cfg.initial_size,
            max_attempts: cfg.max_attempts,
            fallback_size: cfg.fallback_size,
        }
    }
}

/// One placement attempt at a fixed bin size. The free list is a working
/// set local to the attempt; nothing carries over between attempts.
struct Attempt {
    /// (index into the sorted item list, reserved slot incl. padding)
    placed: Vec<(usize, Rect)>,
    complete: bool,
}

/// Best Short Side Fit: among free rects large enough, minimize the
/// smaller leftover dimension, then the larger one. Scan order breaks
/// remaining ties, which keeps placement deterministic.
fn find_best(free: &[Rect], w: u32, h: u32) -> Option<usize> {
    let mut best: Option<(usize, u32, u32)> = None;
    for (i, fr) in free.iter().enumerate() {
        if fr.w < w || fr.h < h {
            continue;
        }
        let leftover_w = fr.w - w;
        let leftover_h = fr.h - h;
        let short = leftover_w.min(leftover_h);
        let long = leftover_w.max(leftover_h);
        let better = match best {
            None => true,
            Some((_, bs, bl)) => short < bs || (short == bs && long < bl),
        };
        if better {
            best = Some((i, short, long));
        }
    }
    best.map(|(i, _, _)| i)
}

/// Split the chosen free rect into right/bottom remainders, then prune:
/// a new remainder contained in an existing free rect is dropped, and
/// existing free rects contained in a remainder are evicted. This keeps
/// the free set from accumulating redundant entries.
fn split_and_prune(free: &mut Vec<Rect>, chosen: usize, w: u32, h: u32) {
    let fr = free.remove(chosen);
    let mut remainders: Vec<Rect> = Vec::with_capacity(2);
    if fr.w > w {
        remainders.push(Rect::new(fr.x + w, fr.y, fr.w - w, fr.h));
    }
    if fr.h > h {
        remainders.push(Rect::new(fr.x, fr.y + h, fr.w, fr.h - h));
    }
    for nr in remainders {
        if free.iter().any(|of| of.contains(&nr)) {
            continue;
        }
        free.retain(|of| !nr.contains(of));
        free.push(nr);
    }
}

/// Items are (sorted index, trimmed width, trimmed height).
fn try_pack(items: &[(usize, u32, u32)], bin_w: u32, bin_h: u32, padding: u32) -> Attempt {
    let mut free = vec![Rect::new(0, 0, bin_w, bin_h)];
    let mut placed: Vec<(usize, Rect)> = Vec::with_capacity(items.len());

    for &(idx, tw, th) in items {
        let w = tw + padding;
        let h = th + padding;
        let Some(chosen) = find_best(&free, w, h) else {
            return Attempt {
                placed,
                complete: false,
            };
        };
        let slot = Rect::new(free[chosen].x, free[chosen].y, w, h);
        split_and_prune(&mut free, chosen, w, h);
        placed.push((idx, slot));
    }

    Attempt {
        placed,
        complete: true,
    }
}

impl Packer for MaxRectsPacker {
    fn pack(&self, sources: &[SourceSpec], padding: u32) -> Layout {
        let mut order: Vec<usize> = (0..sources.len()).collect();
        order.sort_by(|&a, &b| {
            let area_a =
                (sources[a].trimmed_width() as u64) * (sources[a].trimmed_height() as u64);
            let area_b =
                (sources[b].trimmed_width() as u64) * (sources[b].trimmed_height() as u64);
            area_b.cmp(&area_a)
        });
        let items: Vec<(usize, u32, u32)> = order
            .iter()
            .map(|&i| (i, sources[i].trimmed_width(), sources[i].trimmed_height()))
            .collect();

        let mut bin_w = self.initial_size;
        let mut bin_h = self.initial_size;
        let mut outcome: Option<(Attempt, u32, u32)> = None;
        for attempt_no in 0..self.max_attempts {
            let attempt = try_pack(&items, bin_w, bin_h, padding);
            if attempt.complete {
                outcome = Some((attempt, bin_w, bin_h));
                break;
            }
            debug!(
                attempt = attempt_no + 1,
                bin_w, bin_h, "bin full, doubling smaller dimension"
            );
            if bin_w <= bin_h {
                bin_w = bin_w.saturating_mul(2);
            } else {
                bin_h = bin_h.saturating_mul(2);
            }
        }
        let (attempt, bin_w, bin_h) = outcome.unwrap_or_else(|| {
            warn!(
                fallback = self.fallback_size,
                "growth exhausted, forcing fallback bin"
            );
            let attempt = try_pack(&items, self.fallback_size, self.fallback_size, padding);
            (attempt, self.fallback_size, self.fallback_size)
        });

        // Achieved size is the tight bounding box of the reserved slots,
        // capped at the attempted bin.
        let mut width = 0u32;
        let mut height = 0u32;
        let mut frames: Vec<Frame> = Vec::with_capacity(attempt.placed.len());
        let mut placed_idx = vec![false; sources.len()];
        for &(idx, slot) in &attempt.placed {
            let src = &sources[idx];
            width = width.max(slot.right().min(bin_w));
            height = height.max(slot.bottom().min(bin_h));
            placed_idx[idx] = true;
            frames.push(Frame {
                key: src.key.clone(),
                frame: Rect::new(slot.x, slot.y, src.trimmed_width(), src.trimmed_height()),
                trimmed: !src.trim.is_zero(),
                source: src.source_rect(),
                source_size: (src.width, src.height),
            });
        }
        if frames.is_empty() {
            width = padding * 2;
            height = padding * 2;
        }

        let unplaced: Vec<String> = items
            .iter()
            .filter(|(idx, _, _)| !placed_idx[*idx])
            .map(|(idx, _, _)| sources[*idx].key.clone())
            .collect();
        if !unplaced.is_empty() {
            warn!(count = unplaced.len(), "sources left unplaced");
        }

        Layout {
            width,
            height,
            frames,
            unplaced,
        }
    }
}
