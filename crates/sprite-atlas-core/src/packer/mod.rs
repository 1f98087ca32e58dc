use crate::model::{Layout, SourceSpec};

pub mod maxrects;
pub mod shelf;

/// A packer arranges trimmed source rectangles into a single bin.
///
/// Implementations must be deterministic (stable sorts, no randomness)
/// and must guarantee disjoint placements; compositing relies on that
/// without re-checking. Packers never mutate their inputs — placements
/// come back keyed by source key in the returned `Layout`.
pub trait Packer {
    fn pack(&self, sources: &[SourceSpec], padding: u32) -> Layout;
}
