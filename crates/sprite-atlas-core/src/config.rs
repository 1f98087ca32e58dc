use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Packing strategies.
///
/// `Shelf` is a row-based heuristic with unbounded growth; it always
/// places every source. `MaxRects` tracks free rectangles in a fixed bin
/// and doubles the smaller dimension on failure, up to `max_attempts`,
/// then falls back to one forced attempt at `fallback_size`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Shelf,
    MaxRects,
}

impl FromStr for Strategy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shelf" => Ok(Self::Shelf),
            "maxrects" => Ok(Self::MaxRects),
            _ => Err(()),
        }
    }
}

/// What to do when MaxRects exhausts bin growth with sources left over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the pack with `AtlasError::Overflow` listing the rejects.
    Error,
    /// Keep the best-effort layout; rejects are listed in `Layout::unplaced`.
    Partial,
}

impl FromStr for OverflowPolicy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "partial" => Ok(Self::Partial),
            _ => Err(()),
        }
    }
}

/// Background painted under the packed frames at compose time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Fully transparent canvas.
    Transparent,
    /// Alternating two-color cells, as editor previews render transparency.
    Checkerboard {
        cell: u32,
        light: [u8; 4],
        dark: [u8; 4],
    },
}

impl Background {
    /// Grey checkerboard matching the reference editor's preview.
    pub fn preview() -> Self {
        Self::Checkerboard {
            cell: 8,
            light: [204, 204, 204, 255],
            dark: [154, 154, 154, 255],
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::Transparent
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Pixels between frames and around the bin edge.
    pub padding: u32,
    /// Packing strategy.
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,
    /// Background fill for composed atlases.
    #[serde(default)]
    pub background: Background,
    /// Starting bin edge for MaxRects (square).
    #[serde(default = "default_initial_size")]
    pub initial_size: u32,
    /// Growth attempts before the forced fallback bin.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Edge of the square fallback bin tried after growth is exhausted.
    #[serde(default = "default_fallback_size")]
    pub fallback_size: u32,
    /// Overflow handling when the fallback bin still cannot fit everything.
    #[serde(default = "default_overflow")]
    pub overflow: OverflowPolicy,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            padding: 2,
            strategy: default_strategy(),
            background: Background::default(),
            initial_size: default_initial_size(),
            max_attempts: default_max_attempts(),
            fallback_size: default_fallback_size(),
            overflow: default_overflow(),
        }
    }
}

impl PackConfig {
    /// Validates the configuration parameters.
    ///
    /// Zero sources and zero padding are valid degenerate inputs, not
    /// configuration errors; only the MaxRects sizing knobs are checked.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::AtlasError;

        if self.initial_size == 0 {
            return Err(AtlasError::InvalidConfig(
                "initial_size must be non-zero".into(),
            ));
        }
        if self.fallback_size < self.initial_size {
            return Err(AtlasError::InvalidConfig(format!(
                "fallback_size ({}) is smaller than initial_size ({})",
                self.fallback_size, self.initial_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(AtlasError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        if let Background::Checkerboard { cell, .. } = self.background {
            if cell == 0 {
                return Err(AtlasError::InvalidConfig(
                    "checkerboard cell must be non-zero".into(),
                ));
            }
        }
        Ok(())
    }

    /// Create a fluent builder for `PackConfig`.
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::new()
    }
}

fn default_strategy() -> Strategy {
    Strategy::Shelf
}
fn default_initial_size() -> u32 {
    512
}
fn default_max_attempts() -> u32 {
    10
}
fn default_fallback_size() -> u32 {
    4096
}
fn default_overflow() -> OverflowPolicy {
    OverflowPolicy::Error
}

/// Builder for `PackConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackConfigBuilder {
    cfg: PackConfig,
}

impl PackConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackConfig::default(),
        }
    }
    pub fn padding(mut self, v: u32) -> Self {
        self.cfg.padding = v;
        self
    }
    pub fn strategy(mut self, v: Strategy) -> Self {
        self.cfg.strategy = v;
        self
    }
    pub fn background(mut self, v: Background) -> Self {
        self.cfg.background = v;
        self
    }
    pub fn initial_size(mut self, v: u32) -> Self {
        self.cfg.initial_size = v;
        self
    }
    pub fn max_attempts(mut self, v: u32) -> Self {
        self.cfg.max_attempts = v;
        self
    }
    pub fn fallback_size(mut self, v: u32) -> Self {
        self.cfg.fallback_size = v;
        self
    }
    pub fn overflow(mut self, v: OverflowPolicy) -> Self {
        self.cfg.overflow = v;
        self
    }
    pub fn build(self) -> PackConfig {
        self.cfg
    }
}
