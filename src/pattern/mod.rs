//! Stitch-count shaping shared by every shape.
//!
//! Dimensions are measured in stitches: one unit is the width of a stitch and the height of a
//! row. A shape turns its geometry into the circumference of each round, and this module turns
//! those circumferences into stitch counts, evens out the steps between rounds, and renders the
//! result.

mod render;
mod stitches;

pub use render::{describe_row, write_pattern};
pub use stitches::{Repeat, Stitch, row_instruction};

use crate::commands::GlobalOptions;

/// Number of evenly spaced segments that increases and decreases are spread over in even shaping
pub const EVEN_SEGMENTS: u32 = 6;

/// How circumferences are rounded to stitch counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shaping {
    /// Counts are multiples of [`EVEN_SEGMENTS`], giving regular, symmetric shaping
    Even,

    /// Counts follow the geometry as closely as whole stitches allow
    Accurate,
}

impl Shaping {
    #[must_use]
    pub const fn from_options(options: &GlobalOptions) -> Self {
        if options.accurate { Self::Accurate } else { Self::Even }
    }

    /// Number of stitches needed to go around `circumference`
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "circumferences are small and non-negative, and `as` saturates"
    )]
    pub fn stitches(self, circumference: f64) -> u32 {
        match self {
            Self::Accurate => (circumference.round() as u32).max(1),
            Self::Even => ((circumference / f64::from(EVEN_SEGMENTS)).round() as u32)
                .max(1)
                .saturating_mul(EVEN_SEGMENTS),
        }
    }
}

/// Number of rows needed to cover `length`, never fewer than `min`
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "lengths are small and non-negative, and `as` saturates"
)]
pub fn rows_for(length: f64, min: u32) -> u32 {
    (length.round() as u32).max(min)
}

/// Limit the change between consecutive rounds so that each round can be worked from the last.
///
/// A round can at most double the previous one (every stitch increased) or halve it (every
/// stitch decreased). Counts are only ever lowered, so a symmetric profile stays symmetric.
/// Returns the number of rounds that were changed.
pub fn smooth(counts: &mut [u32]) -> usize {
    let mut adjusted = 0;

    // growth, working forwards
    let mut prev: Option<u32> = None;
    for count in counts.iter_mut() {
        if let Some(p) = prev
            && *count > p.saturating_mul(2)
        {
            *count = p.saturating_mul(2);
            adjusted += 1;
        }
        prev = Some(*count);
    }

    // shrinkage, working backwards
    let mut next: Option<u32> = None;
    for count in counts.iter_mut().rev() {
        if let Some(n) = next
            && *count > n.saturating_mul(2)
        {
            *count = n.saturating_mul(2);
            adjusted += 1;
        }
        next = Some(*count);
    }

    adjusted
}

/// How the first round is started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    /// Single crochets worked into an adjustable ring, for shapes that close to a point
    MagicRing,

    /// A foundation chain joined into a ring, for open tubes
    ChainRing,
}

/// A complete pattern: the stitch count of every round plus the text around them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    title: String,
    start: Start,
    rows: Vec<u32>,
    finish: String,
}

impl Pattern {
    #[must_use]
    pub const fn new(title: String, start: Start, rows: Vec<u32>, finish: String) -> Self {
        Self {
            title,
            start,
            rows,
            finish,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn start(&self) -> Start {
        self.start
    }

    #[must_use]
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    #[must_use]
    pub fn finish(&self) -> &str {
        &self.finish
    }
}
