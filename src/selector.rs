//! Random palette pair selection.

use crate::color::Color;
use crate::state::ColorPair;
use rand::Rng;

/// Maximum number of colors a palette can hold.
pub const MAX_PALETTE_COLORS: usize = 64;

/// Fixed-capacity palette storage.
pub type Palette = heapless::Vec<Color, MAX_PALETTE_COLORS>;

/// Draws two distinct indices into a palette of `len` colors.
///
/// Returns `None` when `len < 2`. The second index is redrawn until it differs from the
/// first; for palettes of at least two entries the expected number of redraws is below
/// one, so this stays O(1) on average. Pairs are not tracked across calls and may repeat.
pub fn pick_pair<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }

    let first = rng.gen_range(0..len);
    let mut second = rng.gen_range(0..len);
    while second == first {
        second = rng.gen_range(0..len);
    }
    Some((first, second))
}

/// Draws a top-left / bottom-right color pair from `palette`.
pub fn pick_colors<R: Rng + ?Sized>(palette: &[Color], rng: &mut R) -> Option<ColorPair> {
    pick_pair(palette.len(), rng).map(|(tl, br)| ColorPair::new(palette[tl], palette[br]))
}
