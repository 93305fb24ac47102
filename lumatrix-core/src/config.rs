//! Clock layout and pacing configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default delay between render ticks in milliseconds
pub const DEFAULT_INTERVAL_MS: u32 = 25;

/// Clock face configuration
///
/// Threaded explicitly into the driver; there is no module-level state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Column of the first glyph's left edge
    pub x_offset: i16,
    /// Row of the glyphs' top edge
    pub y_offset: i16,
    /// Delay between render ticks in milliseconds
    pub interval_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            x_offset: 2,
            y_offset: 1,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}
