//! Fixed-interval clock driver.
//!
//! Each tick renders the current time string, diffs against the
//! previous frame, encodes one pixel command per change, and forwards
//! the batch in order. Only the changed pixels travel over the link.

use embedded_hal::delay::DelayNs;
use lumatrix_protocol::Command;

use crate::config::ClockConfig;
use crate::dispatch::{send_batch, BatchError};
use crate::framebuffer::{diff, Framebuffer};
use crate::render::render_time;
use crate::traits::{TimeSource, Transport};

/// Display-state synchronization driver
///
/// Owns the previous frame as an explicit value. The render loop is the
/// only writer and the only reader, so no locking is involved.
pub struct ClockDriver {
    config: ClockConfig,
    previous: Framebuffer,
}

impl ClockDriver {
    /// Create a driver with the given layout configuration
    ///
    /// The previous frame starts all black, matching a freshly powered
    /// panel.
    pub const fn new(config: ClockConfig) -> Self {
        Self {
            config,
            previous: Framebuffer::new(),
        }
    }

    /// Render one tick and push the changes to the panel
    ///
    /// Returns the number of pixel packets sent; zero when nothing
    /// changed. On a transport failure the previous frame is left
    /// untouched, so the next tick re-diffs against the stale model and
    /// resends whatever still differs. Pixel writes are idempotent, so
    /// the panel converges even after a partial batch.
    pub fn tick<T: Transport>(
        &mut self,
        time: &str,
        transport: &mut T,
    ) -> Result<usize, BatchError<T::Error>> {
        let current = render_time(time, self.config.x_offset, self.config.y_offset);
        let changes = diff(&self.previous, &current);

        let sent = send_batch(
            transport,
            changes.iter().map(|change| {
                Command::SetPixel {
                    color: change.color,
                    x: change.coord.x,
                    y: change.coord.y,
                }
                .encode()
            }),
        )?;

        self.previous = current;
        Ok(sent)
    }

    /// Layout configuration this driver was created with
    pub const fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Frame state as of the last fully successful tick
    pub fn previous_frame(&self) -> &Framebuffer {
        &self.previous
    }
}

/// Run the render loop indefinitely
///
/// One tick per configured interval: render, diff, encode, dispatch,
/// swap, then sleep. A tick always completes its dispatch before the
/// loop suspends; a transport failure is fatal for that tick only and
/// the loop keeps going.
pub fn run<C, T, D>(driver: &mut ClockDriver, source: &mut C, transport: &mut T, delay: &mut D) -> !
where
    C: TimeSource,
    T: Transport,
    D: DelayNs,
{
    loop {
        let now = source.now().format();
        if let Err(_failure) = driver.tick(&now, transport) {
            #[cfg(feature = "defmt")]
            defmt::warn!("tick aborted after {} packets", _failure.sent);
        }
        delay.delay_ms(driver.config.interval_ms);
    }
}
