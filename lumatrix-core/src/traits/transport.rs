//! Byte transport abstraction.

/// Packet delivery to the panel
///
/// Implementations deliver raw bytes to the panel's command
/// characteristic. Calls are strictly sequential: at most one packet is
/// in flight at a time and the engine never issues concurrent sends.
/// Timeout policy is the implementation's concern; the engine treats
/// any failure as terminal for the current batch.
pub trait Transport {
    /// Error type for send operations
    type Error;

    /// Deliver one packet to the device
    ///
    /// Blocks until the packet has been handed to the link or an error
    /// occurs.
    fn send(&mut self, packet: &[u8]) -> Result<(), Self::Error>;
}
