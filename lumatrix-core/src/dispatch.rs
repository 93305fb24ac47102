//! Ordered packet dispatch to the transport.

use crate::traits::Transport;

/// A batch send that failed partway
///
/// Packets before `sent` were delivered and remain applied on the
/// device; the batch is not atomic and nothing is rolled back or
/// retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatchError<E> {
    /// Packets successfully sent before the failure
    pub sent: usize,
    /// The underlying transport error
    pub error: E,
}

/// Send packets strictly in input order, one transport call per packet
///
/// Returns the number of packets sent. On failure the error carries how
/// many packets were already applied; the caller decides whether to
/// retry the remainder or rebuild the batch from a fresh diff. Accepts
/// any ordered sequence of byte packets, so callers can stream lazily
/// encoded packets without buffering a whole frame's worth.
pub fn send_batch<T, I>(transport: &mut T, packets: I) -> Result<usize, BatchError<T::Error>>
where
    T: Transport,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut sent = 0;
    for packet in packets {
        if let Err(error) = transport.send(packet.as_ref()) {
            return Err(BatchError { sent, error });
        }
        sent += 1;
    }
    Ok(sent)
}
