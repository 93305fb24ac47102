//! Hardware seam traits
//!
//! The engine reaches the outside world through two collaborators: a
//! byte transport that delivers packets to the panel, and a wall-clock
//! source. Device discovery, pairing and link-layer retry live behind
//! the transport implementation.

pub mod time;
pub mod transport;

pub use time::{TimeOfDay, TimeSource};
pub use transport::Transport;
