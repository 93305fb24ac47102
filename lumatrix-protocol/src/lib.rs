//! Command protocol for 32x32 graffiti-mode LED matrix panels
//!
//! This crate defines the byte-oriented command protocol spoken by the
//! panel's BLE controller. Every command encodes to a packet with a fixed
//! header; only a handful of named fields vary per call:
//!
//! ```text
//! ┌────────────┬───────┬─────────────────────────────────────────┐
//! │ Command    │ Bytes │ Layout                                  │
//! ├────────────┼───────┼─────────────────────────────────────────┤
//! │ SetPixel   │ 10    │ 0A 00 05 01 00  R G B X Y               │
//! │ Power      │ 5     │ 05 00 07 01  state                      │
//! │ SetColor   │ 16    │ 0F 53 47 4C 53 00 00 64 50  RGB RGB 32  │
//! │ SetEffect  │ 16    │ 0A 4D 55 4C 54  effect rev 64 speed ..  │
//! │ Palette    │ 98    │ len*3 00  up to 31 RGB triples, padded  │
//! │ Version    │ 16    │ 03 56 45 target  + 12 zero bytes        │
//! └────────────┴───────┴─────────────────────────────────────────┘
//! ```
//!
//! The controller firmware has no documented error path, so encoders clamp
//! or truncate out-of-range inputs rather than refusing them; a malformed
//! packet can leave the panel in an undefined state.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod command;

pub use color::Rgb;
pub use command::{
    Command, Packet, VersionTarget, GRID_SIZE, MAX_EFFECT, MAX_PACKET_LEN, MAX_PALETTE_COLORS,
    PALETTE_SLOTS,
};
