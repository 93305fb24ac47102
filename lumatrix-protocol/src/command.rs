//! Command variants and their binary packet encoders.
//!
//! Packet length and header bytes are determined solely by the command
//! variant. Encoding never fails: coordinates and effect indices are
//! clamped, oversized palettes are truncated. The panel firmware has no
//! error path to negotiate retries against, and effect indices above
//! [`MAX_EFFECT`] are known from hardware testing to damage the lights,
//! so the clamp is enforced here rather than merely validated.

use heapless::Vec;

use crate::color::Rgb;

/// Width and height of the pixel grid
pub const GRID_SIZE: u8 = 32;

/// Highest effect index the panel tolerates
pub const MAX_EFFECT: u8 = 11;

/// Triple slots in a color palette packet
pub const PALETTE_SLOTS: usize = 32;

/// Colors actually kept in a palette packet
///
/// One less than the slot count, matching the vendor controller
/// byte-for-byte; the last slot is always zero padding.
pub const MAX_PALETTE_COLORS: usize = PALETTE_SLOTS - 1;

/// Length of the longest packet (color palette)
pub const MAX_PACKET_LEN: usize = 2 + 3 * PALETTE_SLOTS;

/// Encoded wire packet for a single command
pub type Packet = Vec<u8, MAX_PACKET_LEN>;

// Packet templates. Variable fields are written over the placeholder
// bytes; everything else is constant across every instance.
const SET_PIXEL_TEMPLATE: [u8; 10] = [0x0A, 0x00, 0x05, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
const POWER_TEMPLATE: [u8; 5] = [0x05, 0x00, 0x07, 0x01, 0x00];
const SET_COLOR_TEMPLATE: [u8; 16] = [
    0x0F, 0x53, 0x47, 0x4C, 0x53, 0x00, 0x00, 0x64, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x32,
];
const SET_EFFECT_TEMPLATE: [u8; 16] = [
    0x0A, 0x4D, 0x55, 0x4C, 0x54, 0x08, 0x00, 0x64, 0x50, 0x07, 0x32, 0x00, 0x00, 0x00, 0x00, 0x00,
];
const VERSION_TEMPLATE: [u8; 16] = [
    0x03, 0x56, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Target of a version query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VersionTarget {
    /// Board revision
    Pcb,
    /// Controller firmware revision
    Firmware,
}

/// A single panel command
///
/// Commands are transient: constructed per call and immediately encoded.
/// The panel answers version queries with a notification on its read
/// characteristic; all other commands are fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Set one pixel in graffiti mode
    SetPixel { color: Rgb, x: u8, y: u8 },
    /// Switch the panel on or off
    Power { on: bool },
    /// Set the whole panel to a solid color
    SetColor { color: Rgb },
    /// Select a built-in effect
    SetEffect {
        effect: u8,
        reverse: bool,
        speed: u8,
        saturation: u8,
    },
    /// Upload the effect color palette
    ColorPalette { colors: &'a [Rgb] },
    /// Query the PCB or firmware version
    Version { target: VersionTarget },
}

impl Command<'_> {
    /// Encode this command into its wire packet
    pub fn encode(&self) -> Packet {
        match self {
            Command::SetPixel { color, x, y } => encode_set_pixel(*color, *x, *y),
            Command::Power { on } => encode_power(*on),
            Command::SetColor { color } => encode_set_color(*color),
            Command::SetEffect {
                effect,
                reverse,
                speed,
                saturation,
            } => encode_set_effect(*effect, *reverse, *speed, *saturation),
            Command::ColorPalette { colors } => encode_palette(colors),
            Command::Version { target } => encode_version(*target),
        }
    }
}

fn packet_from(bytes: &[u8]) -> Packet {
    let mut packet = Packet::new();
    // Every template fits in MAX_PACKET_LEN
    let _ = packet.extend_from_slice(bytes);
    packet
}

fn encode_set_pixel(color: Rgb, x: u8, y: u8) -> Packet {
    let mut buf = SET_PIXEL_TEMPLATE;
    buf[5] = color.r;
    buf[6] = color.g;
    buf[7] = color.b;
    // Coordinates past the edge are clamped, not dropped
    buf[8] = x.min(GRID_SIZE - 1);
    buf[9] = y.min(GRID_SIZE - 1);
    packet_from(&buf)
}

fn encode_power(on: bool) -> Packet {
    let mut buf = POWER_TEMPLATE;
    buf[4] = on as u8;
    packet_from(&buf)
}

fn encode_set_color(color: Rgb) -> Packet {
    let mut buf = SET_COLOR_TEMPLATE;
    // The protocol carries two color slots; the panel expects them
    // identical
    buf[9] = color.r;
    buf[10] = color.g;
    buf[11] = color.b;
    buf[12] = color.r;
    buf[13] = color.g;
    buf[14] = color.b;
    packet_from(&buf)
}

fn encode_set_effect(effect: u8, reverse: bool, speed: u8, saturation: u8) -> Packet {
    let mut buf = SET_EFFECT_TEMPLATE;
    buf[5] = effect.min(MAX_EFFECT);
    buf[6] = reverse as u8;
    buf[8] = speed;
    buf[10] = saturation;
    packet_from(&buf)
}

fn encode_palette(colors: &[Rgb]) -> Packet {
    let kept = colors.len().min(MAX_PALETTE_COLORS);
    let mut buf = [0u8; MAX_PACKET_LEN];
    buf[0] = (kept * 3) as u8;
    for (i, color) in colors[..kept].iter().enumerate() {
        let at = 2 + i * 3;
        buf[at] = color.r;
        buf[at + 1] = color.g;
        buf[at + 2] = color.b;
    }
    // Unused triple slots stay zero
    packet_from(&buf)
}

fn encode_version(target: VersionTarget) -> Packet {
    let mut buf = VERSION_TEMPLATE;
    buf[3] = match target {
        VersionTarget::Pcb => 0x00,
        VersionTarget::Firmware => 0x01,
    };
    packet_from(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_layout() {
        let packet = Command::SetPixel {
            color: Rgb::new(0xFF, 0x00, 0x00),
            x: 31,
            y: 31,
        }
        .encode();
        assert_eq!(
            packet.as_slice(),
            &[0x0A, 0x00, 0x05, 0x01, 0x00, 0xFF, 0x00, 0x00, 0x1F, 0x1F]
        );
    }

    #[test]
    fn test_set_pixel_clamps_coordinates() {
        let packet = Command::SetPixel {
            color: Rgb::new(1, 2, 3),
            x: 50,
            y: 200,
        }
        .encode();
        assert_eq!(packet[8], 31);
        assert_eq!(packet[9], 31);
    }

    #[test]
    fn test_power_states() {
        let on = Command::Power { on: true }.encode();
        assert_eq!(on.as_slice(), &[0x05, 0x00, 0x07, 0x01, 0x01]);

        let off = Command::Power { on: false }.encode();
        assert_eq!(off.as_slice(), &[0x05, 0x00, 0x07, 0x01, 0x00]);
    }

    #[test]
    fn test_set_color_duplicates_triple() {
        let packet = Command::SetColor {
            color: Rgb::new(0x12, 0x34, 0x56),
        }
        .encode();
        assert_eq!(packet.len(), 16);
        assert_eq!(&packet[..9], &[0x0F, 0x53, 0x47, 0x4C, 0x53, 0x00, 0x00, 0x64, 0x50]);
        assert_eq!(&packet[9..12], &[0x12, 0x34, 0x56]);
        assert_eq!(&packet[12..15], &[0x12, 0x34, 0x56]);
        assert_eq!(packet[15], 0x32);
    }

    #[test]
    fn test_set_effect_layout() {
        let packet = Command::SetEffect {
            effect: 7,
            reverse: false,
            speed: 50,
            saturation: 50,
        }
        .encode();
        assert_eq!(
            packet.as_slice(),
            &[
                0x0A, 0x4D, 0x55, 0x4C, 0x54, 0x07, 0x00, 0x64, 0x32, 0x07, 0x32, 0x00, 0x00,
                0x00, 0x00, 0x00
            ]
        );
    }

    #[test]
    fn test_set_effect_clamps_index() {
        let wild = Command::SetEffect {
            effect: 99,
            reverse: true,
            speed: 10,
            saturation: 20,
        }
        .encode();
        let max = Command::SetEffect {
            effect: MAX_EFFECT,
            reverse: true,
            speed: 10,
            saturation: 20,
        }
        .encode();
        assert_eq!(wild[5], max[5]);
        assert_eq!(wild[5], MAX_EFFECT);
    }

    #[test]
    fn test_palette_truncates_to_31() {
        let colors: [Rgb; 40] = core::array::from_fn(|i| Rgb::new(i as u8, 0, 255 - i as u8));
        let packet = Command::ColorPalette { colors: &colors }.encode();

        assert_eq!(packet.len(), 98);
        assert_eq!(packet[0], 31 * 3);
        assert_eq!(packet[1], 0);
        // First 31 input colors survive in order
        for (i, color) in colors[..31].iter().enumerate() {
            let at = 2 + i * 3;
            assert_eq!(&packet[at..at + 3], &[color.r, color.g, color.b]);
        }
        // The last slot is padding
        assert_eq!(&packet[95..98], &[0, 0, 0]);
    }

    #[test]
    fn test_palette_short_input_zero_padded() {
        let colors = [Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)];
        let packet = Command::ColorPalette { colors: &colors }.encode();

        assert_eq!(packet.len(), 98);
        assert_eq!(packet[0], 6);
        assert_eq!(&packet[2..5], &[10, 20, 30]);
        assert_eq!(&packet[5..8], &[40, 50, 60]);
        assert!(packet[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_palette_empty() {
        let packet = Command::ColorPalette { colors: &[] }.encode();
        assert_eq!(packet.len(), 98);
        assert_eq!(packet[0], 0);
        assert!(packet[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_version_targets() {
        let pcb = Command::Version {
            target: VersionTarget::Pcb,
        }
        .encode();
        assert_eq!(&pcb[..4], &[0x03, 0x56, 0x45, 0x00]);
        assert!(pcb[4..].iter().all(|&b| b == 0));
        assert_eq!(pcb.len(), 16);

        let fw = Command::Version {
            target: VersionTarget::Firmware,
        }
        .encode();
        assert_eq!(&fw[..4], &[0x03, 0x56, 0x45, 0x01]);
        assert_eq!(fw.len(), 16);
    }

    #[test]
    fn test_length_is_fixed_per_variant() {
        assert_eq!(
            Command::SetPixel {
                color: Rgb::BLACK,
                x: 0,
                y: 0
            }
            .encode()
            .len(),
            10
        );
        assert_eq!(Command::Power { on: true }.encode().len(), 5);
        assert_eq!(
            Command::SetColor { color: Rgb::WHITE }.encode().len(),
            16
        );
        assert_eq!(
            Command::SetEffect {
                effect: 0,
                reverse: false,
                speed: 0,
                saturation: 0
            }
            .encode()
            .len(),
            16
        );
        assert_eq!(Command::ColorPalette { colors: &[] }.encode().len(), 98);
        assert_eq!(
            Command::Version {
                target: VersionTarget::Pcb
            }
            .encode()
            .len(),
            16
        );
    }
}
