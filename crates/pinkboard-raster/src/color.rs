//! Color parsing

use image::Rgba;
use pinkboard_core::{PinkboardError, Result};

/// Fill color of the heart sprite (`#ea80b0`)
pub const DEFAULT_FILL: Rgba<u8> = Rgba([0xea, 0x80, 0xb0, 0xff]);

/// Parse `#rrggbb`, `#rrggbbaa`, or `transparent`
pub fn parse_color(s: &str) -> Result<Rgba<u8>> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return Ok(Rgba([0, 0, 0, 0]));
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PinkboardError::InvalidConfig(format!(
            "expected a color like #ea80b0, got '{s}'"
        )));
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let parse = || -> std::result::Result<Rgba<u8>, std::num::ParseIntError> {
        let alpha = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
    };
    parse().map_err(|e| PinkboardError::InvalidConfig(format!("invalid color '{s}': {e}")))
}
