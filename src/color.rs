use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn splat(x: u8) -> Self {
        Self::new(x, x, x)
    }

    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn to_bytes(self) -> [u8; 3] {
        <[u8; 3]>::from(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(x: Rgb) -> Self {
        [x.r, x.g, x.b]
    }
}

/// CSS hex notation, `#rrggbb`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected a color like #rrggbb or #rgb")]
pub struct ParseColorError;

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError);
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ParseColorError)?;
        match hex.len() {
            6 => Ok(Self::from_u32(value)),
            // #rgb doubles each digit
            3 => {
                let expand = |x: u32| (x & 0xf) as u8 * 0x11;
                Ok(Self::new(expand(value >> 8), expand(value >> 4), expand(value)))
            }
            _ => Err(ParseColorError),
        }
    }
}
