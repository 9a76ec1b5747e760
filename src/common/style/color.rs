use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color representation.
///
/// Serialized as a six-digit hex triplet without the `#` prefix, which is the
/// form DrawingML `srgbClr` values take.
///
/// # Examples
///
/// ```rust
/// use deckwright::common::RGBColor;
///
/// let red = RGBColor::from_hex("E63946").unwrap();
/// assert_eq!(red, RGBColor::new(0xE6, 0x39, 0x46));
/// assert_eq!("#1d3557".parse::<RGBColor>().unwrap().to_hex(), "1D3557");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: RGBColor = RGBColor::new(0x00, 0x00, 0x00);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse "RRGGBB" or "#RRGGBB".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for RGBColor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RGBColor> for String {
    fn from(color: RGBColor) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let navy = RGBColor::from_hex("1D3557").unwrap();
        assert_eq!(navy.to_hex(), "1D3557");
        assert_eq!(navy.to_string(), "#1D3557");
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(RGBColor::from_u32(0xFFD166), RGBColor::new(0xFF, 0xD1, 0x66));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(RGBColor::from_hex("FFF").is_none());
        assert!(RGBColor::from_hex("GG0000").is_none());
        assert!(RGBColor::from_hex("ÄÄÄ").is_none());
        assert!(matches!(
            "red".parse::<RGBColor>(),
            Err(Error::InvalidColor(_))
        ));
    }
}
