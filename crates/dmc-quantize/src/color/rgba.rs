//! 8-bit RGBA color type
//!
//! Channels are stored as raw bytes exactly as they appear in the source
//! image or palette file. No gamma handling is applied anywhere: matching is
//! plain Euclidean distance over the four channel values.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A four-channel color with 8 bits per channel.
///
/// Equality is exact component-wise equality, alpha included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Fully opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color (alpha = 255).
    ///
    /// # Example
    /// ```
    /// use dmc_quantize::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns true if the alpha channel is exactly zero.
    ///
    /// Any nonzero alpha counts as visible, not only 255.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Squared Euclidean distance over all four channels.
    ///
    /// Alpha participates in the distance. The largest possible value is
    /// `4 * 255^2`, which fits comfortably in a `u32`, so comparisons on
    /// this value are exact.
    #[inline]
    pub fn distance_squared(self, other: Rgba) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        let da = self.a as i32 - other.a as i32;
        (dr * dr + dg * dg + db * db + da * da) as u32
    }

    /// Euclidean distance over all four channels.
    #[inline]
    pub fn distance(self, other: Rgba) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Encode as an 8-digit uppercase hex string in `AARRGGBB` order.
    ///
    /// Alpha comes first. This is the format spreadsheet fills expect and
    /// the format used by every grid and legend export.
    ///
    /// # Example
    /// ```
    /// use dmc_quantize::Rgba;
    /// assert_eq!(Rgba::new(250, 10, 10, 255).to_argb_hex(), "FFFA0A0A");
    /// assert_eq!(Rgba::new(1, 2, 3, 0).to_argb_hex(), "00010203");
    /// ```
    pub fn to_argb_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Encode as a CSS `#RRGGBB` string (alpha dropped).
    pub fn to_css_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Text color that stays readable on top of this color.
    ///
    /// The RGB part is read as one 24-bit number; anything below `0x7FFFFF`
    /// gets white text, the rest black.
    pub fn contrast_text(self) -> Rgba {
        let packed = (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32;
        if packed < 0x7F_FFFF {
            Rgba::WHITE
        } else {
            Rgba::BLACK
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_argb_hex())
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supported formats (leading `#` optional, case-insensitive, surrounding
    /// whitespace trimmed):
    /// - `RGB` - shorthand, expands each digit, alpha 255
    /// - `RRGGBB` - alpha 255
    /// - `AARRGGBB` - inverse of [`Rgba::to_argb_hex`]
    ///
    /// # Examples
    ///
    /// ```
    /// use dmc_quantize::Rgba;
    ///
    /// let red: Rgba = "#FF0000".parse().unwrap();
    /// assert_eq!(red, Rgba::opaque(255, 0, 0));
    ///
    /// let ghost: Rgba = "80FFFFFF".parse().unwrap();
    /// assert_eq!(ghost.a, 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::opaque(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::opaque(r, g, b))
            }
            8 => {
                let a = u8::from_str_radix(&s[0..2], 16)?;
                let r = u8::from_str_radix(&s[2..4], 16)?;
                let g = u8::from_str_radix(&s[4..6], 16)?;
                let b = u8::from_str_radix(&s[6..8], 16)?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_hex_puts_alpha_first() {
        let color = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_argb_hex(), "78123456");
    }

    #[test]
    fn test_argb_hex_zero_pads_and_uppercases() {
        assert_eq!(Rgba::new(0, 10, 171, 255).to_argb_hex(), "FF000AAB");
        assert_eq!(Rgba::TRANSPARENT.to_argb_hex(), "00000000");
    }

    #[test]
    fn test_display_prefixes_hash() {
        assert_eq!(Rgba::opaque(255, 0, 0).to_string(), "#FFFF0000");
    }

    #[test]
    fn test_css_hex_drops_alpha() {
        assert_eq!(Rgba::new(255, 128, 0, 12).to_css_hex(), "#FF8000");
    }

    #[test]
    fn test_distance_includes_alpha() {
        let a = Rgba::new(10, 10, 10, 255);
        let b = Rgba::new(10, 10, 10, 0);
        assert_eq!(a.distance_squared(b), 255 * 255);
        assert!((a.distance(b) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_equal() {
        let a = Rgba::new(250, 10, 10, 255);
        let b = Rgba::opaque(255, 0, 0);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
        assert_eq!(a.distance_squared(a), 0);
    }

    #[test]
    fn test_max_distance_fits() {
        let d = Rgba::TRANSPARENT.distance_squared(Rgba::WHITE);
        assert_eq!(d, 4 * 255 * 255);
    }

    #[test]
    fn test_transparency_is_alpha_zero_only() {
        assert!(Rgba::new(200, 0, 0, 0).is_transparent());
        assert!(!Rgba::new(0, 0, 0, 1).is_transparent());
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(Rgba::BLACK.contrast_text(), Rgba::WHITE);
        assert_eq!(Rgba::WHITE.contrast_text(), Rgba::BLACK);
        // 0x7F0000 is below the midpoint, 0x800000 is above
        assert_eq!(Rgba::opaque(0x7F, 0, 0).contrast_text(), Rgba::WHITE);
        assert_eq!(Rgba::opaque(0x80, 0, 0).contrast_text(), Rgba::BLACK);
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("#F00".parse::<Rgba>().unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!("00ff00".parse::<Rgba>().unwrap(), Rgba::opaque(0, 255, 0));
        assert_eq!(
            " #FFFA0A0A ".parse::<Rgba>().unwrap(),
            Rgba::new(250, 10, 10, 255)
        );
    }

    #[test]
    fn test_parse_inverts_argb_hex() {
        let color = Rgba::new(3, 141, 59, 26);
        assert_eq!(color.to_argb_hex().parse::<Rgba>().unwrap(), color);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "#FFFF".parse::<Rgba>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#GGGGGG".parse::<Rgba>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!("".parse::<Rgba>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!(
            "#ééé".parse::<Rgba>(),
            Err(ParseColorError::InvalidLength)
        ));
    }
}
