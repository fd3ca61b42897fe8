//! Packed ARGB colors and hex decoding.
//!
//! Colors travel through the engine as [`Color`], a 32-bit `0xAARRGGBB` value. Palette
//! entries arrive as text (`ff0000`, `80ff0000`) and are decoded here; the exact values
//! produced matter because the interpolator works directly on these bytes.

use palette::rgb::channels::Argb;
use palette::{Srgb, Srgba};

/// A packed 32-bit ARGB color, alpha in the most significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    /// Opaque black. Also the fallback pair color when no pair can be drawn.
    pub const BLACK: Color = Color(0xFF00_0000);

    /// Builds a color from individual channels.
    #[inline]
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Color(
            ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32,
        )
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Decodes a bare hex color string.
    ///
    /// Accepts `RRGGBB` (alpha forced to `0xFF`) or `AARRGGBB`, case-insensitive, no prefix.
    ///
    /// # Errors
    /// * `InvalidLength` - string is not 6 or 8 characters long
    /// * `InvalidDigit` - string contains a character that is not a hex digit
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        let value = match text.len() {
            8 => parse_hex_digits(text)?,
            6 => 0xFF00_0000 | parse_hex_digits(text)?,
            len => return Err(ColorError::InvalidLength { len }),
        };
        Ok(Color(value))
    }

    /// Decodes a `0x`-prefixed color as written in border color options.
    ///
    /// The value is taken literally: `0xff0000` is fully transparent red, not opaque red.
    pub fn from_prefixed_hex(text: &str) -> Result<Self, ColorError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .ok_or(ColorError::MissingPrefix)?;
        if digits.is_empty() || digits.len() > 8 {
            return Err(ColorError::InvalidLength { len: digits.len() });
        }
        parse_hex_digits(digits).map(Color)
    }

    /// Converts to an 8-bit palette color with alpha.
    #[inline]
    pub fn to_srgba(self) -> Srgba<u8> {
        Srgba::<u8>::from_u32::<Argb>(self.0)
    }

    /// Converts to a floating point RGB color (0.0-1.0), dropping alpha.
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        self.to_srgba().color.into_format()
    }
}

impl From<Srgba<u8>> for Color {
    fn from(color: Srgba<u8>) -> Self {
        Color(color.into_u32::<Argb>())
    }
}

impl From<Color> for Srgba<u8> {
    fn from(color: Color) -> Self {
        color.to_srgba()
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

fn parse_hex_digits(digits: &str) -> Result<u32, ColorError> {
    digits.chars().try_fold(0u32, |acc, c| {
        c.to_digit(16)
            .map(|digit| (acc << 4) | digit)
            .ok_or(ColorError::InvalidDigit)
    })
}

/// Color decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Wrong number of hex digits.
    InvalidLength { len: usize },

    /// A character outside `[0-9a-fA-F]`.
    InvalidDigit,

    /// Expected a `0x` prefix.
    MissingPrefix,
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::InvalidLength { len } => {
                write!(f, "invalid hex color length {} (must be 6 or 8 digits)", len)
            }
            ColorError::InvalidDigit => {
                write!(f, "invalid character in hex color string")
            }
            ColorError::MissingPrefix => {
                write!(f, "hex color must start with 0x")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
