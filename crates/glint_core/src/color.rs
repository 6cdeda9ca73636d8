//! Packed 16-bit RGB565 color.
//!
//! Bit layout: red `[15:11]`, green `[10:5]`, blue `[4:0]`. Every blend is
//! integer math on the packed channels with a 0-255 alpha scale.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Packs 8-bit channels into RGB565 by truncating the low bits.
#[inline]
#[must_use]
pub const fn rgb565(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | (b >> 3) as u16)
}

/// One framebuffer cell.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    /// Solid black.
    pub const BLACK: Self = Self(0x0000);
    /// Solid white.
    pub const WHITE: Self = Self(0xFFFF);
    /// Pure red.
    pub const RED: Self = Self(0xF800);
    /// Pure green.
    pub const GREEN: Self = Self(0x07E0);
    /// Pure blue.
    pub const BLUE: Self = Self(0x001F);
    /// Cyan.
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta.
    pub const MAGENTA: Self = Self(0xF81F);
    /// Yellow.
    pub const YELLOW: Self = Self(0xFFE0);
    /// Orange.
    pub const ORANGE: Self = Self(0xFD20);
    /// Purple.
    pub const PURPLE: Self = Self(0x8010);
    /// Mid gray.
    pub const GRAY: Self = Self(0x8410);
    /// Dark gray.
    pub const DARK_GRAY: Self = Self(0x4208);
    /// Light gray.
    pub const LIGHT_GRAY: Self = Self(0xC618);

    /// Wraps a raw packed value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw packed value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Packs native-width channels (5/6/5 bits); excess bits are masked off.
    #[inline]
    #[must_use]
    pub const fn from_channels(r5: u16, g6: u16, b5: u16) -> Self {
        Self(((r5 & 0x1F) << 11) | ((g6 & 0x3F) << 5) | (b5 & 0x1F))
    }

    /// Splits into native-width channels (5/6/5 bits).
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u16, u16, u16) {
        ((self.0 >> 11) & 0x1F, (self.0 >> 5) & 0x3F, self.0 & 0x1F)
    }

    /// Red expanded to 0-255.
    #[must_use]
    pub const fn r8(self) -> u8 {
        (((self.0 >> 11) & 0x1F) as u32 * 255 / 31) as u8
    }

    /// Green expanded to 0-255.
    #[must_use]
    pub const fn g8(self) -> u8 {
        (((self.0 >> 5) & 0x3F) as u32 * 255 / 63) as u8
    }

    /// Blue expanded to 0-255.
    #[must_use]
    pub const fn b8(self) -> u8 {
        ((self.0 & 0x1F) as u32 * 255 / 31) as u8
    }

    /// Mixes `self` over `bg`; `alpha` 255 is fully `self`.
    #[must_use]
    pub const fn blend(self, bg: Self, alpha: u8) -> Self {
        let (fr, fg, fb) = self.channels();
        let (br, bgc, bb) = bg.channels();
        let a = alpha as u32;
        let inv = 255 - a;
        let r = (fr as u32 * a + br as u32 * inv) / 255;
        let g = (fg as u32 * a + bgc as u32 * inv) / 255;
        let b = (fb as u32 * a + bb as u32 * inv) / 255;
        Self(((r << 11) | (g << 5) | b) as u16)
    }

    /// Brightens every channel, saturating at full intensity.
    #[must_use]
    pub const fn lighten(self, amount: u8) -> Self {
        let (r, g, b) = self.channels();
        let (dr, dg) = (amount as u16 / 8, amount as u16 / 4);
        let r = if r + dr < 0x1F { r + dr } else { 0x1F };
        let g = if g + dg < 0x3F { g + dg } else { 0x3F };
        let b = if b + dr < 0x1F { b + dr } else { 0x1F };
        Self::from_channels(r, g, b)
    }

    /// Dims every channel, saturating at zero.
    #[must_use]
    pub const fn darken(self, amount: u8) -> Self {
        let (r, g, b) = self.channels();
        let (dr, dg) = (amount as u16 / 8, amount as u16 / 4);
        let r = if r > dr { r - dr } else { 0 };
        let g = if g > dg { g - dg } else { 0 };
        let b = if b > dr { b - dr } else { 0 };
        Self::from_channels(r, g, b)
    }

    /// Parses `#RRGGBB` (8-bit channels, packed with truncation).
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(rgb565((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

impl Serialize for Rgb565 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for Rgb565 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Rgb565Visitor)
    }
}

struct Rgb565Visitor;

impl Visitor<'_> for Rgb565Visitor {
    type Value = Rgb565;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 16-bit packed RGB565 integer or a \"#RRGGBB\" string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Rgb565, E> {
        u16::try_from(v)
            .map(Rgb565)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Rgb565, E> {
        u16::try_from(v)
            .map(Rgb565)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Rgb565, E> {
        Rgb565::parse_hex(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
