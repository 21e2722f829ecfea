//! Resolving color names and hexadecimal values.

use log::{trace, debug};
use crate::Error;

/// The colors which can be referred to by name.
pub const NAMED_COLORS: [(&str, u32); 7] = [
    ("blue",   0x00_00FF),
    ("cyan",   0x00_FFFF),
    ("green",  0x00_FF00),
    ("purple", 0xFF_00FF),
    ("red",    0xFF_0000),
    ("white",  0xFF_FFFF),
    ("yellow", 0xFF_FF00)
];

/// The largest value a 24 bit color can take.
pub const MAX_VALUE: u32 = 0xFF_FFFF;

/// A 24 bit color, split into its red, green and blue channels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8
}

impl Rgb {
    /// Create an `Rgb` from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create an `Rgb` from a `0xRRGGBB` value, anything above bit 23 is ignored.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            red: ((value & 0xFF_0000) >> 16) as u8,
            green: ((value & 0x00_FF00) >> 8) as u8,
            blue: (value & 0x00_00FF) as u8
        }
    }

    /// Get the color as a `0xRRGGBB` value.
    #[must_use]
    pub const fn as_u24(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Resolve a color from either a name in [`NAMED_COLORS`] (case sensitive),
    /// or a hexadecimal value (with an optional `0x` prefix).
    ///
    /// # Example
    ///
    /// ```
    /// use blink1::Rgb;
    /// assert_eq!(Rgb::resolve("purple"), Ok(Rgb::new(0xFF, 0x00, 0xFF)));
    /// assert_eq!(Rgb::resolve("454545"), Ok(Rgb::new(0x45, 0x45, 0x45)));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColor`] if the token is empty, contains anything other than
    /// hexadecimal digits, or is greater than `FFFFFF`.
    pub fn resolve(token: &str) -> Result<Self, Error> {
        trace!("Rgb::resolve({token:?})");
        if let Some((name, value)) = NAMED_COLORS.iter().find(|(name, _)| *name == token) {
            debug!("found defined color #{value:06X} ({name})");
            return Ok(Self::from_u24(*value));
        }

        let digits = token.strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        // from_str_radix would allow a leading '+'
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor);
        }

        match u32::from_str_radix(digits, 16) {
            Ok(value) if value <= MAX_VALUE => Ok(Self::from_u24(value)),
            _ => Err(Error::InvalidColor)
        }
    }

    /// Get the name of this color, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        let value = self.as_u24();
        NAMED_COLORS.iter().find(|(_, v)| *v == value).map(|(name, _)| *name)
    }
}

impl core::str::FromStr for Rgb {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06X}", self.as_u24())
    }
}
