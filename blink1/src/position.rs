use log::warn;
use crate::Error;

/// A position within the device's pattern memory.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    value: u8
}

impl Position {
    /// The last position in the pattern.
    pub const MAX: Self = Self { value: 11 };

    /// Create a `Position`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if position is not between 0 and 11 (inclusive).
    pub fn try_new(position: i32) -> Result<Self, Error> {
        u8::try_from(position)
            .ok()
            .filter(|value| *value <= Self::MAX.value)
            .map(|value| Self { value })
            .ok_or(Error::InvalidPosition(position))
    }

    /// Create a `Position`, clamping anything outside 0-11 into range.
    #[must_use]
    pub fn saturating_new(position: i32) -> Self {
        let value = position.clamp(0, Self::MAX.value.into());
        Self { value: u8::try_from(value).unwrap_or(Self::MAX.value) }
    }

    /// Get the position as sent to the device.
    #[must_use]
    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.value
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.value)
    }
}


/// Read an integer the way C's `atoi` does.
///
/// Leading whitespace and a sign are allowed, then as many digits as there are.
/// Anything after the digits is ignored, and a field with no leading digits reads as 0.
/// Values which don't fit saturate at `i32::MIN`/`i32::MAX`.
pub(crate) fn lenient_integer(field: &str) -> i32 {
    let trimmed = field.trim_start_matches([' ', '\t', '\n', '\x0B', '\x0C', '\r']);
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed)
    };
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();

    if digits != unsigned.len() || digits == 0 {
        warn!("{field:?} is not a whole number, reading it as {:?}", &unsigned[..digits]);
    }

    let value = unsigned[..digits].bytes().fold(0_i64, |value, digit| {
        (value * 10 + i64::from(digit - b'0')).min(i64::from(i32::MAX) + 1)
    });
    let value = if negative { -value } else { value };
    i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

/// Read a flag as C would, anything other than 0 is true.
pub(crate) fn lenient_flag(field: &str) -> bool {
    lenient_integer(field) != 0
}
