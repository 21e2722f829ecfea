//! Parsing of fade and tickle durations.
//!
//! The blink(1) counts time in hundredths of a second and stores it in two bytes.
//! A duration is written as a number optionally followed by a unit:
//!
//! | Token   | Unit                   | Hundredths |
//! |---------|------------------------|------------|
//! | `50`    | hundredths of a second | 50         |
//! | `.5s`   | seconds                | 50         |
//! | `500ms` | milliseconds           | 50         |
//!
//! Values are truncated towards zero and clamped to the range the device can store.

use log::trace;
use crate::Error;

/// A duration in hundredths of a second.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration(u16);

impl Duration {
    /// The longest duration which can be sent to the device.
    pub const MAX: Self = Self(u16::MAX);

    /// Create a `Duration` from a number of hundredths of a second.
    #[must_use]
    pub const fn from_hundredths(hundredths: u16) -> Self {
        Self(hundredths)
    }

    /// Get the number of hundredths of a second.
    #[must_use]
    pub const fn as_hundredths(&self) -> u16 {
        self.0
    }

    /// The most significant byte, as sent to the device.
    #[must_use]
    pub const fn high(&self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// The least significant byte, as sent to the device.
    #[must_use]
    pub const fn low(&self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Parse a duration from a number, a number of seconds (`s` suffix)
    /// or a number of milliseconds (`ms` suffix).
    ///
    /// Values above [`Duration::MAX`] are clamped to it, fractions of a hundredth are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use blink1::Duration;
    /// assert_eq!(Duration::parse("2s"), Ok(Duration::from_hundredths(200)));
    /// assert_eq!(Duration::parse("500ms"), Ok(Duration::from_hundredths(50)));
    /// assert_eq!(Duration::parse("100000ms"), Ok(Duration::MAX));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDuration`] if:
    ///   * The token doesn't start with a number.
    ///   * The number is followed by anything other than `s` or `ms`.
    ///   * The number is NaN.
    ///   * The result would be negative.
    pub fn parse(token: &str) -> Result<Self, Error> {
        trace!("Duration::parse({token:?})");
        let (value, unit) = float_prefix(token).ok_or(Error::InvalidDuration)?;
        let hundredths = match unit {
            "" => value,
            "s" => value * 100.0,
            "ms" => value / 10.0,
            _ => return Err(Error::InvalidDuration)
        };
        Self::try_from_hundredths(hundredths)
    }

    /// Clamp to -1..=65535 then truncate, -1 being the failure case.
    #[expect(clippy::cast_possible_truncation)]
    fn try_from_hundredths(value: f32) -> Result<Self, Error> {
        if value.is_nan() { return Err(Error::InvalidDuration) }
        let value = value.clamp(-1.0, f32::from(u16::MAX)) as i32;
        u16::try_from(value).map(Self).map_err(|_| Error::InvalidDuration)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Duration> for core::time::Duration {
    fn from(value: Duration) -> Self {
        Self::from_millis(u64::from(value.0) * 10)
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}s", self.0 / 100, self.0 % 100)
    }
}


/// Split the longest leading floating point number from `token`,
/// following the same rules as C's `strtof`.
///
/// Returns `None` if the token doesn't start with a number.
fn float_prefix(token: &str) -> Option<(f32, &str)> {
    let bytes = token.as_bytes();
    let mut index = bytes.iter().take_while(|byte| is_c_space(**byte)).count();
    let start = index;

    let negative = bytes.get(index) == Some(&b'-');
    if matches!(bytes.get(index), Some(b'+' | b'-')) { index += 1; }

    for (word, value) in [("infinity", f32::INFINITY), ("inf", f32::INFINITY), ("nan", f32::NAN)] {
        if token.get(index..(index + word.len())).is_some_and(|text| text.eq_ignore_ascii_case(word)) {
            let value = if negative { -value } else { value };
            return Some((value, &token[(index + word.len())..]));
        }
    }

    let count_digits = |from: usize| bytes[from..].iter().take_while(|byte| byte.is_ascii_digit()).count();

    let mut digits = count_digits(index);
    index += digits;
    if bytes.get(index) == Some(&b'.') {
        let fraction = count_digits(index + 1);
        digits += fraction;
        index += 1 + fraction;
    }
    if digits == 0 { return None }

    // The exponent only counts if it has digits
    if matches!(bytes.get(index), Some(b'e' | b'E')) {
        let mut exponent = index + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) { exponent += 1; }
        let exponent_digits = count_digits(exponent);
        if exponent_digits > 0 { index = exponent + exponent_digits; }
    }

    let value = token[start..index].parse::<f32>().ok()?;
    Some((value, &token[index..]))
}

const fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
