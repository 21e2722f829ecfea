use log::trace;
use crate::{Command, Duration, Error, Position, Request, Rgb};

/// The binary HID report sent to a blink(1).
///
/// | Byte | Contents |
/// |------|----------|
/// | 0    | Report ID, always 1 |
/// | 1    | Command letter |
/// | 2-4  | Red, green, blue / flag, position / flag, duration |
/// | 5-6  | Fade duration (`c` and `P`) |
/// | 7    | Pattern position (`P`) |
/// | 8    | Unused, always 0 |
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    raw: [u8; Self::LEN]
}

impl Report {
    /// The size of a report in bytes.
    pub const LEN: usize = 9;
    /// The report ID, always the first byte.
    pub const ID: u8 = 1;

    /// Create a report for a command with all the fields zeroed.
    #[must_use]
    pub const fn new(command: Command) -> Self {
        let mut raw = [0; Self::LEN];
        raw[0] = Self::ID;
        raw[1] = command.as_u8();
        Self { raw }
    }

    /// Create a report from a command and its (unparsed) fields.
    ///
    /// # Example
    ///
    /// ```
    /// use blink1::{Command, Report};
    /// let report = Report::encode(Command::SetNow, &["red"]).unwrap();
    /// assert_eq!(report.as_bytes(), &[1, b'n', 0xFF, 0, 0, 0, 0, 0, 0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Anything from [`Request::try_from_fields`].
    pub fn encode<S: AsRef<str>>(command: Command, fields: &[S]) -> Result<Self, Error> {
        trace!("Report::encode({command:?}, {} fields)", fields.len());
        Request::try_from_fields(command, fields).map(|request| request.encode())
    }

    /// The command this report is for (if it's a known one).
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        Command::try_from_char(self.raw[1].into()).ok()
    }

    /// Get the bytes to send to the device.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.raw
    }

    /// Write a color into bytes 2-4.
    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.raw[2..=4].copy_from_slice(&<[u8; 3]>::from(color));
    }

    /// Write a fade duration into bytes 5-6.
    pub(crate) fn set_fade(&mut self, fade: Duration) {
        self.raw[5] = fade.high();
        self.raw[6] = fade.low();
    }

    /// Write a pattern position into byte 7.
    pub(crate) fn set_position(&mut self, position: Position) {
        self.raw[7] = position.as_u8();
    }

    /// Write an on/off flag into byte 2.
    pub(crate) fn set_flag(&mut self, flag: bool) {
        self.raw[2] = flag.into();
    }

    /// Write the position to play from into byte 3.
    pub(crate) fn set_play_position(&mut self, position: Position) {
        self.raw[3] = position.as_u8();
    }

    /// Write a tickle timeout into bytes 3-4.
    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.raw[3] = timeout.high();
        self.raw[4] = timeout.low();
    }
}

impl core::ops::Deref for Report {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

impl AsRef<[u8]> for Report {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl From<Report> for [u8; Report::LEN] {
    fn from(value: Report) -> Self {
        value.raw
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.raw[0], char::from(self.raw[1]))?;
        for byte in &self.raw[2..] {
            write!(f, " {byte:02x}")?;
        }
        Ok(())
    }
}


#[allow(clippy::missing_panics_doc, reason = "tests")]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        assert_eq!(Report::new(Command::Fade).as_bytes(), &[1, b'c', 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(Report::new(Command::ServerDown).as_bytes(), &[1, b'D', 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn command() {
        assert_eq!(Report::new(Command::Play).command(), Some(Command::Play));
        assert_eq!(Report { raw: [1, b'z', 0, 0, 0, 0, 0, 0, 0] }.command(), None);
    }

    #[test]
    fn display() {
        let mut report = Report::new(Command::SetNow);
        report.set_color(Rgb::new(0xAB, 0x01, 0x00));
        assert_eq!(report.to_string(), "1 n ab 01 00 00 00 00 00 00");
    }

    #[test]
    fn conversions() {
        let report = Report::new(Command::SetNow);
        assert_eq!(<[u8; 9]>::from(report), [1, b'n', 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(AsRef::<[u8]>::as_ref(&report), &[1, b'n', 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(report.len(), Report::LEN);
    }

    mod setters {
        use super::*;

        #[test]
        fn color() {
            let mut report = Report::new(Command::SetNow);
            report.set_color(Rgb::new(1, 2, 3));
            assert_eq!(report.as_bytes(), &[1, b'n', 1, 2, 3, 0, 0, 0, 0]);
        }

        #[test]
        fn fade() {
            let mut report = Report::new(Command::Fade);
            report.set_fade(Duration::from_hundredths(0x0102));
            assert_eq!(report.as_bytes(), &[1, b'c', 0, 0, 0, 1, 2, 0, 0]);
        }

        #[test]
        fn position() {
            let mut report = Report::new(Command::Pattern);
            report.set_position(Position::MAX);
            assert_eq!(report.as_bytes(), &[1, b'P', 0, 0, 0, 0, 0, 11, 0]);
        }

        #[test]
        fn flag() {
            let mut report = Report::new(Command::Play);
            report.set_flag(true);
            assert_eq!(report.as_bytes(), &[1, b'p', 1, 0, 0, 0, 0, 0, 0]);
            report.set_flag(false);
            assert_eq!(report.as_bytes(), &[1, b'p', 0, 0, 0, 0, 0, 0, 0]);
        }

        #[test]
        fn play_position() {
            let mut report = Report::new(Command::Play);
            report.set_play_position(Position::saturating_new(4));
            assert_eq!(report.as_bytes(), &[1, b'p', 0, 4, 0, 0, 0, 0, 0]);
        }

        #[test]
        fn timeout() {
            let mut report = Report::new(Command::ServerDown);
            report.set_timeout(Duration::from_hundredths(200));
            assert_eq!(report.as_bytes(), &[1, b'D', 0, 0, 200, 0, 0, 0, 0]);
        }
    }

    mod encode {
        use super::*;

        #[test]
        fn set_now() {
            assert_eq!(
                Report::encode(Command::SetNow, &["red"]).map(<[u8; 9]>::from),
                Ok([1, 0x6E, 0xFF, 0x00, 0x00, 0, 0, 0, 0])
            );
        }

        #[test]
        fn fade() {
            assert_eq!(
                Report::encode(Command::Fade, &["blue", ".5s"]).map(<[u8; 9]>::from),
                Ok([1, b'c', 0, 0, 255, 0x00, 0x32, 0, 0])
            );
        }

        #[test]
        fn pattern() {
            assert_eq!(
                Report::encode(Command::Pattern, &["green", "2s", "2"]).map(<[u8; 9]>::from),
                Ok([1, b'P', 0, 255, 0, 0x00, 0xC8, 2, 0])
            );
        }

        #[test]
        fn errors() {
            assert_eq!(Report::encode(Command::Pattern, &["green", "2s", "12"]), Err(Error::InvalidPosition(12)));
            assert_eq!(
                Report::encode(Command::Fade, &["red"]),
                Err(Error::WrongArgumentCount { command: Command::Fade, expected: 2, found: 1 })
            );
        }
    }
}
