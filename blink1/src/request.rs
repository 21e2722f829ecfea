use log::{trace, debug};
use crate::{Command, Duration, Error, Position, Report, Rgb};
use crate::position::{lenient_flag, lenient_integer};

/// A command along with its validated fields.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Request {
    /// Fade to a color.
    Fade {
        /// The color to end on.
        color: Rgb,
        /// How long to take getting there.
        fade: Duration
    },

    /// Start or stop server tickle mode.
    ///
    /// Whilst on, the device plays its pattern if it isn't sent anything for `timeout`.
    ServerDown {
        /// Whether tickle mode is on.
        enabled: bool,
        /// How long without contact before the pattern plays.
        timeout: Duration
    },

    /// Set a color immediately.
    SetNow {
        /// The color to set.
        color: Rgb
    },

    /// Play or pause the stored pattern.
    Play {
        /// Play if true, pause if false.
        play: bool,
        /// The position to play from.
        position: Position
    },

    /// Store an entry in the pattern.
    Pattern {
        /// The entry's color.
        color: Rgb,
        /// How long to take fading to the color.
        fade: Duration,
        /// Where in the pattern to store the entry.
        position: Position
    }
}

impl Request {
    /// Validate the fields given to a command.
    ///
    /// The number of fields is checked before any of them are parsed,
    /// then each command reads its fields in this order:
    ///
    /// | Command | Fields | Parsed |
    /// |---------|--------|--------|
    /// | `n` | COLOR | COLOR |
    /// | `c` | COLOR FADE | FADE, COLOR |
    /// | `P` | COLOR FADE POSITION | POSITION, FADE, COLOR |
    /// | `p` | 0\|1 POSITION | flag, POSITION (clamped to 0-11) |
    /// | `D` | 0\|1 DURATION | flag, DURATION |
    ///
    /// Flags and positions are read like C's `atoi`, so text without leading digits counts as 0.
    ///
    /// # Errors
    ///
    ///   * [`Error::WrongArgumentCount`] if there isn't exactly the right number of fields.
    ///   * [`Error::InvalidPosition`] if a `P` position isn't between 0 and 11.
    ///   * [`Error::InvalidDuration`] if a fade or tickle duration can't be parsed.
    ///   * [`Error::InvalidColor`] if a color can't be resolved.
    pub fn try_from_fields<S: AsRef<str>>(command: Command, fields: &[S]) -> Result<Self, Error> {
        trace!("Request::try_from_fields({command:?}, {} fields)", fields.len());
        command.check_arity(fields.len())?;
        let field = |index: usize| fields[index].as_ref();

        match command {
            Command::SetNow => {
                let color = Rgb::resolve(field(0))?;
                Ok(Self::SetNow { color })
            },
            Command::Fade => {
                let fade = Duration::parse(field(1))?;
                let color = Rgb::resolve(field(0))?;
                Ok(Self::Fade { color, fade })
            },
            Command::Pattern => {
                let position = Position::try_new(lenient_integer(field(2)))?;
                let fade = Duration::parse(field(1))?;
                let color = Rgb::resolve(field(0))?;
                Ok(Self::Pattern { color, fade, position })
            },
            Command::Play => {
                let play = lenient_flag(field(0));
                let position = Position::saturating_new(lenient_integer(field(1)));
                Ok(Self::Play { play, position })
            },
            Command::ServerDown => {
                let enabled = lenient_flag(field(0));
                let timeout = Duration::parse(field(1))?;
                Ok(Self::ServerDown { enabled, timeout })
            }
        }
    }

    /// The command this request is for.
    #[must_use]
    pub const fn command(&self) -> Command {
        match self {
            Self::Fade { .. } => Command::Fade,
            Self::ServerDown { .. } => Command::ServerDown,
            Self::SetNow { .. } => Command::SetNow,
            Self::Play { .. } => Command::Play,
            Self::Pattern { .. } => Command::Pattern
        }
    }

    /// Encode into a `Report` ready for sending to the device.
    ///
    /// # Example
    ///
    /// ```
    /// use blink1::{Duration, Position, Request, Rgb};
    /// let request = Request::Pattern {
    ///     color: Rgb::new(0, 255, 0),
    ///     fade: Duration::from_hundredths(200),
    ///     position: Position::try_new(2).unwrap()
    /// };
    /// assert_eq!(request.encode().as_bytes(), &[1, b'P', 0, 255, 0, 0, 200, 2, 0]);
    /// ```
    #[must_use]
    pub fn encode(&self) -> Report {
        let mut report = Report::new(self.command());

        // Pattern builds on fade, which builds on set now.
        match *self {
            Self::Pattern { color, fade, position } => {
                report.set_position(position);
                report.set_fade(fade);
                report.set_color(color);
            },
            Self::Fade { color, fade } => {
                report.set_fade(fade);
                report.set_color(color);
            },
            Self::SetNow { color } => report.set_color(color),
            Self::Play { play, position } => {
                report.set_flag(play);
                report.set_play_position(position);
            },
            Self::ServerDown { enabled, timeout } => {
                report.set_flag(enabled);
                report.set_timeout(timeout);
            }
        }

        debug!("message: {report}");
        report
    }
}

impl From<Request> for Report {
    fn from(value: Request) -> Self {
        value.encode()
    }
}
