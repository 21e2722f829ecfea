use crate::Error;

/// The commands which can be sent to a blink(1).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `c` - Fade to an RGB color over a duration.
    Fade,
    /// `D` - Turn server tickle (watchdog) mode on or off.
    ServerDown,
    /// `n` - Set an RGB color immediately.
    SetNow,
    /// `p` - Play or pause the stored pattern.
    Play,
    /// `P` - Store a color and fade time at a pattern position.
    Pattern
}

impl Command {
    /// All the commands, in the order they're listed in help.
    pub const ALL: [Self; 5] = [Self::Fade, Self::ServerDown, Self::SetNow, Self::Play, Self::Pattern];

    /// Get the command from its letter.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownCommand`] if the letter isn't a command.
    pub const fn try_from_char(letter: char) -> Result<Self, Error> {
        match letter {
            'c' => Ok(Self::Fade),
            'D' => Ok(Self::ServerDown),
            'n' => Ok(Self::SetNow),
            'p' => Ok(Self::Play),
            'P' => Ok(Self::Pattern),
            _ => Err(Error::UnknownCommand(letter))
        }
    }

    /// The letter used for this command, both on the command line and on the wire.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Fade => 'c',
            Self::ServerDown => 'D',
            Self::SetNow => 'n',
            Self::Play => 'p',
            Self::Pattern => 'P'
        }
    }

    /// The letter as sent to the device.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "All command letters are ASCII")]
    pub const fn as_u8(&self) -> u8 {
        self.as_char() as u8
    }

    /// How many fields the command takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::SetNow => 1,
            Self::Fade | Self::ServerDown | Self::Play => 2,
            Self::Pattern => 3
        }
    }

    /// A one line description of the command.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Fade => "Fade to RGB color",
            Self::ServerDown => "Serverdown tickle/off",
            Self::SetNow => "Set RGB color now",
            Self::Play => "Play/Pause",
            Self::Pattern => "Set pattern entry"
        }
    }

    /// How to use the command, with examples.
    #[must_use]
    pub const fn usage(&self) -> &'static str {
        match self {
            Self::Fade => concat!(
                "Usage: blink c COLOR FADE\n",
                "Example: blink c red 50"
            ),
            Self::ServerDown => concat!(
                "Usage: blink D 0|1 DURATION\n",
                "Example: blink D 0 0 # stop server tickle mode\n",
                "         blink D 1 2000ms # start server tickle mode with 2s time"
            ),
            Self::SetNow => concat!(
                "Usage: blink n COLOR\n",
                "Example: blink n 454545"
            ),
            Self::Play => concat!(
                "Usage: blink p 0|1 POSITION\n",
                "Example: blink p 0 0 # Pause\n",
                "         blink p 1 4 # Play from 5th position"
            ),
            Self::Pattern => concat!(
                "Usage: blink P COLOR FADE POSITION\n",
                "Example: blink P green .5s 2 # 3rd pattern green with 500ms fade time"
            )
        }
    }

    /// Check the right number of fields have been given.
    ///
    /// # Errors
    ///
    /// [`Error::WrongArgumentCount`] if `found` isn't the command's arity.
    pub const fn check_arity(&self, found: usize) -> Result<(), Error> {
        let expected = self.arity();
        if found == expected {
            Ok(())
        } else {
            Err(Error::WrongArgumentCount { command: *self, expected, found })
        }
    }
}

impl TryFrom<char> for Command {
    type Error = Error;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::try_from_char(value)
    }
}

impl From<Command> for char {
    fn from(value: Command) -> Self {
        value.as_char()
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}


#[allow(clippy::missing_panics_doc, reason = "tests")]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::try_from(command.as_char()), Ok(command));
            assert_eq!(command.as_u8(), command.as_char() as u8);
        }
    }

    #[test]
    fn letters_are_case_sensitive() {
        assert_eq!(Command::try_from('p'), Ok(Command::Play));
        assert_eq!(Command::try_from('P'), Ok(Command::Pattern));
        assert_eq!(Command::try_from('C'), Err(Error::UnknownCommand('C')));
        assert_eq!(Command::try_from('N'), Err(Error::UnknownCommand('N')));
        assert_eq!(Command::try_from('d'), Err(Error::UnknownCommand('d')));
    }

    #[test]
    fn arity() {
        assert_eq!(Command::Fade.arity(), 2);
        assert_eq!(Command::ServerDown.arity(), 2);
        assert_eq!(Command::SetNow.arity(), 1);
        assert_eq!(Command::Play.arity(), 2);
        assert_eq!(Command::Pattern.arity(), 3);
    }

    #[test]
    fn check_arity() {
        assert_eq!(Command::Fade.check_arity(2), Ok(()));
        assert_eq!(
            Command::Fade.check_arity(1),
            Err(Error::WrongArgumentCount { command: Command::Fade, expected: 2, found: 1 })
        );
        assert_eq!(
            Command::SetNow.check_arity(0),
            Err(Error::WrongArgumentCount { command: Command::SetNow, expected: 1, found: 0 })
        );
    }

    #[test]
    fn usage_names_the_command() {
        for command in Command::ALL {
            assert!(
                command.usage().starts_with(&format!("Usage: blink {command} ")),
                "{command:?}"
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(Command::ServerDown.to_string(), "D");
    }
}
