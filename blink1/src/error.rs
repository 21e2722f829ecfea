use crate::Command;

/// The errors which can occur when turning command line fields into a report.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The color is neither a defined color name nor a hexadecimal value up to `FFFFFF`.
    #[error("invalid color")]
    InvalidColor,

    /// The duration has no numeric value, an unknown unit or is negative.
    #[error("invalid duration")]
    InvalidDuration,

    /// The pattern position is outside the valid range of 0-11.
    #[error("invalid position {0:?}")]
    InvalidPosition(i32),

    /// The command was given the wrong number of fields.
    #[error("wrong number of fields for {command:?} (expected {expected:?}, found {found:?})")]
    WrongArgumentCount {
        /// The command which was given.
        command: Command,
        /// How many fields the command takes.
        expected: usize,
        /// How many fields were given.
        found: usize
    },

    /// The command letter is not a known command.
    #[error("unknown command {0:?}")]
    UnknownCommand(char)
}
