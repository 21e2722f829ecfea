#![cfg_attr(not(feature = "std"), no_std)]

#![doc = include_str!("../README.md")]
#![doc(html_playground_url = "https://play.rust-lang.org/")]

pub mod color;
pub mod duration;
mod command;
mod error;
mod position;
mod report;
mod request;

pub use color::{Rgb, NAMED_COLORS};
pub use command::Command;
pub use duration::Duration;
pub use error::Error;
pub use position::Position;
pub use report::Report;
pub use request::Request;

#[cfg(test)]
mod tests {
    use super::*;

    trait IsNormal {}
    impl<T> IsNormal for T where T: Sized + Send + Sync + Unpin {}
    trait IsComparable {}
    impl<T> IsComparable for T where T: Eq + PartialEq {}
    trait IsOrderable {}
    impl<T> IsOrderable for T where T: Ord + PartialOrd {}
    trait IsHashable {}
    impl<T> IsHashable for T where T: core::hash::Hash {}
    trait IsDecent {}
    impl<T> IsDecent for T where T: IsNormal + IsComparable + IsHashable + core::fmt::Debug + Copy + Clone {}

    const fn is_orderable<T: IsOrderable>() {}
    const fn is_decent<T: IsDecent>() {}

    const fn is_decent_error<T: IsNormal + IsComparable + core::fmt::Debug + core::fmt::Display>() {}

    #[test]
    const fn structs_are_as_expected() {
        is_decent::<Rgb>();
        is_decent::<Duration>();
        is_orderable::<Duration>();
        is_decent::<Position>();
        is_orderable::<Position>();
        is_decent::<Command>();
        is_decent::<Request>();
        is_decent::<Report>();
        is_decent_error::<Error>();
    }

    #[test]
    #[cfg(feature = "serde")]
    const fn is_serde() {
        const fn test<'a, T>() where T: serde::ser::Serialize + serde::de::Deserialize<'a> {}

        test::<Rgb>();
        test::<Duration>();
        test::<Position>();
        test::<Command>();
        test::<Request>();
        test::<Report>();
        test::<Error>();
    }
}
