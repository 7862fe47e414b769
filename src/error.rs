//! Errors occurring while decoding a boarding pass.

use alloc::string::String;

use thiserror::Error;

/// An error decoding a boarding pass.
///
/// Any of these aborts the whole decode; no partial record is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of legs (Item 5) is not a decimal digit.
    #[error("Invalid number of legs ({0:?}).")]
    InvalidLegsNumber(String),
    /// A length prefix is not a two-digit hexadecimal number.
    #[error("Invalid hexadecimal length {found:?} for item {item}.")]
    InvalidHexLength { item: u16, found: String },
    /// The passenger description (Item 15) is not numeric, while
    /// [`Options::numeric_passenger_description`](crate::Options) is set.
    #[error("Invalid passenger description ({0:?}).")]
    InvalidPassengerDescription(String),
    /// The input ends before a required item, such as one of the mandatory
    /// block.
    #[error("Item {item} needs {needed} characters, found {found}.")]
    Truncated {
        item: u16,
        needed: usize,
        found: usize,
    },
}
