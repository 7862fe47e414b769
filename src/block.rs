//! Declarative layouts of the blocks making up a boarding pass.
//!
//! A block is a run of consecutive items. Each item has a fixed size, and its
//! offset within the block is the sum of the sizes of the items before it. A
//! block is read from a starting offset together with a _gate_, its declared
//! size: an item is present only if the gate reaches its end, otherwise it
//! takes a default value.
//!
//! Blocks are plain structs deriving [`Block`](macro@Block). Each field
//! carries an `item` attribute naming the IATA item number and its size, in
//! the order the items appear in the barcode.
//!
//! ```
//! #[derive(Debug, Block)]
//! struct Header {
//!     #[item(8, size = 1)]
//!     version_number_beginning: String,
//!     #[item(9, size = 1, default = "0")]
//!     version_number: String,
//!     #[item(10, size = 2, with = hex)]
//!     following_structure_message_size: u8,
//! }
//! ```
//!
//! Present items are converted with [`FromField`], or with the function given
//! as `with`. Absent items take the expression given as `default`, or
//! [`Default::default`].

use alloc::{borrow::ToOwned, string::String};
use core::str::FromStr;

use crate::{
    Error,
    reader::{Reader, Truncation},
};

mod conditional;
mod mandatory;
mod security;

pub use conditional::{RepeatedConditional, RepeatedHeader, UniqueConditional, UniqueHeader};
pub use mandatory::Mandatory;
pub use security::{SECURITY_BEGINNING, SecurityData, SecurityHeader};

/// Derive [`Block`] for a struct of consecutive items.
///
/// See the [module documentation](self) for the attribute syntax.
pub use bcbp_derive::Block;

/// Placeholder for absent text items of the structured unique block.
pub const NO_DATA: &str = "No Data";

/// A run of consecutive items.
///
/// See the [`Block`](macro@Block) derive macro for an automatic
/// implementation of this trait.
pub trait Block: Sized {
    /// Layout of the items in this block, in barcode order.
    const ITEMS: &'static [Item];
    /// Total size of the items in this block.
    const SIZE: usize;

    /// Read the block starting at offset `at`, with declared size `gate`.
    fn read_with(
        r: &Reader<'_>,
        at: usize,
        gate: usize,
        truncation: Truncation,
    ) -> Result<Self, Error>;

    /// Read the block, failing if a present item lies past the end of the
    /// text.
    fn read(r: &Reader<'_>, at: usize, gate: usize) -> Result<Self, Error> {
        Self::read_with(r, at, gate, Truncation::Fail)
    }

    /// Read the block, treating present items past the end of the text as
    /// absent.
    fn read_available(r: &Reader<'_>, at: usize, gate: usize) -> Result<Self, Error> {
        Self::read_with(r, at, gate, Truncation::Absent)
    }

    /// The block with every item absent.
    fn absent() -> Self;
}

/// Position of an item within its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// IATA item number.
    pub number: u16,
    /// Size in characters.
    pub size: usize,
    /// Combined size of the items before this one in the block.
    pub previous: usize,
}

impl Item {
    pub const fn new(number: u16, size: usize, previous: usize) -> Self {
        Self {
            number,
            size,
            previous,
        }
    }

    /// Offset just past this item, relative to the start of its block.
    pub const fn end(&self) -> usize {
        self.previous + self.size
    }

    /// Whether a block of declared size `gate` reaches this item.
    pub const fn is_present(&self, gate: usize) -> bool {
        gate >= self.end()
    }
}

/// Convert the text of a present item.
pub trait FromField: Sized {
    fn from_field(text: &str, item: &Item) -> Result<Self, Error>;
}

impl FromField for String {
    fn from_field(text: &str, _: &Item) -> Result<Self, Error> {
        Ok(text.to_owned())
    }
}

impl FromField for char {
    fn from_field(text: &str, _: &Item) -> Result<Self, Error> {
        Ok(text.chars().next().unwrap_or_default())
    }
}

macro_rules! from_field_decimal {
    ($($t:ty),*) => {
        $(
            /// Malformed numbers, including padded ones, fall back to zero.
            impl FromField for $t {
                fn from_field(text: &str, item: &Item) -> Result<Self, Error> {
                    Ok(decimal(text, item))
                }
            }
        )*
    };
}

from_field_decimal!(u8, u16, u32, u64);

fn decimal<T: FromStr + Default>(text: &str, item: &Item) -> T {
    text.parse().unwrap_or_else(|_| {
        tracing::debug!(item = item.number, text, "malformed number, using default");
        T::default()
    })
}

/// Parse a number surrounded by padding, falling back to zero.
pub fn trimmed_decimal<T: FromStr + Default>(text: &str, item: &Item) -> Result<T, Error> {
    Ok(decimal(text.trim(), item))
}

/// Copy an item's text without surrounding whitespace.
pub fn trimmed(text: &str, _: &Item) -> Result<String, Error> {
    Ok(text.trim().to_owned())
}

/// Parse a hexadecimal length prefix.
pub fn hex(text: &str, item: &Item) -> Result<u8, Error> {
    let invalid = || Error::InvalidHexLength {
        item: item.number,
        found: text.to_owned(),
    };

    // `from_str_radix` would accept a leading sign.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        Err(invalid())?;
    }

    u8::from_str_radix(text, 16).map_err(|_| invalid())
}

/// Parse the number of legs.
pub fn legs(text: &str, _: &Item) -> Result<u8, Error> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        Err(Error::InvalidLegsNumber(text.to_owned()))?;
    }

    text.parse()
        .map_err(|_| Error::InvalidLegsNumber(text.to_owned()))
}
