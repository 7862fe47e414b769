//! Decoding a complete boarding pass.

use alloc::{borrow::ToOwned, string::String};
use core::str::FromStr;

use crate::{
    Error,
    block::{
        Block, Item, Mandatory, RepeatedConditional, RepeatedHeader,
        SECURITY_BEGINNING, SecurityData, SecurityHeader, UniqueConditional, UniqueHeader,
    },
    reader::{Reader, Truncation},
};

/// Item number of the individual airline use field.
const AIRLINE_USE: u16 = 4;
/// Item number of the security data field.
const SECURITY: u16 = 28;

/// Options controlling how strictly a boarding pass is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Require the passenger description (Item 15), when present, to be a
    /// decimal digit, as in versions of the standard that define it
    /// numerically.
    pub numeric_passenger_description: bool,
}

/// A decoded boarding pass.
///
/// Conditional items missing from the barcode hold their documented
/// defaults; see each block for details. Only the first leg's conditional
/// data is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardingPass {
    pub mandatory: Mandatory,
    pub unique_header: UniqueHeader,
    pub unique: UniqueConditional,
    pub repeated_header: RepeatedHeader,
    pub repeated: RepeatedConditional,
    /// Individual airline use (Item 4), left over at the end of the first
    /// leg's conditional data.
    pub airline_use: String,
    /// Security data, located only for single-leg boarding passes.
    pub security: Option<SecurityData>,
}

/// Decode a boarding pass from the text of its barcode.
pub fn decode(data: &str) -> Result<BoardingPass, Error> {
    decode_with(data, Options::default())
}

/// Decode a boarding pass from the text of its barcode, with options.
pub fn decode_with(data: &str, options: Options) -> Result<BoardingPass, Error> {
    let pass = read(&Reader::new(data), options);

    if let Err(err) = &pass {
        tracing::debug!(%err, "failed to decode boarding pass");
    }

    pass
}

fn read(r: &Reader<'_>, options: Options) -> Result<BoardingPass, Error> {
    let mandatory = Mandatory::read(r, 0, Mandatory::SIZE)?;

    let at = Mandatory::SIZE; // Start of the first leg's conditional data.
    let variable_size = usize::from(mandatory.variable_size);

    let unique_header = UniqueHeader::read_available(r, at, variable_size)?;
    let unique_size = usize::from(unique_header.following_structure_message_size);

    let unique = UniqueConditional::read_available(r, at + UniqueHeader::SIZE, unique_size)?;

    if options.numeric_passenger_description {
        check_passenger_description(&unique.passenger_description)?;
    }

    // Offset of the repeated header within the conditional data.
    let i = UniqueHeader::SIZE + unique_size;

    let repeated_header =
        RepeatedHeader::read_available(r, at + i, variable_size.saturating_sub(i))?;
    let repeated_size = usize::from(repeated_header.following_structure_message_size);

    let i = i + RepeatedHeader::SIZE;

    let repeated = RepeatedConditional::read_available(r, at + i, repeated_size)?;

    let i = i + repeated_size;

    let airline_use = if variable_size > i {
        let item = Item::new(AIRLINE_USE, variable_size - i, i);
        r.gated_with(at, variable_size, &item, Truncation::Absent)?
            .unwrap_or_default()
            .to_owned()
    } else {
        String::new()
    };

    tracing::trace!(
        variable_size,
        unique_size,
        repeated_size,
        airline_use = airline_use.len(),
        "read conditional data"
    );

    let security = if mandatory.legs_number == 1 {
        read_security(r, at + variable_size)?
    } else {
        tracing::debug!(
            legs = mandatory.legs_number,
            "skipping conditional data of legs after the first"
        );
        None
    };

    Ok(BoardingPass {
        mandatory,
        unique_header,
        unique,
        repeated_header,
        repeated,
        airline_use,
        security,
    })
}

fn read_security(r: &Reader<'_>, at: usize) -> Result<Option<SecurityData>, Error> {
    if r.char_at(at) != Some(SECURITY_BEGINNING) {
        return Ok(None);
    }

    // Security data cut short by the end of the text is ignored.
    if r.get(at..at + SecurityHeader::SIZE).is_none() {
        return Ok(None);
    }

    let header = SecurityHeader::read(r, at, SecurityHeader::SIZE)?;
    let length = usize::from(header.length);

    let item = Item::new(SECURITY, length, SecurityHeader::SIZE);
    let data = r.gated_with(at, item.end(), &item, Truncation::Absent)?;

    Ok(data.map(|data| SecurityData {
        kind: header.kind,
        data: data.to_owned(),
    }))
}

fn check_passenger_description(description: &str) -> Result<(), Error> {
    if description.is_empty() || description.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::InvalidPassengerDescription(description.to_owned()))
    }
}

impl FromStr for BoardingPass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<&str> for BoardingPass {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        decode(s)
    }
}
