//! Security data trailing the last leg.

use alloc::string::String;

use super::{Block, hex};

/// Marks the start of the security data.
pub const SECURITY_BEGINNING: char = '^';

#[derive(Debug, Clone, PartialEq, Eq, Block)]
pub struct SecurityHeader {
    #[item(25, size = 1)]
    pub beginning: char,
    #[item(26, size = 1)]
    pub kind: char,
    #[item(27, size = 2, with = hex)]
    pub length: u8,
}

/// Airline-defined data used to verify a boarding pass, such as a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityData {
    /// Type of security data.
    pub kind: char,
    pub data: String,
}
