//! Conditional blocks of the first leg.
//!
//! The conditional section follows the mandatory block and is
//! `variable_size` characters long:
//!
//! | Block | Gate |
//! | --- | --- |
//! | [`UniqueHeader`] | `variable_size` |
//! | [`UniqueConditional`] | [`UniqueHeader::following_structure_message_size`] |
//! | [`RepeatedHeader`] | what remains of `variable_size` |
//! | [`RepeatedConditional`] | [`RepeatedHeader::following_structure_message_size`] |
//!
//! Anything left over is for individual airline use.

use alloc::string::String;

use super::{Block, NO_DATA, hex, trimmed_decimal};

/// Version number and size of the structured unique block.
#[derive(Debug, Clone, PartialEq, Eq, Block)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueHeader {
    /// Beginning of version number, usually `>`.
    #[item(8, size = 1)]
    pub version_number_beginning: String,
    #[item(9, size = 1, default = "0")]
    pub version_number: String,
    #[item(10, size = 2, with = hex)]
    pub following_structure_message_size: u8,
}

/// Structured data appearing once per boarding pass.
#[derive(Debug, Clone, PartialEq, Eq, Block)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueConditional {
    /// For example `0` (adult), `4` (infant) or `6` (adult with infant).
    #[item(15, size = 1)]
    pub passenger_description: String,
    #[item(12, size = 1, default = NO_DATA)]
    pub check_in_source: String,
    #[item(14, size = 1, default = NO_DATA)]
    pub boarding_pass_source: String,
    /// Last digit of the year of issue, then the day of that year.
    #[item(22, size = 4, default = NO_DATA)]
    pub boarding_pass_issue_date: String,
    /// `B` for a boarding pass, `I` for an itinerary receipt.
    #[item(16, size = 1, default = NO_DATA)]
    pub document_type: String,
    #[item(21, size = 3, default = NO_DATA)]
    pub airline_boarding_pass_issuer: String,
    /// Bag tag licence plate number and count of consecutive bags.
    #[item(23, size = 13, default = NO_DATA)]
    pub baggage_tag: String,
    #[item(31, size = 13, default = NO_DATA)]
    pub first_non_consecutive_baggage_tag: String,
    #[item(32, size = 13, default = NO_DATA)]
    pub second_non_consecutive_baggage_tag: String,
}

/// Size of the structured repeated block.
#[derive(Debug, Clone, PartialEq, Eq, Block)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatedHeader {
    #[item(17, size = 2, with = hex)]
    pub following_structure_message_size: u8,
}

/// Structured data repeated for each leg.
#[derive(Debug, Clone, PartialEq, Eq, Block)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatedConditional {
    #[item(142, size = 3, with = trimmed_decimal)]
    pub airline_numeric_code: u16,
    #[item(143, size = 10, with = trimmed_decimal)]
    pub document_serial_number: u64,
    #[item(18, size = 1)]
    pub selectee_indicator: String,
    #[item(108, size = 1)]
    pub international_documentation_verification: String,
    /// Marketing carrier designator.
    #[item(19, size = 3)]
    pub carrier_designator: String,
    #[item(20, size = 3)]
    pub frequent_flier_designator: String,
    #[item(236, size = 16, with = trimmed_decimal)]
    pub frequent_flier_number: u64,
    #[item(89, size = 1)]
    pub id_ad_indicator: String,
    #[item(118, size = 3)]
    pub free_baggage_allowance: String,
    #[item(254, size = 1)]
    pub fast_track: String,
}
