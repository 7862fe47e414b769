//! The mandatory block.

use alloc::string::String;

use super::{Block, hex, legs, trimmed, trimmed_decimal};

/// Items at fixed positions at the start of every boarding pass.
///
/// The first 60 characters, read in full. Free-text items and the sequence
/// number are trimmed, and malformed numbers other than the leg count and
/// `variable_size` become zero.
#[derive(Debug, Clone, PartialEq, Eq, Block)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mandatory {
    /// Format code, usually `M`.
    #[item(1, size = 1)]
    pub format_code: char,
    /// Number of legs encoded.
    #[item(5, size = 1, with = legs)]
    pub legs_number: u8,
    /// Passenger name as `LASTNAME/FIRSTNAME`, truncated to 20 characters.
    #[item(11, size = 20, with = trimmed)]
    pub full_name: String,
    /// Electronic ticket indicator, usually `E`.
    #[item(253, size = 1)]
    pub electronic_ticket_indicator: char,
    /// Booking reference (PNR code).
    #[item(7, size = 7, with = trimmed)]
    pub reservation_number: String,
    #[item(26, size = 3)]
    pub from_city_iata: String,
    #[item(38, size = 3)]
    pub to_city_iata: String,
    /// IATA or ICAO designator of the operating carrier.
    #[item(42, size = 3, with = trimmed)]
    pub operating_carrier: String,
    #[item(43, size = 5, with = trimmed)]
    pub flight_number: String,
    /// Day of the year of the flight (1 is January 1st).
    #[item(46, size = 3)]
    pub flight_date: u16,
    /// Compartment code, distinct from the fare class.
    #[item(71, size = 1)]
    pub compartment_code: char,
    #[item(104, size = 4)]
    pub seat_number: String,
    /// Check-in sequence number.
    #[item(107, size = 5, with = trimmed_decimal)]
    pub sequence_number: u32,
    #[item(113, size = 1)]
    pub passenger_status: u8,
    /// Size of the conditional data following this block.
    #[item(6, size = 2, with = hex)]
    pub variable_size: u8,
}
