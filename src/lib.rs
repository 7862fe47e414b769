#![no_std]

//! A decoder for IATA Bar-Coded Boarding Pass (BCBP) data.
//!
//! BCBP is the fixed-layout text embedded in the PDF417 barcode printed on
//! (or displayed as) a boarding pass. This crate turns that text into a
//! [`BoardingPass`] record, or reports why it could not.
//!
//! ```
//! let pass = bcbp::decode("M1DOE/JOHN            EQAPBNA GVASFOLX 0022 226Y022A0025 300")?;
//! assert_eq!(pass.mandatory.full_name, "DOE/JOHN");
//! assert_eq!(pass.mandatory.flight_date, 226);
//! ```
//!
//! Most users need only [`decode`]. The layout of each block is declared in
//! the [`block`] module; custom layouts (for example, airline-specific data in
//! the individual use field) can be decoded the same way by deriving
//! [`Block`](macro@block::Block) and reading with a [`reader::Reader`].
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: implement `std::error::Error` and enable `tracing`'s standard
//!   library support (default).
//! - `serde`: derive `Serialize` and `Deserialize` for decoded records.

extern crate alloc;
extern crate self as bcbp;

pub mod block;
pub mod error;
pub mod pass;
pub mod reader;

pub use error::Error;
pub use pass::{BoardingPass, Options, decode, decode_with};
