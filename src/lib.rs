//! # NMEA 0183 Sentences
//!
//! This library parses NMEA 0183 sentences of the form
//! `$<identifier><data>*CC\r\n` into objects with named field access, and
//! renders them back to the exact same text.
//!
//! Sentences come in three categories, told apart by their type identifier:
//! - Talker sentences (`$GPGGA,...`), dispatched by sentence code
//! - Query sentences (`$CCGPQ,GGA`), which carry no data
//! - Proprietary sentences (`$PGRME,...`), dispatched by manufacturer
//!
//! Sentence types are looked up in a [`Registry`]. The built-in catalog
//! (feature `catalog`) covers the common GNSS sentences; further types are
//! added with `#[derive(SentenceDefinition)]` and a [`RegistryBuilder`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_sentence::{FieldValue, NmeaSentence, ParseOptions, parse_with};
//!
//! let line = "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D";
//! let mut sentence = parse_with(line, &ParseOptions::new().check(true)).unwrap();
//!
//! assert_eq!(sentence.type_name(), "GGA");
//! assert_eq!(sentence.get_field("altitude"), Ok(FieldValue::Float(100.0)));
//!
//! sentence.set_field("lat", "1930.000").unwrap();
//! assert_eq!(
//!     sentence.to_string(),
//!     "$GPGGA,184353.07,1930.000,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*64"
//! );
//! ```

extern crate self as nmea0183_sentence;

#[cfg(feature = "catalog")]
pub mod catalog;
mod checksum;
pub mod error;
mod field;
pub mod grammar;
mod parser;
pub mod registry;
mod render;
mod schema;
mod sentence;

pub use checksum::{checksum, format_checksum};
pub use error::{Error, ErrorKind, FieldError, Result};
pub use field::{FieldValue, coerce};
pub use parser::{ParseOptions, SentenceParser, parse, parse_with};
pub use registry::{
    Category, Definition, FieldId, Registry, RegistryBuilder, RegistryError, SentenceDefinition,
};
pub use render::{Newline, RenderOptions};
pub use schema::{Field, FieldKind, FieldSchema, SchemaError};
pub use sentence::{NmeaSentence, ProprietarySentence, QuerySentence, Sentence, TalkerSentence};

#[cfg(feature = "derive")]
pub use nmea0183_sentence_derive::SentenceDefinition;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(all(test, feature = "catalog"))]
mod tests {
    mod accessor;
    mod dispatch;
    mod round_trip;
}
