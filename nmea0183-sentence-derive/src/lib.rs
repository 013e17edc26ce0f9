//! # A Rust procedural macro declaring NMEA 0183 sentence types
//!
//! `nmea0183-sentence-derive` turns a fieldless enum into a sentence type for
//! [`nmea0183-sentence`]. Each variant is one field of the sentence, in wire
//! order:
//!
//! ```rust,ignore
//! use nmea0183_sentence::SentenceDefinition;
//!
//! #[derive(Debug, Clone, Copy, SentenceDefinition)]
//! #[nmea(sentence = "HDT")]
//! pub enum HDT {
//!     #[nmea(label = "Heading", kind = "Float")]
//!     Heading,
//!     #[nmea(label = "True", name = "hdg_true")]
//!     HdgTrue,
//! }
//! ```
//!
//! Top level attributes:
//! - `sentence = "CODE"` for talker sentences or `proprietary = "CODE"` (one is required)
//! - `type_name = "..."`, defaults to the enum name
//!
//! Variant attributes:
//! - `label = "..."` (required)
//! - `name = "..."`, defaults to the snake_case variant name
//! - `kind = "Text" | "Integer" | "Float" | "Time" | "Date"`, defaults to `Text`
//!
//! Both `attr = "value"` and `attr("value")` are accepted.
//!
//! [`nmea0183-sentence`]: https://crates.io/crates/nmea0183-sentence

use generate::generate_sentence_definition_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;

/// Derives `SentenceDefinition` and `FieldId` for a fieldless enum.
#[proc_macro_derive(SentenceDefinition, attributes(nmea))]
pub fn derive_sentence_definition(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_sentence_definition_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
