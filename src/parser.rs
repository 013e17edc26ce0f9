//! # Sentence Dispatcher
//!
//! Turns a raw line into a [`Sentence`]:
//!
//! 1. Split the line with the sentence grammar.
//! 2. Check the checksum (strictly, or not at all).
//! 3. Classify the uppercased type identifier into talker, query or
//!    proprietary shape.
//! 4. Look the sentence code up in the registry and build the sentence.
//!
//! The behaviour of steps 2 and 4 is configured with [`ParseOptions`].

use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    checksum::{checksum, format_checksum},
    error::{Error, Result},
    grammar::{self, TypeIdentifier},
    registry::{self, Registry},
    schema::Field,
    sentence::{ProprietarySentence, QuerySentence, Sentence, TalkerSentence},
};

const GSV_SIGNAL_ID: [Field; 1] = [Field::new("GNSS Signal ID", "signal_id")];

const GRS_IDS: [Field; 2] = [
    Field::new("GNSS System ID", "system_id"),
    Field::new("GNSS Signal ID", "signal_id"),
];

/// Options controlling how lines are parsed.
///
/// The default is lenient: checksums are not enforced and neither of the
/// NMEA 4.10 schema extensions is applied.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{ParseOptions, parse_with};
///
/// let options = ParseOptions::new().check(true);
///
/// assert!(parse_with("$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D", &options).is_ok());
/// assert!(parse_with("$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*00", &options).is_err());
/// assert!(parse_with("$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000", &options).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ParseOptions {
    /// Fail when the checksum is missing or does not match.
    pub check: bool,
    /// Expose the trailing field of GSV sentences as `signal_id`.
    pub gsv_signal_id: bool,
    /// Append `system_id` and `signal_id` to the GRS schema.
    pub grs_ids: bool,
}

impl ParseOptions {
    /// Creates lenient options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict checksum checking.
    ///
    /// When set, a sentence without a checksum suffix or with a suffix that
    /// does not match the computed checksum is rejected with
    /// [`Error::ChecksumMissing`] or [`Error::ChecksumMismatch`]. When unset,
    /// both are ignored.
    pub fn check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Sets the GSV signal ID extension.
    ///
    /// NMEA 4.10 receivers append a signal ID to GSV sentences. When set, the
    /// declared GSV schema is cut to one less than the number of data fields
    /// and a `signal_id` field is appended, so the last field of the sentence
    /// is always named `signal_id`.
    pub fn gsv_signal_id(mut self, gsv_signal_id: bool) -> Self {
        self.gsv_signal_id = gsv_signal_id;
        self
    }

    /// Sets the GRS system and signal ID extension.
    ///
    /// When set, `system_id` and `signal_id` are appended after every declared
    /// GRS field.
    pub fn grs_ids(mut self, grs_ids: bool) -> Self {
        self.grs_ids = grs_ids;
        self
    }
}

/// A parser bound to a set of options and a registry.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use nmea0183_sentence::{NmeaSentence, ParseOptions, Registry, SentenceParser};
///
/// let parser = SentenceParser::new()
///     .options(ParseOptions::new().check(true))
///     .registry(Arc::new(Registry::builtin()));
///
/// let sentence = parser.parse("$CCGPQ,GGA*2B").unwrap();
/// assert_eq!(sentence.type_name(), "QuerySentence");
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct SentenceParser {
    options: ParseOptions,
    registry: Option<Arc<Registry>>,
}

impl SentenceParser {
    /// Creates a lenient parser using the process-wide registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parse options.
    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses `registry` instead of the process-wide registry.
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Parses a single line.
    pub fn parse(&self, line: &str) -> Result<Sentence> {
        let registry = self.registry.as_ref().unwrap_or_else(|| registry::global());
        dispatch(registry, line, &self.options)
    }
}

/// Parses a line leniently with the process-wide registry.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{NmeaSentence, parse};
///
/// let sentence = parse("$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D").unwrap();
/// assert_eq!(sentence.get_raw("talker"), Ok("GP"));
/// assert_eq!(sentence.data().len(), 14);
/// assert_eq!(sentence.to_string(), "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D");
/// ```
pub fn parse(line: &str) -> Result<Sentence> {
    parse_with(line, &ParseOptions::default())
}

/// Parses a line with the given options and the process-wide registry.
pub fn parse_with(line: &str, options: &ParseOptions) -> Result<Sentence> {
    dispatch(registry::global(), line, options)
}

fn dispatch(registry: &Registry, line: &str, options: &ParseOptions) -> Result<Sentence> {
    let raw = grammar::split(line).ok_or_else(|| Error::parse("could not parse data", line))?;
    let data: Vec<String> = raw.data.split(',').map(str::to_owned).collect();

    let expected = checksum(raw.content);
    match raw.checksum {
        Some(found) if found != expected => {
            if options.check {
                return Err(Error::ChecksumMismatch {
                    found,
                    expected,
                    data,
                });
            }
            debug!(
                found = %format_checksum(found),
                expected = %format_checksum(expected),
                "ignoring checksum mismatch"
            );
        }
        Some(_) => {}
        None if options.check => return Err(Error::ChecksumMissing { data }),
        None => debug!("ignoring missing checksum"),
    }

    let type_identifier = raw.type_identifier.to_uppercase();
    for shape in grammar::classify(&type_identifier) {
        match shape {
            TypeIdentifier::Talker {
                talker,
                sentence_type,
            } => {
                trace!(%talker, %sentence_type, "talker sentence");
                return talker_sentence(registry, line, options, talker, sentence_type, data);
            }
            TypeIdentifier::Query {
                talker,
                listener,
                sentence_type,
            } => {
                if !raw.data.is_empty() {
                    trace!(%sentence_type, "query shape rejected, sentence has data");
                    continue;
                }
                trace!(%talker, %listener, %sentence_type, "query sentence");
                return Ok(QuerySentence::new(talker, listener, sentence_type).into());
            }
            TypeIdentifier::Proprietary { manufacturer } => {
                let definition = registry.proprietary_or_generic(&manufacturer);
                trace!(%manufacturer, type_name = definition.type_name(), "proprietary sentence");
                return Ok(ProprietarySentence::new(definition, manufacturer, data).into());
            }
        }
    }

    Err(Error::parse(
        format!("could not parse sentence type: {type_identifier:?}"),
        line,
    ))
}

fn talker_sentence(
    registry: &Registry,
    line: &str,
    options: &ParseOptions,
    talker: String,
    sentence_type: String,
    data: Vec<String>,
) -> Result<Sentence> {
    let definition = registry.talker(&sentence_type).ok_or_else(|| {
        Error::sentence_type(format!("Unknown sentence type {talker}{sentence_type},"), line)
    })?;

    let declared = definition.schema();
    let overridden = match sentence_type.as_str() {
        "GSV" if options.gsv_signal_id => {
            Some(declared.truncated_extended(data.len().saturating_sub(1), &GSV_SIGNAL_ID))
        }
        "GRS" if options.grs_ids => Some(declared.extended(&GRS_IDS)),
        _ => None,
    };

    let schema = match overridden {
        Some(schema) => {
            let schema = schema.map_err(|err| Error::parse(err.to_string(), line))?;
            trace!(%sentence_type, fields = schema.len(), "schema extended");
            Arc::new(schema)
        }
        None => Arc::clone(declared),
    };

    Ok(TalkerSentence::with_schema(
        definition.type_name(),
        talker,
        sentence_type,
        data,
        schema,
    )
    .into())
}
