//! # Sentence Grammar
//!
//! Splits a raw line into its type identifier, data payload and optional
//! checksum, then classifies the identifier into one of the three sentence
//! shapes.
//!
//! A line has the form:
//!
//! ```text
//!  [ws][$]<type identifier><data>[*HH][ws]
//! ```
//!
//! where the type identifier is one of (tried in this order):
//!
//! | Shape       | Pattern       | Example     |
//! |-------------|---------------|-------------|
//! | Proprietary | `P` + 3 word  | `PGRM`      |
//! | Query       | `AABBQ,CCC`   | `CCGPQ,GGA` |
//! | Talker      | `AABBB,`      | `GPGGA,`    |
//!
//! Word characters are alphanumerics and `_`. The identifier and the checksum
//! digits are matched case-insensitively.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_till, take_while, take_while_m_n},
    character::complete::{char, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::preceded,
};

/// A line split into its grammatical parts. All slices borrow the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSentence<'a> {
    /// Type identifier and data, the span covered by the checksum.
    pub content: &'a str,
    /// The type identifier exactly as written.
    pub type_identifier: &'a str,
    /// Everything between the type identifier and the checksum suffix.
    pub data: &'a str,
    /// The checksum suffix, if present.
    pub checksum: Option<u8>,
}

/// The shape of an (uppercased) type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeIdentifier {
    /// `AABBB,`
    Talker {
        /// Two character talker ID
        talker: String,
        /// Three character sentence code
        sentence_type: String,
    },
    /// `AABBQ,CCC`
    Query {
        /// Two character talker ID of the requester
        talker: String,
        /// Two character talker ID of the addressed device
        listener: String,
        /// Three character sentence code being requested
        sentence_type: String,
    },
    /// `PAAA`
    Proprietary {
        /// Three character manufacturer code
        manufacturer: String,
    },
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word<'a>(
    n: usize,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    take_while_m_n(n, n, is_word)
}

fn proprietary_identifier(i: &str) -> IResult<&str, &str> {
    recognize((one_of("Pp"), word(3))).parse(i)
}

fn query_identifier(i: &str) -> IResult<&str, &str> {
    recognize((word(2), word(2), one_of("Qq"), char(','), word(3))).parse(i)
}

fn talker_identifier(i: &str) -> IResult<&str, &str> {
    recognize((word(2), word(3), char(','))).parse(i)
}

fn checksum_suffix(i: &str) -> IResult<&str, u8> {
    preceded(
        char('*'),
        map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |hex| {
            u8::from_str_radix(hex, 16)
        }),
    )
    .parse(i)
}

fn sentence_line(i: &str) -> IResult<&str, RawSentence<'_>> {
    let (i, _) = take_while(char::is_whitespace).parse(i)?;
    let (i, _) = opt(char('$')).parse(i)?;

    let start = i;
    let (i, type_identifier) =
        alt((proprietary_identifier, query_identifier, talker_identifier)).parse(i)?;
    let (i, data) = take_till(|c| c == '*').parse(i)?;
    let (i, checksum) = opt(checksum_suffix).parse(i)?;
    let (i, _) = all_consuming(take_while(char::is_whitespace)).parse(i)?;

    // Without a suffix the data ran to the end of the line and picked up the
    // trailing whitespace.
    let data = match checksum {
        Some(_) => data,
        None => data.trim_end(),
    };
    let content = &start[..type_identifier.len() + data.len()];

    Ok((
        i,
        RawSentence {
            content,
            type_identifier,
            data,
            checksum,
        },
    ))
}

/// Splits a line into its grammatical parts.
///
/// Returns [`None`] if the line does not have the overall shape of a sentence.
pub fn split(line: &str) -> Option<RawSentence<'_>> {
    sentence_line(line).ok().map(|(_, raw)| raw)
}

fn talker_shape(i: &str) -> IResult<&str, TypeIdentifier> {
    all_consuming((word(2), word(3), char(',')))
        .map(|(talker, sentence_type, _)| TypeIdentifier::Talker {
            talker: talker.to_owned(),
            sentence_type: sentence_type.to_owned(),
        })
        .parse(i)
}

fn query_shape(i: &str) -> IResult<&str, TypeIdentifier> {
    all_consuming((word(2), word(2), char('Q'), char(','), word(3)))
        .map(|(talker, listener, _, _, sentence_type)| TypeIdentifier::Query {
            talker: talker.to_owned(),
            listener: listener.to_owned(),
            sentence_type: sentence_type.to_owned(),
        })
        .parse(i)
}

fn proprietary_shape(i: &str) -> IResult<&str, TypeIdentifier> {
    all_consuming(preceded(char('P'), word(3)))
        .map(|manufacturer: &str| TypeIdentifier::Proprietary {
            manufacturer: manufacturer.to_owned(),
        })
        .parse(i)
}

/// Classifies an uppercased type identifier.
///
/// Shapes are tried as talker, then query, then proprietary. Returns every
/// shape that matches in that order, so the caller can fall through when a
/// shape is rejected for reasons outside the identifier (a query with data).
pub fn classify(type_identifier: &str) -> Vec<TypeIdentifier> {
    [talker_shape, query_shape, proprietary_shape]
        .into_iter()
        .filter_map(|shape| shape(type_identifier).ok().map(|(_, shape)| shape))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_talker() {
        let raw = split("$GPGGA,184353.07,1929.045,S*6D\r\n").unwrap();
        assert_eq!(raw.type_identifier, "GPGGA,");
        assert_eq!(raw.data, "184353.07,1929.045,S");
        assert_eq!(raw.content, "GPGGA,184353.07,1929.045,S");
        assert_eq!(raw.checksum, Some(0x6D));
    }

    #[test]
    fn test_split_optional_parts() {
        let raw = split("  GPGGA,1,2  \r\n").unwrap();
        assert_eq!(raw.data, "1,2");
        assert_eq!(raw.content, "GPGGA,1,2");
        assert_eq!(raw.checksum, None);

        let raw = split("$gpgga,1*6f").unwrap();
        assert_eq!(raw.type_identifier, "gpgga,");
        assert_eq!(raw.checksum, Some(0x6F));
    }

    #[test]
    fn test_split_query_and_proprietary() {
        let raw = split("$CCGPQ,GGA*2B").unwrap();
        assert_eq!(raw.type_identifier, "CCGPQ,GGA");
        assert_eq!(raw.data, "");

        let raw = split("$PGRME,15.0,M").unwrap();
        assert_eq!(raw.type_identifier, "PGRM");
        assert_eq!(raw.data, "E,15.0,M");
    }

    #[test]
    fn test_split_rejects_malformed() {
        let cases = [
            "",
            "$",
            "$GP",
            "$GPGGA",
            "$GPGGA,1,2*6",
            "$GPGGA,1,2*6G",
            "$GPGGA,1,2*6D7",
            "$GPGGA,1,2*6D*00",
            "$GPGGA,1,2*6D junk",
            "$$GPGGA,1,2",
        ];

        for input in cases {
            assert!(split(input).is_none(), "Accepted: {input:?}");
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("GPGGA,"),
            vec![TypeIdentifier::Talker {
                talker: "GP".into(),
                sentence_type: "GGA".into(),
            }]
        );
        assert_eq!(
            classify("CCGPQ,GGA"),
            vec![TypeIdentifier::Query {
                talker: "CC".into(),
                listener: "GP".into(),
                sentence_type: "GGA".into(),
            }]
        );
        assert_eq!(
            classify("PGRM"),
            vec![TypeIdentifier::Proprietary {
                manufacturer: "GRM".into(),
            }]
        );
        assert!(classify("GPGG").is_empty());
    }
}
