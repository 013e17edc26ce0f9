use crate::SentenceDefinition;

/// TXT - Text Transmission
///
/// ```text
///         1  2  3  4
///         |  |  |  |
///  $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "TXT")]
pub enum TXT {
    #[nmea(label = "Number of Messages")]
    NumMsg,
    #[nmea(label = "Sentence Number")]
    NumSentence,
    #[nmea(label = "Text Identifier")]
    TextIdentifier,
    #[nmea(label = "Text")]
    Text,
}
