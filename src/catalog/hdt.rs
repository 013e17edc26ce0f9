use crate::SentenceDefinition;

/// HDT - Heading - True
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "HDT")]
pub enum HDT {
    #[nmea(label = "Heading", kind = "Float")]
    Heading,
    #[nmea(label = "True", name = "hdg_true")]
    HdgTrue,
}
