use crate::SentenceDefinition;

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "DPT")]
pub enum DPT {
    #[nmea(label = "Water depth, in meters", kind = "Float")]
    Depth,
    #[nmea(label = "Offset from the transducer, in meters", kind = "Float")]
    Offset,
    #[nmea(label = "Maximum range scale in use", kind = "Float")]
    Range,
}
