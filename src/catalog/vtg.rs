use crate::SentenceDefinition;

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "VTG")]
pub enum VTG {
    #[nmea(label = "True Track made good", kind = "Float")]
    TrueTrack,
    #[nmea(label = "True Track made good symbol")]
    TrueTrackSym,
    #[nmea(label = "Magnetic Track made good", kind = "Float")]
    MagTrack,
    #[nmea(label = "Magnetic Track symbol")]
    MagTrackSym,
    #[nmea(label = "Speed over ground knots", kind = "Float")]
    SpdOverGrndKts,
    #[nmea(label = "Speed over ground symbol")]
    SpdOverGrndKtsSym,
    #[nmea(label = "Speed over ground kmph", kind = "Float")]
    SpdOverGrndKmph,
    #[nmea(label = "Speed over ground kmph symbol")]
    SpdOverGrndKmphSym,
    #[nmea(label = "FAA mode indicator")]
    FaaMode,
}
