use crate::SentenceDefinition;

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "GLL")]
pub enum GLL {
    #[nmea(label = "Latitude")]
    Lat,
    #[nmea(label = "Latitude Direction")]
    LatDir,
    #[nmea(label = "Longitude")]
    Lon,
    #[nmea(label = "Longitude Direction")]
    LonDir,
    #[nmea(label = "Timestamp", kind = "Time")]
    Timestamp,
    #[nmea(label = "Status")]
    Status,
    #[nmea(label = "FAA mode indicator")]
    FaaMode,
}
