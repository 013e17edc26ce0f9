use crate::SentenceDefinition;

/// DBT - Depth below transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "DBT")]
pub enum DBT {
    #[nmea(label = "Depth below surface, feet", kind = "Float")]
    DepthFeet,
    #[nmea(label = "Feet")]
    UnitFeet,
    #[nmea(label = "Depth below surface, meters", kind = "Float")]
    DepthMeters,
    #[nmea(label = "Meters")]
    UnitMeters,
    #[nmea(label = "Depth below surface, fathoms", kind = "Float")]
    DepthFathoms,
    #[nmea(label = "Fathoms")]
    UnitFathoms,
}
