use crate::SentenceDefinition;

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "GGA")]
pub enum GGA {
    #[nmea(label = "Timestamp", kind = "Time")]
    Timestamp,
    #[nmea(label = "Latitude")]
    Lat,
    #[nmea(label = "Latitude Direction")]
    LatDir,
    #[nmea(label = "Longitude")]
    Lon,
    #[nmea(label = "Longitude Direction")]
    LonDir,
    #[nmea(label = "GPS Quality Indicator", kind = "Integer")]
    GpsQual,
    #[nmea(label = "Number of Satellites in use")]
    NumSats,
    #[nmea(label = "Horizontal Dilution of Precision")]
    HorizontalDil,
    #[nmea(label = "Antenna Alt above sea level (mean)", kind = "Float")]
    Altitude,
    #[nmea(label = "Units of altitude (meters)")]
    AltitudeUnits,
    #[nmea(label = "Geoidal Separation")]
    GeoSep,
    #[nmea(label = "Units of Geoidal Separation (meters)")]
    GeoSepUnits,
    #[nmea(label = "Age of Differential GPS Data (secs)")]
    AgeGpsData,
    #[nmea(label = "Differential Reference Station ID")]
    RefStationId,
}
