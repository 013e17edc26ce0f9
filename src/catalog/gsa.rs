use crate::SentenceDefinition;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "GSA")]
pub enum GSA {
    #[nmea(label = "Mode")]
    Mode,
    #[nmea(label = "Mode fix type")]
    ModeFixType,
    #[nmea(label = "SV ID01")]
    SvId01,
    #[nmea(label = "SV ID02")]
    SvId02,
    #[nmea(label = "SV ID03")]
    SvId03,
    #[nmea(label = "SV ID04")]
    SvId04,
    #[nmea(label = "SV ID05")]
    SvId05,
    #[nmea(label = "SV ID06")]
    SvId06,
    #[nmea(label = "SV ID07")]
    SvId07,
    #[nmea(label = "SV ID08")]
    SvId08,
    #[nmea(label = "SV ID09")]
    SvId09,
    #[nmea(label = "SV ID10")]
    SvId10,
    #[nmea(label = "SV ID11")]
    SvId11,
    #[nmea(label = "SV ID12")]
    SvId12,
    #[nmea(label = "PDOP (Dilution of precision)")]
    Pdop,
    #[nmea(label = "HDOP (Horizontal DOP)")]
    Hdop,
    #[nmea(label = "VDOP (Vertical DOP)")]
    Vdop,
}
