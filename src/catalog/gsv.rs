use crate::SentenceDefinition;

/// GSV - Satellites in view
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// NMEA 4.10 receivers append a signal ID, see
/// [`ParseOptions::gsv_signal_id`](crate::ParseOptions::gsv_signal_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "GSV")]
pub enum GSV {
    #[nmea(label = "Number of messages of type in cycle")]
    NumMessages,
    #[nmea(label = "Message Number")]
    MsgNum,
    #[nmea(label = "Total number of SVs in view")]
    NumSvInView,
    #[nmea(label = "SV PRN number 1", name = "sv_prn_num_1")]
    SvPrnNum1,
    #[nmea(label = "Elevation in degrees 1", name = "elevation_deg_1")]
    ElevationDeg1,
    #[nmea(label = "Azimuth, deg from true north 1", name = "azimuth_1")]
    Azimuth1,
    #[nmea(label = "SNR 1", name = "snr_1")]
    Snr1,
    #[nmea(label = "SV PRN number 2", name = "sv_prn_num_2")]
    SvPrnNum2,
    #[nmea(label = "Elevation in degrees 2", name = "elevation_deg_2")]
    ElevationDeg2,
    #[nmea(label = "Azimuth, deg from true north 2", name = "azimuth_2")]
    Azimuth2,
    #[nmea(label = "SNR 2", name = "snr_2")]
    Snr2,
    #[nmea(label = "SV PRN number 3", name = "sv_prn_num_3")]
    SvPrnNum3,
    #[nmea(label = "Elevation in degrees 3", name = "elevation_deg_3")]
    ElevationDeg3,
    #[nmea(label = "Azimuth, deg from true north 3", name = "azimuth_3")]
    Azimuth3,
    #[nmea(label = "SNR 3", name = "snr_3")]
    Snr3,
    #[nmea(label = "SV PRN number 4", name = "sv_prn_num_4")]
    SvPrnNum4,
    #[nmea(label = "Elevation in degrees 4", name = "elevation_deg_4")]
    ElevationDeg4,
    #[nmea(label = "Azimuth, deg from true north 4", name = "azimuth_4")]
    Azimuth4,
    #[nmea(label = "SNR 4", name = "snr_4")]
    Snr4,
}
