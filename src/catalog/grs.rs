use crate::SentenceDefinition;

/// GRS - GNSS Range Residuals
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_grs_gps_range_residuals>
///
/// ```text
///         1         2 3   4   5   6   7   8   9   10  11  12  13  14
///         |         | |   |   |   |   |   |   |   |   |   |   |   |
///  $--GRS,hhmmss.ss,m,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "GRS")]
pub enum GRS {
    #[nmea(label = "Timestamp", kind = "Time")]
    Timestamp,
    #[nmea(label = "Residuals mode", kind = "Integer")]
    ResidualsMode,
    #[nmea(label = "SV 01 Residual (m)", name = "sv_res_01", kind = "Float")]
    SvRes01,
    #[nmea(label = "SV 02 Residual (m)", name = "sv_res_02", kind = "Float")]
    SvRes02,
    #[nmea(label = "SV 03 Residual (m)", name = "sv_res_03", kind = "Float")]
    SvRes03,
    #[nmea(label = "SV 04 Residual (m)", name = "sv_res_04", kind = "Float")]
    SvRes04,
    #[nmea(label = "SV 05 Residual (m)", name = "sv_res_05", kind = "Float")]
    SvRes05,
    #[nmea(label = "SV 06 Residual (m)", name = "sv_res_06", kind = "Float")]
    SvRes06,
    #[nmea(label = "SV 07 Residual (m)", name = "sv_res_07", kind = "Float")]
    SvRes07,
    #[nmea(label = "SV 08 Residual (m)", name = "sv_res_08", kind = "Float")]
    SvRes08,
    #[nmea(label = "SV 09 Residual (m)", name = "sv_res_09", kind = "Float")]
    SvRes09,
    #[nmea(label = "SV 10 Residual (m)", name = "sv_res_10", kind = "Float")]
    SvRes10,
    #[nmea(label = "SV 11 Residual (m)", name = "sv_res_11", kind = "Float")]
    SvRes11,
    #[nmea(label = "SV 12 Residual (m)", name = "sv_res_12", kind = "Float")]
    SvRes12,
}
