use crate::SentenceDefinition;

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|  13
///         |         | |       | |        |  |   |   |    |  | |   |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "RMC")]
pub enum RMC {
    #[nmea(label = "Timestamp", kind = "Time")]
    Timestamp,
    #[nmea(label = "Status")]
    Status,
    #[nmea(label = "Latitude")]
    Lat,
    #[nmea(label = "Latitude Direction")]
    LatDir,
    #[nmea(label = "Longitude")]
    Lon,
    #[nmea(label = "Longitude Direction")]
    LonDir,
    #[nmea(label = "Speed Over Ground", kind = "Float")]
    SpdOverGrnd,
    #[nmea(label = "True Course", kind = "Float")]
    TrueCourse,
    #[nmea(label = "Datestamp", kind = "Date")]
    Datestamp,
    #[nmea(label = "Magnetic Variation")]
    MagVariation,
    #[nmea(label = "Magnetic Variation Direction")]
    MagVarDir,
    #[nmea(label = "Mode Indicator")]
    ModeIndicator,
    #[nmea(label = "Navigational Status")]
    NavStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldValue, NmeaSentence, parse};

    #[test]
    fn test_rmc_without_trailing_fields() {
        let sentence =
            parse("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68").unwrap();

        assert_eq!(sentence.type_name(), "RMC");
        assert_eq!(sentence.get(RMC::SpdOverGrnd), Ok(FieldValue::Float(0.5)));
        let date = sentence.get(RMC::Datestamp).unwrap().as_date().unwrap();
        assert_eq!((date.year(), date.day()), (1994, 19));

        // The mode indicator and navigational status are absent
        assert_eq!(sentence.get(RMC::ModeIndicator), Ok(FieldValue::Text(String::new())));
        assert_eq!(sentence.data().len(), 11);
    }
}
