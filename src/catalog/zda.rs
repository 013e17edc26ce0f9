use crate::SentenceDefinition;

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(sentence = "ZDA")]
pub enum ZDA {
    #[nmea(label = "Timestamp", kind = "Time")]
    Timestamp,
    #[nmea(label = "Day", kind = "Integer")]
    Day,
    #[nmea(label = "Month", kind = "Integer")]
    Month,
    #[nmea(label = "Year", kind = "Integer")]
    Year,
    #[nmea(label = "Local Zone Description", kind = "Integer")]
    LocalZone,
    #[nmea(label = "Local Zone Minutes Description", kind = "Integer")]
    LocalZoneMinutes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldValue, NmeaSentence, ParseOptions, parse_with};

    #[test]
    fn test_zda_integers() {
        let sentence = parse_with(
            "$GPZDA,201530.00,04,07,2002,00,00*60",
            &ParseOptions::new().check(true),
        )
        .unwrap();

        assert_eq!(sentence.get(ZDA::Day), Ok(FieldValue::Integer(4)));
        assert_eq!(sentence.get(ZDA::Month), Ok(FieldValue::Integer(7)));
        assert_eq!(sentence.get(ZDA::Year), Ok(FieldValue::Integer(2002)));
        assert_eq!(sentence.get(ZDA::LocalZone), Ok(FieldValue::Integer(0)));
    }
}
