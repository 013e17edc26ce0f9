use crate::SentenceDefinition;

/// PUBX - u-blox proprietary messages
///
/// The first data field is empty: the message ID follows the manufacturer
/// code after a separator, as in `$PUBX,00,...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SentenceDefinition)]
#[nmea(proprietary = "UBX")]
pub enum UBX {
    #[nmea(label = "Blank", name = "_blank")]
    Blank,
    #[nmea(label = "Message ID")]
    MsgId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NmeaSentence, parse};

    #[test]
    fn test_ubx_position() {
        let line = "$PUBX,00,081350.00,4717.113210,N,00833.915187,E,546.589,G3,2.1,2.0,0.007,77.52,0.007,,0.92,1.19,0.77,9,0,0*5F";
        let sentence = parse(line).unwrap();

        let ubx = sentence.as_proprietary().unwrap();
        assert_eq!(ubx.type_name(), "UBX");
        assert_eq!(ubx.manufacturer(), "UBX");
        assert_eq!(ubx.get_raw("_blank"), Ok(""));
        assert_eq!(ubx.get(UBX::MsgId).unwrap().as_str(), Some("00"));
        assert_eq!(ubx.extra_data().len(), 19);
        assert_eq!(sentence.to_string(), line);
    }
}
