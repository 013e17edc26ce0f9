use crate::{
    Error, ErrorKind, NmeaSentence, ParseOptions, Sentence, catalog::GSV, parse, parse_with,
};

const GGA: &str =
    "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D";

fn strict() -> ParseOptions {
    ParseOptions::new().check(true)
}

#[test]
fn test_strict_talker() {
    let sentence = parse_with(GGA, &strict()).unwrap();

    let Sentence::Talker(gga) = sentence else {
        panic!("Unexpected sentence category")
    };
    assert_eq!(gga.talker(), "GP");
    assert_eq!(gga.sentence_type(), "GGA");
    assert_eq!(gga.type_name(), "GGA");
    assert_eq!(gga.data().len(), 14);
}

#[test]
fn test_checksum_mismatch() {
    let line = GGA.replace("*6D", "*00");

    let err = parse_with(&line, &strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Checksum);
    assert!(matches!(
        err,
        Error::ChecksumMismatch {
            found: 0x00,
            expected: 0x6D,
            ..
        }
    ));
    assert_eq!(err.data().len(), 14);

    assert!(parse(&line).is_ok());
}

#[test]
fn test_checksum_missing() {
    let line = GGA.trim_end_matches("*6D");

    let err = parse_with(line, &strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Checksum);
    assert_eq!(err.message(), "strict checking requested but checksum missing");

    assert!(parse(line).is_ok());
}

#[test]
fn test_unknown_sentence_type() {
    let err = parse("$GPXXX,1,2,3*53").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SentenceType);
    assert!(err.kind().is_parse_error());
    assert_eq!(err.data(), vec!["$GPXXX,1,2,3*53"]);
}

#[test]
fn test_unparseable_lines() {
    let cases = ["", "GPGGA", "$GP,1,2", "$GPGGA,1*6D trailing", "$GPGGA,1*XY"];

    for line in cases {
        let err = parse(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "Failed: {line:?}");
        assert_eq!(err.message(), "could not parse data", "Failed: {line:?}");
    }
}

#[test]
fn test_framing_tolerance() {
    let expected = parse(GGA).unwrap();

    let cases = [
        format!("{GGA}\r\n"),
        format!("  {GGA}  \n"),
        GGA.trim_start_matches('$').to_string(),
    ];
    for line in cases {
        let sentence = parse_with(&line, &strict()).unwrap();
        assert_eq!(sentence, expected, "Failed: {line:?}");
    }
}

#[test]
fn test_lowercase_sentence() {
    let sentence = parse_with("$gpgga,1,2*75", &strict()).unwrap();
    assert_eq!(sentence.type_name(), "GGA");
    assert_eq!(sentence.get_raw("talker"), Ok("GP"));
}

#[test]
fn test_query() {
    let sentence = parse("$CCGPQ,GGA").unwrap();

    let query = sentence.as_query().unwrap();
    assert_eq!(query.talker(), "CC");
    assert_eq!(query.listener(), "GP");
    assert_eq!(query.sentence_type(), "GGA");
    assert!(query.data().is_empty());
    assert_eq!(sentence.to_string(), "$CCGPQ,GGA*2B");
}

#[test]
fn test_query_with_data() {
    let err = parse("$CCGPQ,GGA,1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_proprietary_fallback() {
    let sentence = parse("$PGRME,15.0,M,45.0,M,25.0,M*1C").unwrap();

    let proprietary = sentence.as_proprietary().unwrap();
    assert_eq!(proprietary.type_name(), "ProprietarySentence");
    assert_eq!(proprietary.manufacturer(), "GRM");
    assert_eq!(proprietary.data(), ["E", "15.0", "M", "45.0", "M", "25.0", "M"]);
    assert_eq!(proprietary.extra_data().len(), 7);
}

#[test]
fn test_gsv_signal_id() {
    let line = "$GPGSV,3,1,11,01,65,123,45,02,40,210,30,03,70,300,35,04,20,090,20,1*6F";

    let sentence = parse_with(line, &ParseOptions::new().gsv_signal_id(true)).unwrap();
    assert_eq!(sentence.get_raw("signal_id"), Ok("1"));
    assert_eq!(sentence.get_raw("snr_4"), Ok("20"));
    assert!(sentence.extra_data().is_empty());

    let sentence = parse(line).unwrap();
    assert!(sentence.get_raw("signal_id").is_err());
    assert_eq!(sentence.extra_data(), ["1".to_string()]);
    assert_eq!(sentence.get(GSV::Snr4).unwrap().as_str(), Some("20"));
}

#[test]
fn test_gsv_signal_id_short_sentence() {
    // a last page with two satellites: the signal ID takes the slot after them
    let sentence = parse_with(
        "$GPGSV,3,3,11,01,65,123,45,02,40,210,30,1",
        &ParseOptions::new().gsv_signal_id(true),
    )
    .unwrap();

    assert_eq!(sentence.schema().len(), 12);
    assert_eq!(sentence.get_raw("signal_id"), Ok("1"));
    assert!(sentence.get_raw("sv_prn_num_3").is_err());
}

#[test]
fn test_grs_ids() {
    let line = "$GPGRS,220320.0,0,-0.8,-0.2,-0.1,-0.2,0.8,0.6,,,,,,,1,1*79";

    let sentence = parse_with(line, &strict().grs_ids(true)).unwrap();
    assert_eq!(sentence.get_raw("system_id"), Ok("1"));
    assert_eq!(sentence.get_raw("signal_id"), Ok("1"));
    assert_eq!(sentence.schema().len(), 16);

    let sentence = parse_with(line, &strict()).unwrap();
    assert!(sentence.get_raw("system_id").is_err());
    assert_eq!(sentence.extra_data().len(), 2);
}

#[test]
fn test_extensions_only_touch_their_sentence() {
    let options = ParseOptions::new().gsv_signal_id(true).grs_ids(true);
    let sentence = parse_with(GGA, &options).unwrap();
    assert_eq!(sentence.schema().len(), 14);
    assert!(sentence.get_raw("signal_id").is_err());
}
