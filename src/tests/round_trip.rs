use crate::{Newline, NmeaSentence, ParseOptions, RenderOptions, parse, parse_with};

const LINES: [&str; 12] = [
    "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D",
    "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68",
    "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A*05",
    "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
    "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C",
    "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25",
    "$GPZDA,201530.00,04,07,2002,00,00*60",
    "$GPDBT,0036.41,f,0011.10,M,0006.07,F*06",
    "$GPDPT,2.4,0.5,*78",
    "$GPTXT,01,01,02,u-blox ag - www.u-blox.com*50",
    "$CCGPQ,GGA*2B",
    "$PGRME,15.0,M,45.0,M,25.0,M*1C",
];

#[test]
fn test_render_reproduces_input() {
    let options = ParseOptions::new().check(true);

    for line in LINES {
        let sentence = parse_with(line, &options).unwrap();
        assert_eq!(sentence.to_string(), line, "Failed: {line:?}");
    }
}

#[test]
fn test_parse_render_is_stable() {
    for line in LINES {
        let rendered = parse(line).unwrap().to_string();
        assert_eq!(parse(&rendered).unwrap().to_string(), rendered, "Failed: {line:?}");
    }
}

#[test]
fn test_render_repairs_checksum() {
    let line = "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*00";
    assert_eq!(parse(line).unwrap().to_string(), LINES[0]);
}

#[test]
fn test_render_options() {
    let sentence = parse(LINES[0]).unwrap();
    let bare = LINES[0].trim_start_matches('$').trim_end_matches("*6D");

    let options = RenderOptions::new().checksum(false).dollar(false);
    assert_eq!(sentence.render(&options), bare);

    let options = RenderOptions::new().newline(Newline::CrLf);
    assert_eq!(sentence.render(&options), format!("{}\r\n", LINES[0]));

    let options = RenderOptions::new().dollar(false).newline("\n");
    let rendered = sentence.render(&options);
    assert_eq!(rendered, format!("{bare}*6D\n"));
    assert_eq!(parse(&rendered).unwrap(), sentence);
}

#[test]
fn test_lowercase_input_renders_uppercased_identifier() {
    let sentence = parse("$gpgga,1,2*75").unwrap();
    assert_eq!(sentence.identifier(), "GPGGA,");
    assert_eq!(sentence.to_string(), "$GPGGA,1,2*55");
}
