use std::sync::Arc;

use nmea0183_sentence::{
    NmeaSentence, ParseOptions, RegistryBuilder, Result, Sentence, SentenceDefinition,
    SentenceParser,
};

/// PGRME - Garmin estimated error
#[derive(Debug, Clone, Copy, SentenceDefinition)]
#[nmea(proprietary = "GRM")]
enum GRME {
    #[nmea(label = "Sentence Subtype", name = "subtype")]
    Subtype,
    #[nmea(label = "Horizontal Position Error", kind = "Float")]
    Hpe,
    #[nmea(label = "Horizontal Error Units")]
    HpeUnits,
    #[nmea(label = "Vertical Position Error", kind = "Float")]
    Vpe,
    #[nmea(label = "Vertical Error Units")]
    VpeUnits,
    #[nmea(label = "Spherical Equivalent Position Error", kind = "Float")]
    Epe,
    #[nmea(label = "Spherical Error Units")]
    EpeUnits,
}

const LINES: [&str; 6] = [
    "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D\r\n",
    "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*00\r\n",
    "$GPXXX,1,2,3*53\r\n",
    "$CCGPQ,GGA*2B\r\n",
    "$PGRME,15.0,M,45.0,M,25.0,M*1C\r\n",
    "not a sentence\r\n",
];

fn print(line: &str, result: Result<Sentence>) {
    match result {
        Ok(sentence) => {
            println!("{:?}", sentence);
            for (name, value) in sentence.named_fields() {
                println!("    {name:>16} = {value:?} -> {:?}", sentence.get_field(name));
            }
        }
        Err(e) => {
            println!("Parsing error occurred for {:?}: {} ({:?})", line.trim_end(), e, e.kind());
        }
    }
}

fn main() {
    let default_parser = SentenceParser::new().options(ParseOptions::new().check(true));

    println!("== built-in catalog ==");
    for line in LINES {
        print(line, default_parser.parse(line));
    }

    let mut builder = RegistryBuilder::builtin().expect("built-in catalog is valid");
    builder
        .register::<GRME>()
        .expect("GRME is a valid sentence type");
    let garmin_parser = default_parser.registry(Arc::new(builder.build()));

    println!("== built-in catalog and GRME ==");
    for line in LINES {
        print(line, garmin_parser.parse(line));
    }

    let grme = garmin_parser.parse(LINES[4]).expect("PGRME line is valid");
    println!(
        "GRME horizontal error: {:?} {:?}",
        grme.get(GRME::Hpe),
        grme.get(GRME::HpeUnits)
    );
}
