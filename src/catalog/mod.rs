//! # Built-in Sentence Catalog
//!
//! The sentence types registered by [`Registry::builtin`](crate::Registry::builtin).
//! Each type is a fieldless enum whose variants are its fields, so a field can
//! be read through the typed accessors as well as by name:
//!
//! ```rust
//! use nmea0183_sentence::{FieldValue, NmeaSentence, catalog::GGA, parse};
//!
//! let sentence = parse("$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D").unwrap();
//! assert_eq!(sentence.get(GGA::GpsQual), Ok(FieldValue::Integer(1)));
//! assert_eq!(sentence.get(GGA::Lat), sentence.get_field("lat"));
//! ```

mod dbt;
mod dpt;
mod gga;
mod gll;
mod grs;
mod gsa;
mod gsv;
mod hdt;
mod rmc;
mod txt;
mod ubx;
mod vtg;
mod zda;

pub use dbt::DBT;
pub use dpt::DPT;
pub use gga::GGA;
pub use gll::GLL;
pub use grs::GRS;
pub use gsa::GSA;
pub use gsv::GSV;
pub use hdt::HDT;
pub use rmc::RMC;
pub use txt::TXT;
pub use ubx::UBX;
pub use vtg::VTG;
pub use zda::ZDA;

use crate::registry::{RegistryBuilder, RegistryError};

/// Registers every built-in sentence type.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder
        .register::<DBT>()?
        .register::<DPT>()?
        .register::<GGA>()?
        .register::<GLL>()?
        .register::<GRS>()?
        .register::<GSA>()?
        .register::<GSV>()?
        .register::<HDT>()?
        .register::<RMC>()?
        .register::<TXT>()?
        .register::<VTG>()?
        .register::<ZDA>()?
        .register::<UBX>()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Registry, SentenceDefinition};

    #[test]
    fn test_register_all() {
        let mut builder = Registry::builder();
        register_all(&mut builder).unwrap();
        let registry = builder.build();

        assert_eq!(
            registry.talker_codes(),
            vec!["DBT", "DPT", "GGA", "GLL", "GRS", "GSA", "GSV", "HDT", "RMC", "TXT", "VTG", "ZDA"]
        );
        assert_eq!(registry.manufacturer_codes(), vec!["UBX"]);
        assert_eq!(
            registry.talker("GGA").unwrap().schema().len(),
            GGA::FIELDS.len()
        );
    }
}
