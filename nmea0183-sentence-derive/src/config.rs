use proc_macro2::Span;
use syn::{Error, Ident, LitStr, Result};

use crate::meta::{self, MetaAttribute, MetaAttributeType};

/// Top level settings of a derived sentence type.
#[derive(Clone)]
pub struct Config {
    pub category: Ident,
    pub code: LitStr,
    pub type_name: LitStr,
}

impl Config {
    pub fn from_meta_attributes(name: &Ident, attribute_list: &[MetaAttribute]) -> Result<Self> {
        let sentence = meta::find(attribute_list, MetaAttributeType::Sentence);
        let proprietary = meta::find(attribute_list, MetaAttributeType::Proprietary);

        let (category, code) = match (sentence, proprietary) {
            (Some(code), None) => ("Talker", code),
            (None, Some(code)) => ("Proprietary", code),
            (Some(_), Some(attr)) => {
                return Err(Error::new(
                    attr.span(),
                    "nmea0183-sentence-derive: Attribute `proprietary` cannot be used with `sentence` attribute.",
                ));
            }
            (None, None) => {
                return Err(Error::new(
                    name.span(),
                    "nmea0183-sentence-derive: Sentence types must have a `sentence` or `proprietary` attribute",
                ));
            }
        };

        let value = code.value();
        let valid_code = value.chars().count() == 3
            && value
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if !valid_code {
            return Err(Error::new(
                code.span(),
                "nmea0183-sentence-derive: Sentence codes must be three uppercase word characters",
            ));
        }

        let type_name = meta::find(attribute_list, MetaAttributeType::TypeName)
            .map(|attr| attr.arg().clone())
            .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));

        Ok(Self {
            category: Ident::new(category, Span::call_site()),
            code: code.arg().clone(),
            type_name,
        })
    }
}
