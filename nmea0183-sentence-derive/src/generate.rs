use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Error, Fields, Ident, LitStr, Result, Variant};

use crate::{
    config::Config,
    meta::{self, MetaAttributeType},
};

// Usage:
// #[derive(Clone, Copy, SentenceDefinition)]
// #[nmea(sentence = "HDT")]
// pub enum HDT {
//     #[nmea(label = "Heading", kind = "Float")]
//     Heading,
//     #[nmea(label = "True", name = "hdg_true")]
//     HdgTrue,
// }

const KINDS: [&str; 5] = ["Text", "Integer", "Float", "Time", "Date"];

struct FieldSpec {
    variant: Ident,
    label: LitStr,
    name: LitStr,
    kind: Ident,
}

impl FieldSpec {
    fn from_variant(variant: &Variant) -> Result<Self> {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new(
                variant.ident.span(),
                "nmea0183-sentence-derive: Field variants must not carry data",
            ));
        }

        let attributes = meta::parse_field_level_attributes(&variant.attrs)?;

        let label = meta::find(&attributes, MetaAttributeType::Label)
            .map(|attr| attr.arg().clone())
            .ok_or_else(|| {
                Error::new(
                    variant.ident.span(),
                    "nmea0183-sentence-derive: Field variants must have a `label` attribute",
                )
            })?;

        let name = meta::find(&attributes, MetaAttributeType::Name)
            .map(|attr| attr.arg().clone())
            .unwrap_or_else(|| {
                LitStr::new(&snake_case(&variant.ident.to_string()), variant.ident.span())
            });

        let kind = match meta::find(&attributes, MetaAttributeType::Kind) {
            Some(attr) if KINDS.contains(&attr.value().as_str()) => {
                Ident::new(&attr.value(), attr.arg().span())
            }
            Some(attr) => {
                return Err(Error::new(
                    attr.arg().span(),
                    format!(
                        "nmea0183-sentence-derive: Unknown field kind, expected one of {}",
                        KINDS.join(", ")
                    ),
                ));
            }
            None => Ident::new("Text", variant.ident.span()),
        };

        Ok(Self {
            variant: variant.ident.clone(),
            label,
            name,
            kind,
        })
    }
}

/// `SpdOverGrnd` -> `spd_over_grnd`; digits stay attached to the preceding word.
fn snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut name = String::with_capacity(ident.len() + 4);

    for (index, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && index > 0 {
            let previous = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|next| next.is_lowercase());
            if previous.is_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_uppercase() && next_is_lower)
            {
                name.push('_');
            }
        }
        name.extend(c.to_lowercase());
    }

    name
}

fn generate_enum(input: &DeriveInput, dataenum: &DataEnum) -> Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            name.span(),
            "nmea0183-sentence-derive: Sentence types must not be generic",
        ));
    }

    let attributes = meta::parse_top_level_attributes(&input.attrs)?;
    let Config {
        category,
        code,
        type_name,
    } = Config::from_meta_attributes(name, &attributes)?;

    let fields = dataenum
        .variants
        .iter()
        .map(FieldSpec::from_variant)
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashMap::new();
    for field in &fields {
        if let Some(first) = seen.insert(field.name.value(), &field.variant) {
            return Err(Error::new(
                field.variant.span(),
                format!(
                    "nmea0183-sentence-derive: Field name `{}` is already used by `{first}`",
                    field.name.value()
                ),
            ));
        }
    }

    let field_tokens = fields.iter().map(|field| {
        let FieldSpec {
            label, name, kind, ..
        } = field;
        quote! {
            nmea0183_sentence::Field::typed(#label, #name, nmea0183_sentence::FieldKind::#kind)
        }
    });

    let name_arms = fields.iter().map(|field| {
        let FieldSpec {
            variant,
            name: field_name,
            ..
        } = field;
        quote! { #name::#variant => #field_name }
    });

    Ok(quote! {
        impl nmea0183_sentence::SentenceDefinition for #name {
            const CATEGORY: nmea0183_sentence::Category = nmea0183_sentence::Category::#category;
            const CODE: &'static str = #code;
            const TYPE_NAME: &'static str = #type_name;
            const FIELDS: &'static [nmea0183_sentence::Field] = &[
                #(#field_tokens),*
            ];
        }

        impl nmea0183_sentence::FieldId for #name {
            fn name(self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    })
}

pub fn generate_sentence_definition_impl(input: &DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Enum(dataenum) => generate_enum(input, dataenum),
        Data::Struct(_) | Data::Union(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-sentence-derive: Sentence types must be declared as fieldless enums",
        )),
    }
}
