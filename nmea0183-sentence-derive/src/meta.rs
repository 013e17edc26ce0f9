use std::fmt::Display;

use proc_macro2::Span;
use syn::{
    Attribute, Error, Ident, LitStr, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetaAttributeType {
    Kind,
    Label,
    Name,
    Proprietary,
    Sentence,
    TypeName,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "kind" => Some(Self::Kind),
            "label" => Some(Self::Label),
            "name" => Some(Self::Name),
            "proprietary" => Some(Self::Proprietary),
            "sentence" => Some(Self::Sentence),
            "type_name" => Some(Self::TypeName),
            _ => None,
        }
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Kind => "kind",
            Self::Label => "label",
            Self::Name => "name",
            Self::Proprietary => "proprietary",
            Self::Sentence => "sentence",
            Self::TypeName => "type_name",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: LitStr,
    span: Span,
}

impl MetaAttribute {
    pub fn is_top_level(&self) -> bool {
        matches!(
            self.r#type,
            MetaAttributeType::Proprietary
                | MetaAttributeType::Sentence
                | MetaAttributeType::TypeName
        )
    }

    pub fn is_field_level(&self) -> bool {
        matches!(
            self.r#type,
            MetaAttributeType::Kind | MetaAttributeType::Label | MetaAttributeType::Name
        )
    }

    pub fn arg(&self) -> &LitStr {
        &self.arg
    }

    pub fn value(&self) -> String {
        self.arg.value()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(ident.span(), "nmea0183-sentence-derive: Unknown nmea attribute")
        })?;

        let arg = parse_argument(input)?;

        Ok(MetaAttribute {
            r#type: attribute_type,
            arg,
            span: ident.span(),
        })
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

// read ="value" or ("value")
fn parse_argument(input: ParseStream) -> Result<LitStr> {
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        input.parse::<LitStr>().map_err(|err| {
            Error::new(
                err.span(),
                "nmea0183-sentence-derive: Expected a string literal for nmea attribute content",
            )
        })
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        content.parse()
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-sentence-derive: Expected '= \"<value>\"' or '(\"<value>\")' for nmea attribute",
        ))
    }
}

fn parse_attributes(
    attrs: &[Attribute],
    level: &str,
    allowed: impl Fn(&MetaAttribute) -> bool,
) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .map(|meta_attr| {
            if !allowed(&meta_attr) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-sentence-derive: Attribute `{}` is not allowed at the {level} level",
                        meta_attr.r#type
                    ),
                ));
            }

            if !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-sentence-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    parse_attributes(attrs, "top", MetaAttribute::is_top_level)
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    parse_attributes(attrs, "field", MetaAttribute::is_field_level)
}

pub fn find(attributes: &[MetaAttribute], r#type: MetaAttributeType) -> Option<&MetaAttribute> {
    attributes.iter().find(|attr| attr.r#type == r#type)
}
