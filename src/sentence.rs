//! # Sentence Object Model
//!
//! A parsed sentence is one of three categories:
//!
//! | Category                | Identity                        | Identifier  |
//! |-------------------------|---------------------------------|-------------|
//! | [`TalkerSentence`]      | talker, sentence code           | `GPGGA,`    |
//! | [`QuerySentence`]       | talker, listener, sentence code | `CCGPQ,GGA` |
//! | [`ProprietarySentence`] | manufacturer                    | `PGRM`      |
//!
//! Each holds its raw data fields in wire order. The identity of a sentence is
//! fixed once it is built; its field values can be changed through the named
//! accessors.

use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use crate::{
    error::FieldError,
    field::{FieldValue, coerce, debug_fields, raw_at, write_slot},
    registry::{Definition, FieldId, RegistryError, SentenceDefinition},
    render::{RenderOptions, render},
    schema::FieldSchema,
};

static EMPTY_SCHEMA: LazyLock<FieldSchema> = LazyLock::new(FieldSchema::empty);

/// Behaviour shared by every sentence category.
pub trait NmeaSentence {
    /// Name of the concrete sentence type, e.g. `GGA` or `QuerySentence`.
    fn type_name(&self) -> &'static str;

    /// The type identifier as written on the wire, without `$`.
    ///
    /// Talker identifiers carry their own trailing separator (`GPGGA,`);
    /// proprietary identifiers do not (`PGRM`), the data follows directly.
    fn identifier(&self) -> String;

    /// Raw data fields in wire order.
    fn data(&self) -> &[String];

    /// The schema naming the data fields.
    fn schema(&self) -> &FieldSchema;

    /// Looks up an identity field (`talker`, `manufacturer`, ...) by name.
    fn identity_field(&self, name: &str) -> Option<&str>;

    /// Renders the sentence to its wire form.
    fn render(&self, options: &RenderOptions) -> String {
        render(&self.identifier(), self.data(), options)
    }

    /// Reads the raw text of a field by name.
    ///
    /// Schema fields take precedence over identity fields. A schema field
    /// whose slot lies past the end of the data reads as empty.
    fn get_raw(&self, name: &str) -> Result<&str, FieldError> {
        if let Some(index) = self.schema().index_of(name) {
            return Ok(raw_at(self.data(), index));
        }

        self.identity_field(name).ok_or_else(|| FieldError::Unknown {
            name: name.to_owned(),
        })
    }

    /// Reads a field by name, coerced according to its kind.
    ///
    /// Identity fields read as [`FieldValue::Text`].
    fn get_field(&self, name: &str) -> Result<FieldValue, FieldError> {
        if let Some((index, field)) = self.schema().field(name) {
            return coerce(field, raw_at(self.data(), index));
        }

        self.identity_field(name)
            .map(|value| FieldValue::Text(value.to_owned()))
            .ok_or_else(|| FieldError::Unknown {
                name: name.to_owned(),
            })
    }

    /// Reads a field through a typed handle.
    fn get<F: FieldId>(&self, field: F) -> Result<FieldValue, FieldError>
    where
        Self: Sized,
    {
        self.get_field(field.name())
    }

    /// Schema field names paired with their raw text, for the slots present.
    fn named_fields(&self) -> Vec<(&'static str, &str)> {
        self.schema()
            .fields()
            .iter()
            .zip(self.data())
            .map(|(field, raw)| (field.name, raw.as_str()))
            .collect()
    }

    /// Trailing data fields the schema does not name.
    fn extra_data(&self) -> &[String] {
        self.data().get(self.schema().len()..).unwrap_or_default()
    }
}

fn set_slot(
    schema: &FieldSchema,
    data: &mut Vec<String>,
    is_identity: bool,
    name: &str,
    value: impl fmt::Display,
) -> Result<(), FieldError> {
    match write_slot(schema, data, name, value.to_string()) {
        Some(result) => result,
        None if is_identity => Err(FieldError::Immutable {
            name: name.to_owned(),
        }),
        None => Err(FieldError::Unknown {
            name: name.to_owned(),
        }),
    }
}

/// A sentence emitted by a talker, e.g. `$GPGGA,...`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, PartialEq, Eq)]
pub struct TalkerSentence {
    type_name: &'static str,
    talker: String,
    sentence_type: String,
    data: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    schema: Arc<FieldSchema>,
}

impl TalkerSentence {
    /// Creates a sentence of a registered type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_sentence::{Category, Definition, Field, NmeaSentence, TalkerSentence};
    ///
    /// let definition = Definition::new(
    ///     "HDT",
    ///     Category::Talker,
    ///     "HDT",
    ///     &[Field::new("Heading", "heading"), Field::new("True", "hdg_true")],
    /// )
    /// .unwrap();
    ///
    /// let mut hdt = TalkerSentence::new(&definition, "HE", ["", "T"]);
    /// hdt.set_field("heading", 274.07).unwrap();
    /// assert_eq!(hdt.render(&Default::default()), "$HEHDT,274.07,T*19");
    /// ```
    pub fn new(
        definition: &Definition,
        talker: impl Into<String>,
        data: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::with_schema(
            definition.type_name(),
            talker,
            definition.code(),
            data,
            Arc::clone(definition.schema()),
        )
    }

    /// Creates a sentence with an explicit schema.
    pub fn with_schema(
        type_name: &'static str,
        talker: impl Into<String>,
        sentence_type: impl Into<String>,
        data: impl IntoIterator<Item = impl Into<String>>,
        schema: Arc<FieldSchema>,
    ) -> Self {
        Self {
            type_name,
            talker: talker.into(),
            sentence_type: sentence_type.into(),
            data: data.into_iter().map(Into::into).collect(),
            schema,
        }
    }

    /// Creates a sentence of a [`SentenceDefinition`] type.
    pub fn of<T: SentenceDefinition>(
        talker: impl Into<String>,
        data: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, RegistryError> {
        let definition = Definition::of::<T>()?;
        Ok(Self::new(&definition, talker, data))
    }

    pub fn talker(&self) -> &str {
        &self.talker
    }

    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// Mutable access to the raw data fields.
    pub fn data_mut(&mut self) -> &mut Vec<String> {
        &mut self.data
    }

    /// Overwrites a schema field with the text of `value`.
    ///
    /// Only the slot of that field changes. A slot past the end of the data
    /// fails with [`FieldError::OutOfRange`].
    pub fn set_field(&mut self, name: &str, value: impl fmt::Display) -> Result<(), FieldError> {
        let is_identity = self.identity_field(name).is_some();
        set_slot(&self.schema, &mut self.data, is_identity, name, value)
    }

    /// Overwrites a field through a typed handle.
    pub fn set<F: FieldId>(&mut self, field: F, value: impl fmt::Display) -> Result<(), FieldError> {
        self.set_field(field.name(), value)
    }
}

impl NmeaSentence for TalkerSentence {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn identifier(&self) -> String {
        format!("{}{},", self.talker, self.sentence_type)
    }

    fn data(&self) -> &[String] {
        &self.data
    }

    fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    fn identity_field(&self, name: &str) -> Option<&str> {
        match name {
            "talker" => Some(self.talker.as_str()),
            "sentence_type" => Some(self.sentence_type.as_str()),
            _ => None,
        }
    }
}

impl fmt::Debug for TalkerSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_fields(
            f,
            self.type_name,
            &[
                ("talker", self.talker.as_str()),
                ("sentence_type", self.sentence_type.as_str()),
            ],
            &self.schema,
            &self.data,
        )
    }
}

/// A request for another device to emit a sentence, e.g. `$CCGPQ,GGA`.
///
/// Query sentences carry no data.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySentence {
    talker: String,
    listener: String,
    sentence_type: String,
}

impl QuerySentence {
    pub fn new(
        talker: impl Into<String>,
        listener: impl Into<String>,
        sentence_type: impl Into<String>,
    ) -> Self {
        Self {
            talker: talker.into(),
            listener: listener.into(),
            sentence_type: sentence_type.into(),
        }
    }

    /// The requesting talker.
    pub fn talker(&self) -> &str {
        &self.talker
    }

    /// The talker addressed by the query.
    pub fn listener(&self) -> &str {
        &self.listener
    }

    /// The requested sentence code.
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }
}

impl NmeaSentence for QuerySentence {
    fn type_name(&self) -> &'static str {
        "QuerySentence"
    }

    // No trailing separator: a query never has data to separate.
    fn identifier(&self) -> String {
        format!("{}{}Q,{}", self.talker, self.listener, self.sentence_type)
    }

    fn data(&self) -> &[String] {
        &[]
    }

    fn schema(&self) -> &FieldSchema {
        &EMPTY_SCHEMA
    }

    fn identity_field(&self, name: &str) -> Option<&str> {
        match name {
            "talker" => Some(self.talker.as_str()),
            "listener" => Some(self.listener.as_str()),
            "sentence_type" => Some(self.sentence_type.as_str()),
            _ => None,
        }
    }
}

/// A vendor defined sentence, e.g. `$PGRME,...`.
///
/// Manufacturers without a registered type are represented by the generic
/// proprietary type, whose data has no field names.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, PartialEq, Eq)]
pub struct ProprietarySentence {
    type_name: &'static str,
    manufacturer: String,
    data: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    schema: Arc<FieldSchema>,
}

impl ProprietarySentence {
    /// Creates a sentence of a registered proprietary type.
    pub fn new(
        definition: &Definition,
        manufacturer: impl Into<String>,
        data: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            type_name: definition.type_name(),
            manufacturer: manufacturer.into(),
            data: data.into_iter().map(Into::into).collect(),
            schema: Arc::clone(definition.schema()),
        }
    }

    /// Creates a sentence of the generic proprietary type.
    pub fn generic(
        manufacturer: impl Into<String>,
        data: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(&Definition::generic_proprietary(), manufacturer, data)
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Mutable access to the raw data fields.
    pub fn data_mut(&mut self) -> &mut Vec<String> {
        &mut self.data
    }

    /// Overwrites a schema field with the text of `value`.
    pub fn set_field(&mut self, name: &str, value: impl fmt::Display) -> Result<(), FieldError> {
        let is_identity = self.identity_field(name).is_some();
        set_slot(&self.schema, &mut self.data, is_identity, name, value)
    }

    /// Overwrites a field through a typed handle.
    pub fn set<F: FieldId>(&mut self, field: F, value: impl fmt::Display) -> Result<(), FieldError> {
        self.set_field(field.name(), value)
    }
}

impl NmeaSentence for ProprietarySentence {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn identifier(&self) -> String {
        format!("P{}", self.manufacturer)
    }

    fn data(&self) -> &[String] {
        &self.data
    }

    fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    fn identity_field(&self, name: &str) -> Option<&str> {
        match name {
            "manufacturer" => Some(self.manufacturer.as_str()),
            _ => None,
        }
    }
}

impl fmt::Debug for ProprietarySentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_fields(
            f,
            self.type_name,
            &[("manufacturer", self.manufacturer.as_str())],
            &self.schema,
            &self.data,
        )
    }
}

/// Any parsed sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentence {
    /// `$GPGGA,...`
    Talker(TalkerSentence),
    /// `$CCGPQ,GGA`
    Query(QuerySentence),
    /// `$PGRME,...`
    Proprietary(ProprietarySentence),
}

impl Sentence {
    pub fn as_talker(&self) -> Option<&TalkerSentence> {
        match self {
            Sentence::Talker(sentence) => Some(sentence),
            _ => None,
        }
    }

    pub fn as_query(&self) -> Option<&QuerySentence> {
        match self {
            Sentence::Query(sentence) => Some(sentence),
            _ => None,
        }
    }

    pub fn as_proprietary(&self) -> Option<&ProprietarySentence> {
        match self {
            Sentence::Proprietary(sentence) => Some(sentence),
            _ => None,
        }
    }

    /// Overwrites a schema field with the text of `value`.
    ///
    /// Query sentences have no schema; every write to them fails.
    pub fn set_field(&mut self, name: &str, value: impl fmt::Display) -> Result<(), FieldError> {
        match self {
            Sentence::Talker(sentence) => sentence.set_field(name, value),
            Sentence::Proprietary(sentence) => sentence.set_field(name, value),
            Sentence::Query(sentence) => set_slot(
                &EMPTY_SCHEMA,
                &mut Vec::new(),
                sentence.identity_field(name).is_some(),
                name,
                value,
            ),
        }
    }

    /// Overwrites a field through a typed handle.
    pub fn set<F: FieldId>(&mut self, field: F, value: impl fmt::Display) -> Result<(), FieldError> {
        self.set_field(field.name(), value)
    }
}

macro_rules! delegate {
    ($sentence:expr, $inner:ident => $call:expr) => {
        match $sentence {
            Sentence::Talker($inner) => $call,
            Sentence::Query($inner) => $call,
            Sentence::Proprietary($inner) => $call,
        }
    };
}

impl NmeaSentence for Sentence {
    fn type_name(&self) -> &'static str {
        delegate!(self, sentence => sentence.type_name())
    }

    fn identifier(&self) -> String {
        delegate!(self, sentence => sentence.identifier())
    }

    fn data(&self) -> &[String] {
        delegate!(self, sentence => sentence.data())
    }

    fn schema(&self) -> &FieldSchema {
        delegate!(self, sentence => sentence.schema())
    }

    fn identity_field(&self, name: &str) -> Option<&str> {
        delegate!(self, sentence => sentence.identity_field(name))
    }
}

impl From<TalkerSentence> for Sentence {
    fn from(sentence: TalkerSentence) -> Self {
        Sentence::Talker(sentence)
    }
}

impl From<QuerySentence> for Sentence {
    fn from(sentence: QuerySentence) -> Self {
        Sentence::Query(sentence)
    }
}

impl From<ProprietarySentence> for Sentence {
    fn from(sentence: ProprietarySentence) -> Self {
        Sentence::Proprietary(sentence)
    }
}

macro_rules! display_rendered {
    ($($t:ty),*) => ($(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.render(&RenderOptions::default()))
            }
        }
    )*)
}

display_rendered!(TalkerSentence, QuerySentence, ProprietarySentence, Sentence);
