//! # Field Schema
//!
//! A field schema names the positional data of a sentence type. It is an
//! ordered list of [`Field`]s plus a derived name to index lookup, built once
//! per sentence type when the type is registered.
//!
//! The data of a sentence may be longer than its schema; the trailing slots
//! are kept but have no name.

use std::{collections::HashMap, fmt};

use thiserror::Error;

/// The kind of value a field holds, used to coerce its raw text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Raw text, returned as is
    #[default]
    Text,
    /// Signed decimal integer
    Integer,
    /// Decimal number
    Float,
    /// UTC time of day, `hhmmss[.sss]`
    Time,
    /// Calendar date, `ddmmyy`
    Date,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Time => "time",
            Self::Date => "date",
        };
        write!(f, "{name}")
    }
}

/// A single named slot of a sentence's data.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Human readable description
    pub label: &'static str,
    /// Accessor name, unique within a schema
    pub name: &'static str,
    /// How the raw text is coerced when read by name
    pub kind: FieldKind,
}

impl Field {
    /// Creates a text field.
    pub const fn new(label: &'static str, name: &'static str) -> Self {
        Self::typed(label, name, FieldKind::Text)
    }

    /// Creates a field of the given kind.
    pub const fn typed(label: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self { label, name, kind }
    }
}

/// Errors raised when building a [`FieldSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two fields of the schema share a name.
    #[error("duplicate field name {0:?}")]
    DuplicateName(&'static str),
}

/// An ordered list of fields with a name to index lookup.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{Field, FieldKind, FieldSchema};
///
/// let schema = FieldSchema::new([
///     Field::new("Heading", "heading"),
///     Field::typed("Speed", "speed", FieldKind::Float),
/// ])
/// .unwrap();
///
/// assert_eq!(schema.index_of("speed"), Some(1));
/// assert_eq!(schema.index_of("course"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<Field>,
    name_to_idx: HashMap<&'static str, usize>,
}

impl FieldSchema {
    /// Builds a schema, rejecting duplicate field names.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Result<Self, SchemaError> {
        let fields: Vec<Field> = fields.into_iter().collect();
        let mut name_to_idx = HashMap::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            if name_to_idx.insert(field.name, index).is_some() {
                return Err(SchemaError::DuplicateName(field.name));
            }
        }

        Ok(Self {
            fields,
            name_to_idx,
        })
    }

    /// A schema without fields, used by sentences whose data is opaque.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fields in wire order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The derived name to index lookup.
    pub fn name_to_idx(&self) -> &HashMap<&'static str, usize> {
        &self.name_to_idx
    }

    /// Position of the named field in the sentence data.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_idx.get(name).copied()
    }

    /// The named field and its position.
    pub fn field(&self, name: &str) -> Option<(usize, &Field)> {
        self.index_of(name).map(|index| (index, &self.fields[index]))
    }

    /// The field at the given position, if the schema names it.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A new schema with `extra` appended after every declared field.
    pub fn extended(&self, extra: &[Field]) -> Result<Self, SchemaError> {
        Self::new(self.fields.iter().chain(extra).copied())
    }

    /// A new schema keeping at most `len` declared fields, then `extra`.
    pub fn truncated_extended(&self, len: usize, extra: &[Field]) -> Result<Self, SchemaError> {
        Self::new(self.fields.iter().take(len).chain(extra).copied())
    }
}
