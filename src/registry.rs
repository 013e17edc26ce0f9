//! # Type Registry
//!
//! Maps sentence codes to the concrete sentence types that handle them.
//!
//! There is one mapping per category: talker sentence codes and proprietary
//! manufacturer codes. Query sentences are generic and have no registry.
//!
//! A [`Registry`] is assembled with a [`RegistryBuilder`] and is immutable
//! once built, so lookups are safe from any number of threads. The
//! process-wide registry used by [`parse`](crate::parse) is created on first
//! use; a custom one can be put in its place with [`install`] as long as no
//! sentence has been parsed yet.

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use thiserror::Error;
use tracing::debug;

use crate::schema::{Field, FieldSchema, SchemaError};

/// The sentence categories that are dispatched through a registry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Looked up by the three character sentence code, e.g. `GGA`
    Talker,
    /// Looked up by the three character manufacturer code, e.g. `GRM`
    Proprietary,
}

/// A concrete sentence type.
///
/// Usually derived with `#[derive(SentenceDefinition)]` on a fieldless enum
/// whose variants are the fields of the sentence.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{Category, Field, FieldKind, Registry, SentenceDefinition};
///
/// struct HDG;
///
/// impl SentenceDefinition for HDG {
///     const CATEGORY: Category = Category::Talker;
///     const CODE: &'static str = "HDG";
///     const TYPE_NAME: &'static str = "HDG";
///     const FIELDS: &'static [Field] = &[
///         Field::typed("Heading", "heading", FieldKind::Float),
///         Field::typed("Deviation", "deviation", FieldKind::Float),
///         Field::new("Deviation Direction", "dev_dir"),
///         Field::typed("Variation", "variation", FieldKind::Float),
///         Field::new("Variation Direction", "var_dir"),
///     ];
/// }
///
/// let mut builder = Registry::builder();
/// builder.register::<HDG>().unwrap();
/// let registry = builder.build();
///
/// assert_eq!(registry.talker("HDG").unwrap().schema().len(), 5);
/// ```
pub trait SentenceDefinition {
    /// The registry the type is added to.
    const CATEGORY: Category;
    /// Sentence code or manufacturer code, three uppercase word characters.
    const CODE: &'static str;
    /// Name reported for sentences of this type.
    const TYPE_NAME: &'static str;
    /// The field catalog of the type, in wire order.
    const FIELDS: &'static [Field];
}

/// A typed handle on one field of a sentence type.
pub trait FieldId: Copy {
    /// The accessor name of the field.
    fn name(self) -> &'static str;
}

/// A registered sentence type with its schema, built once at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    type_name: &'static str,
    category: Category,
    code: &'static str,
    schema: Arc<FieldSchema>,
}

impl Definition {
    /// Builds a definition from a field catalog.
    pub fn new(
        type_name: &'static str,
        category: Category,
        code: &'static str,
        fields: &[Field],
    ) -> Result<Self, RegistryError> {
        let valid_code =
            code.chars().count() == 3 && code.chars().all(|c| c.is_alphanumeric() || c == '_');
        if !valid_code || code.to_uppercase() != code {
            return Err(RegistryError::InvalidCode { type_name, code });
        }

        let schema = FieldSchema::new(fields.iter().copied())
            .map_err(|source| RegistryError::Schema { type_name, source })?;

        Ok(Self {
            type_name,
            category,
            code,
            schema: Arc::new(schema),
        })
    }

    /// Builds the definition of a [`SentenceDefinition`] type.
    pub fn of<T: SentenceDefinition>() -> Result<Self, RegistryError> {
        Self::new(T::TYPE_NAME, T::CATEGORY, T::CODE, T::FIELDS)
    }

    /// The fallback for proprietary sentences of unregistered manufacturers.
    ///
    /// It has no code of its own and an empty schema.
    pub fn generic_proprietary() -> Self {
        Self {
            type_name: "ProprietarySentence",
            category: Category::Proprietary,
            code: "",
            schema: Arc::new(FieldSchema::empty()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The declared schema, shared by every sentence of this type.
    pub fn schema(&self) -> &Arc<FieldSchema> {
        &self.schema
    }
}

/// Errors raised while registering sentence types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The field catalog of the type is not a valid schema.
    #[error("invalid field catalog for {type_name}: {source}")]
    Schema {
        /// The offending type
        type_name: &'static str,
        /// The schema failure
        source: SchemaError,
    },

    /// The code is not three uppercase word characters.
    #[error("invalid code {code:?} for {type_name}")]
    InvalidCode {
        /// The offending type
        type_name: &'static str,
        /// The rejected code
        code: &'static str,
    },
}

/// Collects sentence types before they are frozen into a [`Registry`].
///
/// Registering a code twice replaces the earlier type.
#[derive(Debug, Default)]
#[must_use]
pub struct RegistryBuilder {
    talker: HashMap<&'static str, Arc<Definition>>,
    proprietary: HashMap<&'static str, Arc<Definition>>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding the built-in sentence catalog.
    pub fn builtin() -> Result<Self, RegistryError> {
        #[allow(unused_mut)]
        let mut builder = Self::new();
        #[cfg(feature = "catalog")]
        crate::catalog::register_all(&mut builder)?;
        Ok(builder)
    }

    /// Registers a [`SentenceDefinition`] type.
    pub fn register<T: SentenceDefinition>(&mut self) -> Result<&mut Self, RegistryError> {
        let definition = Definition::of::<T>()?;
        Ok(self.insert(definition))
    }

    /// Registers an already built definition.
    pub fn insert(&mut self, definition: Definition) -> &mut Self {
        debug!(
            type_name = definition.type_name,
            code = definition.code,
            category = ?definition.category,
            fields = definition.schema.len(),
            "registering sentence type"
        );

        let map = match definition.category {
            Category::Talker => &mut self.talker,
            Category::Proprietary => &mut self.proprietary,
        };
        if let Some(previous) = map.insert(definition.code, Arc::new(definition)) {
            debug!(type_name = previous.type_name, "replaced sentence type");
        }

        self
    }

    /// Freezes the registered types.
    pub fn build(self) -> Registry {
        Registry {
            talker: self.talker,
            proprietary: self.proprietary,
            generic_proprietary: Arc::new(Definition::generic_proprietary()),
        }
    }
}

/// An immutable set of sentence types, keyed per category.
#[derive(Debug, Clone)]
pub struct Registry {
    talker: HashMap<&'static str, Arc<Definition>>,
    proprietary: HashMap<&'static str, Arc<Definition>>,
    generic_proprietary: Arc<Definition>,
}

impl Registry {
    /// Starts an empty registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry holding the built-in sentence catalog.
    pub fn builtin() -> Self {
        RegistryBuilder::builtin()
            .expect("built-in sentence catalog is valid")
            .build()
    }

    /// The talker sentence type for a sentence code.
    pub fn talker(&self, code: &str) -> Option<&Arc<Definition>> {
        self.talker.get(code)
    }

    /// The proprietary sentence type registered for a manufacturer.
    pub fn proprietary(&self, manufacturer: &str) -> Option<&Arc<Definition>> {
        self.proprietary.get(manufacturer)
    }

    /// The proprietary sentence type for a manufacturer, falling back to the
    /// generic proprietary type.
    pub fn proprietary_or_generic(&self, manufacturer: &str) -> &Arc<Definition> {
        self.proprietary(manufacturer)
            .unwrap_or(&self.generic_proprietary)
    }

    /// Registered talker sentence codes, sorted.
    pub fn talker_codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.talker.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Registered manufacturer codes, sorted.
    pub fn manufacturer_codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.proprietary.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Number of registered types across both categories.
    pub fn len(&self) -> usize {
        self.talker.len() + self.proprietary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        RegistryBuilder::new().build()
    }
}

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// The process-wide registry, holding the built-in catalog unless another
/// registry was [`install`]ed first.
pub fn global() -> &'static Arc<Registry> {
    GLOBAL.get_or_init(|| Arc::new(Registry::builtin()))
}

/// Makes `registry` the process-wide registry.
///
/// This only succeeds before the process-wide registry is first used; once
/// sentences have been parsed with it, it can no longer change and the
/// rejected registry is handed back.
pub fn install(registry: Arc<Registry>) -> Result<(), Arc<Registry>> {
    GLOBAL.set(registry)?;
    debug!("installed process-wide sentence registry");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    struct Abc;

    impl SentenceDefinition for Abc {
        const CATEGORY: Category = Category::Talker;
        const CODE: &'static str = "ABC";
        const TYPE_NAME: &'static str = "Abc";
        const FIELDS: &'static [Field] = &[
            Field::new("First", "first"),
            Field::typed("Second", "second", FieldKind::Integer),
        ];
    }

    struct Abc2;

    impl SentenceDefinition for Abc2 {
        const CATEGORY: Category = Category::Talker;
        const CODE: &'static str = "ABC";
        const TYPE_NAME: &'static str = "Abc2";
        const FIELDS: &'static [Field] = &[];
    }

    struct Vendor;

    impl SentenceDefinition for Vendor {
        const CATEGORY: Category = Category::Proprietary;
        const CODE: &'static str = "XYZ";
        const TYPE_NAME: &'static str = "Vendor";
        const FIELDS: &'static [Field] = &[Field::new("Subtype", "subtype")];
    }

    struct Broken;

    impl SentenceDefinition for Broken {
        const CATEGORY: Category = Category::Talker;
        const CODE: &'static str = "BRK";
        const TYPE_NAME: &'static str = "Broken";
        const FIELDS: &'static [Field] = &[Field::new("A", "a"), Field::new("B", "a")];
    }

    struct Lowercase;

    impl SentenceDefinition for Lowercase {
        const CATEGORY: Category = Category::Talker;
        const CODE: &'static str = "abc";
        const TYPE_NAME: &'static str = "Lowercase";
        const FIELDS: &'static [Field] = &[];
    }

    #[test]
    fn test_lookup_per_category() {
        let mut builder = Registry::builder();
        builder.register::<Abc>().unwrap().register::<Vendor>().unwrap();
        let registry = builder.build();

        let abc = registry.talker("ABC").unwrap();
        assert_eq!(abc.type_name(), "Abc");
        assert_eq!(abc.schema().index_of("second"), Some(1));
        assert!(registry.proprietary("ABC").is_none());

        assert_eq!(registry.proprietary("XYZ").unwrap().type_name(), "Vendor");
        assert!(registry.talker("XYZ").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_generic_proprietary_fallback() {
        let registry = Registry::default();
        let generic = registry.proprietary_or_generic("GRM");
        assert_eq!(generic.type_name(), "ProprietarySentence");
        assert!(generic.schema().is_empty());
    }

    #[test]
    fn test_later_registration_wins() {
        let mut builder = Registry::builder();
        builder.register::<Abc>().unwrap().register::<Abc2>().unwrap();
        let registry = builder.build();
        assert_eq!(registry.talker("ABC").unwrap().type_name(), "Abc2");
        assert_eq!(registry.talker_codes(), vec!["ABC"]);
    }

    #[test]
    fn test_invalid_definitions() {
        let mut builder = Registry::builder();
        assert_eq!(
            builder.register::<Broken>().unwrap_err(),
            RegistryError::Schema {
                type_name: "Broken",
                source: SchemaError::DuplicateName("a"),
            }
        );
        assert_eq!(
            builder.register::<Lowercase>().unwrap_err(),
            RegistryError::InvalidCode {
                type_name: "Lowercase",
                code: "abc",
            }
        );
        assert!(builder.build().is_empty());
    }

    #[cfg(feature = "catalog")]
    #[test]
    fn test_builtin_catalog() {
        let registry = Registry::builtin();
        for code in ["GGA", "GSV", "GRS", "RMC"] {
            assert!(registry.talker(code).is_some(), "missing {code}");
        }
        assert!(registry.proprietary("UBX").is_some());
    }

    #[cfg(feature = "catalog")]
    #[test]
    fn test_install_after_first_use() {
        assert!(!global().is_empty());
        assert!(install(Arc::new(Registry::default())).is_err());
        assert!(global().talker("GGA").is_some());
    }
}
