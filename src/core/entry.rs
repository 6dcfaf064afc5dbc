use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use core::fmt;

use serde::Serialize;

use super::field_names::{FieldNames, FieldNaming};
use super::identifier::Identifier;
use super::shared::{Config, ConfigType};
use super::value::Value;

/// Hashed in place of an absent value.
const ABSENT_VALUE_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("Invalid argument: {0} must be present")]
    InvalidArgument(&'static str),
}

/// A single piece of image metadata: an identifier and the value stored under it.
/// Everything except the identifier, the value, and the field name is derived from
/// those three, so implementors usually override `field_name` alone.
pub trait Entry {
    fn identifier(&self) -> &Identifier;

    fn value(&self) -> Option<&Value>;

    /// returns `None`, meaning unknown or undefined.
    fn field_name(&self) -> Option<&str> {
        None
    }

    /// The short name of the value's type, or `None` if the value is absent.
    fn type_name(&self) -> Option<&'static str> {
        self.value().map(Value::type_name)
    }

    /// 1 for a scalar or absent value, the element count for a sequence.
    fn value_count(&self) -> usize {
        self.value().map_or(1, Value::count)
    }

    fn value_as_string(&self) -> String {
        self.value_as_string_with(&Config::default())
    }

    fn value_as_string_with(&self, cfg: &Config) -> String {
        match self.value() {
            Some(value) => value.render(cfg),
            None => cfg.null_text.to_owned(),
        }
    }

    /// `"{identifier}[/{field name}]: {value}[ ({type name})]"`
    fn describe(&self) -> String {
        let name = self.field_name()
            .map(|name| format!("/{}", name))
            .unwrap_or_default();
        let type_ = self.type_name()
            .map(|type_| format!(" ({})", type_))
            .unwrap_or_default();
        format!("{}{}: {}{}", self.identifier(), name, self.value_as_string(), type_)
    }
}

/// The immutable entry type of the crate. The field name is fixed at construction,
/// either given explicitly or resolved from a `FieldNames` scheme, and does not
/// take part in equality or hashing.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataEntry {
    identifier: Identifier,

    #[serde(skip_serializing_if = "Option::is_none")]
    field_name: Option<Cow<'static, str>>,

    value: Option<Value>,
}

impl MetadataEntry {
    pub fn new<I, V>(identifier: I, value: V) -> Self
        where
            I: Into<Identifier>,
            V: Into<Value>,
    {
        Self {
            identifier: identifier.into(),
            field_name: None,
            value: Some(value.into()),
        }
    }

    /// An entry whose value is absent, e.g. an opaque or unknown field.
    pub fn without_value<I>(identifier: I) -> Self
        where I: Into<Identifier>,
    {
        Self {
            identifier: identifier.into(),
            field_name: None,
            value: None,
        }
    }

    /// Fails with `Err::InvalidArgument` if the identifier is missing.
    pub fn try_new(identifier: Option<Identifier>, value: Option<Value>) -> Result<Self, Err> {
        let identifier = identifier.ok_or(Err::InvalidArgument("identifier"))?;
        Ok(Self {
            identifier,
            field_name: None,
            value,
        })
    }

    /// Creates an entry whose field name is looked up in `names`.
    pub fn named<I, V>(identifier: I, value: V, names: &FieldNames) -> Self
        where
            I: Into<Identifier>,
            V: Into<Value>,
    {
        let out = Self::new(identifier, value);
        let field_name = names.field_name(&out.identifier).map(Cow::Borrowed);
        Self { field_name, ..out }
    }

    pub fn with_field_name<N>(self, name: N) -> Self
        where N: Into<Cow<'static, str>>,
    {
        Self {
            field_name: Some(name.into()),
            ..self
        }
    }

    pub fn into_value(self) -> Option<Value> {
        self.value
    }
}

impl Entry for MetadataEntry {
    #[inline]
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    #[inline]
    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[inline]
    fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }
}

impl PartialEq for MetadataEntry {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.value == other.value
    }
}

impl Eq for MetadataEntry {}

impl Hash for MetadataEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        match &self.value {
            Some(value) => value.hash(state),
            None => ABSENT_VALUE_HASH.hash(state),
        }
    }
}

impl fmt::Display for MetadataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
