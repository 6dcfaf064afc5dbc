// lib.rs

/// Contains the metadata entry, its value model, the field name schemes,
/// and the directory that collects entries.
pub mod core;

/// Contains the most commonly used traits, types, and objects.
pub mod prelude {
    pub use crate::core::directory::Directory;
    pub use crate::core::entry::{Entry, MetadataEntry};
    pub use crate::core::field_names::{Exif, FieldNames, FieldNaming, Iptc, Unnamed};
    pub use crate::core::identifier::Identifier;
    pub use crate::core::shared::{Config, ConfigType, ElementValue};
    pub use crate::core::value::{Array, ElementType, Rational, Scalar, Value};
}
