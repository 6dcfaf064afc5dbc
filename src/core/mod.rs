/// The directory holding the entries of one metadata block.
pub mod directory;

/// The metadata entry and the `Entry` capability trait.
pub mod entry;

/// Human readable field names for well-known tag tables.
pub mod field_names;

pub mod identifier;

/// Shared traits and the display configuration.
pub mod shared;

/// The typed value model of an entry.
pub mod value;
