use core::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::entry::{Entry, MetadataEntry};
use super::identifier::Identifier;

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(Identifier),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// The entries of one metadata block (an IFD, an IPTC record, ...), keyed by
/// identifier and kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: IndexMap<Identifier, MetadataEntry>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Collects the entries in order. A later entry replaces an earlier one with
    /// the same identifier but keeps the earlier position.
    pub fn from_entries<I>(entries: I) -> Self
        where I: IntoIterator<Item = MetadataEntry>,
    {
        let mut out = Self::new();
        for entry in entries {
            out.insert(entry);
        }
        out
    }

    /// Inserts the entry, returning the one it replaced, if any.
    pub fn insert(&mut self, entry: MetadataEntry) -> Option<MetadataEntry> {
        let identifier = entry.identifier().clone();
        let previous = self.entries.insert(identifier, entry);
        if let Some(previous) = &previous {
            tracing::debug!(identifier = %previous.identifier(), "replaced entry");
        } else {
            tracing::trace!(len = self.entries.len(), "inserted entry");
        }
        previous
    }

    /// Inserts the entry unless its identifier is already present.
    pub fn insert_unique(&mut self, entry: MetadataEntry) -> Result<(), Err> {
        if self.entries.contains_key(entry.identifier()) {
            tracing::debug!(identifier = %entry.identifier(), "rejected duplicate entry");
            return Err(Err::DuplicateIdentifier(entry.identifier().clone()));
        }
        self.entries.insert(entry.identifier().clone(), entry);
        Ok(())
    }

    pub fn get(&self, identifier: &Identifier) -> Option<&MetadataEntry> {
        self.entries.get(identifier)
    }

    /// returns the first entry, in insertion order, with the given field name.
    pub fn get_by_field_name(&self, name: &str) -> Option<&MetadataEntry> {
        self.entries.values().find(|entry| entry.field_name() == Some(name))
    }

    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Removes the entry, keeping the order of the remaining ones.
    pub fn remove(&mut self, identifier: &Identifier) -> Option<MetadataEntry> {
        self.entries.shift_remove(identifier)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MetadataEntry> {
        self.entries.values()
    }

    pub fn entries(&self) -> Vec<&MetadataEntry> {
        self.iter().collect()
    }

    /// The entries as a JSON array in insertion order. Each element carries its own
    /// `identifier`, so a tag and a name with the same text stay apart.
    pub fn to_json(&self) -> Result<String, Err> {
        Ok(serde_json::to_string(self)?)
    }
}

impl PartialEq for Directory {
    /// Two directories are equal if they hold equal entries, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|entry| other.get(entry.identifier()) == Some(entry))
    }
}

impl Eq for Directory {}

impl Serialize for Directory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer,
    {
        serializer.collect_seq(self.entries.values())
    }
}

impl FromIterator<MetadataEntry> for Directory {
    fn from_iter<I: IntoIterator<Item = MetadataEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a MetadataEntry;
    type IntoIter = indexmap::map::Values<'a, Identifier, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl fmt::Display for Directory {
    /// One entry per line, in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.iter() {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field_names::Exif;

    fn sample() -> Directory {
        let names = Exif.into();
        Directory::from_entries(vec![
            MetadataEntry::named(271u16, "Canon", &names),
            MetadataEntry::named(272u16, "Canon EOS 5D", &names),
            MetadataEntry::named(258u16, vec![8u16, 8, 8], &names),
        ])
    }

    #[test]
    fn test_insert_and_get() {
        let dir = sample();
        assert_eq!(dir.len(), 3);
        assert!(!dir.is_empty());
        assert!(dir.contains(&Identifier::Tag(272)));
        assert_eq!(
            dir.get(&Identifier::Tag(271)).and_then(|e| e.value()).and_then(|v| v.as_str()),
            Some("Canon")
        );
        assert!(dir.get(&Identifier::Tag(1)).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut dir = sample();
        let previous = dir.insert(MetadataEntry::new(271u16, "Nikon"));
        assert_eq!(previous, Some(MetadataEntry::new(271u16, "Canon")));
        assert_eq!(dir.len(), 3);
        // replacement keeps the original position
        assert_eq!(dir.iter().next().map(|e| e.identifier()), Some(&Identifier::Tag(271)));
    }

    #[test]
    fn test_insert_unique() {
        let mut dir = sample();
        let result = dir.insert_unique(MetadataEntry::new(271u16, "Nikon"));
        assert!(matches!(result, Err(Err::DuplicateIdentifier(Identifier::Tag(271)))));
        assert!(dir.insert_unique(MetadataEntry::new(306u16, "2009:11:12 00:43:13")).is_ok());
        assert_eq!(dir.len(), 4);
    }

    #[test]
    fn test_get_by_field_name() {
        let dir = sample();
        let entry = dir.get_by_field_name("Model").unwrap();
        assert_eq!(entry.identifier(), &Identifier::Tag(272));
        assert!(dir.get_by_field_name("Artist").is_none());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut dir = sample();
        assert!(dir.remove(&Identifier::Tag(272)).is_some());
        assert!(dir.remove(&Identifier::Tag(272)).is_none());
        let ids = dir.iter().map(|e| e.identifier().clone()).collect::<Vec<_>>();
        assert_eq!(ids, vec![Identifier::Tag(271), Identifier::Tag(258)]);
    }

    #[test]
    fn test_display() {
        let dir = sample();
        assert_eq!(
            dir.to_string(),
            "271/Make: Canon (String)\n\
             272/Model: Canon EOS 5D (String)\n\
             258/BitsPerSample: [8, 8, 8] (u16[])\n"
        );
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Directory::from_entries(vec![
            MetadataEntry::new(1u32, 1u8),
            MetadataEntry::new(2u32, 2u8),
        ]);
        let b: Directory = vec![
            MetadataEntry::new(2u32, 2u8),
            MetadataEntry::new(1u32, 1u8),
        ].into_iter().collect();
        assert_eq!(a, b);

        let c = Directory::from_entries(vec![MetadataEntry::new(1u32, 1u8)]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_to_json() {
        let dir = Directory::from_entries(vec![
            MetadataEntry::new(271u16, "Canon").with_field_name("Make"),
            MetadataEntry::without_value(37500u16),
        ]);
        let json: serde_json::Value = serde_json::from_str(&dir.to_json().unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[0]["identifier"], 271);
        assert_eq!(json[0]["field_name"], "Make");
        assert_eq!(json[0]["value"], "Canon");
        assert_eq!(json[1]["identifier"], 37500);
        assert!(json[1]["value"].is_null());
    }

    #[test]
    fn test_to_json_keeps_tag_and_name_with_same_text() {
        let dir = Directory::from_entries(vec![
            MetadataEntry::new(271u32, "tag"),
            MetadataEntry::new("271", "name"),
        ]);
        assert_eq!(dir.len(), 2);

        let json: serde_json::Value = serde_json::from_str(&dir.to_json().unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["identifier"], 271);
        assert_eq!(entries[0]["value"], "tag");
        assert_eq!(entries[1]["identifier"], "271");
        assert_eq!(entries[1]["value"], "name");
    }
}
