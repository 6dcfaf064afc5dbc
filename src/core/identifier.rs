use core::fmt;
use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;

/// The key of a metadata entry within its directory: a numeric tag (TIFF, EXIF,
/// IPTC record/dataset) or a textual name.
/// Tags order before names; tags are ordered numerically and names lexically.
///
/// Tags convert from `u8`, `u16` and `u32`. An unsuffixed integer literal defaults
/// to `i32`, which does not convert, so tag literals carry a suffix:
///
/// ```
/// use image_metadata::prelude::*;
///
/// let entry = MetadataEntry::new(271u16, "Canon");
/// assert_eq!(entry.identifier(), &Identifier::Tag(271));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Identifier {
    Tag(u32),
    Name(String),
}

impl Identifier {
    #[inline]
    pub fn as_tag(&self) -> Option<u32> {
        match self {
            Identifier::Tag(tag) => Some(*tag),
            Identifier::Name(_) => None,
        }
    }

    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Identifier::Name(name) => Some(name),
            Identifier::Tag(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Tag(tag) => write!(f, "{}", tag),
            Identifier::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<u8> for Identifier {
    fn from(tag: u8) -> Self {
        Identifier::Tag(tag as u32)
    }
}

impl From<u16> for Identifier {
    fn from(tag: u16) -> Self {
        Identifier::Tag(tag as u32)
    }
}

impl From<u32> for Identifier {
    fn from(tag: u32) -> Self {
        Identifier::Tag(tag)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl FromStr for Identifier {
    type Err = Infallible;

    /// Canonical decimal numbers (no sign, no leading zero) that fit in a `u32` parse
    /// to a tag, so a parsed identifier displays as the text it came from.
    /// Any other text, the empty string included, is a name, as with `From<&str>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if canonical {
            if let Ok(tag) = s.parse::<u32>() {
                return Ok(Identifier::Tag(tag));
            }
        }
        Ok(Identifier::Name(s.to_owned()))
    }
}
