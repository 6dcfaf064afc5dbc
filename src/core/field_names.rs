use std::collections::HashMap;

use lazy_static::lazy_static;

use super::identifier::Identifier;

lazy_static! {
    /// TIFF baseline and EXIF tags.
    static ref EXIF_TAGS: HashMap<u32, &'static str> = [
        (254, "NewSubfileType"),
        (256, "ImageWidth"),
        (257, "ImageLength"),
        (258, "BitsPerSample"),
        (259, "Compression"),
        (262, "PhotometricInterpretation"),
        (270, "ImageDescription"),
        (271, "Make"),
        (272, "Model"),
        (273, "StripOffsets"),
        (274, "Orientation"),
        (277, "SamplesPerPixel"),
        (278, "RowsPerStrip"),
        (279, "StripByteCounts"),
        (282, "XResolution"),
        (283, "YResolution"),
        (284, "PlanarConfiguration"),
        (296, "ResolutionUnit"),
        (305, "Software"),
        (306, "DateTime"),
        (315, "Artist"),
        (33432, "Copyright"),
        (33434, "ExposureTime"),
        (33437, "FNumber"),
        (34665, "ExifIFD"),
        (34853, "GPSInfo"),
        (34855, "ISOSpeedRatings"),
        (36864, "ExifVersion"),
        (36867, "DateTimeOriginal"),
        (36868, "DateTimeDigitized"),
        (37377, "ShutterSpeedValue"),
        (37378, "ApertureValue"),
        (37386, "FocalLength"),
        (37500, "MakerNote"),
        (37510, "UserComment"),
        (40960, "FlashpixVersion"),
        (40961, "ColorSpace"),
        (40962, "PixelXDimension"),
        (40963, "PixelYDimension"),
        (40965, "InteroperabilityIFD"),
    ].into_iter().collect();

    /// IPTC IIM application record (record 2) datasets, keyed `record << 8 | dataset`.
    static ref IPTC_TAGS: HashMap<u32, &'static str> = [
        (0x0200, "RecordVersion"),
        (0x0205, "ObjectName"),
        (0x020f, "Category"),
        (0x0214, "SupplementalCategories"),
        (0x0219, "Keywords"),
        (0x0228, "SpecialInstructions"),
        (0x0237, "DateCreated"),
        (0x023c, "TimeCreated"),
        (0x0250, "By-line"),
        (0x0255, "By-lineTitle"),
        (0x025a, "City"),
        (0x025f, "Province/State"),
        (0x0265, "Country/PrimaryLocationName"),
        (0x0269, "Headline"),
        (0x026e, "Credit"),
        (0x0273, "Source"),
        (0x0274, "CopyrightNotice"),
        (0x0278, "Caption/Abstract"),
        (0x027a, "Writer/Editor"),
    ].into_iter().collect();
}

/// Resolves the human readable field name of an identifier.
#[enum_dispatch::enum_dispatch]
pub trait FieldNaming {
    /// returns `None` when the identifier is unknown to the scheme.
    fn field_name(&self, identifier: &Identifier) -> Option<&'static str>;
}

/// The naming schemes known to the crate.
#[enum_dispatch::enum_dispatch(FieldNaming)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldNames {
    Unnamed,
    Exif,
    Iptc,
}

/// Names nothing. Entries built with it report no field name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unnamed;

impl FieldNaming for Unnamed {
    fn field_name(&self, _identifier: &Identifier) -> Option<&'static str> {
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exif;

impl FieldNaming for Exif {
    fn field_name(&self, identifier: &Identifier) -> Option<&'static str> {
        lookup(&EXIF_TAGS, identifier)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Iptc;

impl FieldNaming for Iptc {
    fn field_name(&self, identifier: &Identifier) -> Option<&'static str> {
        lookup(&IPTC_TAGS, identifier)
    }
}

fn lookup(table: &HashMap<u32, &'static str>, identifier: &Identifier) -> Option<&'static str> {
    let name = identifier.as_tag().and_then(|tag| table.get(&tag).copied());
    if name.is_none() {
        tracing::trace!(%identifier, "no field name");
    }
    name
}
