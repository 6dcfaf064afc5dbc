mod rational;

pub use rational::Rational;

use core::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::shared::{BitEq, Config, ConfigType, ElementValue, Natural};

/// Defines the element types together with the scalar and sequence variants
/// that hold them, so that every variant list stays in the same order.
macro_rules! define_values {
    ($(($variant:ident, $t:ty, $name:literal, $array_name:literal)),* $(,)?) => {
        /// The runtime type of a scalar value or of the elements of a sequence.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ElementType {
            $($variant),*
        }

        impl ElementType {
            /// returns the short name of the type e.g. "u16" for `ElementType::U16`.
            pub fn name(self) -> &'static str {
                match self {
                    $(ElementType::$variant => $name),*
                }
            }

            /// returns the short name of a sequence of this type e.g. "u16[]".
            pub fn array_name(self) -> &'static str {
                match self {
                    $(ElementType::$variant => $array_name),*
                }
            }
        }

        /// A single value.
        #[derive(Debug, Clone, Serialize)]
        #[serde(untagged)]
        pub enum Scalar {
            $($variant($t)),*
        }

        /// A homogeneous ordered sequence of values.
        #[derive(Debug, Clone, Serialize)]
        #[serde(untagged)]
        pub enum Array {
            $($variant(Vec<$t>)),*
        }

        impl Scalar {
            pub fn element_type(&self) -> ElementType {
                match self {
                    $(Scalar::$variant(_) => ElementType::$variant),*
                }
            }
        }

        impl Array {
            pub fn element_type(&self) -> ElementType {
                match self {
                    $(Array::$variant(_) => ElementType::$variant),*
                }
            }

            /// The number of elements in the sequence.
            pub fn len(&self) -> usize {
                match self {
                    $(Array::$variant(data) => data.len()),*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// returns the element at `idx` as a scalar.
            pub fn get(&self, idx: usize) -> Option<Scalar> {
                match self {
                    $(Array::$variant(data) => data.get(idx).cloned().map(Scalar::$variant)),*
                }
            }

            /// The natural string form of every element, in order.
            pub fn elements(&self) -> Vec<String> {
                match self {
                    $(Array::$variant(data) => data.iter().map(Natural::natural).collect()),*
                }
            }
        }

        impl PartialEq for Scalar {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Scalar::$variant(a), Scalar::$variant(b)) => a.bit_eq(b),)*
                    _ => false,
                }
            }
        }

        impl Hash for Scalar {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.element_type().hash(state);
                match self {
                    $(Scalar::$variant(v) => v.bit_hash(state)),*
                }
            }
        }

        impl PartialEq for Array {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Array::$variant(a), Array::$variant(b)) => {
                        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.bit_eq(y))
                    },)*
                    _ => false,
                }
            }
        }

        impl Hash for Array {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.element_type().hash(state);
                self.len().hash(state);
                match self {
                    $(Array::$variant(data) => data.iter().for_each(|v| v.bit_hash(state))),*
                }
            }
        }

        impl fmt::Display for Scalar {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Scalar::$variant(v) => f.write_str(&v.natural())),*
                }
            }
        }

        $(
            impl ElementValue for $t {
                fn get_dyn() -> ElementType {
                    ElementType::$variant
                }

                fn into_scalar(self) -> Scalar {
                    Scalar::$variant(self)
                }

                fn into_array(data: Vec<Self>) -> Array {
                    Array::$variant(data)
                }
            }

            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::scalar(value)
                }
            }

            impl From<Vec<$t>> for Value {
                fn from(data: Vec<$t>) -> Self {
                    Value::array(data)
                }
            }

            impl From<&[$t]> for Value {
                fn from(data: &[$t]) -> Self {
                    Value::array(data.to_vec())
                }
            }
        )*
    };
}

define_values!(
    (Bool, bool, "bool", "bool[]"),
    (I8, i8, "i8", "i8[]"),
    (U8, u8, "u8", "u8[]"),
    (I16, i16, "i16", "i16[]"),
    (U16, u16, "u16", "u16[]"),
    (I32, i32, "i32", "i32[]"),
    (U32, u32, "u32", "u32[]"),
    (I64, i64, "i64", "i64[]"),
    (U64, u64, "u64", "u64[]"),
    (F32, f32, "f32", "f32[]"),
    (F64, f64, "f64", "f64[]"),
    (Char, char, "char", "char[]"),
    (String, String, "String", "String[]"),
    (Rational, Rational, "Rational", "Rational[]"),
);

impl Eq for Scalar {}
impl Eq for Array {}

impl fmt::Display for Array {
    /// Chars spell out the text they hold, everything else is listed as `[a, b, c]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Array::Char(chars) => write!(f, "{}", chars.iter().collect::<String>()),
            _ => write!(f, "[{}]", self.elements().join(", ")),
        }
    }
}

/// The payload of a metadata entry: a scalar or a homogeneous sequence.
/// Note that an absent value is not a `Value`; entries hold `Option<Value>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    Array(Array),
}

impl Value {
    pub fn scalar<T: ElementValue>(value: T) -> Self {
        Value::Scalar(value.into_scalar())
    }

    pub fn array<T: ElementValue>(data: Vec<T>) -> Self {
        Value::Array(T::into_array(data))
    }

    /// 1 for a scalar, the number of elements for a sequence.
    pub fn count(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Array(array) => array.len(),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Value::Scalar(scalar) => scalar.element_type(),
            Value::Array(array) => array.element_type(),
        }
    }

    /// returns true if the value, or every element of it, is a `T`.
    pub fn is<T: ElementValue>(&self) -> bool {
        self.element_type() == T::get_dyn()
    }

    /// The short name of the runtime type e.g. "String" or "u16[]".
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(scalar) => scalar.element_type().name(),
            Value::Array(array) => array.element_type().array_name(),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            Value::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            Value::Scalar(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Renders the value for display.
    /// A scalar, or a sequence holding exactly one element, renders in its natural form.
    /// Shorter sequences are listed in full, and sequences of `cfg.max_listed_values`
    /// or more elements render as their type name followed by the element count.
    pub fn render(&self, cfg: &Config) -> String {
        let array = match self {
            Value::Scalar(scalar) => return scalar.to_string(),
            Value::Array(array) => array,
        };

        let count = array.len();
        if count == 1 {
            array.elements().concat()
        } else if count >= cfg.max_listed_values {
            format!("{} ({})", self.type_name(), count)
        } else {
            array.to_string()
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&Config::default()))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::scalar(value.to_owned())
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_count() {
        assert_eq!(Value::from("foo").count(), 1);
        assert_eq!(Value::from(42u32).count(), 1);
        assert_eq!(Value::from(vec![1u16, 2, 3]).count(), 3);
        assert_eq!(Value::from(Vec::<u8>::new()).count(), 0);
    }

    #[test]
    fn test_render_scalar() {
        let cfg = Config::default();
        assert_eq!(Value::from("foo").render(&cfg), "foo");
        assert_eq!(Value::from(true).render(&cfg), "true");
        assert_eq!(Value::from(-3i16).render(&cfg), "-3");
        assert_eq!(Value::from(Rational::new(1, 250)).render(&cfg), "1/250");
    }

    #[test]
    fn test_render_short_array() {
        let cfg = Config::default();
        assert_eq!(Value::from(vec![1i32, 2, 3]).render(&cfg), "[1, 2, 3]");
        assert_eq!(Value::from(vec![true, false]).render(&cfg), "[true, false]");
        assert_eq!(
            Value::from(vec![String::from("a"), String::from("b")]).render(&cfg),
            "[a, b]"
        );
        assert_eq!(Value::from(vec![1.5f64, 2.0]).render(&cfg), "[1.5, 2.0]");
    }

    #[test]
    fn test_render_floats_keep_fraction() {
        let cfg = Config::default();
        assert_eq!(Value::from(3.0f32).render(&cfg), "3.0");
        assert_eq!(Value::from(vec![1.0f64, 2.0]).render(&cfg), "[1.0, 2.0]");
        assert_eq!(Value::from(vec![0.5f32]).render(&cfg), "0.5");
    }

    #[test]
    fn test_render_chars() {
        let cfg = Config::default();
        assert_eq!(Value::from(vec!['a', 'b', 'c']).render(&cfg), "abc");
        assert_eq!(Value::from(vec!['x']).render(&cfg), "x");
        assert_eq!(Value::from(Vec::<char>::new()).render(&cfg), "");
    }

    #[test]
    fn test_render_single_and_empty() {
        let cfg = Config::default();
        assert_eq!(Value::from(vec![7u8]).render(&cfg), "7");
        assert_eq!(Value::from(Vec::<u8>::new()).render(&cfg), "[]");
    }

    #[test]
    fn test_render_long_array() {
        let cfg = Config::default();
        let data = (0..20).collect::<Vec<u16>>();
        assert_eq!(Value::from(data).render(&cfg), "u16[] (20)");

        let data = (0..15).collect::<Vec<u16>>();
        assert!(Value::from(data).render(&cfg).starts_with("[0, 1, 2"));

        let data = (0..16).collect::<Vec<u16>>();
        assert_eq!(Value::from(data).render(&cfg), "u16[] (16)");
    }

    #[test]
    fn test_render_custom_limit() {
        let cfg = Config { max_listed_values: 3, ..Config::default() };
        assert_eq!(Value::from(vec![1u8, 2]).render(&cfg), "[1, 2]");
        assert_eq!(Value::from(vec![1u8, 2, 3]).render(&cfg), "u8[] (3)");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::from("Canon").type_name(), "String");
        assert_eq!(Value::from(1u16).type_name(), "u16");
        assert_eq!(Value::from(vec![Rational::new(1, 2)]).type_name(), "Rational[]");
        assert_eq!(Value::from(&[1.0f32, 2.0][..]).type_name(), "f32[]");
    }

    #[test]
    fn test_is() {
        let value = Value::from(vec![1u32, 2]);
        assert!(value.is::<u32>());
        assert!(!value.is::<u16>());
        assert!(value.is_array());
        assert!(Value::from('c').is::<char>());
    }

    #[test]
    fn test_equality_is_value_wise() {
        assert_eq!(Value::from(vec![1u8, 2, 3]), Value::from(vec![1u8, 2, 3]));
        assert_ne!(Value::from(vec![1u8, 2, 3]), Value::from(vec![1u8, 2]));
        assert_ne!(Value::from(1u8), Value::from(1u16));
        assert_ne!(Value::from(1u8), Value::from(vec![1u8]));
        assert_eq!(hash_of(&Value::from("foo")), hash_of(&Value::from("foo")));
    }

    #[test]
    fn test_float_equality_by_bits() {
        assert_eq!(Value::from(f32::NAN), Value::from(f32::NAN));
        assert_eq!(hash_of(&Value::from(f64::NAN)), hash_of(&Value::from(f64::NAN)));
        assert_ne!(Value::from(0.0f64), Value::from(-0.0f64));
    }

    #[test]
    fn test_array_get() {
        let array = Array::U16(vec![10, 20]);
        assert_eq!(array.get(1), Some(Scalar::U16(20)));
        assert_eq!(array.get(2), None);
    }

    #[test]
    fn test_accessors() {
        let value = Value::from("Exif IFD");
        assert_eq!(value.as_str(), Some("Exif IFD"));
        assert!(value.as_array().is_none());
        assert_eq!(value.as_scalar().map(Scalar::element_type), Some(ElementType::String));
    }
}
