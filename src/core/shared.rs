use core::fmt;
use std::hash::{Hash, Hasher};

use super::value::{Array, ElementType, Rational, Scalar};

/// Sequences with at least this many values are summarized instead of listed.
pub const MAX_LISTED_VALUES: usize = 16;

pub trait ConfigType {
    fn default() -> Self;
}

/// Controls how entry values are rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// sequences with `max_listed_values` or more values are rendered as
    /// `"<type name> (<count>)"`.
    pub max_listed_values: usize,

    /// text used for an absent value.
    pub null_text: &'static str,
}

impl ConfigType for Config {
    fn default() -> Self {
        Config {
            max_listed_values: MAX_LISTED_VALUES,
            null_text: "null",
        }
    }
}

/// Equality and hashing on the exact representation of a value.
/// Floats compare by bit pattern, which makes `NaN == NaN` and `0.0 != -0.0`,
/// but keeps `Eq` and `Hash` lawful for every element type.
pub trait BitEq {
    fn bit_eq(&self, other: &Self) -> bool;
    fn bit_hash<H: Hasher>(&self, state: &mut H);
}

macro_rules! impl_bit_eq {
    (exact: $($t:ty),*) => {
        $(
            impl BitEq for $t {
                #[inline]
                fn bit_eq(&self, other: &Self) -> bool {
                    self == other
                }
                #[inline]
                fn bit_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state)
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl BitEq for $t {
                #[inline]
                fn bit_eq(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }
                #[inline]
                fn bit_hash<H: Hasher>(&self, state: &mut H) {
                    self.to_bits().hash(state)
                }
            }
        )*
    };
}

impl_bit_eq!(exact: bool, i8, u8, i16, u16, i32, u32, i64, u64, char, String, Rational);
impl_bit_eq!(float: f32, f64);

/// The natural string form of a value as shown in entry listings.
/// Floats always keep a fractional part, so `2.0` never reads as the integer `2`.
pub trait Natural {
    fn natural(&self) -> String;
}

macro_rules! impl_natural {
    (display: $($t:ty),*) => {
        $(
            impl Natural for $t {
                #[inline]
                fn natural(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl Natural for $t {
                #[inline]
                fn natural(&self) -> String {
                    format!("{:?}", self)
                }
            }
        )*
    };
}

impl_natural!(display: bool, i8, u8, i16, u16, i32, u32, i64, u64, char, String, Rational);
impl_natural!(float: f32, f64);

/// A type that can be stored in a `Value`, either alone or as the element of a sequence.
pub trait ElementValue: BitEq + Natural + Clone + fmt::Display + fmt::Debug {
    fn get_dyn() -> ElementType;
    fn into_scalar(self) -> Scalar;
    fn into_array(data: Vec<Self>) -> Array;
}
