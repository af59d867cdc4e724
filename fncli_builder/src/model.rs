use thiserror::Error;

/// The declared type of a parameter, used to coerce its raw token.
///
/// A parameter without an annotation keeps its raw token as a [`Value::Str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// Keep the token as is.
    Str,
    /// Parse the token as a 64-bit signed integer.
    ///
    /// Tokens beyond the `i64` range are rejected, including for parameters of a wider unsigned Rust type (ex: `u64::MAX`).
    Int,
    /// Parse the token as a 64-bit float.
    Float,
    /// Parse the token as `true` or `false` (case-insensitive).
    ///
    /// A flag given without a value (ex: `--verbose`) is recorded as `True`, which coerces to `true`.
    Bool,
}

impl Annotation {
    /// The display name of this annotation (ex: `int`).
    pub fn name(&self) -> &'static str {
        match self {
            Annotation::Str => "str",
            Annotation::Int => "int",
            Annotation::Float => "float",
            Annotation::Bool => "bool",
        }
    }

    /// Coerce the raw `token` given for parameter `name` into a [`Value`].
    ///
    /// ### Example
    /// ```
    /// # use fncli_builder as fncli;
    /// use fncli::{Annotation, Value};
    ///
    /// assert_eq!(Annotation::Int.coerce("count", "12").unwrap(), Value::Int(12));
    /// assert_eq!(Annotation::Bool.coerce("verbose", "False").unwrap(), Value::Bool(false));
    /// assert!(Annotation::Bool.coerce("verbose", "maybe").is_err());
    /// ```
    pub fn coerce(&self, name: &str, token: &str) -> Result<Value, InvalidConversion> {
        let invalid = || InvalidConversion {
            name: name.to_string(),
            token: token.to_string(),
            annotation: self.name(),
        };

        match self {
            Annotation::Str => Ok(Value::Str(token.to_string())),
            Annotation::Int => token.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
            Annotation::Float => token.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
            Annotation::Bool => parse_bool(token).map(Value::Bool).ok_or_else(invalid),
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Only the literal words are accepted; any other non-empty string is rejected rather than treated as truthy.
fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// The raw token for a parameter could not be coerced into its annotation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cannot convert '{token}' to {annotation} for parameter '{name}'.")]
pub struct InvalidConversion {
    /// The parameter name.
    pub name: String,
    /// The offending token.
    pub token: String,
    /// The annotation name.
    pub annotation: &'static str,
}

/// A resolved argument value, or a parameter default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A float value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// The absence of a value (ex: a parameter defaulting to nothing).
    None,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::None => write!(f, "None"),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

macro_rules! value_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

value_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond the `i64` range saturate.
macro_rules! value_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

value_from_wide_integer!(u64, usize);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        let saturated = if value < 0 { i64::MIN } else { i64::MAX };
        Value::Int(i64::try_from(value).unwrap_or(saturated))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::None,
        }
    }
}

/// A [`Value`] could not be extracted as the requested Rust type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cannot extract {type_name} from '{value}'.")]
pub struct InvalidValue {
    value: String,
    type_name: &'static str,
}

impl InvalidValue {
    fn of<T>(value: &Value) -> Self {
        Self {
            value: value.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Behaviour to extract a typed Rust value from a resolved [`Value`].
///
/// Used by command handlers to turn their [`Arguments`](crate::Arguments) into function inputs.
pub trait FromValue: Sized {
    /// Extract `Self` from the value.
    fn from_value(value: &Value) -> Result<Self, InvalidValue>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, InvalidValue> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, InvalidValue> {
        match value {
            Value::Str(inner) => Ok(inner.clone()),
            Value::None => Err(InvalidValue::of::<Self>(value)),
            other => Ok(other.to_string()),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, InvalidValue> {
        match value {
            Value::Bool(inner) => Ok(*inner),
            Value::Str(inner) => parse_bool(inner).ok_or_else(|| InvalidValue::of::<Self>(value)),
            _ => Err(InvalidValue::of::<Self>(value)),
        }
    }
}

macro_rules! integer_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self, InvalidValue> {
                    match value {
                        Value::Int(inner) => {
                            <$t>::try_from(*inner).map_err(|_| InvalidValue::of::<Self>(value))
                        }
                        Value::Str(inner) => inner
                            .parse::<$t>()
                            .map_err(|_| InvalidValue::of::<Self>(value)),
                        _ => Err(InvalidValue::of::<Self>(value)),
                    }
                }
            }
        )*
    };
}

integer_from_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self, InvalidValue> {
                    match value {
                        Value::Float(inner) => Ok(*inner as $t),
                        Value::Int(inner) => Ok(*inner as $t),
                        Value::Str(inner) => inner
                            .parse::<$t>()
                            .map_err(|_| InvalidValue::of::<Self>(value)),
                        _ => Err(InvalidValue::of::<Self>(value)),
                    }
                }
            }
        )*
    };
}

float_from_value!(f32, f64);

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, InvalidValue> {
        match value {
            Value::None => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
