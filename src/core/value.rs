use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Expression, datetime_to_graphite_time};

/// Single parameter or argument token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            // Integral floats keep their fractional digit: `2.0`, not `2`.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i32 => Integer,
    i64 => Integer,
    u32 => Integer,
    f32 => Float,
    f64 => Float,
    String => Text,
    &str => Text,
    &String => Text,
}

impl From<Expression> for Scalar {
    fn from(value: Expression) -> Self {
        Self::Text(value.into_string())
    }
}

impl From<&Expression> for Scalar {
    fn from(value: &Expression) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Text(datetime_to_graphite_time(value))
    }
}

/// Value of a chart parameter: one scalar, or an ordered list emitted as
/// repeated `key=value` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl ParamValue {
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::List(_) => None,
        }
    }

    /// Elements in emission order; a scalar yields itself once.
    pub fn items(&self) -> impl Iterator<Item = &Scalar> {
        let items: &[Scalar] = match self {
            Self::Scalar(scalar) => std::slice::from_ref(scalar),
            Self::List(items) => items,
        };
        items.iter()
    }
}

/// Lists render comma-joined, which is how they are flattened into call
/// arguments.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

macro_rules! param_value_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )*
    };
}

param_value_from_scalar!(
    bool,
    i32,
    i64,
    u32,
    f32,
    f64,
    String,
    &str,
    &String,
    Expression,
    &Expression,
    DateTime<Utc>,
);

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
