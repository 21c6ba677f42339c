use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Scalar;

/// Caller-side data used to fill `{path}` placeholders before building
/// expressions. Bindings are never serialized into the render URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Binding {
    Value(Scalar),
    Map(IndexMap<String, Binding>),
}

impl Binding {
    #[must_use]
    pub fn value(value: impl Into<Scalar>) -> Self {
        Self::Value(value.into())
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Binding>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Value(scalar) => Some(scalar),
            Self::Map(_) => None,
        }
    }

    /// Walks nested maps along `segments`. An empty path returns `self`.
    #[must_use]
    pub fn lookup<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Option<&Binding> {
        let mut current = self;
        for segment in segments {
            match current {
                Self::Map(entries) => current = entries.get(segment)?,
                Self::Value(_) => return None,
            }
        }
        Some(current)
    }
}

macro_rules! binding_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Binding {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

binding_from_scalar!(Scalar, bool, i32, i64, u32, f64, String, &str, &String);
