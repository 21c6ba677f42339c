use std::fmt;

use serde::{Deserialize, Serialize};

/// Textual form of a (possibly nested) series function call,
/// e.g. `alias(color(sumSeries(a.b.*),'red'),'Steal')`.
///
/// Expressions are produced once and never edited; nesting happens by
/// passing one expression as an argument of the next call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression(String);

impl Expression {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Expression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Expression {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&Expression> for Expression {
    fn from(value: &Expression) -> Self {
        value.clone()
    }
}
