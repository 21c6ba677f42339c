use indexmap::IndexMap;
use serde_json::Value;

use crate::core::{ParamValue, Scalar};
use crate::error::{BuildResult, GraphiteError};

/// Parameters seeding a new session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InitialParameters {
    #[default]
    Empty,
    Mapping(IndexMap<String, ParamValue>),
    Pairs(Vec<(String, ParamValue)>),
}

impl InitialParameters {
    /// Reads untyped input: `null`, an object of scalar/array values, or an
    /// array of `[key, value]` pairs.
    pub fn from_json_value(value: &Value) -> BuildResult<Self> {
        match value {
            Value::Null => Ok(Self::Empty),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), json_to_param_value(key, value)?)))
                .collect::<BuildResult<IndexMap<_, _>>>()
                .map(Self::Mapping),
            Value::Array(items) => items
                .iter()
                .map(json_to_pair)
                .collect::<BuildResult<Vec<_>>>()
                .map(Self::Pairs),
            other => Err(GraphiteError::InvalidConstructionInput(format!(
                "expected a mapping or a sequence of pairs, got {}",
                json_kind(other)
            ))),
        }
    }

    pub(super) fn into_entries(self) -> Vec<(String, ParamValue)> {
        match self {
            Self::Empty => Vec::new(),
            Self::Mapping(entries) => entries.into_iter().collect(),
            Self::Pairs(pairs) => pairs,
        }
    }
}

impl From<IndexMap<String, ParamValue>> for InitialParameters {
    fn from(entries: IndexMap<String, ParamValue>) -> Self {
        Self::Mapping(entries)
    }
}

impl<K, V> From<Vec<(K, V)>> for InitialParameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for InitialParameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn json_to_pair(item: &Value) -> BuildResult<(String, ParamValue)> {
    match item.as_array().map(Vec::as_slice) {
        Some([Value::String(key), value]) => Ok((key.clone(), json_to_param_value(key, value)?)),
        _ => Err(GraphiteError::InvalidConstructionInput(format!(
            "expected a [key, value] pair, got {item}"
        ))),
    }
}

fn json_to_param_value(key: &str, value: &Value) -> BuildResult<ParamValue> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| json_to_scalar(key, item))
            .collect::<BuildResult<Vec<_>>>()
            .map(ParamValue::List),
        other => json_to_scalar(key, other).map(ParamValue::Scalar),
    }
}

fn json_to_scalar(key: &str, value: &Value) -> BuildResult<Scalar> {
    match value {
        Value::Bool(flag) => Ok(Scalar::Bool(*flag)),
        Value::String(text) => Ok(Scalar::Text(text.clone())),
        Value::Number(number) => Ok(match (number.as_i64(), number.as_f64()) {
            (Some(integer), _) => Scalar::Integer(integer),
            (None, Some(float)) => Scalar::Float(float),
            (None, None) => Scalar::Text(number.to_string()),
        }),
        other => Err(GraphiteError::InvalidConstructionInput(format!(
            "parameter `{key}` has unsupported {} value",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn object_keeps_key_order() {
        let initial = InitialParameters::from_json_value(&json!({
            "base_url": "http://h/render",
            "width": 800,
            "colorList": ["red", "blue"],
        }))
        .expect("mapping");

        let entries = initial.into_entries();
        let keys = entries.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, ["base_url", "width", "colorList"]);
        assert_eq!(entries[1].1, ParamValue::from(800));
        assert_eq!(entries[2].1, ParamValue::from(vec!["red", "blue"]));
    }

    #[test]
    fn array_of_pairs_is_accepted() {
        let initial =
            InitialParameters::from_json_value(&json!([["width", 800], ["height", 200]]))
                .expect("pairs");
        assert_eq!(
            initial,
            InitialParameters::Pairs(vec![
                ("width".to_owned(), ParamValue::from(800)),
                ("height".to_owned(), ParamValue::from(200)),
            ])
        );
    }

    #[test]
    fn unsupported_shapes_are_rejected() {
        for input in [
            json!("http://h/render"),
            json!(42),
            json!(true),
            json!([["width"]]),
            json!([[1, 2]]),
            json!({ "nested": { "a": 1 } }),
            json!({ "listOfLists": [[1]] }),
            json!({ "missing": null }),
        ] {
            let err = InitialParameters::from_json_value(&input).expect_err("must fail");
            assert!(
                matches!(err, GraphiteError::InvalidConstructionInput(_)),
                "unexpected error for {input}: {err}"
            );
        }
    }
}
