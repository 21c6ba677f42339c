use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::BASE_URL_KEY;
use crate::core::{Expression, ParamValue, Scalar, form_escape};
use crate::error::{BuildResult, GraphiteError};

/// Query key under which every target expression is emitted.
pub const TARGET_KEY: &str = "target";

/// One escaped `key=value` query pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPair {
    pub key: String,
    pub value: String,
}

impl QueryPair {
    /// Builds a pair with both sides form-escaped.
    #[must_use]
    pub fn encoded(key: &str, value: &str) -> Self {
        Self {
            key: form_escape(key),
            value: form_escape(value),
        }
    }
}

/// Structured description of one render call: everything needed to produce
/// the URL, already ordered and escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub base_url: String,
    pub parameters: Vec<QueryPair>,
    /// Emitted verbatim after all parameters.
    pub targets: Vec<Expression>,
}

impl RenderRequest {
    /// Assembles a request from session state without modifying it.
    ///
    /// `base_url` is taken out of `parameters` and used as the URL prefix;
    /// every other parameter is emitted in insertion order, list values as
    /// one pair per element.
    pub fn from_session(
        parameters: &IndexMap<String, ParamValue>,
        targets: &[Expression],
    ) -> BuildResult<Self> {
        if targets.is_empty() {
            return Err(GraphiteError::NoTargetsDefined);
        }

        let base_url = match parameters.get(BASE_URL_KEY) {
            None => return Err(GraphiteError::MissingBaseUrl),
            Some(ParamValue::Scalar(Scalar::Text(url))) if url.is_empty() => {
                return Err(GraphiteError::MissingBaseUrl);
            }
            Some(ParamValue::Scalar(scalar)) => scalar.to_string(),
            Some(ParamValue::List(_)) => {
                return Err(GraphiteError::InvalidData(
                    "base_url must be a single value".to_owned(),
                ));
            }
        };

        let pairs = parameters
            .iter()
            .filter(|(key, _)| key.as_str() != BASE_URL_KEY)
            .flat_map(|(key, value)| {
                value
                    .items()
                    .map(move |item| QueryPair::encoded(key, &item.to_string()))
            })
            .collect::<Vec<_>>();

        trace!(
            parameters = pairs.len(),
            targets = targets.len(),
            "assembled render request"
        );

        Ok(Self {
            base_url,
            parameters: pairs,
            targets: targets.to_vec(),
        })
    }

    /// Escaped value of the first pair with `key`.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    /// `<base_url>?<params...>&target=<expr>...`
    #[must_use]
    pub fn to_url(&self) -> String {
        let query = self
            .parameters
            .iter()
            .map(|pair| format!("{}={}", pair.key, pair.value))
            .chain(
                self.targets
                    .iter()
                    .map(|target| format!("{TARGET_KEY}={target}")),
            )
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.base_url)
    }
}
