use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ParamValue, is_bare_identifier};
use crate::error::{BuildResult, GraphiteError};
use crate::render::{OutputTemplate, TARGET_KEY};

use super::BASE_URL_KEY;

/// Public builder bootstrap configuration.
///
/// Serializable so host applications can keep endpoint and chart defaults in
/// a config file instead of repeating them per chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartBuilderConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub template: OutputTemplate,
    /// Applied to every session before its own parameters.
    #[serde(default)]
    pub default_parameters: IndexMap<String, ParamValue>,
}

impl ChartBuilderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: OutputTemplate) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn with_default_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.default_parameters.insert(name.into(), value.into());
        self
    }

    pub fn validate(&self) -> BuildResult<()> {
        if self.base_url.as_deref() == Some("") {
            return Err(GraphiteError::InvalidData(
                "config base_url must not be empty".to_owned(),
            ));
        }
        for name in self.default_parameters.keys() {
            if !is_bare_identifier(name) {
                return Err(GraphiteError::InvalidCallName(name.clone()));
            }
            if name == TARGET_KEY {
                return Err(GraphiteError::ReservedParameterName(name.clone()));
            }
            if name == BASE_URL_KEY {
                return Err(GraphiteError::InvalidData(
                    "base_url belongs in the base_url field, not default_parameters".to_owned(),
                ));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> BuildResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            GraphiteError::InvalidData(format!("failed to parse builder config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> BuildResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GraphiteError::InvalidData(format!("failed to serialize builder config json: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_fields_default_when_absent() {
        let config = ChartBuilderConfig::from_json_str("{}").expect("empty config");
        assert_eq!(config, ChartBuilderConfig::default());
        assert_eq!(config.template, OutputTemplate::Url);
    }

    #[test]
    fn json_round_trip_keeps_default_parameter_order() {
        let config = ChartBuilderConfig::new()
            .with_base_url("http://h/render")
            .with_template(OutputTemplate::ImgTag)
            .with_default_parameter("width", 800)
            .with_default_parameter("height", 200);

        let json = config.to_json_pretty().expect("serialize");
        assert!(json.contains("\"img_tag\""));
        let parsed = ChartBuilderConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
        let keys = parsed.default_parameters.keys().collect::<Vec<_>>();
        assert_eq!(keys, ["width", "height"]);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let err = ChartBuilderConfig::new()
            .with_base_url("")
            .validate()
            .expect_err("empty url");
        assert!(format!("{err}").contains("base_url"));

        let err = ChartBuilderConfig::new()
            .with_default_parameter("line-width", 2)
            .validate()
            .expect_err("non-identifier");
        assert_eq!(err, GraphiteError::InvalidCallName("line-width".to_owned()));

        let err = ChartBuilderConfig::new()
            .with_default_parameter("target", "a.b")
            .validate()
            .expect_err("reserved name");
        assert_eq!(err, GraphiteError::ReservedParameterName("target".to_owned()));

        let err = ChartBuilderConfig::from_json_str("{\"template\": \"pdf\"}").expect_err("bad template");
        assert!(format!("{err}").contains("builder config json"));
    }
}
