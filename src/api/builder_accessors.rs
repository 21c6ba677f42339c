use indexmap::IndexMap;

use crate::core::{Expression, ParamValue};
use crate::render::OutputTemplate;

use super::{BASE_URL_KEY, ChartBuilder};

impl ChartBuilder {
    #[must_use]
    pub fn parameters(&self) -> &IndexMap<String, ParamValue> {
        &self.parameters
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(name)
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&ParamValue> {
        self.parameters.get(BASE_URL_KEY)
    }

    #[must_use]
    pub fn targets(&self) -> &[Expression] {
        &self.targets
    }

    #[must_use]
    pub fn template(&self) -> OutputTemplate {
        self.template
    }

    pub fn set_template(&mut self, template: OutputTemplate) {
        self.template = template;
    }
}
