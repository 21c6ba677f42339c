use indexmap::IndexMap;

use crate::core::{Binding, Expression, ParamValue};
use crate::render::OutputTemplate;

/// Parameter holding the render endpoint. It prefixes the URL instead of
/// being emitted as a query pair.
pub const BASE_URL_KEY: &str = "base_url";

/// Session describing one chart.
///
/// `ChartBuilder` accumulates query parameters and target expressions and
/// turns them into a render URL. Parameters keep insertion order so the
/// output is reproducible; targets keep call order and may repeat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartBuilder {
    pub(super) parameters: IndexMap<String, ParamValue>,
    pub(super) targets: Vec<Expression>,
    pub(super) bindings: IndexMap<String, Binding>,
    pub(super) template: OutputTemplate,
}
