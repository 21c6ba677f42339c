use indexmap::IndexMap;
use tracing::trace;

use crate::core::Binding;
use crate::error::{BuildResult, GraphiteError};

use super::ChartBuilder;

impl ChartBuilder {
    /// Binds `name` for later `{name}` interpolation.
    pub fn bind(&mut self, name: impl Into<String>, binding: impl Into<Binding>) {
        let name = name.into();
        trace!(binding = %name, "bind value");
        self.bindings.insert(name, binding.into());
    }

    #[must_use]
    pub fn bindings(&self) -> &IndexMap<String, Binding> {
        &self.bindings
    }

    /// Looks up a dot-separated path, e.g. `hosts.web`.
    #[must_use]
    pub fn binding(&self, path: &str) -> Option<&Binding> {
        let mut segments = path.split('.');
        let root = self.bindings.get(segments.next()?)?;
        root.lookup(segments)
    }

    /// Replaces every `{path}` in `template` with its bound scalar.
    ///
    /// An unmatched `{` is copied through. A placeholder naming a missing
    /// binding or a nested map fails with `UnknownBinding`.
    pub fn interpolate(&self, template: &str) -> BuildResult<String> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            output.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                output.push_str(&rest[open..]);
                return Ok(output);
            };
            let path = &after[..close];
            let value = self
                .binding(path)
                .and_then(Binding::as_scalar)
                .ok_or_else(|| GraphiteError::UnknownBinding(path.to_owned()))?;
            output.push_str(&value.to_string());
            rest = &after[close + 1..];
        }
        output.push_str(rest);
        Ok(output)
    }
}
