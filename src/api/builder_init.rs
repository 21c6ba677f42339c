use serde_json::Value;
use tracing::debug;

use crate::core::is_bare_identifier;
use crate::error::{BuildResult, GraphiteError};
use crate::render::TARGET_KEY;

use super::{BASE_URL_KEY, ChartBuilder, ChartBuilderConfig, InitialParameters};

impl ChartBuilder {
    /// Creates an empty session presenting bare URLs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded from `config`.
    pub fn with_config(config: ChartBuilderConfig) -> BuildResult<Self> {
        config.validate()?;
        let mut builder = Self {
            template: config.template,
            ..Self::default()
        };
        if let Some(base_url) = config.base_url {
            builder.parameters.insert(BASE_URL_KEY.to_owned(), base_url.into());
        }
        builder.parameters.extend(config.default_parameters);
        Ok(builder)
    }

    /// Opens a session seeded with `initial`, then runs `block` against it.
    ///
    /// `block` receives the session explicitly; every call it makes is a
    /// method call on that session. Its first error aborts construction.
    pub fn open<F>(initial: impl Into<InitialParameters>, block: F) -> BuildResult<Self>
    where
        F: FnOnce(&mut ChartBuilder) -> BuildResult<()>,
    {
        let mut builder = Self::from_initial(initial)?;
        block(&mut builder)?;
        Ok(builder)
    }

    /// Opens a session seeded with `initial` and no construction block.
    pub fn from_initial(initial: impl Into<InitialParameters>) -> BuildResult<Self> {
        let mut builder = Self::new();
        builder.seed(initial.into())?;
        Ok(builder)
    }

    /// Same as [`ChartBuilder::open`] for untyped initial parameters.
    pub fn open_json<F>(initial: &Value, block: F) -> BuildResult<Self>
    where
        F: FnOnce(&mut ChartBuilder) -> BuildResult<()>,
    {
        Self::open(InitialParameters::from_json_value(initial)?, block)
    }

    /// Applies `initial` on top of the current parameters.
    pub fn seed(&mut self, initial: InitialParameters) -> BuildResult<()> {
        let entries = initial.into_entries();
        for (name, _) in &entries {
            if !is_bare_identifier(name) {
                return Err(GraphiteError::InvalidConstructionInput(format!(
                    "parameter name `{name}` is not a bare identifier"
                )));
            }
            if name == TARGET_KEY {
                return Err(GraphiteError::InvalidConstructionInput(
                    "targets cannot be seeded as parameters".to_owned(),
                ));
            }
        }
        debug!(count = entries.len(), "seed initial parameters");
        self.parameters.extend(entries);
        Ok(())
    }
}
