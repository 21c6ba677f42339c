use crate::error::BuildResult;
use crate::render::{Presenter, RenderRequest};

use super::ChartBuilder;

impl ChartBuilder {
    /// Assembles the structured request.
    ///
    /// Fails with `NoTargetsDefined` when no target was added, then with
    /// `MissingBaseUrl` when no endpoint was set. Session state is left as
    /// is, so repeated calls give identical results.
    pub fn request(&self) -> BuildResult<RenderRequest> {
        RenderRequest::from_session(&self.parameters, &self.targets)
    }

    /// Renders through the session's configured template.
    pub fn render(&self) -> BuildResult<String> {
        self.render_with(&self.template)
    }

    /// Renders through a caller-supplied presenter.
    pub fn render_with<P: Presenter + ?Sized>(&self, presenter: &P) -> BuildResult<String> {
        Ok(presenter.present(&self.request()?))
    }
}
