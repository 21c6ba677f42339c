mod img_tag_presenter;
mod json_contract;
mod request;
mod url_presenter;

pub use img_tag_presenter::ImgTagPresenter;
pub use json_contract::{RENDER_REQUEST_SCHEMA_VERSION, VersionedRenderRequest};
pub use request::{QueryPair, RenderRequest, TARGET_KEY};
pub use url_presenter::UrlPresenter;

use serde::{Deserialize, Serialize};

/// Contract implemented by any output template.
///
/// Presenters receive a fully assembled, already escaped `RenderRequest` so
/// wrapping stays a thin layer over the URL.
pub trait Presenter {
    fn present(&self, request: &RenderRequest) -> String;
}

/// Built-in presenters selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTemplate {
    /// The bare render URL.
    #[default]
    Url,
    /// An HTML `<img/>` tag pointing at the render URL.
    ImgTag,
}

impl Presenter for OutputTemplate {
    fn present(&self, request: &RenderRequest) -> String {
        match self {
            Self::Url => UrlPresenter.present(request),
            Self::ImgTag => ImgTagPresenter.present(request),
        }
    }
}
