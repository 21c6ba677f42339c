use crate::render::{Presenter, RenderRequest};

/// Presents the request as its bare URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlPresenter;

impl Presenter for UrlPresenter {
    fn present(&self, request: &RenderRequest) -> String {
        request.to_url()
    }
}
