use crate::render::{Presenter, RenderRequest};

/// Parameters mirrored as `<img/>` attributes, in attribute order.
const SIZE_ATTRIBUTES: [&str; 2] = ["height", "width"];

/// Wraps the render URL in `<img src="..."/>`.
///
/// When `height` or `width` are among the query parameters they are also
/// written as tag attributes ahead of `src`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImgTagPresenter;

impl Presenter for ImgTagPresenter {
    fn present(&self, request: &RenderRequest) -> String {
        let mut tag = String::from("<img ");
        for attribute in SIZE_ATTRIBUTES {
            if let Some(value) = request.parameter(attribute) {
                tag.push_str(&format!("{attribute}=\"{value}\" "));
            }
        }
        tag.push_str(&format!("src=\"{}\"/>", request.to_url()));
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Expression;
    use crate::render::QueryPair;

    fn request(parameters: Vec<QueryPair>) -> RenderRequest {
        RenderRequest {
            base_url: "http://localhost/render".to_owned(),
            parameters,
            targets: vec![Expression::new("a.b.c")],
        }
    }

    #[test]
    fn plain_tag_without_size_parameters() {
        let tag = ImgTagPresenter.present(&request(vec![QueryPair::encoded("format", "svg")]));
        assert_eq!(
            tag,
            "<img src=\"http://localhost/render?format=svg&target=a.b.c\"/>"
        );
    }

    #[test]
    fn size_parameters_become_attributes_height_first() {
        let tag = ImgTagPresenter.present(&request(vec![
            QueryPair::encoded("width", "800"),
            QueryPair::encoded("height", "200"),
        ]));
        assert_eq!(
            tag,
            "<img height=\"200\" width=\"800\" src=\"http://localhost/render?width=800&height=200&target=a.b.c\"/>"
        );
    }
}
