use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

pub struct PageApi;

#[OpenApi]
impl PageApi {
    /// Landing page
    ///
    /// Serves the single-page form that calls the text endpoints.
    #[oai(path = "/", method = "get", tag = "ApiTags::Pages")]
    async fn index(&self) -> Html<String> {
        Html(INDEX_HTML.to_string())
    }
}
