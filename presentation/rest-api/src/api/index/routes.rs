use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

const INDEX_PAGE: &str = include_str!("../../../static/index.html");

/// Serves the catalog administration page
pub struct IndexApi;

#[OpenApi]
impl IndexApi {
    /// Catalog administration page
    #[oai(path = "/", method = "get", tag = "ApiTags::Index")]
    async fn index(&self) -> Html<&'static str> {
        Html(INDEX_PAGE)
    }
}
